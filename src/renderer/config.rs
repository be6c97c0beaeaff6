//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Padding around the laid out content, in logical units
    pub padding: i32,

    /// Whether to include XML declaration and standalone attributes
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "fl-" for "fl-fill")
    pub class_prefix: Option<String>,

    /// Color painted behind everything, if any
    pub background: Option<String>,

    /// Physical pixels per logical unit
    pub content_scale: f32,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            padding: 0,
            standalone: true,
            pretty_print: true,
            class_prefix: Some("fl-".to_string()),
            background: None,
            content_scale: 1.0,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the padding
    pub fn with_padding(mut self, padding: i32) -> Self {
        self.padding = padding;
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Set the background color
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Set the content scale
    pub fn with_content_scale(mut self, scale: f32) -> Self {
        self.content_scale = scale;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SvgConfig::default();
        assert_eq!(config.padding, 0);
        assert!(config.standalone);
        assert!(config.pretty_print);
        assert_eq!(config.class_prefix, Some("fl-".to_string()));
        assert_eq!(config.background, None);
        assert_eq!(config.content_scale, 1.0);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SvgConfig::new()
            .with_padding(10)
            .with_standalone(false)
            .with_pretty_print(false)
            .with_class_prefix("my-")
            .with_background("#fafafa")
            .with_content_scale(2.0);

        assert_eq!(config.padding, 10);
        assert!(!config.standalone);
        assert!(!config.pretty_print);
        assert_eq!(config.class_prefix, Some("my-".to_string()));
        assert_eq!(config.background.as_deref(), Some("#fafafa"));
        assert_eq!(config.content_scale, 2.0);
    }

    #[test]
    fn test_without_prefix() {
        let config = SvgConfig::new().without_class_prefix();
        assert_eq!(config.class_prefix, None);
    }
}
