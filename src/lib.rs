//! flexline - flex layout for immediate-mode user interfaces
//!
//! This library lays out widgets in rows and columns the way a flexbox does:
//! rigid children take their preferred size, flexed children split what is
//! left by weight, and the remaining space is distributed according to a
//! spacing policy. Scenes can be described in TOML and rendered to SVG.
//!
//! # Example
//!
//! ```rust
//! use flexline::render;
//!
//! let svg = render(r##"
//!     [root]
//!     kind = "flex"
//!
//!     [[root.children]]
//!     kind = "fill"
//!     width = 40
//!     height = 20
//!     color = "#ff9800"
//! "##).unwrap();
//! assert!(svg.contains("<svg"));
//! ```

pub mod error;
pub mod layout;
pub mod renderer;
pub mod scene;

pub use error::SceneError;
pub use layout::{flexed, rigid, Alignment, Axis, Context, Flex, LayoutConfig, Spacing};
pub use renderer::{render_svg, Surface, SvgConfig, SvgSurface};
pub use scene::{Frame, Scene};

use std::path::Path;

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// The scene could not be loaded
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// Reading input failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Debug mode: outline every node
    pub debug: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    fn effective_layout(&self) -> LayoutConfig {
        self.layout
            .clone()
            .with_debug_outlines(self.layout.debug_outlines || self.debug)
    }
}

/// Parse a scene and lay it out without rendering
pub fn layout_scene(source: &str, config: &RenderConfig) -> Result<Frame, RenderError> {
    let scene = Scene::parse(source)?;
    Ok(scene.layout(&config.effective_layout()))
}

/// Render scene source to SVG with default configuration
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, RenderConfig::default())
}

/// Render scene source to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use flexline::{render_with_config, LayoutConfig, RenderConfig, SvgConfig};
///
/// let config = RenderConfig::new()
///     .with_layout(LayoutConfig::new().with_viewport(200, 100))
///     .with_svg(SvgConfig::new().with_content_scale(2.0));
///
/// let svg = render_with_config("[root]\nkind = \"spacer\"\nwidth = 50\nheight = 10\n", config).unwrap();
/// assert!(svg.contains(r#"width="100" height="20""#));
/// ```
pub fn render_with_config(source: &str, config: RenderConfig) -> Result<String, RenderError> {
    let frame = layout_scene(source, &config)?;

    let mut surface = SvgSurface::new(config.svg);
    surface.resize(frame.dimensions.size);
    Ok(surface.present(&frame.ops))
}

/// Read a scene file and render it to SVG
pub fn render_file(path: &Path, config: RenderConfig) -> Result<String, RenderError> {
    let source = std::fs::read_to_string(path)?;
    render_with_config(&source, config)
}
