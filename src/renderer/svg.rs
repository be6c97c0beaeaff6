//! SVG generation from recorded drawing ops

use crate::layout::{DrawOp, Ops, Point, Rect};

use super::surface::{Surface, SvgSurface};
use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
            indent: 1,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a filled rectangle
    pub fn add_fill(&mut self, rect: Rect, color: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<rect class="{}fill" x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            self.indent_str(),
            prefix,
            rect.min.x,
            rect.min.y,
            rect.width(),
            rect.height(),
            escape_xml(color)
        ));
    }

    /// Add a rectangle outline
    pub fn add_stroke(&mut self, rect: Rect, color: &str, width: i32) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<rect class="{}outline" x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            self.indent_str(),
            prefix,
            rect.min.x,
            rect.min.y,
            rect.width(),
            rect.height(),
            escape_xml(color),
            width
        ));
    }

    /// Add a text run whose baseline starts at `origin`
    pub fn add_text(&mut self, origin: Point, text: &str, size: i32, color: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<text class="{}label" x="{}" y="{}" font-size="{}" fill="{}">{}</text>"#,
            self.indent_str(),
            prefix,
            origin.x,
            origin.y,
            size,
            escape_xml(color),
            escape_xml(text)
        ));
    }

    /// Add the element for one op
    pub fn add_op(&mut self, op: &DrawOp) {
        match op {
            DrawOp::Fill { rect, color } => self.add_fill(*rect, color),
            DrawOp::Stroke { rect, color, width } => self.add_stroke(*rect, color, *width),
            DrawOp::Text {
                origin,
                text,
                size,
                color,
            } => self.add_text(*origin, text, *size, color),
        }
    }

    /// Add a group element with optional ID and classes
    pub fn start_group(&mut self, id: Option<&str>, classes: &[String]) {
        let id_attr = id.map(|i| format!(r#" id="{}""#, i)).unwrap_or_default();
        let class_attr = if classes.is_empty() {
            String::new()
        } else {
            format!(r#" class="{}""#, classes.join(" "))
        };

        self.elements
            .push(format!("{}<g{}{}>", self.indent_str(), id_attr, class_attr));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string
    ///
    /// `logical` is the size of the laid out content, `physical` the size the
    /// document is displayed at.
    pub fn build(self, logical: Point, physical: Point) -> String {
        let padding = self.config.padding;
        let vb_x = -padding;
        let vb_y = -padding;
        let vb_w = logical.x + 2 * padding;
        let vb_h = logical.y + 2 * padding;

        let nl = self.newline();

        let mut svg = String::new();

        // XML declaration for standalone
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
            physical.x, physical.y, vb_x, vb_y, vb_w, vb_h
        ));
        svg.push_str(nl);

        if let Some(background) = &self.config.background {
            let indent = if self.config.pretty_print { "  " } else { "" };
            svg.push_str(&format!(
                r#"{}<rect class="{}background" x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                indent,
                self.prefix(),
                vb_x,
                vb_y,
                vb_w,
                vb_h,
                escape_xml(background)
            ));
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render ops to an SVG string for content of the given logical size
pub fn render_svg(ops: &Ops, size: Point, config: &SvgConfig) -> String {
    let mut surface = SvgSurface::new(config.clone());
    surface.resize(size);
    surface.present(ops)
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(x0: i32, y0: i32, x1: i32, y1: i32, color: &str) -> DrawOp {
        DrawOp::Fill {
            rect: Rect::new(Point::new(x0, y0), Point::new(x1, y1)),
            color: color.to_string(),
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn test_render_single_fill() {
        let mut ops = Ops::new();
        ops.add(fill(10, 5, 40, 25, "#ff0000"));
        let svg = render_svg(&ops, Point::new(50, 30), &SvgConfig::default());

        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"width="50" height="30" viewBox="0 0 50 30""#));
        assert!(svg.contains(
            r##"<rect class="fl-fill" x="10" y="5" width="30" height="20" fill="#ff0000"/>"##
        ));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_render_text_is_escaped() {
        let mut ops = Ops::new();
        ops.add(DrawOp::Text {
            origin: Point::new(0, 16),
            text: "a<b & c".to_string(),
            size: 20,
            color: "#333333".to_string(),
        });
        let svg = render_svg(&ops, Point::new(60, 20), &SvgConfig::default());
        assert!(svg.contains(
            r##"<text class="fl-label" x="0" y="16" font-size="20" fill="#333333">a&lt;b &amp; c</text>"##
        ));
    }

    #[test]
    fn test_render_stroke() {
        let mut ops = Ops::new();
        ops.add(DrawOp::Stroke {
            rect: Rect::from_size(Point::new(8, 4)),
            color: "#e91e63".to_string(),
            width: 1,
        });
        let svg = render_svg(&ops, Point::new(8, 4), &SvgConfig::new().without_class_prefix());
        assert!(svg.contains(r#"class="outline""#));
        assert!(svg.contains(r#"fill="none""#));
        assert!(svg.contains(r#"stroke-width="1""#));
    }

    #[test]
    fn test_padding_and_background() {
        let config = SvgConfig::new()
            .with_padding(5)
            .with_background("#ffffff")
            .with_standalone(false)
            .with_pretty_print(false);
        let svg = render_svg(&Ops::new(), Point::new(10, 10), &config);
        assert_eq!(
            svg,
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10" viewBox="-5 -5 20 20">"#,
                r##"<rect class="fl-background" x="-5" y="-5" width="20" height="20" fill="#ffffff"/>"##,
                r#"<g class="fl-frame">"#,
                "</g>",
                "</svg>"
            )
        );
    }

    #[test]
    fn test_groups_indent() {
        let mut builder = SvgBuilder::new(SvgConfig::new().with_standalone(false));
        builder.start_group(Some("row"), &["fl-flex".to_string()]);
        builder.add_fill(Rect::from_size(Point::new(1, 1)), "red");
        builder.end_group();
        let svg = builder.build(Point::new(1, 1), Point::new(1, 1));
        assert!(svg.contains("  <g id=\"row\" class=\"fl-flex\">\n    <rect"));
        assert!(svg.contains("\n  </g>\n"));
    }
}
