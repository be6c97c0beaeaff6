//! Leaf widgets: solid boxes, text runs and empty space

use serde::Deserialize;

use super::context::{Context, Widget};
use super::ops::DrawOp;
use super::types::{Dimensions, Point, Rect};

/// A solid rectangle that prefers `size` and fills whatever it is given
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    pub size: Point,
    pub color: String,
}

impl Fill {
    pub fn new(size: Point, color: impl Into<String>) -> Self {
        Self {
            size,
            color: color.into(),
        }
    }
}

impl Widget for Fill {
    fn layout(&mut self, gtx: &mut Context) -> Dimensions {
        let size = gtx.constraints.constrain(self.size);
        gtx.ops.add(DrawOp::Fill {
            rect: Rect::from_size(size),
            color: self.color.clone(),
        });
        Dimensions::new(size)
    }
}

/// Font metrics as fractions of the font size
///
/// Text is not shaped: every character advances by the same amount, which is
/// enough to give labels realistic extents and baselines.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TextMetrics {
    pub advance: f32,
    pub ascent: f32,
    pub descent: f32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            advance: 0.6,
            ascent: 0.8,
            descent: 0.2,
        }
    }
}

impl TextMetrics {
    /// Natural (width, ascent, descent) of `text` at `font_size`
    pub fn measure(&self, text: &str, font_size: i32) -> (i32, i32, i32) {
        let size = font_size as f32;
        let chars = text.chars().count() as f32;
        let width = (chars * size * self.advance).round() as i32;
        let ascent = (size * self.ascent).round() as i32;
        let descent = (size * self.descent).round() as i32;
        (width, ascent, descent)
    }
}

/// A single line of text
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub font_size: i32,
    pub color: String,
    pub metrics: TextMetrics,
}

impl Label {
    pub fn new(text: impl Into<String>, font_size: i32) -> Self {
        Self {
            text: text.into(),
            font_size,
            color: "#333333".to_string(),
            metrics: TextMetrics::default(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_metrics(mut self, metrics: TextMetrics) -> Self {
        self.metrics = metrics;
        self
    }
}

impl Widget for Label {
    fn layout(&mut self, gtx: &mut Context) -> Dimensions {
        let (width, ascent, descent) = self.metrics.measure(&self.text, self.font_size);
        let size = gtx.constraints.constrain(Point::new(width, ascent + descent));
        // Text hangs from the top edge; a taller box only grows below it.
        let ascent = ascent.min(size.y);
        gtx.ops.add(DrawOp::Text {
            origin: Point::new(0, ascent),
            text: self.text.clone(),
            size: self.font_size,
            color: self.color.clone(),
        });
        Dimensions::with_baseline(size, size.y - ascent)
    }
}

/// Empty space of a preferred size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spacer {
    pub size: Point,
}

impl Spacer {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: Point::new(width, height),
        }
    }
}

impl Widget for Spacer {
    fn layout(&mut self, gtx: &mut Context) -> Dimensions {
        Dimensions::new(gtx.constraints.constrain(self.size))
    }
}
