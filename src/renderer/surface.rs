//! Drawables that a laid out frame is presented on

use tracing::debug;

use crate::layout::{Ops, Point};

use super::svg::SvgBuilder;
use super::SvgConfig;

/// A drawable with a logical size and a content scale
///
/// Layout works in logical units. The drawable size is what the surface
/// actually allocates: the logical size times the content scale.
pub trait Surface {
    /// Physical pixels per logical unit
    fn content_scale(&self) -> f32;

    /// Change the logical size of the surface
    fn resize(&mut self, logical: Point);

    /// The logical size of the surface
    fn logical_size(&self) -> Point;

    /// The size of the surface in physical pixels
    fn drawable_size(&self) -> Point {
        let scale = self.content_scale();
        let logical = self.logical_size();
        Point::new(
            (logical.x as f32 * scale).round() as i32,
            (logical.y as f32 * scale).round() as i32,
        )
    }
}

/// A surface that presents ops as an SVG document
#[derive(Debug, Clone)]
pub struct SvgSurface {
    config: SvgConfig,
    logical: Point,
}

impl SvgSurface {
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            logical: Point::ZERO,
        }
    }

    /// Render `ops` into an SVG document sized for this surface
    pub fn present(&self, ops: &Ops) -> String {
        let drawable = self.drawable_size();
        debug!(
            logical = %self.logical,
            drawable = %drawable,
            scale = self.config.content_scale,
            ops = ops.len(),
            "presenting frame"
        );
        let prefix = self.config.class_prefix.clone().unwrap_or_default();
        let mut builder = SvgBuilder::new(self.config.clone());
        builder.start_group(None, &[format!("{}frame", prefix)]);
        for op in ops.iter() {
            builder.add_op(op);
        }
        builder.end_group();
        builder.build(self.logical, drawable)
    }
}

impl Surface for SvgSurface {
    fn content_scale(&self) -> f32 {
        self.config.content_scale
    }

    fn resize(&mut self, logical: Point) {
        self.logical = logical;
    }

    fn logical_size(&self) -> Point {
        self.logical
    }
}
