//! SVG renderer for presenting laid out frames
//!
//! Recorded [`DrawOp`](crate::layout::DrawOp)s are replayed onto an
//! [`SvgSurface`], which sizes the document by the surface's content scale
//! while keeping the logical size as its viewBox.

pub mod config;
pub mod surface;
pub mod svg;

pub use config::SvgConfig;
pub use surface::{Surface, SvgSurface};
pub use svg::{render_svg, SvgBuilder};
