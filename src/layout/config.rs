//! Configuration for the layout engine

use super::types::{Constraints, Point};
use super::widgets::TextMetrics;

/// Configuration options for laying out a scene
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Viewport size used when a scene does not declare one
    pub viewport: Point,

    /// Give the root exactly the viewport size instead of anything up to it
    pub exact_viewport: bool,

    /// Use this viewport even when the scene declares its own
    pub override_scene_viewport: bool,

    /// Metrics used to measure labels
    pub text_metrics: TextMetrics,

    /// Outline every node of a scene with a stroke
    pub debug_outlines: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            viewport: Point::new(800, 600),
            exact_viewport: false,
            override_scene_viewport: false,
            text_metrics: TextMetrics::default(),
            debug_outlines: false,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the viewport size
    pub fn with_viewport(mut self, width: i32, height: i32) -> Self {
        self.viewport = Point::new(width, height);
        self
    }

    /// Set whether the root is forced to the full viewport
    pub fn with_exact_viewport(mut self, exact: bool) -> Self {
        self.exact_viewport = exact;
        self
    }

    /// Set whether this viewport wins over one declared by the scene
    pub fn with_override_scene_viewport(mut self, override_scene: bool) -> Self {
        self.override_scene_viewport = override_scene;
        self
    }

    /// Set the label metrics
    pub fn with_text_metrics(mut self, metrics: TextMetrics) -> Self {
        self.text_metrics = metrics;
        self
    }

    /// Set whether scene nodes are outlined
    pub fn with_debug_outlines(mut self, debug: bool) -> Self {
        self.debug_outlines = debug;
        self
    }

    /// Root constraints for this configuration
    pub fn root_constraints(&self) -> Constraints {
        if self.exact_viewport {
            Constraints::exact(self.viewport)
        } else {
            Constraints::loose(self.viewport)
        }
    }
}
