//! Main/cross axis conversions
//!
//! Flex layout is written once in terms of a *main* axis (along which children
//! are stacked) and a *cross* axis (along which they are aligned). [`Axis`]
//! maps between that frame and plain x/y coordinates. For a horizontal axis
//! the mapping is the identity; for a vertical axis x and y trade places, so
//! the conversion is its own inverse.

use std::fmt;

use serde::Deserialize;

use super::types::{Constraints, Point};

/// The main axis of a flex container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Axis {
    /// Children are laid out left to right
    #[default]
    Horizontal,
    /// Children are laid out top to bottom
    Vertical,
}

/// A constraint box projected onto main/cross ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisConstraints {
    pub main_min: i32,
    pub main_max: i32,
    pub cross_min: i32,
    pub cross_max: i32,
}

impl Axis {
    /// Convert between x/y and main/cross coordinates.
    ///
    /// The result's `x` is the main coordinate and `y` the cross coordinate
    /// when converting from x/y, and the other way round when converting
    /// back; both directions are the same operation.
    pub fn convert(self, pt: Point) -> Point {
        match self {
            Axis::Horizontal => pt,
            Axis::Vertical => Point::new(pt.y, pt.x),
        }
    }

    /// Split a point into its (main, cross) components
    pub fn to_main_cross(self, pt: Point) -> (i32, i32) {
        let p = self.convert(pt);
        (p.x, p.y)
    }

    /// Build a point from (main, cross) components
    pub fn from_main_cross(self, main: i32, cross: i32) -> Point {
        self.convert(Point::new(main, cross))
    }

    /// The (min, max) range of `cs` along this axis
    pub fn main_constraint(self, cs: Constraints) -> (i32, i32) {
        match self {
            Axis::Horizontal => (cs.min.x, cs.max.x),
            Axis::Vertical => (cs.min.y, cs.max.y),
        }
    }

    /// The (min, max) range of `cs` across this axis
    pub fn cross_constraint(self, cs: Constraints) -> (i32, i32) {
        match self {
            Axis::Horizontal => (cs.min.y, cs.max.y),
            Axis::Vertical => (cs.min.x, cs.max.x),
        }
    }

    /// Project a constraint box onto main and cross ranges
    pub fn project(self, cs: Constraints) -> AxisConstraints {
        let (main_min, main_max) = self.main_constraint(cs);
        let (cross_min, cross_max) = self.cross_constraint(cs);
        AxisConstraints {
            main_min,
            main_max,
            cross_min,
            cross_max,
        }
    }

    /// Build a constraint box from main and cross ranges
    pub fn constraints(
        self,
        main_min: i32,
        main_max: i32,
        cross_min: i32,
        cross_max: i32,
    ) -> Constraints {
        Constraints::new(
            self.from_main_cross(main_min, cross_min),
            self.from_main_cross(main_max, cross_max),
        )
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "Horizontal"),
            Axis::Vertical => write!(f, "Vertical"),
        }
    }
}
