//! Core geometry types for the layout engine
//!
//! All layout arithmetic is done on integer device-independent units. A
//! [`Point`] doubles as a size, the same way a widget's extent is just the
//! far corner of its box when the box starts at the origin.

use std::fmt;
use std::ops::{Add, Sub};

/// A 2D integer vector, used for both positions and sizes
///
/// Addition and subtraction saturate at the `i32` bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// An axis-aligned integer rectangle spanning `min` (inclusive) to `max` (exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// A rectangle of the given size anchored at the origin
    pub fn from_size(size: Point) -> Self {
        Self::new(Point::ZERO, size)
    }

    pub fn size(&self) -> Point {
        self.max - self.min
    }

    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Move the rectangle by `offset`
    pub fn translate(self, offset: Point) -> Rect {
        Rect::new(self.min + offset, self.max + offset)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Minimum and maximum extents a widget may occupy
///
/// `min <= max` component-wise is the caller's responsibility and is not
/// re-validated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Constraints {
    pub min: Point,
    pub max: Point,
}

impl Constraints {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Tight constraints: exactly `size` is allowed
    pub fn exact(size: Point) -> Self {
        Self::new(size, size)
    }

    /// Anything from zero up to `max`
    pub fn loose(max: Point) -> Self {
        Self::new(Point::ZERO, max)
    }

    /// Clamp `size` into these bounds, one component at a time
    pub fn constrain(&self, size: Point) -> Point {
        Point::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }

    /// Whether `size` already lies within these bounds
    pub fn contains(&self, size: Point) -> bool {
        self.constrain(size) == size
    }
}

/// The measured result of laying out a widget
///
/// `baseline` is the distance from the bottom edge of the box up to the
/// widget's text baseline; zero puts the baseline on the bottom edge, which
/// is what plain boxes report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    pub size: Point,
    pub baseline: i32,
}

impl Dimensions {
    /// Dimensions with the baseline on the bottom edge
    pub fn new(size: Point) -> Self {
        Self { size, baseline: 0 }
    }

    pub fn with_baseline(size: Point, baseline: i32) -> Self {
        Self { size, baseline }
    }

    /// Distance from the top edge down to the baseline
    pub fn ascent(&self) -> i32 {
        self.size.y - self.baseline
    }
}
