//! Cross-axis placement of flex children

use std::fmt;

use serde::Deserialize;

use crate::layout::axis::Axis;

/// Alignment of children along the cross axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    #[default]
    Start,
    End,
    Middle,
    /// Line up text baselines. Only meaningful for a horizontal main axis;
    /// behaves like `Start` on a vertical one.
    Baseline,
}

/// What the alignment of one child is resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CrossExtent {
    /// Largest cross extent of any child, at least the cross minimum
    pub max_cross: i32,
    /// Largest distance from a child's top edge down to its baseline
    pub max_ascent: i32,
}

impl Alignment {
    /// Cross-axis offset of a child with the given cross extent and ascent
    pub fn cross_offset(self, axis: Axis, extent: CrossExtent, cross: i32, ascent: i32) -> i32 {
        match self {
            Alignment::Start => 0,
            Alignment::End => extent.max_cross - cross,
            Alignment::Middle => (extent.max_cross - cross) / 2,
            Alignment::Baseline => match axis {
                Axis::Horizontal => extent.max_ascent - ascent,
                Axis::Vertical => 0,
            },
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Alignment::Start => "Start",
            Alignment::End => "End",
            Alignment::Middle => "Middle",
            Alignment::Baseline => "Baseline",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXTENT: CrossExtent = CrossExtent {
        max_cross: 30,
        max_ascent: 24,
    };

    #[test]
    fn test_offsets() {
        let h = Axis::Horizontal;
        assert_eq!(Alignment::Start.cross_offset(h, EXTENT, 10, 8), 0);
        assert_eq!(Alignment::End.cross_offset(h, EXTENT, 10, 8), 20);
        assert_eq!(Alignment::Middle.cross_offset(h, EXTENT, 11, 8), 9);
        assert_eq!(Alignment::Baseline.cross_offset(h, EXTENT, 10, 8), 16);
    }

    #[test]
    fn test_baseline_on_vertical_axis_is_start() {
        assert_eq!(
            Alignment::Baseline.cross_offset(Axis::Vertical, EXTENT, 10, 8),
            0
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Alignment::Middle.to_string(), "Middle");
        assert_eq!(Alignment::Baseline.to_string(), "Baseline");
    }
}
