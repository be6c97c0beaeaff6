//! Distribution of leftover main-axis space

use std::fmt;

use serde::Deserialize;

/// How space left over after laying out the children is distributed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Spacing {
    /// Leave the space at the end
    #[default]
    SpaceEnd,
    /// Leave the space at the start
    SpaceStart,
    /// Share the space between the start and the end
    SpaceSides,
    /// Distribute the space evenly between children, with half as much at
    /// the start and the end
    SpaceAround,
    /// Distribute the space evenly between children, none at the start and
    /// the end
    SpaceBetween,
    /// Distribute the space evenly between children and at the start and the
    /// end
    SpaceEvenly,
}

/// Extra main-axis space placed before, between and after children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gaps {
    pub leading: i32,
    /// Inserted between consecutive children only
    pub between: i32,
    pub trailing: i32,
}

impl Spacing {
    pub const ALL: [Spacing; 6] = [
        Spacing::SpaceEnd,
        Spacing::SpaceStart,
        Spacing::SpaceSides,
        Spacing::SpaceAround,
        Spacing::SpaceBetween,
        Spacing::SpaceEvenly,
    ];

    /// Split `space` for `count` children. Divisions truncate and the
    /// remainder is dropped.
    pub fn gaps(self, space: i32, count: usize) -> Gaps {
        let n = count as i32;
        match self {
            Spacing::SpaceEnd => Gaps {
                trailing: space,
                ..Gaps::default()
            },
            Spacing::SpaceStart => Gaps {
                leading: space,
                ..Gaps::default()
            },
            Spacing::SpaceSides => Gaps {
                leading: space / 2,
                between: 0,
                trailing: space / 2,
            },
            Spacing::SpaceAround if n > 0 => Gaps {
                leading: space / (n * 2),
                between: space / n,
                trailing: space / (n * 2),
            },
            Spacing::SpaceAround => Gaps::default(),
            Spacing::SpaceBetween if n > 1 => Gaps {
                between: space / (n - 1),
                ..Gaps::default()
            },
            Spacing::SpaceBetween => Gaps::default(),
            Spacing::SpaceEvenly => {
                let gap = space / (n + 1);
                Gaps {
                    leading: gap,
                    between: gap,
                    trailing: gap,
                }
            }
        }
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Spacing::SpaceEnd => "SpaceEnd",
            Spacing::SpaceStart => "SpaceStart",
            Spacing::SpaceSides => "SpaceSides",
            Spacing::SpaceAround => "SpaceAround",
            Spacing::SpaceBetween => "SpaceBetween",
            Spacing::SpaceEvenly => "SpaceEvenly",
        };
        f.write_str(name)
    }
}
