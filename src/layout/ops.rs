//! Recorded drawing operations
//!
//! Widgets never draw directly. They append [`DrawOp`]s to the [`Ops`] list
//! of their [`Context`](super::Context) while they are measured, and the
//! parent decides later where that output goes. A finished recording is
//! frozen into a [`CallOp`], which is replayed exactly once at an offset.

use std::fmt;

use super::types::{Point, Rect};

/// A single drawing command in the local coordinates of the widget that recorded it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Solid rectangle
    Fill { rect: Rect, color: String },
    /// Rectangle outline
    Stroke {
        rect: Rect,
        color: String,
        width: i32,
    },
    /// A run of text whose baseline starts at `origin`
    Text {
        origin: Point,
        text: String,
        size: i32,
        color: String,
    },
}

impl DrawOp {
    /// The same command moved by `offset`
    pub fn translate(self, offset: Point) -> DrawOp {
        match self {
            DrawOp::Fill { rect, color } => DrawOp::Fill {
                rect: rect.translate(offset),
                color,
            },
            DrawOp::Stroke { rect, color, width } => DrawOp::Stroke {
                rect: rect.translate(offset),
                color,
                width,
            },
            DrawOp::Text {
                origin,
                text,
                size,
                color,
            } => DrawOp::Text {
                origin: origin + offset,
                text,
                size,
                color,
            },
        }
    }
}

impl fmt::Display for DrawOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawOp::Fill { rect, color } => write!(f, "fill {} {}", rect, color),
            DrawOp::Stroke { rect, color, width } => {
                write!(f, "stroke {} {} w={}", rect, color, width)
            }
            DrawOp::Text {
                origin,
                text,
                size,
                color,
            } => write!(f, "text {} {:?} size={} {}", origin, text, size, color),
        }
    }
}

/// An ordered list of drawing commands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ops {
    list: Vec<DrawOp>,
}

impl Ops {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command
    pub fn add(&mut self, op: DrawOp) {
        self.list.push(op);
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawOp> {
        self.list.iter()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Drop every recorded command, keeping the allocation
    pub fn reset(&mut self) {
        self.list.clear();
    }

    /// Freeze this list into a deferred, replayable recording
    pub fn into_call(self) -> CallOp {
        CallOp { ops: self.list }
    }
}

impl fmt::Display for Ops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.list {
            writeln!(f, "{}", op)?;
        }
        Ok(())
    }
}

/// Deferred drawing output of a measured widget
///
/// Not `Clone`: a recording is handed to its emitter by move and replayed
/// once.
#[derive(Debug, Default, PartialEq)]
#[must_use = "a recording does nothing until it is added to an op list"]
pub struct CallOp {
    ops: Vec<DrawOp>,
}

impl CallOp {
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Replay the recording into `ops`, translated by `offset`
    pub fn add(self, ops: &mut Ops, offset: Point) {
        ops.list
            .extend(self.ops.into_iter().map(|op| op.translate(offset)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(w: i32, h: i32) -> DrawOp {
        DrawOp::Fill {
            rect: Rect::from_size(Point::new(w, h)),
            color: "#000".to_string(),
        }
    }

    #[test]
    fn test_call_replays_translated() {
        let mut child = Ops::new();
        child.add(fill(10, 10));
        child.add(DrawOp::Text {
            origin: Point::new(0, 8),
            text: "hi".to_string(),
            size: 10,
            color: "#111".to_string(),
        });
        let call = child.into_call();
        assert_eq!(call.len(), 2);

        let mut parent = Ops::new();
        call.add(&mut parent, Point::new(5, 3));

        let ops: Vec<_> = parent.iter().cloned().collect();
        assert_eq!(
            ops[0],
            DrawOp::Fill {
                rect: Rect::new(Point::new(5, 3), Point::new(15, 13)),
                color: "#000".to_string(),
            }
        );
        match &ops[1] {
            DrawOp::Text { origin, .. } => assert_eq!(*origin, Point::new(5, 11)),
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_replay_appends_after_existing_ops() {
        let mut parent = Ops::new();
        parent.add(fill(1, 1));
        let mut child = Ops::new();
        child.add(fill(2, 2));
        child.into_call().add(&mut parent, Point::ZERO);
        assert_eq!(parent.len(), 2);
    }

    #[test]
    fn test_display_dump() {
        let mut ops = Ops::new();
        ops.add(DrawOp::Stroke {
            rect: Rect::from_size(Point::new(4, 2)),
            color: "red".to_string(),
            width: 1,
        });
        assert_eq!(ops.to_string(), "stroke (0,0)-(4,2) red w=1\n");
    }

    #[test]
    fn test_reset() {
        let mut ops = Ops::new();
        ops.add(fill(1, 1));
        ops.reset();
        assert!(ops.is_empty());
    }
}
