//! Layout context and the widget contract

use super::ops::Ops;
use super::types::{Constraints, Dimensions, Point};

/// State handed to a widget while it is laid out: the size it must fit and
/// the sink its drawing output is recorded into
#[derive(Debug, Default)]
pub struct Context {
    pub constraints: Constraints,
    pub ops: Ops,
}

impl Context {
    pub fn new(constraints: Constraints) -> Self {
        Self {
            constraints,
            ops: Ops::new(),
        }
    }

    /// A context that allows exactly `size`
    pub fn exact(size: Point) -> Self {
        Self::new(Constraints::exact(size))
    }

    /// A fresh context for measuring a child, with its own empty op list
    pub fn child(&self, constraints: Constraints) -> Context {
        Context::new(constraints)
    }
}

/// Something that can be measured against constraints while recording its
/// drawing output
pub trait Widget {
    fn layout(&mut self, gtx: &mut Context) -> Dimensions;
}

impl<F> Widget for F
where
    F: FnMut(&mut Context) -> Dimensions,
{
    fn layout(&mut self, gtx: &mut Context) -> Dimensions {
        self(gtx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_a_widget() {
        let mut calls = 0;
        let mut widget = |gtx: &mut Context| {
            calls += 1;
            Dimensions::new(gtx.constraints.max)
        };
        let mut gtx = Context::exact(Point::new(8, 9));
        let dims = widget.layout(&mut gtx);
        assert_eq!(dims.size, Point::new(8, 9));
        drop(widget);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_child_context_starts_empty() {
        let mut gtx = Context::exact(Point::new(1, 1));
        gtx.ops.add(crate::layout::DrawOp::Fill {
            rect: crate::layout::Rect::from_size(Point::new(1, 1)),
            color: "#fff".to_string(),
        });
        let child = gtx.child(Constraints::loose(Point::new(5, 5)));
        assert!(child.ops.is_empty());
        assert_eq!(child.constraints.max, Point::new(5, 5));
    }
}
