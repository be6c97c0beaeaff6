//! Flex layout: children stacked along an axis, sized by weight
//!
//! Layout runs in two passes over the children in their original order:
//!
//! 1. **Rigid children** are measured first, each offered everything from
//!    zero up to the main-axis space not yet used by earlier rigid children.
//! 2. **Flexed children** then split what is left by weight. Each one is
//!    offered an exact main-axis size, so it consumes precisely its share;
//!    rounding errors are carried from one flexed child to the next (see
//!    [`Apportioner`]).
//!
//! Every child's drawing output is recorded while it is measured and only
//! replayed once all sizes are known, translated to the child's final
//! position. Leftover main-axis space is distributed according to
//! [`Spacing`] and children are placed across the axis according to
//! [`Alignment`].

mod alignment;
mod apportion;
mod spacing;

pub use alignment::{Alignment, CrossExtent};
pub use apportion::Apportioner;
pub use spacing::{Gaps, Spacing};

use smallvec::SmallVec;
use tracing::trace;

use super::axis::Axis;
use super::context::{Context, Widget};
use super::ops::CallOp;
use super::types::{Constraints, Dimensions};

/// Children up to this count are measured without a heap allocation
const INLINE_CHILDREN: usize = 32;

/// Lays out children along an axis according to alignment and weights
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Flex {
    /// The main axis
    pub axis: Axis,
    /// Distribution of space left after layout
    pub spacing: Spacing,
    /// Alignment on the cross axis
    pub alignment: Alignment,
    /// Sum of weights used to size flexed children. Zero means the sum of
    /// all flexed weights.
    pub weight_sum: f32,
}

/// Whether a child is sized by its own preference or by weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChildKind {
    Rigid,
    Flexed(f32),
}

/// A child of a [`Flex`] together with how it is sized
pub struct FlexChild<'a> {
    kind: ChildKind,
    widget: Box<dyn Widget + 'a>,
}

/// A child measured against the main-axis space left by earlier rigid
/// children
pub fn rigid<'a>(widget: impl Widget + 'a) -> FlexChild<'a> {
    FlexChild {
        kind: ChildKind::Rigid,
        widget: Box::new(widget),
    }
}

/// A child forced to take up `weight` over the weight sum of the space left
/// over by rigid children
pub fn flexed<'a>(weight: f32, widget: impl Widget + 'a) -> FlexChild<'a> {
    FlexChild {
        kind: ChildKind::Flexed(weight),
        widget: Box::new(widget),
    }
}

impl FlexChild<'_> {
    fn measure(&mut self, gtx: &Context, constraints: Constraints) -> Measured {
        let mut cgtx = gtx.child(constraints);
        let dims = self.widget.layout(&mut cgtx);
        Measured {
            dims,
            call: cgtx.ops.into_call(),
        }
    }
}

/// Per-child scratch record, filled while measuring and consumed when
/// emitting
#[derive(Debug, Default)]
struct Measured {
    dims: Dimensions,
    call: CallOp,
}

impl Flex {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            ..Self::default()
        }
    }

    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn weight_sum(mut self, weight_sum: f32) -> Self {
        self.weight_sum = weight_sum;
        self
    }

    /// Lay out `children` and record their output into `gtx.ops`.
    ///
    /// Children are positioned in the given order, but rigid children are
    /// measured before flexed ones.
    pub fn layout(&self, gtx: &mut Context, children: &mut [FlexChild<'_>]) -> Dimensions {
        let cs = gtx.constraints;
        let bounds = self.axis.project(cs);
        let (cross_min, cross_max) = (bounds.cross_min, bounds.cross_max);
        let mut size: i32 = 0;
        let mut remaining = bounds.main_max;
        let mut total_weight = 0.0f32;

        let mut scratch: SmallVec<[Measured; INLINE_CHILDREN]> =
            children.iter().map(|_| Measured::default()).collect();

        for (i, child) in children.iter_mut().enumerate() {
            if let ChildKind::Flexed(weight) = child.kind {
                total_weight += weight;
                continue;
            }
            let measured = child.measure(
                gtx,
                self.axis.constraints(0, remaining, cross_min, cross_max),
            );
            let sz = self.axis.convert(measured.dims.size).x;
            trace!(child = i, main = sz, remaining, "measured rigid child");
            size = size.saturating_add(sz);
            remaining = remaining.saturating_sub(sz).max(0);
            scratch[i] = measured;
        }

        if self.weight_sum != 0.0 {
            total_weight = self.weight_sum;
        }

        let mut apportioner = Apportioner::new(remaining, total_weight);
        for (i, child) in children.iter_mut().enumerate() {
            let ChildKind::Flexed(weight) = child.kind else {
                continue;
            };
            let mut flex_size = 0;
            if remaining > 0 && total_weight > 0.0 {
                flex_size = apportioner.share(weight).min(remaining);
            }
            let measured = child.measure(
                gtx,
                self.axis
                    .constraints(flex_size, flex_size, cross_min, cross_max),
            );
            let sz = self.axis.convert(measured.dims.size).x;
            trace!(child = i, weight, main = sz, remaining, "measured flexed child");
            size = size.saturating_add(sz);
            remaining = remaining.saturating_sub(sz).max(0);
            scratch[i] = measured;
        }

        let mut extent = CrossExtent {
            max_cross: cross_min,
            max_ascent: 0,
        };
        for m in &scratch {
            extent.max_cross = extent.max_cross.max(self.axis.convert(m.dims.size).y);
            extent.max_ascent = extent.max_ascent.max(m.dims.ascent());
        }

        let space = (bounds.main_min - size).max(0);
        let count = scratch.len();
        let gaps = self.spacing.gaps(space, count);

        // Sums saturate; the final constrain brings the size back in bounds.
        let mut main_size = gaps.leading;
        for (i, m) in scratch.into_iter().enumerate() {
            let (main, cross) = self.axis.to_main_cross(m.dims.size);
            let offset = self
                .alignment
                .cross_offset(self.axis, extent, cross, m.dims.ascent());
            m.call
                .add(&mut gtx.ops, self.axis.from_main_cross(main_size, offset));
            main_size = main_size.saturating_add(main);
            if i + 1 < count {
                main_size = main_size.saturating_add(gaps.between);
            }
        }
        main_size = main_size.saturating_add(gaps.trailing);

        let sz = cs.constrain(self.axis.from_main_cross(main_size, extent.max_cross));
        trace!(
            axis = %self.axis,
            spacing = %self.spacing,
            alignment = %self.alignment,
            children = count,
            width = sz.x,
            height = sz.y,
            "flex laid out"
        );
        Dimensions::with_baseline(sz, sz.y - extent.max_ascent)
    }
}
