//! Layout engine for measuring widgets and placing their drawing output
//!
//! Widgets are measured against [`Constraints`] inside a [`Context`] and
//! record [`DrawOp`]s as they go. [`Flex`] is the container that stacks
//! children along an [`Axis`] and distributes the space between them.

pub mod axis;
pub mod config;
pub mod context;
pub mod flex;
pub mod ops;
pub mod types;
pub mod widgets;

pub use axis::{Axis, AxisConstraints};
pub use config::LayoutConfig;
pub use context::{Context, Widget};
pub use flex::{flexed, rigid, Alignment, Apportioner, Flex, FlexChild, Gaps, Spacing};
pub use ops::{CallOp, DrawOp, Ops};
pub use types::*;
pub use widgets::{Fill, Label, Spacer, TextMetrics};
