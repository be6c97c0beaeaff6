//! Scene files: a tree of flex containers and leaf widgets described in TOML
//!
//! A scene is parsed with `serde`, validated, and then laid out by turning
//! every node into a widget. Flex nodes become [`Flex`] containers whose
//! children are the nested nodes; a child with a `weight` is flexed, any
//! other child is rigid.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::error::SceneError;
use crate::layout::{
    flexed, rigid, Alignment, Axis, Constraints, Context, Dimensions, DrawOp, Fill, Flex,
    FlexChild, Label, LayoutConfig, Ops, Point, Rect, Spacer, Spacing, Widget,
};

const DEFAULT_FILL_COLOR: &str = "#2196f3";
const DEFAULT_TEXT_COLOR: &str = "#333333";
const OUTLINE_COLOR: &str = "#e91e63";

/// A parsed scene
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scene {
    /// Viewport declared by the scene itself
    #[serde(default)]
    pub viewport: Option<Viewport>,
    pub root: Node,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
    /// Force the root to exactly the viewport size
    #[serde(default)]
    pub exact: bool,
}

impl Viewport {
    fn constraints(&self) -> Constraints {
        let size = Point::new(self.width, self.height);
        if self.exact {
            Constraints::exact(size)
        } else {
            Constraints::loose(size)
        }
    }
}

/// A node in the scene tree
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Node {
    Flex(FlexNode),
    Fill(FillNode),
    Label(LabelNode),
    Spacer(SpacerNode),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FlexNode {
    #[serde(default)]
    pub axis: Axis,
    #[serde(default)]
    pub spacing: Spacing,
    #[serde(default)]
    pub alignment: Alignment,
    #[serde(default)]
    pub weight_sum: f32,
    #[serde(default)]
    pub children: Vec<ChildNode>,
}

/// A child of a flex node: a weight makes it flexed
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChildNode {
    #[serde(default)]
    pub weight: Option<f32>,
    #[serde(flatten)]
    pub node: Node,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FillNode {
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub height: i32,
    #[serde(default = "default_fill_color")]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LabelNode {
    pub text: String,
    pub font_size: i32,
    #[serde(default = "default_text_color")]
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct SpacerNode {
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub height: i32,
}

fn default_fill_color() -> String {
    DEFAULT_FILL_COLOR.to_string()
}

fn default_text_color() -> String {
    DEFAULT_TEXT_COLOR.to_string()
}

/// The result of laying out a scene
#[derive(Debug)]
pub struct Frame {
    pub dimensions: Dimensions,
    pub ops: Ops,
}

impl Scene {
    /// Load and validate a scene from a file
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate a scene from TOML source
    pub fn parse(source: &str) -> Result<Self, SceneError> {
        let scene: Scene = toml::from_str(source)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Check the tree for values that cannot be laid out
    pub fn validate(&self) -> Result<(), SceneError> {
        if let Some(viewport) = &self.viewport {
            if viewport.width < 0 || viewport.height < 0 {
                return Err(SceneError::invalid(
                    "viewport",
                    "size must not be negative",
                ));
            }
        }
        self.root.validate("root")
    }

    /// Constraints offered to the root node
    pub fn root_constraints(&self, config: &LayoutConfig) -> Constraints {
        match &self.viewport {
            Some(viewport) if !config.override_scene_viewport => viewport.constraints(),
            _ => config.root_constraints(),
        }
    }

    /// Lay out the whole tree and collect its drawing output
    pub fn layout(&self, config: &LayoutConfig) -> Frame {
        let mut gtx = Context::new(self.root_constraints(config));
        let dimensions = self.root.layout(&mut gtx, config);
        debug!(
            width = dimensions.size.x,
            height = dimensions.size.y,
            baseline = dimensions.baseline,
            ops = gtx.ops.len(),
            "laid out scene"
        );
        Frame {
            dimensions,
            ops: gtx.ops,
        }
    }
}

impl FromStr for Scene {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Node {
    fn validate(&self, path: &str) -> Result<(), SceneError> {
        match self {
            Node::Flex(flex) => {
                if !flex.weight_sum.is_finite() || flex.weight_sum < 0.0 {
                    return Err(SceneError::invalid(
                        path,
                        format!("weight_sum must be a non-negative number, got {}", flex.weight_sum),
                    ));
                }
                for (i, child) in flex.children.iter().enumerate() {
                    let child_path = format!("{}.children[{}]", path, i);
                    if let Some(weight) = child.weight {
                        if !weight.is_finite() || weight < 0.0 {
                            return Err(SceneError::invalid(
                                child_path,
                                format!("weight must be a non-negative number, got {}", weight),
                            ));
                        }
                    }
                    child.node.validate(&child_path)?;
                }
                Ok(())
            }
            Node::Fill(FillNode { width, height, .. })
            | Node::Spacer(SpacerNode { width, height }) => {
                if *width < 0 || *height < 0 {
                    return Err(SceneError::invalid(
                        path,
                        format!("size must not be negative, got {}x{}", width, height),
                    ));
                }
                Ok(())
            }
            Node::Label(label) => {
                if label.font_size <= 0 {
                    return Err(SceneError::invalid(
                        path,
                        format!("font_size must be positive, got {}", label.font_size),
                    ));
                }
                Ok(())
            }
        }
    }

    /// Lay out this node and everything below it
    pub fn layout(&self, gtx: &mut Context, config: &LayoutConfig) -> Dimensions {
        let dims = self.layout_content(gtx, config);
        if config.debug_outlines {
            gtx.ops.add(DrawOp::Stroke {
                rect: Rect::from_size(dims.size),
                color: OUTLINE_COLOR.to_string(),
                width: 1,
            });
        }
        dims
    }

    fn layout_content(&self, gtx: &mut Context, config: &LayoutConfig) -> Dimensions {
        match self {
            Node::Flex(node) => {
                let flex = Flex::new(node.axis)
                    .spacing(node.spacing)
                    .alignment(node.alignment)
                    .weight_sum(node.weight_sum);
                let mut children: Vec<FlexChild<'_>> = node
                    .children
                    .iter()
                    .map(|child| {
                        let inner = &child.node;
                        let widget = move |gtx: &mut Context| inner.layout(gtx, config);
                        match child.weight {
                            Some(weight) => flexed(weight, widget),
                            None => rigid(widget),
                        }
                    })
                    .collect();
                flex.layout(gtx, &mut children)
            }
            Node::Fill(node) => {
                Fill::new(Point::new(node.width, node.height), node.color.clone()).layout(gtx)
            }
            Node::Label(node) => Label::new(node.text.clone(), node.font_size)
                .with_color(node.color.clone())
                .with_metrics(config.text_metrics)
                .layout(gtx),
            Node::Spacer(node) => Spacer::new(node.width, node.height).layout(gtx),
        }
    }
}
