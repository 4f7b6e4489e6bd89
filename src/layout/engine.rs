//! Binary-tree diagram layout.
//!
//! Children sit one `vertical_buff` below their parent. Horizontal displacement
//! decays geometrically with depth (`spacing_base * 0.6^level`, where `level`
//! is the child's depth) and right children are pushed out 1.2x farther than
//! left children, which keeps the right-heavy trees produced by splaying from
//! running into their left siblings.
//!
//! World coordinates have y growing upward; the root sits at
//! [`LayoutParams::origin`].

use crate::{
    foundation::core::{Point, Rect, Vec2},
    foundation::error::{SplayError, SplayResult},
    tree::model::{Label, Node},
};

/// Per-level decay of horizontal spacing.
pub const SPACING_DECAY: f64 = 0.6;
/// Extra horizontal displacement applied to right children only.
pub const RIGHT_SKEW: f64 = 1.2;
/// Width of a node box in world units.
pub const NODE_WIDTH: f64 = 1.0;
/// Height of a node box in world units.
pub const NODE_HEIGHT: f64 = 0.7;
/// Offset applied to edge anchors so connectors leave and enter boxes off-center.
pub const EDGE_NUDGE: f64 = 0.25;

/// Parameters of one layout invocation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    /// Horizontal spacing at level 0; decays per level.
    pub spacing_base: f64,
    /// Vertical distance between a parent and its children.
    pub vertical_buff: f64,
    /// Position of the root.
    pub origin: Point,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            spacing_base: 3.0,
            vertical_buff: 1.5,
            origin: Point::ORIGIN,
        }
    }
}

impl LayoutParams {
    pub fn new(spacing_base: f64, vertical_buff: f64) -> SplayResult<Self> {
        let params = Self {
            spacing_base,
            vertical_buff,
            ..Self::default()
        };
        params.validate()?;
        Ok(params)
    }

    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn validate(&self) -> SplayResult<()> {
        if !self.spacing_base.is_finite() || self.spacing_base <= 0.0 {
            return Err(SplayError::validation(
                "layout spacing_base must be finite and > 0",
            ));
        }
        if !self.vertical_buff.is_finite() || self.vertical_buff < 0.0 {
            return Err(SplayError::validation(
                "layout vertical_buff must be finite and >= 0",
            ));
        }
        if !self.origin.x.is_finite() || !self.origin.y.is_finite() {
            return Err(SplayError::validation("layout origin must be finite"));
        }
        Ok(())
    }
}

/// Index of a node in [`TreeLayout::nodes`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeId(pub u32);

/// Which child slot a node occupies under its parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A node with its computed geometry.
pub struct PositionedNode {
    pub id: NodeId,
    pub label: Label,
    /// Depth below the root of this layout call.
    pub level: u32,
    /// Center of the node box.
    pub position: Point,
    pub parent: Option<NodeId>,
    /// Slot under `parent`; `None` for the root.
    pub side: Option<Side>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl PositionedNode {
    /// The node box in world coordinates.
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.position, (NODE_WIDTH, NODE_HEIGHT))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// The two anchor points of a parent-child connector.
pub struct EdgeAnchors {
    pub parent: NodeId,
    pub child: NodeId,
    pub side: Side,
    pub start: Point,
    pub end: Point,
}

/// Geometry of one laid-out tree.
///
/// `nodes` is in drawing order: a node, then its right subtree, then its left
/// subtree. `edges` follows the same walk, so the edge into `nodes[i]` is
/// `edges[i - 1]`, and drawing "edge into node, node" for each node in order
/// reproduces the per-subtree drawable order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TreeLayout {
    pub params: LayoutParams,
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<EdgeAnchors>,
}

impl TreeLayout {
    pub fn root(&self) -> Option<&PositionedNode> {
        self.nodes.first()
    }

    pub fn node(&self, id: NodeId) -> Option<&PositionedNode> {
        self.nodes.get(id.0 as usize).filter(|n| n.id == id)
    }

    /// Incoming edge of `child`, `None` for the root.
    pub fn edge_into(&self, child: NodeId) -> Option<&EdgeAnchors> {
        let idx = (child.0 as usize).checked_sub(1)?;
        match self.edges.get(idx) {
            Some(e) if e.child == child => Some(e),
            _ => self.edges.iter().find(|e| e.child == child),
        }
    }

    /// First node (in drawing order) carrying `label`.
    pub fn find_by_label(&self, label: &Label) -> Option<&PositionedNode> {
        self.nodes.iter().find(|n| &n.label == label)
    }

    /// Union of all node boxes; zero-sized at the origin when empty.
    pub fn bounds(&self) -> Rect {
        let mut iter = self.nodes.iter().map(PositionedNode::rect);
        match iter.next() {
            None => Rect::ZERO,
            Some(first) => iter.fold(first, |acc, r| acc.union(r)),
        }
    }

    /// Shift every position and anchor by `delta`.
    pub fn translated(mut self, delta: Vec2) -> Self {
        for n in &mut self.nodes {
            n.position += delta;
        }
        for e in &mut self.edges {
            e.start += delta;
            e.end += delta;
        }
        self.params.origin += delta;
        self
    }

    /// Translate so the center of [`Self::bounds`] lands on `center`.
    pub fn centered_at(self, center: Point) -> Self {
        let delta = center - self.bounds().center();
        self.translated(delta)
    }
}

/// Horizontal displacement of a child at `level` (the root is level 0).
pub fn horizontal_offset(spacing_base: f64, level: u32) -> f64 {
    spacing_base * SPACING_DECAY.powi(i32::try_from(level).unwrap_or(i32::MAX))
}

/// Lay out `root` and every descendant.
///
/// Pure over the tree: nothing is written back into `root`, and calling this
/// twice with the same parameters yields identical output. `params` must pass
/// [`LayoutParams::validate`]; a negative `spacing_base` would mirror the tree.
/// The walk uses an explicit stack, so tree depth is bounded only by memory.
#[tracing::instrument(level = "debug", skip_all, fields(spacing = params.spacing_base))]
pub fn layout(root: &Node, params: &LayoutParams) -> TreeLayout {
    debug_assert!(params.validate().is_ok(), "invalid layout params: {params:?}");
    let len = root.len();
    let mut out = TreeLayout {
        params: *params,
        nodes: Vec::with_capacity(len),
        edges: Vec::with_capacity(len.saturating_sub(1)),
    };

    let mut stack = vec![Pending {
        node: root,
        parent: None,
        level: 0,
        position: params.origin,
    }];
    while let Some(item) = stack.pop() {
        let id = next_id(&out);
        if let Some((parent, side)) = item.parent {
            let p = &mut out.nodes[parent.0 as usize];
            match side {
                Side::Left => p.left = Some(id),
                Side::Right => p.right = Some(id),
            }
            let from = p.position;
            out.edges.push(edge_anchors(parent, id, side, from, item.position));
        }
        out.nodes.push(PositionedNode {
            id,
            label: item.node.label().clone(),
            level: item.level,
            position: item.position,
            parent: item.parent.map(|(p, _)| p),
            side: item.parent.map(|(_, s)| s),
            left: None,
            right: None,
        });

        let level = item.level + 1;
        let offset = horizontal_offset(params.spacing_base, level);
        // Left goes on the stack first so the whole right subtree is placed before it.
        if let Some(child) = item.node.left() {
            stack.push(Pending {
                node: child,
                parent: Some((id, Side::Left)),
                level,
                position: item.position + Vec2::new(-offset, -params.vertical_buff),
            });
        }
        if let Some(child) = item.node.right() {
            stack.push(Pending {
                node: child,
                parent: Some((id, Side::Right)),
                level,
                position: item.position + Vec2::new(offset * RIGHT_SKEW, -params.vertical_buff),
            });
        }
    }

    tracing::debug!(
        nodes = out.nodes.len(),
        edges = out.edges.len(),
        "tree laid out"
    );
    out
}

struct Pending<'a> {
    node: &'a Node,
    parent: Option<(NodeId, Side)>,
    level: u32,
    position: Point,
}

fn edge_anchors(parent: NodeId, child: NodeId, side: Side, from: Point, to: Point) -> EdgeAnchors {
    let (start, end) = match side {
        Side::Right => (
            bottom_of(from) + Vec2::new(EDGE_NUDGE, 0.0),
            left_of(to) + Vec2::new(0.0, EDGE_NUDGE),
        ),
        Side::Left => (
            bottom_of(from) + Vec2::new(-EDGE_NUDGE, 0.0),
            top_of(to) + Vec2::new(EDGE_NUDGE, 0.0),
        ),
    };
    EdgeAnchors {
        parent,
        child,
        side,
        start,
        end,
    }
}

fn next_id(out: &TreeLayout) -> NodeId {
    NodeId(out.nodes.len() as u32)
}

fn bottom_of(center: Point) -> Point {
    center + Vec2::new(0.0, -NODE_HEIGHT / 2.0)
}

fn top_of(center: Point) -> Point {
    center + Vec2::new(0.0, NODE_HEIGHT / 2.0)
}

fn left_of(center: Point) -> Point {
    center + Vec2::new(-NODE_WIDTH / 2.0, 0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
