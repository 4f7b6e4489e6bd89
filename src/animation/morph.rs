//! Interpolation between two consecutive tree layouts.
//!
//! Nodes are matched by label, edges by (parent label, child label, side).
//! Matched items slide from their old to their new geometry; items present
//! only in the old layout fade out and items present only in the new layout
//! fade in.

use std::collections::{HashMap, VecDeque};

use crate::{
    animation::ease::Ease,
    foundation::core::{Point, Rect},
    layout::engine::{NODE_HEIGHT, NODE_WIDTH, NodeId, Side, TreeLayout},
    tree::model::Label,
};

/// One drawable item of a [`Frame`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum FrameItem {
    /// Connector between two nodes.
    Edge {
        start: Point,
        end: Point,
        opacity: f64,
    },
    /// Node box and label.
    Node {
        label: Label,
        position: Point,
        opacity: f64,
    },
}

/// Geometry to draw at one instant, in painter's order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Frame {
    pub items: Vec<FrameItem>,
}

impl Frame {
    /// Union of the boxes of nodes that are at least partly visible.
    pub fn bounds(&self) -> Rect {
        self.items
            .iter()
            .filter_map(|it| match it {
                FrameItem::Node {
                    position, opacity, ..
                } if *opacity > 0.0 => {
                    Some(Rect::from_center_size(*position, (NODE_WIDTH, NODE_HEIGHT)))
                }
                _ => None,
            })
            .reduce(|a, b| a.union(b))
            .unwrap_or(Rect::ZERO)
    }
}

impl From<&TreeLayout> for Frame {
    fn from(layout: &TreeLayout) -> Self {
        let mut items = Vec::with_capacity(layout.nodes.len() + layout.edges.len());
        for n in &layout.nodes {
            if let Some(e) = layout.edge_into(n.id) {
                items.push(FrameItem::Edge {
                    start: e.start,
                    end: e.end,
                    opacity: 1.0,
                });
            }
            items.push(FrameItem::Node {
                label: n.label.clone(),
                position: n.position,
                opacity: 1.0,
            });
        }
        Self { items }
    }
}

#[derive(Clone, Copy, Debug)]
enum Pair<T> {
    Both(T, T),
    Out(T),
    In(T),
}

impl<T> Pair<T> {
    fn opacity(&self, e: f64) -> f64 {
        match self {
            Self::Both(..) => 1.0,
            Self::Out(_) => 1.0 - e,
            Self::In(_) => e,
        }
    }
}

#[derive(Clone, Debug)]
enum Tween {
    Edge(Pair<(Point, Point)>),
    Node(Label, Pair<Point>),
}

/// Precomputed correspondence between two layouts.
#[derive(Clone, Debug)]
pub struct Morph {
    tweens: Vec<Tween>,
}

type EdgeKey<'a> = (&'a Label, &'a Label, Side);

impl Morph {
    pub fn between(from: &TreeLayout, to: &TreeLayout) -> Self {
        let mut from_nodes = HashMap::<&Label, VecDeque<usize>>::new();
        for (idx, n) in from.nodes.iter().enumerate() {
            from_nodes.entry(&n.label).or_default().push_back(idx);
        }
        let mut from_edges = HashMap::<EdgeKey<'_>, VecDeque<usize>>::new();
        for (idx, e) in from.edges.iter().enumerate() {
            if let Some(key) = edge_key(from, e.parent, e.child, e.side) {
                from_edges.entry(key).or_default().push_back(idx);
            }
        }

        let mut node_used = vec![false; from.nodes.len()];
        let mut edge_used = vec![false; from.edges.len()];
        let mut incoming = Vec::with_capacity(to.nodes.len() + to.edges.len());

        for n in &to.nodes {
            if let Some(e) = to.edge_into(n.id) {
                let matched = edge_key(to, e.parent, e.child, e.side)
                    .and_then(|key| from_edges.get_mut(&key))
                    .and_then(VecDeque::pop_front);
                let pair = match matched {
                    Some(idx) => {
                        edge_used[idx] = true;
                        let old = &from.edges[idx];
                        Pair::Both((old.start, old.end), (e.start, e.end))
                    }
                    None => Pair::In((e.start, e.end)),
                };
                incoming.push(Tween::Edge(pair));
            }

            let matched = from_nodes
                .get_mut(&n.label)
                .and_then(VecDeque::pop_front);
            let pair = match matched {
                Some(idx) => {
                    node_used[idx] = true;
                    Pair::Both(from.nodes[idx].position, n.position)
                }
                None => Pair::In(n.position),
            };
            incoming.push(Tween::Node(n.label.clone(), pair));
        }

        // Leftovers are drawn first so incoming geometry paints over them.
        let mut tweens = Vec::with_capacity(incoming.len());
        for (idx, e) in from.edges.iter().enumerate() {
            if !edge_used[idx] {
                tweens.push(Tween::Edge(Pair::Out((e.start, e.end))));
            }
        }
        for (idx, n) in from.nodes.iter().enumerate() {
            if !node_used[idx] {
                tweens.push(Tween::Node(n.label.clone(), Pair::Out(n.position)));
            }
        }
        tweens.extend(incoming);

        tracing::debug!(tweens = tweens.len(), "morph prepared");
        Self { tweens }
    }

    /// Frame at progress `t` in `[0, 1]` (clamped), shaped by `ease`.
    pub fn sample(&self, t: f64, ease: Ease) -> Frame {
        let e = ease.apply(t);
        let items = self
            .tweens
            .iter()
            .map(|tw| match tw {
                Tween::Edge(pair) => {
                    let (start, end) = match *pair {
                        Pair::Both((s0, e0), (s1, e1)) => (s0.lerp(s1, e), e0.lerp(e1, e)),
                        Pair::Out(v) | Pair::In(v) => v,
                    };
                    FrameItem::Edge {
                        start,
                        end,
                        opacity: pair.opacity(e),
                    }
                }
                Tween::Node(label, pair) => {
                    let position = match *pair {
                        Pair::Both(a, b) => a.lerp(b, e),
                        Pair::Out(v) | Pair::In(v) => v,
                    };
                    FrameItem::Node {
                        label: label.clone(),
                        position,
                        opacity: pair.opacity(e),
                    }
                }
            })
            .collect();
        Frame { items }
    }
}

fn edge_key(
    layout: &TreeLayout,
    parent: NodeId,
    child: NodeId,
    side: Side,
) -> Option<EdgeKey<'_>> {
    Some((
        &layout.node(parent)?.label,
        &layout.node(child)?.label,
        side,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/morph.rs"]
mod tests;
