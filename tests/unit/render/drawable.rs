use super::*;
use crate::{
    animation::{ease::Ease, morph::Morph},
    layout::engine::{LayoutParams, layout},
    tree::model::Node,
};

fn tree() -> Node {
    Node::new(
        6,
        Some(Node::new(4, Some(Node::leaf(3)), Some(Node::leaf(5)))),
        Some(Node::leaf(7)),
    )
}

fn kinds(ds: &[Drawable]) -> Vec<&'static str> {
    ds.iter()
        .map(|d| match d {
            Drawable::Background { .. } => "bg",
            Drawable::Glow { .. } => "glow",
            Drawable::NodeBox { .. } => "box",
            Drawable::Label { .. } => "label",
            Drawable::Edge { .. } => "edge",
            Drawable::Text { .. } => "text",
        })
        .collect()
}

#[test]
fn each_subtree_draws_node_then_edge_then_child() {
    let l = layout(&Node::leaf(1).with_right(Node::leaf(2)), &LayoutParams::default());
    let ds = drawables_for(&l, &Theme::default(), 0.0);
    assert_eq!(kinds(&ds), ["box", "label", "edge", "box", "label"]);
}

#[test]
fn counts_match_layout() {
    let l = layout(&tree(), &LayoutParams::default());
    let ds = drawables_for(&l, &Theme::default(), 0.0);
    let boxes = ds.iter().filter(|d| matches!(d, Drawable::NodeBox { .. })).count();
    let edges = ds.iter().filter(|d| matches!(d, Drawable::Edge { .. })).count();
    assert_eq!(boxes, 5);
    assert_eq!(edges, 4);
}

#[test]
fn edges_use_layout_anchors() {
    let l = layout(&tree(), &LayoutParams::default());
    let ds = drawables_for(&l, &Theme::default(), 0.0);
    let lines: Vec<Line> = ds
        .iter()
        .filter_map(|d| match d {
            Drawable::Edge { line, .. } => Some(*line),
            _ => None,
        })
        .collect();
    let expected: Vec<Line> = l.edges.iter().map(|e| Line::new(e.start, e.end)).collect();
    assert_eq!(lines, expected);
}

#[test]
fn glow_is_opt_in_and_time_driven() {
    let l = layout(&Node::leaf(1), &LayoutParams::default());
    assert!(
        !drawables_for(&l, &Theme::default(), 0.0)
            .iter()
            .any(|d| matches!(d, Drawable::Glow { .. }))
    );

    let theme = Theme {
        glow: true,
        ..Theme::default()
    };
    let glow_at = |t: f64| {
        drawables_for(&l, &theme, t)
            .into_iter()
            .find_map(|d| match d {
                Drawable::Glow { opacity, .. } => Some(opacity),
                _ => None,
            })
            .unwrap()
    };
    assert_eq!(glow_at(1.0), glow_at(1.0));
    assert_ne!(glow_at(0.0), glow_at(1.0));
}

#[test]
fn invisible_items_are_skipped() {
    let params = LayoutParams::default();
    let a = layout(&Node::leaf(1), &params);
    let b = layout(&Node::leaf(2), &params);
    let frame = Morph::between(&a, &b).sample(0.0, Ease::Linear);
    let ds = drawables_for_frame(&frame, &Theme::default(), 0.0);
    let labels: Vec<&str> = ds
        .iter()
        .filter_map(|d| match d {
            Drawable::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(labels, ["1"]);
}
