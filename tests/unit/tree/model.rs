use super::*;

fn zig_before() -> Node {
    Node::new(
        6,
        Some(Node::new(4, Some(Node::leaf(3)), Some(Node::leaf(5)))),
        Some(Node::leaf(7)),
    )
}

#[test]
fn leaf_has_no_children() {
    let n = Node::leaf(1);
    assert!(n.is_leaf());
    assert!(n.left().is_none());
    assert!(n.right().is_none());
    assert!(!zig_before().is_leaf());
}

#[test]
fn single_child_nodes_are_not_leaves() {
    let only_right = Node::leaf(1).with_right(Node::leaf(2));
    let only_left = Node::leaf(1).with_left(Node::leaf(0));
    assert!(!only_right.is_leaf());
    assert!(!only_left.is_leaf());
}

#[test]
fn counts_depth_and_preorder() {
    let t = zig_before();
    assert_eq!(t.len(), 5);
    assert_eq!(t.depth(), 2);
    let labels: Vec<String> = t.labels_preorder().iter().map(|l| l.to_string()).collect();
    assert_eq!(labels, ["6", "4", "3", "5", "7"]);
}

#[test]
fn set_child_returns_previous() {
    let mut t = zig_before();
    let old = t.set_right(Some(Node::leaf(8)));
    assert_eq!(old, Some(Node::leaf(7)));
    assert_eq!(t.right().map(Node::label), Some(&Label::Int(8)));
    assert_eq!(t.set_right(None), Some(Node::leaf(8)));
    assert!(t.right().is_none());
}

#[test]
fn labels_display_verbatim() {
    assert_eq!(Label::from(42).to_string(), "42");
    assert_eq!(Label::from("root").to_string(), "root");
}

#[test]
fn nested_json_accepts_missing_children() {
    let json = r#"{"label": 6, "left": {"label": 4}, "right": {"label": "seven"}}"#;
    let t: Node = serde_json::from_str(json).unwrap();
    assert_eq!(t.label(), &Label::Int(6));
    assert_eq!(t.left().unwrap().label(), &Label::Int(4));
    assert_eq!(t.right().unwrap().label(), &Label::Text("seven".to_string()));

    let back = serde_json::to_value(&t).unwrap();
    assert!(back["left"].get("left").is_none());
}

#[test]
fn equality_checks_shape_as_well_as_labels() {
    let left = Node::leaf(1).with_left(Node::leaf(2));
    let right = Node::leaf(1).with_right(Node::leaf(2));
    assert_ne!(left, right);
    assert_ne!(zig_before(), zig_before().with_right(Node::leaf(8)));
    assert_eq!(zig_before().clone(), zig_before());
}

#[test]
fn deep_spine_clones_and_drops() {
    let mut spine = Node::leaf(0);
    for label in 1..200_000 {
        spine = Node::leaf(label).with_left(spine);
    }
    let copy = spine.clone();
    assert!(copy == spine);
    assert_eq!(copy.depth(), 199_999);
    drop(spine);
    assert_eq!(copy.len(), 200_000);
}
