use super::*;

fn row(id: u32, label: i32, left: Option<u32>, right: Option<u32>) -> FlatNode {
    FlatNode {
        id,
        label: Label::from(label),
        left,
        right,
    }
}

#[test]
fn table_in_any_order_builds_tree() {
    let flat = FlatTree {
        root: 10,
        nodes: vec![
            row(3, 3, None, None),
            row(10, 6, Some(4), Some(7)),
            row(7, 7, None, None),
            row(4, 4, Some(3), None),
        ],
    };
    let tree = flat.into_tree().unwrap();
    let expected = Node::new(6, Some(Node::leaf(4).with_left(Node::leaf(3))), Some(Node::leaf(7)));
    assert_eq!(tree, expected);
}

#[test]
fn owned_tree_round_trips_through_table() {
    let tree = Node::new(
        6,
        Some(Node::new(4, Some(Node::leaf(3)), Some(Node::leaf(5)))),
        Some(Node::leaf(7)),
    );
    let flat = FlatTree::from(&tree);
    assert_eq!(flat.root, 0);
    assert_eq!(flat.nodes[0].left, Some(1));
    assert_eq!(flat.nodes[0].right, Some(4));
    assert_eq!(flat.into_tree().unwrap(), tree);
}

#[test]
fn aliased_child_is_rejected() {
    let flat = FlatTree {
        root: 0,
        nodes: vec![
            row(0, 0, Some(1), Some(2)),
            row(1, 1, Some(3), None),
            row(2, 2, None, Some(3)),
            row(3, 3, None, None),
        ],
    };
    let err = flat.into_tree().unwrap_err();
    assert!(matches!(err, SplayError::InvalidTopology(_)), "{err}");
}

#[test]
fn back_edge_to_root_is_rejected() {
    let flat = FlatTree {
        root: 0,
        nodes: vec![row(0, 0, Some(1), None), row(1, 1, None, Some(0))],
    };
    assert!(matches!(
        flat.into_tree(),
        Err(SplayError::InvalidTopology(_))
    ));
}

#[test]
fn detached_cycle_is_rejected_as_topology() {
    let flat = FlatTree {
        root: 0,
        nodes: vec![
            row(0, 0, None, None),
            row(1, 1, Some(2), None),
            row(2, 2, None, Some(1)),
        ],
    };
    assert!(matches!(
        flat.into_tree(),
        Err(SplayError::InvalidTopology(_))
    ));
}

#[test]
fn self_loop_is_rejected() {
    let flat = FlatTree {
        root: 0,
        nodes: vec![row(0, 0, Some(1), None), row(1, 1, Some(1), None)],
    };
    assert!(matches!(
        flat.into_tree(),
        Err(SplayError::InvalidTopology(_))
    ));
}

#[test]
fn dangling_and_duplicate_ids_are_rejected() {
    let dangling = FlatTree {
        root: 0,
        nodes: vec![row(0, 0, Some(9), None)],
    };
    assert!(matches!(
        dangling.into_tree(),
        Err(SplayError::InvalidTopology(_))
    ));

    let dup = FlatTree {
        root: 0,
        nodes: vec![row(0, 0, None, None), row(0, 1, None, None)],
    };
    assert!(matches!(dup.into_tree(), Err(SplayError::InvalidTopology(_))));

    let no_root = FlatTree {
        root: 5,
        nodes: vec![row(0, 0, None, None)],
    };
    assert!(matches!(
        no_root.into_tree(),
        Err(SplayError::InvalidTopology(_))
    ));
}

#[test]
fn unreachable_rows_are_a_validation_error() {
    let flat = FlatTree {
        root: 0,
        nodes: vec![row(0, 0, None, None), row(1, 1, None, None)],
    };
    assert!(matches!(flat.into_tree(), Err(SplayError::Validation(_))));
}

fn right_spine_table(len: u32) -> FlatTree {
    FlatTree {
        root: 0,
        nodes: (0..len)
            .map(|id| row(id, id as i32, None, (id + 1 < len).then_some(id + 1)))
            .collect(),
    }
}

#[test]
fn long_spine_imports_without_recursion() {
    let tree = right_spine_table(100_000).into_tree().unwrap();
    assert_eq!(tree.len(), 100_000);
    assert_eq!(tree.depth(), 99_999);

    let copy = tree.clone();
    assert!(copy == tree);

    let flat = FlatTree::from(&tree);
    assert_eq!(flat.nodes.len(), 100_000);
    assert_eq!(flat.nodes[99_998].right, Some(99_999));
    assert!(flat.into_tree().unwrap() == tree);
}

#[test]
fn long_left_spine_keeps_preorder_ids() {
    let len = 50_000u32;
    let flat = FlatTree {
        root: 0,
        nodes: (0..len)
            .map(|id| row(id, id as i32, (id + 1 < len).then_some(id + 1), None))
            .collect(),
    };
    let tree = flat.clone().into_tree().unwrap();
    assert_eq!(FlatTree::from(&tree), flat);
}
