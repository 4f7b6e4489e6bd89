use std::fmt;

/// Display value carried by a node. Layout treats it as opaque.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(untagged)]
pub enum Label {
    /// Integer key, the common case for search-tree diagrams.
    Int(i64),
    /// Free-form text.
    Text(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i32> for Label {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Label {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Label {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A binary tree node; every node is also the root of its subtree.
///
/// Children are owned, so a `Node` is always a tree: no sharing, no cycles.
/// Geometry (level, position, edge anchors) is never stored here; it is the
/// output of [`crate::layout`].
///
/// JSON form: `{"label": 6, "left": {...}, "right": {...}}` with either child
/// optional.
///
/// `Clone`, `PartialEq` and `Drop` walk the tree with an explicit stack, so a
/// degenerate spine of any length is safe to copy, compare and free.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Node {
    label: Label,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    left: Option<Box<Node>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    right: Option<Box<Node>>,
}

impl Node {
    /// Build a node with optional children already attached.
    pub fn new(label: impl Into<Label>, left: Option<Node>, right: Option<Node>) -> Self {
        Self {
            label: label.into(),
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Build a node without children.
    pub fn leaf(label: impl Into<Label>) -> Self {
        Self::new(label, None, None)
    }

    /// Builder-style: attach `child` as the left child.
    pub fn with_left(mut self, child: Node) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    /// Builder-style: attach `child` as the right child.
    pub fn with_right(mut self, child: Node) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub fn left_mut(&mut self) -> Option<&mut Node> {
        self.left.as_deref_mut()
    }

    pub fn right_mut(&mut self) -> Option<&mut Node> {
        self.right.as_deref_mut()
    }

    /// Replace the left child, returning the previous one.
    pub fn set_left(&mut self, child: Option<Node>) -> Option<Node> {
        std::mem::replace(&mut self.left, child.map(Box::new)).map(|b| *b)
    }

    /// Replace the right child, returning the previous one.
    pub fn set_right(&mut self, child: Option<Node>) -> Option<Node> {
        std::mem::replace(&mut self.right, child.map(Box::new)).map(|b| *b)
    }

    /// True iff the node has neither child.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of nodes in this subtree.
    pub fn len(&self) -> usize {
        let mut count = 0usize;
        let mut stack = vec![self];
        while let Some(n) = stack.pop() {
            count += 1;
            stack.extend(n.left());
            stack.extend(n.right());
        }
        count
    }

    /// Always false: a subtree contains at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Deepest level below this node (0 for a leaf).
    pub fn depth(&self) -> u32 {
        let mut max = 0u32;
        let mut stack = vec![(self, 0u32)];
        while let Some((n, level)) = stack.pop() {
            max = max.max(level);
            for child in [n.left(), n.right()].into_iter().flatten() {
                stack.push((child, level + 1));
            }
        }
        max
    }

    /// Labels in node, left, right order.
    pub fn labels_preorder(&self) -> Vec<&Label> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack = vec![self];
        while let Some(n) = stack.pop() {
            out.push(&n.label);
            // right pushed first so left is visited first
            stack.extend(n.right());
            stack.extend(n.left());
        }
        out
    }
}

/// One entry of a node, left, right listing: a label and which children follow it.
pub(crate) type PreorderRow = (Label, bool, bool);

/// Rebuild a tree from `root` and the rows after it in node, left, right order.
pub(crate) fn assemble(root: PreorderRow, rest: Vec<PreorderRow>) -> Node {
    // Walking the listing backwards finishes every subtree before its parent;
    // the left subtree ends up above the right one on `done`.
    fn join((label, has_left, has_right): PreorderRow, done: &mut Vec<Node>) -> Node {
        let left = if has_left { done.pop() } else { None };
        let right = if has_right { done.pop() } else { None };
        Node::new(label, left, right)
    }

    let mut done = Vec::new();
    for row in rest.into_iter().rev() {
        let node = join(row, &mut done);
        done.push(node);
    }
    join(root, &mut done)
}

impl Clone for Node {
    fn clone(&self) -> Self {
        let mut rest = Vec::new();
        let mut stack: Vec<&Node> = Vec::new();
        stack.extend(self.right());
        stack.extend(self.left());
        while let Some(n) = stack.pop() {
            rest.push((n.label.clone(), n.left.is_some(), n.right.is_some()));
            stack.extend(n.right());
            stack.extend(n.left());
        }
        let root = (self.label.clone(), self.left.is_some(), self.right.is_some());
        assemble(root, rest)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.label != b.label {
                return false;
            }
            for pair in [(a.left(), b.left()), (a.right(), b.right())] {
                match pair {
                    (Some(x), Some(y)) => stack.push((x, y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for Node {}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut n) = pending.pop() {
            pending.extend(n.left.take());
            pending.extend(n.right.take());
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tree/model.rs"]
mod tests;
