//! Id-referenced node tables.
//!
//! Hand-written deck files and arena-backed producers describe a tree as a flat
//! list of nodes pointing at each other by id. Such a table can describe things
//! that are not trees, so it is checked before being turned into an owned
//! [`Node`].

use std::collections::{HashMap, HashSet};

use crate::{
    foundation::error::{SplayError, SplayResult},
    tree::model::{Label, Node, assemble},
};

/// One row of a [`FlatTree`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FlatNode {
    /// Unique id within the table.
    pub id: u32,
    /// Display label.
    pub label: Label,
    /// Id of the left child.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<u32>,
    /// Id of the right child.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<u32>,
}

/// A binary tree as a table of nodes plus a root id.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FlatTree {
    /// Id of the root row.
    pub root: u32,
    /// All rows, in any order.
    pub nodes: Vec<FlatNode>,
}

impl FlatTree {
    /// Convert into an owned tree.
    ///
    /// Fails with [`SplayError::InvalidTopology`] on duplicate ids, dangling
    /// child ids, a child referenced by two parents, or a cycle. Rows that are
    /// not reachable from the root are a [`SplayError::Validation`] error.
    pub fn into_tree(self) -> SplayResult<Node> {
        let res = self.into_tree_impl();
        if let Err(err) = &res {
            tracing::warn!(%err, "rejected flat tree");
        }
        res
    }

    fn into_tree_impl(self) -> SplayResult<Node> {
        let mut index_of = HashMap::<u32, usize>::with_capacity(self.nodes.len());
        for (idx, n) in self.nodes.iter().enumerate() {
            if index_of.insert(n.id, idx).is_some() {
                return Err(SplayError::invalid_topology(format!(
                    "duplicate node id {}",
                    n.id
                )));
            }
        }
        if !index_of.contains_key(&self.root) {
            return Err(SplayError::invalid_topology(format!(
                "root id {} is not in the table",
                self.root
            )));
        }

        let mut parent_of = HashMap::<u32, u32>::with_capacity(self.nodes.len());
        for n in &self.nodes {
            for child in [n.left, n.right].into_iter().flatten() {
                if !index_of.contains_key(&child) {
                    return Err(SplayError::invalid_topology(format!(
                        "node {} references unknown child {child}",
                        n.id
                    )));
                }
                if child == self.root {
                    return Err(SplayError::invalid_topology(format!(
                        "cycle: root {child} is a child of node {}",
                        n.id
                    )));
                }
                if let Some(prev) = parent_of.insert(child, n.id) {
                    return Err(SplayError::invalid_topology(format!(
                        "node {child} is a child of both {prev} and {}",
                        n.id
                    )));
                }
            }
        }

        let reachable = reachable_from(self.root, &self.nodes, &index_of);
        if reachable.len() != self.nodes.len() {
            let mut stray: Vec<u32> = self
                .nodes
                .iter()
                .map(|n| n.id)
                .filter(|id| !reachable.contains(id))
                .collect();
            stray.sort_unstable();
            for &id in &stray {
                if on_parent_cycle(id, &parent_of) {
                    return Err(SplayError::invalid_topology(format!(
                        "cycle through node {id}"
                    )));
                }
            }
            return Err(SplayError::validation(format!(
                "nodes {stray:?} are not reachable from root {}",
                self.root
            )));
        }

        let mut slots: Vec<Option<FlatNode>> = self.nodes.into_iter().map(Some).collect();
        build(self.root, &index_of, &mut slots)
    }
}

impl From<&Node> for FlatTree {
    /// Ids are assigned in node, left, right order starting at 0.
    fn from(root: &Node) -> Self {
        let mut nodes: Vec<FlatNode> = Vec::with_capacity(root.len());
        let mut stack: Vec<(&Node, Option<(usize, bool)>)> = vec![(root, None)];
        while let Some((node, parent)) = stack.pop() {
            let id = nodes.len() as u32;
            if let Some((idx, is_left)) = parent {
                let row = &mut nodes[idx];
                if is_left {
                    row.left = Some(id);
                } else {
                    row.right = Some(id);
                }
            }
            nodes.push(FlatNode {
                id,
                label: node.label().clone(),
                left: None,
                right: None,
            });
            let idx = id as usize;
            stack.extend(node.right().map(|c| (c, Some((idx, false)))));
            stack.extend(node.left().map(|c| (c, Some((idx, true)))));
        }
        Self { root: 0, nodes }
    }
}

fn reachable_from(root: u32, nodes: &[FlatNode], index_of: &HashMap<u32, usize>) -> HashSet<u32> {
    let mut seen = HashSet::with_capacity(nodes.len());
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        if !seen.insert(id) {
            continue;
        }
        if let Some(&idx) = index_of.get(&id) {
            let n = &nodes[idx];
            stack.extend(n.left);
            stack.extend(n.right);
        }
    }
    seen
}

fn on_parent_cycle(start: u32, parent_of: &HashMap<u32, u32>) -> bool {
    let mut seen = HashSet::new();
    let mut cur = start;
    while let Some(&p) = parent_of.get(&cur) {
        if !seen.insert(p) {
            return true;
        }
        cur = p;
    }
    false
}

fn build(
    root: u32,
    index_of: &HashMap<u32, usize>,
    slots: &mut [Option<FlatNode>],
) -> SplayResult<Node> {
    let mut rest = Vec::with_capacity(slots.len().saturating_sub(1));
    // Each row can be taken once; a second visit means the table is not a tree.
    let mut take = |id: u32| {
        index_of
            .get(&id)
            .and_then(|&idx| slots[idx].take())
            .ok_or_else(|| SplayError::invalid_topology(format!("node {id} visited twice")))
    };

    let first = take(root)?;
    let mut stack: Vec<u32> = Vec::new();
    stack.extend(first.right);
    stack.extend(first.left);
    while let Some(id) = stack.pop() {
        let row = take(id)?;
        stack.extend(row.right);
        stack.extend(row.left);
        rest.push((row.label, row.left.is_some(), row.right.is_some()));
    }
    let root_row = (first.label, first.left.is_some(), first.right.is_some());
    Ok(assemble(root_row, rest))
}

#[cfg(test)]
#[path = "../../tests/unit/tree/flat.rs"]
mod tests;
