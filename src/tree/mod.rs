//! Tree node types and construction.
//!
//! Nodes carry a display label, metadata leaves (`info`), and owned children.
//! Trees are built through [`NodeBuilder`] and are immutable afterwards; only
//! the id assignment in [`ids`] writes to a built tree.

pub mod ids;

use crate::types::NodeId;
use serde::Serialize;

/// Leaf metadata record attached to a node. Info entries are display data
/// only; they are never traversed and never receive ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoEntry {
    pub label: String,
    pub destination: String,
}

/// A node in the display hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    label: String,
    info: Vec<InfoEntry>,
    children: Vec<TreeNode>,
    /// Assigned by the pre-order traversal; `None` until assignment runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<NodeId>,
}

impl TreeNode {
    /// Start building a node with the given label.
    pub fn builder(label: impl Into<String>) -> NodeBuilder {
        NodeBuilder::new(label)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn info(&self) -> &[InfoEntry] {
        &self.info
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub fn id(&self) -> Option<NodeId> {
        self.id
    }

    /// Depth-first pre-order traversal over this node and all descendants.
    pub fn iter(&self) -> PreorderIter<'_> {
        PreorderIter { stack: vec![self] }
    }

    /// Number of nodes in this subtree, root included.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Number of info entries across this subtree.
    pub fn info_count(&self) -> usize {
        self.iter().map(|node| node.info.len()).sum()
    }
}

/// Pre-order iterator; children are visited left to right.
pub struct PreorderIter<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for PreorderIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed so the leftmost child is popped first.
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Builder for [`TreeNode`].
#[derive(Debug, Default)]
pub struct NodeBuilder {
    label: String,
    info: Vec<InfoEntry>,
    children: Vec<TreeNode>,
}

impl NodeBuilder {
    pub fn new(label: impl Into<String>) -> Self {
        NodeBuilder {
            label: label.into(),
            info: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an info entry (label + destination).
    pub fn info(mut self, label: impl Into<String>, destination: impl Into<String>) -> Self {
        self.info.push(InfoEntry {
            label: label.into(),
            destination: destination.into(),
        });
        self
    }

    /// Append a child subtree.
    pub fn child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Finish the node. The id stays unassigned until a traversal numbers it.
    pub fn build(self) -> TreeNode {
        TreeNode {
            label: self.label,
            info: self.info,
            children: self.children,
            id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeNode {
        TreeNode::builder("root")
            .child(
                TreeNode::builder("a")
                    .info("a-doc", "/a-doc")
                    .child(TreeNode::builder("a1").build())
                    .build(),
            )
            .child(TreeNode::builder("b").build())
            .build()
    }

    #[test]
    fn built_nodes_have_no_id() {
        let tree = sample();
        assert!(tree.iter().all(|node| node.id().is_none()));
    }

    #[test]
    fn iter_is_preorder_left_to_right() {
        let tree = sample();
        let labels: Vec<&str> = tree.iter().map(|node| node.label()).collect();
        assert_eq!(labels, vec!["root", "a", "a1", "b"]);
    }

    #[test]
    fn node_count_includes_root_and_descendants() {
        let tree = sample();
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.info_count(), 1);
    }

    #[test]
    fn info_entries_keep_insertion_order() {
        let node = TreeNode::builder("n")
            .info("first", "/first")
            .info("second", "/second")
            .build();
        let labels: Vec<&str> = node.info().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second"]);
    }
}
