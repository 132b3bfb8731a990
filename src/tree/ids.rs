//! Pre-order id assignment.

use crate::tree::TreeNode;
use crate::types::NodeId;

/// Assign `start` to `node`, then number each child subtree in order,
/// threading the counter through the full subtree.
///
/// Returns the smallest id not used by this node or any of its descendants
/// (`start + subtree size`), so the caller can continue numbering a sibling
/// or a subsequent independent tree without collision. A node with no
/// children returns `start + 1`.
///
/// Info entries are metadata leaves, not children; they are never numbered.
pub fn assign_ids(node: &mut TreeNode, start: NodeId) -> NodeId {
    node.id = Some(start);
    let mut next = start + 1;
    for child in &mut node.children {
        next = assign_ids(child, next);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_node_gets_start_and_returns_next() {
        let mut node = TreeNode::builder("only").build();
        let next = assign_ids(&mut node, 0);
        assert_eq!(node.id(), Some(0));
        assert_eq!(next, 1);
    }

    #[test]
    fn two_leaf_children_numbered_left_to_right() {
        let mut tree = TreeNode::builder("root")
            .child(TreeNode::builder("left").build())
            .child(TreeNode::builder("right").build())
            .build();
        let next = assign_ids(&mut tree, 0);
        assert_eq!(tree.id(), Some(0));
        assert_eq!(tree.children()[0].id(), Some(1));
        assert_eq!(tree.children()[1].id(), Some(2));
        assert_eq!(next, 3);
    }

    #[test]
    fn sibling_subtree_continues_after_full_left_subtree() {
        let mut tree = TreeNode::builder("root")
            .child(
                TreeNode::builder("left")
                    .child(TreeNode::builder("left-leaf").build())
                    .build(),
            )
            .child(TreeNode::builder("right").build())
            .build();
        assign_ids(&mut tree, 0);
        assert_eq!(tree.id(), Some(0));
        assert_eq!(tree.children()[0].id(), Some(1));
        assert_eq!(tree.children()[0].children()[0].id(), Some(2));
        assert_eq!(tree.children()[1].id(), Some(3));
    }

    #[test]
    fn info_entries_are_not_numbered() {
        let mut tree = TreeNode::builder("root")
            .info("meta", "/meta")
            .child(TreeNode::builder("child").info("doc", "/doc").build())
            .build();
        let next = assign_ids(&mut tree, 0);
        // Two nodes total; info entries do not consume ids.
        assert_eq!(next, 2);
    }

    #[test]
    fn reassignment_with_offset_shifts_every_id() {
        let mut tree = TreeNode::builder("root")
            .child(TreeNode::builder("a").build())
            .child(TreeNode::builder("b").build())
            .build();
        assign_ids(&mut tree, 0);
        let before: Vec<_> = tree.iter().map(|n| n.id().unwrap()).collect();
        assign_ids(&mut tree, 10);
        let after: Vec<_> = tree.iter().map(|n| n.id().unwrap()).collect();
        let shifted: Vec<_> = before.iter().map(|id| id + 10).collect();
        assert_eq!(after, shifted);
    }

    #[test]
    fn nonzero_start_numbers_independent_trees_without_collision() {
        let mut first = TreeNode::builder("first")
            .child(TreeNode::builder("leaf").build())
            .build();
        let mut second = TreeNode::builder("second").build();
        let next = assign_ids(&mut first, 0);
        let next = assign_ids(&mut second, next);
        assert_eq!(first.id(), Some(0));
        assert_eq!(second.id(), Some(2));
        assert_eq!(next, 3);
    }
}
