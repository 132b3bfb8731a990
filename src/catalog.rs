//! Tree Catalog
//!
//! Named, ordered collection of numbered trees. The catalog is built once at
//! startup; each tree is numbered starting fresh at 0 on insert, and the
//! whole structure is read-only afterwards.

use crate::tree::ids::assign_ids;
use crate::tree::TreeNode;
use crate::types::NodeId;
use serde::Serialize;

/// One named tree in the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub name: String,
    pub root: TreeNode,
}

/// Ordered catalog of named trees.
#[derive(Debug, Clone, Serialize)]
pub struct TreeCatalog {
    trees: Vec<CatalogEntry>,
}

impl TreeCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder { trees: Vec::new() }
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.trees
    }

    /// Look up an entry by tree name.
    pub fn entry(&self, name: &str) -> Option<&CatalogEntry> {
        self.trees.iter().find(|entry| entry.name == name)
    }

    /// Look up a tree root by name.
    pub fn get(&self, name: &str) -> Option<&TreeNode> {
        self.entry(name).map(|entry| &entry.root)
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Total node count across all trees.
    pub fn node_count(&self) -> usize {
        self.trees.iter().map(|entry| entry.root.node_count()).sum()
    }

    /// Check the id invariants of every tree: the root holds id 0, every
    /// node is numbered, and a pre-order walk sees exactly `0..K` in order
    /// (which makes ids unique, gapless, and ancestor-before-descendant).
    pub fn validate(&self) -> ValidateResult {
        let mut errors = Vec::new();
        for entry in &self.trees {
            validate_tree(entry, &mut errors);
        }
        ValidateResult {
            valid: errors.is_empty(),
            tree_count: self.len(),
            node_count: self.node_count(),
            errors,
        }
    }
}

fn validate_tree(entry: &CatalogEntry, errors: &mut Vec<String>) {
    if entry.root.id() != Some(0) {
        errors.push(format!(
            "{}: root id is {:?}, expected 0",
            entry.name,
            entry.root.id()
        ));
    }
    let mut expected: NodeId = 0;
    for node in entry.root.iter() {
        match node.id() {
            Some(id) if id == expected => expected += 1,
            Some(id) => {
                errors.push(format!(
                    "{}: node {:?} has id {}, expected {} in pre-order",
                    entry.name,
                    node.label(),
                    id,
                    expected
                ));
                return;
            }
            None => {
                errors.push(format!(
                    "{}: node {:?} has no id assigned",
                    entry.name,
                    node.label()
                ));
                return;
            }
        }
    }
}

/// Result of catalog validation.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateResult {
    pub valid: bool,
    pub tree_count: usize,
    pub node_count: usize,
    pub errors: Vec<String>,
}

/// Builder for [`TreeCatalog`]. Numbering happens at insert time so the
/// finished catalog never holds an unnumbered tree.
pub struct CatalogBuilder {
    trees: Vec<CatalogEntry>,
}

impl CatalogBuilder {
    /// Insert a named tree, assigning its ids starting fresh at 0.
    pub fn tree(mut self, name: impl Into<String>, mut root: TreeNode) -> Self {
        assign_ids(&mut root, 0);
        self.trees.push(CatalogEntry {
            name: name.into(),
            root,
        });
        self
    }

    pub fn build(self) -> TreeCatalog {
        TreeCatalog { trees: self.trees }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> TreeCatalog {
        TreeCatalog::builder()
            .tree(
                "First",
                TreeNode::builder("root-a")
                    .child(TreeNode::builder("leaf").build())
                    .build(),
            )
            .tree("Second", TreeNode::builder("root-b").build())
            .build()
    }

    #[test]
    fn each_tree_is_numbered_from_zero() {
        let catalog = catalog();
        for entry in catalog.entries() {
            assert_eq!(entry.root.id(), Some(0));
        }
    }

    #[test]
    fn entries_keep_insertion_order() {
        let catalog = catalog();
        let names: Vec<&str> = catalog
            .entries()
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn lookup_by_name() {
        let catalog = catalog();
        assert_eq!(catalog.get("First").map(|t| t.label()), Some("root-a"));
        assert!(catalog.get("Missing").is_none());
    }

    #[test]
    fn validate_reports_clean_catalog() {
        let result = catalog().validate();
        assert!(result.valid);
        assert_eq!(result.tree_count, 2);
        assert_eq!(result.node_count, 3);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn validate_flags_unnumbered_tree() {
        // Bypass the builder so the tree keeps unassigned ids.
        let catalog = TreeCatalog {
            trees: vec![CatalogEntry {
                name: "Raw".to_string(),
                root: TreeNode::builder("root").build(),
            }],
        };
        let result = catalog.validate();
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 2);
    }
}
