//! Askama views over the catalog.
//!
//! The node partial renders itself recursively: each child is itself a
//! template, written into the parent markup via its `Display` impl.

use crate::catalog::TreeCatalog;
use crate::tree::{InfoEntry, TreeNode};
use crate::types::NodeId;
use askama::Template;

/// One node and its subtree.
#[derive(Template)]
#[template(path = "node.html")]
pub struct NodeView<'a> {
    label: &'a str,
    id: Option<NodeId>,
    info: &'a [InfoEntry],
    children: Vec<NodeView<'a>>,
}

impl<'a> NodeView<'a> {
    pub fn new(node: &'a TreeNode) -> Self {
        NodeView {
            label: node.label(),
            id: node.id(),
            info: node.info(),
            children: node.children().iter().map(NodeView::new).collect(),
        }
    }
}

/// The catalog page: every tree, in catalog order.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    trees: Vec<TreeSection<'a>>,
}

struct TreeSection<'a> {
    name: &'a str,
    root: NodeView<'a>,
}

impl<'a> IndexPage<'a> {
    pub fn new(catalog: &'a TreeCatalog) -> Self {
        IndexPage {
            trees: catalog
                .entries()
                .iter()
                .map(|entry| TreeSection {
                    name: entry.name.as_str(),
                    root: NodeView::new(&entry.root),
                })
                .collect(),
        }
    }
}
