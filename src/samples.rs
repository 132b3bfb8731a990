//! The built-in catalog entries.
//!
//! Three small folder hierarchies used as display data. Construction goes
//! through the builders; ids are assigned when the catalog is built.

use crate::catalog::TreeCatalog;
use crate::tree::TreeNode;

/// Build the catalog of the three sample trees.
pub fn sample_catalog() -> TreeCatalog {
    TreeCatalog::builder()
        .tree("Tree 1", sample_tree())
        .tree("Tree 2", home_tree())
        .tree("Tree 3", media_tree())
        .build()
}

fn sample_tree() -> TreeNode {
    TreeNode::builder("Root")
        .child(
            TreeNode::builder("Folder 1")
                .info("File 1-1", "/destination1-1")
                .info("File 1-2", "/destination1-2")
                .child(
                    TreeNode::builder("Subfolder 1-1")
                        .info("File 1-1-1", "/destination1-1-1")
                        .build(),
                )
                .build(),
        )
        .child(
            TreeNode::builder("Folder 2")
                .info("File 2-1", "/destination2-1")
                .build(),
        )
        .build()
}

fn home_tree() -> TreeNode {
    TreeNode::builder("Home")
        .child(
            TreeNode::builder("Documents")
                .info("Doc1", "/doc1")
                .child(
                    TreeNode::builder("Work")
                        .info("Report", "/report")
                        .build(),
                )
                .build(),
        )
        .child(
            TreeNode::builder("Pictures")
                .info("Pic1", "/pic1")
                .build(),
        )
        .build()
}

fn media_tree() -> TreeNode {
    TreeNode::builder("Media")
        .child(
            TreeNode::builder("Music")
                .info("Song1", "/song1")
                .info("Song2", "/song2")
                .build(),
        )
        .child(
            TreeNode::builder("Videos")
                .info("Video1", "/video1")
                .build(),
        )
        .build()
}
