//! Format catalog listings and validation results as text.

use crate::catalog::{TreeCatalog, ValidateResult};
use crate::tree::TreeNode;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Indented pre-order listing of a single tree.
pub fn format_tree_text(name: &str, root: &TreeNode) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading(name)));
    push_node(&mut out, root, 0);
    out
}

fn push_node(out: &mut String, node: &TreeNode, depth: usize) {
    let indent = "  ".repeat(depth);
    let id = node
        .id()
        .map(|id| format!("#{}", id))
        .unwrap_or_else(|| "-".to_string());
    out.push_str(&format!("{}{} [{}]\n", indent, node.label(), id));
    for entry in node.info() {
        out.push_str(&format!(
            "{}  * {} -> {}\n",
            indent, entry.label, entry.destination
        ));
    }
    for child in node.children() {
        push_node(out, child, depth + 1);
    }
}

/// Catalog overview: summary table followed by each tree listing.
pub fn format_catalog_text(catalog: &TreeCatalog) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Tree Catalog")));
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Tree", "Nodes", "Info entries"]);
    for entry in catalog.entries() {
        table.add_row(vec![
            entry.name.clone(),
            entry.root.node_count().to_string(),
            entry.root.info_count().to_string(),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));
    for entry in catalog.entries() {
        out.push_str(&format_tree_text(&entry.name, &entry.root));
        out.push('\n');
    }
    out
}

/// Format a validation result as human-readable text.
pub fn format_validate_result_text(result: &ValidateResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Validation")));
    out.push_str(&format!(
        "  Valid: {}\n",
        if result.valid { "yes" } else { "no" }
    ));
    out.push_str(&format!("  Trees: {}\n", result.tree_count));
    out.push_str(&format!("  Nodes: {}\n", result.node_count));
    if !result.errors.is_empty() {
        out.push_str("\n  Errors:\n");
        for error in &result.errors {
            out.push_str(&format!("    - {}\n", error));
        }
    }
    out
}
