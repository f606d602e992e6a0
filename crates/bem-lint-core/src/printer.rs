//! Indented outline of a BEM tree, for clean documents.

use std::fmt::Write;

use crate::tree::{BemTree, NodeId};

const BRANCH: &str = "└─ ";

/// Renders the tree as one line per node: the tag name followed by the
/// `.`-joined class names. Descendants are indented two spaces per level
/// below the first and prefixed with a branch marker.
#[must_use]
pub fn render_outline(tree: &BemTree<'_>) -> String {
    let mut out = String::new();
    write_node(tree, tree.root(), 0, &mut out);
    out
}

fn write_node(tree: &BemTree<'_>, id: NodeId, depth: usize, out: &mut String) {
    let node = tree.node(id);
    if depth > 0 {
        out.push_str(&"  ".repeat(depth - 1));
        out.push_str(BRANCH);
    }
    out.push_str(node.tag_name());
    for class in node.classes() {
        let _ = write!(out, ".{}", class.raw);
    }
    out.push('\n');

    for child in node.children() {
        write_node(tree, *child, depth + 1, out);
    }
}
