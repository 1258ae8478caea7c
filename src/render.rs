//! Plain-text rendering of a group tree.
//!
//! Debug and golden-test helper: one line per node in depth-first order,
//! two-space indent per level, an active marker, and a leaf count for
//! internal nodes. Output is deterministic (children in stored order).

use crate::record::GroupId;
use crate::tree::GroupTree;

/// Render the whole tree to an indented text block
pub fn render_tree(tree: &GroupTree) -> String {
    let mut out = String::new();
    render_node(tree, tree.root_id(), 0, &mut out);
    out
}

fn render_node(tree: &GroupTree, id: GroupId, depth: usize, out: &mut String) {
    let node = match tree.get(id) {
        Some(node) => node,
        None => return,
    };
    let indent = "  ".repeat(depth);
    let marker = if node.is_active() { "[x]" } else { "[ ]" };
    out.push_str(&indent);
    out.push_str(marker);
    out.push(' ');
    out.push_str(&id.to_string());
    if !node.is_leaf() {
        out.push_str(&format!(" ({} leaves)", node.n_leaves()));
    }
    out.push('\n');
    for &child in node.children() {
        render_node(tree, child, depth + 1, out);
    }
}
