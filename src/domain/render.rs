//! Human-readable rendering of claim forests.

use std::collections::HashSet;

use generational_arena::Index;
use termtree::Tree;

use crate::domain::arena::{ClaimForest, ClaimNode};

fn label(node: &ClaimNode) -> String {
    format!("Claim {}: {}", node.claim.number, node.claim.summary())
}

/// Indented outline of the subtree under `root`: two spaces per depth level,
/// one claim per line. A claim reachable via several parents appears once
/// under each of them; a reference cycle is marked and not descended into.
pub fn render_outline(forest: &ClaimForest, root: Index) -> String {
    let mut out = String::new();
    let mut path = HashSet::new();
    outline_node(forest, root, 0, &mut path, &mut out);
    out
}

fn outline_node(
    forest: &ClaimForest,
    idx: Index,
    level: usize,
    path: &mut HashSet<Index>,
    out: &mut String,
) {
    if let Some(node) = forest.get(idx) {
        let indent = "  ".repeat(level);
        if !path.insert(idx) {
            out.push_str(&format!(
                "{}- Claim {} (reference cycle)\n",
                indent, node.claim.number
            ));
            return;
        }
        out.push_str(&format!("{}- {}\n", indent, label(node)));
        for &child in &node.children {
            outline_node(forest, child, level + 1, path, out);
        }
        path.remove(&idx);
    }
}

/// Convert the subtree under `root` into a [`termtree::Tree`] for display.
pub fn to_tree_string(forest: &ClaimForest, root: Index) -> Tree<String> {
    let mut path = HashSet::new();
    tree_node(forest, root, &mut path)
}

fn tree_node(forest: &ClaimForest, idx: Index, path: &mut HashSet<Index>) -> Tree<String> {
    if let Some(node) = forest.get(idx) {
        if !path.insert(idx) {
            return Tree::new(format!("Claim {} (reference cycle)", node.claim.number));
        }
        let leaves: Vec<_> = node
            .children
            .iter()
            .map(|&child| tree_node(forest, child, path))
            .collect();
        path.remove(&idx);
        Tree::new(label(node)).with_leaves(leaves)
    } else {
        Tree::new("Empty tree".to_string())
    }
}
