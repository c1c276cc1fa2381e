//! Table of contents tree.

use serde::{Deserialize, Serialize};

use crate::TocEntry;

/// A TOC entry together with its nested entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocNode {
    /// The entry itself.
    pub entry: TocEntry,
    /// Directly nested entries in document order.
    pub children: Vec<TocNode>,
}

impl TocNode {
    /// Creates a node without children.
    pub fn new(entry: TocEntry) -> Self {
        Self {
            entry,
            children: Vec::new(),
        }
    }

    /// Visits this node and all descendants in pre-order, passing the
    /// zero-based depth relative to this node.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(usize, &'a TocNode)) {
        self.walk_at(0, f);
    }

    fn walk_at<'a>(&'a self, depth: usize, f: &mut impl FnMut(usize, &'a TocNode)) {
        f(depth, self);
        for child in &self.children {
            child.walk_at(depth + 1, f);
        }
    }
}

/// Arranges flat TOC entries into a forest by dotted-number depth.
///
/// Depth comes only from the number of segments; prefixes are not compared.
/// An entry that skips levels is attached to the nearest open ancestor.
pub fn build_toc_tree(entries: &[TocEntry]) -> Vec<TocNode> {
    let mut roots: Vec<TocNode> = Vec::new();
    // stack[i] is the open node at depth i + 1
    let mut stack: Vec<TocNode> = Vec::new();

    for entry in entries {
        let depth = entry.depth();
        while stack.len() >= depth {
            close_top(&mut stack, &mut roots);
        }
        stack.push(TocNode::new(entry.clone()));
    }

    while !stack.is_empty() {
        close_top(&mut stack, &mut roots);
    }

    roots
}

fn close_top(stack: &mut Vec<TocNode>, roots: &mut Vec<TocNode>) {
    if let Some(node) = stack.pop() {
        match stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => roots.push(node),
        }
    }
}
