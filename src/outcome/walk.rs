//! Shared traversal helpers over an outcome tree.
//!
//! All walks here use an explicit stack so that measuring a pathological draft (for
//! example, one nested thousands of levels deep) never overflows the call stack. The
//! recursive passes in `layout` and `flatten` call [`deepest_beyond`] first and refuse
//! trees that exceed their configured maximum depth.

use super::{NodeRole, OutcomeNode};

/// A node reached during a pre-order walk.
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    pub node: &'a OutcomeNode,
    pub role: NodeRole,
}

/// Pre-order, left-to-right iterator over a subtree.
pub struct Preorder<'a> {
    stack: Vec<(usize, &'a OutcomeNode)>,
}

impl<'a> Preorder<'a> {
    pub fn new(root: &'a OutcomeNode) -> Self {
        Self {
            stack: vec![(0, root)],
        }
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Reverse so the leftmost child is popped first.
        for child in node.children.iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some(Visit {
            node,
            role: NodeRole::at_depth(depth),
        })
    }
}

pub fn preorder(root: &OutcomeNode) -> Preorder<'_> {
    Preorder::new(root)
}

/// Depth of the deepest node, the root being depth 0.
pub fn max_depth(root: &OutcomeNode) -> usize {
    preorder(root).map(|v| v.role.depth()).max().unwrap_or(0)
}

pub fn node_count(root: &OutcomeNode) -> usize {
    preorder(root).count()
}

pub fn leaf_count(root: &OutcomeNode) -> usize {
    preorder(root).filter(|v| v.node.is_leaf()).count()
}

/// Returns the first node (in pre-order) whose depth is above `limit`, together with the
/// names on its path from the root.
///
/// Stops as soon as the limit is crossed, so it never walks further than `limit + 1`
/// levels below the root.
pub fn deepest_beyond(root: &OutcomeNode, limit: usize) -> Option<(usize, Vec<String>)> {
    let mut stack: Vec<(&OutcomeNode, Vec<String>)> = vec![(root, vec![root.name.clone()])];
    while let Some((node, path)) = stack.pop() {
        let depth = path.len() - 1;
        if depth > limit {
            return Some((depth, path));
        }
        for child in node.children.iter().rev() {
            let mut child_path = path.clone();
            child_path.push(child.name.clone());
            stack.push((child, child_path));
        }
    }
    None
}

/// Whether any node at each depth carries at least one scorecard, indexed by depth.
pub fn scorecard_levels(root: &OutcomeNode) -> Vec<bool> {
    let mut levels: Vec<bool> = Vec::new();
    for visit in preorder(root) {
        let depth = visit.role.depth();
        if levels.len() <= depth {
            levels.resize(depth + 1, false);
        }
        levels[depth] |= visit.node.scorecard_count() > 0;
    }
    levels
}
