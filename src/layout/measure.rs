use super::config::LayoutConfig;
use crate::outcome::{NodeRole, OutcomeNode};

/// A node of the layout arena with its measured widths.
#[derive(Debug)]
pub(super) struct MeasuredNode<'a> {
    pub node: &'a OutcomeNode,
    pub role: NodeRole,
    pub children: Vec<usize>,
    pub scorecard_count: usize,
    pub content_width: f64,
    pub subtree_width: f64,
}

/// Arena of measured nodes in pre-order; index 0 is the root.
pub(super) struct Measurement<'a> {
    pub nodes: Vec<MeasuredNode<'a>>,
}

impl<'a> Measurement<'a> {
    /// Flattens the tree into the arena, then sizes every subtree bottom-up.
    pub fn measure(root: &'a OutcomeNode, config: &LayoutConfig) -> Self {
        let mut nodes: Vec<MeasuredNode<'a>> = Vec::new();
        let mut stack: Vec<(&'a OutcomeNode, NodeRole, Option<usize>)> =
            vec![(root, NodeRole::Root, None)];

        while let Some((node, role, parent)) = stack.pop() {
            let index = nodes.len();
            if let Some(parent) = parent {
                nodes[parent].children.push(index);
            }
            let scorecard_count = node.scorecard_count();
            nodes.push(MeasuredNode {
                node,
                role,
                children: Vec::with_capacity(node.children.len()),
                scorecard_count,
                content_width: config.content_width(scorecard_count),
                subtree_width: 0.0,
            });
            for child in node.children.iter().rev() {
                stack.push((child, role.child(), Some(index)));
            }
        }

        // Pre-order puts every child after its parent, so a reverse sweep is post-order.
        for index in (0..nodes.len()).rev() {
            let own = nodes[index].content_width + config.min_horizontal_spacing;
            let children: f64 = nodes[index]
                .children
                .iter()
                .map(|&c| nodes[c].subtree_width)
                .sum();
            nodes[index].subtree_width = own.max(children);
        }

        Self { nodes }
    }

    pub fn root(&self) -> &MeasuredNode<'a> {
        &self.nodes[0]
    }

    pub fn children_width(&self, index: usize) -> f64 {
        self.nodes[index]
            .children
            .iter()
            .map(|&c| self.nodes[c].subtree_width)
            .sum()
    }
}
