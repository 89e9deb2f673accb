use super::config::LayoutConfig;
use crate::outcome::{OutcomeNode, walk};

/// Vertical position of every depth level.
///
/// Built by its own scan over the whole tree because the spacing below a level depends on
/// every node at that level: if any one of them has scorecards, the whole row gets the
/// taller gap so that row heights stay uniform.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthTable {
    offsets: Vec<f64>,
    has_scorecards: Vec<bool>,
}

impl DepthTable {
    pub fn scan(root: &OutcomeNode, config: &LayoutConfig) -> Self {
        Self::from_levels(walk::scorecard_levels(root), config)
    }

    /// Builds the table from per-level "has scorecards" flags, indexed by depth.
    pub fn from_levels(has_scorecards: Vec<bool>, config: &LayoutConfig) -> Self {
        let mut offsets = Vec::with_capacity(has_scorecards.len());
        let mut y = 0.0;
        for depth in 0..has_scorecards.len() {
            if depth > 0 {
                y += config.base_vertical_spacing;
                if has_scorecards[depth - 1] {
                    y += config.scorecard_vertical_spacing;
                }
            }
            offsets.push(y);
        }
        Self {
            offsets,
            has_scorecards,
        }
    }

    /// Number of levels in the tree.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn y(&self, depth: usize) -> Option<f64> {
        self.offsets.get(depth).copied()
    }

    pub fn level_has_scorecards(&self, depth: usize) -> bool {
        self.has_scorecards.get(depth).copied().unwrap_or(false)
    }
}
