//! Top-to-bottom dendrogram layout for outcome trees.
//!
//! The engine runs three passes over the tree:
//!
//! 1. **Measure** (post-order): every node reserves the wider of its own content (card plus
//!    scorecard row, plus spacing) and the combined width of its children. Sibling
//!    subtrees therefore never overlap.
//! 2. **Depth scan**: one row offset per depth level. A level where any node carries
//!    scorecards gets the taller gap below it, for every node on that level.
//! 3. **Placement** (pre-order, left to right): a cursor walks across the canvas; each node
//!    is centered over the span it reserved, its scorecards form a centered row beneath it
//!    and its children tile that span.
//!
//! # Example
//!
//! ```rust
//! use blueprint::layout::LayoutEngine;
//! use blueprint::outcome::{OutcomeNode, OutcomeTree};
//!
//! let tree = OutcomeTree::new(
//!     OutcomeNode::new("All Outcomes")
//!         .with_child(OutcomeNode::new("Won"))
//!         .with_child(OutcomeNode::new("Lost")),
//! );
//! let layout = LayoutEngine::builder().build().layout(&tree, &[]).unwrap();
//! assert_eq!(layout.nodes.len(), 3);
//! assert_eq!(layout.edges.len(), 2);
//! ```

use crate::error::LayoutError;
use crate::outcome::{OutcomeTree, ScorecardSection, walk};

mod config;
mod depth;
mod measure;
mod palette;
mod place;
mod result;

pub use config::LayoutConfig;
pub use depth::DepthTable;
pub use palette::SectionLabel;
pub use result::*;

use measure::Measurement;
use palette::SectionPalette;
use place::Placer;

/// Lays out outcome trees with a fixed configuration.
///
/// Holds no per-call state, so one engine can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

pub struct LayoutEngineBuilder {
    config: LayoutConfig,
}

impl LayoutEngineBuilder {
    pub fn new() -> Self {
        Self {
            config: LayoutConfig::default(),
        }
    }
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }
    pub fn node_base_width(mut self, width: f64) -> Self {
        self.config.node_base_width = width;
        self
    }
    pub fn scorecard_width(mut self, width: f64) -> Self {
        self.config.scorecard_width = width;
        self
    }
    pub fn scorecard_gap(mut self, gap: f64) -> Self {
        self.config.scorecard_gap = gap;
        self
    }
    pub fn min_horizontal_spacing(mut self, spacing: f64) -> Self {
        self.config.min_horizontal_spacing = spacing;
        self
    }
    pub fn base_vertical_spacing(mut self, spacing: f64) -> Self {
        self.config.base_vertical_spacing = spacing;
        self
    }
    pub fn scorecard_vertical_spacing(mut self, spacing: f64) -> Self {
        self.config.scorecard_vertical_spacing = spacing;
        self
    }
    pub fn scorecard_vertical_offset(mut self, offset: f64) -> Self {
        self.config.scorecard_vertical_offset = offset;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth;
        self
    }
    pub fn build(self) -> LayoutEngine {
        LayoutEngine {
            config: self.config,
        }
    }
}

impl Default for LayoutEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEngine {
    pub fn builder() -> LayoutEngineBuilder {
        LayoutEngineBuilder::new()
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Positions every outcome and scorecard of `tree`.
    ///
    /// `sections` only label and color the scorecards; unknown section references fall back
    /// to an untitled label.
    ///
    /// # Errors
    ///
    /// * [`LayoutError::InvalidConfig`] if a dimension is negative or not finite.
    /// * [`LayoutError::DepthExceeded`] if the tree is deeper than `max_depth`.
    pub fn layout(
        &self,
        tree: &OutcomeTree,
        sections: &[ScorecardSection],
    ) -> Result<LayoutResult, LayoutError> {
        self.config.validate()?;

        if let Some((depth, path)) = walk::deepest_beyond(&tree.root, self.config.max_depth) {
            return Err(LayoutError::DepthExceeded {
                depth,
                max_depth: self.config.max_depth,
                path,
            });
        }

        let measurement = Measurement::measure(&tree.root, &self.config);
        let depths = DepthTable::scan(&tree.root, &self.config);
        let palette = SectionPalette::new(sections);
        let result = Placer::new(&self.config, &measurement, &depths, &palette).place();

        tracing::debug!(
            outcomes = measurement.nodes.len(),
            scorecards = result.nodes.len() - measurement.nodes.len(),
            edges = result.edges.len(),
            levels = depths.len(),
            width = measurement.root().subtree_width,
            "laid out outcome tree"
        );
        Ok(result)
    }
}
