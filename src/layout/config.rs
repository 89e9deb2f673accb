use crate::error::LayoutError;
use crate::outcome::DEFAULT_MAX_DEPTH;
use serde::{Deserialize, Serialize};

/// Tunable dimensions for the blueprint layout, in canvas pixels.
///
/// Only the relations between these values matter for correctness; the defaults match
/// the sizes the node and scorecard cards are drawn at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Width of an outcome card.
    pub node_base_width: f64,
    /// Width of a scorecard card.
    pub scorecard_width: f64,
    /// Horizontal gap between two scorecards in the same row.
    pub scorecard_gap: f64,
    /// Horizontal room added around every node's content.
    pub min_horizontal_spacing: f64,
    /// Vertical distance between consecutive depth levels.
    pub base_vertical_spacing: f64,
    /// Extra vertical distance below a level where any node has scorecards.
    pub scorecard_vertical_spacing: f64,
    /// Distance from an outcome card down to its scorecard row.
    pub scorecard_vertical_offset: f64,
    /// Deepest level the engine accepts before refusing the tree.
    pub max_depth: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_base_width: 300.0,
            scorecard_width: 220.0,
            scorecard_gap: 60.0,
            min_horizontal_spacing: 150.0,
            base_vertical_spacing: 250.0,
            scorecard_vertical_spacing: 450.0,
            scorecard_vertical_offset: 220.0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl LayoutConfig {
    /// Loads a config from JSON. Missing keys fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| LayoutError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let dimensions = [
            ("nodeBaseWidth", self.node_base_width),
            ("scorecardWidth", self.scorecard_width),
            ("scorecardGap", self.scorecard_gap),
            ("minHorizontalSpacing", self.min_horizontal_spacing),
            ("baseVerticalSpacing", self.base_vertical_spacing),
            ("scorecardVerticalSpacing", self.scorecard_vertical_spacing),
            ("scorecardVerticalOffset", self.scorecard_vertical_offset),
        ];
        for (name, value) in dimensions {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidConfig(format!(
                    "{} must be a finite, non-negative number (got {})",
                    name, value
                )));
            }
        }
        if self.node_base_width == 0.0 {
            return Err(LayoutError::InvalidConfig(
                "nodeBaseWidth must be greater than zero".to_string(),
            ));
        }
        // Levels must stay strictly ordered top to bottom.
        if self.base_vertical_spacing == 0.0 {
            return Err(LayoutError::InvalidConfig(
                "baseVerticalSpacing must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Width of a row of `count` scorecards, gaps included.
    pub fn scorecard_row_width(&self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        let n = count as f64;
        n * self.scorecard_width + (n - 1.0) * self.scorecard_gap
    }

    /// Horizontal footprint of a node's own card and scorecard row.
    pub fn content_width(&self, scorecard_count: usize) -> f64 {
        self.node_base_width
            .max(self.scorecard_row_width(scorecard_count))
    }
}
