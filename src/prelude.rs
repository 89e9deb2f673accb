//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the blueprint crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use blueprint::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/blueprint.json")?;
//! let document = BlueprintDocument::from_json(&json)?;
//! let sections = document.sections();
//! let tree = document.into_outcome_tree()?;
//!
//! let layout = LayoutEngine::default().layout(&tree, &sections)?;
//! let export = OutcomeExport::new(tree.root_name(), flatten(&tree)?);
//! println!("{} nodes, {} leaves", layout.nodes.len(), export.leaf_count);
//! # Ok(())
//! # }
//! ```

// Tree model
pub use crate::outcome::{
    BooleanScorecardItem, DEFAULT_MAX_DEPTH, Named, NamedItem, NodeRole, OutcomeNode,
    OutcomeTree, Scorecard, ScorecardSection, VariableScorecardItem,
};

// Input formats
pub use crate::document::{BlueprintDocument, IntoOutcomeTree};
pub use crate::graph::{OutcomeGraph, OutcomeGraphEdge, OutcomeGraphNode};

// Layout
pub use crate::layout::{
    EdgeStyle, LayoutConfig, LayoutEngine, LayoutResult, NodeKind, PositionedNode,
};

// Flattening and export
pub use crate::export::{BlueprintArtifact, OutcomeExport};
pub use crate::flatten::{FlattenOptions, FlattenedOutcome, Flattener, flatten};
pub use crate::outline::TreeOutline;

// Error types
pub use crate::error::{ArtifactError, DocumentError, FlattenError, LayoutError, TreeBuildError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
