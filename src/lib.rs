//! # Blueprint - Outcome Tree Layout and Flattening Engine
//!
//! **Blueprint** turns a hierarchical tree of sales-call outcomes into two things:
//! a positioned node-and-edge diagram for a canvas, and a flat list of leaf outcomes
//! carrying everything they inherit from their ancestors.
//!
//! ## Core Workflow
//!
//! The engine operates on a canonical [`OutcomeTree`](outcome::OutcomeTree). The primary
//! workflow is:
//!
//! 1.  **Load Your Data**: Parse a blueprint document with [`BlueprintDocument`](document::BlueprintDocument),
//!     or implement [`IntoOutcomeTree`](document::IntoOutcomeTree) for your own format.
//! 2.  **Lay Out**: Use [`LayoutEngine`](layout::LayoutEngine) to compute node positions, scorecard rows
//!     and edges. Every outcome's children sit inside the horizontal interval the outcome owns,
//!     so sibling subtrees never overlap.
//! 3.  **Flatten**: Use [`Flattener`](flatten::Flattener) to produce one record per leaf with the merged
//!     insights, objections and checks of its whole ancestry.
//! 4.  **Export**: Write the flattened outcomes as JSON with [`OutcomeExport`](export::OutcomeExport), or save
//!     layout and outcomes together as a [`BlueprintArtifact`](export::BlueprintArtifact).
//!
//! ## Quick Start
//!
//! ```rust
//! use blueprint::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let json = r#"{
//!         "root": {
//!             "name": "All Outcomes",
//!             "insights": [{ "name": "Budget", "description": "" }],
//!             "children": [
//!                 { "name": "Demo Scheduled", "children": [{ "name": "No-Show" }] },
//!                 { "name": "Lost" }
//!             ]
//!         }
//!     }"#;
//!
//!     let document = BlueprintDocument::from_json(json)?;
//!     let sections = document.sections();
//!     let tree = document.into_outcome_tree()?;
//!
//!     let layout = LayoutEngine::default().layout(&tree, &sections)?;
//!     assert_eq!(layout.outcomes().count(), 4);
//!
//!     let outcomes = flatten(&tree)?;
//!     assert_eq!(outcomes.len(), 2);
//!     assert_eq!(outcomes[0].path, vec!["All Outcomes", "Demo Scheduled", "No-Show"]);
//!     assert_eq!(outcomes[1].insights[0].name, "Budget");
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod error;
pub mod export;
pub mod flatten;
pub mod graph;
pub mod layout;
pub mod outcome;
pub mod outline;
pub mod prelude;
