//! Editor-facing document format.
//!
//! The blueprint editor persists the outcome hierarchy as camelCase JSON that may be only
//! partially filled in. The `Raw*` types here mirror that JSON and accept anything the
//! editor can produce; [`IntoOutcomeTree`] turns them into the canonical
//! [`OutcomeTree`] the layout engine and the flattener work on.

use crate::error::DocumentError;
use crate::graph::OutcomeGraph;
use crate::outcome::{
    BooleanScorecardItem, NamedItem, OutcomeNode, OutcomeTree, ScorecardSection,
    VariableScorecardItem,
};
use serde::Deserialize;
use serde_json::Value;

mod lenient;

/// A trait for data models that can be converted into a canonical [`OutcomeTree`].
///
/// Implement it on your own structs to feed a custom storage format into the engine.
///
/// # Example
///
/// ```rust
/// use blueprint::document::IntoOutcomeTree;
/// use blueprint::error::DocumentError;
/// use blueprint::outcome::{OutcomeNode, OutcomeTree};
///
/// struct Checklist {
///     title: String,
///     steps: Vec<String>,
/// }
///
/// impl IntoOutcomeTree for Checklist {
///     fn into_outcome_tree(self) -> Result<OutcomeTree, DocumentError> {
///         if self.title.is_empty() {
///             return Err(DocumentError::ValidationError("checklist has no title".into()));
///         }
///         let root = self
///             .steps
///             .into_iter()
///             .fold(OutcomeNode::new(self.title), |root, step| {
///                 root.with_child(OutcomeNode::new(step))
///             });
///         Ok(OutcomeTree::new(root))
///     }
/// }
///
/// let tree = Checklist { title: "All Outcomes".into(), steps: vec!["Won".into()] }
///     .into_outcome_tree()
///     .unwrap();
/// assert_eq!(tree.leaf_count(), 1);
/// ```
pub trait IntoOutcomeTree {
    /// Consumes the object and converts it into an outcome tree.
    fn into_outcome_tree(self) -> Result<OutcomeTree, DocumentError>;
}

/// Insight or objection as saved by the editor.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RawNamedItem {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
}

/// Boolean scorecard item as saved by the editor.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RawBooleanCheck {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, alias = "isFailCriterion", deserialize_with = "lenient::flag")]
    pub is_fail_criterion: bool,
    #[serde(default, alias = "failWeight", deserialize_with = "lenient::opt_text")]
    pub fail_weight: Option<String>,
    #[serde(default, alias = "sectionId", deserialize_with = "lenient::opt_text")]
    pub section_id: Option<String>,
}

/// Variable (1 to 5) scorecard item as saved by the editor.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RawVariableCheck {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, alias = "isFailCriterion", deserialize_with = "lenient::flag")]
    pub is_fail_criterion: bool,
    #[serde(default, alias = "failWeight", deserialize_with = "lenient::opt_text")]
    pub fail_weight: Option<String>,
    #[serde(default, alias = "sectionId", deserialize_with = "lenient::opt_text")]
    pub section_id: Option<String>,
    #[serde(default, alias = "score1Desc", deserialize_with = "lenient::text")]
    pub score1_desc: String,
    #[serde(default, alias = "score2Desc", deserialize_with = "lenient::text")]
    pub score2_desc: String,
    #[serde(default, alias = "score3Desc", deserialize_with = "lenient::text")]
    pub score3_desc: String,
    #[serde(default, alias = "score4Desc", deserialize_with = "lenient::text")]
    pub score4_desc: String,
    #[serde(default, alias = "score5Desc", deserialize_with = "lenient::text")]
    pub score5_desc: String,
    #[serde(default, alias = "failScore", deserialize_with = "lenient::score")]
    pub fail_score: Option<u8>,
}

/// Scorecard section as saved by the editor.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RawSection {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
}

/// One outcome as saved by the editor, children included.
#[derive(Debug, Deserialize, Clone)]
pub struct RawOutcome {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(
        default = "scored_by_default",
        alias = "isScored",
        deserialize_with = "lenient::flag_default_true"
    )]
    pub is_scored: bool,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub insights: Vec<RawNamedItem>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub objections: Vec<RawNamedItem>,
    #[serde(default, alias = "booleanChecks", deserialize_with = "lenient::seq")]
    pub boolean_checks: Vec<RawBooleanCheck>,
    #[serde(default, alias = "variableChecks", deserialize_with = "lenient::seq")]
    pub variable_checks: Vec<RawVariableCheck>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub children: Vec<RawOutcome>,
}

fn scored_by_default() -> bool {
    true
}

impl Default for RawOutcome {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            is_scored: true,
            insights: Vec::new(),
            objections: Vec::new(),
            boolean_checks: Vec::new(),
            variable_checks: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// A saved blueprint: the outcome hierarchy plus its scorecard sections.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct BlueprintDocument {
    #[serde(alias = "outcomes", alias = "tree")]
    pub root: RawOutcome,
    #[serde(
        default,
        alias = "scorecardSections",
        deserialize_with = "lenient::seq"
    )]
    pub sections: Vec<RawSection>,
}

const ROOT_KEYS: [&str; 3] = ["root", "outcomes", "tree"];

impl BlueprintDocument {
    /// Parses either a full document (`{"root": {...}, "sections": [...]}`) or a bare
    /// outcome tree, which is then treated as a document without sections.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| DocumentError::JsonParseError(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        let is_wrapped = value
            .as_object()
            .is_some_and(|map| ROOT_KEYS.iter().any(|key| map.contains_key(*key)));

        if is_wrapped {
            serde_json::from_value(value).map_err(|e| DocumentError::JsonParseError(e.to_string()))
        } else if value.is_object() {
            let root: RawOutcome = serde_json::from_value(value)
                .map_err(|e| DocumentError::JsonParseError(e.to_string()))?;
            Ok(Self {
                root,
                sections: Vec::new(),
            })
        } else {
            Err(DocumentError::ValidationError(
                "a blueprint must be a JSON object".to_string(),
            ))
        }
    }

    pub fn sections(&self) -> Vec<ScorecardSection> {
        self.sections.iter().cloned().map(Into::into).collect()
    }

    /// Splits the document into the canonical tree and its sections.
    pub fn into_parts(self) -> (OutcomeTree, Vec<ScorecardSection>) {
        let sections = self.sections();
        (OutcomeTree::new(self.root.into()), sections)
    }
}

/// Parses a sections list on its own, as kept in a separate file.
pub fn sections_from_json(json: &str) -> Result<Vec<ScorecardSection>, DocumentError> {
    #[derive(Deserialize)]
    struct Sections(#[serde(deserialize_with = "lenient::seq")] Vec<RawSection>);

    let Sections(raw) =
        serde_json::from_str(json).map_err(|e| DocumentError::JsonParseError(e.to_string()))?;
    Ok(raw.into_iter().map(Into::into).collect())
}

impl From<RawSection> for ScorecardSection {
    fn from(raw: RawSection) -> Self {
        ScorecardSection {
            id: raw.id,
            name: raw.name,
            description: raw.description,
        }
    }
}

impl From<RawNamedItem> for NamedItem {
    fn from(raw: RawNamedItem) -> Self {
        NamedItem {
            name: raw.name,
            description: raw.description,
        }
    }
}

impl From<RawBooleanCheck> for BooleanScorecardItem {
    fn from(raw: RawBooleanCheck) -> Self {
        BooleanScorecardItem {
            name: raw.name,
            description: raw.description,
            is_fail_criterion: raw.is_fail_criterion,
            fail_weight: raw.fail_weight,
            section_id: raw.section_id,
        }
    }
}

impl From<RawVariableCheck> for VariableScorecardItem {
    fn from(raw: RawVariableCheck) -> Self {
        VariableScorecardItem {
            name: raw.name,
            description: raw.description,
            is_fail_criterion: raw.is_fail_criterion,
            fail_weight: raw.fail_weight,
            section_id: raw.section_id,
            score1_desc: raw.score1_desc,
            score2_desc: raw.score2_desc,
            score3_desc: raw.score3_desc,
            score4_desc: raw.score4_desc,
            score5_desc: raw.score5_desc,
            // The score only matters when the item can fail the call.
            fail_score: raw.fail_score.filter(|_| raw.is_fail_criterion),
        }
    }
}

impl From<RawOutcome> for OutcomeNode {
    fn from(raw: RawOutcome) -> Self {
        OutcomeNode {
            name: raw.name,
            description: raw.description,
            is_scored: raw.is_scored,
            insights: raw.insights.into_iter().map(Into::into).collect(),
            objections: raw.objections.into_iter().map(Into::into).collect(),
            boolean_checks: raw.boolean_checks.into_iter().map(Into::into).collect(),
            variable_checks: raw.variable_checks.into_iter().map(Into::into).collect(),
            children: raw.children.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoOutcomeTree for RawOutcome {
    fn into_outcome_tree(self) -> Result<OutcomeTree, DocumentError> {
        Ok(OutcomeTree::new(self.into()))
    }
}

impl IntoOutcomeTree for BlueprintDocument {
    fn into_outcome_tree(self) -> Result<OutcomeTree, DocumentError> {
        Ok(self.into_parts().0)
    }
}

impl IntoOutcomeTree for OutcomeGraph {
    fn into_outcome_tree(self) -> Result<OutcomeTree, DocumentError> {
        self.into_tree()
            .map_err(|e| DocumentError::ValidationError(e.to_string()))
    }
}

impl IntoOutcomeTree for OutcomeTree {
    fn into_outcome_tree(self) -> Result<OutcomeTree, DocumentError> {
        Ok(self)
    }
}
