use crate::outcome::{BooleanScorecardItem, NamedItem, VariableScorecardItem};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A leaf outcome with everything it inherits from its ancestors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlattenedOutcome {
    pub name: String,
    pub description: String,
    pub is_scored: bool,
    /// Names from the root down to this leaf, both included.
    pub path: Vec<String>,
    pub insights: Vec<NamedItem>,
    pub objections: Vec<NamedItem>,
    pub boolean_checks: Vec<BooleanScorecardItem>,
    pub variable_checks: Vec<VariableScorecardItem>,
}

impl FlattenedOutcome {
    /// Number of ancestors recorded in `path`.
    pub fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn path_label(&self, separator: &str) -> String {
        self.path.iter().join(separator)
    }

    pub fn scorecard_count(&self) -> usize {
        self.boolean_checks.len() + self.variable_checks.len()
    }

    pub fn fail_criteria(&self) -> impl Iterator<Item = &str> {
        self.boolean_checks
            .iter()
            .filter(|c| c.is_fail_criterion)
            .map(|c| c.name.as_str())
            .chain(
                self.variable_checks
                    .iter()
                    .filter(|c| c.is_fail_criterion)
                    .map(|c| c.name.as_str()),
            )
    }
}
