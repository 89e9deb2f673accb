use super::definition::{Named, OutcomeNode, ScorecardSection};
use super::walk;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a node sits in the hierarchy.
///
/// The root doubles as the "All Outcomes" container and as a scored entity in its own
/// right, so consumers that need to treat it differently match on this instead of
/// checking `depth == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeRole {
    Root,
    Nested { depth: usize },
}

impl NodeRole {
    pub fn at_depth(depth: usize) -> Self {
        if depth == 0 {
            NodeRole::Root
        } else {
            NodeRole::Nested { depth }
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            NodeRole::Root => 0,
            NodeRole::Nested { depth } => *depth,
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, NodeRole::Root)
    }

    pub fn child(&self) -> Self {
        NodeRole::Nested {
            depth: self.depth() + 1,
        }
    }
}

/// Deepest level the layout engine, the flattener and the graph builder accept by default.
///
/// A nested JSON document spends two nesting levels per outcome level, so anything deeper
/// would already be refused by `serde_json`'s recursion limit without a path to show.
pub const DEFAULT_MAX_DEPTH: usize = 60;

/// A complete outcome hierarchy with exactly one root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutcomeTree {
    pub root: OutcomeNode,
}

impl OutcomeTree {
    pub fn new(root: OutcomeNode) -> Self {
        Self { root }
    }

    pub fn root_name(&self) -> &str {
        &self.root.name
    }

    pub fn node_count(&self) -> usize {
        walk::node_count(&self.root)
    }

    pub fn leaf_count(&self) -> usize {
        walk::leaf_count(&self.root)
    }

    pub fn max_depth(&self) -> usize {
        walk::max_depth(&self.root)
    }

    /// Collects the irregularities an editor should flag but the algorithms tolerate.
    pub fn lint(&self, sections: &[ScorecardSection]) -> Vec<LintWarning> {
        let section_ids: AHashSet<&str> = sections.iter().map(|s| s.id.as_str()).collect();
        let mut warnings = Vec::new();
        lint_node(&self.root, &mut Vec::new(), &section_ids, &mut warnings);
        warnings
    }
}

impl From<OutcomeNode> for OutcomeTree {
    fn from(root: OutcomeNode) -> Self {
        Self::new(root)
    }
}

/// Something odd found in a draft tree. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LintWarning {
    EmptyName {
        path: Vec<String>,
    },
    MissingFailScore {
        path: Vec<String>,
        item: String,
    },
    FailScoreOutOfRange {
        path: Vec<String>,
        item: String,
        score: u8,
    },
    UnknownSection {
        path: Vec<String>,
        item: String,
        section_id: String,
    },
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintWarning::EmptyName { path } => {
                write!(f, "{}: outcome has no name", path.join(" > "))
            }
            LintWarning::MissingFailScore { path, item } => write!(
                f,
                "{}: variable check '{}' is a fail criterion without a fail score",
                path.join(" > "),
                item
            ),
            LintWarning::FailScoreOutOfRange { path, item, score } => write!(
                f,
                "{}: variable check '{}' has fail score {} outside 1..=5",
                path.join(" > "),
                item,
                score
            ),
            LintWarning::UnknownSection {
                path,
                item,
                section_id,
            } => write!(
                f,
                "{}: scorecard '{}' refers to unknown section '{}'",
                path.join(" > "),
                item,
                section_id
            ),
        }
    }
}

fn lint_node(
    node: &OutcomeNode,
    path: &mut Vec<String>,
    section_ids: &AHashSet<&str>,
    warnings: &mut Vec<LintWarning>,
) {
    path.push(node.name.clone());

    if node.name.trim().is_empty() {
        warnings.push(LintWarning::EmptyName { path: path.clone() });
    }

    for check in &node.variable_checks {
        match (check.is_fail_criterion, check.fail_score) {
            (true, None) => warnings.push(LintWarning::MissingFailScore {
                path: path.clone(),
                item: check.name.clone(),
            }),
            (true, Some(score)) if !(1..=5).contains(&score) => {
                warnings.push(LintWarning::FailScoreOutOfRange {
                    path: path.clone(),
                    item: check.name.clone(),
                    score,
                })
            }
            _ => {}
        }
    }

    for scorecard in node.scorecards() {
        if let Some(section_id) = scorecard.section_id() {
            if !section_ids.contains(section_id) {
                warnings.push(LintWarning::UnknownSection {
                    path: path.clone(),
                    item: scorecard.name().to_string(),
                    section_id: section_id.to_string(),
                });
            }
        }
    }

    for child in &node.children {
        lint_node(child, path, section_ids, warnings);
    }
    path.pop();
}
