use serde::{Deserialize, Serialize};

/// Anything that is deduplicated by its display name when attributes are inherited.
pub trait Named {
    fn name(&self) -> &str;
}

/// A free-form annotation attached to an outcome (a customer insight or objection).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NamedItem {
    pub name: String,
    pub description: String,
}

impl NamedItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A yes/no evaluation criterion.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanScorecardItem {
    pub name: String,
    pub description: String,
    pub is_fail_criterion: bool,
    /// Fractional threshold label such as `"1/3"`.
    #[serde(default)]
    pub fail_weight: Option<String>,
    #[serde(default)]
    pub section_id: Option<String>,
}

/// A criterion scored on a 1 to 5 scale, with one description per score level.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableScorecardItem {
    pub name: String,
    pub description: String,
    pub is_fail_criterion: bool,
    #[serde(default)]
    pub fail_weight: Option<String>,
    #[serde(default)]
    pub section_id: Option<String>,
    pub score1_desc: String,
    pub score2_desc: String,
    pub score3_desc: String,
    pub score4_desc: String,
    pub score5_desc: String,
    /// Score at or below which the call fails. Only meaningful for fail criteria.
    #[serde(default)]
    pub fail_score: Option<u8>,
}

impl VariableScorecardItem {
    /// Description for a score value in `1..=5`.
    pub fn score_desc(&self, score: u8) -> Option<&str> {
        match score {
            1 => Some(&self.score1_desc),
            2 => Some(&self.score2_desc),
            3 => Some(&self.score3_desc),
            4 => Some(&self.score4_desc),
            5 => Some(&self.score5_desc),
            _ => None,
        }
    }
}

impl Named for NamedItem {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for BooleanScorecardItem {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for VariableScorecardItem {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Cosmetic grouping for scorecard items. Has no effect on tree structure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScorecardSection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Either kind of scorecard item, as attached beneath an outcome in the layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scorecard {
    Boolean(BooleanScorecardItem),
    Variable(VariableScorecardItem),
}

impl Scorecard {
    pub fn section_id(&self) -> Option<&str> {
        match self {
            Scorecard::Boolean(item) => item.section_id.as_deref(),
            Scorecard::Variable(item) => item.section_id.as_deref(),
        }
    }

    pub fn is_fail_criterion(&self) -> bool {
        match self {
            Scorecard::Boolean(item) => item.is_fail_criterion,
            Scorecard::Variable(item) => item.is_fail_criterion,
        }
    }
}

impl Named for Scorecard {
    fn name(&self) -> &str {
        match self {
            Scorecard::Boolean(item) => &item.name,
            Scorecard::Variable(item) => &item.name,
        }
    }
}

/// One entry in the call-outcome hierarchy.
///
/// The canonical, already-sanitized form of a node. Raw editor JSON goes through
/// [`crate::document::BlueprintDocument`] first, which tolerates partially filled drafts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeNode {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_is_scored")]
    pub is_scored: bool,
    #[serde(default)]
    pub insights: Vec<NamedItem>,
    #[serde(default)]
    pub objections: Vec<NamedItem>,
    #[serde(default)]
    pub boolean_checks: Vec<BooleanScorecardItem>,
    #[serde(default)]
    pub variable_checks: Vec<VariableScorecardItem>,
    #[serde(default)]
    pub children: Vec<OutcomeNode>,
}

fn default_is_scored() -> bool {
    true
}

impl Default for OutcomeNode {
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

impl OutcomeNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_child(mut self, child: OutcomeNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_insight(mut self, item: NamedItem) -> Self {
        self.insights.push(item);
        self
    }

    pub fn with_objection(mut self, item: NamedItem) -> Self {
        self.objections.push(item);
        self
    }

    pub fn with_boolean_check(mut self, item: BooleanScorecardItem) -> Self {
        self.boolean_checks.push(item);
        self
    }

    pub fn with_variable_check(mut self, item: VariableScorecardItem) -> Self {
        self.variable_checks.push(item);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of scorecard attachments rendered beneath this node.
    pub fn scorecard_count(&self) -> usize {
        self.boolean_checks.len() + self.variable_checks.len()
    }

    /// Scorecards in render order: boolean checks first, then variable checks.
    pub fn scorecards(&self) -> impl Iterator<Item = Scorecard> + '_ {
        self.boolean_checks
            .iter()
            .cloned()
            .map(Scorecard::Boolean)
            .chain(self.variable_checks.iter().cloned().map(Scorecard::Variable))
    }
}
