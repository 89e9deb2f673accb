use super::palette::SectionLabel;
use crate::outcome::{NodeRole, Scorecard};
use serde::{Deserialize, Serialize};

/// Identifier of a positioned node or edge. Only meaningful within one layout result.
pub type LayoutId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    Outcome,
    Scorecard,
}

/// A horizontal span `[left, right)` on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub left: f64,
    pub right: f64,
}

impl Interval {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn midpoint(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// True when the two half-open spans share any point.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.left < other.right && other.left < self.right
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomePayload {
    pub name: String,
    pub description: String,
    pub is_scored: bool,
    pub role: NodeRole,
    pub is_leaf: bool,
    pub insight_count: usize,
    pub objection_count: usize,
    pub scorecard_count: usize,
    /// Horizontal span reserved for this node and all its descendants.
    pub subtree: Interval,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardPayload {
    /// Outcome node this scorecard hangs from.
    pub owner: LayoutId,
    /// Position within the owner's scorecard row.
    pub index: usize,
    pub scorecard: Scorecard,
    pub section: SectionLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodePayload {
    Outcome(OutcomePayload),
    Scorecard(ScorecardPayload),
}

/// A node placed on the canvas. `x` and `y` are the card's center and top edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedNode {
    pub id: LayoutId,
    pub kind: NodeKind,
    pub x: f64,
    pub y: f64,
    /// Drawn width of the card.
    pub width: f64,
    pub payload: NodePayload,
}

impl PositionedNode {
    pub fn outcome(&self) -> Option<&OutcomePayload> {
        match &self.payload {
            NodePayload::Outcome(p) => Some(p),
            NodePayload::Scorecard(_) => None,
        }
    }

    pub fn scorecard(&self) -> Option<&ScorecardPayload> {
        match &self.payload {
            NodePayload::Scorecard(p) => Some(p),
            NodePayload::Outcome(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeStyle {
    /// Solid, arrow-terminated parent to child connection.
    Tree,
    /// Dashed, arrowless connection from a scorecard back to its outcome.
    Scorecard,
}

impl EdgeStyle {
    pub fn is_dashed(&self) -> bool {
        matches!(self, EdgeStyle::Scorecard)
    }

    pub fn has_arrow(&self) -> bool {
        matches!(self, EdgeStyle::Tree)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutEdge {
    pub id: LayoutId,
    pub source: LayoutId,
    pub target: LayoutId,
    pub style: EdgeStyle,
}

/// Bounding box of the laid-out cards, horizontally by card edges and vertically by
/// card tops.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Positioned nodes and connecting edges, ready for a graph-drawing surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<LayoutEdge>,
}

impl LayoutResult {
    pub fn node(&self, id: LayoutId) -> Option<&PositionedNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn outcomes(&self) -> impl Iterator<Item = &PositionedNode> {
        self.nodes.iter().filter(|n| n.kind == NodeKind::Outcome)
    }

    pub fn scorecards(&self) -> impl Iterator<Item = &PositionedNode> {
        self.nodes.iter().filter(|n| n.kind == NodeKind::Scorecard)
    }

    /// Finds the first outcome node with the given name.
    pub fn outcome_named(&self, name: &str) -> Option<&PositionedNode> {
        self.outcomes()
            .find(|n| n.outcome().is_some_and(|p| p.name == name))
    }

    /// Child outcomes of `id`, in left-to-right order.
    pub fn children_of(&self, id: LayoutId) -> Vec<&PositionedNode> {
        self.edges
            .iter()
            .filter(|e| e.source == id && e.style == EdgeStyle::Tree)
            .filter_map(|e| self.node(e.target))
            .collect()
    }

    /// Scorecards hanging from `id`, in row order.
    pub fn scorecards_of(&self, id: LayoutId) -> Vec<&PositionedNode> {
        self.scorecards()
            .filter(|n| n.scorecard().is_some_and(|p| p.owner == id))
            .collect()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.nodes.iter().fold(None, |acc, n| {
            let left = n.x - n.width / 2.0;
            let right = n.x + n.width / 2.0;
            Some(match acc {
                None => Bounds {
                    min_x: left,
                    min_y: n.y,
                    max_x: right,
                    max_y: n.y,
                },
                Some(b) => Bounds {
                    min_x: b.min_x.min(left),
                    min_y: b.min_y.min(n.y),
                    max_x: b.max_x.max(right),
                    max_y: b.max_y.max(n.y),
                },
            })
        })
    }
}
