use super::config::LayoutConfig;
use super::depth::DepthTable;
use super::measure::Measurement;
use super::palette::SectionPalette;
use super::result::{
    EdgeStyle, Interval, LayoutEdge, LayoutId, LayoutResult, NodeKind, NodePayload,
    OutcomePayload, PositionedNode, ScorecardPayload,
};

/// Hands out ids for one layout call.
#[derive(Debug, Default)]
struct IdCounter {
    next: LayoutId,
}

impl IdCounter {
    fn next(&mut self) -> LayoutId {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Pre-order, left-to-right placement over a measured arena.
pub(super) struct Placer<'a, 'm> {
    config: &'a LayoutConfig,
    measurement: &'a Measurement<'m>,
    depths: &'a DepthTable,
    palette: &'a SectionPalette<'a>,
    node_ids: IdCounter,
    edge_ids: IdCounter,
    result: LayoutResult,
}

impl<'a, 'm> Placer<'a, 'm> {
    pub fn new(
        config: &'a LayoutConfig,
        measurement: &'a Measurement<'m>,
        depths: &'a DepthTable,
        palette: &'a SectionPalette<'a>,
    ) -> Self {
        Self {
            config,
            measurement,
            depths,
            palette,
            node_ids: IdCounter::default(),
            edge_ids: IdCounter::default(),
            result: LayoutResult::default(),
        }
    }

    pub fn place(mut self) -> LayoutResult {
        self.place_node(0, 0.0, None);
        self.result
    }

    fn place_node(&mut self, index: usize, cursor: f64, parent: Option<LayoutId>) {
        let measurement = self.measurement;
        let measured = &measurement.nodes[index];
        let node = measured.node;
        let depth = measured.role.depth();
        let subtree = Interval {
            left: cursor,
            right: cursor + measured.subtree_width,
        };
        let x = subtree.midpoint();
        // Every depth present in the arena was scanned into the table.
        let y = self.depths.y(depth).unwrap_or_default();

        let id = self.node_ids.next();
        self.result.nodes.push(PositionedNode {
            id,
            kind: NodeKind::Outcome,
            x,
            y,
            width: self.config.node_base_width,
            payload: NodePayload::Outcome(OutcomePayload {
                name: node.name.clone(),
                description: node.description.clone(),
                is_scored: node.is_scored,
                role: measured.role,
                is_leaf: node.is_leaf(),
                insight_count: node.insights.len(),
                objection_count: node.objections.len(),
                scorecard_count: measured.scorecard_count,
                subtree,
            }),
        });
        if let Some(parent) = parent {
            self.connect(parent, id, EdgeStyle::Tree);
        }

        if measured.scorecard_count > 0 {
            self.place_scorecard_row(index, id, x, y);
        }

        // A parent wider than its children keeps them centered beneath it.
        let slack = measured.subtree_width - measurement.children_width(index);
        let mut child_cursor = cursor + slack / 2.0;
        for &child in &measured.children {
            self.place_node(child, child_cursor, Some(id));
            child_cursor += measurement.nodes[child].subtree_width;
        }
    }

    fn place_scorecard_row(&mut self, index: usize, owner: LayoutId, x: f64, y: f64) {
        let config = self.config;
        let measurement = self.measurement;
        let measured = &measurement.nodes[index];
        let node = measured.node;
        let row_width = config.scorecard_row_width(measured.scorecard_count);
        let row_start = x - row_width / 2.0;
        let pitch = config.scorecard_width + config.scorecard_gap;
        let row_y = y + config.scorecard_vertical_offset;

        for (i, scorecard) in node.scorecards().enumerate() {
            let section = self.palette.label(scorecard.section_id());
            let id = self.node_ids.next();
            self.result.nodes.push(PositionedNode {
                id,
                kind: NodeKind::Scorecard,
                x: row_start + i as f64 * pitch + config.scorecard_width / 2.0,
                y: row_y,
                width: config.scorecard_width,
                payload: NodePayload::Scorecard(ScorecardPayload {
                    owner,
                    index: i,
                    scorecard,
                    section,
                }),
            });
            self.connect(owner, id, EdgeStyle::Scorecard);
        }
    }

    fn connect(&mut self, source: LayoutId, target: LayoutId, style: EdgeStyle) {
        let id = self.edge_ids.next();
        self.result.edges.push(LayoutEdge {
            id,
            source,
            target,
            style,
        });
    }
}
