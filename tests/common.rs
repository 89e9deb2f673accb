//! Common test utilities for building outcome trees and blueprint documents.
use blueprint::prelude::*;

/// Builds a boolean check with just a name.
#[allow(dead_code)]
pub fn boolean_check(name: &str) -> BooleanScorecardItem {
    BooleanScorecardItem {
        name: name.to_string(),
        ..Default::default()
    }
}

/// Builds a variable check that fails the call at or below `fail_score`.
#[allow(dead_code)]
pub fn variable_check(name: &str, fail_score: u8) -> VariableScorecardItem {
    VariableScorecardItem {
        name: name.to_string(),
        is_fail_criterion: true,
        fail_score: Some(fail_score),
        score1_desc: "Poor".to_string(),
        score5_desc: "Excellent".to_string(),
        ..Default::default()
    }
}

/// The "Demo Scheduled" blueprint.
///
/// ```text
/// All Outcomes
/// └── Demo Scheduled [Asked budget]
///     ├── No-Show
///     └── Rescheduled (insight: Preferred time)
/// ```
#[allow(dead_code)]
pub fn create_demo_tree() -> OutcomeTree {
    OutcomeTree::new(
        OutcomeNode::new("All Outcomes").with_child(
            OutcomeNode::new("Demo Scheduled")
                .with_boolean_check(boolean_check("Asked budget"))
                .with_child(OutcomeNode::new("No-Show"))
                .with_child(OutcomeNode::new("Rescheduled").with_insight(NamedItem::new(
                    "Preferred time",
                    "Prospect prefers mornings",
                ))),
        ),
    )
}

/// A wider tree with scorecards at several depths and unequal branch widths.
///
/// Logic: the root carries a shared insight and a fail criterion; the "Qualified" branch
/// is much wider than "Lost" so centering and slack distribution are exercised.
#[allow(dead_code)]
pub fn create_complex_tree() -> OutcomeTree {
    OutcomeTree::new(
        OutcomeNode::new("All Outcomes")
            .with_insight(NamedItem::new("Budget", "Annual budget range"))
            .with_variable_check(variable_check("Rapport", 2))
            .with_child(
                OutcomeNode::new("Qualified")
                    .with_objection(NamedItem::new("Timing", "Not this quarter"))
                    .with_child(
                        OutcomeNode::new("Demo Scheduled")
                            .with_boolean_check(boolean_check("Asked budget"))
                            .with_boolean_check(boolean_check("Set next step"))
                            .with_boolean_check(boolean_check("Confirmed attendees")),
                    )
                    .with_child(
                        OutcomeNode::new("Proposal Sent")
                            .with_insight(NamedItem::new("Budget", "overridden"))
                            .with_child(OutcomeNode::new("Accepted"))
                            .with_child(OutcomeNode::new("Negotiating"))
                            .with_child(OutcomeNode::new("Rejected")),
                    ),
            )
            .with_child(OutcomeNode::new("Lost").with_boolean_check(boolean_check("Logged reason"))),
    )
}

#[allow(dead_code)]
pub fn create_sections() -> Vec<ScorecardSection> {
    vec![
        ScorecardSection {
            id: "discovery".to_string(),
            name: "Discovery".to_string(),
            description: "Questions about the prospect's situation".to_string(),
        },
        ScorecardSection {
            id: "closing".to_string(),
            name: "Closing".to_string(),
            description: String::new(),
        },
    ]
}

/// A partially filled editor document, as saved mid-edit.
#[allow(dead_code)]
pub const DRAFT_DOCUMENT_JSON: &str = r#"{
    "root": {
        "name": "All Outcomes",
        "insights": [{ "name": "Budget", "description": "Annual budget range" }],
        "objections": null,
        "booleanChecks": [
            { "name": "Introduced self", "isFailCriterion": "true", "failWeight": "1/3", "sectionId": "discovery" },
            "not an object"
        ],
        "children": [
            {
                "name": "Demo Scheduled",
                "isScored": false,
                "variableChecks": [
                    { "name": "Rapport", "isFailCriterion": true, "failScore": "2", "score1Desc": "Cold" },
                    { "name": "Pace", "isFailCriterion": false, "failScore": 3 }
                ],
                "children": {}
            },
            { "description": "No name yet", "children": [] }
        ]
    },
    "sections": [
        { "id": "discovery", "name": "Discovery" },
        42
    ]
}"#;

/// A flat node table equivalent to [`create_demo_tree`].
#[allow(dead_code)]
pub const DEMO_GRAPH_JSON: &str = r#"{
    "nodes": [
        { "id": "n1", "name": "All Outcomes" },
        { "id": "n2", "name": "Demo Scheduled", "booleanChecks": [{ "name": "Asked budget", "description": "", "isFailCriterion": false }] },
        { "id": "n3", "name": "No-Show" },
        { "id": "n4", "name": "Rescheduled", "insights": [{ "name": "Preferred time", "description": "Prospect prefers mornings" }] }
    ],
    "edges": [
        { "source": "n1", "target": "n2" },
        { "source": "n2", "target": "n3" },
        { "source": "n2", "target": "n4" }
    ]
}"#;

/// Builds a single chain of `depth` levels below the root.
#[allow(dead_code)]
pub fn create_chain(depth: usize) -> OutcomeTree {
    let mut node = OutcomeNode::new(format!("Level {}", depth));
    for level in (0..depth).rev() {
        node = OutcomeNode::new(format!("Level {}", level)).with_child(node);
    }
    OutcomeTree::new(node)
}

/// Asserts the geometric guarantees every layout must satisfy.
///
/// * sibling subtrees tile their parent's span without overlapping
/// * every parent is centered over the union of its children's spans
/// * all nodes of one depth share a `y`, and deeper levels sit strictly lower
/// * every scorecard row is centered under its owner
#[allow(dead_code)]
pub fn assert_layout_invariants(layout: &LayoutResult) {
    const EPS: f64 = 1e-6;

    let mut level_y: Vec<Option<f64>> = Vec::new();
    for node in layout.outcomes() {
        let payload = node.outcome().expect("outcome payload");
        let depth = payload.role.depth();
        if level_y.len() <= depth {
            level_y.resize(depth + 1, None);
        }
        match level_y[depth] {
            Some(y) => assert!(
                (y - node.y).abs() < EPS,
                "'{}' at depth {} has y {} but its level is at {}",
                payload.name,
                depth,
                node.y,
                y
            ),
            None => level_y[depth] = Some(node.y),
        }

        let children = layout.children_of(node.id);
        assert_eq!(children.is_empty(), payload.is_leaf);
        if !children.is_empty() {
            let spans: Vec<_> = children
                .iter()
                .map(|c| c.outcome().expect("child payload").subtree)
                .collect();
            for pair in spans.windows(2) {
                assert!(
                    !pair[0].overlaps(&pair[1]),
                    "children of '{}' overlap: {:?}",
                    payload.name,
                    pair
                );
                assert!((pair[0].right - pair[1].left).abs() < EPS);
            }
            let first = spans[0];
            let last = spans[spans.len() - 1];
            assert!(first.left >= payload.subtree.left - EPS);
            assert!(last.right <= payload.subtree.right + EPS);
            let union_mid = (first.left + last.right) / 2.0;
            assert!(
                (union_mid - node.x).abs() < EPS,
                "'{}' at x {} is not centered over its children ({})",
                payload.name,
                node.x,
                union_mid
            );
        }

        let row = layout.scorecards_of(node.id);
        assert_eq!(row.len(), payload.scorecard_count);
        if let (Some(first), Some(last)) = (row.first(), row.last()) {
            let row_mid = (first.x - first.width / 2.0 + last.x + last.width / 2.0) / 2.0;
            assert!(
                (row_mid - node.x).abs() < EPS,
                "scorecard row of '{}' is centered at {} instead of {}",
                payload.name,
                row_mid,
                node.x
            );
            assert!(row.iter().all(|s| s.y > node.y));
        }
    }

    let ys: Vec<f64> = level_y.into_iter().map(|y| y.expect("every level populated")).collect();
    for pair in ys.windows(2) {
        assert!(pair[1] > pair[0], "levels are not strictly descending: {:?}", ys);
    }
}
