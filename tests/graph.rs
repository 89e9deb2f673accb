//! Flat node-table input tests.
mod common;
use blueprint::graph::TreeBuilder;
use blueprint::prelude::*;
use common::*;

fn node(id: &str, name: &str) -> OutcomeGraphNode {
    OutcomeGraphNode {
        id: id.to_string(),
        outcome: OutcomeNode::new(name),
    }
}

fn edge(source: &str, target: &str) -> OutcomeGraphEdge {
    OutcomeGraphEdge {
        source: source.to_string(),
        target: target.to_string(),
    }
}

#[test]
fn test_graph_builds_same_tree_as_nested_form() {
    let graph: OutcomeGraph = serde_json::from_str(DEMO_GRAPH_JSON).unwrap();
    let tree = graph.into_tree().unwrap();
    assert_eq!(tree, create_demo_tree());
}

#[test]
fn test_edge_order_sets_sibling_order() {
    let graph = OutcomeGraph {
        nodes: vec![node("r", "Root"), node("a", "A"), node("b", "B")],
        edges: vec![edge("r", "b"), edge("r", "a")],
    };
    let tree = TreeBuilder::new(&graph).build().unwrap();
    let names: Vec<_> = tree.root.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["B", "A"]);
}

#[test]
fn test_empty_graph() {
    assert_eq!(
        OutcomeGraph::default().into_tree(),
        Err(TreeBuildError::EmptyGraph)
    );
}

#[test]
fn test_unknown_edge_target() {
    let graph = OutcomeGraph {
        nodes: vec![node("r", "Root")],
        edges: vec![edge("r", "ghost")],
    };
    assert_eq!(
        graph.into_tree(),
        Err(TreeBuildError::NodeNotFound {
            missing_node_id: "ghost".to_string(),
            source_node_id: "r".to_string(),
        })
    );
}

#[test]
fn test_duplicate_node_id() {
    let graph = OutcomeGraph {
        nodes: vec![node("r", "Root"), node("r", "Again")],
        edges: vec![],
    };
    assert_eq!(
        graph.into_tree(),
        Err(TreeBuildError::DuplicateNode("r".to_string()))
    );
}

#[test]
fn test_multiple_roots() {
    let graph = OutcomeGraph {
        nodes: vec![node("a", "A"), node("b", "B")],
        edges: vec![],
    };
    assert!(matches!(
        graph.into_tree(),
        Err(TreeBuildError::MultipleRoots { roots }) if roots == vec!["a", "b"]
    ));
}

#[test]
fn test_cycle_below_root_is_detected() {
    let graph = OutcomeGraph {
        nodes: vec![node("r", "Root"), node("a", "A"), node("b", "B")],
        edges: vec![edge("r", "a"), edge("a", "b"), edge("b", "a")],
    };
    match graph.into_tree() {
        Err(TreeBuildError::CycleDetected { cycle }) => {
            assert_eq!(cycle, vec!["a", "b", "a"]);
        }
        other => panic!("expected a cycle, got {:?}", other),
    }
}

#[test]
fn test_self_loop_is_detected() {
    let graph = OutcomeGraph {
        nodes: vec![node("r", "Root"), node("a", "A")],
        edges: vec![edge("r", "a"), edge("a", "a")],
    };
    let err = graph.into_tree().unwrap_err();
    assert!(matches!(err, TreeBuildError::CycleDetected { .. }));
    assert!(err.to_string().contains("a -> a"));
}

#[test]
fn test_graph_without_root_is_a_cycle() {
    let graph = OutcomeGraph {
        nodes: vec![node("a", "A"), node("b", "B")],
        edges: vec![edge("a", "b"), edge("b", "a")],
    };
    assert!(matches!(
        graph.into_tree(),
        Err(TreeBuildError::CycleDetected { .. })
    ));
}

#[test]
fn test_detached_cycle_is_detected() {
    let graph = OutcomeGraph {
        nodes: vec![node("r", "Root"), node("x", "X"), node("y", "Y")],
        edges: vec![edge("x", "y"), edge("y", "x")],
    };
    assert!(matches!(
        graph.into_tree(),
        Err(TreeBuildError::CycleDetected { .. })
    ));
}

#[test]
fn test_shared_child_is_rejected() {
    let graph = OutcomeGraph {
        nodes: vec![
            node("r", "Root"),
            node("a", "A"),
            node("b", "B"),
            node("d", "Shared"),
        ],
        edges: vec![edge("r", "a"), edge("r", "b"), edge("a", "d"), edge("b", "d")],
    };
    assert_eq!(
        graph.into_tree(),
        Err(TreeBuildError::MultipleParents {
            node_id: "d".to_string(),
            first_parent: "a".to_string(),
            second_parent: "b".to_string(),
        })
    );
}

#[test]
fn test_graph_errors_surface_through_into_outcome_tree() {
    let graph = OutcomeGraph {
        nodes: vec![node("a", "A"), node("b", "B")],
        edges: vec![edge("a", "b"), edge("b", "a")],
    };
    let err = graph.into_outcome_tree().unwrap_err();
    assert!(matches!(err, DocumentError::ValidationError(msg) if msg.contains("Cycle")));
}

fn chain_graph(len: usize) -> OutcomeGraph {
    OutcomeGraph {
        nodes: (0..len)
            .map(|i| node(&format!("n{}", i), &format!("Level {}", i)))
            .collect(),
        edges: (1..len)
            .map(|i| edge(&format!("n{}", i - 1), &format!("n{}", i)))
            .collect(),
    }
}

#[test]
fn test_long_chain_is_refused_at_the_depth_limit() {
    let err = chain_graph(10_000).into_tree().unwrap_err();
    match err {
        TreeBuildError::DepthExceeded {
            depth,
            max_depth,
            path,
        } => {
            assert_eq!(depth, DEFAULT_MAX_DEPTH + 1);
            assert_eq!(max_depth, DEFAULT_MAX_DEPTH);
            assert_eq!(path.len(), DEFAULT_MAX_DEPTH + 2);
            assert_eq!(path[0], "Level 0");
            assert_eq!(path.last().unwrap(), &format!("Level {}", DEFAULT_MAX_DEPTH + 1));
        }
        other => panic!("expected a depth error, got {:?}", other),
    }
}

#[test]
fn test_chain_at_the_depth_limit_builds() {
    let tree = chain_graph(DEFAULT_MAX_DEPTH + 1).into_tree().unwrap();
    assert_eq!(tree, create_chain(DEFAULT_MAX_DEPTH));
}

#[test]
fn test_custom_graph_depth_limit() {
    let graph = chain_graph(5);
    assert!(TreeBuilder::new(&graph).with_max_depth(4).build().is_ok());
    let err = TreeBuilder::new(&graph).with_max_depth(3).build().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Node 'Level 0 > Level 1 > Level 2 > Level 3 > Level 4' sits at depth 4, \
         deeper than the graph limit of 3"
    );
}

#[test]
fn test_cycle_found_deep_in_a_chain() {
    let mut graph = chain_graph(50);
    graph.edges.push(edge("n49", "n10"));
    // n10 now has two parents, but the loop is met first while descending.
    match TreeBuilder::new(&graph).build() {
        Err(TreeBuildError::CycleDetected { cycle }) => {
            assert_eq!(cycle.first().map(String::as_str), Some("n10"));
            assert_eq!(cycle.last().map(String::as_str), Some("n10"));
            assert_eq!(cycle.len(), 41);
        }
        other => panic!("expected a cycle, got {:?}", other),
    }
}

#[test]
fn test_graph_nodes_accept_wrong_typed_fields() {
    let json = r#"{
        "nodes": [
            {
                "id": "r",
                "name": "Root",
                "insights": null,
                "booleanChecks": "none",
                "objections": [{"name": "Too pricey"}, 7]
            },
            {
                "id": "a",
                "name": 42,
                "is_scored": "nope",
                "variableChecks": {"oops": true},
                "children": null
            }
        ],
        "edges": [{"source": "r", "target": "a"}]
    }"#;

    let graph: OutcomeGraph = serde_json::from_str(json).unwrap();
    assert!(graph.nodes[0].outcome.insights.is_empty());
    assert!(graph.nodes[0].outcome.boolean_checks.is_empty());
    assert_eq!(graph.nodes[0].outcome.objections.len(), 1);
    assert_eq!(graph.nodes[1].outcome.name, "42");
    assert!(graph.nodes[1].outcome.is_scored);

    let tree = graph.into_tree().unwrap();
    assert_eq!(tree.root.name, "Root");
    assert_eq!(tree.root.children.len(), 1);
    assert_eq!(tree.root.children[0].name, "42");
    assert!(tree.root.children[0].variable_checks.is_empty());
}
