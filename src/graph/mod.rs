//! Flat node-table input.
//!
//! Persisted drafts can store the hierarchy as a list of nodes plus parent-to-child
//! connections instead of a nested value. This is the only input form in which a node can
//! end up as its own descendant, so [`TreeBuilder`] checks for that while assembling the
//! nested [`OutcomeTree`].

use crate::document::RawOutcome;
use crate::error::TreeBuildError;
use crate::outcome::{DEFAULT_MAX_DEPTH, OutcomeNode, OutcomeTree};
use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

/// A single outcome in a flat table, identified by an opaque id.
///
/// Node content is read as leniently as the nested document form: wrong-typed fields fall
/// back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawGraphNode")]
pub struct OutcomeGraphNode {
    pub id: String,
    /// Node content. Inline `children` are kept and edge-connected children follow them.
    #[serde(flatten)]
    pub outcome: OutcomeNode,
}

#[derive(Deserialize)]
struct RawGraphNode {
    id: String,
    #[serde(flatten)]
    outcome: RawOutcome,
}

impl From<RawGraphNode> for OutcomeGraphNode {
    fn from(raw: RawGraphNode) -> Self {
        Self {
            id: raw.id,
            outcome: raw.outcome.into(),
        }
    }
}

/// A parent-to-child connection. Sibling order follows edge order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeGraphEdge {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeGraph {
    pub nodes: Vec<OutcomeGraphNode>,
    #[serde(default)]
    pub edges: Vec<OutcomeGraphEdge>,
}

impl OutcomeGraph {
    pub fn into_tree(self) -> Result<OutcomeTree, TreeBuildError> {
        TreeBuilder::new(&self).build()
    }
}

/// Assembles the nested tree from an [`OutcomeGraph`].
///
/// Edge-connected nodes deeper than `max_depth` (default [`DEFAULT_MAX_DEPTH`]) are refused
/// with [`TreeBuildError::DepthExceeded`].
pub struct TreeBuilder<'a> {
    graph: &'a OutcomeGraph,
    index: AHashMap<&'a str, usize>,
    connections: AHashMap<&'a str, Vec<&'a str>>,
    max_depth: usize,
}

/// The chain of node ids from the root down to the node being built.
#[derive(Default)]
struct Ancestry<'a> {
    stack: Vec<&'a str>,
    on_stack: AHashSet<&'a str>,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(graph: &'a OutcomeGraph) -> Self {
        let mut connections: AHashMap<&str, Vec<&str>> = AHashMap::new();
        for edge in &graph.edges {
            connections
                .entry(edge.source.as_str())
                .or_default()
                .push(edge.target.as_str());
        }
        Self {
            graph,
            index: AHashMap::new(),
            connections,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn build(mut self) -> Result<OutcomeTree, TreeBuildError> {
        let graph = self.graph;
        if graph.nodes.is_empty() {
            return Err(TreeBuildError::EmptyGraph);
        }

        for (i, node) in graph.nodes.iter().enumerate() {
            if self.index.insert(node.id.as_str(), i).is_some() {
                return Err(TreeBuildError::DuplicateNode(node.id.clone()));
            }
        }

        let mut parents: AHashMap<&str, &str> = AHashMap::new();
        for edge in &graph.edges {
            self.find_node(&edge.source, &edge.target)?;
            self.find_node(&edge.target, &edge.source)?;
            parents
                .entry(edge.target.as_str())
                .or_insert(edge.source.as_str());
        }

        let roots: Vec<&str> = graph
            .nodes
            .iter()
            .map(|n| n.id.as_str())
            .filter(|id| !parents.contains_key(id))
            .collect();

        let root_id = match roots.as_slice() {
            [root] => *root,
            [] => {
                // Every node has a parent, so following parents must loop.
                let start = graph.nodes[0].id.as_str();
                return Err(TreeBuildError::CycleDetected {
                    cycle: trace_parent_cycle(start, &parents),
                });
            }
            _ => {
                return Err(TreeBuildError::MultipleRoots {
                    roots: roots.iter().map(|r| r.to_string()).collect(),
                });
            }
        };

        let mut visited: AHashSet<&str> = AHashSet::new();
        let mut ancestry = Ancestry::default();
        let root = self.build_node(root_id, &mut ancestry, &mut visited)?;

        if let Some(stray) = graph
            .nodes
            .iter()
            .map(|n| n.id.as_str())
            .find(|id| !visited.contains(id))
        {
            // A node that the root cannot reach only has unreachable ancestors.
            return Err(TreeBuildError::CycleDetected {
                cycle: trace_parent_cycle(stray, &parents),
            });
        }

        tracing::debug!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            root = root_id,
            "assembled outcome tree from graph"
        );
        Ok(OutcomeTree::new(root))
    }

    fn build_node(
        &self,
        node_id: &'a str,
        ancestry: &mut Ancestry<'a>,
        visited: &mut AHashSet<&'a str>,
    ) -> Result<OutcomeNode, TreeBuildError> {
        if ancestry.on_stack.contains(node_id) {
            let pos = ancestry
                .stack
                .iter()
                .position(|id| *id == node_id)
                .unwrap_or(0);
            let mut cycle: Vec<String> = ancestry.stack[pos..]
                .iter()
                .map(|id| id.to_string())
                .collect();
            cycle.push(node_id.to_string());
            return Err(TreeBuildError::CycleDetected { cycle });
        }
        if !visited.insert(node_id) {
            let first_parent = self
                .graph
                .edges
                .iter()
                .find(|e| e.target == node_id)
                .map(|e| e.source.clone())
                .unwrap_or_default();
            let second_parent = ancestry
                .stack
                .last()
                .map(|id| id.to_string())
                .unwrap_or_default();
            return Err(TreeBuildError::MultipleParents {
                node_id: node_id.to_string(),
                first_parent,
                second_parent,
            });
        }

        let source = ancestry.stack.last().copied().unwrap_or("N/A");
        let found = self.find_node(node_id, source)?;

        let depth = ancestry.stack.len();
        if depth > self.max_depth {
            let mut path = Vec::with_capacity(depth + 1);
            for id in &ancestry.stack {
                path.push(self.find_node(id, source)?.outcome.name.clone());
            }
            path.push(found.outcome.name.clone());
            return Err(TreeBuildError::DepthExceeded {
                depth,
                max_depth: self.max_depth,
                path,
            });
        }

        let mut outcome = found.outcome.clone();
        ancestry.stack.push(node_id);
        ancestry.on_stack.insert(node_id);
        let child_ids = self.connections.get(node_id).cloned().unwrap_or_default();
        for child_id in child_ids {
            let child = self.build_node(child_id, ancestry, visited)?;
            outcome.children.push(child);
        }
        ancestry.on_stack.remove(node_id);
        ancestry.stack.pop();

        Ok(outcome)
    }

    fn find_node(
        &self,
        node_id: &str,
        source_node_id: &str,
    ) -> Result<&'a OutcomeGraphNode, TreeBuildError> {
        self.index
            .get(node_id)
            .map(|&i| &self.graph.nodes[i])
            .ok_or_else(|| TreeBuildError::NodeNotFound {
                missing_node_id: node_id.to_string(),
                source_node_id: source_node_id.to_string(),
            })
    }
}

/// Follows first-parent links from `start` until a node repeats and returns the loop.
fn trace_parent_cycle(start: &str, parents: &AHashMap<&str, &str>) -> Vec<String> {
    let mut seen: Vec<&str> = Vec::new();
    let mut positions: AHashMap<&str, usize> = AHashMap::new();
    let mut current = start;
    loop {
        if let Some(&pos) = positions.get(current) {
            // Parent links point upward; reverse so the cycle reads parent -> child.
            let mut cycle: Vec<String> =
                seen[pos..].iter().rev().map(|id| id.to_string()).collect();
            cycle.insert(0, current.to_string());
            return cycle;
        }
        positions.insert(current, seen.len());
        seen.push(current);
        match parents.get(current) {
            Some(parent) => current = *parent,
            None => return seen.iter().rev().map(|id| id.to_string()).collect(),
        }
    }
}
