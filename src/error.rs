use thiserror::Error;

/// Errors that can occur while laying out an outcome tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error(
        "Outcome '{}' sits at depth {depth}, deeper than the layout limit of {max_depth}",
        .path.join(" > ")
    )]
    DepthExceeded {
        depth: usize,
        max_depth: usize,
        path: Vec<String>,
    },

    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),
}

/// Errors that can occur while flattening an outcome tree into leaf records.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlattenError {
    #[error(
        "Outcome '{}' sits at depth {depth}, deeper than the flatten limit of {max_depth}",
        .path.join(" > ")
    )]
    DepthExceeded {
        depth: usize,
        max_depth: usize,
        path: Vec<String>,
    },
}

/// Errors that can occur while assembling a nested tree from a flat node table.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeBuildError {
    #[error("Outcome graph has no nodes")]
    EmptyGraph,

    #[error(
        "Node '{missing_node_id}' not found, which is required by a connection from node '{source_node_id}'"
    )]
    NodeNotFound {
        missing_node_id: String,
        source_node_id: String,
    },

    #[error("Node id '{0}' is declared more than once")]
    DuplicateNode(String),

    #[error("Outcome graph has more than one root: {}", .roots.join(", "))]
    MultipleRoots { roots: Vec<String> },

    #[error("Node '{node_id}' has more than one parent ('{first_parent}' and '{second_parent}')")]
    MultipleParents {
        node_id: String,
        first_parent: String,
        second_parent: String,
    },

    #[error("Cycle detected: {}", .cycle.join(" -> "))]
    CycleDetected { cycle: Vec<String> },

    #[error(
        "Node '{}' sits at depth {depth}, deeper than the graph limit of {max_depth}",
        .path.join(" > ")
    )]
    DepthExceeded {
        depth: usize,
        max_depth: usize,
        path: Vec<String>,
    },
}

/// Errors that can occur when reading an editor document or converting a custom format.
#[derive(Error, Debug, Clone)]
pub enum DocumentError {
    #[error("Failed to parse blueprint JSON: {0}")]
    JsonParseError(String),

    #[error("Invalid custom data: {0}")]
    ValidationError(String),

    #[error("Failed to serialize blueprint JSON: {0}")]
    SerializationError(String),
}

/// Errors raised when saving or loading a binary blueprint artifact.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("Artifact error: {0}")]
    Generic(String),
}
