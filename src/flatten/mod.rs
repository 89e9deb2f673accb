use crate::error::FlattenError;
use crate::outcome::{
    BooleanScorecardItem, DEFAULT_MAX_DEPTH, NamedItem, NodeRole, OutcomeNode, OutcomeTree,
    VariableScorecardItem, walk,
};

mod merge;
mod record;

pub use merge::merge_by_name;
pub use record::FlattenedOutcome;

/// Options for [`Flattener`].
#[derive(Debug, Clone)]
pub struct FlattenOptions {
    /// Whether `path` starts with the root's own name (usually "All Outcomes").
    pub include_root_in_path: bool,
    /// Deepest level accepted before refusing the tree.
    pub max_depth: usize,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            include_root_in_path: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Items accumulated from the root down to the node being visited.
#[derive(Debug, Clone, Default)]
struct Inherited {
    insights: Vec<NamedItem>,
    objections: Vec<NamedItem>,
    boolean_checks: Vec<BooleanScorecardItem>,
    variable_checks: Vec<VariableScorecardItem>,
}

impl Inherited {
    fn merged_with(&self, node: &OutcomeNode) -> Self {
        Self {
            insights: merge_by_name(&self.insights, &node.insights),
            objections: merge_by_name(&self.objections, &node.objections),
            boolean_checks: merge_by_name(&self.boolean_checks, &node.boolean_checks),
            variable_checks: merge_by_name(&self.variable_checks, &node.variable_checks),
        }
    }
}

/// Collapses an outcome tree into one record per leaf.
///
/// Each record carries the leaf's own insights, objections and checks merged with those of
/// every ancestor, root first. When a name repeats along the way the ancestor's item is
/// kept. Records come out in document order, so identical trees always flatten to
/// identical output.
#[derive(Debug, Clone, Default)]
pub struct Flattener {
    options: FlattenOptions,
}

impl Flattener {
    pub fn new(options: FlattenOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FlattenOptions {
        &self.options
    }

    /// Flattens `tree`.
    ///
    /// # Errors
    ///
    /// [`FlattenError::DepthExceeded`] if the tree is deeper than `max_depth`.
    pub fn flatten(&self, tree: &OutcomeTree) -> Result<Vec<FlattenedOutcome>, FlattenError> {
        if let Some((depth, path)) = walk::deepest_beyond(&tree.root, self.options.max_depth) {
            return Err(FlattenError::DepthExceeded {
                depth,
                max_depth: self.options.max_depth,
                path,
            });
        }

        let mut leaves = Vec::new();
        self.visit(
            &tree.root,
            NodeRole::Root,
            &Inherited::default(),
            &[],
            &mut leaves,
        );

        tracing::debug!(
            root = %tree.root_name(),
            leaves = leaves.len(),
            "flattened outcome tree"
        );
        Ok(leaves)
    }

    fn visit(
        &self,
        node: &OutcomeNode,
        role: NodeRole,
        inherited: &Inherited,
        path: &[String],
        leaves: &mut Vec<FlattenedOutcome>,
    ) {
        let merged = inherited.merged_with(node);

        let mut path = path.to_vec();
        if !role.is_root() || self.options.include_root_in_path {
            path.push(node.name.clone());
        }

        if node.is_leaf() {
            leaves.push(FlattenedOutcome {
                name: node.name.clone(),
                description: node.description.clone(),
                is_scored: node.is_scored,
                path,
                insights: merged.insights,
                objections: merged.objections,
                boolean_checks: merged.boolean_checks,
                variable_checks: merged.variable_checks,
            });
            return;
        }

        for child in &node.children {
            self.visit(child, role.child(), &merged, &path, leaves);
        }
    }
}

/// Flattens `tree` with default options.
pub fn flatten(tree: &OutcomeTree) -> Result<Vec<FlattenedOutcome>, FlattenError> {
    Flattener::default().flatten(tree)
}
