use crate::outcome::{OutcomeNode, OutcomeTree};
use std::fmt;

/// Renders an outcome tree as an indented text outline.
///
/// ```text
/// All Outcomes
/// ├── Demo Scheduled [1 check]
/// │   ├── No-Show
/// │   └── Rescheduled (1 insight)
/// └── Lost
/// ```
pub struct TreeOutline<'a> {
    pub tree: &'a OutcomeTree,
}

impl<'a> TreeOutline<'a> {
    pub fn new(tree: &'a OutcomeTree) -> Self {
        Self { tree }
    }
}

impl fmt::Display for TreeOutline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = &self.tree.root;
        writeln!(f, "{}", describe(root))?;

        // Children go on in reverse so the first one is popped first.
        let mut stack: Vec<(&OutcomeNode, String, bool)> = Vec::new();
        push_children(&mut stack, root, String::new());

        while let Some((node, prefix, is_last)) = stack.pop() {
            let node_marker = if is_last { "└── " } else { "├── " };
            writeln!(f, "{}{}{}", prefix, node_marker, describe(node))?;

            let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
            push_children(&mut stack, node, child_prefix);
        }
        Ok(())
    }
}

fn push_children<'n>(
    stack: &mut Vec<(&'n OutcomeNode, String, bool)>,
    node: &'n OutcomeNode,
    prefix: String,
) {
    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate().rev() {
        stack.push((child, prefix.clone(), i + 1 == count));
    }
}

fn describe(node: &OutcomeNode) -> String {
    let mut line = if node.name.is_empty() {
        "<unnamed>".to_string()
    } else {
        node.name.clone()
    };

    let checks = node.scorecard_count();
    if checks > 0 {
        line.push_str(&format!(" [{} {}]", checks, plural(checks, "check")));
    }

    let mut notes = Vec::new();
    if !node.insights.is_empty() {
        notes.push(format!(
            "{} {}",
            node.insights.len(),
            plural(node.insights.len(), "insight")
        ));
    }
    if !node.objections.is_empty() {
        notes.push(format!(
            "{} {}",
            node.objections.len(),
            plural(node.objections.len(), "objection")
        ));
    }
    if !notes.is_empty() {
        line.push_str(&format!(" ({})", notes.join(", ")));
    }
    if !node.is_scored {
        line.push_str(" *unscored*");
    }
    line
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{BooleanScorecardItem, NamedItem};

    #[test]
    fn renders_branches_and_counts() {
        let tree = OutcomeTree::new(
            OutcomeNode::new("All Outcomes")
                .with_child(
                    OutcomeNode::new("Demo Scheduled")
                        .with_boolean_check(BooleanScorecardItem {
                            name: "Asked budget".to_string(),
                            ..Default::default()
                        })
                        .with_child(OutcomeNode::new("No-Show"))
                        .with_child(
                            OutcomeNode::new("Rescheduled")
                                .with_insight(NamedItem::new("Preferred time", "")),
                        ),
                )
                .with_child(OutcomeNode::new("Lost")),
        );

        let expected = "\
All Outcomes
├── Demo Scheduled [1 check]
│   ├── No-Show
│   └── Rescheduled (1 insight)
└── Lost
";
        assert_eq!(TreeOutline::new(&tree).to_string(), expected);
    }

    #[test]
    fn renders_long_chains_without_recursing() {
        let mut node = OutcomeNode::new("Level 3000");
        for i in (0..3000).rev() {
            node = OutcomeNode::new(format!("Level {}", i)).with_child(node);
        }
        let tree = OutcomeTree::new(node);

        let rendered = TreeOutline::new(&tree).to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3001);
        assert_eq!(lines[0], "Level 0");
        assert_eq!(lines[1], "└── Level 1");
        assert_eq!(lines[2], "    └── Level 2");
        assert!(lines[3000].ends_with("└── Level 3000"));
    }
}
