//! Graphviz rendering of the numbered node stream

use ira_faulttree::{Category, TreeNodeView};
use std::fmt::Write;

/// Visual style of a node category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStyle {
    pub fill: &'static str,
    pub shape: &'static str,
}

/// Style for `category`
#[must_use]
pub fn category_style(category: Category) -> NodeStyle {
    let (fill, shape) = match category {
        Category::BasicCause => ("#e53935", "box"),
        Category::ContributingCause => ("#fb8c00", "box"),
        Category::Root => ("#263238", "doubleoctagon"),
        Category::IntermediateValidated => ("#43a047", "box"),
        Category::Discarded => ("#9e9e9e", "box"),
        Category::Open => ("#fdd835", "ellipse"),
    };
    NodeStyle { fill, shape }
}

fn escape_dot(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' | '\r' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

/// Render `nodes` as a top-down DOT digraph
///
/// Node ids are pre-order indices, so identical trees render identically.
#[must_use]
pub fn render_dot(nodes: &[TreeNodeView]) -> String {
    let mut out = String::from("digraph fault_tree {\n");
    out.push_str("  rankdir=TB;\n");
    out.push_str("  node [style=filled, fontname=\"Helvetica\", fontsize=10];\n");

    for node in nodes {
        let style = category_style(node.category);
        let badge = node.badge();
        let label = if badge.is_empty() {
            escape_dot(&node.display_label)
        } else {
            format!("{badge}\\n{}", escape_dot(&node.display_label))
        };
        let font = if node.category == Category::Root {
            "white"
        } else {
            "black"
        };
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "  n{} [label=\"{label}\", shape={}, fillcolor=\"{}\", \
             fontcolor={font}, class=\"{}\"];",
            node.index, style.shape, style.fill, node.category
        );
    }
    for node in nodes {
        if let Some(parent) = node.parent {
            let _ = writeln!(out, "  n{parent} -> n{};", node.index);
        }
    }
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ira_faulttree::{analyze, TreeConfig};
    use ira_model::FaultTreeNode;

    fn nodes(tree: &FaultTreeNode) -> Vec<TreeNodeView> {
        analyze(Some(tree), &TreeConfig::default()).unwrap().nodes
    }

    #[test]
    fn every_category_has_distinct_fill() {
        let categories = [
            Category::BasicCause,
            Category::ContributingCause,
            Category::Root,
            Category::IntermediateValidated,
            Category::Discarded,
            Category::Open,
        ];
        let mut fills: Vec<&str> = categories.iter().map(|c| category_style(*c).fill).collect();
        fills.sort_unstable();
        fills.dedup();
        assert_eq!(fills.len(), categories.len());
    }

    #[test]
    fn dot_carries_badges_edges_and_escaped_labels() {
        let tree = FaultTreeNode::root("Acidente \"grave\"")
            .with_child(FaultTreeNode::hypothesis("Falha").basic_cause());
        let dot = render_dot(&nodes(&tree));

        assert!(dot.starts_with("digraph fault_tree {"));
        assert!(dot.contains("n0 [label=\"Acidente \\\"grave\\\"\", shape=doubleoctagon"));
        assert!(dot.contains("n1 [label=\"CB1\\nFalha\""));
        assert!(dot.contains("fillcolor=\"#e53935\", fontcolor=black, class=\"basic-cause\""));
        assert!(dot.contains("n0 -> n1;"));
    }

    #[test]
    fn long_labels_are_truncated() {
        let tree = FaultTreeNode::root("r").with_child(FaultTreeNode::hypothesis("x".repeat(80)));
        let dot = render_dot(&nodes(&tree));
        assert!(dot.contains(&format!("H1\\n{}...", "x".repeat(50))));
    }
}
