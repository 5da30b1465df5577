//! Single-pass pre-order traversal
//!
//! One [`walk`] numbers and classifies every node. All derived artifacts
//! (visualization stream, hypotheses, recommendations) are projections of the
//! same [`Walk`], so they cannot disagree on numbering.

use crate::classify::{classify, Category};
use crate::error::TreeError;
use crate::numbering::{NodeNumber, NumberingCounters};
use ira_model::FaultTreeNode;

/// A node as seen by the traversal
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    /// Pre-order position (root is 0)
    pub index: usize,
    /// Pre-order position of the parent
    pub parent: Option<usize>,
    /// Distance from the root (root is 0)
    pub depth: usize,
    pub node: &'a FaultTreeNode,
    pub number: Option<NodeNumber>,
    pub category: Category,
}

/// Completed traversal
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    visits: Vec<Visit<'a>>,
    counters: NumberingCounters,
}

impl<'a> Walk<'a> {
    /// Visits in pre-order
    #[inline]
    #[must_use]
    pub fn visits(&self) -> &[Visit<'a>] {
        &self.visits
    }

    /// Final counter state
    #[inline]
    #[must_use]
    pub fn counters(&self) -> &NumberingCounters {
        &self.counters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Visit<'a>> {
        self.visits.iter()
    }
}

/// Walk `root` in pre-order with fresh counters
///
/// # Errors
/// [`TreeError::DepthExceeded`] when a node sits deeper than `max_depth`
/// (the root is depth 0).
pub fn walk(root: &FaultTreeNode, max_depth: usize) -> Result<Walk<'_>, TreeError> {
    let mut walker = Walker {
        max_depth,
        counters: NumberingCounters::new(),
        visits: Vec::with_capacity(root.children.len() + 1),
        path: Vec::new(),
    };
    walker.visit(root, None, 0)?;
    Ok(Walk {
        visits: walker.visits,
        counters: walker.counters,
    })
}

struct Walker<'a> {
    max_depth: usize,
    counters: NumberingCounters,
    visits: Vec<Visit<'a>>,
    path: Vec<usize>,
}

impl<'a> Walker<'a> {
    fn visit(
        &mut self,
        node: &'a FaultTreeNode,
        parent: Option<usize>,
        depth: usize,
    ) -> Result<(), TreeError> {
        if depth > self.max_depth {
            return Err(TreeError::DepthExceeded {
                limit: self.max_depth,
                path: self
                    .path
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("."),
            });
        }

        let index = self.visits.len();
        let number = self.counters.assign(node);
        let category = classify(node, node.has_children());
        self.visits.push(Visit {
            index,
            parent,
            depth,
            node,
            number,
            category,
        });

        for (position, child) in node.children.iter().enumerate() {
            self.path.push(position);
            self.visit(child, Some(index), depth + 1)?;
            self.path.pop();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numbering::Series;
    use ira_model::NodeStatus;

    fn numbers(walk: &Walk<'_>) -> Vec<String> {
        walk.iter()
            .map(|v| v.number.map(|n| n.to_string()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn preorder_left_to_right() {
        let tree = FaultTreeNode::root("r")
            .with_child(
                FaultTreeNode::hypothesis("a")
                    .with_child(FaultTreeNode::hypothesis("a1"))
                    .with_child(FaultTreeNode::hypothesis("a2")),
            )
            .with_child(FaultTreeNode::hypothesis("b"));
        let walk = walk(&tree, 16).unwrap();
        let labels: Vec<&str> = walk.iter().map(|v| v.node.label.as_str()).collect();
        assert_eq!(labels, vec!["r", "a", "a1", "a2", "b"]);
        assert_eq!(numbers(&walk), vec!["", "H1", "H2", "H3", "H4"]);
        assert_eq!(walk.visits()[2].parent, Some(1));
        assert_eq!(walk.visits()[4].depth, 1);
    }

    #[test]
    fn series_are_counted_separately() {
        let tree = FaultTreeNode::root("r")
            .with_child(FaultTreeNode::hypothesis("h"))
            .with_child(FaultTreeNode::hypothesis("cb").basic_cause())
            .with_child(FaultTreeNode::hypothesis("cc").contributing_cause())
            .with_child(FaultTreeNode::hypothesis("cb2").basic_cause())
            .with_child(FaultTreeNode::fact("leaf").with_status(NodeStatus::Validated));
        let walk = walk(&tree, 16).unwrap();
        assert_eq!(numbers(&walk), vec!["", "H1", "CB1", "CC1", "CB2", ""]);
        assert_eq!(walk.counters().issued(Series::BasicCause), 2);
    }

    #[test]
    fn repeated_walks_restart_counters() {
        let tree = FaultTreeNode::root("r").with_child(FaultTreeNode::hypothesis("h"));
        let first = numbers(&walk(&tree, 4).unwrap());
        let second = numbers(&walk(&tree, 4).unwrap());
        assert_eq!(first, second);
        assert_eq!(second, vec!["", "H1"]);
    }

    #[test]
    fn depth_guard_fails_fast_with_path() {
        let tree = FaultTreeNode::root("r").with_child(
            FaultTreeNode::hypothesis("a").with_child(
                FaultTreeNode::hypothesis("b").with_child(FaultTreeNode::hypothesis("c")),
            ),
        );
        let err = walk(&tree, 2).unwrap_err();
        assert_eq!(
            err,
            TreeError::DepthExceeded {
                limit: 2,
                path: "0.0.0".to_string()
            }
        );
        assert!(walk(&tree, 3).is_ok());
    }
}
