//! Combined derivation
//!
//! [`analyze`] walks the tree once and projects all three artifacts from that
//! walk: the numbered/classified node stream, the hypothesis list and the
//! recommendation lists.

use crate::classify::Category;
use crate::config::TreeConfig;
use crate::error::TreeError;
use crate::hypotheses::{hypotheses_from_walk, HypothesisRecord};
use crate::numbering::{NodeNumber, Series};
use crate::recommendations::{recommendations_from_walk, Recommendations};
use crate::walker::{walk, Visit};
use ira_model::{FaultTreeNode, NodeKind, NodeStatus};
use serde::Serialize;

/// Node as handed to the tree visualization
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNodeView {
    pub index: usize,
    pub parent: Option<usize>,
    pub depth: usize,
    pub kind: NodeKind,
    pub status: NodeStatus,
    pub number: Option<NodeNumber>,
    pub category: Category,
    /// Truncated label for display
    pub display_label: String,
}

impl TreeNodeView {
    fn from_visit(visit: &Visit<'_>, label_width: usize) -> Self {
        Self {
            index: visit.index,
            parent: visit.parent,
            depth: visit.depth,
            kind: visit.node.kind.clone(),
            status: visit.node.status,
            number: visit.number,
            category: visit.category,
            display_label: visit.node.display_label(label_width),
        }
    }

    /// Badge text, empty when unnumbered
    #[must_use]
    pub fn badge(&self) -> String {
        self.number.map(|n| n.to_string()).unwrap_or_default()
    }
}

/// Numbering totals per series
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NumberingSummary {
    pub hypotheses: u32,
    pub basic_causes: u32,
    pub contributing_causes: u32,
}

/// Everything derived from one fault tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FaultTreeAnalysis {
    pub nodes: Vec<TreeNodeView>,
    pub hypotheses: Vec<HypothesisRecord>,
    pub recommendations: Recommendations,
    pub numbering: NumberingSummary,
}

impl FaultTreeAnalysis {
    /// No tree was supplied, or it produced nothing
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Derive all artifacts from an optional tree in one traversal
///
/// An absent tree yields an empty analysis.
///
/// # Errors
/// [`TreeError::DepthExceeded`] when the tree is deeper than allowed.
pub fn analyze(
    tree: Option<&FaultTreeNode>,
    config: &TreeConfig,
) -> Result<FaultTreeAnalysis, TreeError> {
    let Some(root) = tree else {
        tracing::debug!("no fault tree supplied, skipping derivation");
        return Ok(FaultTreeAnalysis::default());
    };

    let walk = walk(root, config.max_depth)?;
    let counters = walk.counters();
    let analysis = FaultTreeAnalysis {
        nodes: walk
            .iter()
            .map(|visit| TreeNodeView::from_visit(visit, config.label_width))
            .collect(),
        hypotheses: hypotheses_from_walk(&walk),
        recommendations: recommendations_from_walk(&walk),
        numbering: NumberingSummary {
            hypotheses: counters.issued(Series::Hypothesis),
            basic_causes: counters.issued(Series::BasicCause),
            contributing_causes: counters.issued(Series::ContributingCause),
        },
    };

    tracing::info!(
        nodes = analysis.nodes.len(),
        hypotheses = analysis.hypotheses.len(),
        basic_causes = analysis.recommendations.basic_causes.len(),
        contributing_causes = analysis.recommendations.contributing_causes.len(),
        "fault tree analysed"
    );
    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_tree_is_empty_not_error() {
        let analysis = analyze(None, &TreeConfig::default()).unwrap();
        assert!(analysis.is_empty());
        assert!(analysis.hypotheses.is_empty());
        assert!(analysis.recommendations.is_empty());
    }

    #[test]
    fn node_stream_and_hypotheses_share_numbers() {
        let tree = FaultTreeNode::root("r")
            .with_child(
                FaultTreeNode::fact("sem justificativa")
                    .with_child(FaultTreeNode::hypothesis("x")),
            )
            .with_child(FaultTreeNode::hypothesis("y"));
        let analysis = analyze(Some(&tree), &TreeConfig::default()).unwrap();

        let badges: Vec<String> = analysis.nodes.iter().map(TreeNodeView::badge).collect();
        assert_eq!(badges, vec!["", "H1", "H2", "H3"]);

        let listed: Vec<String> = analysis
            .hypotheses
            .iter()
            .map(HypothesisRecord::number_label)
            .collect();
        assert_eq!(listed, vec!["H2", "H3"]);
        assert_eq!(analysis.numbering.hypotheses, 3);
    }

    #[test]
    fn display_label_uses_configured_width() {
        let tree = FaultTreeNode::root("abcdefghij");
        let config = TreeConfig::default().with_label_width(4);
        let analysis = analyze(Some(&tree), &config).unwrap();
        assert_eq!(analysis.nodes[0].display_label, "abcd...");
    }
}
