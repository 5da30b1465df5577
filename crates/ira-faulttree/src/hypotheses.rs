//! Hypothesis extraction
//!
//! Builds the ordered list of hypothesis records rendered as narrative blocks.
//! Numbers come from the same [`Walk`] that numbers the visualization, so a
//! node excluded here still consumed its slot there.

use crate::config::TreeConfig;
use crate::error::TreeError;
use crate::numbering::NodeNumber;
use crate::walker::{walk, Visit, Walk};
use ira_model::{has_text, FaultTreeNode, NodeKind, NodeStatus};
use serde::Serialize;

/// Report-ready hypothesis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HypothesisRecord {
    pub node_number: Option<NodeNumber>,
    pub kind: NodeKind,
    pub label: String,
    pub status: NodeStatus,
    pub nbr_code: Option<String>,
    pub nbr_description: Option<String>,
    pub justification: Option<String>,
    /// Unresolved image reference; resolution happens at the report layer
    pub justification_image: Option<String>,
}

impl HypothesisRecord {
    /// Badge text, empty when the node drew no number
    #[must_use]
    pub fn number_label(&self) -> String {
        self.node_number.map(|n| n.to_string()).unwrap_or_default()
    }

    #[inline]
    #[must_use]
    pub fn has_nbr_code(&self) -> bool {
        has_text(self.nbr_code.as_deref())
    }

    fn from_visit(visit: &Visit<'_>) -> Self {
        let node = visit.node;
        Self {
            node_number: visit.number,
            kind: node.kind.clone(),
            label: node.label.clone(),
            status: node.status,
            nbr_code: node.nbr_code.clone(),
            nbr_description: node.nbr_description.clone(),
            justification: node.justification.clone(),
            justification_image: node.justification_image.clone(),
        }
    }
}

/// Hypothesis-class predicate for a non-root node
#[must_use]
pub fn is_hypothesis_class(node: &FaultTreeNode) -> bool {
    if node.kind.is_root() {
        return false;
    }
    node.kind == NodeKind::Hypothesis
        || matches!(
            node.status,
            NodeStatus::Pending | NodeStatus::Discarded | NodeStatus::Validated
        )
        || (node.kind == NodeKind::Fact && node.has_children())
}

/// Facts without a justification are left out of the narrative
#[must_use]
pub fn is_excluded(node: &FaultTreeNode) -> bool {
    node.kind == NodeKind::Fact && !has_text(node.justification.as_deref())
}

/// Project the hypothesis list out of a completed walk
#[must_use]
pub fn hypotheses_from_walk(walk: &Walk<'_>) -> Vec<HypothesisRecord> {
    walk.iter()
        .filter(|visit| is_hypothesis_class(visit.node))
        .filter(|visit| {
            let excluded = is_excluded(visit.node);
            if excluded {
                tracing::debug!(
                    index = visit.index,
                    number = ?visit.number.map(|n| n.to_string()),
                    "fact without justification left out of hypothesis list"
                );
            }
            !excluded
        })
        .map(HypothesisRecord::from_visit)
        .collect()
}

/// Extract hypotheses from `root` with fresh counters
///
/// # Errors
/// [`TreeError::DepthExceeded`] when the tree is deeper than allowed.
pub fn extract_hypotheses(
    root: &FaultTreeNode,
    config: &TreeConfig,
) -> Result<Vec<HypothesisRecord>, TreeError> {
    Ok(hypotheses_from_walk(&walk(root, config.max_depth)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_not_hypothesis_class() {
        assert!(!is_hypothesis_class(&FaultTreeNode::root("r")));
        assert!(is_hypothesis_class(&FaultTreeNode::default()));
    }

    #[test]
    fn fact_exclusion_needs_visible_justification() {
        assert!(is_excluded(&FaultTreeNode::fact("f")));
        assert!(is_excluded(&FaultTreeNode::fact("f").with_justification("  ")));
        assert!(!is_excluded(&FaultTreeNode::fact("f").with_justification("laudo")));
        assert!(!is_excluded(&FaultTreeNode::hypothesis("h")));
    }

    #[test]
    fn record_carries_node_fields() {
        let tree = FaultTreeNode::root("r").with_child(
            FaultTreeNode::hypothesis("Pneu gasto")
                .with_status(NodeStatus::Discarded)
                .with_nbr("NBR-14280", "Fator pessoal")
                .with_justification("Pneus dentro da especificação")
                .with_justification_image("https://cdn.example/pneu.png"),
        );
        let list = extract_hypotheses(&tree, &TreeConfig::default()).unwrap();
        assert_eq!(list.len(), 1);
        let record = &list[0];
        assert_eq!(record.number_label(), "H1");
        assert_eq!(record.status, NodeStatus::Discarded);
        assert_eq!(record.nbr_code.as_deref(), Some("NBR-14280"));
        assert!(record.has_nbr_code());
        assert_eq!(
            record.justification_image.as_deref(),
            Some("https://cdn.example/pneu.png")
        );
    }
}
