//! Recommendation extraction
//!
//! Validated causes with a remediation recommendation, split by causal class.
//! A validated node with a recommendation but neither causal flag belongs to
//! neither list.

use crate::config::TreeConfig;
use crate::error::TreeError;
use crate::walker::{walk, Walk};
use ira_model::{FaultTreeNode, NodeStatus};
use serde::Serialize;

/// Recommendation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub label: String,
    pub nbr_code: Option<String>,
    pub nbr_description: Option<String>,
    pub recommendation: String,
}

/// Recommendations by causal class, each in pre-order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Recommendations {
    pub basic_causes: Vec<Recommendation>,
    pub contributing_causes: Vec<Recommendation>,
}

impl Recommendations {
    /// True when the recommendations section should be skipped
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.basic_causes.is_empty() && self.contributing_causes.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.basic_causes.len() + self.contributing_causes.len()
    }
}

fn qualifying_recommendation(node: &FaultTreeNode) -> Option<&str> {
    if node.kind.is_root() || node.status != NodeStatus::Validated {
        return None;
    }
    node.recommendation
        .as_deref()
        .filter(|text| !text.trim().is_empty())
}

/// Project recommendations out of a completed walk
#[must_use]
pub fn recommendations_from_walk(walk: &Walk<'_>) -> Recommendations {
    let mut out = Recommendations::default();
    for visit in walk.iter() {
        let node = visit.node;
        let Some(text) = qualifying_recommendation(node) else {
            continue;
        };
        let entry = Recommendation {
            label: node.label.clone(),
            nbr_code: node.nbr_code.clone(),
            nbr_description: node.nbr_description.clone(),
            recommendation: text.to_string(),
        };
        if node.is_basic_cause {
            out.basic_causes.push(entry);
        } else if node.is_contributing_cause {
            out.contributing_causes.push(entry);
        } else {
            tracing::debug!(
                index = visit.index,
                label = %node.label,
                "validated recommendation without causal flag dropped"
            );
        }
    }
    out
}

/// Extract recommendations from `root`
///
/// # Errors
/// [`TreeError::DepthExceeded`] when the tree is deeper than allowed.
pub fn extract_recommendations(
    root: &FaultTreeNode,
    config: &TreeConfig,
) -> Result<Recommendations, TreeError> {
    Ok(recommendations_from_walk(&walk(root, config.max_depth)?))
}
