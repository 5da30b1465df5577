//! Node classification for the tree visualization
//!
//! Pure mapping from node fields to a display category. Precedence lives in
//! [`CLASSIFICATION_RULES`]; the last entry always matches, so every node maps
//! to exactly one category.

use ira_model::{FaultTreeNode, NodeStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual/semantic category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    BasicCause,
    ContributingCause,
    Root,
    IntermediateValidated,
    Discarded,
    /// Pending or otherwise unresolved
    Open,
}

impl Category {
    /// Kebab-case tag
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BasicCause => "basic-cause",
            Self::ContributingCause => "contributing-cause",
            Self::Root => "root",
            Self::IntermediateValidated => "intermediate-validated",
            Self::Discarded => "discarded",
            Self::Open => "open",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationRule {
    BasicCause,
    ContributingCause,
    Root,
    ValidatedWithChildren,
    Discarded,
    Fallback,
}

impl ClassificationRule {
    #[must_use]
    pub fn matches(self, node: &FaultTreeNode, has_children: bool) -> bool {
        match self {
            Self::BasicCause => node.is_basic_cause,
            Self::ContributingCause => node.is_contributing_cause,
            Self::Root => node.kind.is_root(),
            Self::ValidatedWithChildren => node.status == NodeStatus::Validated && has_children,
            Self::Discarded => node.status == NodeStatus::Discarded,
            Self::Fallback => true,
        }
    }
}

/// Precedence table, first match wins
pub const CLASSIFICATION_RULES: [(ClassificationRule, Category); 6] = [
    (ClassificationRule::BasicCause, Category::BasicCause),
    (ClassificationRule::ContributingCause, Category::ContributingCause),
    (ClassificationRule::Root, Category::Root),
    (ClassificationRule::ValidatedWithChildren, Category::IntermediateValidated),
    (ClassificationRule::Discarded, Category::Discarded),
    (ClassificationRule::Fallback, Category::Open),
];

/// Classify `node`
///
/// `has_children` is passed explicitly so callers holding a projection of the
/// node (without its subtree) classify the same way.
#[must_use]
pub fn classify(node: &FaultTreeNode, has_children: bool) -> Category {
    CLASSIFICATION_RULES
        .iter()
        .find(|(rule, _)| rule.matches(node, has_children))
        .map_or(Category::Open, |(_, category)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_cause_wins_over_everything() {
        let node = FaultTreeNode::root("r")
            .basic_cause()
            .contributing_cause()
            .with_status(NodeStatus::Discarded);
        assert_eq!(classify(&node, true), Category::BasicCause);
    }

    #[test]
    fn contributing_wins_over_root() {
        let node = FaultTreeNode::root("r").contributing_cause();
        assert_eq!(classify(&node, false), Category::ContributingCause);
    }

    #[test]
    fn root_category() {
        assert_eq!(classify(&FaultTreeNode::root("r"), true), Category::Root);
    }

    #[test]
    fn validated_depends_on_children() {
        let node = FaultTreeNode::hypothesis("h").with_status(NodeStatus::Validated);
        assert_eq!(classify(&node, true), Category::IntermediateValidated);
        assert_eq!(classify(&node, false), Category::Open);
    }

    #[test]
    fn discarded_and_pending() {
        let discarded = FaultTreeNode::hypothesis("h").with_status(NodeStatus::Discarded);
        assert_eq!(classify(&discarded, true), Category::Discarded);
        assert_eq!(classify(&FaultTreeNode::hypothesis("h"), false), Category::Open);
    }

    #[test]
    fn category_tags_are_kebab_case() {
        assert_eq!(Category::IntermediateValidated.to_string(), "intermediate-validated");
        assert_eq!(
            serde_json::to_string(&Category::BasicCause).unwrap(),
            "\"basic-cause\""
        );
    }
}
