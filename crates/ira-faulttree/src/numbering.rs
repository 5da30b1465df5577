//! Category-scoped node numbering
//!
//! Each non-root node is matched against [`NUMBERING_RULES`] in order; the
//! first matching rule decides which series (if any) hands out the next
//! number. Counters live in [`NumberingCounters`], which a traversal creates
//! fresh and threads through its recursion. They are never shared between
//! traversals.

use ira_model::{FaultTreeNode, NodeKind, NodeStatus};
use serde::{Serialize, Serializer};
use std::fmt;

/// Numbering series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
    /// `H<n>`
    Hypothesis,
    /// `CB<n>`
    BasicCause,
    /// `CC<n>`
    ContributingCause,
}

impl Series {
    /// Badge prefix
    #[inline]
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Hypothesis => "H",
            Self::BasicCause => "CB",
            Self::ContributingCause => "CC",
        }
    }
}

/// Assigned node number, e.g. `H3` or `CB1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeNumber {
    series: Series,
    value: u32,
}

impl NodeNumber {
    #[inline]
    #[must_use]
    pub fn new(series: Series, value: u32) -> Self {
        Self { series, value }
    }

    #[inline]
    #[must_use]
    pub fn series(&self) -> Series {
        self.series
    }

    /// 1-based position within the series
    #[inline]
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }
}

impl fmt::Display for NodeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.series.prefix(), self.value)
    }
}

impl Serialize for NodeNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Numbering predicates, in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberingRule {
    /// The root is never numbered
    Root,
    /// `is_basic_cause`
    BasicCause,
    /// `is_contributing_cause`
    ContributingCause,
    /// `kind == hypothesis`
    HypothesisKind,
    /// `kind == fact` with children
    FactWithChildren,
    /// `status == validated` with children
    ValidatedWithChildren,
    /// `status` pending or discarded
    Unresolved,
}

impl NumberingRule {
    /// Does this rule apply to `node`
    #[must_use]
    pub fn matches(self, node: &FaultTreeNode) -> bool {
        match self {
            Self::Root => node.kind.is_root(),
            Self::BasicCause => node.is_basic_cause,
            Self::ContributingCause => node.is_contributing_cause,
            Self::HypothesisKind => node.kind == NodeKind::Hypothesis,
            Self::FactWithChildren => node.kind == NodeKind::Fact && node.has_children(),
            Self::ValidatedWithChildren => {
                node.status == NodeStatus::Validated && node.has_children()
            }
            Self::Unresolved => {
                matches!(node.status, NodeStatus::Pending | NodeStatus::Discarded)
            }
        }
    }
}

/// Precedence table: first match wins, `None` means "no number"
///
/// A node matching none of the rules (e.g. a validated leaf fact) is not
/// numbered either.
pub const NUMBERING_RULES: [(NumberingRule, Option<Series>); 7] = [
    (NumberingRule::Root, None),
    (NumberingRule::BasicCause, Some(Series::BasicCause)),
    (NumberingRule::ContributingCause, Some(Series::ContributingCause)),
    (NumberingRule::HypothesisKind, Some(Series::Hypothesis)),
    (NumberingRule::FactWithChildren, Some(Series::Hypothesis)),
    (NumberingRule::ValidatedWithChildren, Some(Series::Hypothesis)),
    (NumberingRule::Unresolved, Some(Series::Hypothesis)),
];

/// First rule in [`NUMBERING_RULES`] matching `node`
#[must_use]
pub fn matching_rule(node: &FaultTreeNode) -> Option<NumberingRule> {
    NUMBERING_RULES
        .iter()
        .map(|(rule, _)| *rule)
        .find(|rule| rule.matches(node))
}

/// Series `node` draws its number from, if any
#[must_use]
pub fn numbering_series(node: &FaultTreeNode) -> Option<Series> {
    NUMBERING_RULES
        .iter()
        .find(|(rule, _)| rule.matches(node))
        .and_then(|(_, series)| *series)
}

/// Per-traversal counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberingCounters {
    hypothesis: u32,
    basic_cause: u32,
    contributing_cause: u32,
}

impl NumberingCounters {
    /// Fresh counters, all at zero
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the next slot of `series`
    pub fn next(&mut self, series: Series) -> NodeNumber {
        let slot = match series {
            Series::Hypothesis => &mut self.hypothesis,
            Series::BasicCause => &mut self.basic_cause,
            Series::ContributingCause => &mut self.contributing_cause,
        };
        *slot += 1;
        NodeNumber::new(series, *slot)
    }

    /// Number `node`, consuming a slot when a rule assigns one
    pub fn assign(&mut self, node: &FaultTreeNode) -> Option<NodeNumber> {
        numbering_series(node).map(|series| self.next(series))
    }

    /// Slots consumed so far in `series`
    #[inline]
    #[must_use]
    pub fn issued(&self, series: Series) -> u32 {
        match series {
            Series::Hypothesis => self.hypothesis,
            Series::BasicCause => self.basic_cause,
            Series::ContributingCause => self.contributing_cause,
        }
    }
}
