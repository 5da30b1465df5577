//! Fault tree node
//!
//! A rooted, ordered, finite tree produced by the upstream analysis tool.
//! Child order is load-bearing: it determines pre-order numbering.

use crate::serde_util::null_as_default;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Node kind
///
/// The upstream vocabulary is open. Anything that is not one of the known
/// kinds is kept verbatim in [`NodeKind::Other`] and handled by the fallback
/// arm of every policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NodeKind {
    /// Top of the tree (the accident itself)
    Root,
    /// Candidate cause under investigation
    Hypothesis,
    /// Established fact
    Fact,
    /// Unrecognized or missing kind
    #[default]
    Unknown,
    /// Unrecognized kind, raw value preserved
    Other(String),
}

impl NodeKind {
    /// Parse from the wire vocabulary (case-insensitive)
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "root" => Self::Root,
            "hypothesis" => Self::Hypothesis,
            "fact" => Self::Fact,
            "" => Self::Unknown,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    /// Wire name
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Root => "root",
            Self::Hypothesis => "hypothesis",
            Self::Fact => "fact",
            Self::Unknown => "",
            Self::Other(raw) => raw,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NodeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NodeKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::parse).unwrap_or_default())
    }
}

/// Validation status
///
/// Missing, `null` and unrecognized values all decode to [`NodeStatus::Pending`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeStatus {
    /// Not yet assessed
    #[default]
    Pending,
    /// Confirmed by the commission
    Validated,
    /// Ruled out
    Discarded,
}

impl NodeStatus {
    /// Parse from the wire vocabulary (case-insensitive, lenient)
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "validated" => Self::Validated,
            "discarded" => Self::Discarded,
            _ => Self::Pending,
        }
    }

    /// Wire name
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Validated => "validated",
            Self::Discarded => "discarded",
        }
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NodeStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NodeStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::parse).unwrap_or_default())
    }
}

/// Node of the root-cause analysis graph
///
/// Read-only input to the derivation engine. Nothing downstream mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FaultTreeNode {
    /// Node kind (`kind` or `type` on the wire)
    #[serde(default, alias = "type")]
    pub kind: NodeKind,

    /// Free-text description
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,

    /// Validation status
    #[serde(default)]
    pub status: NodeStatus,

    /// Tagged as a basic (root) cause
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_basic_cause: bool,

    /// Tagged as a contributing cause
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_contributing_cause: bool,

    /// Regulatory classification code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbr_code: Option<String>,

    /// Regulatory classification description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbr_description: Option<String>,

    /// Why the node was validated or discarded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,

    /// Image attached to the justification (URL or inline data URI)
    #[serde(
        default,
        alias = "justification_image_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub justification_image: Option<String>,

    /// Remediation recommendation (meaningful when validated)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,

    /// Ordered children
    #[serde(default, deserialize_with = "null_as_default")]
    pub children: Vec<FaultTreeNode>,
}

impl FaultTreeNode {
    /// Create node of the given kind
    #[inline]
    #[must_use]
    pub fn new(kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            ..Self::default()
        }
    }

    /// Create root node
    #[inline]
    #[must_use]
    pub fn root(label: impl Into<String>) -> Self {
        Self::new(NodeKind::Root, label)
    }

    /// Create hypothesis node
    #[inline]
    #[must_use]
    pub fn hypothesis(label: impl Into<String>) -> Self {
        Self::new(NodeKind::Hypothesis, label)
    }

    /// Create fact node
    #[inline]
    #[must_use]
    pub fn fact(label: impl Into<String>) -> Self {
        Self::new(NodeKind::Fact, label)
    }

    /// With status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: NodeStatus) -> Self {
        self.status = status;
        self
    }

    /// Mark as basic cause
    #[inline]
    #[must_use]
    pub fn basic_cause(mut self) -> Self {
        self.is_basic_cause = true;
        self
    }

    /// Mark as contributing cause
    #[inline]
    #[must_use]
    pub fn contributing_cause(mut self) -> Self {
        self.is_contributing_cause = true;
        self
    }

    /// With regulatory classification
    #[inline]
    #[must_use]
    pub fn with_nbr(mut self, code: impl Into<String>, description: impl Into<String>) -> Self {
        self.nbr_code = Some(code.into());
        self.nbr_description = Some(description.into());
        self
    }

    /// With justification text
    #[inline]
    #[must_use]
    pub fn with_justification(mut self, justification: impl Into<String>) -> Self {
        self.justification = Some(justification.into());
        self
    }

    /// With justification image reference
    #[inline]
    #[must_use]
    pub fn with_justification_image(mut self, url: impl Into<String>) -> Self {
        self.justification_image = Some(url.into());
        self
    }

    /// With recommendation
    #[inline]
    #[must_use]
    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }

    /// Append child
    #[inline]
    #[must_use]
    pub fn with_child(mut self, child: FaultTreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append children in order
    #[inline]
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = FaultTreeNode>) -> Self {
        self.children.extend(children);
        self
    }

    #[inline]
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Total node count, this node included
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Depth of the deepest path (a leaf has depth 1)
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Self::depth).max().unwrap_or(0)
    }

    /// Label cut to `width` characters, with an ellipsis when cut
    ///
    /// Display-only; the stored label is untouched.
    #[must_use]
    pub fn display_label(&self, width: usize) -> String {
        if self.label.chars().count() <= width {
            return self.label.clone();
        }
        let mut out: String = self.label.chars().take(width).collect();
        out.push_str("...");
        out
    }
}
