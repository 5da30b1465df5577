//! Flat report records
//!
//! Accident metadata, people, timeline, evidence and commission actions.
//! None of these need traversal; they are filtered and sorted by the report
//! layer.

use crate::node::NodeKind;
use crate::serde_util::null_as_default;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Accident metadata
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Accident {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// ISO-8601 timestamp of the occurrence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

/// Role of a person in the report
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum PersonType {
    Driver,
    Injured,
    Witness,
    CommissionMember,
    /// Unrecognized type; the person appears in no role section
    #[default]
    Unknown,
}

impl PersonType {
    /// Parse from the wire vocabulary (`Commission_Member`, `driver`, ...)
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "driver" => Self::Driver,
            "injured" => Self::Injured,
            "witness" => Self::Witness,
            "commissionmember" => Self::CommissionMember,
            _ => Self::Unknown,
        }
    }

    /// Wire name
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Driver => "Driver",
            Self::Injured => "Injured",
            Self::Witness => "Witness",
            Self::CommissionMember => "Commission_Member",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PersonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PersonType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PersonType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::parse).unwrap_or_default())
    }
}

/// Person involved in the occurrence or in the investigation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InvolvedPerson {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub person_type: PersonType,
    /// Job title or function
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    /// Testimony or injury description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement: Option<String>,
}

impl InvolvedPerson {
    /// Create new person
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, person_type: PersonType) -> Self {
        Self {
            name: name.into(),
            person_type,
            ..Self::default()
        }
    }

    /// With role
    #[inline]
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

/// Timeline entry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// ISO-8601 timestamp
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

impl TimelineEvent {
    #[inline]
    #[must_use]
    pub fn new(timestamp: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            description: description.into(),
        }
    }
}

/// Action taken by the investigation commission
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommissionAction {
    /// ISO-8601 timestamp; ordering key
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible: Option<String>,
}

impl CommissionAction {
    #[inline]
    #[must_use]
    pub fn new(timestamp: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            description: description.into(),
            responsible: None,
        }
    }
}

/// Evidence item with an optional image
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Evidence {
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Image URL or inline data URI
    #[serde(default, alias = "url", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Evidence {
    #[inline]
    #[must_use]
    pub fn new(description: impl Into<String>, image_url: Option<String>) -> Self {
        Self {
            description: description.into(),
            image_url,
        }
    }
}

/// Verified cause as projected by the caller for the NBR classification table
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VerifiedCause {
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default, alias = "type")]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbr_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbr_description: Option<String>,
}
