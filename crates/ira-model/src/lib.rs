//! IRA Model
//!
//! Input records for an accident/incident investigation report.
//!
//! # Core Concepts
//!
//! - [`FaultTreeNode`]: Recursive root-cause analysis graph
//! - [`NodeKind`] / [`NodeStatus`]: Closed enums with explicit fallback arms
//! - [`InvolvedPerson`]: People partitioned by [`PersonType`]
//! - [`TimelineEvent`], [`CommissionAction`], [`Evidence`]: Flat timestamped records
//! - [`ReportInput`]: Everything a report is rendered from
//!
//! Every field of the wire format is optional. Missing or `null` values fall
//! back to documented defaults instead of failing deserialization.
//!
//! # Example
//!
//! ```rust,ignore
//! use ira_model::ReportInput;
//!
//! let input = ReportInput::from_json(&body)?;
//! if let Some(tree) = input.fault_tree.as_ref() {
//!     println!("{} nodes", tree.node_count());
//! }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod input;
mod node;
mod records;
mod serde_util;

pub use input::{InputError, ReportInput};
pub use node::{FaultTreeNode, NodeKind, NodeStatus};
pub use records::{
    Accident, CommissionAction, Evidence, InvolvedPerson, PersonType, TimelineEvent,
    VerifiedCause,
};

/// Returns `true` when an optional free-text field carries visible content.
///
/// Whitespace-only text counts as empty.
#[inline]
#[must_use]
pub fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_text_rejects_blank_values() {
        assert!(!has_text(None));
        assert!(!has_text(Some("")));
        assert!(!has_text(Some("   \n")));
        assert!(has_text(Some("Falha no freio")));
    }
}
