//! Report input bundle

use crate::node::FaultTreeNode;
use crate::records::{
    Accident, CommissionAction, Evidence, InvolvedPerson, TimelineEvent, VerifiedCause,
};
use crate::serde_util::null_as_default;
use serde::{Deserialize, Serialize};
use serde_json::de::{Deserializer, Read};

/// Input decoding errors
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Body is not valid JSON for the report shape
    #[error("malformed report input: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Everything a report is rendered from
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportInput {
    #[serde(default, deserialize_with = "null_as_default")]
    pub accident: Accident,

    #[serde(default, deserialize_with = "null_as_default")]
    pub people: Vec<InvolvedPerson>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub timeline: Vec<TimelineEvent>,

    /// Root-cause analysis; absent means no tree-derived sections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fault_tree: Option<FaultTreeNode>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub evidence: Vec<Evidence>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub commission_actions: Vec<CommissionAction>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub verified_causes: Vec<VerifiedCause>,
}

impl ReportInput {
    /// Decode from a JSON document
    ///
    /// Nesting depth is not limited here. Fault trees are bounded by the
    /// walker's configured depth guard instead.
    ///
    /// # Errors
    /// Returns [`InputError::Malformed`] when the document is not valid JSON
    /// or a field has an incompatible shape.
    pub fn from_json(body: &str) -> Result<Self, InputError> {
        Self::decode(Deserializer::from_str(body))
    }

    /// Decode from JSON bytes
    ///
    /// # Errors
    /// Same as [`ReportInput::from_json`].
    pub fn from_slice(body: &[u8]) -> Result<Self, InputError> {
        Self::decode(Deserializer::from_slice(body))
    }

    fn decode<'de, R: Read<'de>>(mut json: Deserializer<R>) -> Result<Self, InputError> {
        json.disable_recursion_limit();
        let input = Self::deserialize(serde_stacker::Deserializer::new(&mut json))?;
        json.end()?;
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeKind;

    #[test]
    fn empty_object_is_valid_input() {
        let input = ReportInput::from_json("{}").unwrap();
        assert!(input.fault_tree.is_none());
        assert!(input.people.is_empty());
    }

    #[test]
    fn nested_tree_decodes() {
        let input = ReportInput::from_json(
            r#"{
                "accident": {"title": "Colisão no pátio"},
                "fault_tree": {
                    "type": "root",
                    "label": "Colisão",
                    "children": [
                        {"type": "hypothesis", "label": "Falha mecânica", "status": "validated"}
                    ]
                }
            }"#,
        )
        .unwrap();
        let tree = input.fault_tree.unwrap();
        assert_eq!(tree.kind, NodeKind::Root);
        assert_eq!(tree.children.len(), 1);
        assert_eq!(input.accident.title, "Colisão no pátio");
    }

    fn hypothesis_chain(levels: usize) -> String {
        let mut node = r#"{"type": "hypothesis", "label": "folha"}"#.to_string();
        for _ in 1..levels {
            node = format!(r#"{{"type": "hypothesis", "label": "elo", "children": [{node}]}}"#);
        }
        format!(r#"{{"fault_tree": {{"type": "root", "label": "r", "children": [{node}]}}}}"#)
    }

    #[test]
    fn deep_tree_decodes_past_json_nesting_default() {
        let body = hypothesis_chain(100);
        let tree = ReportInput::from_json(&body).unwrap().fault_tree.unwrap();
        assert_eq!(tree.depth(), 101);

        let from_bytes = ReportInput::from_slice(body.as_bytes()).unwrap();
        assert_eq!(from_bytes.fault_tree.unwrap().depth(), 101);
    }

    #[test]
    fn trailing_garbage_is_rejected() {
        let err = ReportInput::from_json("{} []").unwrap_err();
        assert!(err.to_string().contains("malformed report input"));
    }

    #[test]
    fn non_json_is_rejected() {
        let err = ReportInput::from_json("not json").unwrap_err();
        assert!(err.to_string().contains("malformed report input"));
    }
}
