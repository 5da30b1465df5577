//! Flat report sections
//!
//! Filtering and ordering for the parts of the report that need no tree
//! traversal: people by role, commission actions and the NBR table.

use ira_model::{CommissionAction, InvolvedPerson, NodeKind, PersonType, VerifiedCause};
use serde::Serialize;

/// People partitioned by role, input order kept within each role
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeopleByRole {
    pub drivers: Vec<InvolvedPerson>,
    pub injured: Vec<InvolvedPerson>,
    pub witnesses: Vec<InvolvedPerson>,
    pub commission_members: Vec<InvolvedPerson>,
}

impl PeopleByRole {
    /// Partition `people`; unknown types appear in no section
    #[must_use]
    pub fn partition(people: &[InvolvedPerson]) -> Self {
        let mut out = Self::default();
        for person in people {
            let bucket = match person.person_type {
                PersonType::Driver => &mut out.drivers,
                PersonType::Injured => &mut out.injured,
                PersonType::Witness => &mut out.witnesses,
                PersonType::CommissionMember => &mut out.commission_members,
                PersonType::Unknown => {
                    tracing::debug!(name = %person.name, "person without a known role skipped");
                    continue;
                }
            };
            bucket.push(person.clone());
        }
        out
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.drivers.len()
            + self.injured.len()
            + self.witnesses.len()
            + self.commission_members.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Commission actions in timestamp order
///
/// The sort is stable: actions sharing a timestamp keep their input order.
#[must_use]
pub fn sorted_commission_actions(actions: &[CommissionAction]) -> Vec<CommissionAction> {
    let mut sorted = actions.to_vec();
    sorted.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    sorted
}

/// Row of the NBR classification table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NbrRow {
    pub label: String,
    pub code: String,
    pub description: Option<String>,
}

/// NBR table rows from the verified causes
///
/// Facts and causes without a code are left out.
#[must_use]
pub fn nbr_rows(causes: &[VerifiedCause]) -> Vec<NbrRow> {
    causes
        .iter()
        .filter(|cause| cause.kind != NodeKind::Fact)
        .filter_map(|cause| {
            let code = cause.nbr_code.as_deref().filter(|c| !c.trim().is_empty())?;
            Some(NbrRow {
                label: cause.label.clone(),
                code: code.trim().to_string(),
                description: cause.nbr_description.clone(),
            })
        })
        .collect()
}
