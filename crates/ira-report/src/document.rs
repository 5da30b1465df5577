//! Render-ready report document
//!
//! [`ReportDocument`] is everything a [`crate::DocumentRenderer`] needs,
//! already derived, filtered, sorted and with images resolved. Renderers only
//! lay it out.

use crate::sections::{nbr_rows, sorted_commission_actions, NbrRow, PeopleByRole};
use chrono::{DateTime, Utc};
use ira_faulttree::{FaultTreeAnalysis, HypothesisRecord, Recommendations, TreeNodeView};
use ira_imaging::{EmbeddedImage, ResolvedImages};
use ira_model::{Accident, CommissionAction, ReportInput, TimelineEvent};
use serde::Serialize;
use uuid::Uuid;

/// Hypothesis with its justification image resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HypothesisEntry {
    #[serde(flatten)]
    pub record: HypothesisRecord,
    /// Resolved justification image; `None` when absent or unavailable
    pub image: Option<EmbeddedImage>,
}

/// Evidence item with its image resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvidenceEntry {
    pub description: String,
    pub source: Option<String>,
    pub image: Option<EmbeddedImage>,
}

/// Assembled report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportDocument {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub title: String,
    pub accident: Accident,
    pub people: PeopleByRole,
    pub timeline: Vec<TimelineEvent>,
    /// Numbered and classified node stream, pre-order
    pub tree: Vec<TreeNodeView>,
    pub hypotheses: Vec<HypothesisEntry>,
    pub recommendations: Recommendations,
    pub evidence: Vec<EvidenceEntry>,
    pub commission_actions: Vec<CommissionAction>,
    pub nbr_table: Vec<NbrRow>,
}

impl ReportDocument {
    /// Assemble from input, derived artifacts and resolved images
    #[must_use]
    pub fn assemble(
        title: &str,
        input: &ReportInput,
        analysis: FaultTreeAnalysis,
        images: &ResolvedImages,
    ) -> Self {
        let lookup = |source: Option<&str>| -> Option<EmbeddedImage> {
            source.and_then(|s| images.get(s)).map(|image| (*image).clone())
        };

        let hypotheses = analysis
            .hypotheses
            .into_iter()
            .map(|record| {
                let image = lookup(record.justification_image.as_deref());
                HypothesisEntry { record, image }
            })
            .collect();

        let evidence = input
            .evidence
            .iter()
            .map(|item| EvidenceEntry {
                description: item.description.clone(),
                source: item.image_url.clone(),
                image: lookup(item.image_url.as_deref()),
            })
            .collect();

        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            title: title.to_string(),
            accident: input.accident.clone(),
            people: PeopleByRole::partition(&input.people),
            timeline: input.timeline.clone(),
            tree: analysis.nodes,
            hypotheses,
            recommendations: analysis.recommendations,
            evidence,
            commission_actions: sorted_commission_actions(&input.commission_actions),
            nbr_table: nbr_rows(&input.verified_causes),
        }
    }

    /// Image references the document will ask the resolver for
    ///
    /// Evidence images first, then justification images, in document order.
    #[must_use]
    pub fn image_sources<'a>(
        input: &'a ReportInput,
        analysis: &'a FaultTreeAnalysis,
    ) -> Vec<&'a str> {
        input
            .evidence
            .iter()
            .filter_map(|item| item.image_url.as_deref())
            .chain(
                analysis
                    .hypotheses
                    .iter()
                    .filter_map(|h| h.justification_image.as_deref()),
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ira_faulttree::{analyze, TreeConfig};
    use ira_imaging::resolve_all;
    use ira_test_utils::{
        sample_input, StaticImageResolver, BRAKE_PHOTO_URL, LAUDO_IMAGE_URL, TIRE_PHOTO_URL,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn image_sources_lists_evidence_then_justifications() {
        let input = sample_input();
        let analysis = analyze(input.fault_tree.as_ref(), &TreeConfig::default()).unwrap();
        assert_eq!(
            ReportDocument::image_sources(&input, &analysis),
            vec![BRAKE_PHOTO_URL, TIRE_PHOTO_URL, LAUDO_IMAGE_URL]
        );
    }

    #[tokio::test]
    async fn assemble_attaches_resolved_images_only() {
        let input = sample_input();
        let analysis = analyze(input.fault_tree.as_ref(), &TreeConfig::default()).unwrap();
        let resolver = StaticImageResolver::new()
            .with_image(BRAKE_PHOTO_URL)
            .with_image(LAUDO_IMAGE_URL);
        let images = resolve_all(
            &resolver,
            ReportDocument::image_sources(&input, &analysis),
            4,
        )
        .await;

        let doc = ReportDocument::assemble("Relatório", &input, analysis, &images);

        let attached: Vec<bool> = doc.evidence.iter().map(|e| e.image.is_some()).collect();
        assert_eq!(attached, vec![true, false, false]);
        assert_eq!(
            doc.hypotheses[0].image.as_ref().map(|i| i.mime_type.as_str()),
            Some("image/jpeg")
        );
        assert!(doc.hypotheses[1].image.is_none());

        let order: Vec<&str> = doc
            .commission_actions
            .iter()
            .map(|a| a.description.as_str())
            .collect();
        assert_eq!(
            order,
            vec!["Vistoria do veículo", "Reunião de análise", "Entrevista com testemunha"]
        );
        assert_eq!(doc.nbr_table.len(), 1);
        assert_eq!(doc.people.commission_members.len(), 2);
    }

    #[test]
    fn document_serializes_with_flattened_hypotheses() {
        let input = sample_input();
        let analysis = analyze(input.fault_tree.as_ref(), &TreeConfig::default()).unwrap();
        let doc = ReportDocument::assemble("R", &input, analysis, &ResolvedImages::default());
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["hypotheses"][0]["node_number"], "H1");
        assert_eq!(value["hypotheses"][0]["image"], serde_json::Value::Null);
        assert_eq!(value["tree"][2]["category"], "basic-cause");
    }
}
