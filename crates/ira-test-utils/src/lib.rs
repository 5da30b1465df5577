//! Testing utilities for IRA workspace
//!
//! Shared fixtures, a static image resolver, and proptest strategies for
//! fault trees.

#![allow(missing_docs)]

use async_trait::async_trait;
use ira_imaging::{EmbeddedImage, ImageResolver};
use ira_model::{
    Accident, CommissionAction, Evidence, FaultTreeNode, InvolvedPerson, NodeKind, NodeStatus,
    PersonType, ReportInput, TimelineEvent, VerifiedCause,
};
use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const BRAKE_PHOTO_URL: &str = "https://storage.example/evidencias/freio.png";
pub const TIRE_PHOTO_URL: &str = "https://storage.example/evidencias/pneu.png";
pub const LAUDO_IMAGE_URL: &str = "https://storage.example/laudos/laudo-freio.png";

/// Tree exercising every numbering rule once
///
/// ```text
/// root
/// ├── H1  hypothesis "Falha no sistema de freio" (validated, children)
/// │   ├── CB1 "Pastilha desgastada" (basic, validated, recommendation)
/// │   └──     fact "Laudo do freio" (validated leaf, justified)
/// ├── CC1 "Pista molhada" (contributing, validated, recommendation)
/// ├── H2  hypothesis "Pneu careca" (discarded)
/// └── H3  fact "Velocidade registrada" (children, no justification: excluded)
///     └── H4 hypothesis "Excesso de velocidade" (pending)
/// ```
#[must_use]
pub fn sample_tree() -> FaultTreeNode {
    FaultTreeNode::root("Colisão traseira no pátio de manobras")
        .with_child(
            FaultTreeNode::hypothesis("Falha no sistema de freio")
                .with_status(NodeStatus::Validated)
                .with_justification("Inspeção confirmou desgaste excessivo")
                .with_justification_image(LAUDO_IMAGE_URL)
                .with_child(
                    FaultTreeNode::hypothesis("Pastilha desgastada")
                        .basic_cause()
                        .with_status(NodeStatus::Validated)
                        .with_nbr("NBR 14280 - 4.2", "Falha de manutenção")
                        .with_justification("Espessura abaixo do mínimo")
                        .with_recommendation("Implantar inspeção semanal das pastilhas"),
                )
                .with_child(
                    FaultTreeNode::fact("Laudo do freio")
                        .with_status(NodeStatus::Validated)
                        .with_justification("Laudo técnico anexado"),
                ),
        )
        .with_child(
            FaultTreeNode::hypothesis("Pista molhada")
                .contributing_cause()
                .with_status(NodeStatus::Validated)
                .with_nbr("NBR 14280 - 5.1", "Condição ambiental")
                .with_recommendation("Sinalizar trechos com drenagem deficiente"),
        )
        .with_child(
            FaultTreeNode::hypothesis("Pneu careca")
                .with_status(NodeStatus::Discarded)
                .with_justification("Sulcos dentro do limite legal"),
        )
        .with_child(
            FaultTreeNode::fact("Velocidade registrada").with_child(
                FaultTreeNode::hypothesis("Excesso de velocidade"),
            ),
        )
}

/// Complete report input around [`sample_tree`]
#[must_use]
pub fn sample_input() -> ReportInput {
    ReportInput {
        accident: Accident {
            id: Some("ACD-2024-017".to_string()),
            title: "Colisão traseira no pátio de manobras".to_string(),
            occurred_at: Some("2024-03-14T08:42:00Z".to_string()),
            location: Some("Pátio 3 - Terminal Norte".to_string()),
            description: Some(
                "Caminhão colidiu com a traseira de carreta estacionada".to_string(),
            ),
            severity: Some("Moderada".to_string()),
            company: Some("Transportes Exemplo Ltda".to_string()),
        },
        people: vec![
            InvolvedPerson::new("João Silva", PersonType::Driver).with_role("Motorista"),
            InvolvedPerson::new("Maria Souza", PersonType::Witness).with_role("Conferente"),
            InvolvedPerson::new("Carlos Lima", PersonType::CommissionMember)
                .with_role("Técnico de segurança"),
            InvolvedPerson::new("Ana Costa", PersonType::CommissionMember).with_role("Supervisora"),
        ],
        timeline: vec![
            TimelineEvent::new("2024-03-14T08:30:00Z", "Início da manobra"),
            TimelineEvent::new("2024-03-14T08:42:00Z", "Colisão"),
        ],
        fault_tree: Some(sample_tree()),
        evidence: vec![
            Evidence::new("Disco de freio", Some(BRAKE_PHOTO_URL.to_string())),
            Evidence::new("Pneu dianteiro", Some(TIRE_PHOTO_URL.to_string())),
            Evidence::new("Relato escrito", None),
        ],
        commission_actions: vec![
            CommissionAction::new("2024-03-16T10:00:00Z", "Reunião de análise"),
            CommissionAction::new("2024-03-15T09:00:00Z", "Vistoria do veículo"),
            CommissionAction::new("2024-03-16T10:00:00Z", "Entrevista com testemunha"),
        ],
        verified_causes: vec![
            VerifiedCause {
                label: "Pastilha desgastada".to_string(),
                kind: NodeKind::Hypothesis,
                nbr_code: Some("NBR 14280 - 4.2".to_string()),
                nbr_description: Some("Falha de manutenção".to_string()),
            },
            VerifiedCause {
                label: "Laudo do freio".to_string(),
                kind: NodeKind::Fact,
                nbr_code: Some("NBR 14280 - 9.9".to_string()),
                nbr_description: None,
            },
            VerifiedCause {
                label: "Sem código".to_string(),
                kind: NodeKind::Hypothesis,
                nbr_code: None,
                nbr_description: None,
            },
        ],
    }
}

/// 1×1 PNG as an inline data URI
pub const PIXEL_DATA_URI: &str =
    "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

/// Resolver answering from a fixed table
#[derive(Debug, Default)]
pub struct StaticImageResolver {
    images: HashMap<String, Arc<EmbeddedImage>>,
    calls: AtomicUsize,
}

impl StaticImageResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `source` with a tiny JPEG-labelled payload
    #[must_use]
    pub fn with_image(mut self, source: &str) -> Self {
        let image = EmbeddedImage::from_bytes("image/jpeg", source.as_bytes(), 1, 1);
        self.images.insert(source.to_string(), Arc::new(image));
        self
    }

    /// Number of `resolve` calls so far
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageResolver for StaticImageResolver {
    async fn resolve(&self, source: &str) -> Option<Arc<EmbeddedImage>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.images.get(source).cloned()
    }
}

fn arb_kind() -> impl Strategy<Value = NodeKind> {
    prop_oneof![
        4 => Just(NodeKind::Hypothesis),
        3 => Just(NodeKind::Fact),
        1 => Just(NodeKind::Unknown),
        1 => Just(NodeKind::Other("barrier".to_string())),
    ]
}

fn arb_status() -> impl Strategy<Value = NodeStatus> {
    prop_oneof![
        Just(NodeStatus::Pending),
        Just(NodeStatus::Validated),
        Just(NodeStatus::Discarded),
    ]
}

fn arb_leaf() -> impl Strategy<Value = FaultTreeNode> {
    (
        arb_kind(),
        arb_status(),
        any::<bool>(),
        any::<bool>(),
        proptest::option::of(prop_oneof![Just(String::new()), "[a-z ]{1,12}"]),
        proptest::option::of("[a-z ]{0,12}"),
        "[A-Za-z ]{0,20}",
    )
        .prop_map(
            |(kind, status, basic, contributing, justification, recommendation, label)| {
                FaultTreeNode {
                    kind,
                    label,
                    status,
                    is_basic_cause: basic,
                    is_contributing_cause: contributing,
                    justification,
                    recommendation,
                    ..FaultTreeNode::default()
                }
            },
        )
}

/// Arbitrary non-root subtree
pub fn arb_subtree() -> impl Strategy<Value = FaultTreeNode> {
    arb_leaf().prop_recursive(4, 48, 4, |inner| {
        (arb_leaf(), proptest::collection::vec(inner, 0..4)).prop_map(|(mut node, children)| {
            node.children = children;
            node
        })
    })
}

/// Arbitrary tree with a root on top
pub fn arb_tree() -> impl Strategy<Value = FaultTreeNode> {
    proptest::collection::vec(arb_subtree(), 0..5)
        .prop_map(|children| FaultTreeNode::root("acidente").with_children(children))
}
