//! Report generation pipeline
//!
//! ```text
//! ReportInput ─analyze─→ FaultTreeAnalysis ─┐
//!      └──image refs─→ resolve_all ─────────┴→ ReportDocument ─render─→ RenderedReport
//! ```

use crate::config::ReportConfig;
use crate::document::ReportDocument;
use crate::error::ReportError;
use crate::render::{DocumentRenderer, ReportFormat};
use chrono::{DateTime, Utc};
use ira_faulttree::analyze;
use ira_imaging::{resolve_all, HttpImageResolver, ImageResolver, InlineOnlyResolver};
use ira_model::ReportInput;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// Finished report payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedReport {
    pub id: Uuid,
    pub format: ReportFormat,
    pub generated_at: DateTime<Utc>,
    #[serde(skip)]
    pub bytes: Vec<u8>,
    /// BLAKE3 of `bytes`, hex encoded
    pub digest: String,
}

impl RenderedReport {
    fn new(document: &ReportDocument, format: ReportFormat, bytes: Vec<u8>) -> Self {
        let digest = hex::encode(blake3::hash(&bytes).as_bytes());
        Self {
            id: document.id,
            format,
            generated_at: document.generated_at,
            bytes,
            digest,
        }
    }

    #[inline]
    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Assembles and renders investigation reports
///
/// Holds no per-report state: one generator can serve concurrent requests,
/// and every call derives numbering from scratch.
#[derive(Clone)]
pub struct ReportGenerator {
    config: ReportConfig,
    resolver: Arc<dyn ImageResolver>,
}

impl std::fmt::Debug for ReportGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportGenerator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ReportGenerator {
    /// Generator fetching remote images over HTTP
    ///
    /// # Errors
    /// [`ReportError::ImageSetup`] if the HTTP client cannot be built.
    pub fn new(config: ReportConfig) -> Result<Self, ReportError> {
        let resolver = HttpImageResolver::new(config.imaging.clone())
            .map_err(|e| ReportError::ImageSetup(e.to_string()))?;
        Ok(Self::with_resolver(config, Arc::new(resolver)))
    }

    /// Generator that embeds inline images only and never touches the network
    #[must_use]
    pub fn offline(config: ReportConfig) -> Self {
        Self::with_resolver(config, Arc::new(InlineOnlyResolver))
    }

    #[inline]
    #[must_use]
    pub fn with_resolver(config: ReportConfig, resolver: Arc<dyn ImageResolver>) -> Self {
        Self { config, resolver }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Derive, resolve images and assemble the document
    ///
    /// # Errors
    /// [`ReportError::Tree`] when the fault tree cannot be walked.
    pub async fn build_document(&self, input: &ReportInput) -> Result<ReportDocument, ReportError> {
        let analysis = analyze(input.fault_tree.as_ref(), &self.config.tree)?;
        let images = resolve_all(
            self.resolver.as_ref(),
            ReportDocument::image_sources(input, &analysis),
            self.config.imaging.concurrency,
        )
        .await;
        Ok(ReportDocument::assemble(
            &self.config.title,
            input,
            analysis,
            &images,
        ))
    }

    /// Generate a report with `renderer`
    ///
    /// # Errors
    /// One [`ReportError`] naming the failing stage. Nothing is returned on
    /// failure, not even a partial payload.
    pub async fn generate(
        &self,
        input: &ReportInput,
        renderer: &dyn DocumentRenderer,
    ) -> Result<RenderedReport, ReportError> {
        tracing::info!(
            accident = input.accident.id.as_deref().unwrap_or("-"),
            format = %renderer.format(),
            "generating report"
        );
        let document = self.build_document(input).await?;
        let bytes = renderer.render(&document).map_err(|e| {
            tracing::error!(report = %document.id, "render failed: {}", e);
            ReportError::from(e)
        })?;
        let report = RenderedReport::new(&document, renderer.format(), bytes);
        tracing::info!(
            report = %report.id,
            bytes = report.len(),
            digest = %report.digest,
            "report generated"
        );
        Ok(report)
    }

    /// Decode a JSON body and generate a report from it
    ///
    /// # Errors
    /// [`ReportError::Input`] for malformed JSON, otherwise as
    /// [`ReportGenerator::generate`].
    pub async fn generate_from_json(
        &self,
        body: &str,
        renderer: &dyn DocumentRenderer,
    ) -> Result<RenderedReport, ReportError> {
        let input = ReportInput::from_json(body)?;
        self.generate(&input, renderer).await
    }
}
