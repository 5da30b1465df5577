//! Structured JSON export

use super::{DocumentRenderer, ReportFormat};
use crate::document::ReportDocument;
use crate::error::RenderError;

/// JSON renderer
///
/// Empty sections export as empty arrays; consumers apply their own
/// placeholder.
#[derive(Debug, Clone, Copy)]
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Single-line output
    #[inline]
    #[must_use]
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer for JsonRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }

    fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, RenderError> {
        let mut bytes = if self.pretty {
            serde_json::to_vec_pretty(document)?
        } else {
            serde_json::to_vec(document)?
        };
        bytes.push(b'\n');
        Ok(bytes)
    }
}
