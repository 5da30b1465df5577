//! Document renderers
//!
//! A renderer lays out a [`ReportDocument`] into a byte payload. It renders
//! into a buffer and hands back the whole payload or an error; callers never
//! see partial output.

mod dot;
mod html;
mod json;

pub use dot::{category_style, render_dot, NodeStyle};
pub use html::{escape_html, HtmlRenderer, NONE_REGISTERED};
pub use json::JsonRenderer;

use crate::document::ReportDocument;
use crate::error::RenderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Print-ready HTML
    #[default]
    Html,
    /// Structured JSON export
    Json,
}

impl ReportFormat {
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Json => "json",
        }
    }

    /// MIME type of the rendered payload
    #[inline]
    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Html => "text/html; charset=utf-8",
            Self::Json => "application/json",
        }
    }

    /// Renderer producing this format
    #[must_use]
    pub fn renderer(self) -> Box<dyn DocumentRenderer> {
        match self {
            Self::Html => Box::new(HtmlRenderer::new()),
            Self::Json => Box::new(JsonRenderer::new()),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            other => Err(RenderError::Other(format!("unknown report format: {other}"))),
        }
    }
}

/// Lay out a report document
#[cfg_attr(test, mockall::automock)]
pub trait DocumentRenderer: Send + Sync {
    /// Format this renderer produces
    fn format(&self) -> ReportFormat;

    /// Render the whole document
    ///
    /// # Errors
    /// Any failure aborts the render; no partial payload is returned.
    fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, RenderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("HTML".parse::<ReportFormat>().unwrap(), ReportFormat::Html);
        assert_eq!(" json ".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert!("pdf".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn renderer_matches_format() {
        for format in [ReportFormat::Html, ReportFormat::Json] {
            assert_eq!(format.renderer().format(), format);
        }
    }
}
