//! Error types for report generation
//!
//! Every failure surfaces as one [`ReportError`] naming the [`Stage`] it came
//! from. Image failures never reach this layer; the resolver turns them into
//! absent images.

use ira_faulttree::TreeError;
use ira_model::InputError;
use std::fmt;
use std::path::PathBuf;

/// Pipeline stage a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Configuration loading
    Configuration,
    /// Input decoding
    Input,
    /// Fault-tree derivation
    Extraction,
    /// Image resolver construction
    ImageSetup,
    /// Document rendering
    Rendering,
}

impl Stage {
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Input => "input decoding",
            Self::Extraction => "tree extraction",
            Self::ImageSetup => "image resolution setup",
            Self::Rendering => "rendering",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for the config shape
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Renderer failure
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Structured export failed
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Text output failed
    #[error("formatting failed: {0}")]
    Format(#[from] fmt::Error),

    /// Renderer-specific failure
    #[error("{0}")]
    Other(String),
}

/// Consolidated report error
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("configuration failed: {0}")]
    Config(#[from] ConfigError),

    #[error("input decoding failed: {0}")]
    Input(#[from] InputError),

    #[error("tree extraction failed: {0}")]
    Tree(#[from] TreeError),

    #[error("image resolution setup failed: {0}")]
    ImageSetup(String),

    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),
}

impl ReportError {
    /// Stage that failed
    #[must_use]
    pub fn stage(&self) -> Stage {
        match self {
            Self::Config(_) => Stage::Configuration,
            Self::Input(_) => Stage::Input,
            Self::Tree(_) => Stage::Extraction,
            Self::ImageSetup(_) => Stage::ImageSetup,
            Self::Render(_) => Stage::Rendering,
        }
    }

    /// Check if the caller supplied bad input (as opposed to an internal failure)
    #[inline]
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Input(_) | Self::Tree(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_follows_variant() {
        let err = ReportError::from(TreeError::DepthExceeded {
            limit: 2,
            path: "0.0.0".to_string(),
        });
        assert_eq!(err.stage(), Stage::Extraction);
        assert!(err.is_input_error());

        let err = ReportError::from(RenderError::Other("boom".to_string()));
        assert_eq!(err.stage(), Stage::Rendering);
        assert!(!err.is_input_error());
        assert_eq!(err.to_string(), "rendering failed: boom");
    }

    #[test]
    fn malformed_json_is_input_stage() {
        let err: ReportError = ira_model::ReportInput::from_json("{not json")
            .unwrap_err()
            .into();
        assert_eq!(err.stage(), Stage::Input);
    }
}
