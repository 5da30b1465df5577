//! Report configuration
//!
//! One TOML file configures every layer:
//!
//! ```toml
//! title = "Relatório de Investigação de Acidente"
//!
//! [tree]
//! max_depth = 256
//! label_width = 50
//!
//! [imaging]
//! max_edge = 1920
//! jpeg_quality = 85
//! concurrency = 8
//! ```

use crate::error::ConfigError;
use ira_faulttree::TreeConfig;
use ira_imaging::ImagingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default document title
pub const DEFAULT_TITLE: &str = "Relatório de Investigação de Acidente";

/// Report generation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub tree: TreeConfig,
    pub imaging: ImagingConfig,
    /// Document title
    pub title: String,
}

impl ReportConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn with_tree(mut self, tree: TreeConfig) -> Self {
        self.tree = tree;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_imaging(mut self, imaging: ImagingConfig) -> Self {
        self.imaging = imaging;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Parse from TOML text; missing keys keep their defaults
    ///
    /// # Errors
    /// [`ConfigError::Parse`] on invalid TOML or mistyped keys.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// [`ConfigError::Read`] if the file cannot be read, otherwise as
    /// [`ReportConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            tree: TreeConfig::default(),
            imaging: ImagingConfig::default(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}
