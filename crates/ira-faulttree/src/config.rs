//! Traversal configuration

use serde::{Deserialize, Serialize};

/// Default recursion guard
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Default display width for node labels
pub const DEFAULT_LABEL_WIDTH: usize = 50;

/// Fault-tree traversal configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Deepest nesting walked before failing fast
    pub max_depth: usize,
    /// Characters kept in display labels before the ellipsis
    pub label_width: usize,
}

impl TreeConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With max depth
    #[inline]
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// With label width
    #[inline]
    #[must_use]
    pub fn with_label_width(mut self, label_width: usize) -> Self {
        self.label_width = label_width;
        self
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            label_width: DEFAULT_LABEL_WIDTH,
        }
    }
}
