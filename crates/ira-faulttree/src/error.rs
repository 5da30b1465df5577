//! Error types for fault-tree derivation
//!
//! Missing or partial node fields are never errors; they resolve through the
//! model defaults. The only failure class is structural: a tree too deep to
//! walk safely.

/// Fault-tree traversal error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// Tree nests deeper than the configured limit
    #[error("fault tree exceeds maximum depth {limit} (node path: {path})")]
    DepthExceeded {
        /// Configured depth limit
        limit: usize,
        /// Child indices from the root to the offending node, dot separated
        path: String,
    },
}

impl TreeError {
    /// Check if error is a depth violation
    #[inline]
    #[must_use]
    pub fn is_depth_exceeded(&self) -> bool {
        matches!(self, Self::DepthExceeded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_error_display_names_limit_and_path() {
        let err = TreeError::DepthExceeded {
            limit: 4,
            path: "0.1.0.0".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("maximum depth 4"));
        assert!(text.contains("0.1.0.0"));
        assert!(err.is_depth_exceeded());
    }
}
