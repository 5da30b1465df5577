//! IRA Fault Tree
//!
//! Derivation engine for root-cause analysis trees.
//!
//! # Core Concepts
//!
//! - [`walk`]: Single pre-order traversal with per-call counters
//! - [`NUMBERING_RULES`]: Ordered numbering policy (`H<n>`, `CB<n>`, `CC<n>`)
//! - [`classify`]: Ordered category policy for the visualization
//! - [`extract_hypotheses`]: Reportable hypothesis records
//! - [`extract_recommendations`]: Validated causes with recommendations
//! - [`analyze`]: All of the above from one walk
//!
//! The engine is synchronous and allocation-only. It never mutates the tree,
//! and every entry point starts its own counters, so analyses of different
//! trees (or of the same tree) can run concurrently.
//!
//! # Example
//!
//! ```rust,ignore
//! use ira_faulttree::{analyze, TreeConfig};
//!
//! let analysis = analyze(input.fault_tree.as_ref(), &TreeConfig::default())?;
//! for h in &analysis.hypotheses {
//!     println!("{} {}", h.number_label(), h.label);
//! }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod analysis;
mod classify;
mod config;
mod error;
mod hypotheses;
mod numbering;
mod recommendations;
mod walker;

pub use analysis::{analyze, FaultTreeAnalysis, NumberingSummary, TreeNodeView};
pub use classify::{classify, Category, ClassificationRule, CLASSIFICATION_RULES};
pub use config::{TreeConfig, DEFAULT_LABEL_WIDTH, DEFAULT_MAX_DEPTH};
pub use error::TreeError;
pub use hypotheses::{
    extract_hypotheses, hypotheses_from_walk, is_excluded, is_hypothesis_class,
    HypothesisRecord,
};
pub use numbering::{
    matching_rule, numbering_series, NodeNumber, NumberingCounters, NumberingRule, Series,
    NUMBERING_RULES,
};
pub use recommendations::{
    extract_recommendations, recommendations_from_walk, Recommendation, Recommendations,
};
pub use walker::{walk, Visit, Walk};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
