//! IRA Report
//!
//! Assembles accident/incident investigation reports.
//!
//! # Core Concepts
//!
//! - [`ReportGenerator`]: derive → resolve images → assemble → render
//! - [`ReportDocument`]: Render-ready content, images already embedded
//! - [`DocumentRenderer`]: Layout seam; [`HtmlRenderer`] and [`JsonRenderer`]
//! - [`render_dot`]: Graphviz view of the numbered fault tree
//! - [`ReportConfig`]: TOML-loadable configuration for every layer
//!
//! # Example
//!
//! ```rust,ignore
//! use ira_report::{HtmlRenderer, ReportConfig, ReportGenerator};
//!
//! let generator = ReportGenerator::new(ReportConfig::load("ira.toml")?)?;
//! let report = generator.generate(&input, &HtmlRenderer).await?;
//! std::fs::write("relatorio.html", &report.bytes)?;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod config;
mod document;
mod error;
mod generator;
mod render;
mod sections;

pub use config::{ReportConfig, DEFAULT_TITLE};
pub use document::{EvidenceEntry, HypothesisEntry, ReportDocument};
pub use error::{ConfigError, RenderError, ReportError, Stage};
pub use generator::{RenderedReport, ReportGenerator};
pub use render::{
    category_style, escape_html, render_dot, DocumentRenderer, HtmlRenderer, JsonRenderer,
    NodeStyle, ReportFormat, NONE_REGISTERED,
};
pub use sections::{nbr_rows, sorted_commission_actions, NbrRow, PeopleByRole};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
