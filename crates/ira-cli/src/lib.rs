//! `ira` command line
//!
//! Renders investigation reports and inspects fault trees from JSON input.

#![allow(missing_docs)]

pub mod logging;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use ira_faulttree::{analyze, extract_hypotheses};
use ira_model::ReportInput;
use ira_report::{render_dot, ReportConfig, ReportFormat, ReportGenerator};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "ira", version, about = "Investigation report assembly")]
pub struct Cli {
    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(
        long,
        global = true,
        env = "IRA_CONFIG",
        help = "TOML configuration file"
    )]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a full report
    Render {
        #[arg(long, short)]
        input: PathBuf,
        #[arg(long, short, value_enum, default_value_t = FormatArg::Html)]
        format: FormatArg,
        #[arg(long, short, help = "Write here instead of stdout")]
        output: Option<PathBuf>,
        #[arg(long, help = "Embed inline images only, never fetch")]
        offline: bool,
    },
    /// Print the numbered and classified fault tree
    Tree {
        #[arg(long, short)]
        input: PathBuf,
        #[arg(long, help = "Graphviz DOT instead of JSON")]
        dot: bool,
    },
    /// Print the hypothesis list as JSON
    Hypotheses {
        #[arg(long, short)]
        input: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Html,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Html => Self::Html,
            FormatArg::Json => Self::Json,
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ReportConfig> {
    match path {
        Some(path) => Ok(ReportConfig::load(path)?),
        None => Ok(ReportConfig::default()),
    }
}

fn load_input(path: &Path) -> anyhow::Result<ReportInput> {
    let body = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    ReportInput::from_slice(&body).with_context(|| format!("decoding {}", path.display()))
}

/// Execute `cli`, writing command output to `out`
///
/// # Errors
/// Any failure, with context naming the file or stage involved.
pub async fn run<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Render {
            input,
            format,
            output,
            offline,
        } => {
            let report_input = load_input(&input)?;
            let generator = if offline {
                ReportGenerator::offline(config)
            } else {
                ReportGenerator::new(config)?
            };
            let renderer = ReportFormat::from(format).renderer();
            let report = generator
                .generate(&report_input, renderer.as_ref())
                .await
                .with_context(|| format!("rendering {}", input.display()))?;

            match output {
                Some(path) => {
                    std::fs::write(&path, &report.bytes)
                        .with_context(|| format!("writing {}", path.display()))?;
                    writeln!(
                        out,
                        "{} {} {} bytes blake3:{}",
                        report.id,
                        path.display(),
                        report.len(),
                        report.digest
                    )?;
                }
                None => out.write_all(&report.bytes)?,
            }
        }
        Commands::Tree { input, dot } => {
            let report_input = load_input(&input)?;
            let analysis = analyze(report_input.fault_tree.as_ref(), &config.tree)?;
            if dot {
                out.write_all(render_dot(&analysis.nodes).as_bytes())?;
            } else {
                serde_json::to_writer_pretty(&mut *out, &analysis.nodes)?;
                writeln!(out)?;
            }
        }
        Commands::Hypotheses { input } => {
            let report_input = load_input(&input)?;
            let hypotheses = match report_input.fault_tree.as_ref() {
                Some(root) => extract_hypotheses(root, &config.tree)?,
                None => Vec::new(),
            };
            serde_json::to_writer_pretty(&mut *out, &hypotheses)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
