//! Command execution against files in a scratch directory.

use clap::Parser;
use ira_cli::{run, Cli};
use ira_test_utils::sample_input;
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_input(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("relatorio.json");
    std::fs::write(&path, serde_json::to_vec(&sample_input()).unwrap()).unwrap();
    path
}

async fn exec(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("ira").chain(args.iter().copied()))?;
    let mut out = Vec::new();
    run(cli, &mut out).await?;
    Ok(String::from_utf8(out)?)
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[tokio::test]
async fn hypotheses_prints_numbered_list() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir);

    let text = exec(&["hypotheses", "--input", arg(&input)]).await.unwrap();
    let list: serde_json::Value = serde_json::from_str(&text).unwrap();
    let numbers: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|h| h["node_number"].as_str().unwrap_or(""))
        .collect();
    assert_eq!(numbers, vec!["H1", "CB1", "", "CC1", "H2", "H4"]);
}

#[tokio::test]
async fn tree_prints_dot() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir);

    let dot = exec(&["tree", "--input", arg(&input), "--dot"]).await.unwrap();
    assert!(dot.starts_with("digraph fault_tree {"));
    assert!(dot.contains("n1 -> n2;"));
}

#[tokio::test]
async fn render_offline_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir);
    let output = dir.path().join("relatorio.html");

    let summary = exec(&[
        "render",
        "--input",
        arg(&input),
        "--output",
        arg(&output),
        "--offline",
    ])
    .await
    .unwrap();

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    let digest = blake3::hash(html.as_bytes()).to_hex().to_string();
    assert!(summary.trim_end().ends_with(&format!("blake3:{digest}")));
}

#[tokio::test]
async fn render_json_to_stdout_honours_config_title() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir);
    let config = dir.path().join("ira.toml");
    std::fs::write(&config, "title = \"Relatório ACD-2024-017\"\n").unwrap();

    let text = exec(&[
        "render",
        "-i",
        arg(&input),
        "-f",
        "json",
        "--offline",
        "--config",
        arg(&config),
    ])
    .await
    .unwrap();
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(doc["title"], "Relatório ACD-2024-017");
}

#[tokio::test]
async fn missing_input_names_the_file() {
    let err = exec(&["hypotheses", "--input", "/nonexistent/relatorio.json"])
        .await
        .unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/relatorio.json"));
}

#[tokio::test]
async fn malformed_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("quebrado.json");
    std::fs::write(&input, "{\"fault_tree\": [").unwrap();

    let err = exec(&["tree", "--input", arg(&input)]).await.unwrap_err();
    assert!(format!("{err:#}").contains("decoding"));
}
