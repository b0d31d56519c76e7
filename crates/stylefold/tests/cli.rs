#![cfg(test)]
#![allow(
    clippy::panic,
    reason = "Fixture failures abort the test"
)]

use css::{CompressionState, Fold};
use std::fs::write;
use std::path::PathBuf;
use stylefold::{AnalysisKind, Command, run};
use tempfile::TempDir;

const SHEET: &str = ".container {\n  width: 100px;\n  height: 100px;\n}\n#nav a:hover { color: red; }\n";

const COMMENTED: &str = "/* layout */\n.container {\n  width: 100px;\n  height: 100px;\n}\n#nav a:hover { color: red; }\n";

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|&arg| arg.to_owned()).collect()
}

fn fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    write(&path, contents).unwrap_or_else(|err| panic!("writing fixture: {err}"));
    path
}

#[test]
fn parses_graph_with_fold() {
    let command = Command::parse(&args(&["graph", "a.css", "--fold", "⟁DATA_FOLD⟁"]));
    assert!(matches!(
        command,
        Ok(Command::Graph { fold: Fold::Data, .. })
    ));
}

#[test]
fn parses_compare_flags() {
    let command = Command::parse(&args(&[
        "compare", "a.css", "b.css", "--state", "folded", "--target", "75", "--fold", "CODE_FOLD",
    ]));
    let Ok(Command::Compare {
        original,
        compressed,
        options,
    }) = command
    else {
        panic!("expected compare command, got {command:?}");
    };
    assert_eq!(original, PathBuf::from("a.css"));
    assert_eq!(compressed, Some(PathBuf::from("b.css")));
    assert_eq!(options.state, CompressionState::Folded);
    assert_eq!(options.fold, Fold::Code);
    assert!((options.target_efficiency - 75.0).abs() < f64::EPSILON);
}

#[test]
fn rejects_bad_arguments() {
    assert!(Command::parse(&[]).is_err());
    assert!(Command::parse(&args(&["graph"])).is_err());
    assert!(Command::parse(&args(&["explode", "a.css"])).is_err());
    assert!(Command::parse(&args(&["analyze", "a.css", "--kind", "vibes"])).is_err());
    assert!(Command::parse(&args(&["compare", "a.css", "--target"])).is_err());
    assert!(Command::parse(&args(&["compare", "a.css", "--target", "lots"])).is_err());
    assert!(Command::parse(&args(&["compare", "a.css", "--state", "melted"])).is_err());
    assert!(Command::parse(&args(&["graph", "a.css", "--verbose"])).is_err());
}

#[test]
fn graph_command_outputs_nodes_and_edges() {
    let dir = TempDir::new().unwrap_or_else(|err| panic!("tempdir: {err}"));
    let path = fixture(&dir, "site.css", SHEET);
    let value = run(&Command::Graph {
        path,
        fold: Fold::Ui,
    })
    .unwrap_or_else(|err| panic!("graph failed: {err}"));
    assert_eq!(value["nodes"].as_array().map(Vec::len), Some(5));
    assert_eq!(value["edges"].as_array().map(Vec::len), Some(4));
    assert_eq!(value["edges"][0], serde_json::json!([0, 1]));
}

#[test]
fn analyze_command_structural() {
    let dir = TempDir::new().unwrap_or_else(|err| panic!("tempdir: {err}"));
    let path = fixture(&dir, "site.css", SHEET);
    let value = run(&Command::Analyze {
        path,
        kind: AnalysisKind::Structural,
    })
    .unwrap_or_else(|err| panic!("analyze failed: {err}"));
    assert_eq!(value["selector_count"], 2);
    assert_eq!(value["declaration_count"], 3);
    assert_eq!(value["specificity_range"], serde_json::json!([10, 111]));
}

#[test]
fn compare_defaults_to_minified_original() {
    let dir = TempDir::new().unwrap_or_else(|err| panic!("tempdir: {err}"));
    let path = fixture(&dir, "site.css", COMMENTED);
    let command = Command::parse(&args(&["compare", &path.to_string_lossy()]))
        .unwrap_or_else(|err| panic!("parse failed: {err}"));
    let value = run(&command).unwrap_or_else(|err| panic!("compare failed: {err}"));
    assert_eq!(
        value["compressed_css"],
        ".container{width:100px;height:100px;}#nav a:hover{color:red;}"
    );
    let ratio = value["report"]["compression_ratio"].as_f64().unwrap_or_default();
    assert!(ratio > 1.0);
}

#[test]
fn compare_echoes_options() {
    let dir = TempDir::new().unwrap_or_else(|err| panic!("tempdir: {err}"));
    let original = fixture(&dir, "site.css", COMMENTED);
    let compressed = fixture(&dir, "site.min.css", SHEET);
    let command = Command::parse(&args(&[
        "compare",
        &original.to_string_lossy(),
        &compressed.to_string_lossy(),
        "--fold",
        "⟁DATA_FOLD⟁",
        "--state",
        "partially-compressed",
        "--target",
        "50",
    ]))
    .unwrap_or_else(|err| panic!("parse failed: {err}"));
    let value = run(&command).unwrap_or_else(|err| panic!("compare failed: {err}"));
    assert_eq!(value["options"]["fold"], "DATA_FOLD");
    assert_eq!(value["options"]["state"], "partially-compressed");
    assert_eq!(value["options"]["target_efficiency"], 50.0);
    assert_eq!(value["compressed_css"], SHEET);
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap_or_else(|err| panic!("tempdir: {err}"));
    let result = run(&Command::Analyze {
        path: dir.path().join("absent.css"),
        kind: AnalysisKind::Geometric,
    });
    let message = result.map_or_else(|err| format!("{err:#}"), |_| String::new());
    assert!(message.contains("reading stylesheet"));
}
