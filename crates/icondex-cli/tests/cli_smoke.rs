use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const CATALOG: &str = r#"[
  {"name": "EC2", "import_path": "diagrams.aws.compute.EC2", "provider": "aws",
   "module": "aws/compute.py", "docstring": "", "aliases": []},
  {"name": "AKS", "import_path": "diagrams.azure.compute.AKS", "provider": "azure",
   "module": "azure/compute.py", "docstring": "", "aliases": []},
  {"name": "Pod", "import_path": "diagrams.k8s.compute.Pod", "provider": "k8s"}
]"#;

fn icondex(dir: &Path, args: &[&str]) -> Output {
    let bin = PathBuf::from(env!("CARGO_BIN_EXE_icondex"));
    Command::new(bin)
        .env("ICONDEX_DIR", dir)
        .env("NO_COLOR", "1")
        .args(args)
        .output()
        .unwrap()
}

fn setup() -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let catalog = dir.path().join("icons.json");
    std::fs::write(&catalog, CATALOG).unwrap();
    let catalog = catalog.to_string_lossy().into_owned();
    (dir, catalog)
}

fn json_names(output: &Output) -> Vec<String> {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|hit| hit["name"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn cli_search_returns_json_results() {
    let (dir, catalog) = setup();

    let out = icondex(
        dir.path(),
        &["--catalog", &catalog, "search", "EC", "--format", "json"],
    );
    assert_eq!(json_names(&out), vec!["EC2"]);
}

#[test]
fn cli_search_empty_query_needs_all() {
    let (dir, catalog) = setup();

    let idle = icondex(
        dir.path(),
        &["--catalog", &catalog, "search", "--format", "json"],
    );
    assert!(json_names(&idle).is_empty());

    let all = icondex(
        dir.path(),
        &["--catalog", &catalog, "search", "--all", "--format", "json"],
    );
    assert_eq!(json_names(&all), vec!["EC2", "AKS", "Pod"]);
}

#[test]
fn cli_plain_prints_imports() {
    let (dir, catalog) = setup();

    let out = icondex(
        dir.path(),
        &["--catalog", &catalog, "search", "pod", "--format", "plain"],
    );
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "from diagrams.k8s.compute import Pod\n"
    );
}

#[test]
fn cli_stats_and_show() {
    let (dir, catalog) = setup();

    let stats = icondex(dir.path(), &["--catalog", &catalog, "stats"]);
    let stdout = String::from_utf8_lossy(&stats.stdout);
    assert!(stdout.starts_with("3 icons"));
    assert!(stdout.contains("k8s"));

    let show = icondex(
        dir.path(),
        &["--catalog", &catalog, "show", "diagrams.azure.compute.AKS"],
    );
    assert!(show.status.success());
    let stdout = String::from_utf8_lossy(&show.stdout);
    assert!(stdout.contains("from diagrams.azure.compute import AKS"));

    let missing = icondex(dir.path(), &["--catalog", &catalog, "show", "nope.Nope"]);
    assert!(!missing.status.success());
}

#[test]
fn cli_reports_missing_catalog() {
    let dir = TempDir::new().unwrap();
    let out = icondex(dir.path(), &["search", "ec"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("catalog not found"));
}
