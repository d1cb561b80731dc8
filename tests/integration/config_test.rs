//! Config

use crate::common::{run_condgraph, stdout, write_paper};
use crate::support::fixtures::LINEAR_PAPER;

use condgraph::config::{Config, DiagramDirection, CONFIG_PATH};
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &std::path::Path, content: &str) {
    let path = dir.join(CONFIG_PATH);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_project_config_changes_diagram_direction() {
    let temp_dir = TempDir::new().unwrap();
    write_paper(temp_dir.path(), "survey.yaml", LINEAR_PAPER);
    write_config(temp_dir.path(), "diagram:\n  direction: LR\n");

    let output = run_condgraph(temp_dir.path(), &["graph", "-p", "survey.yaml"]).unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("graph LR\n"));
}

#[test]
fn test_explicit_config_path_wins() {
    let temp_dir = TempDir::new().unwrap();
    write_paper(temp_dir.path(), "survey.yaml", LINEAR_PAPER);
    fs::write(
        temp_dir.path().join("custom.yaml"),
        "diagram:\n  direction: LR\n",
    )
    .unwrap();

    let output = run_condgraph(
        temp_dir.path(),
        &["--config", "custom.yaml", "graph", "-p", "survey.yaml", "--format", "dot"],
    )
    .unwrap();
    assert!(stdout(&output).contains("rankdir=LR;"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    write_paper(temp_dir.path(), "survey.yaml", LINEAR_PAPER);
    write_config(temp_dir.path(), "analysis:\n  max_chain_depth: 5\n");

    let output = run_condgraph(temp_dir.path(), &["check", "-p", "survey.yaml"]).unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("max_chain_depth"));
}

#[test]
#[serial]
fn test_config_load_from_working_directory() {
    let original_dir = std::env::current_dir().expect("Failed to get cwd");
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), "diagram:\n  direction: LR\n  title_max_len: 12\n");

    std::env::set_current_dir(temp_dir.path()).expect("Failed to change dir");
    let config = Config::load();
    std::env::set_current_dir(&original_dir).expect("Failed to restore dir");

    let config = config.unwrap();
    assert_eq!(config.diagram.direction, DiagramDirection::LR);
    assert_eq!(config.diagram.title_max_len, 12);
}
