//! End-to-end runs of the condgraph binary

use crate::common::{run_condgraph, stdout, write_paper};
use crate::support::fixtures::{CYCLIC_PAPER, LINEAR_PAPER};

use tempfile::TempDir;

fn setup() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_paper(temp_dir.path(), "survey.yaml", LINEAR_PAPER);
    write_paper(temp_dir.path(), "loop.json", CYCLIC_PAPER);
    temp_dir
}

#[test]
fn test_check_clean_paper_succeeds() {
    let dir = setup();
    let output = run_condgraph(dir.path(), &["check", "-p", "survey.yaml"]).unwrap();
    assert!(
        output.status.success(),
        "check failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let out = stdout(&output);
    assert!(out.contains("4 questions from 1 paper file(s)"));
    assert!(out.contains("Condition check: 3 checked, 3 passed"));
}

#[test]
fn test_check_cyclic_paper_fails() {
    let dir = setup();
    let output = run_condgraph(dir.path(), &["check", "-p", "loop.json"]).unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("a -> b -> a"));
}

#[test]
fn test_cycles_lists_titles() {
    let dir = setup();
    let output = run_condgraph(dir.path(), &["cycles", "-p", "loop.json"]).unwrap();
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("a -> b -> a"));
    assert!(out.contains("Alpha -> Beta -> Alpha"));
}

#[test]
fn test_deps_shows_chain() {
    let dir = setup();
    let output = run_condgraph(dir.path(), &["deps", "-p", "survey.yaml", "q3"]).unwrap();
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("(2 total)"));
    assert!(out.contains("direct    q2"));
    assert!(out.contains("indirect  q1"));
}

#[test]
fn test_deps_unknown_question_errors() {
    let dir = setup();
    let output = run_condgraph(dir.path(), &["deps", "-p", "survey.yaml", "zz"]).unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Question not found: zz"));
}

#[test]
fn test_graph_formats() {
    let dir = setup();

    let mermaid = run_condgraph(dir.path(), &["graph", "-p", "survey.yaml"]).unwrap();
    assert!(stdout(&mermaid).starts_with("graph TD\n"));

    let dot = run_condgraph(dir.path(), &["graph", "-p", "survey.yaml", "--format", "dot"]).unwrap();
    assert!(stdout(&dot).starts_with("digraph dependencies {"));

    let json = run_condgraph(dir.path(), &["graph", "-p", "survey.yaml", "--format", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout(&json)).unwrap();
    assert_eq!(value["statistics"]["totalQuestions"], 4);
    assert_eq!(value["nodes"][3]["nestingLevel"], 1);
}

#[test]
fn test_graph_writes_output_file() {
    let dir = setup();
    let output = run_condgraph(
        dir.path(),
        &["graph", "-p", "loop.json", "--format", "dot", "-o", "deps.dot"],
    )
    .unwrap();
    assert!(output.status.success());
    let written = std::fs::read_to_string(dir.path().join("deps.dot")).unwrap();
    assert!(written.contains("// Circular dependency: a -> b -> a"));
}

#[test]
fn test_report_json() {
    let dir = setup();
    let output = run_condgraph(dir.path(), &["report", "-p", "survey.yaml", "--json"]).unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["summary"]["totalQuestions"], 4);
    assert_eq!(value["summary"]["complexConditions"], 1);
    assert_eq!(value["circularDependencies"].as_array().unwrap().len(), 0);
}

#[test]
fn test_validate_reports_cycle() {
    let dir = setup();
    let output = run_condgraph(
        dir.path(),
        &[
            "validate",
            "-p",
            "survey.yaml",
            "--question",
            "q1",
            "--condition",
            r#"{"question_id": "q3", "selected_option": "milk"}"#,
        ],
    )
    .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Circular dependency detected: q1 -> q3 -> q2 -> q1"));
}

#[test]
fn test_validate_json_for_invalid_operator() {
    let dir = setup();
    let output = run_condgraph(
        dir.path(),
        &[
            "validate",
            "-p",
            "survey.yaml",
            "--question",
            "q4",
            "--condition",
            r#"{"operator": "XOR", "conditions": [{"question_id": "q1", "selected_option": "yes"}, {"question_id": "q2", "selected_option": "green"}]}"#,
            "--json",
        ],
    )
    .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["isValid"], false);
    assert!(value["errors"][0]
        .as_str()
        .unwrap()
        .contains("Invalid logical operator 'XOR'"));
}

#[test]
fn test_would_cycle_and_mutual() {
    let dir = setup();

    let unsafe_edge = run_condgraph(
        dir.path(),
        &["would-cycle", "-p", "survey.yaml", "--from", "q1", "--to", "q3"],
    )
    .unwrap();
    assert_eq!(unsafe_edge.status.code(), Some(1));

    let safe_edge = run_condgraph(
        dir.path(),
        &["would-cycle", "-p", "survey.yaml", "--from", "q4", "--to", "q1"],
    )
    .unwrap();
    assert!(safe_edge.status.success());
    assert!(stdout(&safe_edge).contains("is safe"));

    let mutual = run_condgraph(dir.path(), &["mutual", "-p", "loop.json", "a", "b"]).unwrap();
    assert!(stdout(&mutual).contains("depend on each other"));
}

#[test]
fn test_quick_check_command() {
    let dir = setup();
    let output = run_condgraph(
        dir.path(),
        &[
            "quick-check",
            "--papers-dir",
            ".",
            "--paper",
            "survey",
            "--question",
            "q5",
            "--condition",
            r#"{"question_id": "q4", "selected_option": "2"}"#,
        ],
    )
    .unwrap();
    assert!(
        output.status.success(),
        "quick-check failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout(&output).contains("Condition for q5 is valid"));
}

#[test]
fn test_multiple_papers_form_one_snapshot() {
    let dir = setup();
    let output = run_condgraph(
        dir.path(),
        &["cycles", "-p", "survey.yaml", "-p", "loop.json", "--quiet"],
    )
    .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "↻ a -> b -> a");
}

#[test]
fn test_validate_json_for_missing_operator() {
    let dir = setup();
    let output = run_condgraph(
        dir.path(),
        &[
            "validate",
            "-p",
            "survey.yaml",
            "--question",
            "q4",
            "--condition",
            r#"{"conditions": [{"question_id": "q1", "selected_option": "a"}, {"question_id": "q1", "selected_option": "b"}]}"#,
            "--json",
        ],
    )
    .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["isValid"], false);
    assert_eq!(
        value["errors"][0],
        "Complex condition has no logical operator"
    );
}

#[test]
fn test_check_does_not_charge_downstream_questions_with_cycle() {
    let dir = setup();
    write_paper(
        dir.path(),
        "downstream.yaml",
        r#"
id: downstream
questions:
  - id: a
    display_condition: {question_id: b, selected_option: x}
  - id: b
    display_condition: {question_id: a, selected_option: x}
  - id: c
    display_condition: {question_id: a, selected_option: x}
"#,
    );

    let output = run_condgraph(dir.path(), &["check", "-p", "downstream.yaml"]).unwrap();
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("Condition check: 3 checked, 1 passed, 2 failed"));
    assert!(!out.contains("c: Circular dependency"));
    assert_eq!(out.matches("↻ a -> b -> a").count(), 1);
    assert!(String::from_utf8_lossy(&output.stderr).contains("2 condition error(s) in 2 question(s)"));
}

#[test]
fn test_would_cycle_failure_is_reported_on_stderr() {
    let dir = setup();
    let output = run_condgraph(
        dir.path(),
        &["would-cycle", "-p", "survey.yaml", "--from", "q1", "--to", "q3"],
    )
    .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Adding q1 -> q3 would create a cycle"));
}
