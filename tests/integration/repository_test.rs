//! File-backed paper repository and quick checks

use crate::common::write_paper;
use crate::support::fixtures::{CYCLIC_PAPER, LINEAR_PAPER};

use condgraph::config::Config;
use condgraph::question::Condition;
use condgraph::quick_check::{quick_check, ProposedEdit};
use condgraph::repository::{FilePaperRepository, QuestionRepository};
use condgraph::ConditionValidator;
use tempfile::TempDir;

fn repo_with_fixtures() -> (TempDir, FilePaperRepository) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_paper(temp_dir.path(), "survey.yaml", LINEAR_PAPER);
    write_paper(temp_dir.path(), "loop.json", CYCLIC_PAPER);
    let repo = FilePaperRepository::new(temp_dir.path().to_path_buf());
    (temp_dir, repo)
}

#[test]
fn test_list_and_load_papers() {
    let (_temp_dir, repo) = repo_with_fixtures();
    assert_eq!(repo.list_papers().unwrap(), vec!["loop", "survey"]);

    let survey = repo.load_paper("survey").unwrap();
    assert_eq!(survey.len(), 4);
    assert!(survey.iter().all(|q| q.paper_id == "survey"));

    let looped = repo.load_paper("loop").unwrap();
    let validator = ConditionValidator::new(looped).unwrap();
    assert_eq!(validator.detect_all_circular_dependencies().len(), 1);
}

#[test]
fn test_quick_check_rejects_edit_that_closes_cycle() {
    let (_temp_dir, repo) = repo_with_fixtures();
    let edit = ProposedEdit::new("q1", "survey", Condition::simple("q3", "milk"));

    let result = quick_check(&repo, &edit, &Config::default()).unwrap();
    assert!(!result.is_valid);
    assert!(result
        .errors
        .contains(&"Circular dependency detected: q1 -> q3 -> q2 -> q1".to_string()));

    // stored paper untouched
    let stored = repo.load_paper("survey").unwrap();
    assert!(stored[0].display_condition.is_none());
}

#[test]
fn test_quick_check_accepts_new_question() {
    let (_temp_dir, repo) = repo_with_fixtures();
    let edit = ProposedEdit::new(
        "q5",
        "survey",
        Condition::or(vec![
            Condition::simple("q4", "1"),
            Condition::simple("q4", "2"),
        ]),
    )
    .with_title("Sugar?");

    let result = quick_check(&repo, &edit, &Config::default()).unwrap();
    assert!(result.is_valid, "unexpected errors: {:?}", result.errors);
}

#[test]
fn test_quick_check_unknown_paper_is_error() {
    let (_temp_dir, repo) = repo_with_fixtures();
    let edit = ProposedEdit::new("q1", "nope", Condition::simple("q2", "x"));
    let err = quick_check(&repo, &edit, &Config::default()).unwrap_err();
    assert!(err.to_string().contains("Paper not found"));
}
