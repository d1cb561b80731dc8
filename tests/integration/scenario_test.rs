//! Validator scenarios over in-memory snapshots

use crate::support::builders::QuestionBuilder;

use condgraph::question::Condition;
use condgraph::ConditionValidator;

fn validator(builders: Vec<QuestionBuilder>) -> ConditionValidator {
    ConditionValidator::new(builders.into_iter().map(QuestionBuilder::build).collect())
        .expect("Failed to build validator")
}

#[test]
fn test_linear_chain_has_no_cycle_and_full_chain() {
    let v = validator(vec![
        QuestionBuilder::new("Q1"),
        QuestionBuilder::new("Q2").shown_if("Q1"),
        QuestionBuilder::new("Q3").shown_if("Q2"),
    ]);

    assert!(v.detect_circular_dependency("Q1").is_empty());

    let deps = v.question_dependencies("Q3");
    assert_eq!(deps.direct_dependencies, vec!["Q2"]);
    assert_eq!(deps.indirect_dependencies, vec!["Q1"]);
    assert_eq!(deps.total_dependencies, 2);
}

#[test]
fn test_two_question_loop_is_closed_path() {
    let v = validator(vec![
        QuestionBuilder::new("Q1").shown_if("Q2"),
        QuestionBuilder::new("Q2").shown_if("Q1"),
    ]);

    let cycle = v.detect_circular_dependency("Q1");
    assert_eq!(cycle.len(), 3);
    assert_eq!(cycle.first(), cycle.last());
    assert!(v.has_mutual_dependency("Q1", "Q2"));
    assert!(v.has_mutual_dependency("Q2", "Q1"));
}

#[test]
fn test_unknown_operator_is_invalid() {
    let v = validator(vec![
        QuestionBuilder::new("Q1"),
        QuestionBuilder::new("Q2"),
        QuestionBuilder::new("Q3").with_operator("XOR", &["Q1", "Q2"]),
    ]);

    let question = v.snapshot().get("Q3").unwrap();
    let result = v.validate_question_condition("Q3", question.display_condition.as_ref().unwrap());
    assert!(!result.is_valid);
    assert!(result.errors.iter().any(|e| e.contains("Invalid logical operator")));
}

#[test]
fn test_missing_reference_is_listed_and_reported() {
    let v = validator(vec![QuestionBuilder::new("Q1"), QuestionBuilder::new("Q2")]);
    let condition = Condition::simple("Q99", "yes");

    let refs = v.validate_condition_references(&condition, "paper-1");
    assert_eq!(refs.missing_questions, vec!["Q99"]);
    assert!(refs.cross_paper_references.is_empty());

    let result = v.validate_question_condition("Q2", &condition);
    assert!(!result.is_valid);
    assert!(result.errors.iter().any(|e| e.contains("does not exist")));
}

#[test]
fn test_cross_paper_reference_is_listed() {
    let v = validator(vec![
        QuestionBuilder::new("Q1").in_paper("other"),
        QuestionBuilder::new("Q2"),
    ]);
    let refs = v.validate_condition_references(&Condition::simple("Q1", "yes"), "paper-1");
    assert_eq!(refs.cross_paper_references, vec!["Q1"]);
    assert!(refs.missing_questions.is_empty());
}

#[test]
fn test_statistics_cycle_count_matches_scan() {
    let snapshots = vec![
        vec![QuestionBuilder::new("A")],
        vec![
            QuestionBuilder::new("A").shown_if("B"),
            QuestionBuilder::new("B").shown_if("A"),
        ],
        vec![
            QuestionBuilder::new("A").shown_if("A"),
            QuestionBuilder::new("B").shown_if("C"),
            QuestionBuilder::new("C").shown_if("D"),
            QuestionBuilder::new("D").shown_if("B"),
            QuestionBuilder::new("E").shown_if_all(&["A", "B"]),
        ],
    ];

    for builders in snapshots {
        let v = validator(builders);
        assert_eq!(
            v.graph_data().statistics.circular_dependencies,
            v.detect_all_circular_dependencies().len()
        );
    }
}

#[test]
fn test_proposed_edit_never_changes_validator_state() {
    let v = validator(vec![
        QuestionBuilder::new("Q1"),
        QuestionBuilder::new("Q2").shown_if("Q1"),
    ]);
    let before = v.graph_data();

    let result = v.validate_question_condition("Q1", &Condition::simple("Q2", "no"));
    assert!(result
        .errors
        .iter()
        .any(|e| e.starts_with("Circular dependency detected")));
    assert!(v.would_create_cycle("Q1", "Q2"));

    assert_eq!(v.graph_data(), before);
    assert!(v.detect_all_circular_dependencies().is_empty());
}

#[test]
fn test_report_flags_cycles_first() {
    let v = validator(vec![
        QuestionBuilder::new("Q1").with_title("Tea?").shown_if("Q2"),
        QuestionBuilder::new("Q2").with_title("Coffee?").shown_if("Q1"),
    ]);
    let report = v.dependency_report();
    assert!(report.has_cycles());
    assert_eq!(
        report.circular_dependencies[0].question_titles,
        vec!["Tea?", "Coffee?", "Tea?"]
    );
    assert!(report.recommendations[0]
        .message
        .contains("circular dependency"));
}
