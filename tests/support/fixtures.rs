//! Paper files used by the CLI and repository tests.

/// q1 <- q2 <- q3, q4 depends on q2 AND q3 with nesting.
pub const LINEAR_PAPER: &str = r#"
id: survey
title: Tea survey
questions:
  - id: q1
    title: Do you drink tea?
  - id: q2
    title: Which tea do you prefer?
    display_condition:
      question_id: q1
      selected_option: "yes"
  - id: q3
    title: Milk or lemon?
    display_condition:
      question_id: q2
      selected_option: black
  - id: q4
    title: How many cups a day?
    display_condition:
      operator: AND
      conditions:
        - question_id: q2
          selected_option: green
        - operator: OR
          conditions:
            - question_id: q3
              selected_option: milk
            - question_id: q1
              selected_option: "yes"
"#;

/// a and b depend on each other.
pub const CYCLIC_PAPER: &str = r#"{
  "id": "loop",
  "questions": [
    {"id": "a", "title": "Alpha", "display_condition": {"question_id": "b", "selected_option": "x"}},
    {"id": "b", "title": "Beta", "displayCondition": {"questionId": "a", "selectedOption": "x"}},
    {"id": "c", "title": "Gamma"}
  ]
}"#;
