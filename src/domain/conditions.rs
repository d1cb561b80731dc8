//! Structural validation and scoring of display conditions.
//!
//! Everything here reports problems as strings inside the result. Nothing
//! returns an error for a malformed condition.

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::domain::cycles::{detect_circular_dependency, format_cycle};
use crate::graph::DependencyGraph;
use crate::question::{Condition, LogicalOperator, Snapshot};

/// Outcome of validating one condition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Referenced ids that are unknown or live in another paper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceCheck {
    pub missing_questions: Vec<String>,
    pub cross_paper_references: Vec<String>,
}

impl ReferenceCheck {
    pub fn is_clean(&self) -> bool {
        self.missing_questions.is_empty() && self.cross_paper_references.is_empty()
    }
}

/// Heuristic reasoning burden of a condition.
///
/// Simple scores 1. Complex scores 1 plus its children, with Complex children
/// counted double, and the total is multiplied by 1.2 for AND.
pub fn condition_complexity(condition: &Condition) -> f64 {
    match condition {
        Condition::Simple(_) => 1.0,
        Condition::Complex(complex) => {
            let mut score = 1.0;
            for child in &complex.conditions {
                let child_score = condition_complexity(child);
                score += if child.is_complex() {
                    child_score * 2.0
                } else {
                    child_score
                };
            }
            if complex.operator == LogicalOperator::And {
                score *= 1.2;
            }
            score
        }
    }
}

/// Depth of Complex-inside-Complex nesting.
///
/// Simple conditions and combinators over only Simple children are level 0.
pub fn condition_nesting_level(condition: &Condition) -> usize {
    match condition {
        Condition::Simple(_) => 0,
        Condition::Complex(complex) => complex
            .conditions
            .iter()
            .filter(|child| child.is_complex())
            .map(|child| 1 + condition_nesting_level(child))
            .max()
            .unwrap_or(0),
    }
}

/// Split the condition's references into unknown ids and ids that belong to
/// a paper other than `paper_id`.
pub fn validate_condition_references(
    condition: &Condition,
    snapshot: &Snapshot,
    paper_id: &str,
) -> ReferenceCheck {
    let mut check = ReferenceCheck::default();
    for id in condition.referenced_questions() {
        match snapshot.get(&id) {
            None => check.missing_questions.push(id),
            Some(question) if question.paper_id != paper_id => {
                check.cross_paper_references.push(id)
            }
            Some(_) => {}
        }
    }
    check
}

/// Structural problems of a condition tree, without cycle checks.
///
/// `owner_paper` is the paper of the question the condition would be
/// attached to; cross-paper checks are skipped when it is unknown.
pub fn validate_condition_structure(
    condition: &Condition,
    snapshot: &Snapshot,
    owner_paper: Option<&str>,
    limits: &AnalysisConfig,
) -> ValidationResult {
    let mut walker = StructureWalker {
        snapshot,
        owner_paper,
        limits,
        errors: Vec::new(),
        warnings: Vec::new(),
        depth_exceeded: false,
    };
    walker.visit(condition, 1);

    if !walker.depth_exceeded {
        let nesting = condition_nesting_level(condition);
        if nesting > limits.max_nesting_level {
            walker.warn(format!(
                "Condition nesting level is {} (>{}) - consider flattening it",
                nesting, limits.max_nesting_level
            ));
        }

        let complexity = condition_complexity(condition);
        if complexity > limits.max_complexity {
            walker.warn(format!(
                "Condition complexity is {:.1} (>{}) - consider simplifying it",
                complexity, limits.max_complexity
            ));
        }
    }

    ValidationResult {
        is_valid: walker.errors.is_empty(),
        errors: walker.errors,
        warnings: walker.warnings,
    }
}

/// Validate a condition as if it were attached to question `id`.
///
/// Runs the structural checks, then looks for a cycle on a view of `graph`
/// where `id` depends on exactly what `condition` references.
pub fn validate_question_condition(
    snapshot: &Snapshot,
    graph: &DependencyGraph,
    id: &str,
    condition: &Condition,
    limits: &AnalysisConfig,
) -> ValidationResult {
    let owner = snapshot.get(id);
    let mut result = validate_condition_structure(
        condition,
        snapshot,
        owner.map(|q| q.paper_id.as_str()),
        limits,
    );

    if owner.is_none() {
        result
            .errors
            .insert(0, format!("Question '{}' does not exist", id));
    }

    let candidate = graph.with_replaced(id, condition.referenced_questions());
    let cycle = detect_circular_dependency(&candidate, id);
    if !cycle.is_empty() {
        result.errors.push(cycle_error(&cycle));
    }

    result.is_valid = result.errors.is_empty();
    tracing::debug!(
        question = id,
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "validated condition"
    );
    result
}

/// Error message reported for a cycle found while validating a condition.
pub fn cycle_error(cycle: &[String]) -> String {
    format!("Circular dependency detected: {}", format_cycle(cycle))
}

struct StructureWalker<'a> {
    snapshot: &'a Snapshot,
    owner_paper: Option<&'a str>,
    limits: &'a AnalysisConfig,
    errors: Vec<String>,
    warnings: Vec<String>,
    depth_exceeded: bool,
}

impl StructureWalker<'_> {
    fn visit(&mut self, condition: &Condition, depth: usize) {
        if depth > self.limits.max_condition_depth {
            if !self.depth_exceeded {
                self.depth_exceeded = true;
                self.error(format!(
                    "Condition is nested deeper than the maximum depth of {}",
                    self.limits.max_condition_depth
                ));
            }
            return;
        }

        match condition {
            Condition::Simple(simple) => {
                let id = simple.question_id.as_str();
                if id.trim().is_empty() {
                    self.error("Condition references an empty question id".to_string());
                } else {
                    let snapshot = self.snapshot;
                    match snapshot.get(id) {
                        None => {
                            self.error(format!("Referenced question '{}' does not exist", id))
                        }
                        Some(question) => {
                            if let Some(paper) = self.owner_paper {
                                if question.paper_id != paper {
                                    self.error(format!(
                                        "Referenced question '{}' belongs to paper '{}', not '{}'",
                                        id, question.paper_id, paper
                                    ));
                                }
                            }
                        }
                    }
                }

                if simple.selected_option.trim().is_empty() {
                    self.warn(format!(
                        "Condition on question '{}' has no selected option",
                        id
                    ));
                }
            }
            Condition::Complex(complex) => {
                if complex.operator.is_missing() {
                    self.error("Complex condition has no logical operator".to_string());
                } else if !complex.operator.is_valid() {
                    self.error(format!(
                        "Invalid logical operator '{}' - expected AND or OR",
                        complex.operator
                    ));
                }

                let count = complex.conditions.len();
                if count == 0 {
                    self.error("Complex condition has no sub-conditions".to_string());
                } else if count == 1 {
                    self.warn(
                        "Complex condition has a single sub-condition - use a simple condition instead"
                            .to_string(),
                    );
                } else if count > self.limits.max_sub_conditions {
                    self.warn(format!(
                        "Complex condition has {} sub-conditions (>{}) - consider splitting it",
                        count, self.limits.max_sub_conditions
                    ));
                }

                for child in &complex.conditions {
                    self.visit(child, depth + 1);
                }
            }
        }
    }

    fn error(&mut self, message: String) {
        if !self.errors.contains(&message) {
            self.errors.push(message);
        }
    }

    fn warn(&mut self, message: String) {
        if !self.warnings.contains(&message) {
            self.warnings.push(message);
        }
    }
}
