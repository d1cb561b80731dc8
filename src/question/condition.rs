//! Display condition tree.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A display condition attached to a question.
///
/// Deserialized by shape: an object with an `operator` or a `conditions`
/// field is a [`ComplexCondition`], anything else must be a
/// [`SimpleCondition`]. A combinator without an operator parses with an
/// empty [`LogicalOperator::Other`] so validation can report it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Condition {
    Complex(ComplexCondition),
    Simple(SimpleCondition),
}

/// Visible when question `question_id` was answered with `selected_option`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleCondition {
    #[serde(alias = "questionId")]
    pub question_id: String,
    #[serde(default, alias = "selectedOption")]
    pub selected_option: String,
}

/// AND/OR combinator over an ordered list of sub-conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexCondition {
    pub operator: LogicalOperator,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ConditionShape {
    Complex(ComplexCondition),
    MissingOperator { conditions: Vec<Condition> },
    Simple(SimpleCondition),
}

impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match ConditionShape::deserialize(deserializer)? {
            ConditionShape::Complex(complex) => Condition::Complex(complex),
            ConditionShape::MissingOperator { conditions } => {
                Condition::complex(LogicalOperator::Other(String::new()), conditions)
            }
            ConditionShape::Simple(simple) => Condition::Simple(simple),
        })
    }
}

/// Logical operator of a complex condition.
///
/// Unknown operators are kept verbatim in [`LogicalOperator::Other`] so that
/// validation can report them instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
    Other(String),
}

/// Top-level shape of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionKind {
    Simple,
    Complex,
}

impl Condition {
    pub fn simple(question_id: &str, selected_option: &str) -> Self {
        Condition::Simple(SimpleCondition {
            question_id: question_id.to_string(),
            selected_option: selected_option.to_string(),
        })
    }

    pub fn and(conditions: Vec<Condition>) -> Self {
        Self::complex(LogicalOperator::And, conditions)
    }

    pub fn or(conditions: Vec<Condition>) -> Self {
        Self::complex(LogicalOperator::Or, conditions)
    }

    pub fn complex(operator: LogicalOperator, conditions: Vec<Condition>) -> Self {
        Condition::Complex(ComplexCondition {
            operator,
            conditions,
        })
    }

    pub fn kind(&self) -> ConditionKind {
        match self {
            Condition::Simple(_) => ConditionKind::Simple,
            Condition::Complex(_) => ConditionKind::Complex,
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Condition::Complex(_))
    }

    /// Referenced question ids, deduplicated in first-seen order.
    pub fn referenced_questions(&self) -> Vec<String> {
        let mut ids = Vec::new();
        collect_references(self, &mut ids);
        ids
    }
}

fn collect_references(condition: &Condition, ids: &mut Vec<String>) {
    match condition {
        Condition::Simple(simple) => {
            if !ids.contains(&simple.question_id) {
                ids.push(simple.question_id.clone());
            }
        }
        Condition::Complex(complex) => {
            for child in &complex.conditions {
                collect_references(child, ids);
            }
        }
    }
}

impl LogicalOperator {
    pub fn is_valid(&self) -> bool {
        !matches!(self, LogicalOperator::Other(_))
    }

    /// True for a combinator that was given no operator at all.
    pub fn is_missing(&self) -> bool {
        matches!(self, LogicalOperator::Other(raw) if raw.trim().is_empty())
    }

    pub fn as_str(&self) -> &str {
        match self {
            LogicalOperator::And => "AND",
            LogicalOperator::Or => "OR",
            LogicalOperator::Other(raw) => raw,
        }
    }
}

impl From<String> for LogicalOperator {
    fn from(raw: String) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "AND" => LogicalOperator::And,
            "OR" => LogicalOperator::Or,
            _ => LogicalOperator::Other(raw),
        }
    }
}

impl From<&str> for LogicalOperator {
    fn from(raw: &str) -> Self {
        LogicalOperator::from(raw.to_string())
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionKind::Simple => write!(f, "simple"),
            ConditionKind::Complex => write!(f, "complex"),
        }
    }
}

impl Serialize for LogicalOperator {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LogicalOperator {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(LogicalOperator::from(raw))
    }
}
