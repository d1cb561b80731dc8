//! Questions, display conditions, and paper snapshot loading.
//!
//! A [`Question`] optionally carries a [`Condition`] that decides whether it is
//! shown. Conditions are either a single reference to another question's
//! selected option, or an AND/OR combinator over further conditions.

mod condition;
mod load;
mod snapshot;

pub use condition::{ComplexCondition, Condition, ConditionKind, LogicalOperator, SimpleCondition};
pub use load::{load_questions, load_snapshot, parse_questions, Paper, PaperFormat};
pub use snapshot::Snapshot;

use serde::{Deserialize, Serialize};

/// One question in a paper snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "paperId")]
    pub paper_id: String,
    #[serde(
        default,
        alias = "displayCondition",
        skip_serializing_if = "Option::is_none"
    )]
    pub display_condition: Option<Condition>,
}

impl Question {
    pub fn new(id: &str, title: &str, paper_id: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            paper_id: paper_id.to_string(),
            display_condition: None,
        }
    }

    /// Builder-style setter for the display condition.
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.display_condition = Some(condition);
        self
    }

    pub fn has_condition(&self) -> bool {
        self.display_condition.is_some()
    }

    /// Title for display, falling back to the id when the title is blank.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.id
        } else {
            &self.title
        }
    }
}
