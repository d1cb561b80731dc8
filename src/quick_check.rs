//! Validate a proposed condition edit before it is saved.
//!
//! The paper's committed questions are loaded from a repository, the edit is
//! applied to an in-memory copy, and the copy is handed to a fresh
//! [`ConditionValidator`]. Nothing in the repository changes.

use anyhow::Result;

use crate::config::Config;
use crate::domain::conditions::ValidationResult;
use crate::question::{Condition, Question};
use crate::repository::QuestionRepository;
use crate::validator::ConditionValidator;

/// One proposed edit: attach `condition` to `question_id` in `paper_id`.
#[derive(Debug, Clone)]
pub struct ProposedEdit {
    pub question_id: String,
    pub paper_id: String,
    pub condition: Condition,
    /// Title to use when the question is new to the paper.
    pub title: Option<String>,
}

impl ProposedEdit {
    pub fn new(question_id: &str, paper_id: &str, condition: Condition) -> Self {
        Self {
            question_id: question_id.to_string(),
            paper_id: paper_id.to_string(),
            condition,
            title: None,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }
}

/// Overlay `edit` on its paper and validate the result.
///
/// An existing question keeps its title and gets the new condition; an
/// unknown question id is appended as a new question.
pub fn quick_check<R: QuestionRepository + ?Sized>(
    repo: &R,
    edit: &ProposedEdit,
    config: &Config,
) -> Result<ValidationResult> {
    let mut questions = repo.load_paper(&edit.paper_id)?;
    apply_edit(&mut questions, edit);

    let validator = ConditionValidator::with_config(questions, config.clone())?;
    let result = validator.validate_question_condition(&edit.question_id, &edit.condition);
    tracing::info!(
        question = %edit.question_id,
        paper = %edit.paper_id,
        valid = result.is_valid,
        "quick check"
    );
    Ok(result)
}

fn apply_edit(questions: &mut Vec<Question>, edit: &ProposedEdit) {
    match questions.iter_mut().find(|q| q.id == edit.question_id) {
        Some(existing) => {
            existing.display_condition = Some(edit.condition.clone());
            if let Some(title) = &edit.title {
                existing.title = title.clone();
            }
        }
        None => {
            let title = edit.title.as_deref().unwrap_or_default();
            questions.push(
                Question::new(&edit.question_id, title, &edit.paper_id)
                    .with_condition(edit.condition.clone()),
            );
        }
    }
}
