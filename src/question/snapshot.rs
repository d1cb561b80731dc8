//! Immutable, id-indexed snapshot of questions for one analysis pass.

use anyhow::{bail, Result};
use std::collections::HashMap;

use super::Question;

#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    questions: Vec<Question>,
    index: HashMap<String, usize>,
}

impl Snapshot {
    /// Index `questions` by id.
    ///
    /// Blank or duplicate ids are a caller bug, not a validation finding, so
    /// they fail construction.
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        let mut index = HashMap::with_capacity(questions.len());
        for (position, question) in questions.iter().enumerate() {
            if question.id.trim().is_empty() {
                bail!("Question at position {} has a blank id", position);
            }
            if index.insert(question.id.clone(), position).is_some() {
                bail!("Duplicate question id '{}' in snapshot", question.id);
            }
        }
        Ok(Self { questions, index })
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.index.get(id).map(|&i| &self.questions[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Title of `id`, or the id itself when the question is unknown.
    pub fn title_of(&self, id: &str) -> String {
        self.get(id)
            .map(|q| q.display_title().to_string())
            .unwrap_or_else(|| id.to_string())
    }
}
