use std::collections::BTreeMap;

use anyhow::{Context, Result};

use crate::question::Question;

use super::paper_repository::QuestionRepository;

/// In-memory implementation of QuestionRepository, keyed by paper id.
#[derive(Debug, Default)]
pub struct InMemoryQuestionRepository {
    papers: BTreeMap<String, Vec<Question>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group questions into papers by their `paper_id`.
    pub fn with_questions(questions: Vec<Question>) -> Self {
        let mut papers: BTreeMap<String, Vec<Question>> = BTreeMap::new();
        for question in questions {
            papers
                .entry(question.paper_id.clone())
                .or_default()
                .push(question);
        }
        Self { papers }
    }

    pub fn insert_paper(&mut self, paper_id: &str, questions: Vec<Question>) {
        self.papers.insert(paper_id.to_string(), questions);
    }
}

impl QuestionRepository for InMemoryQuestionRepository {
    fn load_paper(&self, paper_id: &str) -> Result<Vec<Question>> {
        self.papers
            .get(paper_id)
            .cloned()
            .context(format!("Paper not found: {}", paper_id))
    }

    fn list_papers(&self) -> Result<Vec<String>> {
        Ok(self.papers.keys().cloned().collect())
    }
}
