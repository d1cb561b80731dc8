use condgraph::question::{Condition, LogicalOperator, Question};

pub struct QuestionBuilder {
    id: String,
    title: String,
    paper_id: String,
    condition: Option<Condition>,
}

impl QuestionBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            title: format!("Question {}", id),
            paper_id: "paper-1".to_string(),
            condition: None,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn in_paper(mut self, paper_id: &str) -> Self {
        self.paper_id = paper_id.to_string();
        self
    }

    /// Shown when `question_id` was answered "yes".
    pub fn shown_if(mut self, question_id: &str) -> Self {
        self.condition = Some(Condition::simple(question_id, "yes"));
        self
    }

    /// Shown when all of `question_ids` were answered "yes".
    pub fn shown_if_all(mut self, question_ids: &[&str]) -> Self {
        self.condition = Some(Condition::and(
            question_ids
                .iter()
                .map(|id| Condition::simple(id, "yes"))
                .collect(),
        ));
        self
    }

    pub fn with_operator(mut self, operator: &str, question_ids: &[&str]) -> Self {
        self.condition = Some(Condition::complex(
            LogicalOperator::from(operator),
            question_ids
                .iter()
                .map(|id| Condition::simple(id, "yes"))
                .collect(),
        ));
        self
    }

    pub fn build(self) -> Question {
        let question = Question::new(&self.id, &self.title, &self.paper_id);
        match self.condition {
            Some(condition) => question.with_condition(condition),
            None => question,
        }
    }
}
