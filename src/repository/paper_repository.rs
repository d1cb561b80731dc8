use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::question::{load_questions, Question};

/// Extensions a paper file may use, in lookup order.
const PAPER_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// A trait for loading the questions of a paper from a storage backend.
pub trait QuestionRepository {
    /// Load every question of a paper.
    fn load_paper(&self, paper_id: &str) -> Result<Vec<Question>>;

    /// List the ids of all known papers, sorted.
    fn list_papers(&self) -> Result<Vec<String>>;
}

/// File-based implementation of QuestionRepository.
///
/// Papers live in one directory as `<paper_id>.yaml`, `.yml` or `.json`.
pub struct FilePaperRepository {
    papers_dir: PathBuf,
}

impl FilePaperRepository {
    pub fn new(papers_dir: PathBuf) -> Self {
        Self { papers_dir }
    }

    pub fn papers_dir(&self) -> &Path {
        &self.papers_dir
    }

    fn paper_path(&self, paper_id: &str) -> Option<PathBuf> {
        PAPER_EXTENSIONS
            .iter()
            .map(|ext| self.papers_dir.join(format!("{}.{}", paper_id, ext)))
            .find(|path| path.is_file())
    }
}

impl QuestionRepository for FilePaperRepository {
    fn load_paper(&self, paper_id: &str) -> Result<Vec<Question>> {
        let Some(path) = self.paper_path(paper_id) else {
            bail!(
                "Paper not found: {} (looked in {})",
                paper_id,
                self.papers_dir.display()
            );
        };

        let mut questions = load_questions(&path)?;
        for question in &mut questions {
            if question.paper_id.is_empty() {
                question.paper_id = paper_id.to_string();
            }
        }
        tracing::debug!(paper_id, count = questions.len(), "loaded paper");
        Ok(questions)
    }

    fn list_papers(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.papers_dir).with_context(|| {
            format!(
                "Failed to read papers directory {}",
                self.papers_dir.display()
            )
        })?;

        let mut papers = Vec::new();
        for entry in entries {
            let path = entry?.path();
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.to_lowercase());
            let is_paper = ext
                .as_deref()
                .is_some_and(|e| PAPER_EXTENSIONS.contains(&e));
            if !path.is_file() || !is_paper {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                papers.push(stem.to_string());
            }
        }

        papers.sort();
        papers.dedup();
        Ok(papers)
    }
}
