//! Loading question snapshots from paper files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::Question;

/// A paper document: an id, an optional title, and its questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paper {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperFormat {
    Json,
    Yaml,
}

impl PaperFormat {
    /// Pick a format from a file extension, defaulting to YAML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .as_deref()
        {
            Some("json") => PaperFormat::Json,
            _ => PaperFormat::Yaml,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PaperFile {
    Paper(Paper),
    Questions(Vec<Question>),
}

/// Parse a paper document or a bare list of questions.
///
/// Questions inside a paper document inherit the paper id when they do not
/// declare one.
pub fn parse_questions(content: &str, format: PaperFormat) -> Result<Vec<Question>> {
    let file: PaperFile = match format {
        PaperFormat::Json => {
            serde_json::from_str(content).context("Failed to parse paper JSON")?
        }
        PaperFormat::Yaml => {
            serde_yaml::from_str(content).context("Failed to parse paper YAML")?
        }
    };

    let questions = match file {
        PaperFile::Paper(paper) => {
            let paper_id = paper.id;
            paper
                .questions
                .into_iter()
                .map(|mut q| {
                    if q.paper_id.is_empty() {
                        q.paper_id = paper_id.clone();
                    }
                    q
                })
                .collect()
        }
        PaperFile::Questions(questions) => questions,
    };

    Ok(questions)
}

/// Load the questions of one paper file.
pub fn load_questions(path: &Path) -> Result<Vec<Question>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read paper file {}", path.display()))?;
    parse_questions(&content, PaperFormat::from_path(path))
        .with_context(|| format!("Invalid paper file {}", path.display()))
}

/// Load several paper files into one snapshot, in argument order.
pub fn load_snapshot<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Question>> {
    let mut questions = Vec::new();
    for path in paths {
        let loaded = load_questions(path.as_ref())?;
        tracing::debug!(
            path = %path.as_ref().display(),
            count = loaded.len(),
            "loaded paper file"
        );
        questions.extend(loaded);
    }
    Ok(questions)
}
