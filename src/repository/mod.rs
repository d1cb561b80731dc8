//! Sources of question snapshots, keyed by paper id.

pub mod in_memory;
pub mod paper_repository;

pub use in_memory::InMemoryQuestionRepository;
pub use paper_repository::{FilePaperRepository, QuestionRepository};
