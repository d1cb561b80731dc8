//! # condgraph - display-condition dependency validation
//!
//! Questions in a paper can be shown or hidden depending on how earlier
//! questions were answered. condgraph turns those display conditions into a
//! dependency graph, proves the graph is free of cycles (for committed data
//! and for a single proposed edit), scores condition complexity, and renders
//! diagnostics and diagrams.
//!
//! ## Core Concepts
//!
//! - **Display condition**: a single `(question, selected option)` reference,
//!   or an AND/OR combinator over further conditions
//! - **Dependency graph**: edge `q -> d` means `q`'s visibility depends on `d`
//! - **Overlay**: a borrowed view of the graph with one question's edges
//!   replaced, used to check an edit without touching committed state
//!
//! ## Modules
//!
//! - [`question`] - Question and condition model, paper file loading
//! - [`graph`] - Dependency graph construction, chains and clusters
//! - [`domain`] - Cycle detection and condition validation
//! - [`report`] - Graph presentation model and recommendations
//! - [`diagram`] - Mermaid and DOT rendering
//! - [`validator`] - The [`ConditionValidator`] facade
//! - [`repository`] - Paper sources keyed by paper id
//! - [`quick_check`] - Validate an edit before saving it
//! - [`config`] - Limits and thresholds
//!
//! ## Example
//!
//! ```
//! use condgraph::question::{Condition, Question};
//! use condgraph::ConditionValidator;
//!
//! let validator = ConditionValidator::new(vec![
//!     Question::new("q1", "Do you drink tea?", "survey"),
//!     Question::new("q2", "Which tea?", "survey")
//!         .with_condition(Condition::simple("q1", "yes")),
//! ])
//! .unwrap();
//!
//! assert!(validator.detect_all_circular_dependencies().is_empty());
//! assert!(validator.would_create_cycle("q1", "q2"));
//! ```

pub mod config;
pub mod diagram;
pub mod domain;
pub mod graph;
pub mod question;
pub mod quick_check;
pub mod report;
pub mod repository;
pub mod validator;

pub use validator::ConditionValidator;
