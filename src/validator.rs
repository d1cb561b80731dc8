//! Single call surface over one question snapshot.
//!
//! A [`ConditionValidator`] derives the dependency graph once on
//! construction and never mutates it afterwards; every operation takes
//! `&self`. Build a fresh validator per snapshot, and one per thread if the
//! host calls in concurrently.

use anyhow::Result;

use crate::config::Config;
use crate::diagram;
use crate::domain::conditions::{self, ReferenceCheck, ValidationResult};
use crate::domain::cycles::{self, CircularDependency};
use crate::graph::{Cluster, DependencyGraph, QuestionDependencies};
use crate::question::{Condition, Question, Snapshot};
use crate::report::{self, DependencyReport, GraphData};

#[derive(Debug, Clone)]
pub struct ConditionValidator {
    snapshot: Snapshot,
    graph: DependencyGraph,
    config: Config,
}

impl ConditionValidator {
    /// Build a validator with default limits.
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        Self::with_config(questions, Config::default())
    }

    /// Build a validator with explicit limits; out-of-range limits are an error.
    pub fn with_config(questions: Vec<Question>, config: Config) -> Result<Self> {
        config.validate()?;
        let snapshot = Snapshot::new(questions)?;
        let graph = DependencyGraph::build(snapshot.questions());
        tracing::info!(
            questions = snapshot.len(),
            dependencies = graph.edge_count(),
            "condition validator ready"
        );
        Ok(Self {
            snapshot,
            graph,
            config,
        })
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // ------------------------------------------------------------------
    // Graph builder
    // ------------------------------------------------------------------

    pub fn extract_dependencies(&self, condition: Option<&Condition>) -> Vec<String> {
        crate::graph::extract_dependencies(condition)
    }

    pub fn question_dependencies(&self, id: &str) -> QuestionDependencies {
        self.graph
            .question_dependencies(id, self.config.analysis.max_chain_depth)
    }

    pub fn detect_clusters(&self, strongly_connected_only: bool) -> Vec<Cluster> {
        self.graph.detect_clusters(strongly_connected_only)
    }

    // ------------------------------------------------------------------
    // Cycle detector
    // ------------------------------------------------------------------

    pub fn detect_circular_dependency(&self, id: &str) -> Vec<String> {
        cycles::detect_circular_dependency(&self.graph, id)
    }

    pub fn detect_all_circular_dependencies(&self) -> Vec<CircularDependency> {
        cycles::detect_all_circular_dependencies(&self.graph)
            .into_iter()
            .map(|cycle| CircularDependency::new(cycle, &self.snapshot))
            .collect()
    }

    pub fn has_mutual_dependency(&self, a: &str, b: &str) -> bool {
        cycles::has_mutual_dependency(&self.graph, a, b)
    }

    pub fn would_create_cycle(&self, from: &str, to: &str) -> bool {
        cycles::would_create_cycle(&self.graph, from, to)
    }

    // ------------------------------------------------------------------
    // Condition validator
    // ------------------------------------------------------------------

    pub fn validate_question_condition(&self, id: &str, condition: &Condition) -> ValidationResult {
        conditions::validate_question_condition(
            &self.snapshot,
            &self.graph,
            id,
            condition,
            &self.config.analysis,
        )
    }

    pub fn validate_condition_references(
        &self,
        condition: &Condition,
        paper_id: &str,
    ) -> ReferenceCheck {
        conditions::validate_condition_references(condition, &self.snapshot, paper_id)
    }

    pub fn condition_complexity(&self, condition: &Condition) -> f64 {
        conditions::condition_complexity(condition)
    }

    pub fn condition_nesting_level(&self, condition: &Condition) -> usize {
        conditions::condition_nesting_level(condition)
    }

    /// Re-validate every stored condition against the rest of the snapshot.
    ///
    /// Returns `(question id, result)` for each question that has a condition.
    /// A question is only charged with a cycle it lies on; one that merely
    /// depends on a cycle elsewhere keeps a clean result, and the cycle is
    /// left to [`Self::detect_all_circular_dependencies`].
    pub fn validate_all(&self) -> Vec<(String, ValidationResult)> {
        self.snapshot
            .questions()
            .iter()
            .filter_map(|q| {
                let condition = q.display_condition.as_ref()?;
                let mut result = self.validate_question_condition(&q.id, condition);

                let cycle = self.detect_circular_dependency(&q.id);
                if !cycle.is_empty() && !cycle.contains(&q.id) {
                    let upstream = conditions::cycle_error(&cycle);
                    result.errors.retain(|e| *e != upstream);
                    result.is_valid = result.errors.is_empty();
                }
                Some((q.id.clone(), result))
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Report & visualization
    // ------------------------------------------------------------------

    pub fn graph_data(&self) -> GraphData {
        report::build_graph_data(&self.snapshot, &self.graph)
    }

    pub fn mermaid_diagram(&self) -> String {
        diagram::mermaid(&self.graph_data(), &self.config.diagram)
    }

    pub fn dot_diagram(&self) -> String {
        diagram::dot(&self.graph_data(), &self.config.diagram)
    }

    pub fn dependency_report(&self) -> DependencyReport {
        report::build_report(&self.graph_data(), &self.config.report)
    }
}
