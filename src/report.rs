//! Presentation model and plain-language report for a question snapshot.
//!
//! [`build_graph_data`] combines graph, cycle, and condition analysis into
//! one node/edge/statistics model. [`build_report`] summarises that model and
//! turns it into recommendations.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::config::ReportConfig;
use crate::domain::conditions::{condition_complexity, condition_nesting_level};
use crate::domain::cycles::{detect_all_circular_dependencies, CircularDependency};
use crate::graph::{Cluster, DependencyGraph, DependencySource};
use crate::question::{ConditionKind, Snapshot};

/// One question as a graph node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    pub title: String,
    pub paper_id: String,
    /// Questions this one depends on.
    pub dependencies: Vec<String>,
    /// Questions that depend on this one.
    pub dependents: Vec<String>,
    /// Longest dependency path below this question.
    pub level: usize,
    /// Index in the snapshot.
    pub position: usize,
    pub has_condition: bool,
    pub condition_kind: Option<ConditionKind>,
    pub nesting_level: usize,
    pub complexity: f64,
    pub in_cycle: bool,
}

/// Edge `from -> to`: `from` depends on `to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    /// Top-level condition kind of the source question.
    pub kind: ConditionKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStatistics {
    pub total_questions: usize,
    pub questions_with_conditions: usize,
    pub total_dependencies: usize,
    pub circular_dependencies: usize,
    pub clusters: usize,
    pub max_nesting_level: usize,
    pub average_complexity: f64,
    pub max_complexity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub clusters: Vec<Cluster>,
    pub cycles: Vec<CircularDependency>,
    pub statistics: GraphStatistics,
}

impl GraphData {
    /// Referenced ids that have no node of their own.
    pub fn missing_targets(&self) -> Vec<String> {
        let known: HashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        let mut missing: Vec<String> = Vec::new();
        for edge in &self.edges {
            if !known.contains(edge.to.as_str()) && !missing.contains(&edge.to) {
                missing.push(edge.to.clone());
            }
        }
        missing
    }

    /// Edges that lie on a detected cycle, as `(from, to)` pairs.
    pub fn cycle_edges(&self) -> HashSet<(String, String)> {
        self.cycles
            .iter()
            .flat_map(|c| {
                c.cycle
                    .windows(2)
                    .map(|pair| (pair[0].clone(), pair[1].clone()))
            })
            .collect()
    }
}

/// Build the full presentation model for a snapshot.
pub fn build_graph_data(snapshot: &Snapshot, graph: &DependencyGraph) -> GraphData {
    let dependents = graph.dependents_index();
    let levels = graph.depth_levels();
    let cycles: Vec<CircularDependency> = detect_all_circular_dependencies(graph)
        .into_iter()
        .map(|cycle| CircularDependency::new(cycle, snapshot))
        .collect();
    let on_cycle: HashSet<&str> = cycles
        .iter()
        .flat_map(|c| c.members().iter().map(String::as_str))
        .collect();

    let mut nodes = Vec::with_capacity(snapshot.len());
    let mut edges = Vec::new();

    for (position, question) in snapshot.questions().iter().enumerate() {
        let condition = question.display_condition.as_ref();
        let dependencies = graph.dependencies_of(&question.id).to_vec();

        if let Some(condition) = condition {
            for dep in &dependencies {
                edges.push(GraphEdge {
                    from: question.id.clone(),
                    to: dep.clone(),
                    kind: condition.kind(),
                });
            }
        }

        nodes.push(GraphNode {
            id: question.id.clone(),
            title: question.display_title().to_string(),
            paper_id: question.paper_id.clone(),
            dependencies,
            dependents: dependents.get(&question.id).cloned().unwrap_or_default(),
            level: levels.get(&question.id).copied().unwrap_or(0),
            position,
            has_condition: condition.is_some(),
            condition_kind: condition.map(|c| c.kind()),
            nesting_level: condition.map(condition_nesting_level).unwrap_or(0),
            complexity: condition.map(condition_complexity).unwrap_or(0.0),
            in_cycle: on_cycle.contains(question.id.as_str()),
        });
    }

    let clusters = graph.detect_clusters(false);
    let statistics = compute_statistics(&nodes, &edges, &clusters, &cycles);

    GraphData {
        nodes,
        edges,
        clusters,
        cycles,
        statistics,
    }
}

fn compute_statistics(
    nodes: &[GraphNode],
    edges: &[GraphEdge],
    clusters: &[Cluster],
    cycles: &[CircularDependency],
) -> GraphStatistics {
    let conditioned: Vec<&GraphNode> = nodes.iter().filter(|n| n.has_condition).collect();
    let total_complexity: f64 = conditioned.iter().map(|n| n.complexity).sum();

    GraphStatistics {
        total_questions: nodes.len(),
        questions_with_conditions: conditioned.len(),
        total_dependencies: edges.len(),
        circular_dependencies: cycles.len(),
        clusters: clusters.len(),
        max_nesting_level: nodes.iter().map(|n| n.nesting_level).max().unwrap_or(0),
        average_complexity: if conditioned.is_empty() {
            0.0
        } else {
            total_complexity / conditioned.len() as f64
        },
        max_complexity: conditioned
            .iter()
            .map(|n| n.complexity)
            .fold(0.0, f64::max),
    }
}

// ============================================================================
// REPORT
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_questions: usize,
    pub questions_with_conditions: usize,
    pub simple_conditions: usize,
    pub complex_conditions: usize,
    /// Conditions with at least one Complex-in-Complex level.
    pub nested_conditions: usize,
    /// Questions with no edge in either direction.
    pub isolated_questions: usize,
    pub total_dependencies: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityEntry {
    pub id: String,
    pub title: String,
    pub complexity: f64,
    pub nesting_level: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityAnalysis {
    pub max_complexity: f64,
    pub min_complexity: f64,
    pub average_complexity: f64,
    pub max_nesting_level: usize,
    pub most_complex: Vec<ComplexityEntry>,
}

/// How urgently a recommendation should be acted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
    Info,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
            Self::Info => write!(f, "info"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub priority: Priority,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyReport {
    pub summary: ReportSummary,
    pub complexity_analysis: ComplexityAnalysis,
    pub circular_dependencies: Vec<CircularDependency>,
    pub recommendations: Vec<Recommendation>,
}

impl DependencyReport {
    pub fn has_cycles(&self) -> bool {
        !self.circular_dependencies.is_empty()
    }
}

/// Summarise graph data and derive recommendations.
pub fn build_report(data: &GraphData, config: &ReportConfig) -> DependencyReport {
    let summary = summarize(data);
    let complexity_analysis = analyze_complexity(data, config.top_complex_count);
    let recommendations = generate_recommendations(
        &summary,
        &complexity_analysis,
        data.cycles.len(),
        config,
    );

    DependencyReport {
        summary,
        complexity_analysis,
        circular_dependencies: data.cycles.clone(),
        recommendations,
    }
}

fn summarize(data: &GraphData) -> ReportSummary {
    let count_kind = |kind: ConditionKind| {
        data.nodes
            .iter()
            .filter(|n| n.condition_kind == Some(kind))
            .count()
    };

    ReportSummary {
        total_questions: data.nodes.len(),
        questions_with_conditions: data.statistics.questions_with_conditions,
        simple_conditions: count_kind(ConditionKind::Simple),
        complex_conditions: count_kind(ConditionKind::Complex),
        nested_conditions: data.nodes.iter().filter(|n| n.nesting_level > 0).count(),
        isolated_questions: data
            .nodes
            .iter()
            .filter(|n| n.dependencies.is_empty() && n.dependents.is_empty())
            .count(),
        total_dependencies: data.statistics.total_dependencies,
    }
}

fn analyze_complexity(data: &GraphData, top: usize) -> ComplexityAnalysis {
    let mut entries: Vec<ComplexityEntry> = data
        .nodes
        .iter()
        .filter(|n| n.has_condition)
        .map(|n| ComplexityEntry {
            id: n.id.clone(),
            title: n.title.clone(),
            complexity: n.complexity,
            nesting_level: n.nesting_level,
        })
        .collect();

    if entries.is_empty() {
        return ComplexityAnalysis::default();
    }

    let min_complexity = entries
        .iter()
        .map(|e| e.complexity)
        .fold(f64::INFINITY, f64::min);

    // Stable sort keeps snapshot order among ties
    entries.sort_by(|a, b| b.complexity.total_cmp(&a.complexity));
    entries.truncate(top);

    ComplexityAnalysis {
        max_complexity: data.statistics.max_complexity,
        min_complexity,
        average_complexity: data.statistics.average_complexity,
        max_nesting_level: data.statistics.max_nesting_level,
        most_complex: entries,
    }
}

/// Fixed-threshold recommendations, most urgent first.
fn generate_recommendations(
    summary: &ReportSummary,
    complexity: &ComplexityAnalysis,
    cycle_count: usize,
    config: &ReportConfig,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if cycle_count > 0 {
        recommendations.push(Recommendation {
            priority: Priority::High,
            message: format!(
                "Fix {} circular {} immediately - questions on a cycle can never be shown reliably",
                cycle_count,
                if cycle_count == 1 {
                    "dependency"
                } else {
                    "dependencies"
                }
            ),
        });
    }

    if complexity.max_complexity > config.complexity_threshold {
        recommendations.push(Recommendation {
            priority: Priority::Medium,
            message: format!(
                "Maximum condition complexity is {:.1} (>{}) - simplify the most complex conditions",
                complexity.max_complexity, config.complexity_threshold
            ),
        });
    }

    if complexity.max_nesting_level > config.nesting_threshold {
        recommendations.push(Recommendation {
            priority: Priority::Medium,
            message: format!(
                "Maximum nesting level is {} (>{}) - reduce nesting by splitting conditions",
                complexity.max_nesting_level, config.nesting_threshold
            ),
        });
    }

    if summary.total_questions > 0 {
        let ratio = summary.isolated_questions as f64 / summary.total_questions as f64;
        if ratio > config.isolated_ratio_threshold {
            recommendations.push(Recommendation {
                priority: Priority::Low,
                message: format!(
                    "{:.0}% of questions are isolated - consider adding display conditions to relate them",
                    ratio * 100.0
                ),
            });
        }
    }

    if recommendations.is_empty() {
        recommendations.push(Recommendation {
            priority: Priority::Info,
            message: "Dependency structure is healthy".to_string(),
        });
    }

    recommendations
}
