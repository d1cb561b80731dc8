//! Dependency graph derived from question display conditions.
//!
//! An edge `q -> d` means question `q` is only shown depending on how `d` was
//! answered. The graph is rebuilt from a snapshot and never written back.
//!
//! Speculative edits go through [`GraphOverlay`], a borrowed view that swaps
//! one question's dependency list without touching the underlying graph.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};

use crate::question::{Condition, Question};

/// Read access to dependency edges.
///
/// Implemented by [`DependencyGraph`] and by [`GraphOverlay`] so traversal
/// code runs unchanged over committed and hypothetical graphs.
pub trait DependencySource {
    /// Direct dependencies of `id`; empty for unknown ids.
    fn dependencies_of(&self, id: &str) -> &[String];
}

/// Question id to ordered, deduplicated dependency ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyGraph {
    order: Vec<String>,
    edges: HashMap<String, Vec<String>>,
}

/// Direct and transitive dependencies of one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDependencies {
    pub direct_dependencies: Vec<String>,
    pub indirect_dependencies: Vec<String>,
    pub total_dependencies: usize,
    /// Every collected dependency in discovery order.
    pub dependency_chain: Vec<String>,
}

/// A weakly connected group of two or more questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub questions: Vec<String>,
    pub strongly_connected: bool,
}

/// Flatten a condition into the ids it depends on.
pub fn extract_dependencies(condition: Option<&Condition>) -> Vec<String> {
    condition
        .map(Condition::referenced_questions)
        .unwrap_or_default()
}

impl DependencyGraph {
    pub fn build(questions: &[Question]) -> Self {
        let mut graph = DependencyGraph::default();
        for question in questions {
            if !graph.edges.contains_key(&question.id) {
                graph.order.push(question.id.clone());
            }
            graph.edges.insert(
                question.id.clone(),
                extract_dependencies(question.display_condition.as_ref()),
            );
        }
        tracing::debug!(
            questions = graph.order.len(),
            edges = graph.edge_count(),
            "built dependency graph"
        );
        graph
    }

    /// Question ids in snapshot order.
    pub fn question_ids(&self) -> &[String] {
        &self.order
    }

    pub fn contains(&self, id: &str) -> bool {
        self.edges.contains_key(id)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// View of this graph where `id` depends on exactly `dependencies`.
    pub fn with_replaced(&self, id: &str, dependencies: Vec<String>) -> GraphOverlay<'_> {
        GraphOverlay {
            base: self,
            id: id.to_string(),
            dependencies,
        }
    }

    /// View of this graph with the extra edge `from -> to`.
    pub fn with_extra_edge(&self, from: &str, to: &str) -> GraphOverlay<'_> {
        let mut dependencies = self.dependencies_of(from).to_vec();
        if !dependencies.iter().any(|d| d == to) {
            dependencies.push(to.to_string());
        }
        self.with_replaced(from, dependencies)
    }

    /// For each question, the questions that depend on it.
    pub fn dependents_index(&self) -> HashMap<String, Vec<String>> {
        let mut dependents: HashMap<String, Vec<String>> = HashMap::new();
        for id in &self.order {
            dependents.entry(id.clone()).or_default();
        }
        for id in &self.order {
            for dep in self.dependencies_of(id) {
                let entry = dependents.entry(dep.clone()).or_default();
                if !entry.contains(id) {
                    entry.push(id.clone());
                }
            }
        }
        dependents
    }

    /// Direct and transitive dependencies of `id`, expanded at most
    /// `max_depth` levels deep.
    pub fn question_dependencies(&self, id: &str, max_depth: usize) -> QuestionDependencies {
        let direct = self.dependencies_of(id).to_vec();

        let mut visited = HashSet::new();
        visited.insert(id.to_string());
        let mut chain = Vec::new();
        collect_dependencies(self, id, 0, max_depth, &mut visited, &mut chain);

        let indirect: Vec<String> = chain
            .iter()
            .filter(|dep| !direct.contains(dep))
            .cloned()
            .collect();

        QuestionDependencies {
            total_dependencies: direct.len() + indirect.len(),
            direct_dependencies: direct,
            indirect_dependencies: indirect,
            dependency_chain: chain,
        }
    }

    /// Group questions into weakly connected clusters of two or more members.
    ///
    /// Each cluster is checked for strong connectivity by a forward scan from
    /// every member, which is O(V·(V+E)) and fine at per-paper sizes.
    pub fn detect_clusters(&self, strongly_connected_only: bool) -> Vec<Cluster> {
        let mut neighbours: HashMap<&str, Vec<&str>> = HashMap::new();
        for id in &self.order {
            for dep in self.dependencies_of(id) {
                if !self.contains(dep) {
                    continue;
                }
                neighbours.entry(id.as_str()).or_default().push(dep.as_str());
                neighbours.entry(dep.as_str()).or_default().push(id.as_str());
            }
        }

        let position: HashMap<&str, usize> = self
            .order
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_str(), i))
            .collect();

        let mut seen: HashSet<&str> = HashSet::new();
        let mut clusters = Vec::new();

        for start in &self.order {
            if !seen.insert(start.as_str()) {
                continue;
            }

            let mut members = vec![start.as_str()];
            let mut queue = VecDeque::from([start.as_str()]);
            while let Some(node) = queue.pop_front() {
                for &next in neighbours.get(node).into_iter().flatten() {
                    if seen.insert(next) {
                        members.push(next);
                        queue.push_back(next);
                    }
                }
            }

            if members.len() < 2 {
                continue;
            }
            members.sort_by_key(|id| position.get(id).copied().unwrap_or(usize::MAX));

            let strongly_connected = members.iter().all(|member| {
                let reached = reachable_from(self, member);
                members
                    .iter()
                    .all(|other| other == member || reached.contains(*other))
            });

            if strongly_connected_only && !strongly_connected {
                continue;
            }

            clusters.push(Cluster {
                questions: members.into_iter().map(String::from).collect(),
                strongly_connected,
            });
        }

        clusters
    }

    /// Longest-path depth of every question: 0 when it has no dependency in
    /// the snapshot, otherwise one more than its deepest dependency. Edges
    /// that close a cycle are ignored.
    pub fn depth_levels(&self) -> HashMap<String, usize> {
        let mut levels = HashMap::new();
        let mut on_stack = HashSet::new();
        for id in &self.order {
            depth_level(self, id, &mut levels, &mut on_stack);
        }
        levels
    }
}

impl DependencySource for DependencyGraph {
    fn dependencies_of(&self, id: &str) -> &[String] {
        self.edges.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Borrowed view of a [`DependencyGraph`] with one question's edges swapped.
#[derive(Debug, Clone)]
pub struct GraphOverlay<'a> {
    base: &'a DependencyGraph,
    id: String,
    dependencies: Vec<String>,
}

impl DependencySource for GraphOverlay<'_> {
    fn dependencies_of(&self, id: &str) -> &[String] {
        if id == self.id {
            &self.dependencies
        } else {
            self.base.dependencies_of(id)
        }
    }
}

fn collect_dependencies<G: DependencySource + ?Sized>(
    graph: &G,
    id: &str,
    depth: usize,
    max_depth: usize,
    visited: &mut HashSet<String>,
    chain: &mut Vec<String>,
) {
    if depth >= max_depth {
        return;
    }
    for dep in graph.dependencies_of(id) {
        if visited.insert(dep.clone()) {
            chain.push(dep.clone());
            collect_dependencies(graph, dep, depth + 1, max_depth, visited, chain);
        }
    }
}

/// Every id reachable from `start` through at least one edge.
pub fn reachable_from<G: DependencySource + ?Sized>(graph: &G, start: &str) -> HashSet<String> {
    let mut reached = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        for dep in graph.dependencies_of(node) {
            if reached.insert(dep.clone()) {
                queue.push_back(dep.as_str());
            }
        }
    }
    reached
}

fn depth_level(
    graph: &DependencyGraph,
    id: &str,
    levels: &mut HashMap<String, usize>,
    on_stack: &mut HashSet<String>,
) -> usize {
    if let Some(&level) = levels.get(id) {
        return level;
    }
    on_stack.insert(id.to_string());

    let mut level = 0;
    for dep in graph.dependencies_of(id) {
        if !graph.contains(dep) || on_stack.contains(dep) {
            continue;
        }
        level = level.max(depth_level(graph, dep, levels, on_stack) + 1);
    }

    on_stack.remove(id);
    levels.insert(id.to_string(), level);
    level
}
