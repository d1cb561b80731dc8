//! Pure cycle detection over dependency graphs.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::graph::{reachable_from, DependencyGraph, DependencySource};
use crate::question::Snapshot;

/// A detected cycle with the titles of the questions on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircularDependency {
    /// Closed path, first id repeated at the end.
    pub cycle: Vec<String>,
    pub question_titles: Vec<String>,
}

impl CircularDependency {
    pub fn new(cycle: Vec<String>, snapshot: &Snapshot) -> Self {
        let question_titles = cycle.iter().map(|id| snapshot.title_of(id)).collect();
        Self {
            cycle,
            question_titles,
        }
    }

    /// Distinct questions on the cycle, in path order.
    pub fn members(&self) -> &[String] {
        match self.cycle.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }
}

/// Find a cycle reachable from `start`.
///
/// Returns the closed path, first id repeated at the end (e.g. `[A, B, A]`),
/// or an empty vector when the walk from `start` never revisits a node on
/// the current path.
pub fn detect_circular_dependency<G: DependencySource + ?Sized>(
    graph: &G,
    start: &str,
) -> Vec<String> {
    let mut visited = HashSet::new();
    let mut rec_stack = HashSet::new();
    let mut path = Vec::new();

    detect_cycle_dfs(graph, start, &mut visited, &mut rec_stack, &mut path).unwrap_or_default()
}

/// Performs depth-first search to detect cycles.
fn detect_cycle_dfs<G: DependencySource + ?Sized>(
    graph: &G,
    node: &str,
    visited: &mut HashSet<String>,
    rec_stack: &mut HashSet<String>,
    path: &mut Vec<String>,
) -> Option<Vec<String>> {
    visited.insert(node.to_string());
    rec_stack.insert(node.to_string());
    path.push(node.to_string());

    for dep in graph.dependencies_of(node) {
        if !visited.contains(dep) {
            if let Some(cycle) = detect_cycle_dfs(graph, dep, visited, rec_stack, path) {
                return Some(cycle);
            }
        } else if rec_stack.contains(dep) {
            if let Some(cycle_start) = path.iter().position(|id| id == dep) {
                let mut cycle = path[cycle_start..].to_vec();
                cycle.push(dep.clone());
                return Some(cycle);
            }
        }
    }

    rec_stack.remove(node);
    path.pop();
    None
}

/// Find every distinct cycle in the graph.
///
/// Questions already on a reported cycle are not used as start points again,
/// and a cycle over the same set of questions is only reported once.
pub fn detect_all_circular_dependencies(graph: &DependencyGraph) -> Vec<Vec<String>> {
    let mut cycles: Vec<Vec<String>> = Vec::new();
    let mut covered: HashSet<String> = HashSet::new();
    let mut reported: Vec<HashSet<String>> = Vec::new();

    for id in graph.question_ids() {
        if covered.contains(id) {
            continue;
        }

        let cycle = detect_circular_dependency(graph, id);
        if cycle.is_empty() {
            continue;
        }

        let members: HashSet<String> = cycle.iter().cloned().collect();
        covered.extend(members.iter().cloned());
        if reported.contains(&members) {
            continue;
        }

        tracing::debug!(cycle = %format_cycle(&cycle), "circular dependency found");
        reported.push(members);
        cycles.push(cycle);
    }

    cycles
}

/// True when `a` and `b` can each reach the other.
pub fn has_mutual_dependency<G: DependencySource + ?Sized>(graph: &G, a: &str, b: &str) -> bool {
    reachable_from(graph, a).contains(b) && reachable_from(graph, b).contains(a)
}

/// Whether adding the edge `from -> to` would leave `from` on a cycle.
///
/// Runs over an overlay, so `graph` is never modified.
pub fn would_create_cycle(graph: &DependencyGraph, from: &str, to: &str) -> bool {
    let candidate = graph.with_extra_edge(from, to);
    let cycle = detect_circular_dependency(&candidate, from);
    tracing::debug!(from, to, creates_cycle = !cycle.is_empty(), "speculative edge check");
    !cycle.is_empty()
}

/// Render a cycle as `A -> B -> A`.
pub fn format_cycle(cycle: &[String]) -> String {
    cycle.join(" -> ")
}
