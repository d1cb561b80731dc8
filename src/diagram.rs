//! Mermaid and Graphviz DOT renderings of the dependency graph.
//!
//! Both renderers read the same [`GraphData`] and produce deterministic text:
//! nodes in snapshot order, edges in source order, cycles annotated at the
//! end. Condition-bearing questions and questions on a cycle are styled, and
//! references to unknown questions get a placeholder node.

use std::fmt::Write;

use crate::config::{DiagramConfig, DiagramDirection};
use crate::domain::cycles::format_cycle;
use crate::question::ConditionKind;
use crate::report::GraphData;

const CONDITIONAL_FILL: &str = "#fff3cd";
const CYCLE_COLOR: &str = "#c0392b";
const CYCLE_FILL: &str = "#f8d7da";

/// Render as a Mermaid flowchart.
pub fn mermaid(data: &GraphData, config: &DiagramConfig) -> String {
    let direction = match config.direction {
        DiagramDirection::TD => "TD",
        DiagramDirection::LR => "LR",
    };

    let mut out = String::new();
    let _ = writeln!(out, "graph {}", direction);

    let missing = data.missing_targets();
    let node_id = |id: &str| -> String {
        if let Some(i) = data.nodes.iter().position(|n| n.id == id) {
            format!("q{}", i)
        } else {
            let i = missing.iter().position(|m| m == id).unwrap_or(0);
            format!("m{}", i)
        }
    };

    for (i, node) in data.nodes.iter().enumerate() {
        let label = mermaid_escape(&node_label(&node.id, &node.title, config.title_max_len));
        let class = if node.in_cycle {
            ":::cycle"
        } else if node.has_condition {
            ":::conditional"
        } else {
            ""
        };
        let _ = writeln!(out, "    q{}[\"{}\"]{}", i, label, class);
    }
    for (i, id) in missing.iter().enumerate() {
        let label = mermaid_escape(&format!("{} (missing)", id));
        let _ = writeln!(out, "    m{}[\"{}\"]:::missing", i, label);
    }

    let cycle_edges = data.cycle_edges();
    let mut cycle_links = Vec::new();
    for (link, edge) in data.edges.iter().enumerate() {
        let arrow = match edge.kind {
            ConditionKind::Simple => "-->",
            ConditionKind::Complex => "-.->",
        };
        let _ = writeln!(
            out,
            "    {} {} {}",
            node_id(&edge.from),
            arrow,
            node_id(&edge.to)
        );
        if cycle_edges.contains(&(edge.from.clone(), edge.to.clone())) {
            cycle_links.push(link.to_string());
        }
    }

    let _ = writeln!(
        out,
        "    classDef conditional fill:{},stroke:#d4a017",
        CONDITIONAL_FILL
    );
    let _ = writeln!(
        out,
        "    classDef cycle fill:{},stroke:{},stroke-width:2px",
        CYCLE_FILL, CYCLE_COLOR
    );
    let _ = writeln!(
        out,
        "    classDef missing fill:#eeeeee,stroke:#999999,stroke-dasharray:3 3"
    );
    if !cycle_links.is_empty() {
        let _ = writeln!(
            out,
            "    linkStyle {} stroke:{},stroke-width:2px",
            cycle_links.join(","),
            CYCLE_COLOR
        );
    }

    for cycle in &data.cycles {
        let _ = writeln!(
            out,
            "    %% Circular dependency: {}",
            format_cycle(&cycle.cycle)
        );
    }

    out
}

/// Render as a Graphviz DOT digraph.
pub fn dot(data: &GraphData, config: &DiagramConfig) -> String {
    let rankdir = match config.direction {
        DiagramDirection::TD => "TB",
        DiagramDirection::LR => "LR",
    };

    let mut out = String::new();
    let _ = writeln!(out, "digraph dependencies {{");
    let _ = writeln!(out, "    rankdir={};", rankdir);
    let _ = writeln!(out, "    node [shape=box, style=rounded];");
    let _ = writeln!(out);

    for node in &data.nodes {
        let label = dot_escape(&node_label(&node.id, &node.title, config.title_max_len));
        let mut attrs = vec![format!("label=\"{}\"", label)];
        if node.has_condition {
            attrs.push("style=\"rounded,filled\"".to_string());
            attrs.push(format!("fillcolor=\"{}\"", CONDITIONAL_FILL));
        }
        if node.in_cycle {
            attrs.push(format!("color=\"{}\"", CYCLE_COLOR));
            attrs.push("penwidth=2".to_string());
        }
        let _ = writeln!(out, "    \"{}\" [{}];", dot_escape(&node.id), attrs.join(", "));
    }
    for id in data.missing_targets() {
        let _ = writeln!(
            out,
            "    \"{}\" [label=\"{} (missing)\", style=dashed];",
            dot_escape(&id),
            dot_escape(&id)
        );
    }

    if !data.edges.is_empty() {
        let _ = writeln!(out);
    }

    let cycle_edges = data.cycle_edges();
    for edge in &data.edges {
        let mut attrs = Vec::new();
        if edge.kind == ConditionKind::Complex {
            attrs.push("style=dashed".to_string());
        }
        if cycle_edges.contains(&(edge.from.clone(), edge.to.clone())) {
            attrs.push(format!("color=\"{}\"", CYCLE_COLOR));
            attrs.push("penwidth=2".to_string());
        }
        let suffix = if attrs.is_empty() {
            String::new()
        } else {
            format!(" [{}]", attrs.join(", "))
        };
        let _ = writeln!(
            out,
            "    \"{}\" -> \"{}\"{};",
            dot_escape(&edge.from),
            dot_escape(&edge.to),
            suffix
        );
    }

    if !data.cycles.is_empty() {
        let _ = writeln!(out);
        for cycle in &data.cycles {
            let _ = writeln!(
                out,
                "    // Circular dependency: {}",
                format_cycle(&cycle.cycle)
            );
        }
    }

    let _ = writeln!(out, "}}");
    out
}

fn node_label(id: &str, title: &str, max_len: usize) -> String {
    if title == id {
        id.to_string()
    } else {
        format!("{}: {}", id, truncate(title, max_len))
    }
}

/// Truncate a string to max length
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

fn mermaid_escape(s: &str) -> String {
    s.replace('"', "#quot;")
}

fn dot_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
