//! `graph` and `report` commands.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use condgraph::config::Config;
use condgraph::domain::cycles::format_cycle;
use condgraph::report::{DependencyReport, Priority};

use super::{load_validator, print_json};
use crate::cli::GraphFormat;

pub fn cmd_graph(
    papers: &[PathBuf],
    config: &Config,
    format: GraphFormat,
    output: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let validator = load_validator(papers, config)?;
    let text = match format {
        GraphFormat::Mermaid => validator.mermaid_diagram(),
        GraphFormat::Dot => validator.dot_diagram(),
        GraphFormat::Json => {
            let mut json = serde_json::to_string_pretty(&validator.graph_data())?;
            json.push('\n');
            json
        }
    };

    match output {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if !quiet {
                println!("{} Wrote {}", "✓".green(), path.display());
            }
        }
        None => print!("{}", text),
    }
    Ok(())
}

pub fn cmd_report(papers: &[PathBuf], config: &Config, json: bool) -> Result<()> {
    let validator = load_validator(papers, config)?;
    let report = validator.dependency_report();
    if json {
        print_json(&report)
    } else {
        print_report(&report);
        Ok(())
    }
}

fn print_report(report: &DependencyReport) {
    let summary = &report.summary;
    println!("{}", "Summary".bold());
    println!("  Questions:              {}", summary.total_questions);
    println!(
        "  With conditions:        {} ({} simple, {} complex, {} nested)",
        summary.questions_with_conditions,
        summary.simple_conditions,
        summary.complex_conditions,
        summary.nested_conditions
    );
    println!("  Isolated:               {}", summary.isolated_questions);
    println!("  Dependencies:           {}", summary.total_dependencies);

    let analysis = &report.complexity_analysis;
    println!();
    println!("{}", "Complexity".bold());
    println!(
        "  max {:.1}  min {:.1}  average {:.1}  max nesting {}",
        analysis.max_complexity,
        analysis.min_complexity,
        analysis.average_complexity,
        analysis.max_nesting_level
    );
    for entry in &analysis.most_complex {
        println!(
            "  {:>6.1}  {} {}",
            entry.complexity,
            entry.id.cyan(),
            entry.title.dimmed()
        );
    }

    if report.has_cycles() {
        println!();
        println!("{}", "Circular dependencies".bold().red());
        for cycle in &report.circular_dependencies {
            println!("  {} {}", "↻".red(), format_cycle(&cycle.cycle));
        }
    }

    println!();
    println!("{}", "Recommendations".bold());
    for rec in &report.recommendations {
        let tag = match rec.priority {
            Priority::High => "HIGH".red().bold(),
            Priority::Medium => "MEDIUM".yellow(),
            Priority::Low => "LOW".blue(),
            Priority::Info => "INFO".green(),
        };
        println!("  [{}] {}", tag, rec.message);
    }
}
