//! Read-only graph queries: `cycles`, `deps`, `clusters`, `would-cycle`, `mutual`.

use anyhow::{bail, Result};
use colored::Colorize;
use std::path::PathBuf;

use condgraph::config::Config;
use condgraph::domain::cycles::format_cycle;

use super::load_validator;

pub fn cmd_cycles(papers: &[PathBuf], config: &Config, quiet: bool) -> Result<()> {
    let validator = load_validator(papers, config)?;
    let cycles = validator.detect_all_circular_dependencies();

    if cycles.is_empty() {
        if !quiet {
            println!("{} No circular dependencies", "✓".green());
        }
        return Ok(());
    }

    for cycle in &cycles {
        println!("{} {}", "↻".red(), format_cycle(&cycle.cycle));
        if !quiet {
            println!("    {}", cycle.question_titles.join(" -> ").dimmed());
        }
    }
    Ok(())
}

pub fn cmd_deps(papers: &[PathBuf], config: &Config, id: &str) -> Result<()> {
    let validator = load_validator(papers, config)?;
    if !validator.snapshot().contains(id) {
        bail!("Question not found: {}", id);
    }

    let deps = validator.question_dependencies(id);
    println!(
        "{} {} ({} total)",
        "Dependencies of".bold(),
        id.cyan(),
        deps.total_dependencies
    );
    print_ids("direct", &deps.direct_dependencies);
    print_ids("indirect", &deps.indirect_dependencies);

    let cycle = validator.detect_circular_dependency(id);
    if !cycle.is_empty() {
        println!("  {} {}", "↻".red(), format_cycle(&cycle));
    }
    Ok(())
}

pub fn cmd_clusters(
    papers: &[PathBuf],
    config: &Config,
    strongly_connected: bool,
    quiet: bool,
) -> Result<()> {
    let validator = load_validator(papers, config)?;
    let clusters = validator.detect_clusters(strongly_connected);

    if clusters.is_empty() && !quiet {
        println!("No clusters found");
    }
    for (i, cluster) in clusters.iter().enumerate() {
        let marker = if cluster.strongly_connected {
            " (strongly connected)".yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "{} {}{}: {}",
            "Cluster".bold(),
            i + 1,
            marker,
            cluster.questions.join(", ")
        );
    }
    Ok(())
}

pub fn cmd_would_cycle(papers: &[PathBuf], config: &Config, from: &str, to: &str) -> Result<()> {
    let validator = load_validator(papers, config)?;
    if validator.would_create_cycle(from, to) {
        bail!("Adding {} -> {} would create a cycle", from, to);
    }
    println!(
        "{} Adding {} -> {} is safe",
        "✓".green(),
        from.cyan(),
        to.cyan()
    );
    Ok(())
}

pub fn cmd_mutual(papers: &[PathBuf], config: &Config, a: &str, b: &str) -> Result<()> {
    let validator = load_validator(papers, config)?;
    if validator.has_mutual_dependency(a, b) {
        println!("{} {} and {} depend on each other", "↻".red(), a.cyan(), b.cyan());
    } else {
        println!("{} and {} are not mutually dependent", a.cyan(), b.cyan());
    }
    Ok(())
}

fn print_ids(label: &str, ids: &[String]) {
    if ids.is_empty() {
        println!("  {:<9} {}", label, "none".dimmed());
    } else {
        println!("  {:<9} {}", label, ids.join(", "));
    }
}
