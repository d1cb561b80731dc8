//! `check`, `validate` and `quick-check` commands.

use anyhow::{bail, Result};
use colored::Colorize;
use std::path::PathBuf;

use condgraph::config::Config;
use condgraph::domain::conditions::ValidationResult;
use condgraph::domain::cycles::format_cycle;
use condgraph::quick_check::{quick_check, ProposedEdit};
use condgraph::repository::FilePaperRepository;

use super::validate::CheckOutcome;
use super::{load_validator, parse_condition, print_json};

/// Validate every stored condition and list cycles.
pub fn cmd_check(papers: &[PathBuf], config: &Config, quiet: bool) -> Result<()> {
    let validator = load_validator(papers, config)?;

    if !quiet {
        println!(
            "{} {} questions from {} paper file(s)",
            "→".cyan(),
            validator.snapshot().len(),
            papers.len()
        );
    }

    let mut outcome = CheckOutcome::new();
    for (id, result) in validator.validate_all() {
        outcome.add_result(&id, &result);
    }
    outcome.display_issues();

    let cycles = validator.detect_all_circular_dependencies();
    if !cycles.is_empty() {
        println!();
        println!("{}", "Circular dependencies:".red().bold());
        for cycle in &cycles {
            println!("  {} {}", "↻".red(), format_cycle(&cycle.cycle));
        }
    }

    if !quiet {
        outcome.display_summary("Condition check");
    }

    outcome.ensure_valid()?;
    if !cycles.is_empty() {
        bail!("{} circular dependency chain(s) found", cycles.len());
    }
    Ok(())
}

/// Validate a condition as if attached to `question`.
pub fn cmd_validate(
    papers: &[PathBuf],
    config: &Config,
    question: &str,
    condition: &str,
    json: bool,
) -> Result<()> {
    let validator = load_validator(papers, config)?;
    let condition = parse_condition(condition)?;
    let result = validator.validate_question_condition(question, &condition);
    finish(question, &result, json)
}

/// Overlay an edit on a stored paper and validate it.
pub fn cmd_quick_check(
    papers_dir: PathBuf,
    config: &Config,
    paper: &str,
    question: &str,
    condition: &str,
    json: bool,
) -> Result<()> {
    let repo = FilePaperRepository::new(papers_dir);
    let edit = ProposedEdit::new(question, paper, parse_condition(condition)?);
    let result = quick_check(&repo, &edit, config)?;
    finish(question, &result, json)
}

fn finish(question: &str, result: &ValidationResult, json: bool) -> Result<()> {
    if json {
        print_json(result)?;
    } else {
        print_result(question, result);
    }

    if !result.is_valid {
        bail!("Condition for {} is invalid", question);
    }
    Ok(())
}

fn print_result(question: &str, result: &ValidationResult) {
    if result.is_valid {
        println!("{} Condition for {} is valid", "✓".green(), question.cyan());
    } else {
        println!("{} Condition for {} is invalid", "✗".red(), question.cyan());
    }
    for error in &result.errors {
        println!("  {} {}", "✗".red(), error);
    }
    for warning in &result.warnings {
        println!("  {} {}", "⚠".yellow(), warning);
    }
}
