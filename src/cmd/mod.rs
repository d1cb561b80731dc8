//! Command module structure for the condgraph CLI

use anyhow::{Context, Result};
use std::path::PathBuf;

use condgraph::config::Config;
use condgraph::question::{load_snapshot, Condition};
use condgraph::ConditionValidator;

pub mod analyze;
pub mod check;
pub mod render;
pub mod validate;

/// Load the given paper files into one validator.
pub fn load_validator(papers: &[PathBuf], config: &Config) -> Result<ConditionValidator> {
    let questions = load_snapshot(papers)?;
    ConditionValidator::with_config(questions, config.clone())
}

/// Parse a condition given on the command line as JSON.
pub fn parse_condition(json: &str) -> Result<Condition> {
    serde_json::from_str(json).with_context(|| format!("Invalid condition JSON: {}", json))
}

/// Pretty-print a serializable value as JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
