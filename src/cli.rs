//! CLI argument definitions for condgraph.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "condgraph")]
#[command(version)]
#[command(
    about = "Dependency and cycle validation for questionnaire display conditions",
    long_about = None
)]
#[command(
    after_help = "EXAMPLES:\n    condgraph check -p survey.yaml\n    condgraph graph -p survey.yaml --format dot > deps.dot\n    condgraph validate -p survey.yaml --question q3 --condition '{\"question_id\":\"q1\",\"selected_option\":\"yes\"}'"
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug detail to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to .condgraph/config.yaml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Paper files making up one snapshot.
#[derive(Args, Debug, Clone)]
pub struct PaperArgs {
    /// Paper file (YAML or JSON); repeat to combine papers
    #[arg(short = 'p', long = "paper", value_name = "FILE", required = true)]
    pub papers: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GraphFormat {
    Mermaid,
    Dot,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate every stored condition and scan for cycles
    Check {
        #[command(flatten)]
        input: PaperArgs,
    },
    /// List every circular dependency
    Cycles {
        #[command(flatten)]
        input: PaperArgs,
    },
    /// Show the dependency chain of one question
    Deps {
        #[command(flatten)]
        input: PaperArgs,
        /// Question id
        id: String,
    },
    /// List clusters of related questions
    Clusters {
        #[command(flatten)]
        input: PaperArgs,
        /// Only report mutually reachable groups
        #[arg(long)]
        strongly_connected: bool,
    },
    /// Render the dependency graph
    Graph {
        #[command(flatten)]
        input: PaperArgs,
        /// Output format
        #[arg(long, value_enum, default_value = "mermaid")]
        format: GraphFormat,
        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Summarize complexity, cycles and recommendations
    Report {
        #[command(flatten)]
        input: PaperArgs,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Validate a proposed condition for one question
    Validate {
        #[command(flatten)]
        input: PaperArgs,
        /// Question the condition would be attached to
        #[arg(long)]
        question: String,
        /// Condition as JSON
        #[arg(long)]
        condition: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check whether adding a dependency edge would create a cycle
    WouldCycle {
        #[command(flatten)]
        input: PaperArgs,
        /// Question that would gain the dependency
        #[arg(long)]
        from: String,
        /// Question it would depend on
        #[arg(long)]
        to: String,
    },
    /// Check whether two questions depend on each other
    Mutual {
        #[command(flatten)]
        input: PaperArgs,
        a: String,
        b: String,
    },
    /// Validate an edit against a paper in a papers directory
    QuickCheck {
        /// Directory of <paper_id>.yaml|yml|json files
        #[arg(long, value_name = "DIR")]
        papers_dir: PathBuf,
        /// Paper id
        #[arg(long)]
        paper: String,
        /// Question id (new ids are appended to the paper)
        #[arg(long)]
        question: String,
        /// Condition as JSON
        #[arg(long)]
        condition: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
