//! CLI entry point for condgraph.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use condgraph::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let quiet = cli.quiet;

    match cli.command {
        Commands::Check { input } => cmd::check::cmd_check(&input.papers, &config, quiet),
        Commands::Cycles { input } => cmd::analyze::cmd_cycles(&input.papers, &config, quiet),
        Commands::Deps { input, id } => cmd::analyze::cmd_deps(&input.papers, &config, &id),
        Commands::Clusters {
            input,
            strongly_connected,
        } => cmd::analyze::cmd_clusters(&input.papers, &config, strongly_connected, quiet),
        Commands::Graph {
            input,
            format,
            output,
        } => cmd::render::cmd_graph(&input.papers, &config, format, output.as_deref(), quiet),
        Commands::Report { input, json } => cmd::render::cmd_report(&input.papers, &config, json),
        Commands::Validate {
            input,
            question,
            condition,
            json,
        } => cmd::check::cmd_validate(&input.papers, &config, &question, &condition, json),
        Commands::WouldCycle { input, from, to } => {
            cmd::analyze::cmd_would_cycle(&input.papers, &config, &from, &to)
        }
        Commands::Mutual { input, a, b } => {
            cmd::analyze::cmd_mutual(&input.papers, &config, &a, &b)
        }
        Commands::QuickCheck {
            papers_dir,
            paper,
            question,
            condition,
            json,
        } => cmd::check::cmd_quick_check(
            papers_dir, &config, &paper, &question, &condition, json,
        ),
    }
}

/// Log to stderr. `--verbose` forces debug for this crate; otherwise
/// `RUST_LOG` applies, falling back to warnings only.
fn init_tracing(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("condgraph=debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
