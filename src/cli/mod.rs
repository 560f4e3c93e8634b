//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod analyze;
pub mod config;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Per-position chi-squared uniformity analysis for tokens
#[derive(Parser)]
#[command(name = "seq-analyzer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a batch of tokens for per-position uniformity
    Analyze(analyze::AnalyzeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so reports on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Analyze(args) => analyze::run(args),
        Commands::Config(args) => config::run(args),
    }
}
