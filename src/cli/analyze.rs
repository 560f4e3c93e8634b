//! Analyze command handler
//!
//! Reads a token batch and reports per-position uniformity.

use crate::config::{validate_significance, Config};
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter};
use crate::report::AnalysisReport;
use crate::tokens::read_tokens_from_path;
use clap::Args;
use tracing::info;

/// Analyze command arguments
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Token file ("-" for stdin)
    #[arg(long, short = 'i')]
    pub input: Option<String>,

    /// Token type to select from the record dump
    #[arg(long, short = 't')]
    pub r#type: Option<String>,

    /// Input is one token per line instead of a record dump
    #[arg(long, conflicts_with = "type")]
    pub raw: bool,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Significance level for flagging low positions
    #[arg(long, short = 's')]
    pub significance: Option<f64>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the analyze command
pub fn run(args: AnalyzeArgs) -> Result<()> {
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    let config = Config::load()?;

    // Command-line values override config defaults
    let input = args.input.unwrap_or(config.defaults.input.clone());
    let token_type = args.r#type.unwrap_or(config.defaults.token_type.clone());
    let format = args.format.unwrap_or(config.defaults.format.clone());
    let significance =
        validate_significance(args.significance.unwrap_or(config.analysis.significance))?;

    let formatter = get_formatter(&format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;

    let tokens = read_tokens_from_path(&input, &token_type, args.raw)?;
    let label = if args.raw { "raw" } else { token_type.as_str() };
    let report = AnalysisReport::analyze(&tokens, label, significance)?;

    let output = formatter.format(&report, &config)?;

    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        info!(path = %path, "report written");
        eprintln!("Output written to {}", path);
    } else {
        print!("{}", output);
    }

    Ok(())
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:6} - {}", format.name, format.description);
    }
}
