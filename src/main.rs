//! seq-analyzer CLI entry point
//!
//! Per-position chi-squared uniformity analysis for tokens

use seq_analyzer::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
