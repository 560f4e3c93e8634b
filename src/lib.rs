//! seq-analyzer: Sequence Analyzer for Tokens
//!
//! A library and CLI tool for checking whether a batch of fixed-length tokens
//! (session nonces, auth tokens, ...) looks like the output of a uniform
//! random generator, one character position at a time.
//!
//! ## Features
//!
//! - Column-wise symbol histograms across a token batch
//! - Chi-squared goodness-of-fit per position against a uniform source
//! - Self-contained chi-squared tail probability approximation
//! - Record dump parsing, text bar charts and JSON reports
//!
//! ## Quick Start
//!
//! ```rust
//! use seq_analyzer::stats::character_count_tester;
//!
//! let tokens = ["abc", "bca"];
//! let results = character_count_tester(&tokens).unwrap();
//!
//! for result in &results {
//!     println!("position {}: p = {:.4}", result.position, result.p_value);
//! }
//! assert_eq!(results.len(), 3);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod report;
pub mod stats;
pub mod tokens;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use report::AnalysisReport;
pub use stats::{character_count_tester, pochisq, Histogram, PositionResult};
