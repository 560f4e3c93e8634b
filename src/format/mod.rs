//! Output formatters
//!
//! Provides trait-based output formatting for analysis reports.

pub mod json;
pub mod text;

use crate::config::Config;
use crate::error::Result;
use crate::report::AnalysisReport;
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format the analysis report
    ///
    /// # Arguments
    /// * `report` - The analysis report to format
    /// * `config` - Application config (bar width, etc.)
    fn format(&self, report: &AnalysisReport, config: &Config) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    let formatters: [&dyn OutputFormatter; 2] = [&json::JsonFormatter, &text::TextFormatter];

    formatters
        .iter()
        .map(|f| FormatInfo {
            name: f.name().to_string(),
            description: f.description().to_string(),
        })
        .collect()
}
