//! Human-readable text output formatter
//!
//! Prints each position's p-value followed by its histogram as a bar chart.

use crate::config::Config;
use crate::error::Result;
use crate::format::OutputFormatter;
use crate::report::AnalysisReport;
use crate::stats::Histogram;

const BAR_CHAR: char = '*';

/// Text formatter - outputs p-values and histogram bar charts
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "p-values with histogram bar charts"
    }

    fn format(&self, report: &AnalysisReport, config: &Config) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("seq-analyzer report ({})\n", report.id));
        output.push_str(&format!("Token type: {}\n", report.token_type));
        output.push_str(&format!(
            "Tokens: {} x {} chars\n",
            report.batch_size, report.token_length
        ));
        output.push_str(&format!("Significance: {}\n", report.significance));

        for position in &report.positions {
            let flag = if position.p_value < report.significance {
                " [LOW]"
            } else {
                ""
            };
            output.push_str(&format!(
                "\nPosition {}: p = {:.4} (x2 = {:.3}, df = {}){}\n",
                position.position,
                position.p_value,
                position.chi_squared,
                position.degrees_of_freedom,
                flag
            ));
            output.push_str(&chart(&position.histogram, config.analysis.max_bar_width));
        }

        let low = report.low_positions();
        output.push_str(&format!(
            "\n{} of {} positions below {}\n",
            low.len(),
            report.positions.len(),
            report.significance
        ));

        Ok(output)
    }
}

/// Render a histogram as one `symbol   ***` line per symbol, in symbol order.
///
/// With `max_width > 0`, bars are scaled so the longest is `max_width`; any
/// non-zero count keeps at least one mark.
pub fn chart(histogram: &Histogram, max_width: usize) -> String {
    let largest = histogram.values().copied().max().unwrap_or(0);
    let scale = max_width > 0 && largest > max_width;

    let mut output = String::new();
    for (symbol, &count) in histogram {
        let width = if scale {
            ((count * max_width) / largest).max(usize::from(count > 0))
        } else {
            count
        };
        let bar = BAR_CHAR.to_string().repeat(width);
        output.push_str(&format!("{}   {}\n", symbol, bar));
    }
    output
}
