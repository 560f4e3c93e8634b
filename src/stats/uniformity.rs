//! Per-position uniformity test
//!
//! Runs a chi-squared goodness-of-fit test on every character position of a
//! token batch, against a uniform distribution over the symbols observed at
//! that position.

use super::chisq::pochisq;
use super::histogram::{build_histograms, Histogram};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Outcome of the chi-squared test for one character position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionResult {
    /// Zero-based character position
    pub position: usize,

    /// Probability that a uniform source produces a statistic at least this
    /// large (0-1, low values suggest non-uniformity)
    pub p_value: f64,

    /// Chi-squared statistic of observed vs expected counts
    pub chi_squared: f64,

    /// Number of distinct symbols observed, minus one
    pub degrees_of_freedom: usize,

    /// Observed symbol counts at this position
    pub histogram: Histogram,
}

/// Test every character position of `tokens` for uniformity.
///
/// Returns one result per position, in position order. Fails with
/// `EmptyBatch` or `InvalidInput` when the batch is empty or the token
/// lengths differ.
pub fn character_count_tester<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<PositionResult>> {
    let histograms = build_histograms(tokens)?;
    let batch_size = tokens.len();

    Ok(histograms
        .into_iter()
        .enumerate()
        .map(|(position, histogram)| test_position(position, histogram, batch_size))
        .collect())
}

/// Chi-squared test of a single position's histogram.
///
/// The expected count is `batch_size / distinct_symbols`, i.e. uniform over
/// the symbols actually observed, not over a fixed alphabet.
pub fn test_position(position: usize, histogram: Histogram, batch_size: usize) -> PositionResult {
    let char_set_size = histogram.len();

    // A single observed symbol leaves zero degrees of freedom. The column is
    // as far from random as it gets, but the test has nothing to compare and
    // scores it 1.0 ("cannot reject uniformity").
    if char_set_size <= 1 {
        warn!(position, "single symbol at position, uniformity test is degenerate");
        return PositionResult {
            position,
            p_value: 1.0,
            chi_squared: 0.0,
            degrees_of_freedom: 0,
            histogram,
        };
    }

    let df = char_set_size - 1;
    let expected = batch_size as f64 / char_set_size as f64;

    let chi_squared: f64 = histogram
        .values()
        .map(|&count| {
            let diff = count as f64 - expected;
            diff * diff / expected
        })
        .sum();

    let p_value = pochisq(chi_squared, df);

    debug!(position, df, chi_squared, p_value, "tested position");

    PositionResult {
        position,
        p_value,
        chi_squared,
        degrees_of_freedom: df,
        histogram,
    }
}
