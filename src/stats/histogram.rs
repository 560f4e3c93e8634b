//! Per-position symbol histograms
//!
//! Transposes a batch of equal-length tokens into columns and counts the
//! symbols observed in each column.

use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Symbol counts for one character position, keyed by symbol
pub type Histogram = BTreeMap<char, usize>;

/// Build one histogram per character position across all tokens.
///
/// Every token must have the same length (in chars) as the first one.
/// Histograms are returned in position order and each one sums to the
/// number of tokens.
///
/// # Example
///
/// ```
/// use seq_analyzer::stats::build_histograms;
///
/// let histograms = build_histograms(&["abc", "bca"]).unwrap();
/// assert_eq!(histograms[0][&'a'], 1);
/// assert_eq!(histograms[0][&'b'], 1);
/// ```
pub fn build_histograms<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Histogram>> {
    let expected = token_length(tokens)?;
    let mut histograms = vec![Histogram::new(); expected];

    for token in tokens {
        for (position, symbol) in token.as_ref().chars().enumerate() {
            *histograms[position].entry(symbol).or_insert(0) += 1;
        }
    }

    Ok(histograms)
}

/// Validate the batch and return the common token length.
///
/// Fails with `EmptyBatch` for no tokens and `InvalidInput` for the first
/// token whose length differs from the first token's.
pub fn token_length<S: AsRef<str>>(tokens: &[S]) -> Result<usize> {
    let first = tokens.first().ok_or(Error::EmptyBatch)?;
    let expected = first.as_ref().chars().count();

    for (index, token) in tokens.iter().enumerate().skip(1) {
        let token = token.as_ref();
        let length = token.chars().count();
        if length != expected {
            return Err(Error::InvalidInput {
                index,
                token: token.to_string(),
                length,
                expected,
            });
        }
    }

    Ok(expected)
}
