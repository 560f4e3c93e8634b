//! Token uniformity statistics
//!
//! Chi-squared tests of per-position symbol distributions:
//! - `histogram`: column-wise symbol counts across a token batch
//! - `chisq`: chi-squared right-tail probability approximation
//! - `uniformity`: per-position goodness-of-fit test against a uniform source

pub mod chisq;
pub mod histogram;
pub mod uniformity;

pub use chisq::{pochisq, poz};
pub use histogram::{build_histograms, token_length, Histogram};
pub use uniformity::{character_count_tester, test_position, PositionResult};
