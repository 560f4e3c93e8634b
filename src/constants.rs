//! Centralized constants for the seq-analyzer crate
//!
//! Numeric constants shared by the chi-squared approximation. Polynomial
//! coefficients stay local to the functions that use them.

/// Chi-squared / normal distribution constants
pub mod chisq {
    /// Largest `x` for which `exp(-x)` is evaluated directly
    pub const BIG_X: f64 = 20.0;

    /// Maximum meaningful z value; beyond this the normal tail saturates
    pub const Z_MAX: f64 = 6.0;

    /// log(sqrt(pi))
    pub const LOG_SQRT_PI: f64 = 0.5723649429247000870717135;

    /// 1 / sqrt(pi)
    pub const I_SQRT_PI: f64 = 0.5641895835477562869480795;
}

/// Record format of token dumps
pub mod record {
    /// Field separator of a record line
    pub const FIELD_SEPARATOR: char = '"';

    /// Index of the token type once a line is split on the separator
    pub const TYPE_FIELD: usize = 1;

    /// Index of the token value once a line is split on the separator
    pub const VALUE_FIELD: usize = 3;
}

/// Input conventions
pub mod input {
    /// Path value meaning "read from standard input"
    pub const STDIN_PATH: &str = "-";
}
