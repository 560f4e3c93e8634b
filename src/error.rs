//! Error types for seq-analyzer

use thiserror::Error;

/// Main error type for seq-analyzer operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Empty batch: at least one token is required")]
    EmptyBatch,

    #[error("Invalid input: token {index} ({token:?}) has length {length}, expected {expected}")]
    InvalidInput {
        index: usize,
        token: String,
        length: usize,
        expected: usize,
    },

    #[error("Malformed record on line {line}: {content}")]
    MalformedRecord { line: usize, content: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for seq-analyzer operations
pub type Result<T> = std::result::Result<T, Error>;
