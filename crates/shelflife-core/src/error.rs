//! Error types for the shelflife-core library.
//!
//! The extraction engine itself never fails: text without a usable date is
//! a well-formed, empty result. Errors only arise at the boundary, when a
//! caller hands over a malformed reference date or a broken configuration.

use thiserror::Error;

/// Main error type for the shelflife library.
#[derive(Error, Debug)]
pub enum ShelflifeError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A caller-supplied date could not be understood.
    #[error("invalid date {value:?}: expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while validating a scoring configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The confidence divisor must be strictly positive.
    #[error("confidence divisor must be positive, got {0}")]
    NonPositiveDivisor(i32),

    /// At least one candidate has to be kept.
    #[error("max_candidates must be at least 1")]
    ZeroCandidates,

    /// A keyword list contains an empty entry.
    #[error("empty entry in keyword list {0}")]
    EmptyKeyword(&'static str),
}

/// Result type for the shelflife library.
pub type Result<T> = std::result::Result<T, ShelflifeError>;
