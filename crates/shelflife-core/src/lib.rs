//! Core library for extracting expiry dates from OCR text.
//!
//! This crate provides:
//! - OCR text normalization (uppercasing, digit/letter confusion repair)
//! - Date candidate discovery across numeric and month-name formats
//! - Calendar-validated date parsing
//! - Keyword and date-based scoring that ranks candidates and picks the
//!   most likely expiry date with a bounded confidence value
//!
//! The engine performs no I/O and keeps no state between calls.
//!
//! ```
//! use chrono::NaiveDate;
//! use shelflife_core::extract_expiry;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let result = extract_expiry("BEST BEFORE 15/06/2025", Some(today));
//! assert_eq!(result.expiry_date, NaiveDate::from_ymd_opt(2025, 6, 15));
//! ```

pub mod error;
pub mod models;
pub mod expiry;

pub use error::{ConfigError, Result, ShelflifeError};
pub use models::config::{OutputConfig, ScoringConfig, ShelflifeConfig};
pub use models::expiry::{DateFormat, ExtractionResult, RawCandidate, ScoredCandidate};
pub use expiry::{extract_expiry, local_today, parse_today, ExpiryExtractor, ExpiryParser};
pub use expiry::rules::{
    find_candidates, normalize, parse_date, parse_date_as, score_and_rank, CandidateLocator,
};
