//! Data models for shelflife.

pub mod config;
pub mod expiry;

pub use config::{OutputConfig, ScoringConfig, ShelflifeConfig};
pub use expiry::{DateFormat, ExtractionResult, RawCandidate, ScoredCandidate};
