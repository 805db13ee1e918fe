//! Rule-based stages of the expiry pipeline.

pub mod normalize;
pub mod patterns;
pub mod candidates;
pub mod dates;
pub mod scoring;

pub use normalize::normalize;
pub use candidates::{find_candidates, CandidateLocator, CONTEXT_RADIUS};
pub use dates::{parse_date, parse_date_as};
pub use scoring::{confidence_for, score_and_rank, score_and_rank_with, score_candidate};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}
