//! Expiry extractor tying normalization, discovery and scoring together.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::ConfigError;
use crate::models::config::ScoringConfig;
use crate::models::expiry::ExtractionResult;

use super::rules::{normalize, score_and_rank_with, CandidateLocator, FieldExtractor};
use super::{local_today, ExpiryParser};

/// Reusable expiry extractor carrying an immutable scoring configuration.
#[derive(Debug, Clone)]
pub struct ExpiryExtractor {
    config: ScoringConfig,
    locator: CandidateLocator,
}

impl ExpiryExtractor {
    /// Create an extractor with the default weights and keyword lists.
    pub fn new() -> Self {
        let config = ScoringConfig::default();
        let locator = CandidateLocator::new().with_context_radius(config.context_radius);
        Self { config, locator }
    }

    /// Create an extractor from a custom configuration.
    ///
    /// Keywords are uppercased so they line up with normalized text.
    pub fn from_config(config: ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let config = config.normalized();
        let locator = CandidateLocator::new().with_context_radius(config.context_radius);
        Ok(Self { config, locator })
    }

    /// Set the number of ranked candidates to keep (at least one).
    pub fn with_max_candidates(mut self, max: usize) -> Self {
        self.config.max_candidates = max.max(1);
        self
    }

    /// Set the context radius around each match.
    pub fn with_context_radius(mut self, radius: usize) -> Self {
        self.config.context_radius = radius;
        self.locator = self.locator.with_context_radius(radius);
        self
    }

    /// Active scoring configuration.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Extract an expiry date, using the local date when `today` is `None`.
    pub fn extract(&self, text: &str, today: Option<NaiveDate>) -> ExtractionResult {
        self.parse(text, today.unwrap_or_else(local_today))
    }
}

impl Default for ExpiryExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpiryParser for ExpiryExtractor {
    fn parse(&self, text: &str, today: NaiveDate) -> ExtractionResult {
        let normalized = normalize(text);
        let candidates = self.locator.extract_all(&normalized);
        debug!(count = candidates.len(), %today, "found date candidates");

        let result = score_and_rank_with(&candidates, today, &self.config);
        match &result.picked {
            Some(picked) => debug!(
                expiry = %picked.parsed,
                score = picked.score,
                confidence = result.confidence,
                "picked expiry date"
            ),
            None => debug!("no expiry date found"),
        }

        result
    }
}

/// Extract the most likely expiry date from OCR text.
///
/// `today` is the reference day for past/future judgments; `None` uses the
/// local wall-clock date.
pub fn extract_expiry(text: &str, today: Option<NaiveDate>) -> ExtractionResult {
    ExpiryExtractor::new().extract(text, today)
}
