//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::expiry::rules::scoring::{
    CONFIDENCE_DIVISOR, CONFIDENCE_OFFSET, EXPIRY_KEYWORDS, EXPIRY_KEYWORD_BONUS,
    FAR_FUTURE_PENALTY, FAR_FUTURE_YEARS, MAX_CANDIDATES, NON_EXPIRY_CLUES,
    NON_EXPIRY_CLUE_PENALTY, PAST_DATE_PENALTY,
};
use crate::expiry::rules::candidates::CONTEXT_RADIUS;

/// Main configuration for shelflife.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelflifeConfig {
    /// Candidate scoring configuration.
    pub scoring: ScoringConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Heuristic weights and keyword lists used to rank date candidates.
///
/// Penalties are stored as positive magnitudes and subtracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Substrings that suggest a nearby date is an expiry date.
    pub expiry_keywords: Vec<String>,

    /// Substrings that suggest a nearby date is something else
    /// (order date, payment timestamp).
    pub non_expiry_clues: Vec<String>,

    /// Added once per expiry keyword found in the context.
    pub keyword_bonus: i32,

    /// Subtracted once per non-expiry clue found in the context.
    pub clue_penalty: i32,

    /// Subtracted when the date lies before the reference date.
    pub past_penalty: i32,

    /// Subtracted when the date lies more than `far_future_years` ahead.
    pub far_future_penalty: i32,

    /// Horizon for the far-future penalty, in calendar years.
    pub far_future_years: u32,

    /// Added to the picked score before dividing.
    pub confidence_offset: i32,

    /// Divisor mapping the offset score onto `[0, 1]`.
    pub confidence_divisor: i32,

    /// Number of ranked candidates kept in the result.
    pub max_candidates: usize,

    /// Characters of context captured on each side of a match.
    pub context_radius: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            expiry_keywords: EXPIRY_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            non_expiry_clues: NON_EXPIRY_CLUES.iter().map(|s| s.to_string()).collect(),
            keyword_bonus: EXPIRY_KEYWORD_BONUS,
            clue_penalty: NON_EXPIRY_CLUE_PENALTY,
            past_penalty: PAST_DATE_PENALTY,
            far_future_penalty: FAR_FUTURE_PENALTY,
            far_future_years: FAR_FUTURE_YEARS,
            confidence_offset: CONFIDENCE_OFFSET,
            confidence_divisor: CONFIDENCE_DIVISOR,
            max_candidates: MAX_CANDIDATES,
            context_radius: CONTEXT_RADIUS,
        }
    }
}

impl ScoringConfig {
    /// Check that the configuration can produce meaningful results.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.confidence_divisor <= 0 {
            return Err(ConfigError::NonPositiveDivisor(self.confidence_divisor));
        }
        if self.max_candidates == 0 {
            return Err(ConfigError::ZeroCandidates);
        }
        if self.expiry_keywords.iter().any(|k| k.is_empty()) {
            return Err(ConfigError::EmptyKeyword("expiry_keywords"));
        }
        if self.non_expiry_clues.iter().any(|k| k.is_empty()) {
            return Err(ConfigError::EmptyKeyword("non_expiry_clues"));
        }
        Ok(())
    }

    /// Copy with every keyword uppercased, matching normalized context.
    pub fn normalized(mut self) -> Self {
        for keyword in self
            .expiry_keywords
            .iter_mut()
            .chain(self.non_expiry_clues.iter_mut())
        {
            keyword.make_ascii_uppercase();
        }
        self
    }
}

/// Output configuration for front ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty_json: bool,

    /// Echo the recognized text alongside the result.
    pub include_text: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty_json: true,
            include_text: true,
        }
    }
}

impl ShelflifeConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.scoring.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
