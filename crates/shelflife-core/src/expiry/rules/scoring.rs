//! Candidate scoring and ranking.
//!
//! Each parsed candidate gets an integer score from keywords found in its
//! context window and from where its date falls relative to a reference
//! day. The weights below are the only tuning knobs of the algorithm.

use std::cmp::Ordering;

use chrono::{Months, NaiveDate};
use lazy_static::lazy_static;
use tracing::{debug, trace};

use super::dates::parse_date;
use crate::models::config::ScoringConfig;
use crate::models::expiry::{ExtractionResult, RawCandidate, ScoredCandidate};

/// Context substrings hinting at an expiry date.
pub const EXPIRY_KEYWORDS: &[&str] = &[
    "EXP", "EXPIRES", "EXPIRY", "EXPIRATION",
    "BEST BEFORE", "BEST-BEFORE", "BB", "BBD",
    "USE BY", "USE-BY",
];

/// Context substrings hinting at a receipt or order date.
pub const NON_EXPIRY_CLUES: &[&str] = &[
    "ORDER", "TOTAL", "SUBTOTAL", "TAX", "VISA", "MASTERCARD",
    "AMOUNT", "BALANCE", "AUTH", "APPROVED", "TIME", "PM", "AM",
];

/// Bonus per expiry keyword in context.
pub const EXPIRY_KEYWORD_BONUS: i32 = 3;
/// Penalty per non-expiry clue in context.
pub const NON_EXPIRY_CLUE_PENALTY: i32 = 2;
/// Penalty for a date before the reference day.
pub const PAST_DATE_PENALTY: i32 = 4;
/// Penalty for a date beyond the far-future horizon.
pub const FAR_FUTURE_PENALTY: i32 = 1;
/// Far-future horizon in calendar years.
pub const FAR_FUTURE_YEARS: u32 = 3;
/// Offset added to the picked score before mapping to confidence.
pub const CONFIDENCE_OFFSET: i32 = 2;
/// Divisor mapping the offset score onto `[0, 1]`.
pub const CONFIDENCE_DIVISOR: i32 = 8;
/// Ranked candidates kept in a result.
pub const MAX_CANDIDATES: usize = 5;

lazy_static! {
    static ref DEFAULT_SCORING: ScoringConfig = ScoringConfig::default();
}

/// Score, rank and select among candidates using the default weights.
pub fn score_and_rank(candidates: &[RawCandidate], today: NaiveDate) -> ExtractionResult {
    score_and_rank_with(candidates, today, &DEFAULT_SCORING)
}

/// Score, rank and select among candidates.
///
/// Candidates whose raw text does not parse into a calendar date are
/// dropped. The rest are sorted by score, then by date, both descending;
/// the date tie-break is arbitrary but fixed. Keywords in `config` are
/// matched literally against the uppercased context, so they must be
/// uppercase themselves (see [`ScoringConfig::normalized`]).
pub fn score_and_rank_with(
    candidates: &[RawCandidate],
    today: NaiveDate,
    config: &ScoringConfig,
) -> ExtractionResult {
    let mut scored: Vec<ScoredCandidate> = candidates
        .iter()
        .filter_map(|candidate| {
            let Some(parsed) = parse_date(&candidate.raw) else {
                trace!(raw = %candidate.raw, "dropping unparseable candidate");
                return None;
            };
            let score = score_candidate(&candidate.context, parsed, today, config);
            debug!(raw = %candidate.raw, %parsed, score, "scored candidate");

            Some(ScoredCandidate {
                raw: candidate.raw.clone(),
                parsed,
                score,
                context: candidate.context.trim().to_string(),
            })
        })
        .collect();

    scored.sort_by(rank_order);
    scored.truncate(config.max_candidates);

    let Some(picked) = scored.first().cloned() else {
        return ExtractionResult::empty();
    };

    ExtractionResult {
        expiry_date: Some(picked.parsed),
        confidence: confidence_for(picked.score, config),
        picked: Some(picked),
        candidates: scored,
    }
}

/// Score one parsed date from its context and its distance to `today`.
pub fn score_candidate(
    context: &str,
    parsed: NaiveDate,
    today: NaiveDate,
    config: &ScoringConfig,
) -> i32 {
    let mut score: i32 = 0;

    for keyword in &config.expiry_keywords {
        if context.contains(keyword.as_str()) {
            score = score.saturating_add(config.keyword_bonus);
        }
    }

    for clue in &config.non_expiry_clues {
        if context.contains(clue.as_str()) {
            score = score.saturating_sub(config.clue_penalty);
        }
    }

    if parsed < today {
        score = score.saturating_sub(config.past_penalty);
    }

    // Same month and day, N years on; Feb 29 falls back to Feb 28.
    let horizon = today.checked_add_months(Months::new(config.far_future_years.saturating_mul(12)));
    if horizon.is_some_and(|horizon| parsed > horizon) {
        score = score.saturating_sub(config.far_future_penalty);
    }

    score
}

/// Linear mapping of a score onto `[0, 1]`. A calibration, not a probability.
///
/// A zero divisor can only come from an unvalidated config; an undefined
/// ratio maps to `0.0`.
pub fn confidence_for(score: i32, config: &ScoringConfig) -> f64 {
    let offset = f64::from(score) + f64::from(config.confidence_offset);
    let confidence = offset / f64::from(config.confidence_divisor);
    if confidence.is_nan() {
        return 0.0;
    }
    confidence.clamp(0.0, 1.0)
}

fn rank_order(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score.cmp(&a.score).then_with(|| b.parsed.cmp(&a.parsed))
}
