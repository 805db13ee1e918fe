//! Data models produced by the expiry extraction pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Shape family a date candidate was matched with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// `2025-12-20`, `2025/12/20`, `2025.12.20`.
    YearMonthDay,
    /// `20-12-2025` (day first, four-digit year).
    DayMonthYear,
    /// `20-12-25` (day first, two-digit year in the 2000s).
    DayMonthShortYear,
    /// `DEC 20 2025`, `DECEMBER 20, 2025`.
    MonthNameFirst,
    /// `20 DEC 2025`.
    DayMonthName,
}

impl DateFormat {
    /// Every family, in the order the locator and the parser try them.
    pub const ALL: [DateFormat; 5] = [
        DateFormat::YearMonthDay,
        DateFormat::DayMonthYear,
        DateFormat::DayMonthShortYear,
        DateFormat::MonthNameFirst,
        DateFormat::DayMonthName,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DateFormat::YearMonthDay => "year_month_day",
            DateFormat::DayMonthYear => "day_month_year",
            DateFormat::DayMonthShortYear => "day_month_short_year",
            DateFormat::MonthNameFirst => "month_name_first",
            DateFormat::DayMonthName => "day_month_name",
        }
    }
}

/// A date-shaped span found in normalized text, not yet parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCandidate {
    /// Exact matched substring.
    pub raw: String,
    /// Character offset of the match start in the normalized text.
    pub start: usize,
    /// Character offset one past the match end.
    pub end: usize,
    /// Surrounding text window used for keyword scoring.
    pub context: String,
    /// Pattern family that produced the match.
    pub format: DateFormat,
}

/// A candidate that parsed into a real calendar date and was scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// Exact matched substring.
    pub raw: String,
    /// Parsed date, serialized as `YYYY-MM-DD`.
    pub parsed: NaiveDate,
    /// Heuristic score; higher means more likely to be the expiry date.
    pub score: i32,
    /// Trimmed context window.
    pub context: String,
}

/// Outcome of one extraction call.
///
/// `picked` is always `candidates[0]` when present, and `expiry_date` is
/// set exactly when `picked` is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Best guess at the expiry date.
    pub expiry_date: Option<NaiveDate>,

    /// Heuristic confidence in `[0.0, 1.0]`. A fixed linear mapping of the
    /// picked score, not a probability.
    pub confidence: f64,

    /// The winning candidate.
    pub picked: Option<ScoredCandidate>,

    /// Top-ranked candidates, best first.
    pub candidates: Vec<ScoredCandidate>,
}

impl ExtractionResult {
    /// Result for text with no usable date.
    pub fn empty() -> Self {
        Self {
            expiry_date: None,
            confidence: 0.0,
            picked: None,
            candidates: Vec::new(),
        }
    }

    /// Whether an expiry date was picked.
    pub fn is_found(&self) -> bool {
        self.picked.is_some()
    }

    /// Picked date formatted as `YYYY-MM-DD`.
    pub fn expiry_iso(&self) -> Option<String> {
        self.expiry_date.map(|d| d.format("%Y-%m-%d").to_string())
    }
}

impl Default for ExtractionResult {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_result_serializes_with_iso_dates() {
        let picked = ScoredCandidate {
            raw: "2099-12-31".to_string(),
            parsed: NaiveDate::from_ymd_opt(2099, 12, 31).unwrap(),
            score: 2,
            context: "EXP 2099-12-31".to_string(),
        };
        let result = ExtractionResult {
            expiry_date: Some(picked.parsed),
            confidence: 0.5,
            picked: Some(picked.clone()),
            candidates: vec![picked],
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["expiry_date"], "2099-12-31");
        assert_eq!(json["picked"]["parsed"], "2099-12-31");
        assert_eq!(json["candidates"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_empty_result_serializes_nulls() {
        let json = serde_json::to_value(ExtractionResult::empty()).unwrap();
        assert!(json["expiry_date"].is_null());
        assert!(json["picked"].is_null());
        assert_eq!(json["confidence"], 0.0);
        assert_eq!(json["candidates"], serde_json::json!([]));
    }

    #[test]
    fn test_format_names() {
        assert_eq!(DateFormat::MonthNameFirst.as_str(), "month_name_first");
        assert_eq!(
            serde_json::to_string(&DateFormat::DayMonthShortYear).unwrap(),
            "\"day_month_short_year\""
        );
    }
}
