//! Expiry date extraction module.

mod extractor;
pub mod rules;

pub use extractor::{extract_expiry, ExpiryExtractor};

use chrono::NaiveDate;

use crate::error::{Result, ShelflifeError};
use crate::models::expiry::ExtractionResult;

/// Trait for expiry date parsers.
pub trait ExpiryParser {
    /// Extract the most likely expiry date from recognized text, judging
    /// past and future against `today`.
    fn parse(&self, text: &str, today: NaiveDate) -> ExtractionResult;
}

/// Parse a caller-supplied reference date in `YYYY-MM-DD` form.
pub fn parse_today(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| ShelflifeError::InvalidDate {
        value: value.to_string(),
    })
}

/// Wall-clock date in the local time zone.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_today() {
        assert_eq!(
            parse_today("2024-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(
            parse_today(" 2024-02-29 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_parse_today_rejects_malformed() {
        for value in ["", "2024-13-01", "2023-02-29", "01/02/2024", "tomorrow"] {
            assert!(
                matches!(parse_today(value), Err(ShelflifeError::InvalidDate { .. })),
                "{value} should be rejected"
            );
        }
    }
}
