//! Date parsing for label and receipt formats.

use chrono::NaiveDate;
use regex::Captures;

use super::patterns::shape_for;
use crate::models::expiry::DateFormat;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Parse a raw date string into a calendar date.
///
/// Surrounding whitespace is trimmed and commas become spaces. The five
/// shapes are tried in locator order and the first one whose shape matches
/// decides the outcome. Triples that are not real calendar dates (Feb 30,
/// month 13) yield `None`.
///
/// Numeric dates with the year last are read day first: `03-04-2025` is
/// the 3rd of April. There is no locale signal to tell otherwise.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let cleaned = clean(raw);

    DateFormat::ALL
        .iter()
        .find_map(|&format| shape_for(format).captures(&cleaned).map(|caps| (format, caps)))
        .and_then(|(format, caps)| date_from_captures(format, &caps))
}

/// Parse a raw date string with one known shape family.
pub fn parse_date_as(raw: &str, format: DateFormat) -> Option<NaiveDate> {
    let cleaned = clean(raw);
    let caps = shape_for(format).captures(&cleaned)?;
    date_from_captures(format, &caps)
}

fn clean(raw: &str) -> String {
    raw.trim().replace(',', " ")
}

fn date_from_captures(format: DateFormat, caps: &Captures<'_>) -> Option<NaiveDate> {
    let (year, month, day) = match format {
        DateFormat::YearMonthDay => (
            caps[1].parse().ok()?,
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
        ),
        DateFormat::DayMonthYear => (
            caps[3].parse().ok()?,
            caps[2].parse().ok()?,
            caps[1].parse().ok()?,
        ),
        DateFormat::DayMonthShortYear => (
            2000 + caps[3].parse::<i32>().ok()?,
            caps[2].parse().ok()?,
            caps[1].parse().ok()?,
        ),
        DateFormat::MonthNameFirst => (
            caps[3].parse().ok()?,
            month_to_number(&caps[1])?,
            caps[2].parse().ok()?,
        ),
        DateFormat::DayMonthName => (
            caps[3].parse().ok()?,
            month_to_number(&caps[2])?,
            caps[1].parse().ok()?,
        ),
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Map an English month token to 1-12.
///
/// The token must start with a standard three-letter abbreviation; any
/// trailing letters (`SEPT`, `DECEMBER`) are tolerated.
fn month_to_number(token: &str) -> Option<u32> {
    let token = token.to_ascii_uppercase();
    MONTH_ABBREVIATIONS
        .iter()
        .position(|abbr| token.starts_with(abbr))
        .map(|i| i as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_year_month_day() {
        assert_eq!(parse_date("2025-12-20"), Some(ymd(2025, 12, 20)));
        assert_eq!(parse_date("2025/1/5"), Some(ymd(2025, 1, 5)));
        assert_eq!(parse_date("2025.01.05"), Some(ymd(2025, 1, 5)));
    }

    #[test]
    fn test_parse_day_month_year() {
        assert_eq!(parse_date("20-12-2025"), Some(ymd(2025, 12, 20)));
        assert_eq!(parse_date("20/12/2025"), Some(ymd(2025, 12, 20)));
    }

    #[test]
    fn test_day_first_is_assumed() {
        assert_eq!(parse_date("03-04-2025"), Some(ymd(2025, 4, 3)));
    }

    #[test]
    fn test_two_digit_year() {
        assert_eq!(parse_date("20-12-25"), Some(ymd(2025, 12, 20)));
        assert_eq!(parse_date("1.2.99"), Some(ymd(2099, 2, 1)));
    }

    #[test]
    fn test_month_name_forms() {
        assert_eq!(parse_date("DEC 20 2025"), Some(ymd(2025, 12, 20)));
        assert_eq!(parse_date("DEC 20, 2025"), Some(ymd(2025, 12, 20)));
        assert_eq!(parse_date("DECEMBER 20, 2025"), Some(ymd(2025, 12, 20)));
        assert_eq!(parse_date("SEPT 3 2026"), Some(ymd(2026, 9, 3)));
        assert_eq!(parse_date("20 DEC 2025"), Some(ymd(2025, 12, 20)));
        assert_eq!(parse_date("1 march 2026"), Some(ymd(2026, 3, 1)));
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(parse_date("  2025-12-20\n"), Some(ymd(2025, 12, 20)));
    }

    #[test]
    fn test_invalid_calendar_dates() {
        assert_eq!(parse_date("2024-02-30"), None);
        assert_eq!(parse_date("2023-13-01"), None);
        assert_eq!(parse_date("31-04-2025"), None);
        assert_eq!(parse_date("FEB 29 2025"), None);
        assert_eq!(parse_date("0-1-25"), None);
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(parse_date("29/02/2024"), Some(ymd(2024, 2, 29)));
        assert_eq!(parse_date("29/02/23"), None);
    }

    #[test]
    fn test_unknown_shapes() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("TOTAL 12.99"), None);
        assert_eq!(parse_date("FOO 20 2025"), None);
        assert_eq!(parse_date("2025-12"), None);
    }

    #[test]
    fn test_parse_with_known_format() {
        assert_eq!(
            parse_date_as("20 DEC 2025", DateFormat::DayMonthName),
            Some(ymd(2025, 12, 20))
        );
        assert_eq!(parse_date_as("20 DEC 2025", DateFormat::MonthNameFirst), None);
        assert_eq!(
            parse_date_as("05/06/27", DateFormat::DayMonthShortYear),
            Some(ymd(2027, 6, 5))
        );
    }

    #[test]
    fn test_month_to_number() {
        assert_eq!(month_to_number("JAN"), Some(1));
        assert_eq!(month_to_number("Sept"), Some(9));
        assert_eq!(month_to_number("NOVEMBER"), Some(11));
        assert_eq!(month_to_number("XYZ"), None);
    }
}
