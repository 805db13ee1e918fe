//! Regex patterns for date discovery on normalized (uppercased) label text.
//!
//! The `DATE_*` patterns locate candidates inside free text and are
//! word-bounded so that digits inside longer numeric runs (phone numbers,
//! card numbers, prices) are not captured. The `SHAPE_*` patterns are the
//! anchored counterparts used by the parser to re-validate a raw match.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::expiry::DateFormat;

lazy_static! {
    // 2025-12-20, 2025/12/20, 2025.12.20
    pub static ref DATE_YMD: Regex = Regex::new(
        r"\b(20[0-9]{2})[-/.]([0-9]{1,2})[-/.]([0-9]{1,2})\b"
    ).unwrap();

    // 20-12-2025, 20/12/2025
    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b([0-9]{1,2})[-/.]([0-9]{1,2})[-/.](20[0-9]{2})\b"
    ).unwrap();

    // 20-12-25, 20/12/25
    pub static ref DATE_DMY_SHORT: Regex = Regex::new(
        r"\b([0-9]{1,2})[-/.]([0-9]{1,2})[-/.]([0-9]{2})\b"
    ).unwrap();

    // DEC 20 2025, DECEMBER 20, 2025
    pub static ref DATE_MONTH_FIRST: Regex = Regex::new(
        r"\b(JAN|FEB|MAR|APR|MAY|JUN|JUL|AUG|SEP|SEPT|OCT|NOV|DEC)[A-Z]*\s+([0-9]{1,2}),?\s+(20[0-9]{2})\b"
    ).unwrap();

    // 20 DEC 2025
    pub static ref DATE_DAY_MONTH_NAME: Regex = Regex::new(
        r"\b([0-9]{1,2})\s+(JAN|FEB|MAR|APR|MAY|JUN|JUL|AUG|SEP|SEPT|OCT|NOV|DEC)[A-Z]*\s+(20[0-9]{2})\b"
    ).unwrap();

    // Anchored shapes for parsing. Commas are already replaced by spaces.
    pub static ref SHAPE_YMD: Regex = Regex::new(
        r"^(20[0-9]{2})[-/.]([0-9]{1,2})[-/.]([0-9]{1,2})$"
    ).unwrap();

    pub static ref SHAPE_DMY: Regex = Regex::new(
        r"^([0-9]{1,2})[-/.]([0-9]{1,2})[-/.](20[0-9]{2})$"
    ).unwrap();

    pub static ref SHAPE_DMY_SHORT: Regex = Regex::new(
        r"^([0-9]{1,2})[-/.]([0-9]{1,2})[-/.]([0-9]{2})$"
    ).unwrap();

    pub static ref SHAPE_MONTH_FIRST: Regex = Regex::new(
        r"(?i)^([A-Z]{3,})\s+([0-9]{1,2})\s+([0-9]{4})$"
    ).unwrap();

    pub static ref SHAPE_DAY_MONTH_NAME: Regex = Regex::new(
        r"(?i)^([0-9]{1,2})\s+([A-Z]{3,})\s+([0-9]{4})$"
    ).unwrap();

    /// Locator patterns in scan order.
    pub static ref LOCATOR_PATTERNS: [(DateFormat, &'static Regex); 5] = [
        (DateFormat::YearMonthDay, &*DATE_YMD),
        (DateFormat::DayMonthYear, &*DATE_DMY),
        (DateFormat::DayMonthShortYear, &*DATE_DMY_SHORT),
        (DateFormat::MonthNameFirst, &*DATE_MONTH_FIRST),
        (DateFormat::DayMonthName, &*DATE_DAY_MONTH_NAME),
    ];
}

/// Anchored shape used to parse a raw string of the given family.
pub fn shape_for(format: DateFormat) -> &'static Regex {
    match format {
        DateFormat::YearMonthDay => &*SHAPE_YMD,
        DateFormat::DayMonthYear => &*SHAPE_DMY,
        DateFormat::DayMonthShortYear => &*SHAPE_DMY_SHORT,
        DateFormat::MonthNameFirst => &*SHAPE_MONTH_FIRST,
        DateFormat::DayMonthName => &*SHAPE_DAY_MONTH_NAME,
    }
}
