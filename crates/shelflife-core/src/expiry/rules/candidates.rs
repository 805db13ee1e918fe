//! Date candidate discovery.

use tracing::trace;

use super::patterns::LOCATOR_PATTERNS;
use super::FieldExtractor;
use crate::models::expiry::RawCandidate;

/// Characters of context captured on each side of a match.
pub const CONTEXT_RADIUS: usize = 40;

/// Scans normalized text for date-shaped substrings.
///
/// Every pattern family is applied independently, so the same region may
/// yield several overlapping candidates. They are kept as they are; the
/// scorer treats each one on its own.
#[derive(Debug, Clone, Copy)]
pub struct CandidateLocator {
    context_radius: usize,
}

impl CandidateLocator {
    pub fn new() -> Self {
        Self {
            context_radius: CONTEXT_RADIUS,
        }
    }

    /// Set how many characters of context to keep on each side of a match.
    pub fn with_context_radius(mut self, radius: usize) -> Self {
        self.context_radius = radius;
        self
    }
}

impl Default for CandidateLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CandidateLocator {
    type Output = RawCandidate;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for (format, pattern) in LOCATOR_PATTERNS.iter() {
            for m in pattern.find_iter(text) {
                let context =
                    context_window(text, m.start(), m.end(), self.context_radius).to_ascii_uppercase();
                let start = text[..m.start()].chars().count();
                trace!(raw = m.as_str(), format = format.as_str(), start, "date candidate");
                results.push(RawCandidate {
                    raw: m.as_str().to_string(),
                    start,
                    end: start + m.as_str().chars().count(),
                    context,
                    format: *format,
                });
            }
        }

        results
    }
}

/// Find all date candidates in normalized text, with the default window.
pub fn find_candidates(text: &str) -> Vec<RawCandidate> {
    CandidateLocator::new().extract_all(text)
}

/// Slice of `text` spanning `radius` characters before `start` and after
/// `end`, clamped to the text bounds.
fn context_window(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let from = text[..start]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map_or(start, |(i, _)| i);
    let to = text[end..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(i, _)| end + i);

    &text[from..to]
}
