//! WASM bindings for expiry date extraction.
//!
//! This crate provides WebAssembly bindings so a browser frontend can run
//! the extraction on text it recognized itself.

use chrono::NaiveDate;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use shelflife_core::{ExpiryExtractor, ExpiryParser, ExtractionResult, ScoringConfig};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Extract the expiry date from recognized text.
///
/// `today` is an optional `YYYY-MM-DD` reference date; the browser's local
/// date is used when it is omitted.
#[wasm_bindgen(js_name = extractExpiry)]
pub fn extract_expiry(text: &str, today: Option<String>) -> Result<JsValue, JsValue> {
    let today = resolve_today(today.as_deref())?;
    to_js(&ExpiryExtractor::new().parse(text, today))
}

/// Parse a single date string, returning it as `YYYY-MM-DD`.
#[wasm_bindgen(js_name = parseDate)]
pub fn parse_date(raw: &str) -> Option<String> {
    shelflife_core::parse_date(raw).map(|d| d.format("%Y-%m-%d").to_string())
}

/// Normalize OCR text the way the extractor does before matching.
#[wasm_bindgen]
pub fn normalize(text: &str) -> String {
    shelflife_core::normalize(text)
}

/// Expiry extractor class for browser use.
#[wasm_bindgen]
pub struct Extractor {
    inner: ExpiryExtractor,
}

#[wasm_bindgen]
impl Extractor {
    /// Create an extractor, optionally from a scoring configuration object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<Extractor, JsValue> {
        let inner = if config.is_undefined() || config.is_null() {
            ExpiryExtractor::new()
        } else {
            let config: ScoringConfig = serde_wasm_bindgen::from_value(config)?;
            ExpiryExtractor::from_config(config).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        Ok(Self { inner })
    }

    /// Extract the expiry date from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str, today: Option<String>) -> Result<JsValue, JsValue> {
        let today = resolve_today(today.as_deref())?;
        to_js(&self.inner.parse(text, today))
    }

    /// Active scoring configuration.
    #[wasm_bindgen(getter)]
    pub fn config(&self) -> Result<JsValue, JsValue> {
        self.inner
            .config()
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(Into::into)
    }
}

fn resolve_today(today: Option<&str>) -> Result<NaiveDate, JsValue> {
    match today {
        Some(value) => {
            shelflife_core::parse_today(value).map_err(|e| JsValue::from_str(&e.to_string()))
        }
        None => browser_today(),
    }
}

fn browser_today() -> Result<NaiveDate, JsValue> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .ok_or_else(|| JsValue::from_str("browser clock returned an invalid date"))
}

fn to_js(result: &ExtractionResult) -> Result<JsValue, JsValue> {
    result
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(Into::into)
}
