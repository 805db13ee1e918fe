//! Browser-side tests, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use shelflife_wasm::{extract_expiry, Extractor};

wasm_bindgen_test_configure!(run_in_browser);

fn field(value: &JsValue, name: &str) -> JsValue {
    js_sys::Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn extracts_with_explicit_today() {
    let result = extract_expiry("EXP 2099-12-31", Some("2024-01-01".to_string())).unwrap();

    assert_eq!(field(&result, "expiry_date").as_string().as_deref(), Some("2099-12-31"));
    assert_eq!(field(&result, "confidence").as_f64(), Some(0.5));
}

#[wasm_bindgen_test]
fn missing_date_is_null() {
    let result = extract_expiry("NOTHING HERE", Some("2024-01-01".to_string())).unwrap();

    assert!(field(&result, "expiry_date").is_null());
    assert_eq!(field(&result, "confidence").as_f64(), Some(0.0));
}

#[wasm_bindgen_test]
fn rejects_malformed_today() {
    assert!(extract_expiry("EXP 2099-12-31", Some("31/12/2024".to_string())).is_err());
}

#[wasm_bindgen_test]
fn extractor_uses_browser_clock_by_default() {
    let extractor = Extractor::new(JsValue::UNDEFINED).unwrap();
    let result = extractor.extract("EXP 2099-12-31", None).unwrap();

    assert_eq!(field(&result, "expiry_date").as_string().as_deref(), Some("2099-12-31"));
}
