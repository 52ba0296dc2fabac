//! WASM bindings for mathlint
//!
//! This module provides JavaScript-accessible functions for checking math
//! in a single text blob. There is no filesystem in the browser, so file
//! discovery is not exposed.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::diagnostics::Report;
#[cfg(feature = "wasm")]
use crate::utils::error::LintError;

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Check every math fragment of a text blob
///
/// # Arguments
/// * `content` - Document text
/// * `name` - Name used for the document in the report
///
/// # Returns
/// A report object with a `status` of `ok` or `invalid`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "checkMath")]
pub fn check_math(content: &str, name: &str) -> Result<JsValue, JsValue> {
    let report = match crate::check_text(name, content) {
        Ok(fragments) => Report::Ok {
            files: 1,
            fragments,
        },
        Err(err) => Report::from(&LintError::from(err)),
    };
    serde_wasm_bindgen::to_value(&report).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract math fragment texts from a document, in extraction order
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "extractMath")]
pub fn extract_math(content: &str) -> Vec<String> {
    crate::extract_fragments(content)
        .into_iter()
        .map(|f| f.text.to_string())
        .collect()
}

/// Validate a single fragment (without delimiters)
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "validateFragment")]
pub fn validate_fragment(fragment: &str) -> bool {
    crate::validate_math(fragment).is_ok()
}

/// Explain why a fragment is invalid, or `undefined` if it is valid
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "explainFragment")]
pub fn explain_fragment(fragment: &str) -> Option<String> {
    crate::validate_math(fragment).err().map(|e| e.to_string())
}

/// Get the library version
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
