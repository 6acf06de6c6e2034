//! Configuration Loading
//!
//! Reads the page-injected settings: the `window.__ELECTION_ADMIN_CONFIG__`
//! object first, then `<meta name="election-admin:*">` tags on top.

use election_admin_core::config::{GLOBAL_CONFIG, META_PREFIX};
use election_admin_core::{AdminConfig, AdminError, Result};
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

/// Merge and validate every config source
pub fn load() -> Result<AdminConfig> {
    let window = web_sys::window().ok_or_else(|| AdminError::Config("no window object".to_string()))?;
    let document = window.document();
    global_config(&window)?
        .merge_meta(|key| meta_content(document.as_ref()?, key))?
        .validate()
}

fn global_config(window: &Window) -> Result<AdminConfig> {
    let value = js_sys::Reflect::get(window, &JsValue::from_str(GLOBAL_CONFIG))
        .map_err(|_| AdminError::Config(format!("cannot read window.{GLOBAL_CONFIG}")))?;
    if value.is_undefined() || value.is_null() {
        return Ok(AdminConfig::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| AdminError::Config(format!("window.{GLOBAL_CONFIG}: {e}")))
}

fn meta_content(document: &Document, key: &str) -> Option<String> {
    let selector = format!("meta[name=\"{META_PREFIX}{key}\"]");
    document
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
}
