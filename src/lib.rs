/// 123Links - side panel for collecting notes and links
/// Built with Rust + WASM + Yew

mod bridge;
pub mod classifier;
pub mod config;
pub mod error;
pub mod link_data;
pub mod sanitize;
pub mod storage;
pub mod store;
pub mod ui;

use serde::Serialize;
use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the classifier for JavaScript access
#[wasm_bindgen(js_name = detectLinkType)]
pub fn detect_link_type(text: &str) -> Result<JsValue, JsValue> {
    to_js(&classifier::detect_link_type(text))
}

#[wasm_bindgen(js_name = validateMany)]
pub fn validate_many(texts: JsValue) -> Result<JsValue, JsValue> {
    let texts: Vec<String> = serde_wasm_bindgen::from_value(texts)?;
    to_js(&classifier::validate_many(&texts))
}

#[wasm_bindgen(js_name = validateSafely)]
pub fn validate_safely(text: &str) -> Result<JsValue, JsValue> {
    let report = classifier::SafetyReport::from(classifier::validate_safely(text));
    to_js(&report)
}

#[wasm_bindgen(js_name = escapeHtml)]
pub fn escape_html(text: &str) -> String {
    sanitize::escape_html(text)
}

// Flattened results must come out as plain objects, not Maps
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

// Start the Yew app for the side panel
#[wasm_bindgen]
pub fn start_sidepanel() {
    yew::Renderer::<ui::sidepanel::SidePanel>::new().render();
}
