/// Imports from the side panel's JS bridge
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/sidepanel.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    pub async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

    /// Starts the write immediately; the promise settles once chrome has it
    #[wasm_bindgen(catch)]
    pub fn setStorage(key: &str, value: JsValue) -> Result<js_sys::Promise, JsValue>;

    pub fn onCaptureMessage(handler: &Closure<dyn FnMut(JsValue) -> JsValue>);

    pub fn offCaptureMessage(handler: &Closure<dyn FnMut(JsValue) -> JsValue>);
}
