//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Find an element by id.
pub fn element_by_id(id: &str) -> Option<HtmlElement> {
    window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

// =============================================================================
// Page Globals
// =============================================================================

/// Read a global variable set by the hosting page.
///
/// `undefined` and `null` both read as `None`.
pub fn global(name: &str) -> Option<JsValue> {
    let window = window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok()?;
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}

/// Read a string global. Non-string values are ignored.
pub fn global_string(name: &str) -> Option<String> {
    global(name)?.as_string()
}

/// Read a boolean global. Only real booleans count, `"true"` does not.
pub fn global_bool(name: &str) -> Option<bool> {
    global(name)?.as_bool()
}
