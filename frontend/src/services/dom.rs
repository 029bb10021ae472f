use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};
use crate::services::logging::Logger;

/// Elements that take part in the dialog's Tab cycle
pub const FOCUSABLE_SELECTOR: &str = "a[href], button:not([disabled]), textarea:not([disabled]), \
     input:not([disabled]), select:not([disabled]), [tabindex]:not([tabindex=\"-1\"])";

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

pub fn body() -> Result<HtmlElement, JsValue> {
    document()?
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))
}

/// The element that currently has keyboard focus, if it is an HTML element
pub fn active_element() -> Option<HtmlElement> {
    document()
        .ok()?
        .active_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Focusable descendants of `container`, in document order
pub fn focusable_elements(container: &Element) -> Vec<HtmlElement> {
    let nodes = match container.query_selector_all(FOCUSABLE_SELECTOR) {
        Ok(nodes) => nodes,
        Err(e) => {
            Logger::warn_with_component("dom", &format!("focusable query failed: {:?}", e));
            return Vec::new();
        }
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Move focus, logging instead of failing when the element refuses it
pub fn focus(element: &HtmlElement) {
    if let Err(e) = element.focus() {
        Logger::warn_with_component("dom", &format!("focus failed: {:?}", e));
    }
}
