use wasm_bindgen::JsValue;
use web_sys::{CssStyleDeclaration, HtmlElement};
use shared::scrollbar_compensation;
use crate::services::{dom, logging::Logger};

/// Keeps the page behind the modal from scrolling while held.
///
/// Captures the body's inline `overflow` and `padding-right` on acquire and
/// writes them back on drop, removing properties that were not set inline.
pub struct ScrollLock {
    body: HtmlElement,
    overflow: String,
    padding_right: String,
}

impl ScrollLock {
    pub fn acquire() -> Result<Self, JsValue> {
        let window = dom::window()?;
        let document = dom::document()?;
        let body = dom::body()?;
        let style = body.style();

        let overflow = style.get_property_value("overflow")?;
        let padding_right = style.get_property_value("padding-right")?;

        let inner_width = window.inner_width()?.as_f64().unwrap_or(0.0);
        let client_width = document
            .document_element()
            .map(|root| f64::from(root.client_width()))
            .unwrap_or(inner_width);
        let padding = scrollbar_compensation(inner_width, client_width);

        style.set_property("overflow", "hidden")?;
        style.set_property("padding-right", &format!("{}px", padding))?;

        Logger::debug_with_component(
            "scroll-lock",
            &format!("locked body scroll, compensating {}px", padding),
        );

        Ok(Self {
            body,
            overflow,
            padding_right,
        })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let style = self.body.style();
        restore(&style, "overflow", &self.overflow);
        restore(&style, "padding-right", &self.padding_right);
        Logger::debug_with_component("scroll-lock", "restored body scroll");
    }
}

fn restore(style: &CssStyleDeclaration, property: &str, value: &str) {
    let result = if value.is_empty() {
        style.remove_property(property).map(|_| ())
    } else {
        style.set_property(property, value)
    };

    if let Err(e) = result {
        Logger::error_with_component(
            "scroll-lock",
            &format!("failed to restore {}: {:?}", property, e),
        );
    }
}
