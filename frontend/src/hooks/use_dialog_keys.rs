use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};
use yew::prelude::*;
use shared::{resolve_key, FocusPosition, KeyAction};
use crate::services::{dom, logging::Logger};

/// Key handling options for `use_dialog_keys`
#[derive(Clone, PartialEq)]
pub struct DialogKeysConfig {
    pub close_on_escape: bool,
    pub trap_focus: bool,
}

/// Listen for keydown on the document while mounted: Escape cancels and Tab
/// cycles within `container`.
#[hook]
pub fn use_dialog_keys(container: NodeRef, on_cancel: Callback<()>, config: DialogKeysConfig) {
    use_effect_with((on_cancel, config), move |(on_cancel, config)| {
        let on_cancel = on_cancel.clone();
        let config = config.clone();

        let listener = match dom::document() {
            Ok(document) => Some(EventListener::new(&document, "keydown", move |event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    handle_key(event, &container, &on_cancel, &config);
                }
            })),
            Err(e) => {
                Logger::error_with_component("dialog-keys", &format!("no document for key listener: {:?}", e));
                None
            }
        };

        move || drop(listener)
    });
}

fn handle_key(event: &KeyboardEvent, container: &NodeRef, on_cancel: &Callback<()>, config: &DialogKeysConfig) {
    let focusables = container
        .cast::<Element>()
        .map(|container| dom::focusable_elements(&container))
        .unwrap_or_default();
    let active = dom::active_element();
    let position = FocusPosition::locate(&focusables, active.as_ref());

    match resolve_key(&event.key(), event.shift_key(), position) {
        KeyAction::Cancel if config.close_on_escape => {
            Logger::debug_with_component("dialog-keys", "escape pressed");
            on_cancel.emit(());
        }
        KeyAction::FocusFirst if config.trap_focus => {
            event.prevent_default();
            if let Some(first) = focusables.first() {
                dom::focus(first);
            }
        }
        KeyAction::FocusLast if config.trap_focus => {
            event.prevent_default();
            if let Some(last) = focusables.last() {
                dom::focus(last);
            }
        }
        _ => {}
    }
}
