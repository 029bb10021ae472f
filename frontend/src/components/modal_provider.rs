use yew::prelude::*;
use web_sys::HtmlElement;
use shared::{ApplicationForm, ModalConfig, ModalSession};
use crate::components::FormModal;
use crate::hooks::ModalHandle;

#[derive(Properties, PartialEq)]
pub struct ModalProviderProps {
    #[prop_or_default]
    pub config: ModalConfig,
    #[prop_or_default]
    pub children: Children,
}

/// Makes `use_modal` available to its descendants and renders the form
/// modal while a request is open.
#[function_component(ModalProvider)]
pub fn modal_provider(props: &ModalProviderProps) -> Html {
    let session = use_mut_ref(ModalSession::<HtmlElement>::new);
    let is_open = use_state(|| false);
    let handle = ModalHandle::new(session, is_open.setter());

    let on_submit = use_callback(handle.clone(), |form: ApplicationForm, handle| {
        handle.close(Some(form));
    });

    let on_cancel = use_callback(handle.clone(), |_: (), handle| {
        handle.close(None);
    });

    html! {
        <ContextProvider<ModalHandle> context={handle}>
            {for props.children.iter()}
            {if *is_open {
                html! {
                    <FormModal
                        config={props.config.clone()}
                        on_submit={on_submit}
                        on_cancel={on_cancel}
                    />
                }
            } else {
                html! {}
            }}
        </ContextProvider<ModalHandle>>
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use std::cell::RefCell;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, Event, EventInit, HtmlInputElement, HtmlSelectElement, KeyboardEvent, KeyboardEventInit};
    use shared::{Experience, PendingForm};
    use crate::components::form_modal;
    use crate::hooks::use_modal;
    use crate::services::dom;

    wasm_bindgen_test_configure!(run_in_browser);

    thread_local! {
        static HANDLE: RefCell<Option<ModalHandle>> = RefCell::new(None);
    }

    #[function_component(Capture)]
    fn capture() -> Html {
        let handle = use_modal();
        HANDLE.with(|slot| *slot.borrow_mut() = Some(handle));
        html! { <button id="trigger">{"Apply"}</button> }
    }

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        config: ModalConfig,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        html! {
            <ModalProvider config={props.config.clone()}>
                <Capture />
            </ModalProvider>
        }
    }

    struct Mounted {
        root: Element,
        app: yew::AppHandle<Harness>,
    }

    impl Mounted {
        async fn new() -> Self {
            Self::with_config(ModalConfig::compact()).await
        }

        async fn with_config(config: ModalConfig) -> Self {
            let document = dom::document().unwrap();
            let root = document.create_element("div").unwrap();
            document.body().unwrap().append_child(&root).unwrap();
            let app = yew::Renderer::<Harness>::with_root_and_props(root.clone(), HarnessProps { config })
                .render();
            settle().await;
            Self { root, app }
        }

        fn focused_id(&self) -> Option<String> {
            dom::active_element().map(|element| element.id())
        }

        fn focus(&self, selector: &str) {
            let element: HtmlElement = self.query(selector).unwrap().dyn_into().unwrap();
            dom::focus(&element);
        }

        fn handle(&self) -> ModalHandle {
            HANDLE.with(|slot| slot.borrow().clone()).unwrap()
        }

        fn trigger(&self) -> HtmlElement {
            self.query("#trigger").unwrap().dyn_into().unwrap()
        }

        fn query(&self, selector: &str) -> Option<Element> {
            self.root.query_selector(selector).unwrap()
        }

        fn open(&self) -> PendingForm {
            let trigger = self.trigger();
            dom::focus(&trigger);
            self.handle().open_form_modal(Some(trigger)).unwrap()
        }

        fn unmount(self) {
            self.app.destroy();
            self.root.remove();
        }
    }

    async fn settle() {
        TimeoutFuture::new(30).await;
    }

    fn set_input(element: Element, value: &str) {
        let input: HtmlInputElement = element.dyn_into().unwrap();
        input.set_value(value);
        let init = EventInit::new();
        init.set_bubbles(true);
        let event = Event::new_with_event_init_dict("input", &init).unwrap();
        input.dispatch_event(&event).unwrap();
    }

    fn select_option(element: Element, value: &str) {
        let select: HtmlSelectElement = element.dyn_into().unwrap();
        select.set_value(value);
        let init = EventInit::new();
        init.set_bubbles(true);
        let event = Event::new_with_event_init_dict("change", &init).unwrap();
        select.dispatch_event(&event).unwrap();
    }

    /// Dispatches a keydown from the focused element, as a real key press would.
    /// Returns false when a handler called `prevent_default`.
    fn press_key(key: &str, shift: bool) -> bool {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        init.set_shift_key(shift);
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        let target: web_sys::EventTarget = match dom::active_element() {
            Some(element) => element.into(),
            None => dom::document().unwrap().into(),
        };
        target.dispatch_event(&event).unwrap()
    }

    fn press_escape() {
        press_key("Escape", false);
    }

    fn click(element: Element) {
        element.dyn_into::<HtmlElement>().unwrap().click();
    }

    #[wasm_bindgen_test]
    async fn test_submit_resolves_with_form_and_refocuses_trigger() {
        let mounted = Mounted::new().await;
        let pending = mounted.open();
        settle().await;

        assert!(mounted.query("[role=dialog]").is_some());
        set_input(mounted.query("#name").unwrap(), "Jo");
        set_input(mounted.query("#email").unwrap(), "jo@example.com");
        select_option(mounted.query("#experience").unwrap(), "0-3 years");
        settle().await;

        click(mounted.query("button[type=submit]").unwrap());

        let form = pending.await.unwrap();
        assert_eq!(form.name, "Jo");
        assert_eq!(form.email, "jo@example.com");
        assert_eq!(form.experience, Experience::ZeroToThree);
        assert_eq!(form.github, "");

        settle().await;
        assert!(mounted.query("[role=dialog]").is_none());
        assert_eq!(dom::active_element(), Some(mounted.trigger()));

        mounted.unmount();
    }

    #[wasm_bindgen_test]
    async fn test_escape_cancels_and_restores_scroll() {
        let style = dom::body().unwrap().style();
        let overflow_before = style.get_property_value("overflow").unwrap();
        let padding_before = style.get_property_value("padding-right").unwrap();

        let mounted = Mounted::new().await;
        let pending = mounted.open();
        settle().await;
        assert_eq!(style.get_property_value("overflow").unwrap(), "hidden");

        press_escape();
        assert_eq!(pending.await, None);

        settle().await;
        assert!(mounted.query("[role=dialog]").is_none());
        assert_eq!(style.get_property_value("overflow").unwrap(), overflow_before);
        assert_eq!(style.get_property_value("padding-right").unwrap(), padding_before);

        mounted.unmount();
    }

    #[wasm_bindgen_test]
    async fn test_invalid_submission_shows_alerts_and_stays_open() {
        let mounted = Mounted::new().await;
        let pending = mounted.open();
        settle().await;

        set_input(mounted.query("#name").unwrap(), "J");
        settle().await;
        click(mounted.query("button[type=submit]").unwrap());
        settle().await;

        assert!(mounted.query("[role=dialog]").is_some());
        let name_error = mounted.query("#name-error").unwrap();
        assert_eq!(name_error.get_attribute("role").as_deref(), Some("alert"));
        assert_eq!(
            mounted.query("#name").unwrap().get_attribute("aria-describedby").as_deref(),
            Some("name-error")
        );
        assert!(mounted.query("#email-error").is_some());
        assert!(mounted.query("#github-error").is_none());

        click(mounted.query("button[type=button]").unwrap());
        assert_eq!(pending.await, None);

        mounted.unmount();
    }

    #[wasm_bindgen_test]
    async fn test_backdrop_click_cancels_but_panel_click_does_not() {
        let mounted = Mounted::new().await;
        let pending = mounted.open();
        settle().await;

        click(mounted.query("[role=dialog]").unwrap());
        settle().await;
        assert!(mounted.query("[role=dialog]").is_some());

        click(mounted.query(".form-modal-overlay").unwrap());
        assert_eq!(pending.await, None);

        mounted.unmount();
    }

    #[wasm_bindgen_test]
    async fn test_second_open_is_rejected_then_reopen_works() {
        let mounted = Mounted::new().await;
        let first = mounted.open();
        settle().await;

        assert_eq!(
            mounted.handle().open_form_modal(None).unwrap_err(),
            shared::ModalError::AlreadyOpen
        );

        press_escape();
        assert_eq!(first.await, None);
        settle().await;

        let second = mounted.handle().open_form_modal(None).unwrap();
        settle().await;
        assert!(mounted.query("[role=dialog]").is_some());
        press_escape();
        assert_eq!(second.await, None);

        mounted.unmount();
    }

    #[wasm_bindgen_test]
    async fn test_heading_receives_focus_on_open() {
        let mounted = Mounted::new().await;
        let pending = mounted.open();
        settle().await;

        assert_eq!(mounted.focused_id().as_deref(), Some(form_modal::TITLE_ID));

        press_escape();
        assert_eq!(pending.await, None);
        mounted.unmount();
    }

    #[wasm_bindgen_test]
    async fn test_tab_from_last_control_wraps_to_first() {
        let mounted = Mounted::new().await;
        let pending = mounted.open();
        settle().await;

        mounted.focus("button[type=submit]");
        let not_prevented = press_key("Tab", false);

        assert!(!not_prevented);
        assert_eq!(mounted.focused_id().as_deref(), Some("name"));

        press_escape();
        assert_eq!(pending.await, None);
        mounted.unmount();
    }

    #[wasm_bindgen_test]
    async fn test_shift_tab_from_first_control_wraps_to_last() {
        let mounted = Mounted::new().await;
        let pending = mounted.open();
        settle().await;

        mounted.focus("#name");
        let not_prevented = press_key("Tab", true);

        assert!(!not_prevented);
        let submit: HtmlElement = mounted.query("button[type=submit]").unwrap().dyn_into().unwrap();
        assert_eq!(dom::active_element(), Some(submit));

        press_escape();
        assert_eq!(pending.await, None);
        mounted.unmount();
    }

    #[wasm_bindgen_test]
    async fn test_tab_inside_the_form_is_left_to_the_browser() {
        let mounted = Mounted::new().await;
        let pending = mounted.open();
        settle().await;

        mounted.focus("#name");
        assert!(press_key("Tab", false));
        assert_eq!(mounted.focused_id().as_deref(), Some("name"));

        press_escape();
        assert_eq!(pending.await, None);
        mounted.unmount();
    }

    #[wasm_bindgen_test]
    async fn test_entry_delay_applies_visible_class_after_it_elapses() {
        let config = ModalConfig {
            entry_delay_ms: 120,
            ..ModalConfig::compact()
        };
        let mounted = Mounted::with_config(config).await;
        let pending = mounted.open();
        settle().await;

        assert!(mounted.query(".form-modal").is_some());
        assert!(mounted.query(".form-modal.modal-visible").is_none());

        TimeoutFuture::new(150).await;
        settle().await;
        assert!(mounted.query(".form-modal.modal-visible").is_some());
        assert!(mounted.query(".form-modal-overlay.modal-visible").is_some());

        press_escape();
        assert_eq!(pending.await, None);
        mounted.unmount();
    }

    #[wasm_bindgen_test]
    async fn test_escape_still_cancels_after_editing_fields() {
        let mounted = Mounted::new().await;
        let pending = mounted.open();
        settle().await;

        // Each edit re-renders the dialog
        set_input(mounted.query("#name").unwrap(), "J");
        settle().await;
        set_input(mounted.query("#name").unwrap(), "Jo");
        settle().await;
        set_input(mounted.query("#email").unwrap(), "jo@");
        settle().await;

        press_escape();
        assert_eq!(pending.await, None);
        settle().await;
        assert!(mounted.query("[role=dialog]").is_none());

        mounted.unmount();
    }
}
