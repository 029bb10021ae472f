use yew::prelude::*;
use web_sys::{HtmlElement, MouseEvent};
use wasm_bindgen_futures::spawn_local;
use shared::ModalResult;
use crate::hooks::use_modal;
use crate::services::logging::Logger;

/// Page with a single button that opens the application form and shows
/// what came back.
#[function_component(ApplyPage)]
pub fn apply_page() -> Html {
    let modal = use_modal();
    let button_ref = use_node_ref();
    let last_result = use_state(|| Option::<ModalResult>::None);
    let error_message = use_state(|| Option::<String>::None);

    let on_open = {
        let button_ref = button_ref.clone();
        let last_result = last_result.clone();
        let error_message = error_message.clone();

        Callback::from(move |_: MouseEvent| {
            let trigger = button_ref.cast::<HtmlElement>();

            match modal.open_form_modal(trigger) {
                Ok(pending) => {
                    error_message.set(None);
                    let last_result = last_result.clone();
                    spawn_local(async move {
                        let result = pending.await;
                        match serde_json::to_string(&result) {
                            Ok(json) => Logger::info_with_component("apply-page", &json),
                            Err(e) => Logger::error_with_component("apply-page", &format!("Failed to serialize result: {}", e)),
                        }
                        last_result.set(Some(result));
                    });
                }
                Err(e) => {
                    Logger::warn_with_component("apply-page", &e.to_string());
                    error_message.set(Some(e.to_string()));
                }
            }
        })
    };

    html! {
        <div class="apply-page">
            <button ref={button_ref} class="btn btn-primary" onclick={on_open}>
                {"🚀 Fill in the application form"}
            </button>

            {if let Some(error) = (*error_message).clone() {
                html! { <div class="apply-error">{error}</div> }
            } else {
                html! {}
            }}

            {match &*last_result {
                None => html! {},
                Some(None) => html! {
                    <p class="apply-result">{"The form was cancelled."}</p>
                },
                Some(Some(form)) => html! {
                    <dl class="apply-result">
                        <dt>{"Name"}</dt><dd>{form.name.clone()}</dd>
                        <dt>{"Email"}</dt><dd>{form.email.clone()}</dd>
                        <dt>{"Experience"}</dt><dd>{form.experience.label()}</dd>
                        <dt>{"GitHub"}</dt>
                        <dd>{if form.github.is_empty() { "not provided".to_string() } else { form.github.clone() }}</dd>
                    </dl>
                },
            }}
        </div>
    }
}
