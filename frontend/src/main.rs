use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{ApplyPage, ModalProvider};

#[function_component(App)]
fn app() -> Html {
    html! {
        <ModalProvider>
            <main class="app">
                <h1>{"Front-end meetup application"}</h1>
                <ApplyPage />
            </main>
        </ModalProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    yew::Renderer::<App>::new().render();
}
