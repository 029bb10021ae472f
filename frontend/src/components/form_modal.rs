use std::rc::Rc;
use gloo::timers::callback::Timeout;
use yew::prelude::*;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlSelectElement, MouseEvent};
use shared::{
    ApplicationForm, DialogPhase, Experience, Field, FieldError, FormDraft, ModalConfig,
    ValidationErrors,
};
use crate::hooks::{use_dialog_keys, use_scroll_lock, DialogKeysConfig};
use crate::services::{dom, logging::Logger};

pub const TITLE_ID: &str = "form-modal-title";
pub const DESCRIPTION_ID: &str = "form-modal-description";

#[derive(Properties, PartialEq)]
pub struct FormModalProps {
    #[prop_or_default]
    pub config: ModalConfig,
    pub on_submit: Callback<ApplicationForm>,
    pub on_cancel: Callback<()>,
}

enum PhaseAction {
    Entered,
    Closing,
}

#[derive(PartialEq)]
struct PhaseState(DialogPhase);

impl Reducible for PhaseState {
    type Action = PhaseAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            PhaseAction::Entered => self.0.entered(),
            PhaseAction::Closing => self.0.closing(),
        };
        if next == self.0 {
            self
        } else {
            Rc::new(PhaseState(next))
        }
    }
}

#[derive(Default, PartialEq)]
struct DraftState(FormDraft);

impl Reducible for DraftState {
    type Action = (Field, String);

    fn reduce(self: Rc<Self>, (field, value): Self::Action) -> Rc<Self> {
        let mut draft = self.0.clone();
        draft.set(field, value);
        Rc::new(DraftState(draft))
    }
}

#[function_component(FormModal)]
pub fn form_modal(props: &FormModalProps) -> Html {
    let phase = use_reducer(|| PhaseState(DialogPhase::Mounting));
    let draft = use_reducer(DraftState::default);
    let errors = use_state(ValidationErrors::default);

    let overlay_ref = use_node_ref();
    let panel_ref = use_node_ref();
    let title_ref = use_node_ref();

    // Announce the dialog via its heading, then let the entry transition run
    {
        let title_ref = title_ref.clone();
        let phase = phase.clone();
        let delay = props.config.entry_delay_ms;
        use_effect_with((), move |_| {
            if let Some(title) = title_ref.cast::<HtmlElement>() {
                dom::focus(&title);
            }
            let timeout = Timeout::new(delay, move || phase.dispatch(PhaseAction::Entered));
            move || drop(timeout)
        });
    }

    use_scroll_lock(props.config.lock_scroll);

    // use_dialog_keys re-registers its listener whenever this changes
    let cancel = {
        let dispatcher = phase.dispatcher();
        use_callback(
            (phase.0, props.on_cancel.clone()),
            move |_: (), (current, on_cancel)| {
                if !current.accepts_outcome() {
                    return;
                }
                dispatcher.dispatch(PhaseAction::Closing);
                on_cancel.emit(());
            },
        )
    };

    use_dialog_keys(
        panel_ref.clone(),
        cancel.clone(),
        DialogKeysConfig {
            close_on_escape: props.config.close_on_escape,
            trap_focus: props.config.trap_focus,
        },
    );

    let on_overlay_click = {
        let overlay_ref = overlay_ref.clone();
        let cancel = cancel.clone();
        let close_on_backdrop = props.config.close_on_backdrop;
        Callback::from(move |e: MouseEvent| {
            if !close_on_backdrop {
                return;
            }
            // Only clicks on the overlay itself, not bubbled ones from the panel
            let target = e.target_dyn_into::<Element>();
            if target.is_some() && target == overlay_ref.cast::<Element>() {
                cancel.emit(());
            }
        })
    };

    let on_submit = {
        let phase = phase.clone();
        let draft = draft.clone();
        let errors = errors.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !phase.0.accepts_outcome() {
                return;
            }

            match draft.0.validate() {
                Ok(form) => {
                    errors.set(ValidationErrors::default());
                    phase.dispatch(PhaseAction::Closing);
                    on_submit.emit(form);
                }
                Err(found) => {
                    let fields: Vec<&str> = found.iter().map(|(field, _)| field.id()).collect();
                    Logger::debug_with_component(
                        "form-modal",
                        &format!("submission blocked by invalid field(s): {}", fields.join(", ")),
                    );
                    errors.set(found);
                }
            }
        })
    };

    let on_input = |field: Field| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.dispatch((field, input.value()));
        })
    };

    let on_experience_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            draft.dispatch((Field::Experience, select.value()));
        })
    };

    let on_cancel_click = cancel.reform(|_: MouseEvent| ());

    let visible = phase.0.is_visible().then_some("modal-visible");
    let experience_error = errors.get(Field::Experience);

    html! {
        <div
            ref={overlay_ref}
            class={classes!("form-modal-overlay", visible)}
            onclick={on_overlay_click}
        >
            <div
                ref={panel_ref}
                class={classes!("form-modal", visible)}
                role="dialog"
                aria-modal="true"
                aria-labelledby={TITLE_ID}
                aria-describedby={DESCRIPTION_ID}
            >
                <h2 id={TITLE_ID} ref={title_ref} tabindex="-1">{"Application form"}</h2>
                <p id={DESCRIPTION_ID}>
                    {"Please tell us a little about yourself: your email, how long you have worked on the front end and, if you like, your GitHub profile."}
                </p>

                {filler_content(props.config.filler_paragraphs)}

                <form class="form-modal-form" onsubmit={on_submit} novalidate=true>
                    {text_field(Field::Name, "text", None, &draft.0, errors.get(Field::Name), on_input(Field::Name))}
                    {text_field(Field::Email, "email", None, &draft.0, errors.get(Field::Email), on_input(Field::Email))}

                    <div class="form-group">
                        <label for={Field::Experience.id()}>{Field::Experience.label()}</label>
                        <select
                            id={Field::Experience.id()}
                            name={Field::Experience.id()}
                            class="form-modal-input"
                            onchange={on_experience_change}
                            aria-required="true"
                            aria-invalid={experience_error.map(|_| "true")}
                            aria-describedby={experience_error.map(|_| Field::Experience.error_id())}
                        >
                            <option value="" selected={draft.0.experience.is_empty()}>{"Please select"}</option>
                            {for Experience::ALL.iter().map(|experience| html! {
                                <option
                                    value={experience.label()}
                                    selected={draft.0.experience == experience.label()}
                                >
                                    {experience.label()}
                                </option>
                            })}
                        </select>
                        {error_message(Field::Experience, experience_error)}
                    </div>

                    {text_field(Field::Github, "url", Some("https://github.com/username"), &draft.0, errors.get(Field::Github), on_input(Field::Github))}

                    <div class="form-modal-buttons">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel_click}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="btn btn-primary">
                            {"Submit"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn text_field(
    field: Field,
    input_type: &'static str,
    placeholder: Option<&'static str>,
    draft: &FormDraft,
    error: Option<&FieldError>,
    oninput: Callback<InputEvent>,
) -> Html {
    html! {
        <div class="form-group">
            <label for={field.id()}>{field.label()}</label>
            <input
                id={field.id()}
                name={field.id()}
                type={input_type}
                class="form-modal-input"
                placeholder={placeholder}
                value={draft.value(field).to_string()}
                oninput={oninput}
                aria-required={field.is_required().then_some("true")}
                aria-invalid={error.map(|_| "true")}
                aria-describedby={error.map(|_| field.error_id())}
            />
            {error_message(field, error)}
        </div>
    }
}

fn error_message(field: Field, error: Option<&FieldError>) -> Html {
    match error {
        Some(error) => html! {
            <div id={field.error_id()} class="form-modal-error" role="alert">
                {error.to_string()}
            </div>
        },
        None => html! {},
    }
}

fn filler_content(paragraphs: usize) -> Html {
    if paragraphs == 0 {
        return html! {};
    }

    html! {
        <div class="form-modal-filler">
            <h3>{"Scroll test content"}</h3>
            {for (1..=paragraphs).map(|index| html! {
                <p key={index}>
                    {format!(
                        "{}. Filler text for checking scrolling. While the dialog is open the page behind it must not scroll. \
                         Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
                        index
                    )}
                </p>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_reducer_ignores_entry_after_closing() {
        let state = Rc::new(PhaseState(DialogPhase::Mounting));
        let state = state.reduce(PhaseAction::Closing);
        let state = state.reduce(PhaseAction::Entered);
        assert_eq!(state.0, DialogPhase::Closing);
    }

    #[test]
    fn test_draft_reducer_sets_one_field() {
        let state = Rc::new(DraftState::default());
        let state = state.reduce((Field::Email, "jo@example.com".to_string()));
        assert_eq!(state.0.email, "jo@example.com");
        assert_eq!(state.0.name, "");
    }
}
