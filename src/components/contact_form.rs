use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, FocusEvent, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::behavior::contact::{
    submit_contact, ContactDraft, DraftAction, Field, FormFeedback, SimulatedOutcome,
    SimulatedSubmitter,
};
use crate::behavior::portfolio::Category;
use crate::behavior::toast::ToastKind;
use crate::components::toast::Toaster;
use crate::config::CONFIG;
use crate::utils::dom;
use crate::utils::scheduler::BrowserScheduler;

impl Reducible for ContactDraft {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Routes submit feedback to the toast slot and the form state.
struct PageFeedback {
    toaster: Toaster,
    draft: UseReducerDispatcher<ContactDraft>,
}

impl FormFeedback for PageFeedback {
    fn notify(&self, kind: ToastKind, message: &str) {
        self.toaster.post(kind, message);
    }

    fn clear_form(&self) {
        self.draft.dispatch(DraftAction::Reset);
    }
}

/// Simulated send timed by `CONFIG`; `?envio=falla` in the page URL makes it fail.
fn page_submitter() -> SimulatedSubmitter {
    let outcome = match dom::window().and_then(|window| Ok(window.location().search()?)) {
        Ok(search) => SimulatedOutcome::from_query(&search),
        Err(err) => {
            warn!("Could not read page query, simulating a successful send: {}", err);
            SimulatedOutcome::Succeed
        }
    };
    SimulatedSubmitter::new(BrowserScheduler, CONFIG.submit_delay_ms).with_outcome(outcome)
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or_else(page_submitter)]
    pub submitter: SimulatedSubmitter,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let draft = use_reducer_eq(ContactDraft::default);
    let sending = use_state_eq(|| false);
    let toaster = use_context::<Toaster>();

    let onsubmit = {
        let draft = draft.clone();
        let sending = sending.clone();
        let submitter = props.submitter;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }
            let Some(toaster) = toaster.clone() else {
                warn!("No toast provider mounted, contact form submit ignored");
                return;
            };

            draft.dispatch(DraftAction::CheckAll);
            let payload = draft.payload();
            let feedback = PageFeedback {
                toaster,
                draft: draft.dispatcher(),
            };
            let sending = sending.clone();
            sending.set(true);
            spawn_local(async move {
                if let Err(err) = submit_contact(&submitter, payload, &feedback).await {
                    if err.is_user_facing() {
                        debug!("Contact submit did not go through: {}", err);
                    } else {
                        warn!("Contact submit failed unexpectedly: {}", err);
                    }
                }
                sending.set(false);
            });
        })
    };

    let on_input = |field: Field| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            draft.dispatch(DraftAction::Edit(field, value));
        })
    };
    let on_blur = |field: Field| {
        let draft = draft.clone();
        Callback::from(move |_: FocusEvent| draft.dispatch(DraftAction::Check(field)))
    };
    let on_project_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            draft.dispatch(DraftAction::Edit(Field::ProjectType, value));
            draft.dispatch(DraftAction::Check(Field::ProjectType));
        })
    };
    let on_message_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            draft.dispatch(DraftAction::Edit(Field::Message, value));
        })
    };

    let text_input = |field: Field, kind: &'static str, placeholder: &'static str| {
        html! {
            <div class="form__group">
                <label class="form__label" for={field.key()}>{field.label()}</label>
                <input
                    id={field.key()}
                    name={field.key()}
                    type={kind}
                    class="form__input"
                    required=true
                    {placeholder}
                    value={draft.value(field).to_string()}
                    style={draft.mark(field).border_style()}
                    oninput={on_input(field)}
                    onblur={on_blur(field)}
                />
            </div>
        }
    };

    let project = draft.value(Field::ProjectType).to_string();

    html! {
        <form id="contactForm" class="form" novalidate=true {onsubmit}>
            { text_input(Field::Name, "text", "Tu nombre") }
            { text_input(Field::Email, "email", "tu@correo.com") }
            { text_input(Field::Phone, "tel", "+52 55 1234 5678") }
            <div class="form__group">
                <label class="form__label" for={Field::ProjectType.key()}>{Field::ProjectType.label()}</label>
                <select
                    id={Field::ProjectType.key()}
                    name={Field::ProjectType.key()}
                    class="form__input"
                    required=true
                    style={draft.mark(Field::ProjectType).border_style()}
                    onchange={on_project_change}
                    onblur={on_blur(Field::ProjectType)}
                >
                    <option value="" disabled=true selected={project.is_empty()}>{"Selecciona una opción"}</option>
                    { for Category::ALL.into_iter().map(|category| html! {
                        <option value={category.tag()} selected={project == category.tag()}>{category.label()}</option>
                    }) }
                </select>
            </div>
            <div class="form__group">
                <label class="form__label" for={Field::Message.key()}>{Field::Message.label()}</label>
                <textarea
                    id={Field::Message.key()}
                    name={Field::Message.key()}
                    class="form__textarea"
                    rows="5"
                    required=true
                    placeholder="Cuéntanos sobre tu proyecto"
                    value={draft.value(Field::Message).to_string()}
                    style={draft.mark(Field::Message).border_style()}
                    oninput={on_message_input}
                    onblur={on_blur(Field::Message)}
                />
            </div>
            <button type="submit" class="btn btn--primary form__submit" disabled={*sending}>
                { if *sending { "Enviando..." } else { "Enviar mensaje" } }
            </button>
        </form>
    }
}
