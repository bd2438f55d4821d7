use dioxus::prelude::*;
use setorial::domain::constants::{FORM_TITLE, SECTOR_PLACEHOLDER};
use setorial::features::registration::{Field, Registration, Sector};
use std::rc::Rc;
use tracing::error;

/// Root component handed to the launcher.
#[component]
pub fn App() -> Element {
    rsx! {
        RegistrationForm {}
    }
}

/// The registration form bound to a fresh form session.
#[component]
pub fn RegistrationForm() -> Element {
    let registration = use_context::<Registration>();
    let session = use_hook(|| Rc::new(registration.session()));
    let mut snapshot = use_signal(|| session.snapshot());

    // Mirror every published snapshot, including the ones produced by timers.
    use_future({
        let session = Rc::clone(&session);
        move || {
            let mut receiver = session.subscribe();
            async move {
                while receiver.changed().await.is_ok() {
                    let next = receiver.borrow_and_update().clone();
                    snapshot.set(next);
                }
            }
        }
    });

    let on_input = use_callback({
        let session = Rc::clone(&session);
        move |(field, value): (Field, String)| session.change(field, value)
    });

    let on_submit = move |event: FormEvent| {
        event.prevent_default();
        if let Err(err) = session.submit() {
            error!(error = %err, "Submit failed");
        }
    };

    let state = snapshot.read();
    let submitting = state.is_submitting();

    rsx! {
        main { class: "registration",
            h1 { {FORM_TITLE} }
            if let Some(message) = state.success_message {
                div { class: "alert-success", role: "status", aria_live: "polite", {message} }
            }
            form { onsubmit: on_submit,
                TextField {
                    field: Field::Name,
                    value: state.draft.name.clone(),
                    error: state.error_message(Field::Name),
                    oninput: on_input,
                }
                SectorSelect {
                    value: state.draft.sector.clone(),
                    error: state.error_message(Field::Sector),
                    onchange: on_input,
                }
                TextField {
                    field: Field::Email,
                    value: state.draft.email.clone(),
                    error: state.error_message(Field::Email),
                    oninput: on_input,
                }
                TextField {
                    field: Field::Phone,
                    value: state.draft.phone.clone(),
                    error: state.error_message(Field::Phone),
                    oninput: on_input,
                }
                button { r#type: "submit", class: "submit", disabled: submitting, {state.submit_label()} }
            }
        }
    }
}

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Phone => "tel",
        Field::Name | Field::Sector | Field::Email => "text",
    }
}

#[component]
fn TextField(
    field: Field,
    value: String,
    #[props(!optional)] error: Option<String>,
    oninput: EventHandler<(Field, String)>,
) -> Element {
    let id: &'static str = field.into();
    let invalid = error.is_some();
    let class = if invalid { "invalid" } else { "" };

    rsx! {
        div { class: "field",
            label { r#for: id, {field.label()} }
            input {
                id,
                name: id,
                r#type: input_type(field),
                class,
                placeholder: field.placeholder().unwrap_or_default(),
                value,
                aria_invalid: invalid,
                oninput: move |event| oninput.call((field, event.value())),
            }
            Feedback { error }
        }
    }
}

#[component]
fn SectorSelect(
    value: String,
    #[props(!optional)] error: Option<String>,
    onchange: EventHandler<(Field, String)>,
) -> Element {
    let id: &'static str = Field::Sector.into();
    let invalid = error.is_some();
    let class = if invalid { "invalid" } else { "" };

    rsx! {
        div { class: "field",
            label { r#for: id, {Field::Sector.label()} }
            select {
                id,
                name: id,
                class,
                aria_invalid: invalid,
                onchange: move |event| onchange.call((Field::Sector, event.value())),
                option { value: "", selected: value.is_empty(), {SECTOR_PLACEHOLDER} }
                for sector in Sector::ALL {
                    option {
                        key: "{sector}",
                        value: sector.slug(),
                        selected: value == sector.slug(),
                        {sector.label()}
                    }
                }
            }
            Feedback { error }
        }
    }
}

#[component]
fn Feedback(#[props(!optional)] error: Option<String>) -> Element {
    rsx! {
        if let Some(message) = error {
            span { class: "feedback", role: "alert", "{message}" }
        }
    }
}
