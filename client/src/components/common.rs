//! Small form primitives shared by the auth pages.

use leptos::prelude::*;

/// Primary action button.
#[component]
pub fn Button(
    #[prop(optional, into)] class: String,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=format!("btn btn--primary {class}")
            type=button_type
            disabled=move || disabled.get()
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

/// Text input bound two-way to a string signal.
#[component]
pub fn TextInput(
    value: RwSignal<String>,
    #[prop(optional, into)] id: String,
    #[prop(optional, into)] class: String,
    #[prop(into, default = Signal::stored("text"))] input_type: Signal<&'static str>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] autocomplete: &'static str,
    #[prop(into, default = Signal::stored(false))] invalid: Signal<bool>,
    #[prop(optional)] on_edit: Option<Callback<()>>,
) -> impl IntoView {
    let classes = move || {
        if invalid.get() {
            format!("field-input field-input--invalid {class}")
        } else {
            format!("field-input {class}")
        }
    };

    view! {
        <input
            id=id.clone()
            name=id
            class=classes
            type=move || input_type.get()
            placeholder=placeholder
            autocomplete=autocomplete
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
                if let Some(cb) = on_edit {
                    cb.run(());
                }
            }
        />
    }
}

/// Form label.
#[component]
pub fn FieldLabel(
    #[prop(into)] for_id: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <label for=for_id class=format!("field-label {class}")>
            {children()}
        </label>
    }
}

/// Inline validation message under a field.
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<&'static str>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="field-error">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}
