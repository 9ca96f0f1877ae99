//! Sign-up page: account form with a live password checklist.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered outside the site layout. On success the returned session is
//! written to browser storage through `AuthState::sign_in` and the user lands
//! on `/`. Outcomes are reported with toasts anchored top-center.
//!
//! DESIGN
//! ======
//! Validation is a pure function over `RegisterRequest` so the rules can be
//! tested without a DOM. Errors are per field and typing in a field clears
//! only that field's error.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::common::{Button, FieldError, FieldLabel, TextInput};
use crate::net::client::ApiError;
use crate::net::types::{AuthUser, RegisterRequest};
use crate::state::auth::AuthState;
use crate::state::toast::{ToastOptions, ToastPosition, use_toast};
#[cfg(feature = "hydrate")]
use crate::util::storage::BrowserStorage;
use crate::util::validation::{email_is_valid, password_checklist, password_is_valid};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignUpField {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

/// Inline error per form field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpErrors {
    pub username: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl SignUpErrors {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn get(&self, field: SignUpField) -> Option<&'static str> {
        match field {
            SignUpField::Username => self.username,
            SignUpField::Email => self.email,
            SignUpField::Password => self.password,
            SignUpField::ConfirmPassword => self.confirm_password,
        }
    }

    pub fn clear(&mut self, field: SignUpField) {
        let slot = match field {
            SignUpField::Username => &mut self.username,
            SignUpField::Email => &mut self.email,
            SignUpField::Password => &mut self.password,
            SignUpField::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = None;
    }
}

/// Check the form before it is sent.
pub fn validate(form: &RegisterRequest) -> SignUpErrors {
    let mut errors = SignUpErrors::default();

    if form.username.is_empty() {
        errors.username = Some("Username is required");
    }

    if form.email.is_empty() {
        errors.email = Some("Email is required");
    } else if !email_is_valid(&form.email) {
        errors.email = Some("Invalid email address");
    }

    if form.password.is_empty() {
        errors.password = Some("Password is required");
    } else if !password_is_valid(&form.password) {
        errors.password = Some("Password does not meet requirements");
    }

    if form.password != form.confirm_password {
        errors.confirm_password = Some("Passwords do not match");
    }

    errors
}

pub fn success_message(user: &AuthUser) -> String {
    format!("Sign up successful!\nWelcome {}", user.username)
}

pub fn failure_message(err: &ApiError) -> String {
    format!("Sign up failed. Please try again!\n{}", err.user_message())
}

/// Toast defaults for this page.
pub fn toast_defaults() -> ToastOptions {
    ToastOptions::default().position(ToastPosition::TopCenter).duration(5000)
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let toast = use_toast(toast_defaults());
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let errors = RwSignal::new(SignUpErrors::default());
    let busy = RwSignal::new(false);

    let clear_error = move |field: SignUpField| {
        Callback::new(move |()| {
            if errors.with_untracked(|e| e.get(field).is_some()) {
                errors.update(|e| e.clear(field));
            }
        })
    };
    let error_for = move |field: SignUpField| Signal::derive(move || errors.get().get(field));
    let invalid = move |field: SignUpField| Signal::derive(move || errors.get().get(field).is_some());
    let password_type = Signal::derive(move || if show_password.get() { "text" } else { "password" });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = RegisterRequest {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        let found = validate(&form);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&form).await {
                    Ok(resp) => {
                        toast.success(success_message(&resp.user), ToastOptions::default());
                        auth.update(|a| a.sign_in(&BrowserStorage, &resp));
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => {
                        log::warn!("sign up failed: {err}");
                        toast.error(failure_message(&err), ToastOptions::default());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (form, toast, auth, &navigate);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__intro">
                    <h2 class="auth-card__title">"Create Your Account"</h2>
                    <p class="auth-card__subtitle">"Join Baby Chat and start connecting with others"</p>
                </div>

                <form class="auth-form" on:submit=on_submit novalidate>
                    <div class="auth-form__field">
                        <FieldLabel for_id="username" class="sr-only">"Username"</FieldLabel>
                        <TextInput
                            value=username
                            id="username"
                            placeholder="Username"
                            autocomplete="username"
                            invalid=invalid(SignUpField::Username)
                            on_edit=clear_error(SignUpField::Username)
                        />
                        <FieldError message=error_for(SignUpField::Username) />
                    </div>

                    <div class="auth-form__field">
                        <FieldLabel for_id="email" class="sr-only">"Email address"</FieldLabel>
                        <TextInput
                            value=email
                            id="email"
                            input_type="email"
                            placeholder="Email address"
                            autocomplete="email"
                            invalid=invalid(SignUpField::Email)
                            on_edit=clear_error(SignUpField::Email)
                        />
                        <FieldError message=error_for(SignUpField::Email) />
                    </div>

                    <div class="auth-form__field auth-form__field--password">
                        <FieldLabel for_id="password" class="sr-only">"Password"</FieldLabel>
                        <TextInput
                            value=password
                            id="password"
                            input_type=password_type
                            placeholder="Password"
                            autocomplete="new-password"
                            invalid=invalid(SignUpField::Password)
                            on_edit=clear_error(SignUpField::Password)
                        />
                        <button
                            type="button"
                            class="auth-form__reveal"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                            title="Show or hide password"
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                        <FieldError message=error_for(SignUpField::Password) />
                    </div>

                    <div class="auth-form__field">
                        <FieldLabel for_id="confirmPassword" class="sr-only">"Confirm Password"</FieldLabel>
                        <TextInput
                            value=confirm_password
                            id="confirmPassword"
                            input_type=password_type
                            placeholder="Confirm Password"
                            autocomplete="new-password"
                            invalid=invalid(SignUpField::ConfirmPassword)
                            on_edit=clear_error(SignUpField::ConfirmPassword)
                        />
                        <FieldError message=error_for(SignUpField::ConfirmPassword) />
                    </div>

                    <div class="password-checklist">
                        <p class="password-checklist__title">"Password must contain:"</p>
                        {move || {
                            password_checklist(&password.get())
                                .into_iter()
                                .map(|(label, met)| {
                                    let class = if met {
                                        "password-checklist__item password-checklist__item--met"
                                    } else {
                                        "password-checklist__item"
                                    };
                                    view! {
                                        <div class=class>
                                            <span class="password-checklist__mark">{if met { "✓" } else { "✗" }}</span>
                                            <span>{label}</span>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>

                    <Button button_type="submit" class="auth-form__submit" disabled=busy>
                        {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                    </Button>
                </form>

                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href="/login" class="auth-card__link">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
