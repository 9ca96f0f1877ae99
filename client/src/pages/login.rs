//! Login page: email + password against `POST /auth/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::common::{Button, FieldError, FieldLabel, TextInput};
use crate::net::client::ApiError;
use crate::net::types::{AuthUser, LoginRequest};
use crate::state::auth::AuthState;
use crate::state::toast::use_toast;
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastOptions;
use crate::util::validation::email_is_valid;
#[cfg(feature = "hydrate")]
use crate::util::storage::BrowserStorage;

/// Inline error per login field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

pub fn validate(form: &LoginRequest) -> LoginErrors {
    let email = if form.email.trim().is_empty() {
        Some("Email is required")
    } else if !email_is_valid(form.email.trim()) {
        Some("Invalid email address")
    } else {
        None
    };
    let password = form.password.is_empty().then_some("Password is required");
    LoginErrors { email, password }
}

pub fn success_message(user: &AuthUser) -> String {
    format!("Login successful!\nWelcome back {}", user.username)
}

pub fn failure_message(err: &ApiError) -> String {
    format!("Login failed. Please try again!\n{}", err.user_message())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let toast = use_toast(crate::pages::signup::toast_defaults());
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(LoginErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = LoginRequest { email: email.get_untracked().trim().to_owned(), password: password.get_untracked() };
        let found = validate(&form);
        errors.set(found);
        if !found.is_empty() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&form).await {
                    Ok(resp) => {
                        toast.success(success_message(&resp.user), ToastOptions::default());
                        auth.update(|a| a.sign_in(&BrowserStorage, &resp));
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => {
                        log::warn!("login failed: {err}");
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
                    <h2 class="auth-card__title">"Welcome Back"</h2>
                    <p class="auth-card__subtitle">"Sign in to continue chatting"</p>
                </div>

                <form class="auth-form" on:submit=on_submit novalidate>
                    <div class="auth-form__field">
                        <FieldLabel for_id="email" class="sr-only">"Email address"</FieldLabel>
                        <TextInput
                            value=email
                            id="email"
                            input_type="email"
                            placeholder="Email address"
                            autocomplete="email"
                            invalid=Signal::derive(move || errors.get().email.is_some())
                            on_edit=Callback::new(move |()| errors.update(|e| e.email = None))
                        />
                        <FieldError message=Signal::derive(move || errors.get().email) />
                    </div>

                    <div class="auth-form__field">
                        <FieldLabel for_id="password" class="sr-only">"Password"</FieldLabel>
                        <TextInput
                            value=password
                            id="password"
                            input_type="password"
                            placeholder="Password"
                            autocomplete="current-password"
                            invalid=Signal::derive(move || errors.get().password.is_some())
                            on_edit=Callback::new(move |()| errors.update(|e| e.password = None))
                        />
                        <FieldError message=Signal::derive(move || errors.get().password) />
                    </div>

                    <Button button_type="submit" class="auth-form__submit" disabled=busy>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </Button>
                </form>

                <p class="auth-card__footer">
                    "New to Baby Chat? "
                    <a href="/signup" class="auth-card__link">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
