//! Bare content page without header or footer.

use leptos::prelude::*;

#[component]
pub fn MinimalPage() -> impl IntoView {
    view! {
        <div class="minimal">
            <h1>"Minimal Layout"</h1>
            <p>"This page renders without the site header and footer."</p>
            <a href="/" class="auth-card__link">"Back to home"</a>
        </div>
    }
}
