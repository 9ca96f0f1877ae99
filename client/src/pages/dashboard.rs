//! Dashboard placeholder rendered inside the sidebar layout.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="dashboard">
            <h1 class="dashboard__title">"Dashboard"</h1>
            <p class="dashboard__text">
                {move || format!("Welcome, {}. Use the sidebar to move between sections.", auth.get().display_name())}
            </p>
            <div class="dashboard__cards">
                <a href="/messages" class="dashboard__card">
                    <h3>"Messages"</h3>
                    <p>"Pick up your conversations where you left off."</p>
                </a>
                <a href="/services" class="dashboard__card">
                    <h3>"Plans"</h3>
                    <p>"Compare what each plan includes."</p>
                </a>
            </div>
        </div>
    }
}
