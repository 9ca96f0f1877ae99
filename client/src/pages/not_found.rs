use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p>"Page not found."</p>
            <a href="/" class="btn btn--primary btn--pill">"Go home"</a>
        </div>
    }
}
