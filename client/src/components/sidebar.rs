//! Collapsible side navigation used by the dashboard layout.
//!
//! On narrow screens the sidebar slides over the content with a dimmed
//! overlay; clicking the overlay or a link closes it again.

use leptos::prelude::*;

use crate::state::ui::SIDEBAR_NAVIGATION;

#[component]
pub fn Sidebar(#[prop(into)] open: Signal<bool>, on_toggle: Callback<()>) -> impl IntoView {
    let panel_class = move || {
        if open.get() { "sidebar sidebar--open" } else { "sidebar" }
    };

    view! {
        <Show when=move || open.get()>
            <div class="sidebar__overlay" on:click=move |_| on_toggle.run(())></div>
        </Show>

        <aside class=panel_class>
            <div class="sidebar__header">
                <h2 class="sidebar__title">"Navigation"</h2>
                <button class="sidebar__close" on:click=move |_| on_toggle.run(()) title="Close sidebar">
                    "✕"
                </button>
            </div>
            <nav class="sidebar__nav">
                {SIDEBAR_NAVIGATION
                    .iter()
                    .map(|item| {
                        view! {
                            <a
                                href=item.href
                                class="sidebar__link"
                                on:click=move |_| {
                                    if open.get_untracked() {
                                        on_toggle.run(());
                                    }
                                }
                            >
                                {item.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
