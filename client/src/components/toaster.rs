//! Renders the live toast list, one stack per screen anchor.
//!
//! DESIGN
//! ======
//! Toasts are keyed by id and kind so a loading toast that resolves in place
//! re-renders with its new icon and style.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastPosition, ToastState};

/// Mount once near the root; reads the `ToastState` context.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster" aria-live="polite">
            {ToastPosition::ALL
                .into_iter()
                .map(|position| {
                    view! {
                        <div class=format!("toaster__stack toaster__stack--{}", position.as_str())>
                            <For
                                each=move || toasts.get().at(position)
                                key=|toast| (toast.id.clone(), toast.kind)
                                let:toast
                            >
                                <ToastItem toast=toast />
                            </For>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let id = toast.id.clone();
    let on_close = move |_| toasts.update(|s| s.dismiss(&id));
    let icon = toast.icon();
    let spinning = toast.kind == ToastKind::Loading;

    view! {
        <div class=format!("toast toast--{}", toast.kind.as_str()) style=toast.style.to_css() role="status">
            {spinning.then(|| view! { <span class="toast__spinner" aria-hidden="true"></span> })}
            {icon.map(|glyph| view! { <span class="toast__icon">{glyph}</span> })}
            <span class="toast__message">{toast.message}</span>
            <button class="toast__close" on:click=on_close title="Dismiss">
                "✕"
            </button>
        </div>
    }
}
