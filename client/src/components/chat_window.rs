//! Right column of the Messages page: header, message bubbles, composer.

use leptos::html;
use leptos::prelude::*;

use crate::state::messages::MessagesState;
use crate::util::clock::current_time_label;

#[component]
pub fn ChatWindow(state: RwSignal<MessagesState>) -> impl IntoView {
    let list_ref = NodeRef::<html::Div>::new();

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = state.with(|s| s.messages.len());
        scroll_to_bottom(list_ref);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        state.update(|s| {
            s.send_draft(current_time_label());
        });
    };

    let selected = move || state.get().selected().cloned();

    view! {
        <section class="chat-window">
            <Show
                when=move || selected().is_some()
                fallback=|| view! { <div class="chat-window__empty">"Select a conversation to start chatting."</div> }
            >
                <header class="chat-window__header">
                    <img
                        class="chat-window__avatar"
                        src=move || selected().map(|c| c.avatar).unwrap_or_default()
                        alt=move || selected().map(|c| c.name).unwrap_or_default()
                    />
                    <div class="chat-window__identity">
                        <h2 class="chat-window__name">{move || selected().map(|c| c.name).unwrap_or_default()}</h2>
                        <span class="chat-window__status">"Online"</span>
                    </div>
                </header>
            </Show>

            <div class="chat-window__messages" node_ref=list_ref>
                <For each=move || state.get().message_rows() key=|(key, _)| key.clone() let:row>
                    {
                        let (_, message) = row;
                        let mine = message.is_mine();
                        let bubble_class = if mine { "bubble bubble--mine" } else { "bubble bubble--theirs" };
                        view! {
                            <div class=bubble_class>
                                <p class="bubble__text">{message.text}</p>
                                <span class="bubble__time">{message.timestamp}</span>
                            </div>
                        }
                    }
                </For>
            </div>

            <form class="chat-window__composer" on:submit=on_submit>
                <input
                    class="field-input chat-window__input"
                    type="text"
                    placeholder="Type a message..."
                    prop:value=move || state.get().draft
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        state.update(|s| s.draft = text);
                    }
                />
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || state.get().draft.trim().is_empty() || state.get().selected_id.is_none()
                >
                    "Send"
                </button>
            </form>
        </section>
    }
}

fn scroll_to_bottom(list_ref: NodeRef<html::Div>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = list_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = list_ref;
    }
}
