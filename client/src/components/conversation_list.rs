//! Left column of the Messages page: search box and contact rows.

use leptos::prelude::*;

use crate::state::messages::{Conversation, MessagesState};

#[component]
pub fn ConversationList(state: RwSignal<MessagesState>) -> impl IntoView {
    let on_search = move |ev| {
        let query = event_target_value(&ev);
        state.update(|s| s.search = query);
    };

    view! {
        <aside class="conversation-list">
            <div class="conversation-list__search">
                <input
                    class="field-input"
                    type="search"
                    placeholder="Search conversations"
                    prop:value=move || state.get().search
                    on:input=on_search
                />
            </div>

            <Show when=move || state.get().loading>
                <p class="conversation-list__status">"Loading conversations..."</p>
            </Show>
            <Show when=move || state.get().error.is_some()>
                <p class="conversation-list__status conversation-list__status--error">
                    {move || state.get().error.unwrap_or_default()}
                </p>
            </Show>

            <ul class="conversation-list__items">
                <For
                    each=move || state.get().visible_conversations()
                    key=Conversation::clone
                    let:conversation
                >
                    {
                        let id = conversation.id.clone();
                        let select_id = id.clone();
                        let row_class = move || {
                            if state.get().selected_id.as_deref() == Some(id.as_str()) {
                                "conversation-row conversation-row--active"
                            } else {
                                "conversation-row"
                            }
                        };
                        view! {
                            <li class=row_class on:click=move |_| {
                                state.update(|s| {
                                    s.select(&select_id);
                                });
                            }>
                                <img class="conversation-row__avatar" src=conversation.avatar.clone() alt=conversation.name.clone() />
                                <div class="conversation-row__body">
                                    <div class="conversation-row__top">
                                        <span class="conversation-row__name">{conversation.name.clone()}</span>
                                        <span class="conversation-row__time">{conversation.timestamp.clone()}</span>
                                    </div>
                                    <div class="conversation-row__bottom">
                                        <span class="conversation-row__preview">{conversation.last_message.clone()}</span>
                                        {(conversation.unread > 0)
                                            .then(|| view! { <span class="conversation-row__badge">{conversation.unread}</span> })}
                                    </div>
                                </div>
                            </li>
                        }
                    }
                </For>
            </ul>
        </aside>
    }
}
