//! Messages page: contact list on the left, selected conversation on the right.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page-scoped `MessagesState`; nothing here outlives the route. With mock
//! data enabled the built-in contacts render immediately. Otherwise the page
//! issues a single `GET /conversations` after mount and renders whatever it
//! returns, or keeps an empty list with an inline error.
//!
//! TRADE-OFFS
//! ==========
//! Sent messages stay in the browser. There is no delivery, polling, or retry.

use leptos::prelude::*;

use crate::components::chat_window::ChatWindow;
use crate::components::conversation_list::ConversationList;
use crate::config::load_config;
use crate::state::messages::{DataSource, MessagesState};

#[component]
pub fn MessagesPage() -> impl IntoView {
    let source = DataSource::from_mock_flag(load_config().features.mock_data);
    let state = RwSignal::new(MessagesState::new(source));

    if source == DataSource::Remote {
        load_conversations(state);
    }

    view! {
        <div class="messages-page">
            <ConversationList state=state />
            <ChatWindow state=state />
        </div>
    }
}

fn load_conversations(state: RwSignal<MessagesState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_conversations().await;
        let _ = state.try_update(|s| s.load_remote(result));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = state;
    }
}
