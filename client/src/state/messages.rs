//! View state for the Messages page: conversation list, selection, and the
//! message list of the selected conversation.
//!
//! DESIGN
//! ======
//! Single-consumer render state. Selecting a conversation replaces the
//! message list wholesale; sending appends locally and never leaves the
//! browser. Conversations come from the built-in mock set or from one
//! `GET /conversations` per page mount, depending on `FeatureFlags::mock_data`.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use crate::net::client::ApiError;
use crate::net::types::ConversationDto;
use crate::state::auth::avatar_for;

/// Sender tag for messages typed in this browser.
pub const SELF_SENDER: &str = "me";

/// Where conversations and message history come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DataSource {
    #[default]
    Mock,
    Remote,
}

impl DataSource {
    pub fn from_mock_flag(mock_data: bool) -> Self {
        if mock_data { Self::Mock } else { Self::Remote }
    }
}

/// A conversation row in the contact list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Conversation {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub last_message: String,
    pub timestamp: String,
    pub unread: u32,
}

impl Conversation {
    /// Map a backend conversation onto view fields, filling absent fields
    /// with neutral defaults.
    pub fn from_dto(dto: ConversationDto) -> Self {
        let avatar = dto
            .avatar_url
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| avatar_for(&dto.id));
        let name = dto
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| format!("Conversation {}", dto.id));
        Self {
            id: dto.id,
            name,
            avatar,
            last_message: dto.last_message.unwrap_or_default(),
            timestamp: dto.updated_at.unwrap_or_default(),
            unread: dto.unread_count.unwrap_or(0),
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.last_message.to_lowercase().contains(needle)
    }
}

/// Render key of a chat bubble: conversation id and message id.
pub type MessageKey = (String, u32);

/// A chat bubble.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: u32,
    pub sender: String,
    pub text: String,
    pub timestamp: String,
}

impl Message {
    /// Messages tagged `me` or `user` render on the right.
    pub fn is_mine(&self) -> bool {
        matches!(self.sender.as_str(), "me" | "user")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessagesState {
    pub source: DataSource,
    pub conversations: Vec<Conversation>,
    pub selected_id: Option<String>,
    pub messages: Vec<Message>,
    pub draft: String,
    pub search: String,
    pub loading: bool,
    pub error: Option<String>,
}

impl MessagesState {
    /// Initial state for `source`: mock data is ready immediately with the
    /// first conversation selected; remote data starts loading.
    pub fn new(source: DataSource) -> Self {
        match source {
            DataSource::Mock => {
                let mut state = Self { source, conversations: mock_conversations(), ..Self::default() };
                state.select_first();
                state
            }
            DataSource::Remote => Self { source, loading: true, ..Self::default() },
        }
    }

    pub fn selected(&self) -> Option<&Conversation> {
        let id = self.selected_id.as_deref()?;
        self.conversations.iter().find(|c| c.id == id)
    }

    /// Select a conversation and replace the message list with its history.
    /// Unknown ids leave the state untouched and return `false`.
    pub fn select(&mut self, id: &str) -> bool {
        if !self.conversations.iter().any(|c| c.id == id) {
            return false;
        }
        self.selected_id = Some(id.to_owned());
        self.messages = history_for(self.source, id);
        true
    }

    fn select_first(&mut self) {
        match self.conversations.first().map(|c| c.id.clone()) {
            Some(id) => {
                self.select(&id);
            }
            None => {
                self.selected_id = None;
                self.messages.clear();
            }
        }
    }

    /// Append the draft as a message from this browser and clear it.
    /// Whitespace-only drafts are ignored. Returns whether a message was added.
    pub fn send_draft(&mut self, timestamp: impl Into<String>) -> bool {
        if self.draft.trim().is_empty() {
            return false;
        }
        let id = u32::try_from(self.messages.len() + 1).unwrap_or(u32::MAX);
        let text = std::mem::take(&mut self.draft);
        self.messages.push(Message { id, sender: SELF_SENDER.to_owned(), text, timestamp: timestamp.into() });
        true
    }

    /// Messages of the selected conversation paired with their render key.
    /// Message ids restart at 1 in every conversation, so the key also
    /// carries the conversation id.
    pub fn message_rows(&self) -> Vec<(MessageKey, Message)> {
        let conversation = self.selected_id.clone().unwrap_or_default();
        self.messages
            .iter()
            .map(|m| ((conversation.clone(), m.id), m.clone()))
            .collect()
    }

    /// Conversations whose name or preview contains the search query, ignoring case.
    pub fn visible_conversations(&self) -> Vec<Conversation> {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return self.conversations.clone();
        }
        self.conversations.iter().filter(|c| c.matches(&needle)).cloned().collect()
    }

    /// Apply the outcome of `GET /conversations`. On failure the current list is kept.
    pub fn load_remote(&mut self, result: Result<Vec<ConversationDto>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.error = None;
                self.conversations = items.into_iter().map(Conversation::from_dto).collect();
                let still_there = self
                    .selected_id
                    .as_deref()
                    .is_some_and(|id| self.conversations.iter().any(|c| c.id == id));
                if !still_there {
                    self.select_first();
                }
            }
            Err(err) => {
                log::warn!("conversation fetch failed: {err}");
                self.error = Some(err.user_message());
            }
        }
    }
}

fn history_for(source: DataSource, conversation_id: &str) -> Vec<Message> {
    match source {
        DataSource::Mock => mock_messages(conversation_id),
        DataSource::Remote => Vec::new(),
    }
}

fn conversation(id: &str, name: &str, last_message: &str, timestamp: &str, unread: u32) -> Conversation {
    Conversation {
        id: id.to_owned(),
        name: name.to_owned(),
        avatar: avatar_for(&name.to_lowercase()),
        last_message: last_message.to_owned(),
        timestamp: timestamp.to_owned(),
        unread,
    }
}

/// Built-in contact list used when mock data is enabled.
pub fn mock_conversations() -> Vec<Conversation> {
    vec![
        conversation("1", "Alice", "Sounds good!", "10:42 AM", 2),
        conversation("2", "Bob", "See you then.", "9:30 AM", 0),
        conversation("3", "Charlie", "Can you send the file?", "Yesterday", 0),
        conversation("4", "Diana", "Happy Birthday!", "Yesterday", 1),
        conversation("5", "Ethan", "Project update is ready.", "2 days ago", 0),
    ]
}

/// Built-in history for a mock conversation; empty when none exists.
pub fn mock_messages(conversation_id: &str) -> Vec<Message> {
    let rows: &[(&str, &str, &str)] = match conversation_id {
        "1" => &[
            ("Alice", "Hey, are we still on for lunch tomorrow?", "10:40 AM"),
            ("me", "Yes, absolutely! 1 PM at The usual place?", "10:41 AM"),
            ("Alice", "Sounds good!", "10:42 AM"),
        ],
        "2" => &[
            ("Bob", "Meeting is confirmed for 3 PM.", "9:29 AM"),
            ("me", "Great, I will be there.", "9:29 AM"),
            ("Bob", "See you then.", "9:30 AM"),
        ],
        _ => &[],
    };
    rows.iter()
        .zip(1..)
        .map(|((sender, text, timestamp), id)| Message {
            id,
            sender: (*sender).to_owned(),
            text: (*text).to_owned(),
            timestamp: (*timestamp).to_owned(),
        })
        .collect()
}
