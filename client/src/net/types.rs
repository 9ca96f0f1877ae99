//! Request and response DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON. Conversation payloads are read
//! leniently (numeric or string ids, several field aliases) because the
//! backend contract is not versioned.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User identity returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub username: String,
    pub email: String,
}

/// Successful response of `POST /auth/register` and `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub user: AuthUser,
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Error body shape; only `message` is read.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// A conversation as returned by `GET /conversations`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ConversationDto {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, alias = "title", alias = "display_name", alias = "displayName")]
    pub name: Option<String>,
    #[serde(default, alias = "avatar", alias = "avatarUrl")]
    pub avatar_url: Option<String>,
    #[serde(default, alias = "lastMessage")]
    pub last_message: Option<String>,
    #[serde(default, alias = "timestamp", alias = "updatedAt")]
    pub updated_at: Option<String>,
    #[serde(default, alias = "unread", alias = "unreadCount")]
    pub unread_count: Option<u32>,
}

/// `GET /conversations` may answer with a bare list or wrap it.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ConversationList {
    Bare(Vec<ConversationDto>),
    Data { data: Vec<ConversationDto> },
    Conversations { conversations: Vec<ConversationDto> },
}

impl ConversationList {
    pub fn into_items(self) -> Vec<ConversationDto> {
        match self {
            Self::Bare(items) | Self::Data { data: items } | Self::Conversations { conversations: items } => items,
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}
