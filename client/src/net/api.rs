//! REST endpoints used by the pages.
//!
//! Each helper builds its client from the process config, so pages only
//! deal in request/response DTOs.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::client::{ApiClient, ApiError};
use super::types::{AuthResponse, ConversationDto, ConversationList, LoginRequest, RegisterRequest};
use crate::config::load_config;

pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGIN_PATH: &str = "/auth/login";
pub const CONVERSATIONS_PATH: &str = "/conversations";

fn client() -> ApiClient {
    ApiClient::from_config(load_config())
}

/// Create an account via `POST /auth/register`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server rejects it.
pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    client().post(REGISTER_PATH, request).await
}

/// Sign in via `POST /auth/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the credentials are rejected.
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    client().post(LOGIN_PATH, request).await
}

/// Fetch the conversation list via `GET /conversations`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is not a conversation list.
pub async fn fetch_conversations() -> Result<Vec<ConversationDto>, ApiError> {
    let list: ConversationList = client().get(CONVERSATIONS_PATH).await?;
    Ok(list.into_items())
}
