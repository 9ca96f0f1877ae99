//! Thin JSON HTTP client for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request goes through one interceptor pair:
//! - request: attach `Authorization: Bearer <access_token>` when a token is stored
//! - response: on 401, drop the stored token and hard-redirect to `/login`
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, raced against a
//! `gloo-timers` timeout. Server-side (SSR): every call fails with
//! [`ApiError::Unavailable`] since the backend is only reached from the browser.
//!
//! ERROR HANDLING
//! ==============
//! There is no retry. Callers get a typed [`ApiError`] and decide how to
//! surface it (inline message or toast).

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::types::ErrorBody;
use crate::config::EnvConfig;
use crate::util::auth::{access_token, handle_unauthorized};
use crate::util::storage::KeyValueStore;

pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    #[error("unauthorized")]
    Unauthorized { message: Option<String> },
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// The `message` field of the server's error body, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message } | Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text suitable for showing to the user: the server message, else the error itself.
    pub fn user_message(&self) -> String {
        self.server_message().map_or_else(|| self.to_string(), str::to_owned)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// `Bearer` header value for a stored token.
pub fn bearer_header(token: Option<&str>) -> Option<String> {
    token.map(|t| format!("Bearer {t}"))
}

/// Request interceptor: headers sent with every call.
pub fn request_headers(store: &impl KeyValueStore) -> Vec<(&'static str, String)> {
    let mut headers = vec![("Content-Type", "application/json".to_owned())];
    if let Some(auth) = bearer_header(access_token(store).as_deref()) {
        headers.push(("Authorization", auth));
    }
    headers
}

/// Response interceptor: map non-2xx statuses to errors. A 401 also clears
/// the stored access token.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] for 401 and [`ApiError::Status`] for any
/// other non-success status.
pub fn intercept_response(status: u16, body: &str, store: &impl KeyValueStore) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let message = serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.message);
    if status == 401 {
        handle_unauthorized(store);
        return Err(ApiError::Unauthorized { message });
    }
    Err(ApiError::Status { status, message })
}

/// Configured client bound to one API base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    timeout_ms: u32,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, timeout_ms: DEFAULT_TIMEOUT_MS }
    }

    pub fn from_config(config: &EnvConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    /// Absolute URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `GET` a JSON resource.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(HttpMethod::Get, path, None).await
    }

    /// `POST` a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.send(HttpMethod::Post, path, Some(json)).await
    }

    #[cfg(feature = "hydrate")]
    async fn send<T: DeserializeOwned>(&self, method: HttpMethod, path: &str, body: Option<String>) -> Result<T, ApiError> {
        use futures::future::{Either, select};
        use gloo_net::http::{Method, RequestBuilder};

        use crate::util::auth::hard_redirect;
        use crate::util::storage::BrowserStorage;

        let store = BrowserStorage;
        let url = self.url(path);
        log::debug!("{} {url}", method.as_str());

        let mut builder = RequestBuilder::new(&url).method(match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        });
        for (name, value) in request_headers(&store) {
            builder = builder.header(name, &value);
        }
        let request = match body {
            Some(json) => builder.body(json),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let send = std::pin::pin!(request.send());
        let timeout = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(self.timeout_ms));
        let resp = match select(send, timeout).await {
            Either::Left((res, _)) => res.map_err(|e| ApiError::Network(e.to_string()))?,
            Either::Right(((), _)) => {
                log::warn!("{} {url} timed out after {} ms", method.as_str(), self.timeout_ms);
                return Err(ApiError::Timeout(self.timeout_ms));
            }
        };

        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if let Err(err) = intercept_response(status, &text, &store) {
            log::warn!("{} {url} failed: {err}", method.as_str());
            if matches!(err, ApiError::Unauthorized { .. }) {
                hard_redirect(crate::util::auth::LOGIN_PATH);
            }
            return Err(err);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    #[cfg(not(feature = "hydrate"))]
    #[allow(clippy::unused_async)]
    async fn send<T: DeserializeOwned>(&self, method: HttpMethod, path: &str, body: Option<String>) -> Result<T, ApiError> {
        let _ = (method, path, body);
        Err(ApiError::Unavailable)
    }
}
