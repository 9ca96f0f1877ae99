//! Auth session persistence in browser storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign up and login store the returned tokens and identity here; the HTTP
//! client reads the access token for every request and clears it on 401.
//! Tokens have no expiry or refresh handling.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::storage::KeyValueStore;
use crate::net::types::{AuthResponse, AuthUser};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USERNAME_KEY: &str = "username";
pub const EMAIL_KEY: &str = "email";

/// Route the browser is sent to after an unauthorized response or sign out.
pub const LOGIN_PATH: &str = "/login";

/// Persist identity and tokens from a successful auth response.
pub fn save_session(store: &impl KeyValueStore, resp: &AuthResponse) {
    store.set(USERNAME_KEY, &resp.user.username);
    store.set(EMAIL_KEY, &resp.user.email);
    store.set(ACCESS_TOKEN_KEY, &resp.access_token);
    match &resp.refresh_token {
        Some(token) => store.set(REFRESH_TOKEN_KEY, token),
        None => store.remove(REFRESH_TOKEN_KEY),
    }
}

/// Remove every session key.
pub fn clear_session(store: &impl KeyValueStore) {
    for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USERNAME_KEY, EMAIL_KEY] {
        store.remove(key);
    }
}

/// Restore the signed-in identity, if a username was stored.
pub fn load_user(store: &impl KeyValueStore) -> Option<AuthUser> {
    let username = store.get(USERNAME_KEY).filter(|u| !u.is_empty())?;
    let email = store.get(EMAIL_KEY).unwrap_or_default();
    Some(AuthUser { username, email })
}

/// Stored access token, ignoring empty values.
pub fn access_token(store: &impl KeyValueStore) -> Option<String> {
    store.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
}

/// Drop the access token after a 401. The caller redirects to [`LOGIN_PATH`].
pub fn handle_unauthorized(store: &impl KeyValueStore) {
    store.remove(ACCESS_TOKEN_KEY);
}

/// Full page navigation, discarding in-memory app state.
pub fn hard_redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
