//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the header and the auth forms to coordinate identity-dependent
//! rendering. The source of truth is browser storage (`util::auth`); this
//! signal mirrors it for reactive rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{AuthResponse, AuthUser};
use crate::util::auth::{clear_session, load_user, save_session};
use crate::util::storage::KeyValueStore;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub loading: bool,
}

impl AuthState {
    /// Restore state from a previously stored session.
    pub fn restore(store: &impl KeyValueStore) -> Self {
        Self { user: load_user(store), loading: false }
    }

    /// Record a successful sign up or login.
    pub fn sign_in(&mut self, store: &impl KeyValueStore, resp: &AuthResponse) {
        save_session(store, resp);
        self.user = Some(resp.user.clone());
        self.loading = false;
    }

    pub fn sign_out(&mut self, store: &impl KeyValueStore) {
        clear_session(store);
        self.user = None;
    }

    /// Name shown in the header.
    pub fn display_name(&self) -> &str {
        self.user.as_ref().map_or("Guest", |u| u.username.as_str())
    }

    pub fn display_email(&self) -> &str {
        self.user.as_ref().map_or("Not signed in", |u| u.email.as_str())
    }

    /// Generated avatar URL keyed by username.
    pub fn avatar_url(&self) -> String {
        avatar_for(self.user.as_ref().map_or("guest", |u| u.username.as_str()))
    }
}

/// Placeholder avatar service URL for a seed string.
pub fn avatar_for(seed: &str) -> String {
    format!("https://i.pravatar.cc/150?u={seed}")
}
