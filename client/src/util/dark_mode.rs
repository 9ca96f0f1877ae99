//! Dark mode initialization and toggle.
//!
//! Reads the user's preference from `localStorage` and toggles the `dark`
//! class on the `<html>` element. Toggle writes back to `localStorage` and
//! updates that class. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::storage::{BrowserStorage, KeyValueStore};

pub const STORAGE_KEY: &str = "theme";

/// Decide the initial theme: an explicit stored choice wins, otherwise the
/// system preference applies.
pub fn resolve(saved: Option<&str>, prefers_dark: bool) -> bool {
    match saved {
        Some("dark") => true,
        Some("light") => false,
        _ => prefers_dark,
    }
}

pub fn theme_name(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Read the dark mode preference from localStorage, falling back to the
/// system `prefers-color-scheme`.
pub fn read_preference() -> bool {
    let saved = BrowserStorage.get(STORAGE_KEY);
    resolve(saved.as_deref(), system_prefers_dark())
}

/// Add or remove the `dark` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.class_list().toggle_with_force("dark", enabled);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, persist it to `store`, and apply it.
pub fn toggle_in(store: &impl KeyValueStore, current: bool) -> bool {
    let next = !current;
    apply(next);
    store.set(STORAGE_KEY, theme_name(next));
    next
}

/// Toggle dark mode and persist the new preference to localStorage.
pub fn toggle(current: bool) -> bool {
    toggle_in(&BrowserStorage, current)
}
