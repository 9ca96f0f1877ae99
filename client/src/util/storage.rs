//! Browser `localStorage` access behind a small key-value trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! Theme preference and the auth session live in `localStorage`. Callers
//! take `&impl KeyValueStore` so the token/theme logic can run against
//! `MemoryStore` in tests, while the app uses `BrowserStorage`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Minimal string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage` in the browser; a silent no-op everywhere else.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("localStorage write failed for {key}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-memory store used by tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with(pairs: &[(&str, &str)]) -> Self {
        let store = Self::default();
        for (k, v) in pairs {
            store.set(k, v);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
