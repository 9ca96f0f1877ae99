use super::*;

#[test]
fn memory_store_set_get_remove() {
    let store = MemoryStore::default();
    assert_eq!(store.get("theme"), None);

    store.set("theme", "dark");
    assert_eq!(store.get("theme").as_deref(), Some("dark"));

    store.set("theme", "light");
    assert_eq!(store.get("theme").as_deref(), Some("light"));
    assert_eq!(store.len(), 1);

    store.remove("theme");
    assert_eq!(store.get("theme"), None);
}

#[test]
fn memory_store_with_seeds_entries() {
    let store = MemoryStore::with(&[("a", "1"), ("b", "2")]);
    assert_eq!(store.len(), 2);
    assert_eq!(store.get("b").as_deref(), Some("2"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_off_browser() {
    let store = BrowserStorage;
    store.set("access_token", "abc");
    assert_eq!(store.get("access_token"), None);
    store.remove("access_token");
}
