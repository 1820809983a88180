use super::*;

#[test]
fn test_get_missing_key_is_none() {
    let store = InMemoryStore::new();

    let value = store.get("github-favorites").unwrap();

    assert_eq!(value, None);
}

#[test]
fn test_set_then_get_round_trips() {
    let store = InMemoryStore::new();

    store.set("github-favorites", "[]").unwrap();
    let value = store.get("github-favorites").unwrap();

    assert_eq!(value.as_deref(), Some("[]"));
}

#[test]
fn test_set_replaces_previous_value() {
    let store = InMemoryStore::new();

    store.set("github-favorites", "first").unwrap();
    store.set("github-favorites", "second").unwrap();

    assert_eq!(
        store.get("github-favorites").unwrap().as_deref(),
        Some("second")
    );
}

#[test]
fn test_keys_are_independent() {
    let store = InMemoryStore::new();

    store.set("a", "1").unwrap();
    store.set("b", "2").unwrap();

    assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
    assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
}

#[test]
fn test_storage_error_messages() {
    assert_eq!(
        StorageError::Read("disk on fire".to_string()).to_string(),
        "Failed to read from the store: disk on fire"
    );
    assert_eq!(
        StorageError::Write("disk full".to_string()).to_string(),
        "Failed to write to the store: disk full"
    );
}
