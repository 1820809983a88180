use super::*;
use tempfile::tempdir;

#[test]
fn test_get_missing_key_is_none() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path());

    let value = store.get("github-favorites").unwrap();

    assert_eq!(value, None);
}

#[test]
fn test_get_missing_directory_is_none() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path().join("never-created"));

    let value = store.get("github-favorites").unwrap();

    assert_eq!(value, None);
}

#[test]
fn test_set_creates_directory_and_round_trips() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nested").join("data"));

    store.set("github-favorites", "[]").unwrap();

    assert_eq!(
        store.get("github-favorites").unwrap().as_deref(),
        Some("[]")
    );
}

#[test]
fn test_set_replaces_previous_value() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path());

    store.set("github-favorites", "first").unwrap();
    store.set("github-favorites", "second").unwrap();

    assert_eq!(
        store.get("github-favorites").unwrap().as_deref(),
        Some("second")
    );
}

#[test]
fn test_keys_map_to_separate_files() {
    let dir = tempdir().unwrap();
    let store = FileStore::new(dir.path());

    store.set("a", "1").unwrap();
    store.set("b", "2").unwrap();

    assert!(dir.path().join("a.json").exists());
    assert!(dir.path().join("b.json").exists());
    assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));
}

#[test]
fn test_set_into_unwritable_root_is_an_error() {
    // A root that collides with an existing file cannot be created.
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    let store = FileStore::new(&blocker);

    let result = store.set("github-favorites", "[]");

    assert!(matches!(result, Err(StorageError::Write(_))));
}
