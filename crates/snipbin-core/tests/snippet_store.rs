use std::fs;

use chrono::{TimeZone, Utc};
use snipbin_core::crypto::{decrypt, encrypt, reveal, Reveal};
use snipbin_core::input::CreateSnippetInput;
use snipbin_core::storage::{ExpiryPolicy, NewSnippet, SnippetStore, SqliteSnippetStore};
use snipbin_core::SnipError;
use tempfile::tempdir;

#[test]
fn test_init_open_round_trip() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("snippets.db");

    SqliteSnippetStore::init(&path).expect("init should succeed");
    assert!(path.exists());

    let mut store = SqliteSnippetStore::open(&path).expect("open should succeed");
    store
        .create(&NewSnippet::new("persisted", "opaque"))
        .expect("create should succeed");
    drop(store);

    let reopened = SqliteSnippetStore::open(&path).expect("reopen should succeed");
    assert_eq!(reopened.get("persisted").unwrap().content, "opaque");
    assert_eq!(reopened.count().unwrap(), 1);
}

#[test]
fn test_init_refuses_existing_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("snippets.db");

    SqliteSnippetStore::init(&path).expect("init should succeed");
    let result = SqliteSnippetStore::init(&path);
    assert!(matches!(result, Err(SnipError::StoreExists(_))));
}

#[test]
fn test_open_missing_file_fails() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("missing.db");

    let result = SqliteSnippetStore::open(&path);
    assert!(matches!(result, Err(SnipError::StoreNotFound(_))));
}

#[test]
fn test_open_foreign_file_fails() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("not-a-store.db");
    fs::write(&path, "just some text, not sqlite at all").expect("write");

    let result = SqliteSnippetStore::open(&path);
    assert!(result.is_err());
}

#[test]
fn test_hello_world_scenario() {
    let mut store = SqliteSnippetStore::open_in_memory().expect("open");
    let content = encrypt("hello world", "secret").expect("encrypt");

    store
        .create(&NewSnippet::new("abc123", content.clone()))
        .expect("create");

    let snippet = store.get("abc123").expect("get");
    assert_eq!(snippet.content, content);
    assert_eq!(decrypt(&snippet.content, "secret").unwrap(), "hello world");
    assert!(matches!(
        decrypt(&snippet.content, "wrong"),
        Err(SnipError::IncorrectPassword)
    ));
    assert_eq!(reveal(&snippet.content, "wrong"), Reveal::IncorrectPassword);
}

#[test]
fn test_burn_at_creation_is_unlisted_under_both_policies() {
    let created = Utc.with_ymd_and_hms(2026, 2, 1, 9, 0, 0).unwrap();
    let later = Utc.with_ymd_and_hms(2026, 2, 1, 10, 0, 0).unwrap();

    for policy in [ExpiryPolicy::Clock, ExpiryPolicy::CreationRelative] {
        let mut store = SqliteSnippetStore::open_in_memory()
            .expect("open")
            .with_expiry_policy(policy);
        store
            .create(
                &NewSnippet::new("instant", "opaque")
                    .with_created_at(created)
                    .with_burn_at(created),
            )
            .expect("create");

        assert!(store.list_visible_at(later).unwrap().is_empty());

        let lookup = store.get_at("instant", later);
        match policy {
            ExpiryPolicy::CreationRelative => {
                assert_eq!(lookup.expect("legacy lookup").content, "opaque")
            }
            ExpiryPolicy::Clock => assert!(matches!(lookup, Err(SnipError::SnippetBurned(_)))),
        }
    }
}

#[test]
fn test_create_from_json_input() {
    let mut store = SqliteSnippetStore::open_in_memory().expect("open");
    let snippet = CreateSnippetInput::from_json(
        r#"{"url":"fromjson","content":"opaque","burnAt":"2099-01-01T00:00:00Z"}"#,
    )
    .and_then(CreateSnippetInput::into_new_snippet)
    .expect("valid input");

    store.create(&snippet).expect("create");

    let stored = store.get("fromjson").expect("get");
    assert_eq!(
        stored.burn_at,
        Some(Utc.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap())
    );
    assert_eq!(store.list_visible().unwrap().len(), 1);
}
