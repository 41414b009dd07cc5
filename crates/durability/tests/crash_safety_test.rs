//! Crash safety tests for atomic JSON documents
//!
//! These tests simulate a process dying part-way through a write:
//! - Temp file written (fully or partially) but never renamed
//! - The next reader must see exactly the pre-write document
//! - The next writer must clean up and succeed

use folio_durability::{read_json, temp_path_for, write_json_atomic, AtomicJsonFile};
use proptest::prelude::*;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_interrupted_before_rename_keeps_previous_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.json");
    let before = json!({"projects": [{"id": 1, "name": "A"}]});
    write_json_atomic(&path, &before, true).unwrap();

    // Crash mid-write: half of the next document landed in the temp file
    let next = serde_json::to_vec_pretty(&json!({"projects": [{"id": 1, "name": "B"}]})).unwrap();
    fs::write(temp_path_for(&path), &next[..next.len() / 2]).unwrap();

    assert_eq!(read_json(&path), Some(before));
}

#[test]
fn test_complete_temp_without_rename_is_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("messages.json");
    write_json_atomic(&path, &json!([]), true).unwrap();

    // Crash after fsync of the temp file but before the rename
    fs::write(temp_path_for(&path), b"[{\"id\": 1}]").unwrap();

    assert_eq!(read_json(&path), Some(json!([])));
}

#[test]
fn test_next_write_after_crash_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let file = AtomicJsonFile::new(temp_dir.path().join("data.json"));
    file.write(&json!({"a": 1})).unwrap();
    fs::write(file.temp_path(), b"{\"a\": ").unwrap();

    file.write(&json!({"a": 2})).unwrap();

    assert_eq!(file.read(), Some(json!({"a": 2})));
    assert!(!file.temp_path().exists());
}

#[test]
fn test_truncated_document_reads_as_absent() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.json");
    write_json_atomic(&path, &json!({"projects": [{"id": 1}]}), true).unwrap();

    // Damage the target directly (e.g. edited by hand while stopped)
    let bytes = fs::read(&path).unwrap();
    fs::write(&path, &bytes[..bytes.len() - 5]).unwrap();

    assert_eq!(read_json(&path), None);
}

#[test]
fn test_failed_write_leaves_previous_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.json");
    write_json_atomic(&path, &json!({"ok": true}), true).unwrap();

    // Block the temp path with a directory so the temp file cannot be created
    let blocker = temp_path_for(&path);
    fs::create_dir(&blocker).unwrap();
    fs::write(blocker.join("inner"), b"x").unwrap();

    let err = write_json_atomic(&path, &json!({"ok": false}), true).unwrap_err();
    assert!(err.is_persistence_failure());
    assert_eq!(read_json(&path), Some(json!({"ok": true})));
}

fn json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 éü\"\\\\]{0,12}".prop_map(Value::String),
    ]
}

fn json_value() -> impl Strategy<Value = Value> {
    json_leaf().prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_write_then_read_returns_value(value in json_value()) {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicJsonFile::new(temp_dir.path().join("doc.json")).with_sync(false);

        file.write(&value).unwrap();
        prop_assert_eq!(file.read(), Some(value));
    }
}
