//! Persistence Tests
//!
//! Documents outlive the executor, and a failed write changes nothing.

use std::path::{Path, PathBuf};

use folio::{Executor, Site, SiteConfig};
use serde_json::json;

use crate::common::*;

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[test]
fn documents_survive_reopen() {
    let dir = tempfile::TempDir::new().unwrap();
    {
        let executor = Executor::new(Site::open(dir.path()).unwrap());
        post(&executor, "/api/item", json!({"section": "skills", "payload": {"name": "Rust"}}));
        post(
            &executor,
            "/api/message",
            json!({"name": "Jo", "email": "jo@x.com", "message": "hi"}),
        );
    }

    let executor = Executor::new(Site::open(dir.path()).unwrap());
    assert_eq!(
        get(&executor, "/api/data").body,
        json!({"skills": [{"name": "Rust", "id": 1}]})
    );
    assert_eq!(get(&executor, "/api/messages").body.as_array().unwrap().len(), 1);
    assert!(dir.path().join("folio.toml").exists());
}

#[test]
fn documents_are_pretty_printed_on_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let site = Site::open_with_config(dir.path(), SiteConfig::for_testing()).unwrap();
    let executor = Executor::new(site.clone());
    post(&executor, "/api/item", json!({"section": "projects", "payload": {"name": "A"}}));

    let text = std::fs::read_to_string(site.paths().content()).unwrap();
    assert!(text.contains('\n'));
    assert!(text.ends_with('\n'));
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, json!({"projects": [{"name": "A", "id": 1}]}));
    assert!(!temp_sibling(site.paths().content()).exists());
}

#[test]
fn failed_write_is_500_and_changes_nothing() {
    let (executor, _dir) = create_executor();
    post(&executor, "/api/item", json!({"section": "projects", "payload": {"name": "A"}}));

    let blocker = temp_sibling(executor.site().paths().content());
    std::fs::create_dir(&blocker).unwrap();
    std::fs::write(blocker.join("x"), b"x").unwrap();

    let resp = post(&executor, "/api/item", json!({"section": "projects", "payload": {"name": "B"}}));
    assert_eq!(resp.status, 500);
    assert!(resp.body["error"].as_str().unwrap().contains("persistence"));

    std::fs::remove_dir_all(&blocker).unwrap();
    assert_eq!(
        get(&executor, "/api/data").body,
        json!({"projects": [{"name": "A", "id": 1}]})
    );
}
