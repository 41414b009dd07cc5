//! Route Tests
//!
//! Request/response behavior of each route on the happy path.

use std::sync::Arc;

use folio_core::ManualClock;
use serde_json::json;

use crate::common::*;

#[test]
fn fresh_site_serves_empty_documents() {
    let (executor, _dir) = create_executor();

    let resp = get(&executor, "/api/data");
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, json!({}));

    let resp = get(&executor, "/api/messages");
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, json!([]));
}

#[test]
fn add_then_update_a_project() {
    let (executor, _dir) = create_executor();

    let resp = post(&executor, "/api/item", json!({"section": "projects", "payload": {"name": "A"}}));
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, json!({"ok": true, "id": 1}));

    let resp = post(
        &executor,
        "/api/item",
        json!({"section": "projects", "payload": {"id": 1, "name": "B"}}),
    );
    assert_eq!(resp.body, json!({"ok": true, "id": 1}));

    let resp = get(&executor, "/api/data");
    assert_eq!(resp.body, json!({"projects": [{"id": 1, "name": "B"}]}));
}

#[test]
fn explicit_id_is_echoed_verbatim() {
    let (executor, _dir) = create_executor();
    post(&executor, "/api/item", json!({"section": "posts", "payload": {"title": "x"}}));

    let resp = post(
        &executor,
        "/api/item",
        json!({"section": "posts", "payload": {"id": "1", "title": "y"}}),
    );
    assert_eq!(resp.body, json!({"ok": true, "id": "1"}));

    // Matched record 1 and merged the payload into it, id included
    let resp = get(&executor, "/api/data");
    assert_eq!(resp.body, json!({"posts": [{"id": "1", "title": "y"}]}));
}

#[test]
fn delete_removes_matching_records_only() {
    let (executor, _dir) = create_executor();
    for name in ["A", "B", "C"] {
        post(&executor, "/api/item", json!({"section": "projects", "payload": {"name": name}}));
    }

    let resp = post(&executor, "/api/delete", json!({"section": "projects", "id": "2"}));
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, json!({"ok": true}));

    let resp = get(&executor, "/api/data");
    assert_eq!(
        resp.body,
        json!({"projects": [{"name": "A", "id": 1}, {"name": "C", "id": 3}]})
    );
}

#[test]
fn delete_of_unknown_section_still_acknowledges() {
    let (executor, _dir) = create_executor();

    let resp = post(&executor, "/api/delete", json!({"section": "nothing", "id": 9}));
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, json!({"ok": true}));
    assert_eq!(get(&executor, "/api/data").body, json!({}));
}

#[test]
fn messages_are_listed_newest_first() {
    let clock = Arc::new(ManualClock::at(1_000));
    let (executor, _dir) = create_executor_with_clock(clock.clone());

    let resp = post(
        &executor,
        "/api/message",
        json!({"name": "Jo", "email": "jo@x.com", "message": "hi"}),
    );
    assert_eq!(resp.body, json!({"ok": true}));
    clock.advance(5);
    post(
        &executor,
        "/api/message",
        json!({"name": "Al", "email": "al@x.com", "message": "yo"}),
    );

    let list = get(&executor, "/api/messages").body;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["name"], json!("Al"));
    assert_eq!(list[0]["id"], json!(1_005));
    assert_eq!(list[1]["name"], json!("Jo"));
    assert_eq!(list[1]["created"], json!(1_000));
}

#[test]
fn message_delete_by_string_id() {
    let (executor, _dir) = create_executor();
    post(
        &executor,
        "/api/message",
        json!({"name": "Jo", "email": "jo@x.com", "message": "hi"}),
    );

    let resp = post(&executor, "/api/message/delete", json!({"id": "1000"}));
    assert_eq!(resp.body, json!({"ok": true}));
    assert_eq!(get(&executor, "/api/messages").body, json!([]));

    // Deleting again is still acknowledged
    let resp = post(&executor, "/api/message/delete", json!({"id": 1000}));
    assert_eq!(resp.status, 200);
}
