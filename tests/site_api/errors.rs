//! Error Handling Tests
//!
//! Client mistakes map to 4xx with an `{"error": ...}` body and never touch
//! the documents.

use serde_json::json;

use crate::common::*;

#[test]
fn missing_section_is_400() {
    let (executor, _dir) = create_executor();

    let resp = post(&executor, "/api/item", json!({"payload": {"name": "A"}}));
    assert_eq!(resp.status, 400);
    assert!(resp.body["error"].as_str().unwrap().contains("section"));
    assert_eq!(get(&executor, "/api/data").body, json!({}));
}

#[test]
fn missing_message_field_is_400() {
    let (executor, _dir) = create_executor();

    let resp = post(&executor, "/api/message", json!({"name": "Jo", "email": "jo@x.com"}));
    assert_eq!(resp.status, 400);
    assert!(resp.body["error"].as_str().unwrap().contains("message"));
    assert_eq!(get(&executor, "/api/messages").body, json!([]));
}

#[test]
fn missing_id_is_400() {
    let (executor, _dir) = create_executor();

    assert_eq!(post(&executor, "/api/delete", json!({"section": "s"})).status, 400);
    assert_eq!(post(&executor, "/api/message/delete", json!({})).status, 400);
}

#[test]
fn body_must_be_an_object() {
    let (executor, _dir) = create_executor();

    let resp = post(&executor, "/api/item", json!("projects"));
    assert_eq!(resp.status, 400);
}

#[test]
fn unknown_path_is_404() {
    let (executor, _dir) = create_executor();

    let resp = get(&executor, "/api/unknown");
    assert_eq!(resp.status, 404);
    assert!(resp.body.get("error").is_some());
}

#[test]
fn wrong_method_is_405() {
    let (executor, _dir) = create_executor();

    assert_eq!(get(&executor, "/api/item").status, 405);
    assert_eq!(post(&executor, "/api/data", json!({})).status, 405);
}
