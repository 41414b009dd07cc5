//! HTTP binding for the command set.
//!
//! The web server itself is not part of Folio. Whatever serves requests
//! hands the method, path and decoded JSON body to [`Executor::handle`] and
//! writes back the returned status and body.
//!
//! | Method | Path | Command |
//! |--------|------|---------|
//! | GET | `/api/data` | `ContentGet` |
//! | POST | `/api/item` | `ContentUpsert` |
//! | POST | `/api/delete` | `ContentDelete` |
//! | GET | `/api/messages` | `MessageList` |
//! | POST | `/api/message` | `MessagePost` |
//! | POST | `/api/message/delete` | `MessageDelete` |

use folio_core::is_truthy;
use serde_json::{Map, Value};

use crate::{Command, Error, Executor, Result};

/// A response ready to be written by the HTTP server
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// Status code
    pub status: u16,
    /// JSON body
    pub body: Value,
}

/// Method bound to `path`, if the path is an API route
fn route_method(path: &str) -> Option<&'static str> {
    match path {
        "/api/data" | "/api/messages" => Some("GET"),
        "/api/item" | "/api/delete" | "/api/message" | "/api/message/delete" => Some("POST"),
        _ => None,
    }
}

impl Command {
    /// Decode a request into a command.
    ///
    /// `body` is the parsed JSON body, if any. A missing or `null` body is
    /// treated as `{}`. An upsert without a (truthy) `payload` gets `{}`.
    pub fn from_http(method: &str, path: &str, body: Option<&Value>) -> Result<Command> {
        let expected = route_method(path).ok_or_else(|| Error::NotFound {
            path: path.to_string(),
        })?;
        if !method.eq_ignore_ascii_case(expected) {
            return Err(Error::MethodNotAllowed {
                method: method.to_string(),
                path: path.to_string(),
            });
        }

        let empty = Map::new();
        let body = match body {
            None | Some(Value::Null) => &empty,
            Some(Value::Object(fields)) => fields,
            Some(_) => return Err(Error::invalid_request("request body must be a JSON object")),
        };

        let cmd = match path {
            "/api/data" => Command::ContentGet,
            "/api/messages" => Command::MessageList,
            "/api/item" => Command::ContentUpsert {
                section: required_str(body, "section")?,
                payload: match body.get("payload") {
                    Some(payload) if is_truthy(payload) => payload.clone(),
                    _ => Value::Object(Map::new()),
                },
            },
            "/api/delete" => Command::ContentDelete {
                section: required_str(body, "section")?,
                id: required_id(body)?,
            },
            "/api/message" => Command::MessagePost {
                name: required_str(body, "name")?,
                email: required_str(body, "email")?,
                message: required_str(body, "message")?,
            },
            _ => Command::MessageDelete {
                id: required_id(body)?,
            },
        };
        Ok(cmd)
    }
}

fn required_str(body: &Map<String, Value>, field: &str) -> Result<String> {
    match body.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::String(_)) | Some(Value::Null) | None => {
            Err(Error::invalid_request(format!("{} is required", field)))
        }
        Some(_) => Err(Error::invalid_request(format!("{} must be a string", field))),
    }
}

fn required_id(body: &Map<String, Value>) -> Result<Value> {
    match body.get("id") {
        Some(id) if !id.is_null() => Ok(id.clone()),
        _ => Err(Error::invalid_request("id is required")),
    }
}

impl Executor {
    /// Decode, execute and render one request.
    ///
    /// Never fails: errors become their status code with an
    /// `{"error": ...}` body.
    pub fn handle(&self, method: &str, path: &str, body: Option<&Value>) -> HttpResponse {
        match Command::from_http(method, path, body).and_then(|cmd| self.execute(cmd)) {
            Ok(output) => HttpResponse {
                status: 200,
                body: output.into_json(),
            },
            Err(e) => HttpResponse {
                status: e.status_code(),
                body: e.to_json(),
            },
        }
    }
}
