//! ArgMatches → Command conversion.

use clap::ArgMatches;
use folio_executor::{Command, Error, Value};

/// The result of parsing the command line.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Create the data directory and exit.
    Init,
    /// A command to execute against the site.
    Execute(Command),
}

/// Convert top-level matches into an action.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, Error> {
    match matches.subcommand() {
        Some(("init", _)) => Ok(CliAction::Init),
        Some(("content", sub)) => parse_content(sub).map(CliAction::Execute),
        Some(("messages", sub)) => parse_messages(sub).map(CliAction::Execute),
        Some((name, _)) => Err(Error::invalid_request(format!("unknown command: {}", name))),
        None => Err(Error::invalid_request("no command given")),
    }
}

fn parse_content(matches: &ArgMatches) -> Result<Command, Error> {
    match matches.subcommand() {
        Some(("get", _)) => Ok(Command::ContentGet),
        Some(("upsert", m)) => Ok(Command::ContentUpsert {
            section: arg(m, "section")?.to_string(),
            payload: parse_json_value(arg(m, "payload")?)?,
        }),
        Some(("delete", m)) => Ok(Command::ContentDelete {
            section: arg(m, "section")?.to_string(),
            id: parse_id(arg(m, "id")?),
        }),
        _ => Err(Error::invalid_request("content requires a subcommand")),
    }
}

fn parse_messages(matches: &ArgMatches) -> Result<Command, Error> {
    match matches.subcommand() {
        Some(("list", _)) => Ok(Command::MessageList),
        Some(("post", m)) => Ok(Command::MessagePost {
            name: arg(m, "name")?.to_string(),
            email: arg(m, "email")?.to_string(),
            message: arg(m, "message")?.to_string(),
        }),
        Some(("delete", m)) => Ok(Command::MessageDelete {
            id: parse_id(arg(m, "id")?),
        }),
        _ => Err(Error::invalid_request("messages requires a subcommand")),
    }
}

fn arg<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str, Error> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| Error::invalid_request(format!("{} is required", name)))
}

/// Parse a JSON argument.
pub fn parse_json_value(s: &str) -> Result<Value, Error> {
    serde_json::from_str(s).map_err(|e| Error::invalid_request(format!("invalid JSON: {}", e)))
}

/// An id argument is taken as JSON when it parses (`3`, `"3"`, `null`),
/// otherwise as a bare string.
pub fn parse_id(s: &str) -> Value {
    serde_json::from_str(s).unwrap_or_else(|_| Value::String(s.to_string()))
}
