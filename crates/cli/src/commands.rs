//! Clap command tree definition.

use clap::{Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("folio")
        .about("Crash-safe JSON storage for a small content site")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .value_name("DIR")
                .help("Data directory (default: ./data)")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log more detail to stderr (repeat for more)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(Command::new("init").about("Create the data directory and its documents"))
        .subcommand(build_content())
        .subcommand(build_messages())
}

fn build_content() -> Command {
    Command::new("content")
        .about("Site content sections")
        .subcommand_required(true)
        .subcommand(Command::new("get").about("Print the whole content document"))
        .subcommand(
            Command::new("upsert")
                .about("Insert or merge a record into a section")
                .arg(Arg::new("section").required(true).help("Section name"))
                .arg(
                    Arg::new("payload")
                        .required(true)
                        .help("Record as JSON, e.g. '{\"name\":\"A\"}'"),
                ),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete records with a matching id from a section")
                .arg(Arg::new("section").required(true).help("Section name"))
                .arg(Arg::new("id").required(true).help("Record id")),
        )
}

fn build_messages() -> Command {
    Command::new("messages")
        .about("Contact-form messages")
        .subcommand_required(true)
        .subcommand(Command::new("list").about("Print messages, newest first"))
        .subcommand(
            Command::new("post")
                .about("Record a new message")
                .arg(Arg::new("name").required(true))
                .arg(Arg::new("email").required(true))
                .arg(Arg::new("message").required(true)),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a message by id")
                .arg(Arg::new("id").required(true).help("Message id")),
        )
}
