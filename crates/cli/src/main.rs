//! Folio CLI - administrative access to a site's data directory.
//!
//! `folio [--data-dir DIR] [-v...] COMMAND`: runs one command, prints the
//! JSON result to stdout and exits.
//!
//! Exit codes: 0 on success, 2 for an invalid request, 1 for any other
//! failure.

mod commands;
mod parse;

use std::process;

use clap::ArgMatches;
use folio_executor::{Error, Executor, Site, Value};
use tracing_subscriber::filter::LevelFilter;

use commands::build_cli;
use parse::{matches_to_action, CliAction};

const DEFAULT_DATA_DIR: &str = "./data";

fn main() {
    let matches = build_cli().get_matches();
    init_logging(matches.get_count("verbose"));

    let exit_code = run(&matches);
    process::exit(exit_code);
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn run(matches: &ArgMatches) -> i32 {
    let data_dir = matches
        .get_one::<String>("data-dir")
        .map(|s| s.as_str())
        .unwrap_or(DEFAULT_DATA_DIR);

    let action = match matches_to_action(matches) {
        Ok(action) => action,
        Err(e) => return report(&e),
    };

    let site = match Site::open(data_dir) {
        Ok(site) => site,
        Err(e) => return report(&Error::from(e)),
    };

    match action {
        CliAction::Init => {
            let paths = site.paths();
            print_json(&serde_json::json!({
                "data_dir": paths.root().display().to_string(),
                "config": paths.config().display().to_string(),
                "content": paths.content().display().to_string(),
                "messages": paths.messages().display().to_string(),
            }));
            0
        }
        CliAction::Execute(cmd) => match Executor::new(site).execute(cmd) {
            Ok(output) => {
                print_json(&output.into_json());
                0
            }
            Err(e) => report(&e),
        },
    }
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(_) => println!("{}", value),
    }
}

fn report(e: &Error) -> i32 {
    eprintln!("(error) {}", e);
    if matches!(e, Error::InvalidRequest { .. }) {
        2
    } else {
        1
    }
}
