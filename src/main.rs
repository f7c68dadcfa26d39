use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, Level};

use erv::parsing;

mod problem;

use problem::{Identity, Render, Terminal};

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("erv")
        .version(VERSION)
        .propagate_version(true)
        .about("The ERV marketing campaign language.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Output diagnostic logging to standard error."),
        )
        .subcommand(
            Command::new("check")
                .about("Syntax-check the given campaign")
                .arg(
                    Arg::new("concise")
                        .long("concise")
                        .action(ArgAction::SetTrue)
                        .help("Report each problem on a single line without showing the source."),
                )
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for colour even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the campaign you want to check, or '-' for standard input."),
                ),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse the given campaign and print the result as JSON")
                .arg(
                    Arg::new("compact")
                        .long("compact")
                        .action(ArgAction::SetTrue)
                        .help("Print the JSON on a single line rather than indented."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the campaign you want to parse, or '-' for standard input."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let code = match matches.subcommand() {
        Some(("check", submatches)) => run_check(submatches),
        Some(("parse", submatches)) => run_parse(submatches),
        Some(_) => {
            println!("No valid subcommand was used");
            2
        }
        None => {
            println!("usage: erv [COMMAND] ...");
            println!("Try '--help' for more information.");
            2
        }
    };

    std::process::exit(code);
}

fn run_check(submatches: &ArgMatches) -> i32 {
    let renderer: Box<dyn Render> =
        if submatches.get_flag("raw-control-chars") || std::io::stdout().is_terminal() {
            Box::new(Terminal)
        } else {
            Box::new(Identity)
        };

    let filename = match submatches.get_one::<String>("filename") {
        Some(filename) => Path::new(filename),
        None => return 2,
    };

    let content = match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error, renderer.as_ref()));
            return 1;
        }
    };

    let parsed = parsing::parse(&content);
    debug!(valid = parsed.is_valid());

    let concise = submatches.get_flag("concise");
    for error in &parsed.errors {
        if concise {
            println!("{}", problem::concise_parsing_error(error, filename, renderer.as_ref()));
        } else {
            println!("{}\n", problem::full_parsing_error(error, filename, renderer.as_ref()));
        }
    }

    if parsed.is_valid() {
        0
    } else {
        1
    }
}

fn run_parse(submatches: &ArgMatches) -> i32 {
    let filename = match submatches.get_one::<String>("filename") {
        Some(filename) => Path::new(filename),
        None => return 2,
    };

    let content = match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error, &Identity));
            return 1;
        }
    };

    let parsed = parsing::parse(&content);

    let result = if submatches.get_flag("compact") {
        serde_json::to_string(&parsed)
    } else {
        serde_json::to_string_pretty(&parsed)
    };

    match result {
        Ok(json) => {
            println!("{}", json);
            if parsed.is_valid() {
                0
            } else {
                1
            }
        }
        Err(error) => {
            eprintln!("error: {}", error);
            2
        }
    }
}
