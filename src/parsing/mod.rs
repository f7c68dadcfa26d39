//! parser for the ERV campaign language

use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::language::{Campaign, LoadingError};

mod errors;
mod line;
pub mod parser;
pub mod tree;

pub use errors::{Location, ParsingError, Reason};
pub use line::{Line, TAB_WIDTH};

/// Read a file and return an owned String. A filename of "-" reads standard
/// input instead.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    if filename.to_str() == Some("-") {
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(content),
            Err(error) => {
                debug!(?error);
                Err(LoadingError {
                    problem: "Failed reading standard input".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                })
            }
        };
    }

    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// The outcome of parsing a program: the campaign, as complete as could be
/// made of the source, and every problem found along the way in the order
/// they were encountered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parsed {
    pub campaign: Campaign,
    pub errors: Vec<ParsingError>,
}

impl Parsed {
    pub fn is_valid(&self) -> bool {
        self.errors
            .is_empty()
    }
}

/// Parse program text into a Campaign. This always succeeds in returning
/// something; problems are reported alongside the campaign rather than
/// instead of it.
pub fn parse(content: &str) -> Parsed {
    let (forest, errors) = tree::build(content);
    debug!(
        "Found {} top level line{}",
        forest.len(),
        if forest.len() == 1 { "" } else { "s" }
    );

    let mut parser = parser::Parser::with_errors(errors);
    let campaign = parser.read_campaign(&forest);
    let errors = parser.finish();

    debug!(
        "Found {} step{}, {} error{}",
        campaign
            .steps
            .len(),
        if campaign
            .steps
            .len()
            == 1
        {
            ""
        } else {
            "s"
        },
        errors.len(),
        if errors.len() == 1 { "" } else { "s" }
    );

    Parsed { campaign, errors }
}
