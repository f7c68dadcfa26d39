//! Problems found while parsing. These are collected rather than returned
//! early so that a single parse reports everything it can.

use std::fmt;

use serde::Serialize;

use super::line::Line;

/// Which part of the grammar a problem was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Reason {
    Indentation,  // structural; nothing after it was read
    Nesting,      // lines indented under the trigger
    Trigger,      // first line isn't a trigger
    TriggerField, // bad day or time in a trigger
    Step,         // line isn't a step
    StepField,    // bad wait amount or unit
    CustomField,  // bad key: value line under an email
}

/// Where in the source a problem is, with enough of the original line for
/// an editor to place a marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub line_number: usize,
    pub raw_text: String,
}

impl From<&Line> for Location {
    fn from(line: &Line) -> Self {
        Location {
            line_number: line.number,
            raw_text: line
                .raw
                .clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsingError {
    pub line: Location,
    pub message: String,
    pub reason: Reason,
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text)
}

impl ParsingError {
    fn new(line: &Line, reason: Reason, message: String) -> ParsingError {
        ParsingError {
            line: Location::from(line),
            message,
            reason,
        }
    }

    pub fn invalid_indentation(line: &Line) -> ParsingError {
        ParsingError::new(
            line,
            Reason::Indentation,
            "Indentation is not allowed here.".to_string(),
        )
    }

    pub fn nested_under_trigger(line: &Line) -> ParsingError {
        ParsingError::new(
            line,
            Reason::Nesting,
            "Indentation is not allowed here.".to_string(),
        )
    }

    pub fn invalid_trigger(line: &Line) -> ParsingError {
        ParsingError::new(
            line,
            Reason::Trigger,
            format!("{} is not a valid campaign trigger.", quote(line.text())),
        )
    }

    pub fn invalid_day(line: &Line, day: &str) -> ParsingError {
        ParsingError::new(
            line,
            Reason::TriggerField,
            format!("{} is not a valid day.", quote(day)),
        )
    }

    pub fn invalid_time(line: &Line, time: &str) -> ParsingError {
        ParsingError::new(
            line,
            Reason::TriggerField,
            format!("{} is not a valid time.", quote(time)),
        )
    }

    pub fn invalid_step(line: &Line) -> ParsingError {
        ParsingError::new(
            line,
            Reason::Step,
            format!("{} is not a valid campaign step.", quote(line.text())),
        )
    }

    pub fn invalid_wait_amount(line: &Line, amount: &str) -> ParsingError {
        ParsingError::new(
            line,
            Reason::StepField,
            format!("{} is not a valid wait amount.", quote(amount)),
        )
    }

    pub fn invalid_wait_unit(line: &Line, unit: &str) -> ParsingError {
        ParsingError::new(
            line,
            Reason::StepField,
            format!("{} is not a valid wait unit.", quote(unit)),
        )
    }

    pub fn invalid_custom_field(line: &Line) -> ParsingError {
        ParsingError::new(
            line,
            Reason::CustomField,
            format!("{} is not a valid custom field.", quote(line.text())),
        )
    }

    pub fn line_number(&self) -> usize {
        self.line
            .line_number
    }

    /// Whether this problem stopped the rest of the source from being read.
    pub fn is_fatal(&self) -> bool {
        self.reason == Reason::Indentation
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line_number(), self.message)
    }
}
