//! The grammar of ERV lines. Each kind of line is recognized by a regular
//! expression; the patterns for a position in the program are tried in
//! order and the first to match decides what the line is.

use regex::{Captures, Regex};
use tracing::debug;

use super::errors::ParsingError;
use super::line::Line;
use crate::language::*;

type Extract<T> = fn(&mut Parser, &Line, &Captures) -> T;

fn triggers() -> [(&'static Regex, Extract<Trigger>); 3] {
    [
        (regex!(r"(?i)^when a user (.*?)$"), Parser::read_event),
        (regex!(r"(?i)^every (.*?) at (.*?)$"), Parser::read_recurring),
        (regex!(r"(?i)^on (.+?) at (.+?)$"), Parser::read_one_off),
    ]
}

fn steps() -> [(&'static Regex, Extract<Step>); 3] {
    [
        (
            regex!(r"(?i)^send the (.*?) email(?: with custom fields)?$"),
            Parser::read_email,
        ),
        (regex!(r"(?i)^if (.*?)$"), Parser::read_condition),
        (regex!(r"(?i)^wait for (.*?) (.*?)$"), Parser::read_wait),
    ]
}

// Text of a capture group, empty if the group didn't participate.
fn group<'c>(cap: &Captures<'c>, i: usize) -> &'c str {
    cap.get(i)
        .map_or("", |m| m.as_str())
}

/// The whole number an amount starts with, ignoring anything after it, so
/// "2.5" is 2. Waits can't be negative, so a leading minus sign (other than
/// on zero) gives nothing.
fn leading_integer(text: &str) -> Option<u32> {
    let re = regex!(r"^([+-]?)([0-9]+)");

    let cap = re.captures(text)?;
    let number: u32 = group(&cap, 2)
        .parse()
        .ok()?;

    if group(&cap, 1) == "-" && number != 0 {
        return None;
    }
    Some(number)
}

/// Lower case, with spaces replaced by underscores: "Welcome Back" becomes
/// "welcome_back".
fn to_identifier(text: &str) -> String {
    text.to_lowercase()
        .replace(' ', "_")
}

/// A parse session. Problems are accumulated here as the lines are read,
/// so that one bad line doesn't prevent the rest from being understood.
#[derive(Debug, Default)]
pub struct Parser {
    errors: Vec<ParsingError>,
}

impl Parser {
    pub fn new() -> Parser {
        Parser { errors: Vec::new() }
    }

    /// Start a session carrying problems already found, typically by the
    /// tree builder.
    pub fn with_errors(errors: Vec<ParsingError>) -> Parser {
        Parser { errors }
    }

    fn problem(&mut self, error: ParsingError) {
        debug!(line = error.line_number(), "{}", error.message);
        self.errors
            .push(error);
    }

    fn has_fatal_error(&self) -> bool {
        self.errors
            .iter()
            .any(|error| error.is_fatal())
    }

    pub fn errors(&self) -> &[ParsingError] {
        &self.errors
    }

    pub fn finish(self) -> Vec<ParsingError> {
        self.errors
    }

    /// Read a campaign from the forest of lines: the first line is the
    /// trigger, each subsequent top level line is a step.
    pub fn read_campaign(&mut self, forest: &[Line]) -> Campaign {
        let Some((first, rest)) = forest.split_first() else {
            return self.read_campaign(&[Line::empty()]);
        };

        let trigger = self.read_trigger(first);

        if let Some(child) = first
            .children
            .first()
        {
            if !self.has_fatal_error() {
                self.problem(ParsingError::nested_under_trigger(child));
            }
        }

        let steps = rest
            .iter()
            .map(|line| self.read_step(line))
            .collect();

        Campaign { trigger, steps }
    }

    pub fn read_trigger(&mut self, line: &Line) -> Option<Trigger> {
        let text = line.text();

        for (re, extract) in triggers() {
            if let Some(cap) = re.captures(text) {
                let trigger = extract(self, line, &cap);
                debug!(kind = trigger.kind(), "trigger");
                return Some(trigger);
            }
        }

        self.problem(ParsingError::invalid_trigger(line));
        None
    }

    fn read_event(&mut self, _line: &Line, cap: &Captures) -> Trigger {
        Trigger::Event {
            event_type: group(cap, 1).to_string(),
        }
    }

    // The two lists are checked independently so that a bad day doesn't
    // hide a bad time.
    fn read_recurring(&mut self, line: &Line, cap: &Captures) -> Trigger {
        let weekdays = match parse_weekdays(group(cap, 1)) {
            Ok(weekdays) => Some(weekdays),
            Err(day) => {
                self.problem(ParsingError::invalid_day(line, day));
                None
            }
        };

        let hours = match parse_times(group(cap, 2)) {
            Ok(hours) => Some(hours),
            Err(time) => {
                self.problem(ParsingError::invalid_time(line, time));
                None
            }
        };

        Trigger::Recurring { weekdays, hours }
    }

    fn read_one_off(&mut self, _line: &Line, cap: &Captures) -> Trigger {
        Trigger::OneOff {
            local_datetime: format!("{} {}", group(cap, 1), group(cap, 2)),
        }
    }

    /// Read a step. A line that isn't a step is reported and an
    /// Unrecognized placeholder returned in its place.
    pub fn read_step(&mut self, line: &Line) -> Step {
        let text = line.text();

        for (re, extract) in steps() {
            if let Some(cap) = re.captures(text) {
                return extract(self, line, &cap);
            }
        }

        self.problem(ParsingError::invalid_step(line));
        Step::Unrecognized
    }

    fn read_email(&mut self, line: &Line, cap: &Captures) -> Step {
        let custom_fields = line
            .children
            .iter()
            .map(|child| self.read_custom_field(child))
            .collect();

        Step::Email {
            template_id: to_identifier(group(cap, 1)),
            custom_fields,
        }
    }

    fn read_condition(&mut self, _line: &Line, cap: &Captures) -> Step {
        Step::Condition {
            predicate_id: to_identifier(group(cap, 1)),
        }
    }

    fn read_wait(&mut self, line: &Line, cap: &Captures) -> Step {
        let amount = group(cap, 1);
        let unit = group(cap, 2);

        let number = match leading_integer(amount) {
            Some(number) => Some(number),
            None => {
                self.problem(ParsingError::invalid_wait_amount(line, amount));
                None
            }
        };

        let multiplier = match wait_multiplier(unit) {
            Some(multiplier) => Some(multiplier),
            None => {
                self.problem(ParsingError::invalid_wait_unit(line, unit));
                None
            }
        };

        let wait_minutes = match (number, multiplier) {
            (Some(number), Some(multiplier)) => {
                let minutes = number.checked_mul(multiplier);
                if minutes.is_none() {
                    self.problem(ParsingError::invalid_wait_amount(line, amount));
                }
                minutes
            }
            _ => None,
        };

        Step::Wait { wait_minutes }
    }

    /// Read a "key: value" line nested under an email step. The value can
    /// continue onto nested lines, which are joined with a space, or with a
    /// newline where blank lines separated them in the source.
    pub fn read_custom_field(&mut self, line: &Line) -> CustomField {
        let (key, value) = match line
            .text()
            .split_once(':')
        {
            Some((key, value)) if !key.is_empty() => (key.trim_end(), value.trim()),
            _ => {
                self.problem(ParsingError::invalid_custom_field(line));
                return CustomField::default();
            }
        };

        let mut value = value.to_string();
        let mut previous = line.number;

        for child in &line.children {
            if !value.is_empty() {
                if child.number > previous + 1 {
                    value.push('\n');
                } else {
                    value.push(' ');
                }
            }
            value.push_str(child.text());
            previous = child.number;
        }

        CustomField {
            key: key.to_string(),
            value,
        }
    }
}
