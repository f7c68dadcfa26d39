//! Renderers for colourizing diagnostics

use owo_colors::OwoColorize;

/// Parts of a diagnostic that can be styled differently
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Syntax {
    Label,    // "error"
    Problem,  // the message itself
    Location, // filename:line:column
    Gutter,   // line numbers and the bar beside them
    Caret,
}

/// Trait for different rendering backends (the no-op no-markup one, and ANSI
/// escapes for terminal colouring)
pub trait Render {
    /// Apply styling to content with the specified syntax type
    fn style(&self, syntax: Syntax, content: &str) -> String;
}

/// Returns content unchanged, with no markup applied
pub struct Identity;

impl Render for Identity {
    fn style(&self, _syntax: Syntax, content: &str) -> String {
        content.to_string()
    }
}

/// Embellish fragments with ANSI escapes for output to a terminal.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Label => content
                .bright_red()
                .to_string(),
            Syntax::Problem => content
                .bold()
                .to_string(),
            Syntax::Location => content.to_string(),
            Syntax::Gutter => content
                .bright_blue()
                .to_string(),
            Syntax::Caret => content
                .bright_red()
                .to_string(),
        }
    }
}
