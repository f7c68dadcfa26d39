use std::path::Path;

use erv::language::LoadingError;
use erv::parsing::ParsingError;

use super::render::{Render, Syntax};

// Zero-origin column where the content of the offending line starts.
fn calculate_column_number(raw: &str) -> usize {
    raw.chars()
        .take_while(|c| c.is_whitespace())
        .count()
}

/// Format a parsing error with the offending source line underneath
pub fn full_parsing_error(error: &ParsingError, filename: &Path, renderer: &dyn Render) -> String {
    let line = error.line_number();
    let code = &error
        .line
        .raw_text;
    let column = calculate_column_number(code) + 1;
    let width = 3.max(
        line.to_string()
            .len(),
    );

    format!(
        r#"
{}: {} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>column$}
        "#,
        renderer.style(Syntax::Label, "error"),
        renderer.style(
            Syntax::Location,
            &format!("{}:{}:{}", filename.to_string_lossy(), line, column)
        ),
        renderer.style(Syntax::Problem, &error.message),
        ' ',
        renderer.style(Syntax::Gutter, "|"),
        renderer.style(Syntax::Gutter, &format!("{:>width$}", line)),
        renderer.style(Syntax::Gutter, "|"),
        code.trim_end(),
        ' ',
        renderer.style(Syntax::Gutter, "|"),
        renderer.style(Syntax::Caret, &format!("{:>column$}", '^')),
    )
    .trim_ascii()
    .to_string()
}

/// Format a parsing error with concise single-line output
pub fn concise_parsing_error(error: &ParsingError, filename: &Path, renderer: &dyn Render) -> String {
    let line = error.line_number();
    let column = calculate_column_number(
        &error
            .line
            .raw_text,
    ) + 1;

    format!(
        "{}: {} {}",
        renderer.style(Syntax::Label, "error"),
        renderer.style(
            Syntax::Location,
            &format!("{}:{}:{}", filename.to_string_lossy(), line, column)
        ),
        renderer.style(Syntax::Problem, &error.message),
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error(error: &LoadingError<'_>, renderer: &dyn Render) -> String {
    format!(
        "{}: {}: {}",
        renderer.style(Syntax::Label, "error"),
        error
            .filename
            .display(),
        renderer.style(Syntax::Problem, &error.to_string())
    )
}
