use super::messages::generate_error_message;
use owo_colors::OwoColorize;
use std::path::Path;
use vuefmt::{
    formatting::Render,
    language::{FormattingError, LoadingError},
    parsing::ParsingError,
    workspace::WorkspaceError,
};

/// A place in a source file, both counted from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Location {
    line: usize,
    column: usize,
}

impl Location {
    fn of(source: &str, offset: usize) -> Location {
        Location {
            line: calculate_line_number(source, offset) + 1,
            column: calculate_column_number(source, offset) + 1,
        }
    }
}

/// `error: file:line:column problem`
fn heading(filename: &Path, location: Location, problem: &str) -> String {
    format!(
        "{}: {}:{}:{} {}",
        "error".bright_red(),
        filename.to_string_lossy(),
        location.line,
        location.column,
        problem.bold(),
    )
}

/// The offending source line between a numbered gutter and a caret.
fn excerpt(source: &str, location: Location) -> String {
    let code = source
        .lines()
        .nth(location.line - 1)
        .unwrap_or("");
    let width = 3.max(
        location
            .line
            .to_string()
            .len(),
    );
    let column = location.column;

    format!(
        "{:width$} {}\n{:width$} {} {}\n{:width$} {} {:>column$}",
        ' ',
        '|'.bright_blue(),
        location
            .line
            .bright_blue(),
        '|'.bright_blue(),
        code,
        ' ',
        '|'.bright_blue(),
        '^'.bright_red(),
    )
}

/// A parsing error with the line it happened on and an explanation
pub fn full_parsing_error<'i>(
    error: &ParsingError,
    filename: &'i Path,
    source: &'i str,
    renderer: &dyn Render,
) -> String {
    let (problem, details) = generate_error_message(error, renderer);
    let location = Location::of(source, error.offset());

    format!(
        "{}\n\n{}\n\n{}",
        heading(filename, location, &problem),
        excerpt(source, location),
        details.trim_ascii()
    )
}

/// A parsing error on a single line
pub fn concise_parsing_error<'i>(
    error: &ParsingError,
    filename: &'i Path,
    source: &'i str,
    renderer: &dyn Render,
) -> String {
    let (problem, _) = generate_error_message(error, renderer);
    heading(filename, Location::of(source, error.offset()), &problem)
}

/// Where in the file a failure that is not a parse error belongs: the
/// opening tag of the block it came from, if there is one.
fn anchor(error: &FormattingError, source: &str) -> Option<usize> {
    let tag = match error {
        FormattingError::Parse(error) => return Some(error.offset()),
        FormattingError::Extraction(_) => "<template",
        FormattingError::Formatter("script", _) => "<script",
        FormattingError::Formatter("style", _) => "<style",
        FormattingError::Formatter(_, _) => return None,
    };
    source.find(tag)
}

/// Format a formatting failure. With `full` set, parse errors get their
/// explanation, and block failures show the opening tag of the block.
pub fn formatting_error<'i>(
    error: &FormattingError,
    filename: &'i Path,
    source: &'i str,
    renderer: &dyn Render,
    full: bool,
) -> String {
    if let FormattingError::Parse(error) = error {
        return if full {
            full_parsing_error(error, filename, source, renderer)
        } else {
            concise_parsing_error(error, filename, source, renderer)
        };
    }

    let problem = error.to_string();
    match anchor(error, source) {
        Some(offset) => {
            let location = Location::of(source, offset);
            if full {
                format!(
                    "{}\n\n{}",
                    heading(filename, location, &problem),
                    excerpt(source, location)
                )
            } else {
                heading(filename, location, &problem)
            }
        }
        None => format!(
            "{}: {}: {}",
            "error".bright_red(),
            filename.display(),
            problem.bold()
        ),
    }
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error(error: &LoadingError) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    )
}

pub fn concise_workspace_error(error: &WorkspaceError) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .path
            .display(),
        error
            .problem
            .bold()
    )
}

/// Format a failure to write a file back
pub fn concise_writing_error(filename: &Path, details: &str) -> String {
    format!(
        "{}: {}: {} {}",
        "error".bright_red(),
        filename.display(),
        "Failed writing".bold(),
        details
    )
}

/// A file whose formatting crashed rather than failed
pub fn concise_panic_error(filename: &Path, message: &str) -> String {
    format!(
        "{}: {}: {} {}",
        "error".bright_red(),
        filename.display(),
        "Formatter crashed:".bold(),
        message
    )
}

fn calculate_line_number(content: &str, offset: usize) -> usize {
    let offset = offset.min(content.len());
    content[..offset]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
}

fn calculate_column_number(content: &str, offset: usize) -> usize {
    let offset = offset.min(content.len());
    let before = &content[..offset];
    match before.rfind('\n') {
        Some(start) => content[start + 1..offset]
            .chars()
            .count(),
        None => before
            .chars()
            .count(),
    }
}
