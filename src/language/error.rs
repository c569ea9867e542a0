use std::{fmt, path::PathBuf};

use crate::parsing::ParsingError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError {
    pub problem: String,
    pub details: String,
    pub filename: PathBuf,
}

impl fmt::Display for LoadingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

impl std::error::Error for LoadingError {}

/// Failure of an external code or style formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatterError {
    /// The formatter executable could not be found.
    Missing(String),
    /// The formatter process could not be started or talked to.
    Spawn(String, String),
    /// The formatter ran but refused the input.
    Rejected(String),
    /// The formatter produced output that was not valid UTF-8.
    Output(String),
}

impl fmt::Display for FormatterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatterError::Missing(command) => {
                write!(f, "formatter '{}' not found on PATH", command)
            }
            FormatterError::Spawn(command, details) => {
                write!(f, "unable to run '{}': {}", command, details)
            }
            FormatterError::Rejected(message) => write!(f, "formatter rejected input: {}", message),
            FormatterError::Output(details) => write!(f, "unreadable formatter output: {}", details),
        }
    }
}

impl std::error::Error for FormatterError {}

/// Everything that can abort formatting a single file. Nothing is written
/// for a file whose formatting produced one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattingError {
    Parse(ParsingError),
    Extraction(String),
    Formatter(&'static str, FormatterError),
}

impl fmt::Display for FormattingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormattingError::Parse(error) => write!(f, "parse error: {}", error),
            FormattingError::Extraction(problem) => write!(f, "unable to extract {}", problem),
            FormattingError::Formatter(block, error) => write!(f, "formatting {} failed, {}", block, error),
        }
    }
}

impl std::error::Error for FormattingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FormattingError::Parse(error) => Some(error),
            FormattingError::Extraction(_) => None,
            FormattingError::Formatter(_, error) => Some(error),
        }
    }
}

impl From<ParsingError> for FormattingError {
    fn from(error: ParsingError) -> Self {
        FormattingError::Parse(error)
    }
}
