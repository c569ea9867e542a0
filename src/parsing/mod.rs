//! parser for single-file component markup

use std::path::Path;
use tracing::debug;

use crate::language::{Document, LoadingError};

pub mod dom;
pub mod parser;
mod sanitize;

pub use parser::ParsingError;
pub use sanitize::Sanitize;

/// Read a file and return an owned String.
pub fn load(filename: &Path) -> Result<String, LoadingError> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename: filename.to_path_buf(),
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename: filename.to_path_buf(),
                }),
            }
        }
    }
}

/// Parse text into a sanitized Document. The parser's parent and sibling
/// links are dropped before anything else sees the tree.
pub fn parse(content: &str) -> Result<Document, ParsingError> {
    let dom = parser::parse(content)?;
    let document = dom.sanitize();

    debug!(
        "Found {} top-level node{}",
        document
            .sections
            .len(),
        if document
            .sections
            .len()
            == 1
        {
            ""
        } else {
            "s"
        }
    );

    Ok(document)
}
