//! Pass code through untouched apart from whitespace at line ends

use super::{CodeFormatter, FormatOptions, Language};
use crate::language::FormatterError;

/// Leaves code as written, but strips trailing whitespace and the blank
/// lines surrounding it. Never fails.
pub struct Verbatim;

impl CodeFormatter for Verbatim {
    fn format(
        &self,
        source: &str,
        _language: Language,
        _options: &FormatOptions,
    ) -> Result<String, FormatterError> {
        let lines: Vec<&str> = source
            .lines()
            .map(str::trim_end)
            .collect();

        let first = lines
            .iter()
            .position(|line| !line.is_empty());
        let last = lines
            .iter()
            .rposition(|line| !line.is_empty());

        match (first, last) {
            (Some(first), Some(last)) => {
                let mut result = lines[first..=last].join("\n");
                result.push('\n');
                Ok(result)
            }
            _ => Ok(String::new()),
        }
    }
}
