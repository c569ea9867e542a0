//! Delegate to the prettier command line tool

use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use super::{CodeFormatter, FormatOptions, Language};
use crate::language::FormatterError;

/// Runs an external `prettier` executable once per request, source on
/// stdin and formatted text on stdout.
#[derive(Debug, Clone)]
pub struct Prettier {
    program: PathBuf,
}

impl Prettier {
    /// Find the given command on PATH (or accept it as a path).
    pub fn locate(command: &str) -> Result<Prettier, FormatterError> {
        match which::which(command) {
            Ok(program) => Ok(Prettier { program }),
            Err(error) => {
                debug!(?error);
                Err(FormatterError::Missing(command.to_string()))
            }
        }
    }
}

impl fmt::Display for Prettier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "prettier at {}", self.program.display())
    }
}

/// Command line flags expressing the options for one request. String
/// quoting stays double in stylesheets.
pub fn arguments(language: Language, options: &FormatOptions) -> Vec<String> {
    let mut args = vec![
        "--parser".to_string(),
        language
            .parser()
            .to_string(),
        "--tab-width".to_string(),
        options
            .tab_width
            .to_string(),
        "--print-width".to_string(),
        options
            .print_width
            .to_string(),
        "--trailing-comma".to_string(),
        options
            .trailing_comma
            .clone(),
        "--arrow-parens".to_string(),
        options
            .arrow_parens
            .clone(),
    ];

    if !options.semicolons {
        args.push("--no-semi".to_string());
    }
    if options.single_quote && !language.is_stylesheet() {
        args.push("--single-quote".to_string());
    }
    if !options.bracket_spacing {
        args.push("--no-bracket-spacing".to_string());
    }

    args
}

impl CodeFormatter for Prettier {
    fn format(
        &self,
        source: &str,
        language: Language,
        options: &FormatOptions,
    ) -> Result<String, FormatterError> {
        let command = self
            .program
            .display()
            .to_string();

        let mut child = Command::new(&self.program)
            .args(arguments(language, options))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|error| FormatterError::Spawn(command.clone(), error.to_string()))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| FormatterError::Spawn(command.clone(), "no stdin".to_string()))?;

        stdin
            .write_all(source.as_bytes())
            .map_err(|error| FormatterError::Spawn(command.clone(), error.to_string()))?;

        drop(stdin);

        let output = child
            .wait_with_output()
            .map_err(|error| FormatterError::Spawn(command.clone(), error.to_string()))?;

        if !output
            .status
            .success()
        {
            let message = String::from_utf8_lossy(&output.stderr);
            debug!("{} rejected {} input: {}", command, language.parser(), message);
            return Err(FormatterError::Rejected(
                message
                    .trim()
                    .to_string(),
            ));
        }

        String::from_utf8(output.stdout).map_err(|error| FormatterError::Output(error.to_string()))
    }
}
