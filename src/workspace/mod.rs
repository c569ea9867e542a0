//! Finding component files on disk and formatting them in batches

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{debug, info, warn};

use crate::composing::Composer;
use crate::language::{FormattingError, LoadingError};
use crate::parsing;

/// A target the batch refuses to work on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceError {
    pub problem: String,
    pub path: PathBuf,
}

impl fmt::Display for WorkspaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.problem)
    }
}

impl std::error::Error for WorkspaceError {}

/// Whether to put formatted files back on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Write,
    Check,
}

#[derive(Debug)]
pub enum Failure {
    Loading(LoadingError),
    Formatting {
        source: String,
        error: FormattingError,
    },
    Writing(String),
    /// Something went badly wrong inside the formatter; the message of
    /// the panic.
    Panicked(String),
}

#[derive(Debug)]
pub enum Outcome {
    Unchanged,
    Changed(String),
    Failed(Failure),
}

/// What happened to one file.
#[derive(Debug)]
pub struct Report {
    pub path: PathBuf,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub changed: usize,
    pub unchanged: usize,
    pub failed: usize,
}

/// Refuse directories that are not inside a git work tree, so that
/// rewriting files in place can be undone.
pub fn check_repository(target: &Path) -> Result<(), WorkspaceError> {
    if !target.is_dir() {
        return Ok(());
    }

    let absolute = target
        .canonicalize()
        .unwrap_or_else(|_| target.to_path_buf());

    let found = absolute
        .ancestors()
        .any(|directory| {
            directory
                .join(".git")
                .exists()
        });

    if found {
        Ok(())
    } else {
        Err(WorkspaceError {
            problem: "not inside a git repository; use --force to format anyway".to_string(),
            path: target.to_path_buf(),
        })
    }
}

/// Expand the given targets into the list of files to format. Files named
/// explicitly are always included; directories are walked, honouring
/// ignore files, and only files with one of the given extensions kept.
pub fn discover(targets: &[PathBuf], extensions: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for target in targets {
        if !target.is_dir() {
            files.push(target.clone());
            continue;
        }

        for entry in WalkBuilder::new(target).build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    warn!("Skipping: {}", error);
                    continue;
                }
            };

            let is_file = entry
                .file_type()
                .map(|kind| kind.is_file())
                .unwrap_or(false);
            if !is_file {
                continue;
            }

            let path = entry.path();
            let wanted = path
                .extension()
                .and_then(|s| s.to_str())
                .map(|extension| {
                    extensions
                        .iter()
                        .any(|e| e == extension)
                })
                .unwrap_or(false);

            if wanted {
                files.push(path.to_path_buf());
            }
        }
    }

    debug!("Discovered {} files", files.len());
    files
}

/// Format every file, spreading the work over a handful of threads. Reports
/// come back in the order the files were given.
pub fn process(files: &[PathBuf], composer: &Composer, mode: Mode) -> Vec<Report> {
    if files.is_empty() {
        return Vec::new();
    }

    let workers = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(files.len());
    let size = files
        .len()
        .div_ceil(workers);

    std::thread::scope(|scope| {
        let handles: Vec<_> = files
            .chunks(size)
            .map(|group| {
                let handle = scope.spawn(move || {
                    group
                        .iter()
                        .map(|path| Report {
                            path: path.clone(),
                            outcome: guarded(path, composer, mode),
                        })
                        .collect::<Vec<_>>()
                });
                (group, handle)
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|(group, handle)| match handle.join() {
                Ok(reports) => reports,
                Err(payload) => {
                    let message = panic_message(payload.as_ref());
                    warn!("Worker thread panicked: {}", message);
                    group
                        .iter()
                        .map(|path| Report {
                            path: path.clone(),
                            outcome: Outcome::Failed(Failure::Panicked(message.clone())),
                        })
                        .collect()
                }
            })
            .collect()
    })
}

/// Run one file, turning a panic anywhere below into a failure of that
/// file alone.
fn guarded(path: &Path, composer: &Composer, mode: Mode) -> Outcome {
    match panic::catch_unwind(AssertUnwindSafe(|| run(path, composer, mode))) {
        Ok(outcome) => outcome,
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            warn!("Formatting {} panicked: {}", path.display(), message);
            Outcome::Failed(Failure::Panicked(message))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown cause".to_string()
    }
}

/// Format a single file. Nothing is written unless formatting succeeded
/// and the result differs from what is on disk.
pub fn run(path: &Path, composer: &Composer, mode: Mode) -> Outcome {
    let source = match parsing::load(path) {
        Ok(source) => source,
        Err(error) => return Outcome::Failed(Failure::Loading(error)),
    };

    let result = match composer.format_file(path, &source) {
        Ok(result) => result,
        Err(error) => {
            debug!("Formatting {} failed: {}", path.display(), error);
            return Outcome::Failed(Failure::Formatting { source, error });
        }
    };

    if result == source {
        debug!("Unchanged {}", path.display());
        return Outcome::Unchanged;
    }

    if mode == Mode::Write {
        if let Err(error) = std::fs::write(path, &result) {
            return Outcome::Failed(Failure::Writing(error.to_string()));
        }
        info!("Formatted {}", path.display());
    }

    Outcome::Changed(result)
}

pub fn summarize(reports: &[Report]) -> Summary {
    let mut summary = Summary::default();

    for report in reports {
        match report.outcome {
            Outcome::Unchanged => summary.unchanged += 1,
            Outcome::Changed(_) => summary.changed += 1,
            Outcome::Failed(_) => summary.failed += 1,
        }
    }

    summary
}
