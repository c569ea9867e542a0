use clap::value_parser;
use clap::{Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};

use vuefmt::composing::Composer;
use vuefmt::external;
use vuefmt::formatting::{Identity, Render};
use vuefmt::parsing;
use vuefmt::rendering::Terminal;
use vuefmt::settings::{ConfigError, Loader, VuefmtConfig, PROJECT_FILE};
use vuefmt::workspace::{self, Failure, Mode, Outcome};

mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("vuefmt")
        .version(VERSION)
        .propagate_version(true)
        .about("Canonical formatting for single-file UI components.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log what is being done to standard error."),
        )
        .subcommand(
            targets(Command::new("format").about("Rewrite the given files in canonical form"))
                .arg(
                    Arg::new("stdout")
                        .long("stdout")
                        .action(ArgAction::SetTrue)
                        .help("Print the formatted result instead of writing it back to the file."),
                )
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file."),
                ),
        )
        .subcommand(
            targets(Command::new("check").about("Report files that are not in canonical form, without changing them")),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let code = match matches.subcommand() {
        Some(("format", submatches)) => {
            if submatches.get_flag("stdout") {
                print_command(submatches)
            } else {
                batch_command(submatches, Mode::Write)
            }
        }
        Some(("check", submatches)) => batch_command(submatches, Mode::Check),
        Some(_) => {
            println!("No valid subcommand was used");
            1
        }
        None => {
            println!("usage: vuefmt [COMMAND] ...");
            println!("Try '--help' for more information.");
            0
        }
    };

    std::process::exit(code);
}

/// Arguments shared by the commands that operate on files.
fn targets(command: Command) -> Command {
    command
        .arg(
            Arg::new("force")
                .long("force")
                .action(ArgAction::SetTrue)
                .help("Work on directories even when they are not inside a git repository."),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Read settings from this file, in addition to the project's vuefmt.toml."),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .value_name("N")
                .value_parser(value_parser!(u8))
                .help("Number of spaces per level of nesting in the template."),
        )
        .arg(
            Arg::new("keep-comments")
                .long("keep-comments")
                .action(ArgAction::SetTrue)
                .help("Keep comments in the template rather than dropping them."),
        )
        .arg(
            Arg::new("paths")
                .value_name("PATH")
                .num_args(0..)
                .value_parser(value_parser!(PathBuf))
                .help("Files or directories to format. Defaults to the current directory."),
        )
}

fn load_config(submatches: &ArgMatches) -> Result<VuefmtConfig, ConfigError> {
    let mut loader = Loader::new().with_optional_file(PROJECT_FILE);

    if let Some(file) = submatches.get_one::<PathBuf>("config") {
        loader = loader.with_file(file);
    }
    if let Some(indent) = submatches.get_one::<u8>("indent") {
        loader = loader.set_override("template.indent_width", *indent as i64)?;
    }
    if submatches.get_flag("keep-comments") {
        loader = loader.set_override("template.comments", "keep")?;
    }

    loader.build()
}

/// Everything needed before files can be formatted. On failure the problem
/// has already been reported.
fn prepare(submatches: &ArgMatches) -> Option<(VuefmtConfig, Vec<PathBuf>)> {
    let config = match load_config(submatches) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            return None;
        }
    };
    debug!(?config);

    let targets: Vec<PathBuf> = submatches
        .get_many::<PathBuf>("paths")
        .map(|values| {
            values
                .cloned()
                .collect()
        })
        .unwrap_or_else(|| vec![PathBuf::from(".")]);

    if !submatches.get_flag("force") {
        for target in &targets {
            if let Err(error) = workspace::check_repository(target) {
                eprintln!("{}", problem::concise_workspace_error(&error));
                return None;
            }
        }
    }

    let files = workspace::discover(&targets, &config.files.extensions);
    Some((config, files))
}

fn batch_command(submatches: &ArgMatches, mode: Mode) -> i32 {
    let (config, files) = match prepare(submatches) {
        Some(prepared) => prepared,
        None => return 1,
    };

    let formatter = match external::select(&config.external) {
        Ok(formatter) => formatter,
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            return 1;
        }
    };
    let composer = Composer::from_config(formatter.as_ref(), &config);

    let reports = workspace::process(&files, &composer, mode);

    let renderer = error_renderer();
    let full = reports.len() == 1;
    let mut code = 0;

    for report in &reports {
        match &report.outcome {
            Outcome::Unchanged => {}
            Outcome::Changed(_) => match mode {
                Mode::Write => println!("{}", report.path.display()),
                Mode::Check => {
                    println!("{}: {}", "unformatted".bright_yellow(), report.path.display());
                    code = 1;
                }
            },
            Outcome::Failed(failure) => {
                eprintln!("{}", present_failure(&report.path, failure, renderer, full));
                code = 1;
            }
        }
    }

    let summary = workspace::summarize(&reports);
    info!(
        "{} changed, {} unchanged, {} failed",
        summary.changed, summary.unchanged, summary.failed
    );

    code
}

fn print_command(submatches: &ArgMatches) -> i32 {
    let (config, files) = match prepare(submatches) {
        Some(prepared) => prepared,
        None => return 1,
    };

    let formatter = match external::select(&config.external) {
        Ok(formatter) => formatter,
        Err(error) => {
            eprintln!("{}: {}", "error".bright_red(), error);
            return 1;
        }
    };
    let composer = Composer::from_config(formatter.as_ref(), &config);

    let highlight = submatches.get_flag("raw-control-chars") || std::io::stdout().is_terminal();
    let renderer = error_renderer();
    let mut code = 0;

    for path in &files {
        let source = match parsing::load(path) {
            Ok(source) => source,
            Err(error) => {
                eprintln!("{}", problem::concise_loading_error(&error));
                code = 1;
                continue;
            }
        };

        let is_component = path
            .extension()
            .is_some_and(|extension| extension == "vue");

        let result = if highlight && is_component {
            composer.compose_with(&Terminal, &source)
        } else {
            composer.format_file(path, &source)
        };

        match result {
            Ok(result) => print!("{}", result),
            Err(error) => {
                eprintln!(
                    "{}",
                    problem::formatting_error(&error, path, &source, renderer, true)
                );
                code = 1;
            }
        }
    }

    code
}

fn error_renderer() -> &'static dyn Render {
    if std::io::stderr().is_terminal() {
        &Terminal
    } else {
        &Identity
    }
}

fn present_failure(path: &Path, failure: &Failure, renderer: &dyn Render, full: bool) -> String {
    match failure {
        Failure::Loading(error) => problem::concise_loading_error(error),
        Failure::Formatting { source, error } => {
            problem::formatting_error(error, path, source, renderer, full)
        }
        Failure::Writing(details) => problem::concise_writing_error(path, details),
        Failure::Panicked(message) => problem::concise_panic_error(path, message),
    }
}
