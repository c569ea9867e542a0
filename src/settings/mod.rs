//! Layered configuration
//!
//! `defaults/vuefmt.default.toml` is embedded into the binary. A project
//! file and command line overrides are layered on top with [`Loader`]
//! before deserializing into [`VuefmtConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use crate::external::FormatOptions;
use crate::formatting::CommentPolicy;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../../defaults/vuefmt.default.toml");

/// Name of the optional per-project configuration file.
pub const PROJECT_FILE: &str = "vuefmt.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct VuefmtConfig {
    pub template: TemplateConfig,
    pub external: ExternalConfig,
    pub files: FilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
    pub indent_width: usize,
    pub comments: CommentPolicy,
    pub binding_prefixes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    Prettier,
    Verbatim,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalConfig {
    pub backend: Backend,
    pub command: String,
    pub tab_width: usize,
    pub print_width: usize,
    pub semicolons: bool,
    pub single_quote: bool,
    pub trailing_comma: String,
    pub bracket_spacing: bool,
    pub arrow_parens: String,
}

impl ExternalConfig {
    pub fn options(&self) -> FormatOptions {
        FormatOptions {
            tab_width: self.tab_width,
            print_width: self.print_width,
            semicolons: self.semicolons,
            single_quote: self.single_quote,
            trailing_comma: self
                .trailing_comma
                .clone(),
            bracket_spacing: self.bracket_spacing,
            arrow_parens: self
                .arrow_parens
                .clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilesConfig {
    pub extensions: Vec<String>,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self
            .builder
            .add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self
            .builder
            .add_source(source);
        self
    }

    /// Apply a single key/value override (used for command line settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self
            .builder
            .set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<VuefmtConfig, ConfigError> {
        self.builder
            .build()?
            .try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<VuefmtConfig, ConfigError> {
    Loader::new().build()
}
