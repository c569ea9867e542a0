//! Formatters for the code and style embedded in components
//!
//! Script bodies, style bodies, and some attribute values are handed to a
//! [`CodeFormatter`]. The template itself is never sent here.

use tracing::debug;

use crate::settings::{Backend, ExternalConfig};
use crate::language::FormatterError;

mod prettier;
mod verbatim;

pub use prettier::Prettier;
pub use verbatim::Verbatim;

/// Languages an external formatter is asked to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    JavaScript,
    TypeScript,
    Css,
    Scss,
    Less,
    Json,
    Markdown,
    GraphQl,
}

impl Language {
    /// Language of a whole file, chosen by its extension.
    pub fn from_extension(extension: &str) -> Option<Language> {
        match extension {
            "js" | "jsx" | "mjs" | "cjs" => Some(Language::JavaScript),
            "ts" | "tsx" => Some(Language::TypeScript),
            "css" => Some(Language::Css),
            "scss" => Some(Language::Scss),
            "less" => Some(Language::Less),
            "json" => Some(Language::Json),
            "md" => Some(Language::Markdown),
            "graphql" | "gql" => Some(Language::GraphQl),
            _ => None,
        }
    }

    /// Language of a `<script>` block from its `lang` attribute.
    pub fn for_script(lang: Option<&str>) -> Language {
        match lang {
            Some("ts") | Some("tsx") | Some("typescript") => Language::TypeScript,
            _ => Language::JavaScript,
        }
    }

    /// Language of a `<style>` block from its `lang` attribute.
    pub fn for_style(lang: Option<&str>) -> Language {
        match lang {
            Some("scss") => Language::Scss,
            Some("less") => Language::Less,
            _ => Language::Css,
        }
    }

    /// Name of the matching prettier parser.
    pub fn parser(&self) -> &'static str {
        match self {
            Language::JavaScript => "babel",
            Language::TypeScript => "typescript",
            Language::Css => "css",
            Language::Scss => "scss",
            Language::Less => "less",
            Language::Json => "json",
            Language::Markdown => "markdown",
            Language::GraphQl => "graphql",
        }
    }

    pub fn is_stylesheet(&self) -> bool {
        matches!(self, Language::Css | Language::Scss | Language::Less)
    }
}

/// House style passed along to the external formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    pub tab_width: usize,
    pub print_width: usize,
    pub semicolons: bool,
    pub single_quote: bool,
    pub trailing_comma: String,
    pub bracket_spacing: bool,
    pub arrow_parens: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            tab_width: 4,
            print_width: 1000,
            semicolons: true,
            single_quote: true,
            trailing_comma: "none".to_string(),
            bracket_spacing: false,
            arrow_parens: "always".to_string(),
        }
    }
}

impl FormatOptions {
    /// Options for a lone expression, as found in binding attributes.
    pub fn for_expression(&self) -> FormatOptions {
        FormatOptions {
            semicolons: false,
            ..self.clone()
        }
    }
}

/// Anything that can pretty-print source text in a given language. Each
/// call is independent; implementations keep no state between calls.
pub trait CodeFormatter: Send + Sync {
    fn format(
        &self,
        source: &str,
        language: Language,
        options: &FormatOptions,
    ) -> Result<String, FormatterError>;
}

/// Build the formatter selected in configuration.
pub fn select(config: &ExternalConfig) -> Result<Box<dyn CodeFormatter>, FormatterError> {
    match config.backend {
        Backend::Prettier => {
            let prettier = Prettier::locate(&config.command)?;
            debug!("Using {}", prettier);
            Ok(Box::new(prettier))
        }
        Backend::Verbatim => {
            debug!("Using verbatim formatter");
            Ok(Box::new(Verbatim))
        }
    }
}
