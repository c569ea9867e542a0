//! Canonical text for an element's attributes
//!
//! Values are passed through a short list of rules. The first rule that
//! matches an attribute gets one attempt at reformatting its value with the
//! external formatter; if that attempt fails the value is kept as written.

use tracing::debug;

use crate::external::{CodeFormatter, FormatOptions, Language};
use crate::language::{Attributes, FormatterError};

/// A way of reformatting some attribute values.
pub trait AttributeRule: Send + Sync {
    fn matches(&self, name: &str, value: &str) -> bool;

    fn apply(
        &self,
        value: &str,
        formatter: &dyn CodeFormatter,
        options: &FormatOptions,
    ) -> Result<String, FormatterError>;
}

/// Attributes bound to an expression by the component framework, such as
/// `v-if` or `:title`.
pub struct Binding {
    pub prefixes: Vec<String>,
}

impl AttributeRule for Binding {
    fn matches(&self, name: &str, _value: &str) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| name.starts_with(prefix.as_str()))
    }

    fn apply(
        &self,
        value: &str,
        formatter: &dyn CodeFormatter,
        options: &FormatOptions,
    ) -> Result<String, FormatterError> {
        let result = formatter.format(value, Language::JavaScript, &options.for_expression())?;

        // without semicolons, a statement starting with ( or [ is guarded by
        // a leading one
        let result = result.trim_start();
        Ok(result
            .strip_prefix(';')
            .unwrap_or(result)
            .to_string())
    }
}

/// Plain attributes that look like a list of style declarations.
pub struct Declarations;

impl AttributeRule for Declarations {
    fn matches(&self, _name: &str, value: &str) -> bool {
        value.contains(':')
    }

    fn apply(
        &self,
        value: &str,
        formatter: &dyn CodeFormatter,
        options: &FormatOptions,
    ) -> Result<String, FormatterError> {
        formatter.format(value, Language::Css, options)
    }
}

pub struct AttributeRenderer<'a> {
    formatter: &'a dyn CodeFormatter,
    options: FormatOptions,
    rules: Vec<Box<dyn AttributeRule>>,
}

impl<'a> AttributeRenderer<'a> {
    /// The standard rules: bindings first, then declaration lists.
    pub fn new(
        formatter: &'a dyn CodeFormatter,
        options: FormatOptions,
        binding_prefixes: &[String],
    ) -> AttributeRenderer<'a> {
        let rules: Vec<Box<dyn AttributeRule>> = vec![
            Box::new(Binding {
                prefixes: binding_prefixes.to_vec(),
            }),
            Box::new(Declarations),
        ];

        AttributeRenderer::with_rules(formatter, options, rules)
    }

    pub fn with_rules(
        formatter: &'a dyn CodeFormatter,
        options: FormatOptions,
        rules: Vec<Box<dyn AttributeRule>>,
    ) -> AttributeRenderer<'a> {
        AttributeRenderer {
            formatter,
            options,
            rules,
        }
    }

    /// The value to write for one attribute.
    pub fn value(&self, name: &str, raw: &str) -> String {
        if raw.is_empty() {
            return String::new();
        }

        let rule = self
            .rules
            .iter()
            .find(|rule| rule.matches(name, raw));

        match rule {
            Some(rule) => match rule.apply(raw, self.formatter, &self.options) {
                Ok(formatted) => collapse(&formatted),
                Err(error) => {
                    debug!("Keeping {}=\"{}\" as written: {}", name, raw, error);
                    raw.to_string()
                }
            },
            None => raw.to_string(),
        }
    }

    /// Name and final value of each attribute, in authored order.
    pub fn pairs<'b>(&self, attributes: &'b Attributes) -> Vec<(&'b str, String)> {
        attributes
            .iter()
            .map(|(name, raw)| (name.as_str(), self.value(name, raw)))
            .collect()
    }

    /// All attributes as one fragment, separated by single spaces.
    pub fn render(&self, attributes: &Attributes) -> String {
        self.pairs(attributes)
            .iter()
            .map(|(name, value)| pair(name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Attributes with values trimmed and nothing reformatted, as used on the
/// tags wrapping script and style blocks.
pub fn plain_attributes(attributes: &Attributes) -> String {
    attributes
        .iter()
        .map(|(name, value)| pair(name, value.trim()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `name` alone for an empty value, otherwise `name="value"`.
pub fn pair(name: &str, value: &str) -> String {
    if value.is_empty() {
        name.to_string()
    } else {
        let (quote, value) = quoted(value);
        format!("{}={}{}{}", name, quote, value, quote)
    }
}

/// Pick a quote character for a value, escaping it only when the value
/// holds both kinds.
pub fn quoted(value: &str) -> (char, String) {
    if !value.contains('"') {
        ('"', value.to_string())
    } else if !value.contains('\'') {
        ('\'', value.to_string())
    } else {
        ('"', value.replace('"', "&quot;"))
    }
}

/// Fold formatter output onto a single line: trim every line, drop the
/// empty ones, and join what remains with nothing between.
pub fn collapse(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
