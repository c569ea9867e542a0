//! Putting a whole component file back together
//!
//! The template block goes through the template formatter; every script
//! and style block goes to the external formatter. The results are joined
//! in a fixed order: template, scripts, styles, one blank line between
//! each, and a single newline at the end.

use std::path::Path;

use tracing::{debug, info};

use crate::external::{CodeFormatter, FormatOptions, Language};
use crate::formatting::*;
use crate::language::*;
use crate::parsing;
use crate::settings::VuefmtConfig;

/// Style block attributes that survive formatting, in the order they are
/// written back.
const STYLE_ATTRIBUTES: &[&str] = &["lang", "scoped"];

pub struct Composer<'a> {
    formatter: &'a dyn CodeFormatter,
    options: FormatOptions,
    settings: Settings,
    binding_prefixes: Vec<String>,
}

impl<'a> Composer<'a> {
    pub fn new(
        formatter: &'a dyn CodeFormatter,
        options: FormatOptions,
        settings: Settings,
        binding_prefixes: Vec<String>,
    ) -> Composer<'a> {
        Composer {
            formatter,
            options,
            settings,
            binding_prefixes,
        }
    }

    pub fn from_config(formatter: &'a dyn CodeFormatter, config: &VuefmtConfig) -> Composer<'a> {
        Composer::new(
            formatter,
            config
                .external
                .options(),
            Settings {
                indent_width: config
                    .template
                    .indent_width,
                comments: config
                    .template
                    .comments,
            },
            config
                .template
                .binding_prefixes
                .clone(),
        )
    }

    fn template(&self) -> Template<'a> {
        Template {
            attributes: AttributeRenderer::new(
                self.formatter,
                self.options
                    .clone(),
                &self.binding_prefixes,
            ),
            settings: self
                .settings
                .clone(),
        }
    }

    /// Format the content of a file, choosing what to do by its extension.
    /// Files of unknown kinds come back unchanged.
    pub fn format_file(&self, path: &Path, source: &str) -> Result<String, FormattingError> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        if extension == "vue" {
            return self.compose(source);
        }

        match Language::from_extension(extension) {
            Some(language) => {
                debug!("Formatting {} as {}", path.display(), language.parser());
                self.formatter
                    .format(source, language, &self.options)
                    .map_err(|error| FormattingError::Formatter("file", error))
            }
            None => {
                info!("Leaving {} unchanged", path.display());
                Ok(source.to_string())
            }
        }
    }

    /// Format a single-file component.
    pub fn compose(&self, source: &str) -> Result<String, FormattingError> {
        self.compose_with(&Identity, source)
    }

    /// Format a single-file component, styling the template block with the
    /// given renderer.
    pub fn compose_with(&self, renderer: &impl Render, source: &str) -> Result<String, FormattingError> {
        let document = parsing::parse(source)?;

        let mut blocks = Vec::new();

        blocks.push(self.format_template(renderer, source, &document)?);

        for script in document.all("script") {
            if let Some(block) = self.format_script(script)? {
                blocks.push(block);
            }
        }

        for style in document.all("style") {
            if let Some(block) = self.format_style(style)? {
                blocks.push(block);
            }
        }

        debug!("Composed {} blocks", blocks.len());

        let mut result = blocks.join("\n\n");
        result.push('\n');
        Ok(result)
    }

    /// Isolate the template's text in the original source, tidy it, parse
    /// it again on its own, and lay it out.
    fn format_template(
        &self,
        renderer: &impl Render,
        source: &str,
        document: &Document,
    ) -> Result<String, FormattingError> {
        let section = document
            .find("template")
            .ok_or_else(|| FormattingError::Extraction("template: no <template> block".to_string()))?;

        let range = section
            .content
            .clone()
            .ok_or_else(|| {
                FormattingError::Extraction("template: no closing </template> found".to_string())
            })?;

        let element = section
            .node
            .as_element()
            .ok_or_else(|| FormattingError::Extraction("template: not an element".to_string()))?;

        let pure = source[range]
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        let wrapped = format!("<{}>{}</{}>", opening(element), pure, element.name);

        let reparsed = parsing::parse(&wrapped)?;
        let root = reparsed
            .find(&element.name)
            .ok_or_else(|| {
                FormattingError::Extraction("template: lost while parsing again".to_string())
            })?;

        let template = self.template();
        Ok(render(
            renderer,
            std::slice::from_ref(&root.node),
            0,
            &template,
        ))
    }

    fn format_script(&self, element: &Element) -> Result<Option<String>, FormattingError> {
        let text = element.text();
        if text
            .trim()
            .is_empty()
        {
            debug!("Skipping empty <{}> block", element.name);
            return Ok(None);
        }

        let lang = element
            .attributes
            .get("lang")
            .map(|value| value.trim());
        let formatted = self
            .formatter
            .format(&text, Language::for_script(lang), &self.options)
            .map_err(|error| FormattingError::Formatter("script", error))?;

        Ok(Some(wrap(&opening(element), &element.name, &formatted)))
    }

    fn format_style(&self, element: &Element) -> Result<Option<String>, FormattingError> {
        let text = element.text();
        if text
            .trim()
            .is_empty()
        {
            debug!("Skipping empty <{}> block", element.name);
            return Ok(None);
        }

        let mut allowed = Element::new(&element.name);
        for name in STYLE_ATTRIBUTES {
            if let Some(value) = element
                .attributes
                .get(*name)
            {
                allowed = allowed.with_attribute(name, value);
            }
        }

        let lang = allowed
            .attributes
            .get("lang")
            .map(|value| value.trim());
        let formatted = self
            .formatter
            .format(&text, Language::for_style(lang), &self.options)
            .map_err(|error| FormattingError::Formatter("style", error))?;

        Ok(Some(wrap(&opening(&allowed), &allowed.name, &formatted)))
    }
}

/// Name and plain attributes, as they go inside `<` and `>`.
fn opening(element: &Element) -> String {
    let attributes = plain_attributes(&element.attributes);
    if attributes.is_empty() {
        element
            .name
            .clone()
    } else {
        format!("{} {}", element.name, attributes)
    }
}

fn wrap(opening: &str, name: &str, body: &str) -> String {
    let body = body.trim_end();
    if body.is_empty() {
        format!("<{}>\n</{}>", opening, name)
    } else {
        format!("<{}>\n{}\n</{}>", opening, body, name)
    }
}
