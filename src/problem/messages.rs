use vuefmt::{
    external::{FormatOptions, Verbatim},
    formatting::*,
    language::*,
    parsing::ParsingError,
};

/// Show a well-formed fragment of markup the way the formatter would write
/// it, so that the explanation of an error can point at what was meant.
fn present(element: Element, renderer: &dyn Render) -> String {
    let template = Template {
        attributes: AttributeRenderer::new(&Verbatim, FormatOptions::default(), &[]),
        settings: Settings {
            indent_width: 4,
            comments: CommentPolicy::Keep,
        },
    };

    render(&Dynamic(renderer), &[Node::Tag(element)], 1, &template)
}

/// Adapter so a trait object can be handed to the generic renderer.
struct Dynamic<'r>(&'r dyn Render);

impl Render for Dynamic<'_> {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        self.0
            .style(syntax, content)
    }
}

/// Generate problem and detail messages for parsing errors
pub fn generate_error_message(error: &ParsingError, renderer: &dyn Render) -> (String, String) {
    match error {
        ParsingError::UnterminatedComment(_) => {
            let example = present(
                Element::new("div")
                    .with_child(Node::Comment("not shown to users".to_string()))
                    .with_child(Node::Tag(Element::new("span").with_child(Node::Text("Hi".to_string())))),
                renderer,
            );

            (
                "Unterminated comment".to_string(),
                format!(
                    r#"
A comment was opened with {} but the file ended before the closing {} was
found. Everything after the opening marker would have been swallowed, so the
file was left untouched. A complete comment looks like:

{}
                    "#,
                    renderer.style(Syntax::Comment, "<!--"),
                    renderer.style(Syntax::Comment, "-->"),
                    example
                )
                .trim_ascii()
                .to_string(),
            )
        }
        ParsingError::UnterminatedValue(_, name) => {
            let example = present(
                Element::new("input")
                    .with_attribute(name, "value")
                    .with_attribute("disabled", ""),
                renderer,
            );

            (
                format!("Unterminated value for attribute '{}'", name),
                format!(
                    r#"
The value of {} starts with a quote but no matching quote follows before
the end of the file. Values are enclosed in double or single quotes, and
attributes without a value can be written by name alone:

{}
                    "#,
                    renderer.style(Syntax::AttributeName, name),
                    example
                )
                .trim_ascii()
                .to_string(),
            )
        }
        ParsingError::UnexpectedEndOfInput(_) => (
            "Unexpected end of input".to_string(),
            format!(
                "The file ended inside a tag, before its closing {} was found.",
                renderer.style(Syntax::Bracket, ">")
            ),
        ),
    }
}
