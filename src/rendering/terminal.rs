//! Renderers for colourizing component templates

use crate::formatting::*;
use owo_colors::OwoColorize;

/// Embellish fragments with ANSI escapes to create syntax highlighting in
/// terminal output.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Neutral => content.to_string(),
            Syntax::Indent => content.to_string(),
            Syntax::Newline => "\n".to_string(),
            Syntax::Bracket => content // punctuation.definition.tag - #999999 (grey)
                .color(owo_colors::Rgb(153, 153, 153))
                .to_string(),
            Syntax::TagName => content // entity.name.tag - #3465a4 (blue) bold
                .color(owo_colors::Rgb(0x34, 0x65, 0xa4))
                .bold()
                .to_string(),
            Syntax::AttributeName => content // entity.other.attribute-name - #8f5902 (brown)
                .color(owo_colors::Rgb(0x8f, 0x59, 0x02))
                .to_string(),
            Syntax::Operator => content // punctuation.separator.key-value
                .color(owo_colors::Rgb(153, 153, 153))
                .to_string(),
            Syntax::Quote => content // punctuation.definition.string - #4e9a06 (green)
                .color(owo_colors::Rgb(0x4e, 0x9a, 0x06))
                .to_string(),
            Syntax::AttributeValue => content // string.quoted - #4e9a06 (green) bold
                .color(owo_colors::Rgb(0x4e, 0x9a, 0x06))
                .bold()
                .to_string(),
            Syntax::Text => content.to_string(),
            Syntax::Comment => content // comment.block - #75507b (plum) italic
                .color(owo_colors::Rgb(0x75, 0x50, 0x7b))
                .italic()
                .to_string(),
        }
    }
}
