//! Tolerant markup parser for single-file components
//!
//! Tag and attribute names keep the case the author used, `<name />` is
//! recognised as self-closing, and the bodies of `<script>` and `<style>`
//! are taken as raw text. Anything that cannot start markup is text.

use std::fmt;

use tracing::debug;

use crate::language::{is_void, Attributes};
use crate::parsing::dom::{Data, Dom};
use crate::pattern;

/// Elements whose content is taken verbatim up to their closing tag.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    UnterminatedComment(usize),
    UnterminatedValue(usize, String),
    UnexpectedEndOfInput(usize),
}

impl ParsingError {
    pub fn offset(&self) -> usize {
        match self {
            ParsingError::UnterminatedComment(offset) => *offset,
            ParsingError::UnterminatedValue(offset, _) => *offset,
            ParsingError::UnexpectedEndOfInput(offset) => *offset,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParsingError::UnterminatedComment(_) => "comment is missing its closing -->".to_string(),
            ParsingError::UnterminatedValue(_, name) => {
                format!("value of attribute '{}' is missing its closing quote", name)
            }
            ParsingError::UnexpectedEndOfInput(_) => "unexpected end of input inside tag".to_string(),
        }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.message(), self.offset())
    }
}

impl std::error::Error for ParsingError {}

/// Parse markup into a linked [`Dom`]. Elements left open at the end of
/// input are closed implicitly.
pub fn parse(content: &str) -> Result<Dom, ParsingError> {
    let mut input = Parser::new();
    input.initialize(content);

    let result = input.parse_from_start();
    if let Err(error) = &result {
        debug!(?error);
    }
    result
}

#[derive(Debug)]
struct Parser<'i> {
    original: &'i str,
    source: &'i str,
    offset: usize,
    dom: Dom,
    open: Vec<usize>,
}

impl<'i> Parser<'i> {
    fn new() -> Parser<'i> {
        Parser {
            original: "",
            source: "",
            offset: 0,
            dom: Dom::new(),
            open: Vec::new(),
        }
    }

    fn initialize(&mut self, content: &'i str) {
        self.original = content;
        self.source = content;
        self.offset = 0;
        self.dom = Dom::new();
        self.open
            .clear();
    }

    fn advance(&mut self, width: usize) {
        self.source = &self.source[width..];
        self.offset += width;
    }

    fn is_finished(&self) -> bool {
        self.source
            .is_empty()
    }

    fn trim_whitespace(&mut self) {
        let remaining = self
            .source
            .trim_start();
        let width = self
            .source
            .len()
            - remaining.len();
        self.advance(width);
    }

    fn current_parent(&self) -> Option<usize> {
        self.open
            .last()
            .copied()
    }

    fn parse_from_start(&mut self) -> Result<Dom, ParsingError> {
        while !self.is_finished() {
            let content = self.source;

            if content.starts_with("<!--") {
                self.read_comment()?;
            } else if is_closing_tag(content) {
                self.read_closing_tag()?;
            } else if is_declaration(content) {
                self.skip_declaration()?;
            } else if is_opening_tag(content) {
                self.read_opening_tag()?;
            } else {
                self.read_text();
            }
        }

        // whatever is still open never saw its closing tag
        for index in self
            .open
            .drain(..)
        {
            self.dom.entries[index].content = None;
        }

        debug!(
            "Parsed {} node{}",
            self.dom
                .len(),
            if self
                .dom
                .len()
                == 1
            {
                ""
            } else {
                "s"
            }
        );

        Ok(std::mem::take(&mut self.dom))
    }

    fn read_text(&mut self) {
        // the first character is known not to start markup, even if it is '<'
        let end = self
            .source
            .match_indices('<')
            .map(|(i, _)| i)
            .find(|&i| i > 0 && starts_markup(&self.source[i..]))
            .unwrap_or(self.source.len());

        let text = &self.source[..end];
        self.dom
            .append(self.current_parent(), Data::Text(text.to_string()));
        self.advance(end);
    }

    fn read_comment(&mut self) -> Result<(), ParsingError> {
        let start = self.offset;
        let body = &self.source[4..];

        match body.find("-->") {
            Some(i) => {
                let data = body[..i].to_string();
                self.dom
                    .append(self.current_parent(), Data::Comment(data));
                self.advance(4 + i + 3);
                Ok(())
            }
            None => Err(ParsingError::UnterminatedComment(start)),
        }
    }

    fn skip_declaration(&mut self) -> Result<(), ParsingError> {
        match self
            .source
            .find('>')
        {
            Some(i) => {
                self.advance(i + 1);
                Ok(())
            }
            None => Err(ParsingError::UnexpectedEndOfInput(self.offset)),
        }
    }

    fn read_tag_name(&mut self) -> &'i str {
        let name = pattern!(r"^[^\s/>]+")
            .find(self.source)
            .map(|m| m.as_str())
            .unwrap_or("");
        self.advance(name.len());
        name
    }

    fn read_closing_tag(&mut self) -> Result<(), ParsingError> {
        let start = self.offset;
        self.advance(2);
        let name = self.read_tag_name();

        match self
            .source
            .find('>')
        {
            Some(i) => self.advance(i + 1),
            None => return Err(ParsingError::UnexpectedEndOfInput(self.offset)),
        }

        // find the innermost open element of this name; everything opened
        // after it is closed implicitly
        let position = self
            .open
            .iter()
            .rposition(|&index| {
                self.dom
                    .tag_name(index)
                    == Some(name)
            });

        match position {
            Some(k) => {
                let index = self.open[k];
                let entry = &mut self.dom.entries[index];
                if let Some(content) = &mut entry.content {
                    content.end = start;
                }
                for &implicit in &self.open[k + 1..] {
                    self.dom.entries[implicit].content = None;
                }
                self.open
                    .truncate(k);
            }
            None => {
                debug!("Ignoring stray closing tag </{}> at {}", name, start);
            }
        }

        Ok(())
    }

    fn read_opening_tag(&mut self) -> Result<(), ParsingError> {
        self.advance(1);
        let name = self.read_tag_name();

        let mut attributes = Attributes::new();
        let mut self_closing = false;

        loop {
            self.trim_whitespace();

            if self.is_finished() {
                return Err(ParsingError::UnexpectedEndOfInput(self.offset));
            }

            if self
                .source
                .starts_with("/>")
            {
                self.advance(2);
                self_closing = true;
                break;
            } else if self
                .source
                .starts_with('>')
            {
                self.advance(1);
                break;
            } else if self
                .source
                .starts_with('/')
            {
                self.advance(1);
                continue;
            }

            let (key, value) = self.read_attribute()?;
            attributes
                .entry(key)
                .or_insert(value);
        }

        let index = self.dom.append(
            self.current_parent(),
            Data::Tag {
                name: name.to_string(),
                attributes,
            },
        );

        if self_closing || is_void(name) {
            return Ok(());
        }

        // provisional; a missing closing tag clears it again
        self.dom.entries[index].content = Some(self.offset..self.original.len());
        self.open
            .push(index);

        if RAW_TEXT_ELEMENTS.contains(&name) {
            let end = raw_text_end(self.source, name);

            if end > 0 {
                let text = &self.source[..end];
                self.dom
                    .append(Some(index), Data::Text(text.to_string()));
                self.advance(end);
            }
        }

        Ok(())
    }

    fn read_attribute(&mut self) -> Result<(String, String), ParsingError> {
        let key = pattern!(r"^[^\s/>][^\s/>=]*")
            .find(self.source)
            .map(|m| m.as_str())
            .unwrap_or("");
        self.advance(key.len());

        self.trim_whitespace();
        if !self
            .source
            .starts_with('=')
        {
            return Ok((key.to_string(), String::new()));
        }

        self.advance(1);
        self.trim_whitespace();

        let value = match self
            .source
            .chars()
            .next()
        {
            Some(quote @ ('"' | '\'')) => {
                let start = self.offset;
                let body = &self.source[1..];
                match body.find(quote) {
                    Some(i) => {
                        let value = &body[..i];
                        self.advance(i + 2);
                        value
                    }
                    None => return Err(ParsingError::UnterminatedValue(start, key.to_string())),
                }
            }
            _ => {
                let value = pattern!(r"^[^\s>]*")
                    .find(self.source)
                    .map(|m| m.as_str())
                    .unwrap_or("");
                self.advance(value.len());
                value
            }
        };

        Ok((key.to_string(), value.to_string()))
    }
}

/// Where the body of a raw-text element ends: at the first `</name` that
/// is followed by whitespace, `/`, `>` or the end of input. Anything else,
/// such as `</scripts>`, belongs to the body.
fn raw_text_end(content: &str, name: &str) -> usize {
    let delimiter = format!("</{}", name);

    content
        .match_indices(&delimiter)
        .map(|(i, _)| i)
        .find(|&i| {
            content[i + delimiter.len()..]
                .chars()
                .next()
                .map_or(true, |c| c.is_whitespace() || c == '/' || c == '>')
        })
        .unwrap_or(content.len())
}

fn is_opening_tag(content: &str) -> bool {
    pattern!(r"^<[A-Za-z]").is_match(content)
}

fn is_closing_tag(content: &str) -> bool {
    pattern!(r"^</[A-Za-z]").is_match(content)
}

fn is_declaration(content: &str) -> bool {
    content.starts_with("<!") || content.starts_with("<?")
}

fn starts_markup(content: &str) -> bool {
    content.starts_with("<!--")
        || is_closing_tag(content)
        || is_declaration(content)
        || is_opening_tag(content)
}
