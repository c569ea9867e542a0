//! Template formatter: lays a markup tree out as indented canonical text

use crate::formatting::*;
use crate::language::*;

/// Layout knobs for the template block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub indent_width: usize,
    pub comments: CommentPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            indent_width: 4,
            comments: CommentPolicy::Drop,
        }
    }
}

/// Everything the template formatter needs besides the tree itself.
pub struct Template<'a> {
    pub attributes: AttributeRenderer<'a>,
    pub settings: Settings,
}

/// Lay out the given nodes, the first level at `depth`, as tagged
/// fragments. Every line produced ends with a Newline fragment.
pub fn format_with_renderer(nodes: &[Node], depth: usize, template: &Template) -> Vec<(Syntax, String)> {
    let mut output = Formatter::new(template, depth);

    output.append_nodes(nodes);

    output.fragments
}

struct Formatter<'t, 'a> {
    fragments: Vec<(Syntax, String)>,
    nesting: usize,
    template: &'t Template<'a>,
}

impl<'t, 'a> Formatter<'t, 'a> {
    fn new(template: &'t Template<'a>, depth: usize) -> Formatter<'t, 'a> {
        Formatter {
            fragments: Vec::new(),
            nesting: depth,
            template,
        }
    }

    fn append(&mut self, syntax: Syntax, content: &str) {
        self.fragments
            .push((syntax, content.to_string()));
    }

    fn append_newline(&mut self) {
        self.append(Syntax::Newline, "\n");
    }

    fn increase(&mut self) {
        self.nesting += 1;
    }

    fn decrease(&mut self) {
        self.nesting -= 1;
    }

    fn indent(&mut self) {
        let width = self.nesting
            * self
                .template
                .settings
                .indent_width;
        if width > 0 {
            let spaces = " ".repeat(width);
            self.append(Syntax::Indent, &spaces);
        }
    }

    fn keeps_comments(&self) -> bool {
        self.template
            .settings
            .comments
            == CommentPolicy::Keep
    }

    fn append_nodes(&mut self, nodes: &[Node]) {
        for node in nodes {
            self.append_node(node);
        }
    }

    fn append_node(&mut self, node: &Node) {
        match node {
            Node::Comment(data) => {
                if self.keeps_comments() {
                    self.indent();
                    self.append_comment(data);
                    self.append_newline();
                }
            }
            Node::Text(data) => {
                // blank text never gets a line of its own
                let text = flatten(data);
                if !text.is_empty() {
                    self.indent();
                    self.append(Syntax::Text, &text);
                    self.append_newline();
                }
            }
            Node::Tag(element) => self.append_element(element),
        }
    }

    fn append_element(&mut self, element: &Element) {
        let comments = self
            .template
            .settings
            .comments;

        match classify(element, comments) {
            Layout::Void => {
                self.indent();
                self.append_opening(element);
                self.append_newline();
            }
            Layout::Inline => {
                self.indent();
                self.append_opening(element);
                let text = inline_text(element);
                if !text.is_empty() {
                    self.append(Syntax::Text, &text);
                }
                self.append_closing(&element.name);
                self.append_newline();
            }
            Layout::Nested => {
                self.indent();
                self.append_opening(element);
                self.append_newline();

                self.increase();
                self.append_nodes(&element.children);
                self.decrease();

                self.indent();
                self.append_closing(&element.name);
                self.append_newline();
            }
        }
    }

    fn append_opening(&mut self, element: &Element) {
        self.append(Syntax::Bracket, "<");
        self.append(Syntax::TagName, &element.name);

        let pairs = self
            .template
            .attributes
            .pairs(&element.attributes);

        for (name, value) in pairs {
            self.append(Syntax::Neutral, " ");
            self.append(Syntax::AttributeName, name);

            if !value.is_empty() {
                let (quote, value) = quoted(&value);
                let quote = quote.to_string();
                self.append(Syntax::Operator, "=");
                self.append(Syntax::Quote, &quote);
                self.append(Syntax::AttributeValue, &value);
                self.append(Syntax::Quote, &quote);
            }
        }

        self.append(Syntax::Bracket, ">");
    }

    fn append_closing(&mut self, name: &str) {
        self.append(Syntax::Bracket, "</");
        self.append(Syntax::TagName, name);
        self.append(Syntax::Bracket, ">");
    }

    fn append_comment(&mut self, data: &str) {
        self.append(Syntax::Comment, &format!("<!-- {} -->", flatten(data)));
    }
}

/// Text trimmed, with line breaks inside it removed.
fn flatten(data: &str) -> String {
    data.trim()
        .replace(&['\r', '\n'][..], "")
}

/// The trimmed Text children of an element run together.
fn inline_text(element: &Element) -> String {
    element
        .children
        .iter()
        .filter_map(|child| match child {
            Node::Text(data) if data != "\n" => Some(data.trim()),
            _ => None,
        })
        .collect()
}
