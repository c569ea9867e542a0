//! Types representing a parsed single-file component

use indexmap::IndexMap;
use std::ops::Range;

/// Attribute name to raw value, in the order the author wrote them. Names
/// are case-sensitive and unique.
pub type Attributes = IndexMap<String, String>;

/// Elements written without a closing tag and never given children.
/// Matching is case-sensitive.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "br", "col", "command", "embed", "frame", "hr", "img", "input",
    "isindex", "keygen", "link", "meta", "param", "source", "track", "wbr",
];

pub fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

/// A node of a sanitized markup tree. Every node exclusively owns its
/// children; there are no links back up or across the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Tag(Element),
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Attributes,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: &str) -> Element {
        Element {
            name: name.to_string(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Element {
        self.attributes
            .entry(name.to_string())
            .or_insert_with(|| value.to_string());
        self
    }

    pub fn with_child(mut self, child: Node) -> Element {
        self.children
            .push(child);
        self
    }

    /// Concatenated data of the immediate Text children.
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                Node::Text(data) => Some(data.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Node {
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Tag(element) => Some(&element.name),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Tag(element) => Some(element),
            _ => None,
        }
    }

}

/// One top-level node of a file, together with the byte range of its
/// inner content in the original source, when both the end of the opening
/// tag and the matching closing tag were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub node: Node,
    pub content: Option<Range<usize>>,
}

/// The parse result for one file, after sanitizing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub sections: Vec<Section>,
}

impl Document {
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.sections
            .iter()
            .map(|section| &section.node)
    }

    /// The first top-level element with the given name.
    pub fn find(&self, name: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|section| section.node.name() == Some(name))
    }

    /// Every top-level element with the given name, in document order.
    pub fn all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.nodes()
            .filter_map(Node::as_element)
            .filter(move |element| element.name == name)
    }
}
