//! Deciding how each element is laid out

use serde::Deserialize;

use crate::language::{is_void, Element, Node};

/// What to do with comments found in a template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommentPolicy {
    #[default]
    Drop,
    Keep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Opening tag only.
    Void,
    /// Opening tag, text, closing tag on one line.
    Inline,
    /// Opening tag, children one level deeper, closing tag, each on its
    /// own line.
    Nested,
}

/// Whether any immediate child must go on a line of its own. Text never
/// does; kept comments do.
pub fn has_block_children(children: &[Node], comments: CommentPolicy) -> bool {
    children
        .iter()
        .any(|child| match child {
            Node::Tag(_) => true,
            Node::Comment(_) => comments == CommentPolicy::Keep,
            Node::Text(_) => false,
        })
}

pub fn classify(element: &Element, comments: CommentPolicy) -> Layout {
    if is_void(&element.name) {
        Layout::Void
    } else if has_block_children(&element.children, comments) {
        Layout::Nested
    } else {
        Layout::Inline
    }
}
