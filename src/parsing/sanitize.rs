//! Turn the parser's linked arena into a plain ownership tree

use crate::language::{Document, Element, Node, Section};
use crate::parsing::dom::{Data, Dom};

/// Conversion into a [`Document`] free of parent and sibling links.
/// Sanitizing something that is already sanitized changes nothing.
pub trait Sanitize {
    fn sanitize(self) -> Document;
}

impl Sanitize for Dom {
    fn sanitize(self) -> Document {
        let sections = self
            .roots
            .iter()
            .map(|&index| Section {
                node: detach(&self, index),
                content: self
                    .get(index)
                    .content
                    .clone(),
            })
            .collect();

        Document { sections }
    }
}

impl Sanitize for Document {
    fn sanitize(self) -> Document {
        self
    }
}

fn detach(dom: &Dom, index: usize) -> Node {
    let entry = dom.get(index);

    match &entry.data {
        Data::Tag { name, attributes } => Node::Tag(Element {
            name: name.clone(),
            attributes: attributes.clone(),
            children: entry
                .children
                .iter()
                .map(|&child| detach(dom, child))
                .collect(),
        }),
        Data::Text(data) => Node::Text(data.clone()),
        Data::Comment(data) => Node::Comment(data.clone()),
    }
}
