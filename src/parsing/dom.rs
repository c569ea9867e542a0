//! Raw parser output: an arena of nodes linked to their parent and siblings

use std::ops::Range;

use crate::language::Attributes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Data {
    Tag { name: String, attributes: Attributes },
    Text(String),
    Comment(String),
}

/// A node as the parser builds it. The `parent`, `previous` and `next`
/// fields are indices back into the owning [`Dom`]; they must not survive
/// past sanitizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub data: Data,
    pub parent: Option<usize>,
    pub previous: Option<usize>,
    pub next: Option<usize>,
    pub children: Vec<usize>,
    pub content: Option<Range<usize>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dom {
    pub entries: Vec<Entry>,
    pub roots: Vec<usize>,
}

impl Dom {
    pub fn new() -> Dom {
        Dom::default()
    }

    /// Add a node as the last child of `parent` (or as the last top-level
    /// node), wiring up its back-references.
    pub fn append(&mut self, parent: Option<usize>, data: Data) -> usize {
        let index = self
            .entries
            .len();

        let siblings = match parent {
            Some(p) => &mut self.entries[p].children,
            None => &mut self.roots,
        };
        let previous = siblings
            .last()
            .copied();
        siblings.push(index);

        if let Some(previous) = previous {
            self.entries[previous].next = Some(index);
        }

        self.entries
            .push(Entry {
                data,
                parent,
                previous,
                next: None,
                children: Vec::new(),
                content: None,
            });

        index
    }

    pub fn get(&self, index: usize) -> &Entry {
        &self.entries[index]
    }

    pub fn parent(&self, index: usize) -> Option<usize> {
        self.entries[index].parent
    }

    pub fn previous(&self, index: usize) -> Option<usize> {
        self.entries[index].previous
    }

    pub fn next(&self, index: usize) -> Option<usize> {
        self.entries[index].next
    }

    pub fn tag_name(&self, index: usize) -> Option<&str> {
        match &self.entries[index].data {
            Data::Tag { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries
            .is_empty()
    }
}
