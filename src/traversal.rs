use std::iter::FusedIterator;

use crate::PropertyPath;

/// Walks from a node's parent up to the root of its tree.
pub struct Ancestors<'a> {
    next: Option<&'a dyn PropertyPath>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a dyn PropertyPath;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent().map(|parent| &**parent);
        Some(current)
    }
}

impl FusedIterator for Ancestors<'_> {}

impl dyn PropertyPath {
    /// parent first, root last; empty for a root node
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            next: self.parent().map(|parent| &**parent),
        }
    }

    pub fn root(&self) -> &dyn PropertyPath {
        self.ancestors().last().unwrap_or(self)
    }

    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    /// names from the root down to this node
    pub fn segments(&self) -> Vec<&str> {
        let mut segments: Vec<&str> = self.ancestors().map(|node| node.name()).collect();
        segments.reverse();
        segments.push(self.name());
        segments
    }

    pub fn is_descendant_of(&self, other: &dyn PropertyPath) -> bool {
        self.ancestors().any(|node| node == other)
    }
}
