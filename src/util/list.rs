//! Append-only ordered collections of manifest nodes.
//!
//! Every collection in the manifest (platforms, products, targets, settings,
//! ...) is a `NodeList<T>`. Node-specific convenience constructors are added
//! as inherent impls on the concrete instantiation next to the node type,
//! e.g. `impl NodeList<Product> { pub fn library(..) }`.

use serde::{Deserialize, Serialize};

use crate::util::render::{bracketed_list, Render};

/// An ordered, append-only list of nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeList<T> {
    items: Vec<T>,
}

impl<T> Default for NodeList<T> {
    fn default() -> Self {
        NodeList { items: Vec::new() }
    }
}

impl<T> NodeList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node and return a mutable handle to it.
    pub fn push(&mut self, item: T) -> &mut T {
        let index = self.items.len();
        self.items.push(item);
        &mut self.items[index]
    }

    /// Number of nodes in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a node by position.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterate over the nodes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// View the nodes as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a NodeList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for NodeList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        NodeList {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for NodeList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: Render> Render for NodeList<T> {
    fn render(&self) -> String {
        bracketed_list(self.items.iter().map(Render::render))
    }
}

/// Collect string-like values into owned strings.
pub fn owned_strings<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Leaf(&'static str);

    impl Render for Leaf {
        fn render(&self) -> String {
            format!(".{}", self.0)
        }
    }

    #[test]
    fn test_push_returns_new_element() {
        let mut list = NodeList::new();
        list.push(Leaf("a"));
        let last = list.push(Leaf("b"));
        last.0 = "c";
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).map(|l| l.0), Some("c"));
    }

    #[test]
    fn test_duplicate_pushes_are_kept() {
        let mut list = NodeList::new();
        list.push(Leaf("a"));
        list.push(Leaf("a"));
        assert_eq!(list.render(), "[\n\t.a,\n\t.a\n]");
    }

    #[test]
    fn test_empty_list_renders_brackets() {
        let list: NodeList<Leaf> = NodeList::new();
        assert!(list.is_empty());
        assert_eq!(list.render(), "[]");
    }
}
