//! Construction and inspection of a [`Trie`].
use super::assemble::{AssembleStats, assemble};
use super::iter::Iter;
use super::nodes::TrieNode;
use crate::Entry;
use crate::trie::Trie;

impl<V> Trie<V> {
    /// Creates an empty trie.
    pub const fn new() -> Self {
        Self {
            root: TrieNode::new(),
        }
    }

    /// Builds a trie from `entries` level by level. Among entries with the same
    /// key the last one wins; a key that prefixes another keeps its own value.
    pub fn assemble(entries: impl IntoIterator<Item = Entry<V>>) -> Self {
        Self::assemble_with_stats(entries).0
    }

    /// Same as [`Trie::assemble`], also returning what the construction did.
    pub fn assemble_with_stats(entries: impl IntoIterator<Item = Entry<V>>) -> (Self, AssembleStats) {
        let (root, stats) = assemble(entries);
        (Self { root }, stats)
    }

    /// Inserts a value under `key`. Overrides and returns the previous value if it exists.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        self.root.insert(key, value)
    }

    /// The root node.
    pub const fn root(&self) -> &TrieNode<V> {
        &self.root
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.root.terminal_count()
    }

    /// Returns true if no value is stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf() && self.root.value.is_none()
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Length of the longest key.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Iterates over `(key, value)` pairs in lexicographic character order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.root)
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<Entry<V>> for Trie<V> {
    fn from_iter<I: IntoIterator<Item = Entry<V>>>(iter: I) -> Self {
        Self::assemble(iter)
    }
}

impl<'a, V> IntoIterator for &'a Trie<V> {
    type Item = (String, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
