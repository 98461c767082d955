//! Depth-first insertion of a single key.
use super::nodes::TrieNode;

impl<V> TrieNode<V> {
    /// Walks `key` from this node, creating missing children, and stores `value` at the end.
    /// Returns the value it replaced.
    pub(super) fn insert(&mut self, key: &str, value: V) -> Option<V> {
        let mut node = self;
        for ch in key.chars() {
            node = node.children.entry(ch).or_default();
        }
        node.value.replace(value)
    }
}
