//! The owned node type the trie is made of.
//!
//! Every node owns its children directly. There is no path compression: one
//! edge is one character, so a key of `n` characters always ends `n` levels
//! below the root.
use serde::Serialize;
use std::collections::BTreeMap;

/// A trie node: an optional terminal value and the children indexed by character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrieNode<V> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) value: Option<V>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub(crate) children: BTreeMap<char, TrieNode<V>>,
}

impl<V> TrieNode<V> {
    /// Creates a node with no value and no children.
    pub const fn new() -> Self {
        Self {
            value: None,
            children: BTreeMap::new(),
        }
    }

    /// Value of the key ending at this node, if any.
    pub const fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Child reached through `ch`.
    pub fn child(&self, ch: char) -> Option<&Self> {
        self.children.get(&ch)
    }

    /// Children in character order.
    pub fn children(&self) -> impl Iterator<Item = (char, &Self)> + '_ {
        self.children.iter().map(|(ch, child)| (*ch, child))
    }

    /// Returns true if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, this node included.
    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(Self::node_count).sum::<usize>()
    }

    /// Number of values stored in this subtree.
    pub fn terminal_count(&self) -> usize {
        usize::from(self.value.is_some())
            + self.children.values().map(Self::terminal_count).sum::<usize>()
    }

    /// Length of the longest path below this node.
    pub fn depth(&self) -> usize {
        self.children
            .values()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self::new()
    }
}
