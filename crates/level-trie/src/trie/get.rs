//! Walking the trie along a key.
use super::Trie;
use super::nodes::TrieNode;
use alloy_primitives::B256;
use alloy_trie::Nibbles;

impl<V> TrieNode<V> {
    pub(super) fn descend(&self, mut path: impl Iterator<Item = char>) -> Option<&Self> {
        path.try_fold(self, |node, ch| node.child(ch))
    }
}

impl<V> Trie<V> {
    /// Node reached by walking `key` from the root.
    pub fn node(&self, key: &str) -> Option<&TrieNode<V>> {
        self.root.descend(key.chars())
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.node(key).and_then(TrieNode::value)
    }

    /// Value stored under the key spelling `path` in lowercase hex, one character per nibble.
    pub fn get_nibbles(&self, path: &Nibbles) -> Option<&V> {
        let mut chars = Vec::with_capacity(path.len());
        for nibble in path.to_vec() {
            chars.push(char::from_digit(u32::from(nibble), 16)?);
        }
        self.root.descend(chars.into_iter()).and_then(TrieNode::value)
    }

    /// Value stored under the hex form of a 32-byte digest.
    pub fn get_digest(&self, digest: B256) -> Option<&V> {
        self.get_nibbles(&Nibbles::unpack(digest))
    }
}
