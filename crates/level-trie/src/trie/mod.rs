mod assemble;
mod compact;
mod display;
mod get;
mod insert;
mod iter;
mod nodes;
mod trie;

pub use assemble::AssembleStats;
pub use compact::CompactNode;
pub use iter::Iter;
pub use nodes::TrieNode;

use serde::Serialize;

/// A prefix trie keyed by characters, with an optional value on every node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trie<V> {
    root: TrieNode<V>,
}
