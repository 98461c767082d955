//! A character-indexed prefix trie assembled level by level.
//!
//! [`Trie::assemble`] consumes a list of [`Entry`] records and walks all of them
//! one key position at a time, so every node of a given depth is created during
//! the same pass. [`Trie::insert`] is the plain depth-first alternative and
//! yields the same trie for the same input.
pub mod entries;
mod error;
mod trie;

pub use alloy_primitives::B256;
pub use alloy_trie::Nibbles;
pub use entries::{Entry, KeyAlphabet};
pub use error::{Error, Result};
pub use trie::{AssembleStats, CompactNode, Iter, Trie, TrieNode};
