//! Compact rendering: every subtree holding a single value collapses into that value.
//!
//! This is the shape of a "shortest unique prefix" table. A key is spelled only
//! as far as needed to tell it apart from every other key, and the value
//! replaces the rest of its path. A node that keeps its own value next to
//! children stores the value under the empty string, which no single-character
//! edge can collide with.
use super::Trie;
use super::nodes::TrieNode;
use serde::Serialize;
use std::collections::BTreeMap;

/// A node of the compact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CompactNode<V> {
    /// The only value of a collapsed subtree.
    Value(V),
    /// Edges by character; the node's own value, if kept, sits under `""`.
    Branch(BTreeMap<String, CompactNode<V>>),
}

/// A subtree folded bottom-up.
enum Folded<'a, V> {
    Empty,
    Single(&'a V),
    Many(BTreeMap<String, CompactNode<&'a V>>),
}

/// Folds the children of `node` and, when more than one value remains, its own value too.
fn fold_branch<V>(node: &TrieNode<V>) -> (usize, Option<&V>, BTreeMap<String, CompactNode<&V>>) {
    let mut count = usize::from(node.value.is_some());
    let mut single = node.value.as_ref();
    let mut branch = BTreeMap::new();
    for (ch, child) in &node.children {
        match fold(child) {
            Folded::Empty => {}
            Folded::Single(value) => {
                count += 1;
                single = Some(value);
                branch.insert(ch.to_string(), CompactNode::Value(value));
            }
            Folded::Many(map) => {
                count += 2;
                branch.insert(ch.to_string(), CompactNode::Branch(map));
            }
        }
    }
    if count > 1 {
        if let Some(value) = &node.value {
            branch.insert(String::new(), CompactNode::Value(value));
        }
    }
    (count, single, branch)
}

fn fold<V>(node: &TrieNode<V>) -> Folded<'_, V> {
    match fold_branch(node) {
        (0, _, _) => Folded::Empty,
        (1, Some(value), _) => Folded::Single(value),
        (_, _, branch) => Folded::Many(branch),
    }
}

impl<V> Trie<V> {
    /// Renders the trie in compact form. The root itself never collapses.
    pub fn compact(&self) -> CompactNode<&V> {
        let (count, _, mut branch) = fold_branch(&self.root);
        if count == 1 {
            if let Some(value) = &self.root.value {
                branch.insert(String::new(), CompactNode::Value(value));
            }
        }
        CompactNode::Branch(branch)
    }
}
