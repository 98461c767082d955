//! Indented printing of a trie.
use super::Trie;
use super::nodes::TrieNode;
use std::fmt::{Display, Formatter, Result};

impl<V: Display> Display for Trie<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.root.is_leaf() && self.root.value.is_none() {
            return write!(f, "Trie {{ EMPTY }}");
        }

        fn fmt_value<V: Display>(f: &mut Formatter<'_>, node: &TrieNode<V>) -> Result {
            match &node.value {
                Some(value) => write!(f, " = {value}"),
                None => Ok(()),
            }
        }

        fn fmt_children<V: Display>(f: &mut Formatter<'_>, node: &TrieNode<V>, indent: usize) -> Result {
            for (ch, child) in &node.children {
                write!(f, "\n{}{ch:?}", " ".repeat(indent))?;
                fmt_value(f, child)?;
                fmt_children(f, child, indent + 4)?;
            }
            Ok(())
        }

        write!(f, "Root")?;
        fmt_value(f, &self.root)?;
        fmt_children(f, &self.root, 4)
    }
}
