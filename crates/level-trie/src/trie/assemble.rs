//! Breadth-by-depth trie assembly.
//!
//! All entries are walked together, one key position per level. At level `d`
//! every still active entry either steps into the child for its `d`-th
//! character, or has run out of characters and retires, scheduling its value on
//! the node it stands on. Scheduled values are committed once the level is
//! done, so a key ending where a longer key continues keeps its value no matter
//! in which order the two entries are visited.
//!
//! Nodes live in an index arena while the level passes run and are turned into
//! an owned [`TrieNode`] tree at the end. Children are always allocated after
//! their parent, which lets the conversion run back to front without recursion.
use super::nodes::TrieNode;
use crate::Entry;
use log::{debug, trace};
use std::collections::BTreeMap;
use std::fmt;

type NodeId = usize;

const ROOT: NodeId = 0;

/// Active entries of one level, grouped by the node they stand on.
type Frontier = BTreeMap<NodeId, Vec<Cursor>>;

/// Counters collected by [`Trie::assemble_with_stats`](crate::Trie::assemble_with_stats).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssembleStats {
    /// Entries consumed.
    pub entries: usize,
    /// Depth levels processed.
    pub levels: usize,
    /// Nodes in the result, root included.
    pub nodes: usize,
    /// Nodes holding a value.
    pub terminals: usize,
    /// Scheduled values replaced by a later entry with the same key.
    pub overwrites: usize,
    /// Nodes reached by exactly one entry.
    pub unique_paths: usize,
}

impl fmt::Display for AssembleStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} entries, {} levels, {} nodes, {} terminals, {} overwrites, {} unique-path nodes",
            self.entries, self.levels, self.nodes, self.terminals, self.overwrites, self.unique_paths
        )
    }
}

/// Traversal state of one entry; the node it stands on is the frontier key.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    entry: usize,
}

/// Value assignment state of an arena node.
#[derive(Debug)]
enum Terminal<V> {
    Unset,
    /// Scheduled by a retiring entry during the current level.
    Pending(V),
    Committed(V),
}

impl<V> Terminal<V> {
    /// Schedules `value`, returning true if it replaced a value scheduled earlier in the level.
    fn schedule(&mut self, value: V) -> bool {
        debug_assert!(
            !matches!(self, Self::Committed(_)),
            "a node only receives values during its own level"
        );
        matches!(std::mem::replace(self, Self::Pending(value)), Self::Pending(_))
    }

    fn commit(&mut self) {
        if let Self::Pending(_) = self {
            if let Self::Pending(value) = std::mem::replace(self, Self::Unset) {
                *self = Self::Committed(value);
            }
        }
    }

    fn into_value(self) -> Option<V> {
        match self {
            Self::Unset => None,
            Self::Pending(value) | Self::Committed(value) => Some(value),
        }
    }
}

/// Whether a node is still assumed to lie on a single entry's path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Growth {
    /// Created by one entry and not reached by another yet.
    Fresh,
    Shared,
}

#[derive(Debug)]
struct ArenaNode<V> {
    children: BTreeMap<char, NodeId>,
    terminal: Terminal<V>,
    growth: Growth,
}

impl<V> ArenaNode<V> {
    const fn new(growth: Growth) -> Self {
        Self {
            children: BTreeMap::new(),
            terminal: Terminal::Unset,
            growth,
        }
    }
}

#[derive(Debug)]
struct Arena<V> {
    nodes: Vec<ArenaNode<V>>,
}

impl<V> Arena<V> {
    fn new() -> Self {
        Self {
            nodes: vec![ArenaNode::new(Growth::Shared)],
        }
    }

    /// Steps from `parent` into its `ch` child, creating it if absent.
    fn advance(&mut self, parent: NodeId, ch: char) -> NodeId {
        if let Some(&child) = self.nodes[parent].children.get(&ch) {
            // A second arrival: the child is no longer a single entry's leaf.
            self.nodes[child].growth = Growth::Shared;
            return child;
        }
        let child = self.nodes.len();
        self.nodes.push(ArenaNode::new(Growth::Fresh));
        self.nodes[parent].children.insert(ch, child);
        child
    }

    fn into_root(self) -> TrieNode<V> {
        let mut built: Vec<Option<TrieNode<V>>> = (0..self.nodes.len()).map(|_| None).collect();
        for (id, node) in self.nodes.into_iter().enumerate().rev() {
            let children = node
                .children
                .into_iter()
                .filter_map(|(ch, child)| built[child].take().map(|child| (ch, child)))
                .collect();
            built[id] = Some(TrieNode {
                value: node.terminal.into_value(),
                children,
            });
        }
        built.swap_remove(ROOT).unwrap_or_default()
    }
}

/// Builds the trie for `entries`; the last entry wins among identical keys.
pub(super) fn assemble<V>(entries: impl IntoIterator<Item = Entry<V>>) -> (TrieNode<V>, AssembleStats) {
    let (keys, mut values): (Vec<Vec<char>>, Vec<Option<V>>) = entries
        .into_iter()
        .map(|entry| (entry.key.chars().collect(), Some(entry.value)))
        .unzip();

    let mut stats = AssembleStats {
        entries: keys.len(),
        ..Default::default()
    };
    let mut arena = Arena::new();
    let mut frontier = Frontier::new();
    if !keys.is_empty() {
        frontier.insert(ROOT, (0..keys.len()).map(|entry| Cursor { entry }).collect());
    }

    let mut depth = 0;
    while !frontier.is_empty() {
        debug!(
            "assemble level {depth}: {} active entries on {} nodes",
            frontier.values().map(Vec::len).sum::<usize>(),
            frontier.len()
        );
        let mut next = Frontier::new();
        let mut retired_on = Vec::new();
        for (node, cursors) in frontier {
            for cursor in cursors {
                match keys[cursor.entry].get(depth) {
                    Some(&ch) => {
                        let child = arena.advance(node, ch);
                        next.entry(child).or_default().push(cursor);
                    }
                    None => {
                        let Some(value) = values[cursor.entry].take() else {
                            continue;
                        };
                        if arena.nodes[node].terminal.schedule(value) {
                            trace!("entry {} overwrote a duplicate key", cursor.entry);
                            stats.overwrites += 1;
                        }
                        retired_on.push(node);
                    }
                }
            }
        }
        for node in retired_on {
            arena.nodes[node].terminal.commit();
        }
        frontier = next;
        depth += 1;
    }

    stats.levels = depth;
    stats.nodes = arena.nodes.len();
    stats.terminals = arena
        .nodes
        .iter()
        .filter(|node| !matches!(node.terminal, Terminal::Unset))
        .count();
    stats.unique_paths = arena
        .nodes
        .iter()
        .filter(|node| node.growth == Growth::Fresh)
        .count();
    debug!("assembled trie: {stats}");

    (arena.into_root(), stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_schedule_and_commit() {
        let mut terminal = Terminal::Unset;
        assert!(!terminal.schedule(1));
        assert!(terminal.schedule(2));
        terminal.commit();
        assert!(matches!(terminal, Terminal::Committed(2)));
        assert_eq!(terminal.into_value(), Some(2));
        assert_eq!(Terminal::<u8>::Unset.into_value(), None);
    }

    #[test]
    fn advance_marks_second_arrival_shared() {
        let mut arena = Arena::<u8>::new();
        let a = arena.advance(ROOT, 'a');
        assert_eq!(arena.nodes[a].growth, Growth::Fresh);
        assert_eq!(arena.advance(ROOT, 'a'), a);
        assert_eq!(arena.nodes[a].growth, Growth::Shared);
        let b = arena.advance(ROOT, 'b');
        assert_ne!(a, b);
        assert_eq!(arena.nodes[b].growth, Growth::Fresh);
    }

    #[test]
    fn arena_converts_into_owned_tree() {
        let mut arena = Arena::new();
        let a = arena.advance(ROOT, 'a');
        let ab = arena.advance(a, 'b');
        arena.nodes[ab].terminal.schedule(7);
        arena.nodes[ab].terminal.commit();
        let root = arena.into_root();
        assert_eq!(root.node_count(), 3);
        assert_eq!(root.child('a').and_then(|a| a.child('b')).and_then(TrieNode::value), Some(&7));
    }

    #[test]
    fn stats_for_shared_prefixes() {
        let (_, stats) = assemble(vec![
            Entry::new("ab", 1),
            Entry::new("ac", 2),
            Entry::new("a", 3),
            Entry::new("a", 4),
        ]);
        assert_eq!(
            stats,
            AssembleStats {
                entries: 4,
                levels: 3,
                nodes: 4,
                terminals: 3,
                overwrites: 1,
                unique_paths: 2,
            }
        );
    }

    #[test]
    fn empty_input_processes_no_level() {
        let (root, stats) = assemble(Vec::<Entry<u8>>::new());
        assert_eq!(root, TrieNode::new());
        assert_eq!(stats.levels, 0);
        assert_eq!(stats.nodes, 1);
    }
}
