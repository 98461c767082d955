#![no_main]

use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use level_trie::{Entry, Trie};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    keys: Vec<String>,
    /// Drives a Fisher-Yates shuffle of the deduplicated entries.
    swaps: Vec<u16>,
}

fuzz_target!(|input: Input| {
    let distinct: BTreeMap<String, usize> = input
        .keys
        .into_iter()
        .enumerate()
        .map(|(i, key)| (key, i))
        .collect();
    let entries: Vec<Entry<usize>> = distinct
        .into_iter()
        .map(|(key, value)| Entry::new(key, value))
        .collect();

    let mut shuffled = entries.clone();
    for (i, swap) in input.swaps.iter().enumerate().take(shuffled.len()) {
        let j = i + usize::from(*swap) % (shuffled.len() - i);
        shuffled.swap(i, j);
    }

    assert_eq!(
        Trie::assemble(entries),
        Trie::assemble(shuffled),
        "trie structure depends on entry order"
    );
});
