#![no_main]

use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use level_trie::{Entry, Trie};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    /// Keys are spelled over a 4-letter alphabet so long shared prefix chains are common.
    entries: Vec<(Vec<u8>, u16)>,
}

fn key(raw: &[u8]) -> String {
    raw.iter().map(|b| char::from(b'a' + b % 4)).collect()
}

fuzz_target!(|input: Input| {
    let entries: Vec<Entry<u16>> = input
        .entries
        .iter()
        .map(|(raw, value)| Entry::new(key(raw), *value))
        .collect();

    let mut inserted = Trie::new();
    let mut model = BTreeMap::new();
    for entry in &entries {
        inserted.insert(&entry.key, entry.value);
        model.insert(entry.key.clone(), entry.value);
    }

    let assembled = Trie::assemble(entries);
    assert_eq!(assembled, inserted, "assemble != folded insert");

    for (key, value) in &model {
        assert_eq!(assembled.get(key), Some(value), "value dropped for {key:?}");
    }
    assert_eq!(assembled.len(), model.len(), "spurious terminal value");
});
