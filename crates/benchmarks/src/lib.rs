#![allow(unused_crate_dependencies)]
//! Entry generators shared by the trie benchmarks.

use alloy_primitives::keccak256;
use level_trie::Entry;

/// Shape of a generated entry list.
#[derive(Debug, Clone, Copy)]
pub struct EntryConfig {
    /// Number of entries.
    pub num_entries: usize,
    /// Hex characters kept from each 64-character digest key.
    pub key_len: usize,
    /// Every `prefix_every`-th entry also gets a key truncated to half its length;
    /// `0` disables prefix keys.
    pub prefix_every: usize,
}

/// Hashes the entry index into a digest key, truncated to `config.key_len` characters.
pub fn generate_entries(config: &EntryConfig) -> Vec<Entry<u64>> {
    let mut entries = Vec::with_capacity(config.num_entries);
    for i in 0..config.num_entries {
        let digest = keccak256((i as u64).to_be_bytes());
        let mut entry = Entry::from_digest(digest, i as u64);
        entry.key.truncate(config.key_len);
        if config.prefix_every != 0 && i % config.prefix_every == 0 {
            let half = entry.key[..config.key_len / 2].to_string();
            entries.push(Entry::new(half, i as u64));
        }
        entries.push(entry);
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_truncated_keys_and_prefixes() {
        let entries = generate_entries(&EntryConfig {
            num_entries: 4,
            key_len: 8,
            prefix_every: 2,
        });
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0].key.len(), 4);
        assert!(entries[1].key.starts_with(&entries[0].key));
        assert!(entries.iter().all(|entry| entry.key.len() <= 8));
    }
}
