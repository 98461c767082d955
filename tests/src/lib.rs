#![allow(missing_docs)]

#[cfg(test)]
mod tests {
    use level_trie::{Entry, KeyAlphabet, Trie, entries};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use std::collections::{BTreeMap, BTreeSet};

    /// Random keys over a tiny alphabet, so prefixes, duplicates and long shared chains are common.
    fn random_entries(rng: &mut StdRng, alphabet: &[char], max_len: usize, count: usize) -> Vec<Entry<u32>> {
        (0..count)
            .map(|i| {
                let len = rng.random_range(0..=max_len);
                let key: String = (0..len)
                    .map(|_| alphabet[rng.random_range(0..alphabet.len())])
                    .collect();
                Entry::new(key, i as u32)
            })
            .collect()
    }

    fn inserted(entries: &[Entry<u32>]) -> Trie<u32> {
        let mut trie = Trie::new();
        for entry in entries {
            trie.insert(&entry.key, entry.value);
        }
        trie
    }

    fn last_values(entries: &[Entry<u32>]) -> BTreeMap<String, u32> {
        entries
            .iter()
            .map(|entry| (entry.key.clone(), entry.value))
            .collect()
    }

    fn distinct_prefixes(entries: &[Entry<u32>]) -> usize {
        let mut prefixes = BTreeSet::new();
        prefixes.insert(String::new());
        for entry in entries {
            let mut prefix = String::new();
            for ch in entry.key.chars() {
                prefix.push(ch);
                prefixes.insert(prefix.clone());
            }
        }
        prefixes.len()
    }

    #[test]
    fn random_prefix_chains() {
        let mut rng = StdRng::seed_from_u64(0x7269_65);
        for _ in 0..500 {
            let count = rng.random_range(0..40);
            let entries = random_entries(&mut rng, &['a', 'b'], 6, count);
            let assembled = Trie::assemble(entries.clone());
            assert_eq!(assembled, inserted(&entries), "{entries:?}");
        }
    }

    #[test]
    fn values_match_last_write_model() {
        let mut rng = StdRng::seed_from_u64(42);
        let alphabet: Vec<char> = "0123456789abcdef".chars().collect();
        for _ in 0..200 {
            let count = rng.random_range(0..80);
            let entries = random_entries(&mut rng, &alphabet, 4, count);
            let model = last_values(&entries);
            let trie = Trie::assemble(entries.clone());

            // Every surviving key is reachable, and nothing else holds a value.
            for (key, value) in &model {
                assert_eq!(trie.get(key), Some(value), "key {key:?}");
            }
            let stored: BTreeMap<String, u32> =
                trie.iter().map(|(key, value)| (key, *value)).collect();
            assert_eq!(stored, model);
            assert_eq!(trie.len(), model.len());
            assert_eq!(trie.node_count(), distinct_prefixes(&entries));
            assert!(KeyAlphabet::Hex.validate(&entries).is_ok());
        }
    }

    #[test]
    fn shuffled_distinct_keys_build_the_same_trie() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let count = rng.random_range(1..30);
            let mut entries: Vec<Entry<u32>> = random_entries(&mut rng, &['x', 'y', 'z'], 5, count)
                .into_iter()
                .map(|entry| (entry.key.clone(), entry))
                .collect::<BTreeMap<_, _>>()
                .into_values()
                .collect();
            let reference = Trie::assemble(entries.clone());
            for _ in 0..5 {
                entries.shuffle(&mut rng);
                assert_eq!(Trie::assemble(entries.clone()), reference);
            }
        }
    }

    #[test]
    fn stats_agree_with_the_result() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let count = rng.random_range(0..50);
            let entries = random_entries(&mut rng, &['p', 'q'], 5, count);
            let duplicates = entries.len() - last_values(&entries).len();
            let longest = entries.iter().map(|entry| entry.key.len()).max();
            let (trie, stats) = Trie::assemble_with_stats(entries);
            assert_eq!(stats.nodes, trie.node_count());
            assert_eq!(stats.terminals, trie.len());
            assert_eq!(stats.overwrites, duplicates);
            assert_eq!(stats.levels, longest.map_or(0, |len| len + 1));
        }
    }

    #[test]
    fn json_entries_end_to_end() {
        let document = r#"[
            {"key": "ab", "value": {"label": "first"}},
            {"key": "ac", "value": 2},
            {"key": "a", "value": [3]},
            {"key": "ab", "value": null}
        ]"#;
        let entries = entries::from_json_str::<serde_json::Value>(document).unwrap();
        let trie = Trie::assemble(entries);
        assert_eq!(trie.get("ab"), Some(&serde_json::Value::Null));
        assert_eq!(trie.get("ac"), Some(&serde_json::json!(2)));
        assert_eq!(trie.get("a"), Some(&serde_json::json!([3])));
        assert_eq!(
            serde_json::to_value(trie.compact()).unwrap(),
            serde_json::json!({"a": {"": [3], "b": null, "c": 2}})
        );
    }

    #[test]
    fn entry_file_round_trip() {
        let path = std::env::temp_dir().join(format!("level-trie-entries-{}.json", std::process::id()));
        let entries = vec![Entry::new("0a", 1u32), Entry::new("0b", 2)];
        std::fs::write(&path, serde_json::to_string(&entries).unwrap()).unwrap();
        let loaded: Vec<Entry<u32>> = entries::read_json(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, entries);
    }
}
