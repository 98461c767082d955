//! Entry records and the JSON boundary they are loaded through.
use crate::{Error, Result};
use alloy_primitives::{B256, hex};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A key and the value attached to the node the key ends at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry<V> {
    /// Characters walked from the root, one trie level each.
    pub key: String,
    /// Opaque payload.
    pub value: V,
}

impl<V> Entry<V> {
    /// Creates an entry.
    pub fn new(key: impl Into<String>, value: V) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// Creates an entry keyed by the lowercase hex form of `digest`, without a `0x` prefix.
    pub fn from_digest(digest: B256, value: V) -> Self {
        Self::new(hex::encode(digest), value)
    }
}

/// Characters a key may be made of.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyAlphabet {
    /// Every character is accepted.
    #[default]
    Any,
    /// Lowercase hexadecimal digits, the form produced by [`Entry::from_digest`].
    Hex,
}

impl KeyAlphabet {
    /// Returns true if `ch` belongs to the alphabet.
    pub const fn admits(self, ch: char) -> bool {
        match self {
            Self::Any => true,
            Self::Hex => matches!(ch, '0'..='9' | 'a'..='f'),
        }
    }

    /// Checks every key of `entries`, reporting the first character outside the alphabet.
    pub fn validate<V>(self, entries: &[Entry<V>]) -> Result<()> {
        if self == Self::Any {
            return Ok(());
        }
        for (index, entry) in entries.iter().enumerate() {
            if let Some((position, ch)) = entry.key.chars().enumerate().find(|(_, ch)| !self.admits(*ch)) {
                return Err(Error::InvalidKeyChar {
                    index,
                    key: entry.key.clone(),
                    position,
                    ch,
                    alphabet: self,
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for KeyAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("any"),
            Self::Hex => f.write_str("hex"),
        }
    }
}

/// Parses a JSON array of `{ "key": string, "value": any }` records.
pub fn from_json_str<V: DeserializeOwned>(s: &str) -> Result<Vec<Entry<V>>> {
    Ok(serde_json::from_str(s)?)
}

/// Parses a JSON entry array from `reader`.
pub fn from_reader<R: Read, V: DeserializeOwned>(reader: R) -> Result<Vec<Entry<V>>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Reads a JSON entry array from the file at `path`.
pub fn read_json<P: AsRef<Path>, V: DeserializeOwned>(path: P) -> Result<Vec<Entry<V>>> {
    let file = File::open(path)?;
    from_reader(BufReader::new(file))
}
