use crate::KeyAlphabet;
use thiserror::Error;

/// Errors raised while loading or validating trie entries.
#[derive(Debug, Error)]
pub enum Error {
    /// The entry document is not an array of `{ "key": string, "value": any }` records.
    #[error("malformed entry list: {0}")]
    Json(#[from] serde_json::Error),
    /// Reading the entry document failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// A key holds a character the requested alphabet does not admit.
    #[error(
        "entry {index}: key {key:?} has {ch:?} at position {position}, outside the {alphabet} alphabet"
    )]
    InvalidKeyChar {
        /// Position of the entry in the input list.
        index: usize,
        /// The offending key.
        key: String,
        /// Character offset of `ch` within `key`.
        position: usize,
        /// The rejected character.
        ch: char,
        /// Alphabet the key was checked against.
        alphabet: KeyAlphabet,
    },
}

/// Result alias used across the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
