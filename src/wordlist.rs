//! Fixed 1024-word list and the bijection between index and token.
//!
//! Loaded once, lazily, as a process-wide read-only singleton — the
//! resource is bundled at compile time via `include_str!`, so the only
//! way `ConfigurationError` fires is if the bundled asset itself were
//! ever edited into an invalid shape.

use crate::error::{EngineError, Result};
use std::collections::HashMap;
use std::sync::LazyLock;

const RAW_WORDLIST: &str = include_str!("../assets/wordlist.txt");

pub const RADIX_BITS: u32 = 10;
pub const RADIX: u32 = 1 << RADIX_BITS;

pub struct Wordlist {
    words: Vec<String>,
    index: HashMap<String, u16>,
}

impl Wordlist {
    fn build(raw: &str) -> std::result::Result<Self, String> {
        let words: Vec<String> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();

        if words.len() != RADIX as usize {
            return Err(format!(
                "expected {RADIX} wordlist entries, found {}",
                words.len()
            ));
        }

        let mut index = HashMap::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            let key = word.to_lowercase();
            #[allow(clippy::cast_possible_truncation, reason = "i < RADIX (1024) fits in u16")]
            let prior = index.insert(key, i as u16);
            if prior.is_some() {
                return Err(format!("duplicate wordlist entry: '{word}'"));
            }
        }

        Ok(Self { words, index })
    }

    #[must_use]
    pub fn word_of(&self, index: u16) -> Option<&str> {
        self.words.get(index as usize).map(String::as_str)
    }

    pub fn index_of(&self, token: &str) -> Result<u16> {
        self.index
            .get(&token.to_lowercase())
            .copied()
            .ok_or_else(|| EngineError::InvalidWord {
                token: token.to_string(),
            })
    }
}

static WORDLIST: LazyLock<std::result::Result<Wordlist, String>> =
    LazyLock::new(|| Wordlist::build(RAW_WORDLIST));

pub fn instance() -> Result<&'static Wordlist> {
    WORDLIST
        .as_ref()
        .map_err(|e| EngineError::ConfigurationError(e.clone()))
}
