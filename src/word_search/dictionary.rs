use std::cmp::Reverse;
use std::io;

use hashbrown::HashMap;
use simple_log::{debug, info};

use super::error::WordSearchError;
use super::util::{normalize_key, word_from_line};
use crate::trie::Trie;

/// Returned by [`RankedDictionary::get_rank`] for words that were never loaded.
pub const UNKNOWN_RANK: i64 = -1;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    pub inserted: usize,
    pub skipped: usize,
}

/// Word set with per-word usage ranks.
///
/// Every key of `ranks` is stored in `trie` and every stored word has a rank;
/// both are only ever updated together in `load_words`.
#[derive(Debug, Default)]
pub struct RankedDictionary {
    trie: Trie,
    ranks: HashMap<String, u32>,
}

impl RankedDictionary {
    pub fn new() -> Self {
        Self {
            trie: Trie::new(),
            ranks: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Inserts one word per line with rank 0.
    ///
    /// Blank lines and words already present are skipped. A read error stops
    /// the load; words inserted before it stay in the dictionary.
    pub fn load_words<I>(&mut self, lines: I) -> Result<LoadStats, WordSearchError>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        let mut stats = LoadStats::default();
        for line in lines {
            let line = line?;
            let word = match word_from_line(&line) {
                Some(word) if !self.ranks.contains_key(word) => word,
                _ => {
                    stats.skipped += 1;
                    continue;
                }
            };
            self.trie.insert(word);
            self.ranks.insert(word.to_string(), 0);
            stats.inserted += 1;
        }

        info!(
            "loaded {} words ({} lines skipped), dictionary size {}",
            stats.inserted,
            stats.skipped,
            self.len()
        );
        Ok(stats)
    }

    /// Exact lookup. A hit counts towards the word's rank.
    pub fn search_word(&mut self, word: &str) -> bool {
        let word = normalize_key(word);
        if !self.trie.search(word) {
            debug!("search miss: {:?}", word);
            return false;
        }
        self.bump(word);
        true
    }

    /// Words starting with `prefix`, highest rank first, ties in ascending order.
    pub fn auto_complete(&self, prefix: &str) -> Vec<String> {
        let prefix = normalize_key(prefix);
        let mut matches = self.trie.prefix_matches(prefix);
        matches.sort_by_cached_key(|word| (Reverse(self.rank_or_zero(word)), word.clone()));
        debug!("auto_complete {:?}: {} matches", prefix, matches.len());
        matches
    }

    /// No-op for unknown words.
    pub fn increment_rank(&mut self, word: &str) {
        let word = normalize_key(word);
        if !self.bump(word) {
            debug!("increment_rank ignored unknown word {:?}", word);
        }
    }

    pub fn rank(&self, word: &str) -> Option<u32> {
        self.ranks.get(normalize_key(word)).copied()
    }

    /// Current rank, or [`UNKNOWN_RANK`] if the word is not in the dictionary.
    pub fn get_rank(&self, word: &str) -> i64 {
        match self.rank(word) {
            Some(rank) => i64::from(rank),
            None => UNKNOWN_RANK,
        }
    }

    fn bump(&mut self, word: &str) -> bool {
        match self.ranks.get_mut(word) {
            Some(rank) => {
                *rank = rank.saturating_add(1);
                true
            }
            None => false,
        }
    }

    fn rank_or_zero(&self, word: &str) -> u32 {
        self.ranks.get(word).copied().unwrap_or(0)
    }
}
