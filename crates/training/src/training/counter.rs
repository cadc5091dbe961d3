//! Word frequencies and their current segmentation.
//!
//! `SplitMap` owns the training state that is rewritten by every merge round:
//! each distinct word, its occurrence count and its current token sequence.
//! Words keep their first-occurrence order so that everything derived from
//! them is reproducible.

use ahash::AHashMap;
use compact_str::CompactString;
use wpiece_core::token::{fuse, split_chars};

/// Distinct training words with frequencies and current segmentations.
#[derive(Debug, Clone, Default)]
pub struct SplitMap {
    /// Distinct words in first-occurrence order
    words: Vec<CompactString>,
    /// Occurrence count per word
    word_counts: Vec<u64>,
    /// Current token sequence per word
    splits: Vec<Vec<CompactString>>,
    /// Word -> position in the vectors above
    positions: AHashMap<CompactString, usize>,
}

impl SplitMap {
    /// Create an empty split map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally a stream of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for word in words {
            map.add_word(word.as_ref());
        }
        map
    }

    /// Add one occurrence of a word.
    ///
    /// A new word starts split into one token per character. Empty words are
    /// ignored.
    pub fn add_word(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        if let Some(&pos) = self.positions.get(word) {
            self.word_counts[pos] += 1;
            return;
        }

        let word = CompactString::new(word);
        self.positions.insert(word.clone(), self.words.len());
        self.splits.push(split_chars(&word));
        self.words.push(word);
        self.word_counts.push(1);
    }

    /// Sorted set of distinct characters across all words.
    pub fn alphabet(&self) -> Vec<CompactString> {
        let mut chars: Vec<char> = self.words.iter().flat_map(|w| w.chars()).collect();
        chars.sort_unstable();
        chars.dedup();
        let mut buf = [0u8; 4];
        chars
            .into_iter()
            .map(|c| CompactString::new(c.encode_utf8(&mut buf)))
            .collect()
    }

    /// Fuse every contiguous occurrence of `(left, right)` in every word.
    ///
    /// Occurrences are matched left to right without overlap. Returns the
    /// number of fusions performed.
    pub fn merge_pair(&mut self, left: &str, right: &str) -> usize {
        let fused = fuse(left, right);
        let mut merged = 0;

        for parts in &mut self.splits {
            if parts.len() < 2 {
                continue;
            }

            let mut rewritten = Vec::with_capacity(parts.len());
            let mut i = 0;
            while i < parts.len() {
                if i + 1 < parts.len() && parts[i] == left && parts[i + 1] == right {
                    rewritten.push(fused.clone());
                    merged += 1;
                    i += 2;
                } else {
                    rewritten.push(parts[i].clone());
                    i += 1;
                }
            }
            *parts = rewritten;
        }

        merged
    }

    /// Get the number of distinct words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Get the total count of all word occurrences.
    pub fn total_word_occurrences(&self) -> u64 {
        self.word_counts.iter().sum()
    }

    /// Distinct words in first-occurrence order.
    pub fn words(&self) -> &[CompactString] {
        &self.words
    }

    /// Occurrence counts, aligned with [`words`](Self::words).
    pub fn word_counts(&self) -> &[u64] {
        &self.word_counts
    }

    /// Current segmentations, aligned with [`words`](Self::words).
    pub fn splits(&self) -> &[Vec<CompactString>] {
        &self.splits
    }

    /// Current segmentation of one word.
    pub fn split_of(&self, word: &str) -> Option<&[CompactString]> {
        self.positions
            .get(word)
            .map(|&pos| self.splits[pos].as_slice())
    }

    /// Frequency of one word.
    pub fn frequency(&self, word: &str) -> Option<u64> {
        self.positions.get(word).map(|&pos| self.word_counts[pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wpiece_core::token::strip_continuation;

    fn joined(parts: &[CompactString]) -> String {
        parts.iter().map(|p| strip_continuation(p)).collect()
    }

    #[test]
    fn test_add_word() {
        let mut map = SplitMap::new();
        map.add_word("abc");

        assert_eq!(map.word_count(), 1);
        assert_eq!(map.split_of("abc").unwrap(), &["a", "##b", "##c"]);
    }

    #[test]
    fn test_word_frequency() {
        let map = SplitMap::from_words(["ab", "cd", "ab", "ab", ""]);

        assert_eq!(map.word_count(), 2);
        assert_eq!(map.frequency("ab"), Some(3));
        assert_eq!(map.frequency("cd"), Some(1));
        assert_eq!(map.total_word_occurrences(), 4);
        assert_eq!(map.words(), &["ab", "cd"]);
    }

    #[test]
    fn test_alphabet_sorted() {
        let map = SplitMap::from_words(["low", "lower", "lowest"]);
        assert_eq!(map.alphabet(), vec!["e", "l", "o", "r", "s", "t", "w"]);
    }

    #[test]
    fn test_merge_pair() {
        let mut map = SplitMap::from_words(["low", "lower", "a"]);
        let merged = map.merge_pair("l", "##o");

        assert_eq!(merged, 2);
        assert_eq!(map.split_of("low").unwrap(), &["lo", "##w"]);
        assert_eq!(map.split_of("lower").unwrap(), &["lo", "##w", "##e", "##r"]);
        assert_eq!(map.split_of("a").unwrap(), &["a"]);
    }

    #[test]
    fn test_merge_pair_non_overlapping() {
        let mut map = SplitMap::from_words(["aaaa"]);
        map.merge_pair("##a", "##a");

        assert_eq!(map.split_of("aaaa").unwrap(), &["a", "##aa", "##a"]);
    }

    #[test]
    fn test_merge_preserves_word() {
        let mut map = SplitMap::from_words(["banana", "bandana"]);
        map.merge_pair("##a", "##n");
        map.merge_pair("##an", "##a");
        map.merge_pair("b", "##an");

        for (word, parts) in map.words().iter().zip(map.splits()) {
            assert_eq!(joined(parts), word.as_str());
        }
        assert_eq!(map.split_of("banana").unwrap(), &["ban", "##ana"]);
    }
}
