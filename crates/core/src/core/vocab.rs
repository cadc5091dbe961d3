//! Vocabulary storage and lookup.
//!
//! The vocabulary is an insertion-ordered list of unique tokens. Order records
//! construction history; the only positions with meaning are the reserved
//! padding and unknown tokens at 0 and 1. Lookups go through an `AHashMap`
//! index and tokens are stored as `CompactString`.

use super::token::{PAD_TOKEN, UNK_TOKEN};
use ahash::AHashMap;
use compact_str::CompactString;

/// Forward mapping: token string -> ID
pub type Vocab = AHashMap<CompactString, u32>;

/// Ordered vocabulary of unique tokens.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Tokens in insertion order; the index is the token ID
    tokens: Vec<CompactString>,
    /// Forward mapping: token string -> ID
    index: Vocab,
}

impl Vocabulary {
    /// Create a new empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new vocabulary with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tokens: Vec::with_capacity(capacity),
            index: Vocab::with_capacity(capacity),
        }
    }

    /// Create a vocabulary seeded with the reserved tokens, `[PAD]` then
    /// `[UNK]`, truncated to `limit` entries.
    pub fn with_reserved(limit: usize) -> Self {
        let mut vocab = Self::with_capacity(limit);
        for token in [PAD_TOKEN, UNK_TOKEN].into_iter().take(limit) {
            vocab.add_token(token);
        }
        vocab
    }

    /// Add a token to the end of the vocabulary.
    ///
    /// Returns `true` if the token was new, `false` if it was already present
    /// (the vocabulary is left unchanged).
    pub fn add_token(&mut self, token: &str) -> bool {
        if self.index.contains_key(token) {
            return false;
        }

        let token = CompactString::new(token);
        let id = self.tokens.len() as u32;
        self.tokens.push(token.clone());
        self.index.insert(token, id);

        true
    }

    /// Check whether a token is present.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Get the ID (position) of a token.
    #[inline]
    pub fn get_id(&self, token: &str) -> Option<u32> {
        self.index.get(token).copied()
    }

    /// Get the token at an ID (position).
    #[inline]
    pub fn get_token(&self, id: u32) -> Option<&str> {
        self.tokens.get(id as usize).map(|t| t.as_str())
    }

    /// Get the size of the vocabulary.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the vocabulary is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over tokens in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(|t| t.as_str())
    }

    /// The tokens in vocabulary order.
    pub fn tokens(&self) -> &[CompactString] {
        &self.tokens
    }
}

impl PartialEq for Vocabulary {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl Eq for Vocabulary {}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, CompactString>, fn(&CompactString) -> &str>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter().map(CompactString::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_token() {
        let mut vocab = Vocabulary::new();
        assert!(vocab.add_token("hello"));
        assert!(vocab.add_token("world"));

        assert_eq!(vocab.get_id("hello"), Some(0));
        assert_eq!(vocab.get_id("world"), Some(1));
        assert_eq!(vocab.get_token(0), Some("hello"));
        assert_eq!(vocab.get_token(1), Some("world"));
        assert_eq!(vocab.get_token(2), None);
    }

    #[test]
    fn test_add_duplicate_token() {
        let mut vocab = Vocabulary::new();
        assert!(vocab.add_token("hello"));
        assert!(!vocab.add_token("hello"));

        assert_eq!(vocab.len(), 1);
        assert_eq!(vocab.get_id("hello"), Some(0));
    }

    #[test]
    fn test_with_reserved() {
        let vocab = Vocabulary::with_reserved(10);
        assert_eq!(vocab.iter().collect::<Vec<_>>(), vec!["[PAD]", "[UNK]"]);

        let vocab = Vocabulary::with_reserved(1);
        assert_eq!(vocab.iter().collect::<Vec<_>>(), vec!["[PAD]"]);

        assert!(Vocabulary::with_reserved(0).is_empty());
    }

    #[test]
    fn test_iteration_order() {
        let mut vocab = Vocabulary::new();
        for token in ["c", "a", "##b", "a"] {
            vocab.add_token(token);
        }

        let tokens: Vec<&str> = (&vocab).into_iter().collect();
        assert_eq!(tokens, vec!["c", "a", "##b"]);
        assert!(vocab.contains("##b"));
        assert!(!vocab.contains("b"));
    }
}
