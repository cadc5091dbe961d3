//! Greedy longest-match WordPiece encoding.
//!
//! Each word is consumed left to right by repeatedly taking the longest
//! vocabulary entry that prefixes the remaining text. Every token after the
//! first is looked up with the `##` continuation marker. When no prefix
//! matches, a substring rescue collects the vocabulary entries among the
//! prefixes of the unmatched text before giving up with `[UNK]`.

use crate::core::token::{CONTINUATION_PREFIX, UNK_TOKEN};
use crate::core::vocab::Vocabulary;
use log::trace;
use std::sync::Arc;

/// WordPiece encoder over a frozen vocabulary.
///
/// The vocabulary is shared through an `Arc`, so the encoder is cheap to clone
/// and safe to use from several threads at once.
#[derive(Debug, Clone)]
pub struct WordPieceEncoder {
    vocab: Arc<Vocabulary>,
}

impl WordPieceEncoder {
    /// Create an encoder that owns its vocabulary.
    pub fn new(vocab: Vocabulary) -> Self {
        Self::with_arc(Arc::new(vocab))
    }

    /// Create an encoder sharing an existing vocabulary.
    pub fn with_arc(vocab: Arc<Vocabulary>) -> Self {
        Self { vocab }
    }

    /// The vocabulary this encoder matches against.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Encode one normalized word into vocabulary tokens.
    ///
    /// An empty word yields no tokens. The result is never empty otherwise:
    /// the worst case is the tokens matched so far followed by `[UNK]`.
    pub fn encode_word(&self, word: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut remaining = word;
        let mut first = true;
        let mut candidate = String::with_capacity(word.len() + CONTINUATION_PREFIX.len());

        while !remaining.is_empty() {
            candidate.clear();
            if !first {
                candidate.push_str(CONTINUATION_PREFIX);
            }
            let offset = candidate.len();
            candidate.push_str(remaining);

            match self.longest_prefix(&candidate, offset) {
                Some(end) => {
                    tokens.push(candidate[..end].to_string());
                    remaining = &remaining[end - offset..];
                    first = false;
                }
                None => {
                    let rescued = self.rescue(&candidate);
                    trace!(
                        "no prefix of {:?} in vocabulary, rescued {} substrings",
                        candidate,
                        rescued.len()
                    );
                    if rescued.is_empty() {
                        tokens.push(UNK_TOKEN.to_string());
                    } else {
                        tokens.extend(rescued);
                    }
                    break;
                }
            }
        }

        tokens
    }

    /// Encode a sequence of words, concatenating their tokens.
    pub fn encode_words<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        words
            .iter()
            .flat_map(|word| self.encode_word(word.as_ref()))
            .collect()
    }

    /// Find the longest vocabulary prefix of `candidate` that covers at least
    /// one character past `offset` (the marker, if any).
    ///
    /// Returns the end byte index of the match.
    fn longest_prefix(&self, candidate: &str, offset: usize) -> Option<usize> {
        candidate[offset..]
            .char_indices()
            .map(|(i, c)| offset + i + c.len_utf8())
            .rev()
            .find(|&end| self.vocab.contains(&candidate[..end]))
    }

    /// Collect every prefix of `candidate` at least two characters long that
    /// is a vocabulary entry, shortest first. The marker is part of the text
    /// being scanned.
    fn rescue(&self, candidate: &str) -> Vec<String> {
        candidate
            .char_indices()
            .skip(1)
            .map(|(i, c)| &candidate[..i + c.len_utf8()])
            .filter(|prefix| self.vocab.contains(prefix))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::token::decode;

    fn encoder(tokens: &[&str]) -> WordPieceEncoder {
        let mut vocab = Vocabulary::with_reserved(2);
        for token in tokens {
            vocab.add_token(token);
        }
        WordPieceEncoder::new(vocab)
    }

    #[test]
    fn test_longest_match_first() {
        let encoder = encoder(&["l", "lo", "low", "##e", "##er", "##s", "##t"]);

        assert_eq!(encoder.encode_word("low"), vec!["low"]);
        assert_eq!(encoder.encode_word("lower"), vec!["low", "##er"]);
        assert_eq!(encoder.encode_word("lowest"), vec!["low", "##e", "##s", "##t"]);
    }

    #[test]
    fn test_continuation_marker_required_after_first() {
        // "er" exists only as an initial token, so it cannot continue "low".
        let encoder = encoder(&["low", "er", "##e", "##r"]);
        assert_eq!(encoder.encode_word("lower"), vec!["low", "##e", "##r"]);
    }

    #[test]
    fn test_unknown_character() {
        let encoder = encoder(&["l", "o", "w"]);
        assert_eq!(encoder.encode_word("9"), vec!["[UNK]"]);
    }

    #[test]
    fn test_unknown_after_partial_match_keeps_prefix() {
        let encoder = encoder(&["low"]);
        assert_eq!(encoder.encode_word("lowx"), vec!["low", "[UNK]"]);
    }

    #[test]
    fn test_substring_rescue_scans_marked_text() {
        // "##b" is missing, but the bare marker is a vocabulary entry and is
        // rescued instead of falling back to [UNK].
        let encoder = encoder(&["a", "##"]);
        assert_eq!(encoder.encode_word("ab"), vec!["a", "##"]);
    }

    #[test]
    fn test_empty_word() {
        let encoder = encoder(&["a"]);
        assert!(encoder.encode_word("").is_empty());
    }

    #[test]
    fn test_multibyte_characters() {
        let encoder = encoder(&["ü", "##ber", "##b", "##e", "##r"]);
        assert_eq!(encoder.encode_word("über"), vec!["ü", "##ber"]);
    }

    #[test]
    fn test_only_reserved_tokens() {
        let encoder = WordPieceEncoder::new(Vocabulary::with_reserved(2));
        assert_eq!(encoder.encode_word("low"), vec!["[UNK]"]);
    }

    #[test]
    fn test_encode_words_roundtrip() {
        let encoder = encoder(&["new", "low", "##er", "##est"]);
        let tokens = encoder.encode_words(&["lower", "newest"]);

        assert_eq!(tokens, vec!["low", "##er", "new", "##est"]);
        assert_eq!(decode(&tokens), "lower newest");
    }
}
