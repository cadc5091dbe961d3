//! Text normalization for pre-tokenization.
//!
//! Text is lowercased and trimmed, whitespace runs collapse to a single
//! space and every character that is neither a word character nor whitespace
//! is removed.

use regex::Regex;
use std::sync::OnceLock;

fn whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("Invalid whitespace pattern"))
}

fn punctuation() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s]").expect("Invalid punctuation pattern"))
}

/// Text normalizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer;

impl Normalizer {
    /// Create a new normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Normalize text.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let collapsed = whitespace().replace_all(lowered.trim(), " ");
        punctuation().replace_all(&collapsed, "").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_trim() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("  Hello World  "), "hello world");
    }

    #[test]
    fn test_collapse_whitespace() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("a \t\n  b"), "a b");
    }

    #[test]
    fn test_strip_punctuation() {
        let normalizer = Normalizer::new();
        assert_eq!(
            normalizer.normalize("Don't stop-believing, ok?!"),
            "dont stopbelieving ok"
        );
    }

    #[test]
    fn test_keeps_digits_underscore_and_letters() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("Café_2024 Ünïcode"), "café_2024 ünïcode");
    }

    #[test]
    fn test_empty_string() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize(" ... "), "");
    }
}
