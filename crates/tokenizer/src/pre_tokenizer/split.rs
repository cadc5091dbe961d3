//! Word splitting and stopword removal for pre-tokenization.

use ahash::AHashSet;

/// English stopwords removed from both training and encoding input.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "while", "with", "in", "on", "at", "to", "of",
    "for", "by", "as", "this", "that", "these", "those", "what", "which", "who", "whom", "where",
    "when", "why", "how", "only", "own", "same", "so", "than", "too",
];

/// Splits normalized text on whitespace and drops stopwords.
#[derive(Debug, Clone)]
pub struct Splitter {
    stopwords: AHashSet<String>,
}

impl Splitter {
    /// Create a splitter with a custom stopword set.
    pub fn new<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stopwords: stopwords.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a splitter that keeps every word.
    pub fn whitespace() -> Self {
        Self::new(std::iter::empty::<String>())
    }

    /// Split text into words, skipping stopwords.
    pub fn split(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .filter(|word| !self.is_stopword(word))
            .map(str::to_string)
            .collect()
    }

    /// Check whether a word is dropped by this splitter.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new(DEFAULT_STOPWORDS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_drops_stopwords() {
        let splitter = Splitter::default();
        let result = splitter.split("the cat sat on a mat with which dogs play");
        assert_eq!(result, vec!["cat", "sat", "mat", "dogs", "play"]);
    }

    #[test]
    fn test_whitespace_keeps_everything() {
        let splitter = Splitter::whitespace();
        let result = splitter.split("the  cat\tsat");
        assert_eq!(result, vec!["the", "cat", "sat"]);
    }

    #[test]
    fn test_custom_stopwords() {
        let splitter = Splitter::new(["cat"]);
        assert_eq!(splitter.split("the cat sat"), vec!["the", "sat"]);
        assert!(splitter.is_stopword("cat"));
        assert!(!splitter.is_stopword("the"));
    }

    #[test]
    fn test_empty_string() {
        let splitter = Splitter::default();
        assert_eq!(splitter.split(""), Vec::<String>::new());
    }
}
