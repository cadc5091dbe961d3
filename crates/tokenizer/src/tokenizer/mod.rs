//! Main tokenizer implementation.
//!
//! This module provides the high-level `Tokenizer` struct that ties the
//! pre-tokenization pipeline, the trainer and the WordPiece encoder together.

use crate::io::{EncodedRecord, Record, VocabLoader, VocabSaver};
use crate::pre_tokenizer::{Normalizer, Splitter, DEFAULT_STOPWORDS};
use log::{debug, info};
use rayon::prelude::*;
use std::path::Path;
use std::sync::Arc;
use wpiece_core::{token, Result, TokenizerError, Vocabulary, WordPieceEncoder};
use wpiece_training::{TrainingConfig, TrainingSummary, WordPieceTrainer};

/// Configuration for building a tokenizer.
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
    /// Training parameters (vocabulary limit, parallel scoring)
    pub training: TrainingConfig,
    /// Words dropped during pre-tokenization
    pub stopwords: Vec<String>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            training: TrainingConfig::default(),
            stopwords: DEFAULT_STOPWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Builder for creating a tokenizer.
#[derive(Clone, Default)]
pub struct TokenizerBuilder {
    config: TokenizerConfig,
}

impl TokenizerBuilder {
    /// Create a new tokenizer builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the upper bound on the vocabulary size.
    pub fn vocab_limit(mut self, limit: usize) -> Self {
        self.config.training.vocab_limit = limit;
        self
    }

    /// Enable or disable parallel pair scoring during training.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.training.parallel = parallel;
        self
    }

    /// Replace the stopword set.
    pub fn stopwords<I, S>(mut self, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.stopwords = stopwords.into_iter().map(Into::into).collect();
        self
    }

    /// Keep every word, including the default stopwords.
    pub fn no_stopwords(mut self) -> Self {
        self.config.stopwords.clear();
        self
    }

    /// Build the tokenizer.
    pub fn build(self) -> Result<Tokenizer> {
        Tokenizer::new(self.config)
    }
}

/// Main tokenizer struct.
///
/// Holds a frozen vocabulary shared with the encoder. Training replaces the
/// vocabulary wholesale.
pub struct Tokenizer {
    /// Vocabulary, shared with `encoder`
    vocab: Arc<Vocabulary>,
    /// Greedy longest-match encoder
    encoder: WordPieceEncoder,
    /// Configuration
    config: TokenizerConfig,
    /// Text normalizer
    normalizer: Normalizer,
    /// Word splitter with stopword removal
    splitter: Splitter,
}

impl Tokenizer {
    /// Create an untrained tokenizer whose vocabulary holds only the
    /// reserved tokens.
    pub fn new(config: TokenizerConfig) -> Result<Self> {
        let vocab = Vocabulary::with_reserved(config.training.vocab_limit);
        Self::from_vocabulary(vocab, config)
    }

    /// Create a tokenizer around an existing vocabulary.
    pub fn from_vocabulary(vocab: Vocabulary, config: TokenizerConfig) -> Result<Self> {
        Self::validate(&config)?;

        let splitter = Splitter::new(config.stopwords.iter().cloned());
        let vocab = Arc::new(vocab);

        Ok(Self {
            encoder: WordPieceEncoder::with_arc(vocab.clone()),
            vocab,
            config,
            normalizer: Normalizer::new(),
            splitter,
        })
    }

    fn validate(config: &TokenizerConfig) -> Result<()> {
        for word in &config.stopwords {
            if word.is_empty() || word.contains(char::is_whitespace) {
                return Err(TokenizerError::InvalidConfig(format!(
                    "Stopword {:?} must be a single non-empty word",
                    word
                )));
            }
        }
        Ok(())
    }

    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Normalize text and split it into words, dropping stopwords.
    pub fn pre_tokenize(&self, text: &str) -> Vec<String> {
        let normalized = self.normalizer.normalize(text);
        self.splitter.split(&normalized)
    }

    /// Train the vocabulary on raw corpus text.
    ///
    /// # Arguments
    /// * `text` - Training text data
    pub fn train(&mut self, text: &str) -> TrainingSummary {
        let words = self.pre_tokenize(text);
        debug!("pre-tokenized corpus into {} words", words.len());
        self.train_words(&words)
    }

    /// Train the vocabulary on already normalized words.
    pub fn train_words<S: AsRef<str>>(&mut self, words: &[S]) -> TrainingSummary {
        let trainer = WordPieceTrainer::new(self.config.training.clone());
        let (vocab, summary) = trainer.train_with_summary(words);
        self.set_vocabulary(vocab);
        summary
    }

    fn set_vocabulary(&mut self, vocab: Vocabulary) {
        self.vocab = Arc::new(vocab);
        self.encoder = WordPieceEncoder::with_arc(self.vocab.clone());
    }

    /// Encode a single normalized word.
    pub fn encode_word(&self, word: &str) -> Vec<String> {
        self.encoder.encode_word(word)
    }

    /// Encode a raw sentence: normalize, split, then encode every word.
    pub fn encode(&self, sentence: &str) -> Vec<String> {
        let words = self.pre_tokenize(sentence);
        self.encoder.encode_words(&words)
    }

    /// Encode a batch of records (parallelized). Output order matches input
    /// order.
    pub fn encode_records<I>(&self, records: &[Record<I>]) -> Vec<EncodedRecord<I>>
    where
        I: Clone + Send + Sync,
    {
        let encoded: Vec<EncodedRecord<I>> = records
            .par_iter()
            .map(|record| EncodedRecord {
                id: record.id.clone(),
                tokens: self.encode(&record.sentence),
            })
            .collect();

        info!("encoded {} records", encoded.len());
        encoded
    }

    /// Rebuild text from tokens; continuation tokens attach to the previous
    /// token.
    pub fn decode<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        token::decode(tokens)
    }

    /// Get the vocabulary size.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Get a reference to the vocabulary.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Save the vocabulary, one token per line.
    ///
    /// # Arguments
    /// * `path` - File path to save to
    pub fn save(&self, path: &Path) -> Result<()> {
        VocabSaver::new(&self.vocab).save(path)
    }

    /// Load a tokenizer from a vocabulary file with the default
    /// configuration.
    ///
    /// # Arguments
    /// * `path` - File path to load from
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_with_config(path, TokenizerConfig::default())
    }

    /// Load a tokenizer from a vocabulary file.
    pub fn load_with_config(path: &Path, config: TokenizerConfig) -> Result<Self> {
        let vocab = VocabLoader::load(path)?;
        Self::from_vocabulary(vocab, config)
    }
}
