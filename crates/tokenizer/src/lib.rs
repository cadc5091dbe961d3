//! Wpiece-tokenizer - High-level WordPiece tokenizer API
//!
//! This crate provides a user-friendly interface around WordPiece-style
//! training and encoding, integrating the pre-tokenization pipeline, the
//! trainer and the greedy encoder into a single API.
//!
//! # Features
//!
//! - Simple builder pattern for tokenizer configuration
//! - Pre-tokenization pipeline (lowercasing, punctuation stripping,
//!   stopword removal)
//! - Parallel batch encoding of `{id, sentence}` records
//! - Plain-text vocabulary files, one token per line
//!
//! # Example
//!
//! ```rust
//! use wpiece_tokenizer::Tokenizer;
//!
//! let mut tokenizer = Tokenizer::builder().vocab_limit(20).build()?;
//! tokenizer.train("low lower lowest");
//!
//! let tokens = tokenizer.encode("Low!");
//! assert_eq!(tokenizer.decode(&tokens), "low");
//! # Ok::<(), wpiece_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use wpiece_core::{Result, TokenizerError, Vocabulary, WordPieceEncoder};
pub use wpiece_training::{StopReason, TrainingConfig, TrainingSummary};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{Tokenizer, TokenizerBuilder, TokenizerConfig};

// IO/Serialization
pub mod io;
pub use io::{load_records, save_records, EncodedRecord, Record, VocabLoader, VocabSaver};

// Pre-tokenization
pub mod pre_tokenizer;
pub use pre_tokenizer::{Normalizer, Splitter, DEFAULT_STOPWORDS};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
