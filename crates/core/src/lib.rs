//! Wpiece-core - Vocabulary and WordPiece encoding
//!
//! This crate provides the ordered vocabulary produced by WordPiece-style
//! training and the greedy longest-match encoder that consumes it.
//!
//! # Features
//!
//! - Insertion-ordered vocabulary with `AHashMap` lookups and compact strings
//! - `##` continuation token conventions shared with the trainer
//! - Greedy longest-prefix word encoding with a substring-rescue fallback
//! - Error handling for the I/O boundaries
//!
//! # Example
//!
//! ```rust
//! use wpiece_core::{Vocabulary, WordPieceEncoder};
//!
//! let mut vocab = Vocabulary::with_reserved(10);
//! vocab.add_token("low");
//! vocab.add_token("##er");
//!
//! let encoder = WordPieceEncoder::new(vocab);
//! assert_eq!(encoder.encode_word("lower"), vec!["low", "##er"]);
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

pub mod core;
pub use core::token;
pub use core::{Pair, Vocab, Vocabulary, CONTINUATION_PREFIX, PAD_TOKEN, UNK_TOKEN};

pub mod encoding;
pub use encoding::WordPieceEncoder;
