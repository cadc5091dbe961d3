//! Wpiece-training - WordPiece vocabulary training
//!
//! This crate learns a bounded subword vocabulary from a stream of normalized
//! words by repeatedly merging the best-scoring adjacent token pair.
//!
//! # Features
//!
//! - Frequency-normalized pair scoring with an optional rayon reduction
//! - Reproducible merge selection (first maximum in first-encounter order)
//! - Reserved `[PAD]`/`[UNK]` tokens, sorted alphabet seeding and whole-word
//!   backfill, all bounded by `vocab_limit`
//!
//! # Example
//!
//! ```rust
//! use wpiece_training::{TrainingConfig, WordPieceTrainer};
//!
//! let trainer = WordPieceTrainer::new(TrainingConfig {
//!     vocab_limit: 20,
//!     ..Default::default()
//! });
//! let vocab = trainer.train(["low", "lower", "lowest"]);
//! assert!(vocab.len() <= 20);
//! assert_eq!(vocab.get_token(0), Some("[PAD]"));
//! ```

pub use wpiece_core::{Result, TokenizerError, Vocabulary};

pub mod training;
pub use training::{
    PairScorer, PairScores, SplitMap, StopReason, TrainingConfig, TrainingSummary,
    WordPieceTrainer, DEFAULT_VOCAB_LIMIT,
};
