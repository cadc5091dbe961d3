//! Training infrastructure for WordPiece vocabularies.
//!
//! This module provides the per-word segmentation state, pair scoring and
//! the trainer that drives them.

pub mod counter;
pub mod scorer;
pub mod trainer;

pub use counter::SplitMap;
pub use scorer::{PairScorer, PairScores, SCORE_EPSILON};
pub use trainer::{
    StopReason, TrainingConfig, TrainingSummary, WordPieceTrainer, DEFAULT_VOCAB_LIMIT,
};
