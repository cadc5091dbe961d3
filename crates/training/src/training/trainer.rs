//! WordPiece vocabulary trainer.
//!
//! Training runs in three phases:
//!
//! 1. Seed the vocabulary with `[PAD]`, `[UNK]` and the sorted alphabet.
//! 2. Repeatedly score all adjacent pairs, merge the best one everywhere and
//!    add the fused token, until the vocabulary is full or no pairs remain.
//! 3. Backfill whole training words that are not yet in the vocabulary.
//!
//! The vocabulary never grows past `vocab_limit`.

use super::counter::SplitMap;
use super::scorer::PairScorer;
use log::{debug, info};
use wpiece_core::token::fuse;
use wpiece_core::Vocabulary;

/// Default upper bound on the vocabulary size.
pub const DEFAULT_VOCAB_LIMIT: usize = 1000;

/// Configuration for WordPiece training.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingConfig {
    /// Upper bound on the final vocabulary size, inclusive
    pub vocab_limit: usize,
    /// Whether to score pairs on the rayon pool
    pub parallel: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            vocab_limit: DEFAULT_VOCAB_LIMIT,
            parallel: true,
        }
    }
}

/// Why the merge phase ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The vocabulary reached `vocab_limit`
    LimitReached,
    /// Every word was merged into a single token
    PairsExhausted,
}

/// Counts describing one training run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingSummary {
    /// Distinct training words
    pub distinct_words: usize,
    /// Size after seeding reserved tokens and the alphabet
    pub seeded: usize,
    /// Merge rounds performed
    pub merges: usize,
    /// Whole words added after the merge phase
    pub backfilled: usize,
    /// Final vocabulary size
    pub vocab_size: usize,
    /// Why the merge phase ended
    pub stop_reason: StopReason,
}

/// WordPiece trainer.
///
/// Builds a bounded vocabulary from a stream of normalized words.
#[derive(Debug, Clone, Default)]
pub struct WordPieceTrainer {
    config: TrainingConfig,
}

impl WordPieceTrainer {
    /// Create a new trainer with the given configuration.
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    /// Create a new trainer with default configuration and the given limit.
    pub fn with_vocab_limit(vocab_limit: usize) -> Self {
        Self::new(TrainingConfig {
            vocab_limit,
            ..Default::default()
        })
    }

    /// The trainer configuration.
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Train a vocabulary on a stream of normalized words.
    pub fn train<I, S>(&self, words: I) -> Vocabulary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.train_with_summary(words).0
    }

    /// Train a vocabulary and report what each phase contributed.
    pub fn train_with_summary<I, S>(&self, words: I) -> (Vocabulary, TrainingSummary)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let limit = self.config.vocab_limit;
        let mut splits = SplitMap::from_words(words);

        let mut vocab = Vocabulary::with_reserved(limit);
        for ch in splits.alphabet() {
            if vocab.len() >= limit {
                break;
            }
            vocab.add_token(&ch);
        }
        let seeded = vocab.len();
        debug!(
            "seeded vocabulary with {} tokens from {} distinct words",
            seeded,
            splits.word_count()
        );

        let (merges, stop_reason) = self.merge_phase(&mut splits, &mut vocab);
        let backfilled = Self::backfill(&splits, &mut vocab, limit);

        let summary = TrainingSummary {
            distinct_words: splits.word_count(),
            seeded,
            merges,
            backfilled,
            vocab_size: vocab.len(),
            stop_reason,
        };
        info!(
            "constructed vocabulary: {} tokens ({} merges, {} backfilled words, {:?})",
            summary.vocab_size, summary.merges, summary.backfilled, summary.stop_reason
        );

        (vocab, summary)
    }

    /// Merge the best-scoring pair until the vocabulary is full or no pairs
    /// remain. Returns the number of merge rounds.
    fn merge_phase(&self, splits: &mut SplitMap, vocab: &mut Vocabulary) -> (usize, StopReason) {
        let scorer = PairScorer::new(self.config.parallel);
        let mut rounds = 0;

        while vocab.len() < self.config.vocab_limit {
            let scores = scorer.score(splits);
            let Some((pair, score)) = scores.best() else {
                return (rounds, StopReason::PairsExhausted);
            };

            let fused = fuse(&pair.0, &pair.1);
            let occurrences = splits.merge_pair(&pair.0, &pair.1);
            let added = vocab.add_token(&fused);
            rounds += 1;

            debug!(
                "merge {}: ({}, {}) -> {} score={:.6} occurrences={} new={} vocab={}",
                rounds,
                pair.0,
                pair.1,
                fused,
                score,
                occurrences,
                added,
                vocab.len()
            );
        }

        (rounds, StopReason::LimitReached)
    }

    /// Add whole training words not yet present, in first-occurrence order,
    /// until the limit is reached. Returns the number of words added.
    fn backfill(splits: &SplitMap, vocab: &mut Vocabulary, limit: usize) -> usize {
        let mut added = 0;
        for word in splits.words() {
            if vocab.len() >= limit {
                break;
            }
            if vocab.add_token(word) {
                added += 1;
            }
        }
        added
    }
}
