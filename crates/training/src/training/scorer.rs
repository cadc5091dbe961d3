//! Pair scoring for WordPiece training.
//!
//! A pair's score is its co-occurrence frequency normalized by the
//! frequencies of its two members:
//!
//! ```text
//! score(a, b) = count(a, b) / (count(a) + count(b) + 1e-5)
//! ```
//!
//! Pairs are reported in the order they are first encountered while walking
//! the words in first-occurrence order, and the best pair is the first one
//! holding the maximum score. Both the sequential and the parallel paths
//! produce the same order.

use super::counter::SplitMap;
use ahash::AHashMap;
use compact_str::CompactString;
use rayon::prelude::*;
use wpiece_core::Pair;

/// Keeps the score denominator away from zero.
pub const SCORE_EPSILON: f64 = 1e-5;

/// Frequency tallies for pairs and single tokens.
///
/// Pairs are kept in first-encounter order; tallies are combined in order so
/// that a parallel reduction matches the sequential walk.
#[derive(Debug, Default)]
struct PairTally {
    /// Pair -> position in `pairs`
    positions: AHashMap<Pair, usize>,
    /// Pairs with their co-occurrence counts, in first-encounter order
    pairs: Vec<(Pair, u64)>,
    /// Token -> aggregate frequency
    token_counts: AHashMap<CompactString, u64>,
}

impl PairTally {
    fn add_pair(&mut self, pair: Pair, count: u64) {
        match self.positions.get(&pair) {
            Some(&pos) => self.pairs[pos].1 += count,
            None => {
                self.positions.insert(pair.clone(), self.pairs.len());
                self.pairs.push((pair, count));
            }
        }
    }

    fn add_token(&mut self, token: &CompactString, count: u64) {
        match self.token_counts.get_mut(token) {
            Some(total) => *total += count,
            None => {
                self.token_counts.insert(token.clone(), count);
            }
        }
    }

    /// Tally one word's segmentation, weighted by its frequency.
    fn add_word(&mut self, parts: &[CompactString], count: u64) {
        let Some(last) = parts.last() else {
            return;
        };

        for window in parts.windows(2) {
            self.add_token(&window[0], count);
            self.add_pair((window[0].clone(), window[1].clone()), count);
        }
        self.add_token(last, count);
    }

    /// Append `other`, which covers words after the ones in `self`.
    fn merge(mut self, other: Self) -> Self {
        for (pair, count) in other.pairs {
            self.add_pair(pair, count);
        }
        for (token, count) in other.token_counts {
            *self.token_counts.entry(token).or_insert(0) += count;
        }
        self
    }

    fn into_scores(self) -> PairScores {
        let token_counts = self.token_counts;
        let count_of = |token: &CompactString| token_counts.get(token).copied().unwrap_or(0) as f64;

        let scores = self
            .pairs
            .into_iter()
            .map(|(pair, count)| {
                let score = count as f64 / (count_of(&pair.0) + count_of(&pair.1) + SCORE_EPSILON);
                (pair, score)
            })
            .collect();

        PairScores { scores }
    }
}

/// Scores of all adjacent pairs in the current segmentation.
#[derive(Debug, Clone, Default)]
pub struct PairScores {
    /// Pairs with their scores, in first-encounter order
    scores: Vec<(Pair, f64)>,
}

impl PairScores {
    /// The pair with the highest score; the earliest pair wins ties.
    pub fn best(&self) -> Option<(&Pair, f64)> {
        let mut best: Option<(&Pair, f64)> = None;
        for (pair, score) in &self.scores {
            match best {
                Some((_, top)) if *score <= top => {}
                _ => best = Some((pair, *score)),
            }
        }
        best
    }

    /// Score of a specific pair.
    pub fn get(&self, left: &str, right: &str) -> Option<f64> {
        self.scores
            .iter()
            .find(|(pair, _)| pair.0 == left && pair.1 == right)
            .map(|&(_, score)| score)
    }

    /// Get the number of scored pairs.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True when no word has two or more tokens left.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterate over pairs and scores in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&Pair, f64)> + '_ {
        self.scores.iter().map(|(pair, score)| (pair, *score))
    }
}

/// Computes pair scores from a [`SplitMap`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PairScorer {
    parallel: bool,
}

impl PairScorer {
    /// Create a scorer; `parallel` spreads the tally over the rayon pool.
    pub fn new(parallel: bool) -> Self {
        Self { parallel }
    }

    /// Score every adjacent pair in the current segmentation.
    pub fn score(&self, splits: &SplitMap) -> PairScores {
        if self.parallel {
            Self::score_parallel(splits)
        } else {
            Self::score_sequential(splits)
        }
    }

    /// Score all pairs with a rayon fold/reduce over the words.
    pub fn score_parallel(splits: &SplitMap) -> PairScores {
        splits
            .splits()
            .par_iter()
            .zip(splits.word_counts().par_iter())
            .fold(PairTally::default, |mut tally, (parts, &count)| {
                tally.add_word(parts, count);
                tally
            })
            .reduce(PairTally::default, PairTally::merge)
            .into_scores()
    }

    /// Score all pairs on the current thread.
    pub fn score_sequential(splits: &SplitMap) -> PairScores {
        let mut tally = PairTally::default();
        for (parts, &count) in splits.splits().iter().zip(splits.word_counts()) {
            tally.add_word(parts, count);
        }
        tally.into_scores()
    }
}
