//! Core WordPiece data structures.
//!
//! This module contains the token conventions and the ordered vocabulary,
//! independent of how the vocabulary was trained or is consumed.

pub mod token;
pub mod vocab;

pub use token::{Pair, CONTINUATION_PREFIX, PAD_TOKEN, UNK_TOKEN};
pub use vocab::{Vocab, Vocabulary};
