//! Encoding of words against a trained vocabulary.

pub mod word_piece;

pub use word_piece::WordPieceEncoder;
