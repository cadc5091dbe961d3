//! Pre-tokenization pipeline.
//!
//! Raw text is normalized and then split into words with stopwords removed.
//! Both training and encoding go through the same pipeline.

pub mod normalize;
pub mod split;

pub use normalize::Normalizer;
pub use split::{Splitter, DEFAULT_STOPWORDS};
