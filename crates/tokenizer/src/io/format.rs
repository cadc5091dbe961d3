//! Record formats for corpus encoding.
//!
//! Input records pair an identifier with a sentence; output records pair the
//! same identifier with the sentence's tokens. Identifiers can be any
//! serializable type and are passed through untouched.

use serde::{Deserialize, Serialize};

/// A sentence to encode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<I> {
    /// Caller-chosen identifier
    pub id: I,
    /// Raw sentence text
    pub sentence: String,
}

impl<I> Record<I> {
    /// Create a record.
    pub fn new(id: I, sentence: impl Into<String>) -> Self {
        Self {
            id,
            sentence: sentence.into(),
        }
    }
}

/// The tokens produced for one [`Record`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedRecord<I> {
    /// Identifier copied from the input record
    pub id: I,
    /// Tokens for every word of the sentence, in order
    pub tokens: Vec<String>,
}
