//! Persistence for vocabularies and encoding records.
//!
//! Vocabularies use a plain one-token-per-line text file. Records to encode
//! and their encoded output are JSON arrays.

pub mod format;
pub mod load;
pub mod save;

pub use format::{EncodedRecord, Record};
pub use load::{load_records, VocabLoader};
pub use save::{save_records, VocabSaver};
