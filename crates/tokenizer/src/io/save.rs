//! Save functionality for vocabularies and encoded records.
//!
//! A vocabulary is written as plain text, one token per line in vocabulary
//! order, every line newline-terminated.

use super::format::EncodedRecord;
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use wpiece_core::{Result, TokenizerError, Vocabulary};

/// Vocabulary saver - writes the one-token-per-line format.
pub struct VocabSaver<'a> {
    /// Vocabulary reference
    vocab: &'a Vocabulary,
}

impl<'a> VocabSaver<'a> {
    /// Create a new vocabulary saver.
    pub fn new(vocab: &'a Vocabulary) -> Self {
        Self { vocab }
    }

    /// Save the vocabulary to a file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        create_parent(path)?;

        let file = File::create(path).map_err(|e| TokenizerError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush().map_err(|e| TokenizerError::io(path, e))?;

        info!("saved {} tokens to {}", self.vocab.len(), path.display());
        Ok(())
    }

    /// Write the vocabulary to any writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        for token in self.vocab.iter() {
            if token.contains(['\n', '\r']) {
                return Err(TokenizerError::Save(format!(
                    "Token {:?} contains a line break",
                    token
                )));
            }
            writeln!(writer, "{}", token)
                .map_err(|e| TokenizerError::Save(format!("Failed to write token: {}", e)))?;
        }
        Ok(())
    }
}

/// Save encoded records as a pretty-printed JSON array.
pub fn save_records<I: Serialize>(path: &Path, records: &[EncodedRecord<I>]) -> Result<()> {
    create_parent(path)?;

    let file = File::create(path).map_err(|e| TokenizerError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush().map_err(|e| TokenizerError::io(path, e))?;

    info!("saved {} encoded records to {}", records.len(), path.display());
    Ok(())
}

fn create_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir).map_err(|e| {
            TokenizerError::Save(format!(
                "Failed to create directory {}: {}",
                dir.display(),
                e
            ))
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_one_token_per_line() {
        let mut vocab = Vocabulary::with_reserved(10);
        vocab.add_token("low");
        vocab.add_token("##er");

        let mut buf = Vec::new();
        VocabSaver::new(&vocab).write_to(&mut buf).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "[PAD]\n[UNK]\nlow\n##er\n");
    }

    #[test]
    fn test_empty_vocabulary_writes_nothing() {
        let mut buf = Vec::new();
        VocabSaver::new(&Vocabulary::new()).write_to(&mut buf).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_reject_line_break() {
        let mut vocab = Vocabulary::new();
        vocab.add_token("a\nb");

        let mut buf = Vec::new();
        let result = VocabSaver::new(&vocab).write_to(&mut buf);
        assert!(matches!(result, Err(TokenizerError::Save(_))));
    }

    #[test]
    fn test_save_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("vocabulary.txt");

        let vocab = Vocabulary::with_reserved(2);
        VocabSaver::new(&vocab).save(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[PAD]\n[UNK]\n");
    }

    #[test]
    fn test_save_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokenized.json");

        let records = vec![EncodedRecord {
            id: "s1".to_string(),
            tokens: vec!["[UNK]".to_string()],
        }];
        save_records(&path, &records).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!([{"id": "s1", "tokens": ["[UNK]"]}]));
    }
}
