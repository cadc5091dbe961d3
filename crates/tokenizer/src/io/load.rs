//! Load functionality for vocabularies and input records.

use super::format::Record;
use log::{info, warn};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use wpiece_core::{Result, TokenizerError, Vocabulary};

/// Vocabulary loader - reads the one-token-per-line format.
pub struct VocabLoader;

impl VocabLoader {
    /// Load a vocabulary file.
    ///
    /// Tokens keep their line order. Blank lines are skipped; a token listed
    /// twice is an error.
    pub fn load(path: &Path) -> Result<Vocabulary> {
        let file = File::open(path).map_err(|e| {
            TokenizerError::Load(format!("Failed to open file {}: {}", path.display(), e))
        })?;

        let vocab = Self::from_reader(BufReader::new(file))?;
        info!("loaded {} tokens from {}", vocab.len(), path.display());
        Ok(vocab)
    }

    /// Read a vocabulary from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Vocabulary> {
        let mut vocab = Vocabulary::new();

        for (idx, line) in reader.lines().enumerate() {
            let line_num = idx + 1;
            let line = line.map_err(|e| {
                TokenizerError::Load(format!("Failed to read line {}: {}", line_num, e))
            })?;
            let token = line.as_str();

            if token.is_empty() {
                warn!("skipping blank vocabulary line {}", line_num);
                continue;
            }
            if !vocab.add_token(token) {
                return Err(TokenizerError::DuplicateToken {
                    token: token.to_string(),
                    line: line_num,
                });
            }
        }

        Ok(vocab)
    }
}

/// Load input records from a JSON array of `{"id", "sentence"}` objects.
pub fn load_records<I: DeserializeOwned>(path: &Path) -> Result<Vec<Record<I>>> {
    let file = File::open(path).map_err(|e| {
        TokenizerError::Load(format!("Failed to open file {}: {}", path.display(), e))
    })?;

    let records: Vec<Record<I>> = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        TokenizerError::Load(format!(
            "Failed to deserialize records from {}: {}",
            path.display(),
            e
        ))
    })?;

    info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::save::VocabSaver;
    use std::io::Cursor;

    #[test]
    fn test_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocabulary.txt");

        let mut vocab = Vocabulary::with_reserved(10);
        for token in ["e", "l", "lo", "low", "##er", "ü"] {
            vocab.add_token(token);
        }
        VocabSaver::new(&vocab).save(&path).unwrap();

        let loaded = VocabLoader::load(&path).unwrap();
        assert_eq!(loaded, vocab);
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let loaded = VocabLoader::from_reader(Cursor::new("[PAD]\r\n[UNK]\r\n\r\nab\n")).unwrap();
        assert_eq!(loaded.iter().collect::<Vec<_>>(), vec!["[PAD]", "[UNK]", "ab"]);
    }

    #[test]
    fn test_duplicate_token_rejected() {
        let result = VocabLoader::from_reader(Cursor::new("a\nb\na\n"));
        match result {
            Err(TokenizerError::DuplicateToken { token, line }) => {
                assert_eq!(token, "a");
                assert_eq!(line, 3);
            }
            other => panic!("expected duplicate token error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = VocabLoader::load(&dir.path().join("absent.txt"));
        assert!(matches!(result, Err(TokenizerError::Load(_))));
    }

    #[test]
    fn test_load_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        std::fs::write(
            &path,
            r#"[{"id": 1, "sentence": "Hello there"}, {"id": 2, "sentence": ""}]"#,
        )
        .unwrap();

        let records: Vec<Record<u64>> = load_records(&path).unwrap();
        assert_eq!(records, vec![Record::new(1, "Hello there"), Record::new(2, "")]);
    }

    #[test]
    fn test_load_records_missing_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        std::fs::write(&path, r#"[{"sentence": "no id"}]"#).unwrap();

        let result = load_records::<u64>(&path);
        assert!(matches!(result, Err(TokenizerError::Load(_))));
    }
}
