//! Pipeline command implementation.
//!
//! Trains on a corpus, saves the vocabulary and encodes a record file in a
//! single run.

use clap::Parser;

/// Pipeline command arguments.
#[derive(Parser)]
pub struct PipelineCommand {
    /// Path to the training corpus
    #[arg(long, default_value = "corpus.txt")]
    pub corpus: PathBuf,

    /// JSON file with an array of {"id", "sentence"} records
    #[arg(long, default_value = "sample_test.json")]
    pub records: PathBuf,

    /// Output path for the vocabulary file
    #[arg(long, default_value = "vocabulary.txt")]
    pub vocab_output: PathBuf,

    /// Output path for the encoded records
    #[arg(long, default_value = "tokenized_data.json")]
    pub output: PathBuf,

    #[command(flatten)]
    pub training: TrainingArgs,
}

use super::train::TrainingArgs;
use anyhow::{Context, Result as AnyhowResult};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use wpiece_tokenizer::{load_records, save_records};

pub fn run(cmd: PipelineCommand) -> AnyhowResult<()> {
    let corpus = fs::read_to_string(&cmd.corpus)
        .with_context(|| format!("failed to read corpus {}", cmd.corpus.display()))?;
    let records = load_records::<Value>(&cmd.records)?;

    let mut tokenizer = cmd.training.tokenizer()?;
    let summary = tokenizer.train(&corpus);
    println!("Constructed Vocabulary: {}", summary.vocab_size);

    tokenizer.save(&cmd.vocab_output)?;
    println!("Vocabulary saved to {}", cmd.vocab_output.display());

    let encoded = tokenizer.encode_records(&records);
    save_records(&cmd.output, &encoded)?;
    println!("Encoded {} records to {}", encoded.len(), cmd.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_writes_vocabulary_and_records() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = dir.path().join("corpus.txt");
        let records = dir.path().join("sample_test.json");
        fs::write(&corpus, "The low, the lower and the lowest.").unwrap();
        fs::write(
            &records,
            r#"[{"id": 1, "sentence": "Lowest of the low"}, {"id": "x", "sentence": "9"}]"#,
        )
        .unwrap();

        let cmd = PipelineCommand {
            corpus,
            records,
            vocab_output: dir.path().join("vocabulary.txt"),
            output: dir.path().join("tokenized_data.json"),
            training: TrainingArgs {
                vocab_limit: 1000,
                sequential: true,
                keep_stopwords: false,
            },
        };
        let vocab_output = cmd.vocab_output.clone();
        let output = cmd.output.clone();
        run(cmd).unwrap();

        let vocab = fs::read_to_string(vocab_output).unwrap();
        assert!(vocab.starts_with("[PAD]\n[UNK]\n"));
        assert!(vocab.lines().any(|line| line == "lowest"));

        let encoded: Value = serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(
            encoded,
            serde_json::json!([
                {"id": 1, "tokens": ["lowest", "low"]},
                {"id": "x", "tokens": ["[UNK]"]}
            ])
        );
    }
}
