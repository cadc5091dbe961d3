//! Encode command implementation.

use clap::Parser;

/// Encode command arguments.
#[derive(Parser)]
pub struct EncodeCommand {
    /// Path to a vocabulary file (one token per line)
    #[arg(short, long)]
    pub vocab: PathBuf,

    /// JSON file with an array of {"id", "sentence"} records
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output JSON file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep stopwords instead of removing them
    #[arg(long, default_value_t = false)]
    pub keep_stopwords: bool,
}

use anyhow::Result as AnyhowResult;
use serde_json::Value;
use std::path::PathBuf;
use wpiece_tokenizer::{load_records, save_records, Tokenizer, TokenizerConfig};

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    let mut config = TokenizerConfig::default();
    if cmd.keep_stopwords {
        config.stopwords.clear();
    }
    let tokenizer = Tokenizer::load_with_config(&cmd.vocab, config)?;

    let records = load_records::<Value>(&cmd.input)?;
    let encoded = tokenizer.encode_records(&records);

    match &cmd.output {
        Some(path) => {
            save_records(path, &encoded)?;
            println!("Encoded {} records to {}", encoded.len(), path.display());
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&encoded)?);
        }
    }

    Ok(())
}
