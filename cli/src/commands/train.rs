//! Train command implementation.

use clap::{Args, Parser};

/// Training options shared by `train` and `pipeline`.
#[derive(Args, Debug, Clone)]
pub struct TrainingArgs {
    /// Upper bound on the vocabulary size, inclusive
    #[arg(short = 'l', long, default_value_t = 1000)]
    pub vocab_limit: usize,

    /// Score merge candidates on a single thread
    #[arg(long, default_value_t = false)]
    pub sequential: bool,

    /// Keep stopwords instead of removing them
    #[arg(long, default_value_t = false)]
    pub keep_stopwords: bool,
}

impl TrainingArgs {
    /// Build an untrained tokenizer configured from these options.
    pub fn tokenizer(&self) -> wpiece_tokenizer::Result<Tokenizer> {
        let builder = Tokenizer::builder()
            .vocab_limit(self.vocab_limit)
            .parallel(!self.sequential);
        let builder = if self.keep_stopwords {
            builder.no_stopwords()
        } else {
            builder
        };
        builder.build()
    }
}

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    /// Path to the training corpus
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output path for the vocabulary file
    #[arg(short, long, default_value = "vocabulary.txt")]
    pub output: PathBuf,

    #[command(flatten)]
    pub training: TrainingArgs,
}

use anyhow::{Context, Result as AnyhowResult};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use wpiece_tokenizer::Tokenizer;

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    println!("Training vocabulary...");
    println!("  Input: {}", cmd.input.display());
    println!("  Output: {}", cmd.output.display());
    println!("  Vocab limit: {}", cmd.training.vocab_limit);
    println!();

    let start = Instant::now();
    let data = fs::read_to_string(&cmd.input)
        .with_context(|| format!("failed to read corpus {}", cmd.input.display()))?;
    println!("Read {} bytes in {:.2}s", data.len(), start.elapsed().as_secs_f64());

    let mut tokenizer = cmd.training.tokenizer()?;

    let start = Instant::now();
    let summary = tokenizer.train(&data);
    println!("Training completed in {:.2}s", start.elapsed().as_secs_f64());
    println!(
        "Constructed vocabulary: {} ({} merges, {} backfilled words)",
        summary.vocab_size, summary.merges, summary.backfilled
    );

    tokenizer.save(&cmd.output)?;
    println!("Vocabulary saved to {}", cmd.output.display());

    Ok(())
}
