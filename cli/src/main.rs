//! Wpiece CLI - Command-line interface for the WordPiece tokenizer.
//!
//! This is the main entry point for the `wpiece` command-line tool.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use commands::{EncodeCommand, PipelineCommand, TrainCommand};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "wpiece")]
#[command(about = "Train WordPiece vocabularies and tokenize text with them", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a vocabulary from a text corpus
    Train(TrainCommand),
    /// Encode JSON records with a saved vocabulary
    Encode(EncodeCommand),
    /// Train, save the vocabulary and encode records in one run
    Pipeline(PipelineCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_secs()
        .init();

    match cli.command {
        Commands::Train(cmd) => commands::train::run(cmd)?,
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
        Commands::Pipeline(cmd) => commands::pipeline::run(cmd)?,
    }

    Ok(())
}
