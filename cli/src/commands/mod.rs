//! CLI commands for the wpiece tokenizer.

pub mod encode;
pub mod pipeline;
pub mod train;

pub use encode::EncodeCommand;
pub use pipeline::PipelineCommand;
pub use train::TrainCommand;
