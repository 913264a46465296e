//! Core types for the processor.

mod config;
mod result;
mod stats;

pub use config::ProcessorConfig;
pub use result::{ProcessResult, ResultData};
pub use stats::ProcessorStats;
