//! Stream Processor Library
//!
//! Reads a blob of text from a file or a built-in default, wraps it in a
//! result record carrying a counter and timestamp, and writes the record as
//! pretty JSON to a file or stdout.

pub mod error;
pub mod processing;
pub mod types;

pub use error::ProcessError;
pub use processing::Processor;
pub use types::{ProcessResult, ProcessorConfig, ProcessorStats, ResultData};

/// Text processed when no input file is given
pub const DEFAULT_INPUT: &str = "Sample data for processing";

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "streamprocessor=info";
