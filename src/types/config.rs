//! Runtime configuration.

use std::path::PathBuf;

use crate::processing::Processor;
use crate::DEFAULT_LOG_FILTER;

/// Configuration for a processing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// Emit diagnostic events while processing
    pub verbose: bool,

    /// File to read input from (default input text when unset)
    pub input_path: Option<PathBuf>,

    /// File to write the result to (stdout when unset)
    pub output_path: Option<PathBuf>,

    /// Filter directive for the log subscriber
    pub log_filter: String,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            input_path: None,
            output_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ProcessorConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            verbose: lookup("STREAMPROCESSOR_VERBOSE")
                .map(|s| parse_flag(&s))
                .unwrap_or(false),
            input_path: lookup("STREAMPROCESSOR_INPUT")
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            output_path: lookup("STREAMPROCESSOR_OUTPUT")
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            log_filter: lookup("RUST_LOG")
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Set the verbose flag.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set the input path.
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Set the output path.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Create a processor from this configuration.
    pub fn build(&self) -> Processor {
        Processor::new(self.verbose)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
