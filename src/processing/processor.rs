//! The read-process-write pipeline.

use std::io::{self, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};
use tracing::info;

use super::input::read_input;
use super::output::{render, write_output};
use crate::error::Result;
use crate::types::{ProcessResult, ProcessorStats};
use crate::DEFAULT_INPUT;

/// Stateful processor that turns text into result records.
///
/// The processed counter lives on the instance and is not persisted.
/// Mutating calls take `&mut self`; sharing a processor across threads
/// needs outside synchronization such as a `Mutex`.
#[derive(Debug, Default)]
pub struct Processor {
    verbose: bool,
    processed_count: u64,
}

impl Processor {
    /// Create a new processor with a zeroed counter.
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            processed_count: 0,
        }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn processed_count(&self) -> u64 {
        self.processed_count
    }

    /// Process one piece of text.
    ///
    /// Always succeeds. Bumps the counter and returns a result whose
    /// message and data carry the new count.
    pub fn process(&mut self, data: &str) -> ProcessResult {
        let length = data.chars().count();
        if self.verbose {
            info!(length, "Processing data");
        }

        self.processed_count += 1;
        let item_number = self.processed_count;
        let now = Utc::now();

        let mut payload = Map::new();
        payload.insert("length".to_string(), Value::from(length));
        payload.insert(
            "processed_at".to_string(),
            Value::from(now.to_rfc3339_opts(SecondsFormat::Secs, true)),
        );
        payload.insert("item_number".to_string(), Value::from(item_number));

        ProcessResult::success(format!("Successfully processed item #{item_number}"), now)
            .with_data(payload)
    }

    /// Read input, process it and emit the serialized result.
    ///
    /// Reads `input` when given (the built-in default text otherwise) and
    /// writes to `output` when given (stdout otherwise). Empty paths count
    /// as absent. A failed read leaves the counter untouched.
    pub fn run(&mut self, input: Option<&Path>, output: Option<&Path>) -> Result<ProcessResult> {
        self.run_with_stdout(input, output, &mut io::stdout())
    }

    /// Same as [`run`](Self::run) with an explicit stand-in for stdout.
    pub fn run_with_stdout<W: Write>(
        &mut self,
        input: Option<&Path>,
        output: Option<&Path>,
        stdout: &mut W,
    ) -> Result<ProcessResult> {
        if self.verbose {
            info!("Starting processing");
        }

        let text = match non_empty(input) {
            Some(path) => {
                if self.verbose {
                    info!(path = %path.display(), "Reading input file");
                }
                let input = read_input(path)?;
                if self.verbose {
                    info!(
                        encoding = %input.encoding,
                        size_bytes = input.size_bytes,
                        "Decoded input file"
                    );
                }
                input.text
            }
            None => {
                if self.verbose {
                    info!("Using default input");
                }
                DEFAULT_INPUT.to_string()
            }
        };

        let result = self.process(&text);
        let rendered = render(&result)?;

        let output = non_empty(output);
        if self.verbose {
            if let Some(path) = output {
                info!(path = %path.display(), "Writing result");
            }
        }
        write_output(&rendered, output, stdout)?;

        if self.verbose {
            info!(processed_count = self.processed_count, "Processing complete");
        }

        Ok(result)
    }

    /// Snapshot of the counter and verbose flag.
    pub fn stats(&self) -> ProcessorStats {
        ProcessorStats {
            processed_count: self.processed_count,
            verbose: self.verbose,
        }
    }
}

fn non_empty(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| !p.as_os_str().is_empty())
}
