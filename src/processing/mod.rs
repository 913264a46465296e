//! Processing module.
//!
//! This module provides:
//! - The stateful [`Processor`] and its read-process-write run
//! - Lenient input decoding for files that are not UTF-8
//! - Rendering and emitting result records

pub mod input;
pub mod output;
pub mod processor;

pub use input::{read_input, InputText, TextEncoding};
pub use output::{render, write_output};
pub use processor::Processor;
