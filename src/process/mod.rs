//! File processing pipeline.
//!
//! Reads a whole document, runs every line through a fresh
//! [`ThyIndenter`](crate::format::ThyIndenter) in order, and writes the
//! re-indented lines out. Output is only produced for documents that format
//! without error.

pub mod pipeline;

pub use pipeline::{format_file, format_str};
