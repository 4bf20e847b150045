//! thyfmt - Re-indenter for declarative proof scripts
//!
//! Recomputes the leading whitespace of every line of a proof script from a
//! running indentation level driven by block keywords (`proof`, `qed`, ...)
//! and nested block comments (`{* *}`, `(* *)`).

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod directive;
pub mod error;
pub mod format;
pub mod process;
pub mod selftest;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use config::Config;
pub use directive::{find_directive, parse_directive, DirectiveOverrides};
pub use error::{IndentError, Result};
pub use format::{Adjustment, ThyIndenter};
pub use process::{format_file, format_str};
