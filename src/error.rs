//! Error types and result aliases for thyfmt.
//!
//! - [`Result<T>`]: Type alias for `anyhow::Result<T>` used throughout the crate
//! - [`IndentError`]: Fatal conditions raised by the indentation engine

use anyhow::Result as AnyhowResult;

pub type Result<T> = AnyhowResult<T>;

/// Fatal indentation errors. None of these are recoverable: the document
/// being formatted is abandoned as soon as one is raised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndentError {
    /// A line was asked to render at a negative indentation level.
    ///
    /// `line` is 1-based; 0 means the render happened outside a document.
    #[error("line {line}: cannot render at negative indentation level {level}")]
    InvalidIndentLevel { line: usize, level: isize },
}
