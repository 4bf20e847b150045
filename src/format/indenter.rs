//! `ThyIndenter` - Running indentation state for one proof script
//!
//! Owns the indentation level and comment depth carried from line to line.
//! One indenter formats exactly one document; create a fresh one per input.

use crate::error::{IndentError, Result};
use crate::format::comment::next_depth;
use crate::format::keywords::{classify, Adjustment};
use crate::format::normalize::normalize_line;

/// Render `line` behind `level` indentation units of `indent_size` spaces.
///
/// Rendering at a negative level is an error, never a silent clamp.
pub fn render_line(line: &str, level: isize, indent_size: usize) -> Result<String> {
    render_at(line, level, indent_size, 0)
}

fn render_at(line: &str, level: isize, indent_size: usize, line_number: usize) -> Result<String> {
    let Ok(level) = usize::try_from(level) else {
        return Err(IndentError::InvalidIndentLevel {
            line: line_number,
            level,
        }
        .into());
    };
    let width = level * indent_size;
    let mut rendered = String::with_capacity(width + line.len());
    rendered.extend(std::iter::repeat(' ').take(width));
    rendered.push_str(line);
    Ok(rendered)
}

/// `ThyIndenter` tracks block and comment nesting across lines
#[derive(Debug, Clone)]
pub struct ThyIndenter {
    /// Spaces per indentation level
    indent_size: usize,
    /// Persistent indentation level
    level: isize,
    /// Block comment nesting depth
    comment_depth: usize,
    /// Lines seen so far, blank ones included
    lines_processed: usize,
}

impl ThyIndenter {
    #[must_use]
    pub fn new(indent_size: usize) -> Self {
        Self {
            indent_size,
            level: 0,
            comment_depth: 0,
            lines_processed: 0,
        }
    }

    /// Re-indent one raw input line and advance the state.
    ///
    /// Blank lines come back empty and leave the state untouched. While a
    /// comment is open, or on any line that changes the comment depth, the
    /// keyword classification is ignored.
    pub fn process_line(&mut self, raw: &str) -> Result<String> {
        self.lines_processed += 1;

        let line = normalize_line(raw);
        if line.is_empty() {
            return Ok(String::new());
        }

        let new_depth = next_depth(&line, self.comment_depth);
        let adjustment = if new_depth != self.comment_depth || self.comment_depth > 0 {
            Adjustment::NONE
        } else {
            classify(&line)
        };
        self.comment_depth = new_depth;

        let rendered = render_at(
            &line,
            self.level + adjustment.transient,
            self.indent_size,
            self.lines_processed,
        )?;
        self.level += adjustment.permanent;

        Ok(rendered)
    }

    /// Current persistent indentation level
    #[must_use]
    pub fn level(&self) -> isize {
        self.level
    }

    /// Current block comment depth
    #[must_use]
    pub fn comment_depth(&self) -> usize {
        self.comment_depth
    }

    #[must_use]
    pub fn lines_processed(&self) -> usize {
        self.lines_processed
    }

    #[must_use]
    pub fn indent_size(&self) -> usize {
        self.indent_size
    }
}
