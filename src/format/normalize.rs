//! Line normalization
//!
//! Runs before any keyword or comment analysis so that matching is
//! insensitive to incidental spacing.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// One or more consecutive spaces (tabs are left alone)
static SPACE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").unwrap());

/// Collapse every run of spaces to a single space, then trim both ends.
///
/// Only the space character is collapsed; trimming removes any surrounding
/// whitespace. No other characters are touched.
#[must_use]
pub fn normalize_line(raw: &str) -> Cow<'_, str> {
    match SPACE_RUN_RE.replace_all(raw, " ") {
        Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
        Cow::Owned(s) => Cow::Owned(s.trim().to_string()),
    }
}

/// Position of the first non-space character, or `None` for a line made only
/// of spaces (including the empty line).
#[must_use]
pub fn begin_position(s: &str) -> Option<usize> {
    s.bytes().position(|b| b != b' ')
}
