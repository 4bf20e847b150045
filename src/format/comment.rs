//! Block comment depth tracking
//!
//! `{* ... *}` and `(* ... *)` are counted as one family of delimiters: the
//! tracker never remembers which style opened a comment.
//!
//! This is a heuristic counter, not a parser. A line moves the depth by at
//! most one in each direction, whatever the number of delimiters it holds.

use std::sync::LazyLock;

use regex::Regex;

/// Opening delimiter of either style
static OPEN_COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\*|\(\*").unwrap());

/// Closing delimiter of either style
static CLOSE_COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\}|\*\)").unwrap());

/// Does the line contain at least one opening comment delimiter?
#[must_use]
pub fn opens_comment(line: &str) -> bool {
    OPEN_COMMENT_RE.is_match(line)
}

/// Does the line contain at least one closing comment delimiter?
#[must_use]
pub fn closes_comment(line: &str) -> bool {
    CLOSE_COMMENT_RE.is_match(line)
}

/// Comment depth after `line`, given the depth before it. Never below 0.
#[must_use]
pub fn next_depth(line: &str, current: usize) -> usize {
    let mut depth = current;
    if opens_comment(line) {
        depth += 1;
    }
    if closes_comment(line) {
        depth = depth.saturating_sub(1);
    }
    depth
}
