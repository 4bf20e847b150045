//! Inline directive parsing for `(* thyfmt: ... *)` comments
//!
//! Supports in-file configuration overrides via a comment on a line of its
//! own, in either comment style:
//! `(* thyfmt: --indent 4 *)` or `{* thyfmt: -i 4 *}`

use std::sync::LazyLock;

use regex::Regex;

/// Pattern to match thyfmt directives
static THYFMT_DIRECTIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:\(\*|\{\*)\s*thyfmt:\s*(.*?)\s*(?:\*\)|\*\})\s*$").unwrap()
});

/// Parsed directive options that can override config
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DirectiveOverrides {
    pub indent: Option<usize>,
}

impl DirectiveOverrides {
    /// Check if any overrides are set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indent.is_none()
    }
}

/// Check if a line contains a thyfmt directive
#[must_use]
pub fn is_directive_line(line: &str) -> bool {
    THYFMT_DIRECTIVE_RE.is_match(line)
}

/// Parse a thyfmt directive line and return option overrides
///
/// Returns `None` if the line is not a directive or sets nothing usable.
#[must_use]
pub fn parse_directive(line: &str) -> Option<DirectiveOverrides> {
    let caps = THYFMT_DIRECTIVE_RE.captures(line)?;
    let args_str = caps.get(1)?.as_str();
    parse_directive_args(args_str)
}

fn parse_directive_args(args_str: &str) -> Option<DirectiveOverrides> {
    let mut overrides = DirectiveOverrides::default();
    let mut tokens = args_str.split_whitespace();

    while let Some(token) = tokens.next() {
        match token {
            "-i" | "--indent" => {
                overrides.indent = tokens.next().and_then(|v| v.parse().ok());
            }
            _ => {
                if let Some(value) = token.strip_prefix("--indent=") {
                    overrides.indent = value.parse().ok();
                }
            }
        }
    }

    if overrides.is_empty() {
        None
    } else {
        Some(overrides)
    }
}

/// Scan input for thyfmt directives and return the first found
///
/// Only the first directive line is used, even if it sets nothing.
pub fn find_directive<R: std::io::BufRead>(input: &mut R) -> Option<DirectiveOverrides> {
    let mut buffer = String::new();

    while input.read_line(&mut buffer).ok()? > 0 {
        if is_directive_line(&buffer) {
            return parse_directive(&buffer);
        }
        buffer.clear();
    }

    None
}
