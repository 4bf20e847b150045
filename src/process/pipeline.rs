//! Single-pass formatting pipeline

use std::io::{BufRead, Write};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::config::Config;
use crate::format::ThyIndenter;
use crate::Result;

/// Any line terminator: CRLF, LF, or a lone CR
static LINE_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// Split a document into lines on every kind of line break.
///
/// A trailing break does not start an extra empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = LINE_BREAK_RE.split(text).collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Format a whole document from `input` into `output`.
///
/// Lines are written as they are produced into `output`; callers that must
/// not expose a partial result should pass an in-memory buffer and flush it
/// only on success.
pub fn format_file<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    config: &Config,
    filename: &str,
) -> Result<()> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;

    let mut indenter = ThyIndenter::new(config.indent);
    for line in split_lines(&text) {
        let rendered = indenter.process_line(line)?;
        writeln!(output, "{rendered}")?;
    }

    debug!(
        file = filename,
        lines = indenter.lines_processed(),
        level = indenter.level(),
        comment_depth = indenter.comment_depth(),
        "formatted document"
    );
    if indenter.level() != 0 {
        warn!(
            file = filename,
            level = indenter.level(),
            "document ends inside an open proof block"
        );
    }
    if indenter.comment_depth() != 0 {
        warn!(
            file = filename,
            depth = indenter.comment_depth(),
            "document ends inside an open comment"
        );
    }

    Ok(())
}

/// Format a document held in memory.
pub fn format_str(source: &str, config: &Config) -> Result<String> {
    let mut output = Vec::with_capacity(source.len());
    format_file(source.as_bytes(), &mut output, config, "<string>")?;
    Ok(String::from_utf8(output)?)
}
