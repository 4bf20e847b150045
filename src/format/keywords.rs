//! Leading-keyword classification
//!
//! Maps the first word of a line to an [`Adjustment`] using a fixed, ordered
//! rule table. Rules are tried top-down and the first one with a pattern
//! occurring *anywhere* in the keyword wins, so variants such as `proof-` or
//! `lemmas` are picked up by the rule of their stem.

/// How a line moves the indentation level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Adjustment {
    /// Carried into every following line
    pub permanent: isize,
    /// Applied to the current line only
    pub transient: isize,
}

impl Adjustment {
    /// No effect on indentation
    pub const NONE: Adjustment = Adjustment::new(0, 0);

    #[must_use]
    pub const fn new(permanent: isize, transient: isize) -> Self {
        Self {
            permanent,
            transient,
        }
    }
}

/// One row of the classification table
#[derive(Debug)]
pub struct KeywordRule {
    /// Substrings searched for in the leading keyword
    pub patterns: &'static [&'static str],
    pub adjustment: Adjustment,
}

impl KeywordRule {
    fn matches(&self, keyword: &str) -> bool {
        self.patterns.iter().any(|p| keyword.contains(p))
    }
}

/// Classification table, highest priority first.
///
/// The `" next"` pattern of the block-closing row can never occur inside an
/// extracted keyword (extraction stops at the first space), so `next` lands on
/// the transient-only row further down.
pub static KEYWORD_RULES: &[KeywordRule] = &[
    // Structural declarations
    KeywordRule {
        patterns: &[
            "lemma",
            "theory",
            "imports",
            "begin",
            "subsection",
            "type_synonym",
            "locale",
            "definition",
            "abbreviation",
            "theorem",
            "end",
            "shows",
        ],
        adjustment: Adjustment::new(0, 0),
    },
    // Close a block: this line and everything after it
    KeywordRule {
        patterns: &["qed", " next"],
        adjustment: Adjustment::new(-1, -1),
    },
    // Open a block: only what follows
    KeywordRule {
        patterns: &["proof", "proof-"],
        adjustment: Adjustment::new(1, 0),
    },
    // Statement clauses
    KeywordRule {
        patterns: &["assumes", "shows", "fixes", "and", "\""],
        adjustment: Adjustment::new(0, 1),
    },
    // Justifications
    KeywordRule {
        patterns: &["by", "using", "unfolding"],
        adjustment: Adjustment::new(0, 2),
    },
    KeywordRule {
        patterns: &["next"],
        adjustment: Adjustment::new(0, -1),
    },
];

/// Adjustment for lines no rule recognizes
pub const DEFAULT_ADJUSTMENT: Adjustment = Adjustment::new(0, 1);

/// Characters that end the leading keyword
const KEYWORD_DELIMITERS: [char; 3] = ['"', ' ', '('];

/// Extract the leading keyword of a line.
///
/// The keyword is everything before the first `"`, space or `(`, or the whole
/// trimmed line when none of them occur.
#[must_use]
pub fn leading_keyword(line: &str) -> &str {
    let line = line.trim();
    match line.find(KEYWORD_DELIMITERS) {
        Some(end) => line[..end].trim(),
        None => line,
    }
}

/// Classify a line by its leading keyword.
#[must_use]
pub fn classify(line: &str) -> Adjustment {
    let keyword = leading_keyword(line);
    KEYWORD_RULES
        .iter()
        .find(|rule| rule.matches(keyword))
        .map_or(DEFAULT_ADJUSTMENT, |rule| rule.adjustment)
}
