//! Built-in self-test battery
//!
//! A fixed list of literal-input / literal-output checks over the
//! normalizer, comment tracker, keyword classifier and line renderer. Run by
//! the binary when it is given no document.

use std::fmt;

use crate::format::{
    begin_position, classify, leading_keyword, next_depth, normalize_line, render_line,
    Adjustment,
};

/// Outcome of a single check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseResult {
    pub name: String,
    /// `None` on success, `Some((expected, actual))` on failure
    pub mismatch: Option<(String, String)>,
}

impl CaseResult {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.mismatch.is_none()
    }
}

/// Results of a whole self-test run, in evaluation order
#[derive(Debug, Clone, Default)]
pub struct SelfTestReport {
    pub cases: Vec<CaseResult>,
}

impl SelfTestReport {
    #[must_use]
    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|c| c.passed()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.cases.len() - self.passed()
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    fn check<T>(&mut self, name: impl Into<String>, actual: T, expected: T)
    where
        T: fmt::Debug + PartialEq,
    {
        let mismatch =
            (actual != expected).then(|| (format!("{expected:?}"), format!("{actual:?}")));
        self.cases.push(CaseResult {
            name: name.into(),
            mismatch,
        });
    }
}

impl fmt::Display for SelfTestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for case in &self.cases {
            match &case.mismatch {
                None => writeln!(f, "ok      {}", case.name)?,
                Some((expected, actual)) => writeln!(
                    f,
                    "FAILED  {}\n          expected: {expected}\n          got:      {actual}",
                    case.name
                )?,
            }
        }
        write!(
            f,
            "{} passed, {} failed ({} total)",
            self.passed(),
            self.failed(),
            self.cases.len()
        )
    }
}

/// Evaluate every check in the battery.
#[must_use]
pub fn run() -> SelfTestReport {
    let mut report = SelfTestReport::default();

    for (input, expected) in [(" aer", Some(1)), ("aer", Some(0)), ("   ", None)] {
        report.check(format!("begin_position({input:?})"), begin_position(input), expected);
    }
    report.check(
        "normalize_line collapses spaces",
        normalize_line("  show   ?thesis  by   simp ").into_owned(),
        "show ?thesis by simp".to_string(),
    );

    for (input, expected) in [
        ("ultimately show \"random thing\"", "ultimately"),
        ("qed", "qed"),
        (" proof(", "proof"),
    ] {
        report.check(format!("leading_keyword({input:?})"), leading_keyword(input), expected);
    }

    for (input, current, expected) in [
        ("text {* Random text", 0, 1),
        ("text {* Random text *}", 1, 1),
        ("show (* imba lemma ", 0, 1),
        (" imba lemma *) ", 1, 0),
        ("proof (rule *)", 0, 0),
    ] {
        report.check(
            format!("next_depth({input:?}, {current})"),
            next_depth(input, current),
            expected,
        );
    }

    report.check("classify(\"proof azer\")", classify("proof azer"), Adjustment::new(1, 0));
    report.check("classify(\"qed\")", classify("qed"), Adjustment::new(-1, -1));
    report.check(
        "classify stops at '('",
        classify("proof (induct H rule: finite_induct)"),
        classify("proof"),
    );

    report.check(
        "render_line(\"i\", 2, 2)",
        render_line("i", 2, 2).ok(),
        Some("    i".to_string()),
    );
    report.check(
        "render_line rejects negative level",
        render_line("i", -1, 2).is_err(),
        true,
    );

    report
}
