//! Integration tests for thyfmt
//!
//! These tests drive the public API and the binary end to end

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fs;
use std::io::{BufReader, Cursor};
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;
use thyfmt::format::next_depth;
use thyfmt::{format_file, format_str, Config, IndentError, ThyIndenter};

const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn config(indent: usize) -> Config {
    Config {
        indent,
        ..Default::default()
    }
}

/// Run the binary with an isolated home directory
fn thyfmt(args: &[&str], home: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_thyfmt"))
        .args(args)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run thyfmt")
}

#[test]
fn test_sample_theory_matches_expected() {
    let input = fs::read_to_string(format!("{FIXTURES}/Sample.thy")).unwrap();
    let expected = fs::read_to_string(format!("{FIXTURES}/Sample.expected.thy")).unwrap();

    let reader = BufReader::new(Cursor::new(input.as_bytes()));
    let mut output = Vec::new();
    format_file(reader, &mut output, &config(2), "Sample.thy").unwrap();
    let result = String::from_utf8(output).unwrap();

    for (i, (r, e)) in result.lines().zip(expected.lines()).enumerate() {
        assert_eq!(r, e, "line {}", i + 1);
    }
    assert_eq!(result.lines().count(), expected.lines().count());
}

#[test]
fn test_expected_output_is_a_fixed_point() {
    let expected = fs::read_to_string(format!("{FIXTURES}/Sample.expected.thy")).unwrap();
    assert_eq!(format_str(&expected, &config(2)).unwrap(), expected);
}

#[test]
fn test_lemma_walkthrough() {
    let mut indenter = ThyIndenter::new(2);
    let steps = [
        ("lemma foo:", "lemma foo:", 0),
        ("assumes H1", "  assumes H1", 0),
        ("shows Q", "shows Q", 0),
        ("proof", "proof", 1),
        ("show Q", "    show Q", 1),
        ("qed", "qed", 0),
    ];
    for (input, rendered, level) in steps {
        assert_eq!(indenter.process_line(input).unwrap(), rendered, "{input}");
        assert_eq!(indenter.level(), level, "level after {input}");
    }
}

#[test]
fn test_nested_proofs() {
    let input = "proof -\nhave A\nproof\nshow A\nby simp\nqed\nthen show B\nby auto\nqed\n";
    let expected = concat!(
        "proof -\n",
        "    have A\n",
        "  proof\n",
        "      show A\n",
        "        by simp\n",
        "  qed\n",
        "    then show B\n",
        "      by auto\n",
        "qed\n",
    );
    assert_eq!(format_str(input, &config(2)).unwrap(), expected);
}

#[test]
fn test_keywords_inside_comment_are_ignored() {
    let input = "proof\n(* qed\nqed\nproof\n*)\nqed\n";
    let expected = "proof\n  (* qed\n  qed\n  proof\n  *)\nqed\n";
    assert_eq!(format_str(input, &config(2)).unwrap(), expected);
}

#[test]
fn test_comment_depth_sequence() {
    let lines = ["text {* a", "(* b", "c *)", "d *}", "e"];
    let mut depth = 0;
    let depths: Vec<usize> = lines
        .iter()
        .map(|l| {
            depth = next_depth(l, depth);
            depth
        })
        .collect();
    assert_eq!(depths, vec![1, 2, 1, 0, 0]);
}

#[test]
fn test_unbalanced_qed_fails_fast() {
    let err = format_str("lemma foo:\nby simp\nqed\nlemma bar:\n", &config(2)).unwrap_err();
    assert_eq!(
        err.downcast_ref::<IndentError>(),
        Some(&IndentError::InvalidIndentLevel { line: 3, level: -1 })
    );
}

#[test]
fn test_repeated_runs_are_identical() {
    let input = fs::read_to_string(format!("{FIXTURES}/Sample.thy")).unwrap();
    let first = format_str(&input, &config(3)).unwrap();
    let second = format_str(&input, &config(3)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_binary_ignores_stray_config_files() {
    let home = TempDir::new().unwrap();
    let project = home.path().join("project");
    fs::create_dir_all(&project).unwrap();
    let file = project.join("A.thy");
    fs::write(&file, "proof\nshow Q\nqed\n").unwrap();

    let before = thyfmt(&[file.to_str().unwrap()], home.path());
    fs::write(home.path().join("thyfmt.toml"), "indent = 7\n").unwrap();
    fs::write(project.join("thyfmt.toml"), "indent = 5\n").unwrap();
    let after = thyfmt(&[file.to_str().unwrap()], home.path());

    assert!(after.status.success());
    assert_eq!(before.stdout, after.stdout);
    assert_eq!(
        String::from_utf8(after.stdout).unwrap(),
        "proof\n    show Q\nqed\n"
    );
}

#[test]
fn test_binary_explicit_config_flag() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("A.thy");
    let cfg = home.path().join("custom.toml");
    fs::write(&file, "proof\nshow Q\nqed\n").unwrap();
    fs::write(&cfg, "indent = 3\n").unwrap();

    let out = thyfmt(
        &["-c", cfg.to_str().unwrap(), file.to_str().unwrap()],
        home.path(),
    );
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "proof\n      show Q\nqed\n"
    );
}

#[test]
fn test_old_mac_line_endings() {
    assert_eq!(
        format_str("lemma x:\rproof\rshow Q\rqed\r", &config(2)).unwrap(),
        "lemma x:\nproof\n    show Q\nqed\n"
    );
}

#[test]
fn test_explicit_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "indent = 5\nmax_file_size = 1024\n").unwrap();
    let config = Config::from_toml_file(&path).unwrap();
    assert_eq!(config.indent, 5);
    assert_eq!(config.max_file_size, 1024);
}

#[test]
fn test_binary_without_arguments_runs_self_tests() {
    let home = TempDir::new().unwrap();
    let out = thyfmt(&[], home.path());
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("0 failed"), "{stdout}");
}

#[test]
fn test_binary_self_test_flag() {
    let home = TempDir::new().unwrap();
    let out = thyfmt(&["--self-test"], home.path());
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.ends_with("17 passed, 0 failed (17 total)\n"), "{stdout}");
}

#[test]
fn test_binary_formats_file_to_stdout() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("A.thy");
    fs::write(&file, "lemma x:\nproof\n  show Q\n     qed\n").unwrap();

    let out = thyfmt(&[file.to_str().unwrap()], home.path());
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "lemma x:\nproof\n    show Q\nqed\n"
    );
}

#[test]
fn test_binary_indent_flag_and_directive() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("A.thy");
    fs::write(&file, "proof\nshow Q\nqed\n").unwrap();
    let out = thyfmt(&["-i", "3", file.to_str().unwrap()], home.path());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "proof\n      show Q\nqed\n"
    );

    // the directive beats the flag; a one-line comment takes the default rule
    fs::write(&file, "(* thyfmt: --indent 1 *)\nproof\nshow Q\nqed\n").unwrap();
    let out = thyfmt(&["-i", "3", file.to_str().unwrap()], home.path());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        " (* thyfmt: --indent 1 *)\nproof\n  show Q\nqed\n"
    );
}

#[test]
fn test_binary_missing_file_fails() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("Missing.thy");
    let out = thyfmt(&[missing.to_str().unwrap()], home.path());
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn test_binary_negative_level_prints_nothing() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("Bad.thy");
    fs::write(&file, "lemma x:\nqed\nlemma y:\n").unwrap();
    let out = thyfmt(&[file.to_str().unwrap()], home.path());
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("negative indentation level"), "{stderr}");
}
