//! Command-line interface for thyfmt.
//!
//! Defines CLI arguments using clap builder API

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

/// CLI arguments parsed from command line
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Proof script to format, `-` for stdin; `None` runs the self-tests
    pub input: Option<PathBuf>,

    /// Number of spaces per indentation level
    pub indent: Option<usize>,

    /// Config file path
    pub config: Option<PathBuf>,

    /// Run the self-test battery
    pub self_test: bool,

    /// Enable debug output
    pub debug: bool,
}

impl CliArgs {
    /// True when no document was given, or the self-tests were asked for
    #[must_use]
    pub fn wants_self_test(&self) -> bool {
        self.self_test || self.input.is_none()
    }

    /// True when the document is read from standard input
    #[must_use]
    pub fn reads_stdin(&self) -> bool {
        self.input.as_ref().is_some_and(|p| p.as_os_str() == "-")
    }
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("thyfmt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Re-indents proof scripts from their proof/qed block structure")
        .after_help(
            "Without FILE, runs the built-in self-tests.\n\
             Settings are read only from --config, --indent and an in-file \
             (* thyfmt: ... *) directive.",
        )
        .arg(
            Arg::new("input")
                .help("Proof script to format (- for stdin)")
                .value_name("FILE")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("indent")
                .short('i')
                .long("indent")
                .help("Number of spaces per indentation level [default: 2]")
                .value_name("NUM")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Config file path")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("self-test")
                .long("self-test")
                .help("Run the built-in self-tests and exit")
                .action(ArgAction::SetTrue)
                .conflicts_with("input"),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .long("debug")
                .help("Enable debug output")
                .action(ArgAction::SetTrue),
        )
}

/// Parse CLI arguments from command line
#[must_use]
pub fn parse_args() -> CliArgs {
    args_from_matches(&build_cli().get_matches())
}

/// Parse CLI arguments from an iterator (for testing)
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    args_from_matches(&build_cli().get_matches_from(args))
}

/// Convert clap `ArgMatches` to `CliArgs`
fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    CliArgs {
        input: matches.get_one::<PathBuf>("input").cloned(),
        indent: matches.get_one::<usize>("indent").copied(),
        config: matches.get_one::<PathBuf>("config").cloned(),
        self_test: matches.get_flag("self-test"),
        debug: matches.get_flag("debug"),
    }
}
