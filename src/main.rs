//! thyfmt - Re-indenter for declarative proof scripts

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::Context;
use thyfmt::{find_directive, format_file, parse_args, selftest, CliArgs, Config, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = parse_args();
    init_logging(args.debug);

    let input = match &args.input {
        Some(path) if !args.wants_self_test() => path,
        _ => return run_self_tests(),
    };

    let config = build_config(&args)?;
    if args.reads_stdin() {
        process_stdin(&config)
    } else {
        process_single_file(input, &config)
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--debug`.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_self_tests() -> Result<()> {
    let report = selftest::run();
    println!("{report}");
    if !report.all_passed() {
        anyhow::bail!("{} self-test case(s) failed", report.failed());
    }
    Ok(())
}

/// Build configuration from an explicit config file and CLI overrides
fn build_config(args: &CliArgs) -> Result<Config> {
    let mut config = if let Some(config_path) = &args.config {
        debug!(path = %config_path.display(), "using explicit config file");
        Config::from_toml_file(config_path)
            .with_context(|| format!("failed to load config {}", config_path.display()))?
    } else {
        Config::default()
    };

    if let Some(indent) = args.indent {
        config.indent = indent;
    }

    debug!(
        indent = config.indent,
        max_file_size = config.max_file_size,
        "configuration"
    );

    if let Some(error) = config.validate() {
        anyhow::bail!("Invalid configuration: {error}");
    }

    Ok(config)
}

/// Apply directive overrides from file contents to a configuration
fn apply_directive_overrides(
    config: &mut Config,
    contents: &[u8],
    source_name: &str,
) -> Result<()> {
    if let Some(overrides) = find_directive(&mut &contents[..]) {
        debug!(source = source_name, "found file directive");
        if let Some(indent) = overrides.indent {
            debug!(source = source_name, indent, "directive override");
            config.indent = indent;
        }
        if let Some(error) = config.validate() {
            anyhow::bail!("Invalid directive in {source_name}: {error}");
        }
    }
    Ok(())
}

/// Format an in-memory document and print it, all or nothing
fn format_and_print(contents: &[u8], config: &Config, source_name: &str) -> Result<()> {
    let mut file_config = config.clone();
    apply_directive_overrides(&mut file_config, contents, source_name)?;

    let mut output = Vec::with_capacity(contents.len());
    format_file(contents, &mut output, &file_config, source_name)
        .with_context(|| format!("failed to format {source_name}"))?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&output)?;
    stdout.flush()?;
    Ok(())
}

fn process_single_file(path: &Path, config: &Config) -> Result<()> {
    let source_name = path.display().to_string();

    let metadata =
        std::fs::metadata(path).with_context(|| format!("cannot access {source_name}"))?;
    if metadata.len() > config.max_file_size {
        anyhow::bail!(
            "{source_name} is {} bytes, exceeding the limit of {} bytes",
            metadata.len(),
            config.max_file_size
        );
    }

    let mut contents = Vec::new();
    File::open(path)
        .and_then(|mut f| f.read_to_end(&mut contents))
        .with_context(|| format!("cannot read {source_name}"))?;

    format_and_print(&contents, config, &source_name)
}

fn process_stdin(config: &Config) -> Result<()> {
    let mut contents = Vec::new();
    io::stdin()
        .read_to_end(&mut contents)
        .context("cannot read stdin")?;

    let size = u64::try_from(contents.len()).unwrap_or(u64::MAX);
    if size > config.max_file_size {
        anyhow::bail!(
            "stdin input is {size} bytes, exceeding the limit of {} bytes",
            config.max_file_size
        );
    }

    format_and_print(&contents, config, "stdin")
}
