// Copyright (c) 2025 Mauka Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Mauka Dict - command-line front end.
//!
//! Loads configuration, initializes logging and runs one subcommand: scanning
//! inputs against a pattern dictionary, single-pattern search, or
//! configuration housekeeping.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use std::thread;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use mauka_dict_lib::config::{self, ConfigLoader, LogConfig, MaukaConfig, ENV_PREFIX};
use mauka_dict_lib::data_structures::dictionary::{
    AnyDictionary, DictionaryError, DictionaryKind, SubstringDictionary, SubstringMatch,
};
use mauka_dict_lib::data_structures::kmp_matcher::{KmpMatcher, MatcherOptions};
use mauka_dict_lib::error::{
    report_error, set_error_reporter, ErrorContext, MaukaError, TracingErrorReporter,
};

/// Command line arguments for Mauka Dict.
#[derive(Parser, Debug)]
#[clap(name = "Mauka Dict", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Report input lines containing any pattern from a pattern file
    Scan {
        /// Newline-separated pattern file
        #[clap(short, long, value_parser)]
        patterns: PathBuf,

        /// Tree shape (compressed or plain); defaults to the configured kind
        #[clap(short, long, value_parser)]
        kind: Option<DictionaryKind>,

        /// Emit one JSON object per matching line
        #[clap(long)]
        json: bool,

        /// Input files; standard input when omitted
        #[clap(value_parser)]
        inputs: Vec<PathBuf>,
    },

    /// Print the first index of a single pattern in each input line, or -1
    Find {
        /// Pattern to search for
        #[clap(short, long)]
        pattern: String,

        /// Fold ASCII case before comparing
        #[clap(short, long)]
        ignore_case: bool,

        /// Input files; standard input when omitted
        #[clap(value_parser)]
        inputs: Vec<PathBuf>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// One matching line in `scan` output.
#[derive(Debug, Serialize)]
struct ScanHit<'a> {
    input: &'a str,
    line: usize,
    #[serde(flatten)]
    range: SubstringMatch,
    text: String,
}

/// Outcome of scanning one line.
enum LineOutcome {
    Hit(SubstringMatch),
    Miss,
    Skipped(String),
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr so
/// that stdout only carries results.
fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&log.level))?;
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default());

    if log.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_file(log.source_location)
                    .with_line_number(log.source_location)
                    .with_thread_names(true)
                    .with_writer(io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_file(log.source_location)
                    .with_line_number(log.source_location)
                    .with_thread_names(true)
                    .with_writer(io::stderr),
            )
            .try_init()?;
    }
    Ok(())
}

/// Reads `path` (or stdin for `None`) as lines of raw bytes, without the line
/// terminator.
fn read_lines(path: Option<&Path>) -> anyhow::Result<Vec<Vec<u8>>> {
    let reader: Box<dyn BufRead> = match path {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin().lock())),
    };

    let mut lines = Vec::new();
    for line in reader.split(b'\n') {
        let mut line = line.map_err(MaukaError::Io)?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        lines.push(line);
    }
    Ok(lines)
}

/// Each input as (display name, path); a lone `None` stands for stdin.
fn inputs_or_stdin(inputs: &[PathBuf]) -> Vec<(String, Option<&Path>)> {
    if inputs.is_empty() {
        vec![("-".to_string(), None)]
    } else {
        inputs
            .iter()
            .map(|path| (path.display().to_string(), Some(path.as_path())))
            .collect()
    }
}

/// Builds a dictionary from a newline-separated pattern file. Blank lines are
/// ignored; any invalid pattern aborts with its line number.
fn build_dictionary(
    path: &Path,
    kind: DictionaryKind,
    config: &MaukaConfig,
) -> anyhow::Result<AnyDictionary> {
    let mut dictionary = AnyDictionary::new(kind, config.dictionary.options());

    for (index, pattern) in read_lines(Some(path))?.iter().enumerate() {
        if pattern.is_empty() {
            continue;
        }
        if dictionary.len() >= config.limits.max_patterns {
            bail!(
                "{} holds more than {} patterns",
                path.display(),
                config.limits.max_patterns
            );
        }
        dictionary
            .insert(pattern)
            .map_err(MaukaError::Dictionary)
            .with_context(|| format!("{}:{}: invalid pattern", path.display(), index + 1))?;
    }

    info!(
        %kind,
        patterns = dictionary.len(),
        nodes = dictionary.node_count(),
        bytes = dictionary.memory_footprint(),
        "dictionary built"
    );
    Ok(dictionary)
}

/// Scans `lines` on up to `workers` scoped threads sharing `dictionary`.
fn scan_lines(
    dictionary: &AnyDictionary,
    lines: &[Vec<u8>],
    workers: usize,
    max_text_bytes: usize,
) -> Vec<LineOutcome> {
    let scan_one = |line: &Vec<u8>| {
        if line.len() > max_text_bytes {
            return LineOutcome::Skipped(format!(
                "line of {} bytes exceeds max_text_bytes {max_text_bytes}",
                line.len()
            ));
        }
        match dictionary.find_first(line) {
            Ok(Some(found)) => LineOutcome::Hit(found),
            Ok(None) => LineOutcome::Miss,
            Err(err @ DictionaryError::UnsupportedByte { .. }) => {
                LineOutcome::Skipped(err.to_string())
            }
            Err(err) => LineOutcome::Skipped(format!("unexpected error: {err}")),
        }
    };

    let chunk_size = lines.len().div_ceil(workers.max(1)).max(1);
    thread::scope(|scope| {
        let handles: Vec<_> = lines
            .chunks(chunk_size)
            .map(|chunk| scope.spawn(move || chunk.iter().map(scan_one).collect::<Vec<_>>()))
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| match handle.join() {
                Ok(outcomes) => outcomes,
                Err(_) => vec![LineOutcome::Skipped("scan worker panicked".to_string())],
            })
            .collect()
    })
}

fn run_scan(
    config: &MaukaConfig,
    patterns: &Path,
    kind: Option<DictionaryKind>,
    json: bool,
    inputs: &[PathBuf],
) -> anyhow::Result<()> {
    let kind = kind.unwrap_or(config.dictionary.kind);
    let dictionary = build_dictionary(patterns, kind, config)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut hits = 0usize;

    for (name, path) in inputs_or_stdin(inputs) {
        let lines = read_lines(path)?;
        let outcomes = scan_lines(
            &dictionary,
            &lines,
            config.limits.worker_threads,
            config.limits.max_text_bytes,
        );

        for (index, (line, outcome)) in lines.iter().zip(outcomes).enumerate() {
            match outcome {
                LineOutcome::Hit(range) => {
                    hits += 1;
                    let text = String::from_utf8_lossy(line).into_owned();
                    if json {
                        let hit = ScanHit {
                            input: &name,
                            line: index + 1,
                            range,
                            text,
                        };
                        serde_json::to_writer(&mut out, &hit).map_err(MaukaError::Serialization)?;
                        writeln!(out)?;
                    } else {
                        writeln!(out, "{name}:{}:{}..{}:{text}", index + 1, range.start, range.end)?;
                    }
                }
                LineOutcome::Miss => {}
                LineOutcome::Skipped(reason) => {
                    warn!(input = %name, line = index + 1, %reason, "line skipped");
                }
            }
        }
    }
    out.flush()?;

    let released = dictionary.dispose();
    info!(hits, released, "scan finished");
    Ok(())
}

fn run_find(pattern: &str, ignore_case: bool, inputs: &[PathBuf]) -> anyhow::Result<()> {
    let options = MatcherOptions::new().case_insensitive(ignore_case);
    let matcher = KmpMatcher::with_options(pattern, options).map_err(MaukaError::Matcher)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for (_, path) in inputs_or_stdin(inputs) {
        for line in read_lines(path)? {
            match matcher.find_first(&line) {
                Some(index) => writeln!(out, "{index}")?,
                None => writeln!(out, "-1")?,
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn run_gen_config(output: &Path) -> anyhow::Result<()> {
    info!("Generating default configuration");
    let default_config = MaukaConfig::default();

    // Create parent directories if they don't exist
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(MaukaError::Io)?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| MaukaError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml).map_err(MaukaError::Io)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let loaded = loader.load();

    // Logging follows the configuration when it loaded; defaults otherwise
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    if let Err(e) = init_logging(&log_config) {
        eprintln!("Failed to initialize logging: {e:#}");
        process::exit(1);
    }
    set_error_reporter(Arc::new(TracingErrorReporter::new()));

    let result = match args.command {
        Command::GenConfig { output } => run_gen_config(&output),
        command => match loaded {
            Err(e) => Err(MaukaError::Config(e).into()),
            Ok(config) => {
                config::init_global_config(config.clone());
                match command {
                    Command::Scan {
                        patterns,
                        kind,
                        json,
                        inputs,
                    } => run_scan(&config, &patterns, kind, json, &inputs),
                    Command::Find {
                        pattern,
                        ignore_case,
                        inputs,
                    } => run_find(&pattern, ignore_case, &inputs),
                    Command::Validate => {
                        info!("Configuration validated successfully");
                        Ok(())
                    }
                    Command::GenConfig { .. } => Ok(()),
                }
            }
        },
    };

    if let Err(e) = result {
        report_error(
            ErrorContext::new(MaukaError::Custom(format!("{e:#}")), "mauka_dict").with_span_trace(),
        );
        process::exit(1);
    }
}
