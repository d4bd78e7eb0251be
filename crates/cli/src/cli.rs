// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::backend::{BackendKind, PatternSyntax};
use crate::patterns::Entry;

/// Report which patterns occur in each input
#[derive(Parser)]
#[command(name = "trawl")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "TRAWL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan inputs against a pattern dictionary
    Scan(ScanArgs),
    /// Time insert, delete, build and find on generated workloads
    Bench(BenchArgs),
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// Files to scan (`-` or nothing reads stdin)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Index backend (overrides config)
    #[arg(short, long)]
    pub backend: Option<BackendKind>,

    /// Patterns file with `payload<TAB>pattern` lines (repeatable)
    #[arg(short = 'p', long = "patterns", value_name = "FILE")]
    pub pattern_files: Vec<PathBuf>,

    /// Inline pattern as PAYLOAD:PATTERN (repeatable)
    #[arg(short = 'e', long = "pattern", value_name = "PAYLOAD:PATTERN", value_parser = parse_inline_pattern)]
    pub patterns: Vec<Entry>,

    /// Pattern syntax for the regex backend (overrides config)
    #[arg(long)]
    pub syntax: Option<PatternSyntax>,

    /// Reject inputs larger than this many bytes (overrides config)
    #[arg(long, value_name = "BYTES", value_parser = clap::value_parser!(u64).range(1..))]
    pub max_text_size: Option<u64>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Also list inputs without matches
    #[arg(short, long)]
    pub all: bool,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct BenchArgs {
    /// Backends to measure (repeatable; default: aho-corasick, trie, linear)
    #[arg(short, long = "backend")]
    pub backends: Vec<BackendKind>,

    /// Dictionary size for the insert/delete/build phases
    #[arg(long, default_value_t = 1000, value_name = "N")]
    pub patterns: usize,

    /// Maximum dictionary word length
    #[arg(long, default_value_t = 100, value_name = "N")]
    pub max_len: usize,

    /// Words in the random-find dictionary
    #[arg(long, default_value_t = 100, value_name = "N")]
    pub words: usize,

    /// Length of the random and nested-prefix texts
    #[arg(long, default_value_t = 1_000_000, value_name = "N")]
    pub text_len: usize,

    /// Depth of the nested-prefix dictionary (a, aa, aaa, ...); the trie
    /// backend's nested-find cost grows with depth times text length
    #[arg(long, default_value_t = 1000, value_name = "N")]
    pub nested: usize,

    /// Text scanned with a fixed dictionary in the find phase
    #[arg(long, value_name = "FILE")]
    pub corpus: Option<PathBuf>,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parse `PAYLOAD:PATTERN`. Only the first colon separates.
pub fn parse_inline_pattern(value: &str) -> Result<Entry, String> {
    let (payload, pattern) = value
        .split_once(':')
        .ok_or_else(|| format!("expected PAYLOAD:PATTERN, got `{}`", value))?;
    let payload = payload
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid payload `{}`: {}", payload, e))?;
    Ok(Entry::new(pattern.as_bytes(), payload))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
