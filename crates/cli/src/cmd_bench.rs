// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bench command implementation.

use termcolor::StandardStream;

use trawl::bench::{self, DEFAULT_BACKENDS, Workload, WorkloadSpec};
use trawl::cli::{BenchArgs, Cli, OutputFormat};
use trawl::color::resolve_color;
use trawl::config;
use trawl::error::{Error, ExitCode};
use trawl::output::json::JsonFormatter;
use trawl::output::text::TextFormatter;

/// Run the bench command.
pub fn run(cli: &Cli, args: &BenchArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = config::load_or_default(cli.config.as_deref(), &cwd)?;

    let corpus = match &args.corpus {
        Some(path) => Some(std::fs::read(path).map_err(|e| Error::Io {
            path: path.clone(),
            source: e,
        })?),
        None => None,
    };

    let sizes = WorkloadSpec {
        patterns: args.patterns,
        max_len: args.max_len,
        words: args.words,
        text_len: args.text_len,
        nested: args.nested,
        seed: args.seed,
    };
    let workload = Workload::generate(&sizes, corpus);

    let backends = if args.backends.is_empty() {
        DEFAULT_BACKENDS.to_vec()
    } else {
        args.backends.clone()
    };

    let regex = config.regex.options();
    let mut reports = Vec::with_capacity(backends.len());
    for kind in backends {
        tracing::info!(backend = %kind, "benchmarking");
        reports.push(bench::run(kind, &regex, &workload)?);
    }

    match args.output {
        OutputFormat::Text => {
            let stdout = StandardStream::stdout(resolve_color(false, false));
            TextFormatter::new(stdout.lock()).write_bench(&reports)?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock()).write_bench(args.seed, &reports)?;
        }
    }

    Ok(ExitCode::Success)
}
