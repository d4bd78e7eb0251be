// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan command implementation.

use std::time::Instant;

use termcolor::StandardStream;

use trawl::PatternIndex;
use trawl::cli::{Cli, OutputFormat, ScanArgs};
use trawl::color::resolve_color;
use trawl::config;
use trawl::error::ExitCode;
use trawl::output::ScanReport;
use trawl::output::json::JsonFormatter;
use trawl::output::text::TextFormatter;
use trawl::patterns;
use trawl::reader::{Input, TextReader};
use trawl::scan::{build_index, scan_inputs};

/// Run the scan command.
pub fn run(cli: &Cli, args: &ScanArgs) -> anyhow::Result<ExitCode> {
    let start = Instant::now();
    let cwd = std::env::current_dir()?;
    let config = config::load_or_default(cli.config.as_deref(), &cwd)?;

    let backend = args.backend.unwrap_or(config.index.backend);
    let mut regex = config.regex.options();
    if let Some(syntax) = args.syntax {
        regex.syntax = syntax;
    }
    let max_text_size = args.max_text_size.unwrap_or(config.index.max_text_size);

    let mut entries = patterns::from_config(&config);
    for file in &args.pattern_files {
        entries.extend(patterns::load(file)?);
    }
    entries.extend(args.patterns.iter().cloned());
    if entries.is_empty() {
        eprintln!("trawl: warning: no patterns given; nothing can match");
    }

    let index = build_index(backend, &regex, &entries)?;

    let inputs: Vec<Input> = if args.paths.is_empty() {
        vec![Input::Stdin]
    } else {
        args.paths.iter().map(|p| Input::from_arg(p)).collect()
    };
    let reader = TextReader::with_max_size(max_text_size);
    let reports = scan_inputs(&index, &inputs, &reader)?;
    let report = ScanReport::new(index.name(), index.size(), reports);

    match args.output {
        OutputFormat::Text => {
            let stdout = StandardStream::stdout(resolve_color(args.color, args.no_color));
            TextFormatter::new(stdout.lock()).write_scan(&report, args.all)?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock()).write_scan(&report)?;
        }
    }

    tracing::debug!(
        inputs = inputs.len(),
        matched = report.matched,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "scan finished"
    );

    Ok(if report.matched {
        ExitCode::Success
    } else {
        ExitCode::NoMatches
    })
}
