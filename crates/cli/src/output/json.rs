// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use serde::Serialize;

use super::ScanReport;
use crate::bench::BackendReport;

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

#[derive(Serialize)]
struct BenchOutput<'a> {
    seed: u64,
    backends: &'a [BackendReport],
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }

    pub fn write_scan(&mut self, report: &ScanReport) -> std::io::Result<()> {
        self.write_value(report)
    }

    pub fn write_bench(&mut self, seed: u64, reports: &[BackendReport]) -> std::io::Result<()> {
        self.write_value(&BenchOutput {
            seed,
            backends: reports,
        })
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
