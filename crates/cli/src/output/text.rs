// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! Scan format, one line per matched input:
//! ```text
//! <input>: <payload> <payload> ...
//! ```
//! Inputs without matches are silent unless `--all` is given, in which case
//! they print `<input>: -`.

use termcolor::WriteColor;

use super::{InputReport, ScanReport};
use crate::bench::BackendReport;
use crate::color::scheme;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn write_scan(&mut self, report: &ScanReport, all: bool) -> std::io::Result<()> {
        for input in &report.inputs {
            if input.matched() || all {
                self.write_input(input)?;
            }
        }
        self.out.flush()
    }

    fn write_input(&mut self, input: &InputReport) -> std::io::Result<()> {
        self.out.set_color(&scheme::input())?;
        write!(self.out, "{}", input.input)?;
        self.out.reset()?;
        write!(self.out, ":")?;

        if input.payloads.is_empty() {
            write!(self.out, " ")?;
            self.out.set_color(&scheme::none())?;
            write!(self.out, "-")?;
            self.out.reset()?;
        } else {
            self.out.set_color(&scheme::payload())?;
            for payload in &input.payloads {
                write!(self.out, " {}", payload)?;
            }
            self.out.reset()?;
        }
        writeln!(self.out)
    }

    pub fn write_bench(&mut self, reports: &[BackendReport]) -> std::io::Result<()> {
        for (i, report) in reports.iter().enumerate() {
            if i > 0 {
                writeln!(self.out)?;
            }
            self.out.set_color(&scheme::header())?;
            write!(self.out, "{}", report.backend)?;
            self.out.reset()?;
            writeln!(self.out)?;

            for m in &report.measurements {
                write!(self.out, "  {}: {:.6}s", m.phase.name(), m.seconds)?;
                if let Some(count) = m.matches {
                    write!(self.out, " (matches: {})", count)?;
                }
                writeln!(self.out)?;
            }
        }
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
