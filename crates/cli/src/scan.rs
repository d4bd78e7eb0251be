// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan pipeline: stage patterns, build once, scan inputs in parallel.
//!
//! Inputs are read and scanned on the rayon pool. Every worker queries the
//! same published snapshot through `&self`, so no locking is involved.

use std::time::Instant;

use rayon::prelude::*;

use crate::backend::{BackendKind, RegexOptions};
use crate::error::Result;
use crate::index::PatternIndex;
use crate::output::InputReport;
use crate::patterns::{self, Entry};
use crate::reader::{Input, TextReader};

/// Index type handed out by [`build_index`].
pub type DynIndex = Box<dyn PatternIndex<u32> + Send + Sync>;

/// Stage `entries` in a fresh `kind` index and publish it.
pub fn build_index(kind: BackendKind, options: &RegexOptions, entries: &[Entry]) -> Result<DynIndex> {
    let start = Instant::now();
    let mut index = kind.open(options);
    let inserted = patterns::stage(&mut index, entries);
    index.build()?;
    tracing::debug!(
        backend = kind.name(),
        entries = entries.len(),
        inserted,
        elapsed_us = start.elapsed().as_micros() as u64,
        "index ready"
    );
    Ok(index)
}

/// Scan every input against `index`. Results keep input order; the first
/// read error aborts the scan.
pub fn scan_inputs<I>(index: &I, inputs: &[Input], reader: &TextReader) -> Result<Vec<InputReport>>
where
    I: PatternIndex<u32> + Sync + ?Sized,
{
    inputs
        .par_iter()
        .map(|input| {
            let content = reader.read(input)?;
            let found = index.find(&content.bytes);
            tracing::trace!(input = %input.display_name(), matches = found.len(), "scanned");
            Ok(InputReport {
                input: input.display_name(),
                size: content.size,
                payloads: found.into_iter().collect(),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
