// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for scan and bench results.

pub mod json;
pub mod text;

use serde::Serialize;

/// Matches found in one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputReport {
    pub input: String,
    pub size: u64,
    /// Matched payloads in ascending order.
    pub payloads: Vec<u32>,
}

impl InputReport {
    pub fn matched(&self) -> bool {
        !self.payloads.is_empty()
    }
}

/// Result of one `trawl scan`.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub backend: &'static str,
    /// Staged pairs at scan time.
    pub patterns: usize,
    pub matched: bool,
    pub inputs: Vec<InputReport>,
}

impl ScanReport {
    pub fn new(backend: &'static str, patterns: usize, inputs: Vec<InputReport>) -> Self {
        let matched = inputs.iter().any(InputReport::matched);
        Self {
            backend,
            patterns,
            matched,
            inputs,
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
