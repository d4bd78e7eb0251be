// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern lists from config entries and patterns files.
//!
//! A patterns file holds one `payload<TAB>pattern` entry per line. Blank
//! lines and lines starting with `#` are skipped. Everything after the first
//! tab is the pattern, byte for byte (a trailing `\r` is dropped).

use std::path::Path;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::index::PatternIndex;

/// A pattern and the payload reported when it matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub pattern: Vec<u8>,
    pub payload: u32,
}

impl Entry {
    pub fn new(pattern: impl Into<Vec<u8>>, payload: u32) -> Self {
        Self {
            pattern: pattern.into(),
            payload,
        }
    }
}

/// Entries declared with `[[pattern]]` in the config.
pub fn from_config(config: &Config) -> Vec<Entry> {
    config
        .patterns
        .iter()
        .map(|p| Entry::new(p.pattern.as_bytes(), p.payload))
        .collect()
}

/// Read a patterns file.
pub fn load(path: &Path) -> Result<Vec<Entry>> {
    let content = std::fs::read(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse(&content, path)
}

/// Parse patterns file content. `path` is only used in error messages.
pub fn parse(content: &[u8], path: &Path) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for (number, line) in content.split(|&b| b == b'\n').enumerate() {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        let head = line.trim_ascii_start();
        if head.is_empty() || head.starts_with(b"#") {
            continue;
        }

        let malformed = |message: &str| Error::Config {
            message: format!("line {}: {}", number + 1, message),
            path: Some(path.to_path_buf()),
        };

        let tab = line
            .iter()
            .position(|&b| b == b'\t')
            .ok_or_else(|| malformed("expected `payload<TAB>pattern`"))?;
        let payload = std::str::from_utf8(line[..tab].trim_ascii())
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .ok_or_else(|| malformed("payload must be an unsigned 32-bit integer"))?;

        entries.push(Entry::new(&line[tab + 1..], payload));
    }
    tracing::debug!(path = %path.display(), entries = entries.len(), "parsed patterns file");
    Ok(entries)
}

/// Stage every entry in `index`. Returns how many pairs were new.
pub fn stage<I>(index: &mut I, entries: &[Entry]) -> usize
where
    I: PatternIndex<u32> + ?Sized,
{
    let mut inserted = 0;
    for entry in entries {
        if index.insert(&entry.pattern, entry.payload) {
            inserted += 1;
        } else {
            tracing::trace!(
                pattern = %String::from_utf8_lossy(&entry.pattern),
                payload = entry.payload,
                "duplicate pair skipped"
            );
        }
    }
    inserted
}

#[cfg(test)]
#[path = "patterns_tests.rs"]
mod tests;
