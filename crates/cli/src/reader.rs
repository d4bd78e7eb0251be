// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Size-gated input reading.
//!
//! Inputs are read whole into memory before scanning; anything larger than
//! the configured maximum is rejected. Memory-mapped I/O is unavailable
//! because the workspace forbids unsafe code.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_MAX_TEXT_SIZE;
use crate::error::{Error, Result};

/// Size at which to log about large inputs (10MB).
pub const LARGE_INPUT_INFO: u64 = 10 * 1024 * 1024;

/// Path shown for standard input.
pub const STDIN_NAME: &str = "-";

/// Where a text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// `-` names standard input; anything else is a file path.
    pub fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == STDIN_NAME {
            Input::Stdin
        } else {
            Input::File(path.to_path_buf())
        }
    }

    /// Label for output and errors.
    pub fn display_name(&self) -> String {
        match self {
            Input::Stdin => STDIN_NAME.to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }

    fn path(&self) -> PathBuf {
        match self {
            Input::Stdin => PathBuf::from(STDIN_NAME),
            Input::File(path) => path.clone(),
        }
    }
}

/// Input content with metadata.
#[derive(Debug)]
pub struct TextContent {
    pub bytes: Vec<u8>,
    pub size: u64,
}

/// Size-gated reader.
pub struct TextReader {
    max_size: u64,
}

impl Default for TextReader {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_TEXT_SIZE,
        }
    }
}

impl TextReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Read an input, checking size limits.
    ///
    /// Returns `Err(FileTooLarge)` for inputs exceeding the maximum.
    pub fn read(&self, input: &Input) -> Result<TextContent> {
        match input {
            Input::File(path) => self.read_file(path),
            Input::Stdin => self.read_stream(std::io::stdin().lock(), input),
        }
    }

    /// Read a file, checking its size before opening it.
    pub fn read_file(&self, path: &Path) -> Result<TextContent> {
        let metadata = std::fs::metadata(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let size = metadata.len();
        if size > self.max_size {
            return Err(Error::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max_size: self.max_size,
            });
        }

        let file = File::open(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.read_stream(file, &Input::File(path.to_path_buf()))
    }

    /// Read a stream of unknown length, stopping one byte past the maximum.
    pub fn read_stream<R: Read>(&self, stream: R, input: &Input) -> Result<TextContent> {
        let mut bytes = Vec::new();
        stream
            .take(self.max_size.saturating_add(1))
            .read_to_end(&mut bytes)
            .map_err(|e| Error::Io {
                path: input.path(),
                source: e,
            })?;

        let size = bytes.len() as u64;
        if size > self.max_size {
            return Err(Error::FileTooLarge {
                path: input.path(),
                size,
                max_size: self.max_size,
            });
        }

        if size > LARGE_INPUT_INFO {
            tracing::info!(
                input = %input.display_name(),
                size_mb = size as f64 / 1_000_000.0,
                "reading large input"
            );
        }

        Ok(TextContent { bytes, size })
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
