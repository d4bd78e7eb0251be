// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dynamic multi-pattern substring index.
//!
//! Patterns are staged with [`PatternIndex::insert`] / [`PatternIndex::delete`],
//! compiled and published with [`PatternIndex::build`], and queried with
//! [`PatternIndex::find`]. Every backend publishes an immutable snapshot, so
//! readers never observe a half-built structure.

pub mod automaton;
pub mod backend;
pub mod bench;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod index;
pub mod output;
pub mod patterns;
pub mod reader;
pub mod scan;
pub mod shared;
pub mod snapshot;
pub mod trie;

pub use automaton::Automaton;
pub use backend::{
    AhoCorasickIndex, BackendKind, LinearIndex, PatternSyntax, RegexIndex, RegexOptions, TrieIndex,
};
pub use error::{Error, ExitCode, Result};
pub use index::{Matches, PatternIndex, Payload, Publish, Searcher};
pub use shared::SharedIndex;
pub use snapshot::{Published, Reader};
pub use trie::Trie;

#[cfg(test)]
pub mod test_utils;
