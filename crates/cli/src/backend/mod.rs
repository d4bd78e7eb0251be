// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Index backends.
//!
//! Every backend stages pairs privately and publishes an immutable snapshot
//! on `build`:
//! - `aho-corasick`: trie compiled into an automaton (linear-time scans)
//! - `trie`: frozen copy of the trie, scanned from every start offset
//! - `linear`: every pattern searched independently (correctness oracle)
//! - `regex`: one regex set compiled from all patterns

pub mod aho;
pub mod linear;
pub mod regex_set;
pub mod trie;

use serde::Deserialize;

pub use self::aho::AhoCorasickIndex;
pub use self::linear::LinearIndex;
pub use self::regex_set::{PatternSyntax, RegexIndex, RegexOptions};
pub use self::trie::TrieIndex;

use crate::index::{PatternIndex, Payload};

/// Backend selector for configuration and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    /// Compiled Aho-Corasick automaton.
    #[default]
    AhoCorasick,
    /// Plain trie, scanned from every offset.
    Trie,
    /// Independent substring search per pattern.
    Linear,
    /// Regular-expression set.
    Regex,
}

impl BackendKind {
    /// All backends, in display order.
    pub const ALL: [BackendKind; 4] = [
        BackendKind::AhoCorasick,
        BackendKind::Trie,
        BackendKind::Linear,
        BackendKind::Regex,
    ];

    /// Stable name used in logs and output.
    pub fn name(self) -> &'static str {
        match self {
            BackendKind::AhoCorasick => aho::NAME,
            BackendKind::Trie => trie::NAME,
            BackendKind::Linear => linear::NAME,
            BackendKind::Regex => regex_set::NAME,
        }
    }

    /// Create an empty index of this kind.
    pub fn open<P: Payload>(self, regex: &RegexOptions) -> Box<dyn PatternIndex<P> + Send + Sync> {
        match self {
            BackendKind::AhoCorasick => Box::new(AhoCorasickIndex::new()),
            BackendKind::Trie => Box::new(TrieIndex::new()),
            BackendKind::Linear => Box::new(LinearIndex::new()),
            BackendKind::Regex => Box::new(RegexIndex::with_options(regex.clone())),
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
