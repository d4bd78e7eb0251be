// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Trie staging with a published frozen copy.

use std::time::Instant;

use crate::error::Result;
use crate::index::{Matches, PatternIndex, Payload, Publish, Searcher};
use crate::snapshot::{Published, Reader};
use crate::trie::Trie;

pub(crate) const NAME: &str = "trie";

/// Immutable copy of a trie taken at build time.
#[derive(Debug)]
pub struct FrozenTrie<P>(Trie<P>);

impl<P: Payload> FrozenTrie<P> {
    /// The frozen trie.
    pub fn trie(&self) -> &Trie<P> {
        &self.0
    }
}

impl<P: Payload> Searcher<P> for FrozenTrie<P> {
    fn find(&self, text: &[u8]) -> Matches<P> {
        self.0.find(text)
    }

    fn payload_count(&self) -> usize {
        self.0.distinct_payloads()
    }
}

/// Index answering queries by walking the trie from every text offset.
///
/// Simpler than [`crate::AhoCorasickIndex`] but quadratic on adversarial
/// inputs.
pub struct TrieIndex<P> {
    trie: Trie<P>,
    published: Published<FrozenTrie<P>>,
    dirty: bool,
}

impl<P: Payload> Default for TrieIndex<P> {
    fn default() -> Self {
        Self {
            trie: Trie::new(),
            published: Published::new(),
            dirty: true,
        }
    }
}

impl<P: Payload> TrieIndex<P> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: Payload> PatternIndex<P> for TrieIndex<P> {
    fn name(&self) -> &'static str {
        NAME
    }

    fn insert(&mut self, pattern: &[u8], payload: P) -> bool {
        let inserted = self.trie.insert(pattern, payload);
        self.dirty |= inserted;
        inserted
    }

    fn delete(&mut self, pattern: &[u8], payload: &P) -> bool {
        let deleted = self.trie.delete(pattern, payload);
        self.dirty |= deleted;
        deleted
    }

    fn build(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        let start = Instant::now();
        let generation = self.published.publish(FrozenTrie(self.trie.clone()));
        self.dirty = false;

        tracing::debug!(
            backend = NAME,
            pairs = self.trie.size(),
            generation,
            elapsed_us = start.elapsed().as_micros() as u64,
            "published trie snapshot"
        );
        Ok(())
    }

    fn find(&self, text: &[u8]) -> Matches<P> {
        self.published.reader().find(text)
    }

    fn size(&self) -> usize {
        self.trie.size()
    }
}

impl<P: Payload> Publish<P> for TrieIndex<P> {
    type Compiled = FrozenTrie<P>;

    fn reader(&self) -> Reader<FrozenTrie<P>> {
        self.published.reader()
    }
}

#[cfg(test)]
#[path = "trie_tests.rs"]
mod tests;
