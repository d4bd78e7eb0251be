// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Trie staging with a published Aho-Corasick automaton.

use std::time::Instant;

use crate::automaton::Automaton;
use crate::error::Result;
use crate::index::{Matches, PatternIndex, Payload, Publish};
use crate::snapshot::{Published, Reader};
use crate::trie::Trie;

pub(crate) const NAME: &str = "aho-corasick";

/// Linear-time multi-pattern index.
///
/// `insert`/`delete` edit the staging trie; `build` compiles it into a fresh
/// automaton and swaps that in for readers.
pub struct AhoCorasickIndex<P> {
    trie: Trie<P>,
    published: Published<Automaton<P>>,
    /// Staging changed since the last publication.
    dirty: bool,
}

impl<P: Payload> Default for AhoCorasickIndex<P> {
    fn default() -> Self {
        Self {
            trie: Trie::new(),
            published: Published::new(),
            dirty: true,
        }
    }
}

impl<P: Payload> AhoCorasickIndex<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The staging trie.
    pub fn trie(&self) -> &Trie<P> {
        &self.trie
    }

    /// Number of builds published so far.
    pub fn generation(&self) -> u64 {
        self.published.generation()
    }
}

impl<P: Payload> PatternIndex<P> for AhoCorasickIndex<P> {
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
            tracing::trace!(backend = NAME, "staging unchanged, keeping automaton");
            return Ok(());
        }

        let start = Instant::now();
        let automaton = Automaton::compile(&self.trie);
        let states = automaton.state_count();
        let alphabet = automaton.alphabet_len();
        let table_bytes = automaton.table_bytes();
        let generation = self.published.publish(automaton);
        self.dirty = false;

        tracing::debug!(
            backend = NAME,
            pairs = self.trie.size(),
            states,
            alphabet,
            table_bytes,
            generation,
            elapsed_us = start.elapsed().as_micros() as u64,
            "published automaton"
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

impl<P: Payload> Publish<P> for AhoCorasickIndex<P> {
    type Compiled = Automaton<P>;

    fn reader(&self) -> Reader<Automaton<P>> {
        self.published.reader()
    }
}

#[cfg(test)]
#[path = "aho_tests.rs"]
mod tests;
