// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled Aho-Corasick automaton.
//!
//! Built from a [`Trie`] in one breadth-first pass and never mutated
//! afterwards. Every state carries a complete transition row, so a scan is one
//! table lookup per input byte with no failure-chain walking.

mod builder;
pub mod classes;

use std::collections::HashSet;
use std::sync::Arc;

pub use classes::ByteClasses;

use crate::index::{Matches, Payload, Searcher};
use crate::trie::Trie;

/// Index of a state in the automaton.
pub type StateId = u32;

/// The start state, corresponding to the trie root.
pub const ROOT: StateId = 0;

/// One trie node plus the links computed for it.
#[derive(Debug)]
struct State<P> {
    /// Deepest proper suffix of this prefix that is also a trie prefix.
    fail: StateId,
    /// Nearest terminal state on the failure chain.
    output_link: Option<StateId>,
    /// Payloads of patterns ending exactly here.
    payloads: Arc<[P]>,
    /// Every payload reachable through the output-link chain.
    output_accum: Arc<[P]>,
}

impl<P> State<P> {
    fn has_output(&self) -> bool {
        !self.payloads.is_empty() || !self.output_accum.is_empty()
    }
}

/// Immutable multi-pattern matcher.
#[derive(Debug)]
pub struct Automaton<P> {
    states: Vec<State<P>>,
    /// Row-major transition table, `classes.alphabet_len()` columns per state.
    goto: Vec<StateId>,
    classes: ByteClasses,
    /// Distinct payloads across all states.
    payload_count: usize,
}

impl<P: Payload> Automaton<P> {
    /// Compile the current contents of `trie`.
    pub fn compile(trie: &Trie<P>) -> Self {
        builder::compile(trie)
    }

    /// Number of states (trie nodes, root included).
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Number of transition columns per state.
    pub fn alphabet_len(&self) -> usize {
        self.classes.alphabet_len()
    }

    /// Approximate heap footprint of the transition table in bytes.
    pub fn table_bytes(&self) -> usize {
        self.goto.len() * std::mem::size_of::<StateId>()
    }

    /// Transition from `state` on `byte`. Always defined.
    #[inline]
    pub fn next_state(&self, state: StateId, byte: u8) -> StateId {
        let stride = self.classes.alphabet_len();
        self.goto[state as usize * stride + self.classes.get(byte)]
    }

    /// State reached from the root after consuming `bytes`.
    pub fn walk(&self, bytes: &[u8]) -> StateId {
        bytes
            .iter()
            .fold(ROOT, |state, &byte| self.next_state(state, byte))
    }

    /// Failure link of `state`.
    pub fn fail(&self, state: StateId) -> StateId {
        self.states[state as usize].fail
    }

    /// Output link of `state`.
    pub fn output_link(&self, state: StateId) -> Option<StateId> {
        self.states[state as usize].output_link
    }

    /// Payloads of patterns ending exactly at `state`.
    pub fn payloads(&self, state: StateId) -> &[P] {
        &self.states[state as usize].payloads
    }

    /// Payloads reachable from `state` through output links.
    pub fn output_accum(&self, state: StateId) -> &[P] {
        &self.states[state as usize].output_accum
    }

    /// Scan `text` once, collecting every matched payload.
    ///
    /// Each state's outputs are added at most once per scan, and the scan
    /// stops as soon as every payload has been seen.
    pub fn find(&self, text: &[u8]) -> Matches<P> {
        let root = &self.states[ROOT as usize];
        let mut found: Matches<P> = root.payloads.iter().cloned().collect();
        if found.len() == self.payload_count {
            return found;
        }

        let mut reported: HashSet<StateId> = HashSet::new();
        let mut state = ROOT;
        for &byte in text {
            state = self.next_state(state, byte);
            let current = &self.states[state as usize];
            if !current.has_output() || !reported.insert(state) {
                continue;
            }
            found.extend(current.payloads.iter().cloned());
            found.extend(current.output_accum.iter().cloned());
            if found.len() == self.payload_count {
                break;
            }
        }
        found
    }
}

impl<P: Payload> Searcher<P> for Automaton<P> {
    fn find(&self, text: &[u8]) -> Matches<P> {
        Automaton::find(self, text)
    }

    fn payload_count(&self) -> usize {
        self.payload_count
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
