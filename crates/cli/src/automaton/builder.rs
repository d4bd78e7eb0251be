// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Breadth-first compilation of a trie into an automaton.
//!
//! States are numbered in BFS order, so every failure target, and every row
//! a state inherits from, belongs to a strictly shallower state that was
//! finished earlier in the same pass.

use std::collections::{BTreeSet, VecDeque};
use std::sync::Arc;

use super::{Automaton, ByteClasses, ROOT, State, StateId};
use crate::index::Payload;
use crate::trie::{Trie, TrieNode};

/// A trie node waiting for its state to be filled in.
struct Pending<'a, P> {
    node: &'a TrieNode<P>,
    parent: StateId,
    /// Edge label from the parent.
    byte: u8,
}

/// Id of the state stored at arena `index`.
#[allow(clippy::panic)]
fn state_id(index: usize) -> StateId {
    match StateId::try_from(index) {
        Ok(id) => id,
        Err(_) => panic!("trie needs more states than an automaton can number ({index})"),
    }
}

pub(super) fn compile<P: Payload>(trie: &Trie<P>) -> Automaton<P> {
    let classes = ByteClasses::from_trie(trie);
    let stride = classes.alphabet_len();
    let node_count = trie.node_count();

    let mut states: Vec<State<P>> = Vec::with_capacity(node_count);
    let mut goto: Vec<StateId> = Vec::with_capacity(node_count * stride);
    // Own payloads plus output_accum, per state; what a state hands down to
    // states whose output link points at it.
    let mut emits: Vec<Arc<[P]>> = Vec::with_capacity(node_count);
    let empty: Arc<[P]> = Arc::from(Vec::new());

    let mut queue = VecDeque::new();
    queue.push_back(Pending {
        node: trie.root(),
        parent: ROOT,
        byte: 0,
    });
    let mut next_index: usize = 1;

    while let Some(Pending { node, parent, byte }) = queue.pop_front() {
        let id = state_id(states.len());
        let column = classes.get(byte);

        let fail = if id == ROOT || parent == ROOT {
            ROOT
        } else {
            let parent_fail = states[parent as usize].fail;
            goto[parent_fail as usize * stride + column]
        };

        let row = goto.len();
        if id == ROOT {
            goto.resize(row + stride, ROOT);
        } else {
            let inherited = fail as usize * stride;
            goto.extend_from_within(inherited..inherited + stride);
        }
        for (child_byte, child) in node.children() {
            goto[row + classes.get(child_byte)] = state_id(next_index);
            queue.push_back(Pending {
                node: child,
                parent: id,
                byte: child_byte,
            });
            next_index += 1;
        }

        let output_link = if id == ROOT {
            None
        } else if !states[fail as usize].payloads.is_empty() {
            Some(fail)
        } else {
            states[fail as usize].output_link
        };
        let output_accum = match output_link {
            Some(link) => Arc::clone(&emits[link as usize]),
            None => Arc::clone(&empty),
        };

        let payloads: Arc<[P]> = if node.is_terminal() {
            node.payloads().iter().cloned().collect()
        } else {
            Arc::clone(&empty)
        };
        emits.push(union(&payloads, &output_accum));
        states.push(State {
            fail,
            output_link,
            payloads,
            output_accum,
        });
    }

    debug_assert_eq!(states.len(), node_count);
    debug_assert_eq!(goto.len(), node_count * stride);

    Automaton {
        states,
        goto,
        classes,
        payload_count: trie.distinct_payloads(),
    }
}

/// Sorted union of two sorted payload lists, sharing an input when the other
/// side is empty.
fn union<P: Payload>(own: &Arc<[P]>, inherited: &Arc<[P]>) -> Arc<[P]> {
    if own.is_empty() {
        return Arc::clone(inherited);
    }
    if inherited.is_empty() {
        return Arc::clone(own);
    }
    let merged: BTreeSet<&P> = own.iter().chain(inherited.iter()).collect();
    merged.into_iter().cloned().collect()
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
