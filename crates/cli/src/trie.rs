// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Byte-keyed prefix tree with reference-counted pruning.
//!
//! Every node counts the `(pattern, payload)` pairs whose path passes through
//! it. Deleting the last pair under a node removes that node and its whole
//! subtree in one step, so the tree never holds empty branches.

use std::collections::{BTreeMap, BTreeSet, btree_map};

use crate::index::{Matches, Payload};

/// One distinct byte-prefix of the inserted patterns.
#[derive(Debug)]
pub struct TrieNode<P> {
    children: BTreeMap<u8, TrieNode<P>>,
    /// Pairs whose path passes through (or ends at) this node.
    subtree_count: usize,
    /// Payloads of patterns ending exactly here.
    payloads: BTreeSet<P>,
}

impl<P> Default for TrieNode<P> {
    fn default() -> Self {
        Self {
            children: BTreeMap::new(),
            subtree_count: 0,
            payloads: BTreeSet::new(),
        }
    }
}

impl<P> TrieNode<P> {
    /// Child reached by `byte`, if any.
    pub fn child(&self, byte: u8) -> Option<&TrieNode<P>> {
        self.children.get(&byte)
    }

    /// Children in ascending byte order.
    pub fn children(&self) -> impl Iterator<Item = (u8, &TrieNode<P>)> {
        self.children.iter().map(|(&byte, child)| (byte, child))
    }

    /// Payloads of patterns ending at this node.
    pub fn payloads(&self) -> &BTreeSet<P> {
        &self.payloads
    }

    /// True iff some pattern ends exactly here.
    pub fn is_terminal(&self) -> bool {
        !self.payloads.is_empty()
    }

    /// Number of pairs stored in this node's subtree.
    pub fn subtree_count(&self) -> usize {
        self.subtree_count
    }
}

// Tries can be as deep as their longest pattern; tear them down with an
// explicit stack instead of recursive drops.
impl<P> Drop for TrieNode<P> {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode<P>> = std::mem::take(&mut self.children)
            .into_values()
            .collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

impl<P: Clone> Clone for TrieNode<P> {
    fn clone(&self) -> Self {
        struct Frame<'a, P> {
            source: &'a TrieNode<P>,
            pending: btree_map::Iter<'a, u8, TrieNode<P>>,
            built: BTreeMap<u8, TrieNode<P>>,
            byte: u8,
        }

        impl<'a, P> Frame<'a, P> {
            fn new(source: &'a TrieNode<P>, byte: u8) -> Self {
                Self {
                    source,
                    pending: source.children.iter(),
                    built: BTreeMap::new(),
                    byte,
                }
            }
        }

        let mut stack = vec![Frame::new(self, 0)];
        loop {
            let Some(top) = stack.last_mut() else {
                unreachable!("clone stack drained before the root was rebuilt");
            };
            if let Some((&byte, child)) = top.pending.next() {
                stack.push(Frame::new(child, byte));
                continue;
            }

            let Some(done) = stack.pop() else {
                unreachable!("clone stack drained before the root was rebuilt");
            };
            let node = TrieNode {
                children: done.built,
                subtree_count: done.source.subtree_count,
                payloads: done.source.payloads.clone(),
            };
            match stack.last_mut() {
                Some(parent) => {
                    parent.built.insert(done.byte, node);
                }
                None => return node,
            }
        }
    }
}

/// Staging structure for `(pattern, payload)` pairs.
#[derive(Debug, Clone)]
pub struct Trie<P> {
    root: TrieNode<P>,
    /// How many pairs carry each payload; its length is the number of
    /// distinct payloads.
    payload_refs: BTreeMap<P, usize>,
}

impl<P> Default for Trie<P> {
    fn default() -> Self {
        Self {
            root: TrieNode::default(),
            payload_refs: BTreeMap::new(),
        }
    }
}

impl<P: Payload> Trie<P> {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// The root node (the empty prefix).
    pub fn root(&self) -> &TrieNode<P> {
        &self.root
    }

    /// Number of stored pairs. O(1).
    pub fn size(&self) -> usize {
        self.root.subtree_count
    }

    /// True when no pairs are stored.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Number of distinct payloads across all stored pairs. O(1).
    pub fn distinct_payloads(&self) -> usize {
        self.payload_refs.len()
    }

    /// Node reached by following `pattern` from the root.
    pub fn node(&self, pattern: &[u8]) -> Option<&TrieNode<P>> {
        pattern
            .iter()
            .try_fold(&self.root, |node, &byte| node.child(byte))
    }

    /// True if the exact pair is stored.
    pub fn contains(&self, pattern: &[u8], payload: &P) -> bool {
        self.node(pattern)
            .is_some_and(|node| node.payloads.contains(payload))
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }

    /// Store a pair. Returns false, leaving the trie untouched, if the pair
    /// is already present.
    ///
    /// A zero-length pattern is stored at the root and matches every text.
    pub fn insert(&mut self, pattern: &[u8], payload: P) -> bool {
        if self.contains(pattern, &payload) {
            return false;
        }

        let mut node = &mut self.root;
        node.subtree_count += 1;
        for &byte in pattern {
            node = node.children.entry(byte).or_default();
            node.subtree_count += 1;
        }
        node.payloads.insert(payload.clone());
        *self.payload_refs.entry(payload).or_insert(0) += 1;
        true
    }

    /// Remove a pair. Returns false, leaving the trie untouched, if the pair
    /// is absent or `pattern` is empty.
    ///
    /// The first node on the path whose subtree holds only this pair is cut
    /// off together with everything below it.
    pub fn delete(&mut self, pattern: &[u8], payload: &P) -> bool {
        if pattern.is_empty() || !self.contains(pattern, payload) {
            return false;
        }

        self.release(payload);

        let mut node = &mut self.root;
        for byte in pattern {
            node.subtree_count -= 1;
            let prune = node
                .children
                .get(byte)
                .is_some_and(|child| child.subtree_count == 1);
            if prune {
                node.children.remove(byte);
                return true;
            }
            let Some(child) = node.children.get_mut(byte) else {
                unreachable!("path of a stored pattern is missing byte {byte:#04x}");
            };
            node = child;
        }

        // The final node still holds other pairs below or beside this one.
        node.subtree_count -= 1;
        let removed = node.payloads.remove(payload);
        assert!(removed, "terminal node lost payload {payload:?}");
        true
    }

    /// Collect payloads by walking the trie from every start offset.
    ///
    /// O(text length × longest pattern) in the worst case; the compiled
    /// automaton exists to avoid this.
    pub fn find(&self, text: &[u8]) -> Matches<P> {
        let total = self.distinct_payloads();
        let mut found: Matches<P> = self.root.payloads.iter().cloned().collect();

        for start in 0..text.len() {
            if found.len() == total {
                break;
            }
            let mut node = &self.root;
            for byte in &text[start..] {
                let Some(child) = node.child(*byte) else {
                    break;
                };
                node = child;
                if node.is_terminal() {
                    found.extend(node.payloads.iter().cloned());
                    if found.len() == total {
                        return found;
                    }
                }
            }
        }
        found
    }

    fn release(&mut self, payload: &P) {
        if let Some(refs) = self.payload_refs.get_mut(payload) {
            *refs -= 1;
            if *refs == 0 {
                self.payload_refs.remove(payload);
            }
        }
    }

    /// Verify the subtree-count invariant on every node.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        let mut stack = vec![(&self.root, true)];
        while let Some((node, is_root)) = stack.pop() {
            let below: usize = node.children.values().map(|c| c.subtree_count).sum();
            assert_eq!(
                node.subtree_count,
                below + node.payloads.len(),
                "subtree count out of sync"
            );
            assert!(is_root || node.subtree_count > 0, "empty node not pruned");
            stack.extend(node.children.values().map(|c| (c, false)));
        }
        let refs: usize = self.payload_refs.values().sum();
        assert_eq!(refs, self.size(), "payload refcounts out of sync");
    }
}

#[cfg(test)]
#[path = "trie_tests.rs"]
mod tests;
