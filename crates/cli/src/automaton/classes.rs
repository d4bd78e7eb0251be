//! Byte equivalence classes.
//!
//! Bytes that label no trie edge behave identically in every state, so they
//! share class 0. Every byte that does label an edge gets a class of its own.
//! Transition rows then hold one entry per class instead of one per byte.

use crate::index::Payload;
use crate::trie::Trie;

/// Maps each byte to its transition-table column.
#[derive(Clone, PartialEq, Eq)]
pub struct ByteClasses {
    map: [u16; 256],
    len: usize,
}

impl ByteClasses {
    /// Every byte in class 0.
    pub fn singleton() -> Self {
        Self {
            map: [0; 256],
            len: 1,
        }
    }

    /// Classes for the edge labels present in `trie`.
    pub fn from_trie<P: Payload>(trie: &Trie<P>) -> Self {
        let mut used = [false; 256];
        let mut stack = vec![trie.root()];
        while let Some(node) = stack.pop() {
            for (byte, child) in node.children() {
                used[usize::from(byte)] = true;
                stack.push(child);
            }
        }
        Self::from_used(&used)
    }

    fn from_used(used: &[bool; 256]) -> Self {
        let mut classes = Self::singleton();
        for (byte, _) in used.iter().enumerate().filter(|(_, used)| **used) {
            classes.map[byte] = classes.len as u16;
            classes.len += 1;
        }
        classes
    }

    /// Column for `byte`.
    #[inline]
    pub fn get(&self, byte: u8) -> usize {
        usize::from(self.map[usize::from(byte)])
    }

    /// Number of columns in a transition row.
    pub fn alphabet_len(&self) -> usize {
        self.len
    }
}

impl std::fmt::Debug for ByteClasses {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let distinct: Vec<u8> = (0..=255u8).filter(|&b| self.get(b) != 0).collect();
        f.debug_struct("ByteClasses")
            .field("len", &self.len)
            .field("distinct", &distinct)
            .finish()
    }
}

#[cfg(test)]
#[path = "classes_tests.rs"]
mod tests;
