// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Publish/swap handle for compiled structures.
//!
//! A build constructs its output entirely off to the side and then replaces
//! the shared handle in one atomic store. Readers copy the handle into a
//! local `Arc` once per query and scan without holding anything shared, so
//! an in-flight query keeps the structure it started with alive until it
//! finishes.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use arc_swap::ArcSwapOption;

use crate::index::{Matches, Searcher};

struct Slot<S> {
    current: ArcSwapOption<S>,
    /// Incremented on each publication.
    generation: AtomicU64,
}

/// Owner side of a published structure.
pub struct Published<S> {
    slot: Arc<Slot<S>>,
}

/// Read side of a published structure. Cheap to clone and `Send + Sync`
/// whenever `S` is.
pub struct Reader<S> {
    slot: Arc<Slot<S>>,
}

impl<S> Default for Published<S> {
    fn default() -> Self {
        Self {
            slot: Arc::new(Slot {
                current: ArcSwapOption::empty(),
                generation: AtomicU64::new(0),
            }),
        }
    }
}

impl<S> Published<S> {
    /// Create an empty handle. Nothing is published until [`Self::publish`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current structure. Readers that already loaded the old
    /// one keep using it; it is dropped once the last of them finishes.
    pub fn publish(&self, compiled: S) -> u64 {
        self.slot.current.store(Some(Arc::new(compiled)));
        self.slot.generation.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// A reader that follows every future publication.
    pub fn reader(&self) -> Reader<S> {
        Reader {
            slot: Arc::clone(&self.slot),
        }
    }

    /// The currently published structure, if any.
    pub fn load(&self) -> Option<Arc<S>> {
        self.slot.current.load_full()
    }

    /// Number of publications so far.
    pub fn generation(&self) -> u64 {
        self.slot.generation.load(Ordering::Acquire)
    }
}

impl<S> Clone for Reader<S> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<S> Reader<S> {
    /// Copy the current handle out of the shared slot.
    pub fn snapshot(&self) -> Option<Arc<S>> {
        self.slot.current.load_full()
    }

    /// Number of publications observed by the shared slot.
    pub fn generation(&self) -> u64 {
        self.slot.generation.load(Ordering::Acquire)
    }

    /// Scan `text` against the current snapshot, or `None` if nothing has
    /// been published yet.
    pub fn try_find<P>(&self, text: &[u8]) -> Option<Matches<P>>
    where
        S: Searcher<P>,
    {
        let snapshot = self.snapshot()?;
        Some(snapshot.find(text))
    }

    /// Scan `text` against the current snapshot.
    ///
    /// # Panics
    ///
    /// Panics if nothing has been published yet.
    #[allow(clippy::panic)]
    pub fn find<P>(&self, text: &[u8]) -> Matches<P>
    where
        S: Searcher<P>,
    {
        match self.try_find(text) {
            Some(found) => found,
            None => panic!("find called before the index was built"),
        }
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
