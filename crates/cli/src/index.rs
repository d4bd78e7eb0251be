// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The capability set shared by every index backend.

use std::collections::BTreeSet;
use std::fmt::Debug;

use crate::error::Result;
use crate::snapshot::Reader;

/// Opaque identifier attached to a pattern.
///
/// Implemented for every totally-ordered, thread-safe value type.
pub trait Payload: Ord + Clone + Debug + Send + Sync + 'static {}

impl<T> Payload for T where T: Ord + Clone + Debug + Send + Sync + 'static {}

/// Payloads whose patterns occur in a scanned text.
pub type Matches<P> = BTreeSet<P>;

/// An immutable, compiled structure that answers substring queries.
///
/// Instances are published by [`PatternIndex::build`] and shared by every
/// concurrent reader until the next build supersedes them.
pub trait Searcher<P>: Send + Sync {
    /// Collect the payloads of every pattern occurring in `text`.
    fn find(&self, text: &[u8]) -> Matches<P>;

    /// Number of distinct payloads reachable through this structure.
    fn payload_count(&self) -> usize;
}

/// A dynamic dictionary of `(pattern, payload)` pairs.
///
/// `insert` and `delete` mutate private staging state; `find` only ever sees
/// what the most recent `build` published. Mutating calls must be serialized
/// by the caller (see [`crate::SharedIndex`]).
pub trait PatternIndex<P: Payload> {
    /// Short backend name for logs and reports.
    fn name(&self) -> &'static str;

    /// Stage a pair. Returns false if the exact pair is already present.
    fn insert(&mut self, pattern: &[u8], payload: P) -> bool;

    /// Unstage a pair. Returns false if the pair is absent or the pattern is
    /// empty.
    fn delete(&mut self, pattern: &[u8], payload: &P) -> bool;

    /// Compile the staged pairs and publish the result for `find`.
    ///
    /// Only the regex backend can fail; the previous snapshot stays
    /// published when it does.
    fn build(&mut self) -> Result<()>;

    /// Payloads whose pattern occurs in `text`, per the last published build.
    ///
    /// # Panics
    ///
    /// Panics if `build` has never been called.
    fn find(&self, text: &[u8]) -> Matches<P>;

    /// Number of staged pairs.
    fn size(&self) -> usize;

    /// True when no pairs are staged.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// Backends that hand out detached reader handles to their published
/// snapshot.
pub trait Publish<P: Payload> {
    /// The immutable structure published by `build`.
    type Compiled: Searcher<P> + 'static;

    /// A handle that follows every future publication of this index.
    fn reader(&self) -> Reader<Self::Compiled>;
}

impl<P: Payload, I: PatternIndex<P> + ?Sized> PatternIndex<P> for Box<I> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn insert(&mut self, pattern: &[u8], payload: P) -> bool {
        (**self).insert(pattern, payload)
    }

    fn delete(&mut self, pattern: &[u8], payload: &P) -> bool {
        (**self).delete(pattern, payload)
    }

    fn build(&mut self) -> Result<()> {
        (**self).build()
    }

    fn find(&self, text: &[u8]) -> Matches<P> {
        (**self).find(text)
    }

    fn size(&self) -> usize {
        (**self).size()
    }
}
