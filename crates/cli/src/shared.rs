// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Thread-safe wrapper around any publishing backend.
//!
//! Mutations are serialized by a writer mutex. Queries go straight to the
//! published snapshot and never take the mutex, so they keep running while
//! a build is in progress.

use std::marker::PhantomData;

use parking_lot::Mutex;

use crate::error::Result;
use crate::index::{Matches, PatternIndex, Payload, Publish};
use crate::snapshot::Reader;

/// A backend shared by one writer and any number of readers.
///
/// Every method takes `&self`; wrap it in an `Arc` (or borrow it from a
/// scoped thread) to share it.
pub struct SharedIndex<P: Payload, I: Publish<P>> {
    writer: Mutex<I>,
    reader: Reader<I::Compiled>,
    _payload: PhantomData<fn() -> P>,
}

impl<P, I> SharedIndex<P, I>
where
    P: Payload,
    I: PatternIndex<P> + Publish<P>,
{
    pub fn new(index: I) -> Self {
        let reader = index.reader();
        Self {
            writer: Mutex::new(index),
            reader,
            _payload: PhantomData,
        }
    }

    pub fn insert(&self, pattern: &[u8], payload: P) -> bool {
        self.writer.lock().insert(pattern, payload)
    }

    pub fn delete(&self, pattern: &[u8], payload: &P) -> bool {
        self.writer.lock().delete(pattern, payload)
    }

    /// Compile and publish. Readers keep using the previous snapshot until
    /// the swap.
    pub fn build(&self) -> Result<()> {
        self.writer.lock().build()
    }

    /// Staged pair count. Waits for any in-flight mutation.
    pub fn size(&self) -> usize {
        self.writer.lock().size()
    }

    /// Scan against the last published snapshot without touching the writer
    /// lock.
    ///
    /// # Panics
    ///
    /// Panics if nothing has been built yet.
    pub fn find(&self, text: &[u8]) -> Matches<P> {
        self.reader.find(text)
    }

    /// Like [`Self::find`] but returns `None` before the first build.
    pub fn try_find(&self, text: &[u8]) -> Option<Matches<P>> {
        self.reader.try_find(text)
    }

    /// A detached handle for another thread.
    pub fn reader(&self) -> Reader<I::Compiled> {
        self.reader.clone()
    }

    /// Number of builds published so far.
    pub fn generation(&self) -> u64 {
        self.reader.generation()
    }

    /// Unwrap the backend.
    pub fn into_inner(self) -> I {
        self.writer.into_inner()
    }
}

#[cfg(test)]
#[path = "shared_tests.rs"]
mod tests;
