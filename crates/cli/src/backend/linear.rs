// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Brute-force backend used as a correctness oracle.

use std::collections::BTreeSet;

use memchr::memmem::Finder;

use crate::error::Result;
use crate::index::{Matches, PatternIndex, Payload, Publish, Searcher};
use crate::snapshot::{Published, Reader};

pub(crate) const NAME: &str = "linear";

/// One substring searcher per stored pair.
pub struct LinearSnapshot<P> {
    needles: Vec<(Finder<'static>, P)>,
    payload_count: usize,
}

impl<P: Payload> Searcher<P> for LinearSnapshot<P> {
    fn find(&self, text: &[u8]) -> Matches<P> {
        let mut found = Matches::new();
        for (finder, payload) in &self.needles {
            if found.len() == self.payload_count {
                break;
            }
            if !found.contains(payload) && finder.find(text).is_some() {
                found.insert(payload.clone());
            }
        }
        found
    }

    fn payload_count(&self) -> usize {
        self.payload_count
    }
}

/// Index that searches every pattern independently.
///
/// O(text length × pattern count); only useful for checking the other
/// backends.
pub struct LinearIndex<P> {
    pairs: BTreeSet<(Vec<u8>, P)>,
    published: Published<LinearSnapshot<P>>,
}

impl<P: Payload> Default for LinearIndex<P> {
    fn default() -> Self {
        Self {
            pairs: BTreeSet::new(),
            published: Published::new(),
        }
    }
}

impl<P: Payload> LinearIndex<P> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: Payload> PatternIndex<P> for LinearIndex<P> {
    fn name(&self) -> &'static str {
        NAME
    }

    fn insert(&mut self, pattern: &[u8], payload: P) -> bool {
        self.pairs.insert((pattern.to_vec(), payload))
    }

    fn delete(&mut self, pattern: &[u8], payload: &P) -> bool {
        if pattern.is_empty() {
            return false;
        }
        self.pairs.remove(&(pattern.to_vec(), payload.clone()))
    }

    fn build(&mut self) -> Result<()> {
        let needles: Vec<(Finder<'static>, P)> = self
            .pairs
            .iter()
            .map(|(pattern, payload)| (Finder::new(pattern).into_owned(), payload.clone()))
            .collect();
        let payload_count = self
            .pairs
            .iter()
            .map(|(_, payload)| payload)
            .collect::<BTreeSet<_>>()
            .len();

        let generation = self.published.publish(LinearSnapshot {
            needles,
            payload_count,
        });
        tracing::debug!(backend = NAME, pairs = self.pairs.len(), generation, "published needles");
        Ok(())
    }

    fn find(&self, text: &[u8]) -> Matches<P> {
        self.published.reader().find(text)
    }

    fn size(&self) -> usize {
        self.pairs.len()
    }
}

impl<P: Payload> Publish<P> for LinearIndex<P> {
    type Compiled = LinearSnapshot<P>;

    fn reader(&self) -> Reader<LinearSnapshot<P>> {
        self.published.reader()
    }
}

#[cfg(test)]
#[path = "linear_tests.rs"]
mod tests;
