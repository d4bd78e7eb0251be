// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Generated workloads and per-phase timings for `trawl bench`.
//!
//! Phases per backend:
//! - `insert`: stage a random dictionary
//! - `delete`: unstage about a third of it
//! - `build`: compile the full dictionary
//! - `find`: fixed dictionary against a user-supplied corpus (optional)
//! - `random-find`: random dictionary with deletions against random text
//! - `nested-find`: `a`, `aa`, `aaa`, ... plus an unmatchable `b` against a
//!   run of `a`, so no backend can stop before the end of the text

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::backend::{BackendKind, RegexOptions};
use crate::error::Result;
use crate::index::PatternIndex;

/// Backends measured when none are named. The regex set is opt-in: the
/// nested-prefix dictionary can exceed its compiled-size limit.
pub const DEFAULT_BACKENDS: [BackendKind; 3] =
    [BackendKind::AhoCorasick, BackendKind::Trie, BackendKind::Linear];

/// Letters used by the insert/delete/build dictionary.
const DICTIONARY_ALPHABET: u8 = 26;

/// Letters used by the random-find dictionary and text.
const RANDOM_ALPHABET: u8 = 10;

/// Fixed dictionary for the corpus find phase.
pub const CORPUS_PATTERNS: &[&str] = &[
    "CHAPTER",
    "reward",
    "Pierre",
    "asdfasdf",
    "HelloAAA",
    "AHello",
    "Helloo",
    "123213",
    "rewardu",
    "qewrqwer",
    "iuzxycv",
    "CHAPTERX",
    "8762183476218934",
];

/// Workload sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadSpec {
    pub patterns: usize,
    pub max_len: usize,
    pub words: usize,
    pub text_len: usize,
    pub nested: usize,
    pub seed: u64,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            patterns: 1000,
            max_len: 100,
            words: 100,
            text_len: 1_000_000,
            nested: 1000,
            seed: 42,
        }
    }
}

/// `a`, `aa`, ... up to `depth` bytes, followed by `b`. Against a run of
/// `a` the last pattern never matches, so `find` cannot exit early and the
/// trie walks up to `depth` bytes from every offset.
pub fn nested_patterns(depth: usize) -> Vec<Vec<u8>> {
    let mut patterns: Vec<Vec<u8>> = (1..=depth).map(|len| vec![b'a'; len]).collect();
    patterns.push(vec![b'b']);
    patterns
}

/// Generated inputs shared by every backend, so timings are comparable.
pub struct Workload {
    pub dictionary: Vec<Vec<u8>>,
    /// Dictionary indices unstaged by the delete phase.
    pub deleted: Vec<usize>,
    pub words: Vec<Vec<u8>>,
    pub deleted_words: Vec<usize>,
    pub random_text: Vec<u8>,
    pub nested: usize,
    pub nested_text: Vec<u8>,
    pub corpus: Option<Vec<u8>>,
}

fn random_bytes(rng: &mut StdRng, len: usize, alphabet: u8) -> Vec<u8> {
    (0..len).map(|_| b'a' + rng.gen_range(0..alphabet)).collect()
}

impl Workload {
    pub fn generate(sizes: &WorkloadSpec, corpus: Option<Vec<u8>>) -> Self {
        let mut rng = StdRng::seed_from_u64(sizes.seed);
        let max_len = sizes.max_len.max(1);

        let mut dictionary = Vec::with_capacity(sizes.patterns);
        let mut deleted = Vec::new();
        for i in 0..sizes.patterns {
            let len = rng.gen_range(1..=max_len);
            dictionary.push(random_bytes(&mut rng, len, DICTIONARY_ALPHABET));
            if rng.gen_ratio(1, 3) {
                deleted.push(i);
            }
        }

        let mut words = Vec::with_capacity(sizes.words);
        let mut deleted_words = Vec::new();
        for i in 0..sizes.words {
            let len = rng.gen_range(1..=max_len);
            words.push(random_bytes(&mut rng, len, RANDOM_ALPHABET));
            if rng.gen_bool(0.5) {
                deleted_words.push(i);
            }
        }
        // The last word picked for deletion stays staged.
        deleted_words.pop();

        let random_text = random_bytes(&mut rng, sizes.text_len, RANDOM_ALPHABET);

        Self {
            dictionary,
            deleted,
            words,
            deleted_words,
            random_text,
            nested: sizes.nested,
            nested_text: vec![b'a'; sizes.text_len],
            corpus,
        }
    }
}

/// A timed phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Insert,
    Delete,
    Build,
    Find,
    RandomFind,
    NestedFind,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::Insert => "insert",
            Phase::Delete => "delete",
            Phase::Build => "build",
            Phase::Find => "find",
            Phase::RandomFind => "random-find",
            Phase::NestedFind => "nested-find",
        }
    }
}

/// One phase timing.
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    pub phase: Phase,
    pub seconds: f64,
    /// Result size for find phases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<usize>,
}

impl Measurement {
    fn new(phase: Phase, elapsed: Duration, matches: Option<usize>) -> Self {
        Self {
            phase,
            seconds: elapsed.as_secs_f64(),
            matches,
        }
    }
}

/// Every phase timing for one backend.
#[derive(Debug, Clone, Serialize)]
pub struct BackendReport {
    pub backend: &'static str,
    pub measurements: Vec<Measurement>,
}

type Index = Box<dyn PatternIndex<u32> + Send + Sync>;

fn staged(kind: BackendKind, options: &RegexOptions, patterns: &[Vec<u8>]) -> Index {
    let mut index = kind.open(options);
    for (payload, pattern) in patterns.iter().enumerate() {
        index.insert(pattern, payload as u32);
    }
    index
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Run every phase against a fresh index of `kind`.
pub fn run(kind: BackendKind, options: &RegexOptions, workload: &Workload) -> Result<BackendReport> {
    let mut measurements = Vec::new();

    let (_, elapsed) = timed(|| staged(kind, options, &workload.dictionary));
    measurements.push(Measurement::new(Phase::Insert, elapsed, None));

    let mut index = staged(kind, options, &workload.dictionary);
    let (_, elapsed) = timed(|| {
        for &i in &workload.deleted {
            index.delete(&workload.dictionary[i], &(i as u32));
        }
    });
    measurements.push(Measurement::new(Phase::Delete, elapsed, None));

    let mut index = staged(kind, options, &workload.dictionary);
    let (built, elapsed) = timed(|| index.build());
    built?;
    measurements.push(Measurement::new(Phase::Build, elapsed, None));

    if let Some(corpus) = &workload.corpus {
        let fixed: Vec<Vec<u8>> = CORPUS_PATTERNS.iter().map(|p| p.as_bytes().to_vec()).collect();
        let mut index = staged(kind, options, &fixed);
        index.build()?;
        let (found, elapsed) = timed(|| index.find(corpus));
        measurements.push(Measurement::new(Phase::Find, elapsed, Some(found.len())));
    }

    let mut index = staged(kind, options, &workload.words);
    for &i in &workload.deleted_words {
        index.delete(&workload.words[i], &(i as u32));
    }
    index.build()?;
    let (found, elapsed) = timed(|| index.find(&workload.random_text));
    measurements.push(Measurement::new(Phase::RandomFind, elapsed, Some(found.len())));

    let mut index = staged(kind, options, &nested_patterns(workload.nested));
    index.build()?;
    let (found, elapsed) = timed(|| index.find(&workload.nested_text));
    measurements.push(Measurement::new(Phase::NestedFind, elapsed, Some(found.len())));

    tracing::debug!(backend = kind.name(), phases = measurements.len(), "benchmark finished");
    Ok(BackendReport {
        backend: kind.name(),
        measurements,
    })
}

#[cfg(test)]
#[path = "bench_tests.rs"]
mod tests;
