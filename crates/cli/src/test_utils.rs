//! Shared unit test utilities.
//!
//! Provides common fixtures for unit tests in the trawl crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::TempDir;

use crate::index::{Matches, PatternIndex};

/// Dictionary used by the hand-written scenarios.
pub const MANUAL_PAIRS: &[(&str, u32)] = &[
    ("abcd", 11),
    ("abcd", 1),
    ("abc", 2),
    ("abce", 3),
    ("bcu", 4),
    ("bcdf", 5),
    ("bcde", 6),
    ("Z", 7),
    ("A", 8),
    ("AA", 9),
    ("AAA", 10),
];

/// Build a result set from a payload list.
pub fn matches(payloads: &[u32]) -> Matches<u32> {
    payloads.iter().copied().collect()
}

/// Insert every manual pair into `index` and build it.
pub fn load_manual<I: PatternIndex<u32>>(index: &mut I) {
    for (pattern, payload) in MANUAL_PAIRS {
        assert!(index.insert(pattern.as_bytes(), *payload));
    }
    assert!(!index.insert(b"abcd", 11));
    index.build().unwrap();
}

/// Run the full manual insert/find/delete scenario against `index`.
pub fn run_manual_scenario<I: PatternIndex<u32>>(index: &mut I) {
    load_manual(index);
    assert_eq!(index.size(), 11);

    let before: &[(&str, &[u32])] = &[
        ("abcu", &[2, 4]),
        ("abcd", &[1, 11, 2]),
        ("bcdf", &[5]),
        ("abceabcdfe", &[2, 3, 1, 11, 5]),
        ("abceabcdfebcobcpabpbcdebcobcupp", &[1, 11, 2, 3, 4, 5, 6]),
        ("ZZZZZZZZZZZZZZZZZZZZZZZZ", &[7]),
        ("AAAAAAAAAAAAAAAAAAAAAAA", &[8, 9, 10]),
        ("AA", &[8, 9]),
        ("A", &[8]),
    ];
    for (text, expected) in before {
        assert_eq!(index.find(text.as_bytes()), matches(expected), "{text}");
    }

    assert!(index.delete(b"bcu", &4));
    assert!(!index.delete(b"bcu", &4));
    assert!(index.delete(b"abcd", &1));
    assert!(index.delete(b"A", &8));
    index.build().unwrap();
    assert_eq!(index.size(), 8);

    let after: &[(&str, &[u32])] = &[
        ("abcu", &[2]),
        ("abcd", &[2, 11]),
        ("bcdf", &[5]),
        ("abceabcdfe", &[2, 3, 5, 11]),
        ("abceabcdfebcobcpabpbcdebcobcupp", &[2, 3, 5, 6, 11]),
        ("ZZZZZZZZZZZZZZZZZZZZZZZZ", &[7]),
        ("AAAAAAAAAAAAAAAAAAAAAAA", &[9, 10]),
        ("AA", &[9]),
        ("A", &[]),
    ];
    for (text, expected) in after {
        assert_eq!(index.find(text.as_bytes()), matches(expected), "{text}");
    }
}

/// Seeded generator so failures reproduce.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random word of 1..=max_len bytes drawn from the first `alphabet` letters.
pub fn random_word(rng: &mut StdRng, max_len: usize, alphabet: u8) -> Vec<u8> {
    let len = rng.gen_range(1..=max_len);
    (0..len).map(|_| b'a' + rng.gen_range(0..alphabet)).collect()
}

/// Creates a temp directory with custom config content.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("trawl.toml"), config).unwrap();
    dir
}
