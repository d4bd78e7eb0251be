//! Specs for `trawl bench`.

use crate::prelude::*;

const SMALL: &[&str] = &[
    "--patterns",
    "40",
    "--max-len",
    "6",
    "--words",
    "10",
    "--text-len",
    "500",
    "--nested",
    "12",
];

#[test]
fn reports_every_phase_for_default_backends() {
    let result = bench().args(SMALL).exits(0);
    let stdout = result.stdout();
    for backend in ["aho-corasick", "trie", "linear"] {
        assert!(stdout.contains(backend), "missing {backend}:\n{stdout}");
    }
    assert!(!stdout.contains("regex"));
    for phase in ["insert:", "delete:", "build:", "random-find:", "nested-find:"] {
        assert_eq!(stdout.matches(phase).count(), 3, "{phase}:\n{stdout}");
    }
    assert_eq!(stdout.matches("(matches: 12)").count(), 3);
}

#[test]
fn json_carries_seed_and_measurements() {
    let result = bench()
        .args(SMALL)
        .args(&["-b", "trie", "--seed", "9"])
        .json()
        .exits(0);
    let json = result.json();
    assert_eq!(json["seed"], 9);

    let backends = json["backends"].as_array().unwrap();
    assert_eq!(backends.len(), 1);
    assert_eq!(backends[0]["backend"], "trie");

    let phases: Vec<&str> = backends[0]["measurements"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["phase"].as_str().unwrap())
        .collect();
    assert_eq!(
        phases,
        vec!["insert", "delete", "build", "random-find", "nested-find"]
    );
}

#[test]
fn corpus_adds_find_phase() {
    let project = Project::empty();
    project.file("corpus.txt", "CHAPTER I. Pierre got his reward.");
    let result = bench()
        .pwd(project.path())
        .args(SMALL)
        .args(&["-b", "aho-corasick", "--corpus", "corpus.txt"])
        .json()
        .exits(0);
    let json = result.json();
    let find = json["backends"][0]["measurements"]
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["phase"] == "find")
        .cloned()
        .unwrap();
    assert_eq!(find["matches"], 3);
}

#[test]
fn missing_corpus_is_reported() {
    let project = Project::empty();
    bench()
        .pwd(project.path())
        .args(SMALL)
        .args(&["--corpus", "absent.txt"])
        .exits(3)
        .stderr_has("absent.txt");
}
