//! Specs for `trawl scan`.

use crate::prelude::*;

fn project() -> Project {
    let project = Project::empty();
    project.file("one.txt", "abceabcdfe");
    project.file("two.txt", "zzz");
    project.file("three.txt", "abcu");
    project
}

const DICTIONARY: &[&str] = &["-e", "11:abcd", "-e", "2:abc", "-e", "3:abce", "-e", "4:bcu"];

// =============================================================================
// TEXT OUTPUT
// =============================================================================

#[test]
fn lists_matching_inputs_with_sorted_payloads() {
    let project = project();
    scan()
        .pwd(project.path())
        .args(DICTIONARY)
        .args(&["one.txt", "two.txt", "three.txt"])
        .matches()
        .stdout_eq("one.txt: 2 3 11\nthree.txt: 2 4\n");
}

#[test]
fn all_flag_lists_unmatched_inputs() {
    let project = project();
    scan()
        .pwd(project.path())
        .args(DICTIONARY)
        .args(&["--all", "one.txt", "two.txt"])
        .matches()
        .stdout_eq("one.txt: 2 3 11\ntwo.txt: -\n");
}

#[test]
fn no_match_exits_one_silently() {
    let project = project();
    scan()
        .pwd(project.path())
        .args(DICTIONARY)
        .args(&["two.txt"])
        .no_matches()
        .stdout_eq("");
}

#[test]
fn every_backend_reports_the_same_payloads() {
    let project = project();
    for backend in ["aho-corasick", "trie", "linear", "regex"] {
        scan()
            .pwd(project.path())
            .args(DICTIONARY)
            .args(&["-b", backend, "one.txt", "three.txt"])
            .matches()
            .stdout_eq("one.txt: 2 3 11\nthree.txt: 2 4\n");
    }
}

#[test]
fn color_flag_emits_escape_codes() {
    let project = project();
    scan()
        .pwd(project.path())
        .args(DICTIONARY)
        .args(&["--color", "one.txt"])
        .matches()
        .stdout_has("\x1b[");
}

#[test]
fn piped_output_is_uncolored() {
    let project = project();
    scan()
        .pwd(project.path())
        .args(DICTIONARY)
        .args(&["one.txt"])
        .matches()
        .stdout_lacks("\x1b[");
}

// =============================================================================
// INPUTS
// =============================================================================

#[test]
fn reads_stdin_without_paths() {
    scan()
        .args(&["-e", "1:foo", "-e", "2:bar"])
        .stdin("a foo b")
        .matches()
        .stdout_eq("-: 1\n");
}

#[test]
fn dash_reads_stdin_alongside_files() {
    let project = project();
    scan()
        .pwd(project.path())
        .args(DICTIONARY)
        .args(&["three.txt", "-"])
        .stdin("xbcux")
        .matches()
        .stdout_eq("three.txt: 2 4\n-: 4\n");
}

#[test]
fn binary_input_is_scanned_bytewise() {
    let project = Project::empty();
    project.file("blob.bin", [0u8, 0xff, b'a', b'b', 0x00]);
    scan()
        .pwd(project.path())
        .args(&["-e", "7:ab", "blob.bin"])
        .matches()
        .stdout_eq("blob.bin: 7\n");
}

#[test]
fn oversized_input_exits_two() {
    let project = Project::empty();
    project.file("big.txt", "abcdefgh");
    scan()
        .pwd(project.path())
        .args(&["-e", "1:abc", "--max-text-size", "4", "big.txt"])
        .exits(2)
        .stderr_has("file too large");
}

#[test]
fn missing_input_is_reported() {
    let project = Project::empty();
    scan()
        .pwd(project.path())
        .args(&["-e", "1:abc", "missing.txt"])
        .exits(3)
        .stderr_has("missing.txt");
}

// =============================================================================
// PATTERN SOURCES
// =============================================================================

#[test]
fn patterns_file_is_loaded() {
    let project = project();
    project.file(
        "dictionary.tsv",
        "# payload<TAB>pattern\n11\tabcd\n2\tabc\n\n4\tbcu\n",
    );
    scan()
        .pwd(project.path())
        .args(&["-p", "dictionary.tsv", "one.txt", "three.txt"])
        .matches()
        .stdout_eq("one.txt: 2 11\nthree.txt: 2 4\n");
}

#[test]
fn malformed_patterns_file_names_the_line() {
    let project = project();
    project.file("dictionary.tsv", "1\tabc\nnot-a-pair\n");
    scan()
        .pwd(project.path())
        .args(&["-p", "dictionary.tsv", "one.txt"])
        .exits(2)
        .stderr_has("line 2");
}

#[test]
fn inline_pattern_requires_payload() {
    scan()
        .args(&["-e", "abc"])
        .exits(2)
        .stderr_has("PAYLOAD:PATTERN");
}

#[test]
fn inline_pattern_splits_on_first_colon() {
    scan()
        .args(&["-e", "5:a:b"])
        .stdin("xa:by")
        .matches()
        .stdout_eq("-: 5\n");
}

#[test]
fn empty_dictionary_warns_and_matches_nothing() {
    scan()
        .stdin("anything")
        .no_matches()
        .stderr_has("no patterns given");
}

// =============================================================================
// REGEX BACKEND
// =============================================================================

#[test]
fn glob_syntax_matches_wildcards() {
    scan()
        .args(&["-b", "regex", "--syntax", "glob", "-e", "1:a*c", "-e", "2:x?z"])
        .stdin("..abbbc..")
        .matches()
        .stdout_eq("-: 1\n");
}

#[test]
fn literal_syntax_escapes_metacharacters() {
    scan()
        .args(&["-b", "regex", "-e", "1:a.c"])
        .stdin("abc")
        .no_matches();
}

#[test]
fn invalid_regex_exits_two() {
    scan()
        .args(&["-b", "regex", "--syntax", "regex", "-e", "1:a("])
        .stdin("a(")
        .exits(2)
        .stderr_has("invalid pattern");
}

// =============================================================================
// JSON OUTPUT
// =============================================================================

#[test]
fn json_reports_every_input() {
    let project = project();
    let result = scan()
        .pwd(project.path())
        .args(DICTIONARY)
        .args(&["-b", "trie", "one.txt", "two.txt"])
        .json()
        .matches();
    let json = result.json();

    assert_eq!(json["backend"], "trie");
    assert_eq!(json["patterns"], 4);
    assert_eq!(json["matched"], true);

    let inputs = json["inputs"].as_array().unwrap();
    assert_eq!(inputs.len(), 2);
    assert_eq!(inputs[0]["input"], "one.txt");
    assert_eq!(inputs[0]["size"], 10);
    assert_eq!(inputs[0]["payloads"], serde_json::json!([2, 3, 11]));
    assert_eq!(inputs[1]["payloads"], serde_json::json!([]));
}

#[test]
fn json_without_matches_exits_one() {
    let result = scan()
        .args(&["-e", "1:needle"])
        .stdin("haystack")
        .json()
        .no_matches();
    assert_eq!(result.json()["matched"], false);
}

#[test]
fn zero_max_text_size_flag_is_rejected() {
    scan()
        .args(&["-e", "1:abc", "--max-text-size", "0"])
        .exits(2)
        .stderr_has("--max-text-size");
}
