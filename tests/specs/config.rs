//! Specs for `trawl.toml` handling.

use crate::prelude::*;

#[test]
fn config_selects_backend_and_patterns() {
    let project = Project::empty();
    project.config(
        r#"
[index]
backend = "linear"

[[pattern]]
pattern = "needle"
payload = 9
"#,
    );
    let result = scan().pwd(project.path()).stdin("a needle here").json().matches();
    let json = result.json();
    assert_eq!(json["backend"], "linear");
    assert_eq!(json["inputs"][0]["payloads"], serde_json::json!([9]));
}

#[test]
fn flags_override_config() {
    let project = Project::empty();
    project.config("[index]\nbackend = \"linear\"\n");
    let result = scan()
        .pwd(project.path())
        .args(&["-b", "trie", "-e", "1:x"])
        .stdin("x")
        .json()
        .matches();
    assert_eq!(result.json()["backend"], "trie");
}

#[test]
fn config_and_inline_patterns_are_merged() {
    let project = Project::empty();
    project.config("[[pattern]]\npattern = \"cat\"\npayload = 1\n");
    scan()
        .pwd(project.path())
        .args(&["-e", "2:dog"])
        .stdin("cat and dog")
        .matches()
        .stdout_eq("-: 1 2\n");
}

#[test]
fn regex_syntax_from_config() {
    let project = Project::empty();
    project.config(
        r#"
[index]
backend = "regex"

[regex]
syntax = "regex"
"#,
    );
    scan()
        .pwd(project.path())
        .args(&["-e", r"3:\d{3}"])
        .stdin("call 555 now")
        .matches()
        .stdout_eq("-: 3\n");
}

#[test]
fn max_text_size_from_config() {
    let project = Project::empty();
    project.config("[index]\nmax_text_size = 3\n");
    project.file("input.txt", "abcdef");
    scan()
        .pwd(project.path())
        .args(&["-e", "1:abc", "input.txt"])
        .exits(2)
        .stderr_has("file too large");
}

#[test]
fn explicit_config_path_is_used() {
    let project = Project::empty();
    project.file("conf/custom.toml", "version = 1\n[index]\nbackend = \"trie\"\n");
    let result = scan()
        .pwd(project.path())
        .args(&["-C", "conf/custom.toml", "-e", "1:x"])
        .stdin("x")
        .json()
        .matches();
    assert_eq!(result.json()["backend"], "trie");
}

#[test]
fn config_path_from_environment() {
    let project = Project::empty();
    project.file("env.toml", "version = 1\n[index]\nbackend = \"linear\"\n");
    let result = scan()
        .pwd(project.path())
        .env("TRAWL_CONFIG", "env.toml")
        .args(&["-e", "1:x"])
        .stdin("x")
        .json()
        .matches();
    assert_eq!(result.json()["backend"], "linear");
}

// =============================================================================
// ERRORS AND WARNINGS
// =============================================================================

#[test]
fn missing_explicit_config_exits_two() {
    let project = Project::empty();
    scan()
        .pwd(project.path())
        .args(&["-C", "nope.toml", "-e", "1:x"])
        .exits(2)
        .stderr_has("config file not found");
}

#[test]
fn unsupported_version_exits_two() {
    let project = Project::empty();
    project.config("version = 2\n");
    scan()
        .pwd(project.path())
        .args(&["-e", "1:x"])
        .exits(2)
        .stderr_has("unsupported config version 2");
}

#[test]
fn missing_version_exits_two() {
    let project = Project::empty();
    project.file("trawl.toml", "[index]\nbackend = \"trie\"\n");
    scan()
        .pwd(project.path())
        .args(&["-e", "1:x"])
        .exits(2)
        .stderr_has("missing required field: version");
}

#[test]
fn unknown_top_level_key_warns() {
    let project = Project::empty();
    project.config("colour = true\n");
    scan()
        .pwd(project.path())
        .args(&["-e", "1:x"])
        .stdin("x")
        .matches()
        .stderr_has("unrecognized field `colour`");
}

#[test]
fn unknown_nested_key_exits_two() {
    let project = Project::empty();
    project.config("[index]\nbakend = \"trie\"\n");
    scan()
        .pwd(project.path())
        .args(&["-e", "1:x"])
        .exits(2)
        .stderr_has("bakend");
}

#[test]
fn zero_max_text_size_exits_two() {
    let project = Project::empty();
    project.config("[index]\nmax_text_size = 0\n");
    scan()
        .pwd(project.path())
        .args(&["-e", "1:x"])
        .exits(2)
        .stderr_has("max_text_size");
}
