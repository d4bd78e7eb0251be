// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles trawl.toml parsing with version validation and unknown key warnings.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::backend::{BackendKind, PatternSyntax, RegexOptions, regex_set::DEFAULT_SIZE_LIMIT};
use crate::error::{Error, Result};

/// Config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "trawl.toml";

/// Supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Default cap on a single scanned input (100MB).
pub const DEFAULT_MAX_TEXT_SIZE: u64 = 100 * 1024 * 1024;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "index", "regex", "pattern"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    #[serde(default)]
    pub index: IndexConfig,

    #[serde(default)]
    pub regex: RegexConfig,

    /// Patterns loaded before any patterns file.
    #[serde(default, rename = "pattern")]
    pub patterns: Vec<PatternEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            index: IndexConfig::default(),
            regex: RegexConfig::default(),
            patterns: Vec::new(),
        }
    }
}

/// `[index]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndexConfig {
    /// Backend used by `scan` (default: aho-corasick).
    #[serde(default)]
    pub backend: BackendKind,

    /// Inputs larger than this many bytes are rejected.
    #[serde(default = "IndexConfig::default_max_text_size")]
    pub max_text_size: u64,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            max_text_size: Self::default_max_text_size(),
        }
    }
}

impl IndexConfig {
    fn default_max_text_size() -> u64 {
        DEFAULT_MAX_TEXT_SIZE
    }
}

/// `[regex]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegexConfig {
    #[serde(default)]
    pub syntax: PatternSyntax,

    /// Compiled-size limit for the whole regex set.
    #[serde(default = "RegexConfig::default_size_limit")]
    pub size_limit: usize,
}

impl Default for RegexConfig {
    fn default() -> Self {
        Self {
            syntax: PatternSyntax::default(),
            size_limit: Self::default_size_limit(),
        }
    }
}

impl RegexConfig {
    fn default_size_limit() -> usize {
        DEFAULT_SIZE_LIMIT
    }

    /// Options handed to the regex backend.
    pub fn options(&self) -> RegexOptions {
        RegexOptions {
            syntax: self.syntax,
            size_limit: self.size_limit,
        }
    }
}

/// One `[[pattern]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternEntry {
    pub pattern: String,
    pub payload: u32,
}

fn config_error(path: &Path) -> impl Fn(toml::de::Error) -> Error + '_ {
    move |e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    }
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content, warning on unknown top-level keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let version_check: VersionOnly = toml::from_str(content).map_err(config_error(path))?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})\n  Upgrade trawl to use this config.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    for key in unknown_keys(content, path)? {
        warn_unknown_key(path, &key);
    }

    let config: Config = toml::from_str(content).map_err(config_error(path))?;
    if config.index.max_text_size == 0 {
        return Err(Error::Config {
            message: "index.max_text_size must be greater than zero".to_string(),
            path: Some(path.to_path_buf()),
        });
    }
    tracing::debug!(
        path = %path.display(),
        backend = %config.index.backend,
        patterns = config.patterns.len(),
        "loaded config"
    );
    Ok(config)
}

fn unknown_keys(content: &str, path: &Path) -> Result<Vec<String>> {
    let table: toml::Table = toml::from_str(content).map_err(config_error(path))?;
    Ok(table
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .cloned()
        .collect())
}

fn warn_unknown_key(path: &Path, key: &str) {
    tracing::warn!(path = %path.display(), key, "unrecognized config field");
    eprintln!(
        "trawl: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

/// Resolve config path from the CLI flag / env var, or the working directory.
///
/// Priority:
/// 1. CLI flag `-C`/`--config` (handled by clap with env = "TRAWL_CONFIG")
/// 2. `trawl.toml` in `cwd`
/// 3. None (use defaults)
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            if path.exists() {
                Ok(Some(path.to_path_buf()))
            } else {
                Err(Error::Config {
                    message: format!("config file not found: {}", path.display()),
                    path: Some(path.to_path_buf()),
                })
            }
        }
        None => {
            let candidate = cwd.join(CONFIG_FILE);
            Ok(candidate.exists().then_some(candidate))
        }
    }
}

/// Resolve and load the config, falling back to defaults.
pub fn load_or_default(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    match resolve_config(explicit, cwd)? {
        Some(path) => load(&path),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
