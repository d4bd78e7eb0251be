// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Regular-expression set backend.
//!
//! All patterns are compiled into one [`RegexSet`] database on `build`, and
//! the whole database is swapped in atomically. Each index owns its database;
//! nothing is shared between instances.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;

use regex::bytes::{RegexBuilder, RegexSet, RegexSetBuilder};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::index::{Matches, PatternIndex, Payload, Publish, Searcher};
use crate::snapshot::{Published, Reader};

pub(crate) const NAME: &str = "regex";

/// Default compiled-size limit for the whole set (10MB).
pub const DEFAULT_SIZE_LIMIT: usize = 10 * 1024 * 1024;

/// How pattern bytes are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PatternSyntax {
    /// Bytes are matched exactly.
    #[default]
    Literal,
    /// Pattern is a regular expression (must be UTF-8).
    Regex,
    /// Shell-style wildcards: `*` matches any run, `?` any single character,
    /// `\` escapes the next character.
    Glob,
}

impl PatternSyntax {
    /// Translate a stored pattern into regex source.
    pub fn translate(self, pattern: &[u8]) -> Result<String> {
        match self {
            PatternSyntax::Literal => Ok(literal_source(pattern)),
            PatternSyntax::Regex => Ok(utf8(pattern)?.to_string()),
            PatternSyntax::Glob => Ok(glob_source(utf8(pattern)?)),
        }
    }
}

fn utf8(pattern: &[u8]) -> Result<&str> {
    std::str::from_utf8(pattern).map_err(|e| Error::Pattern {
        pattern: String::from_utf8_lossy(pattern).into_owned(),
        message: format!("not valid UTF-8: {}", e),
    })
}

/// Byte-exact regex: printable ASCII is escaped as needed, everything else
/// becomes a `\xNN` byte escape under `(?-u)`.
fn literal_source(pattern: &[u8]) -> String {
    let mut source = String::with_capacity(pattern.len() * 2 + 5);
    source.push_str("(?-u)");
    for &byte in pattern {
        if byte.is_ascii_graphic() || byte == b' ' {
            source.push_str(&regex::escape(char::from(byte).encode_utf8(&mut [0; 4])));
        } else {
            source.push_str(&format!("\\x{:02x}", byte));
        }
    }
    source
}

fn glob_source(pattern: &str) -> String {
    let mut source = String::with_capacity(pattern.len() * 2);
    let mut escaped = false;
    for c in pattern.chars() {
        let mut buf = [0; 4];
        let text = c.encode_utf8(&mut buf);
        if escaped {
            source.push_str(&regex::escape(text));
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '*' => source.push_str(".*"),
            '?' => source.push('.'),
            _ => source.push_str(&regex::escape(text)),
        }
    }
    if escaped {
        source.push_str(r"\\");
    }
    source
}

/// Tuning for the regex backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegexOptions {
    pub syntax: PatternSyntax,
    /// Compiled-size limit passed to the regex engine.
    pub size_limit: usize,
}

impl Default for RegexOptions {
    fn default() -> Self {
        Self {
            syntax: PatternSyntax::default(),
            size_limit: DEFAULT_SIZE_LIMIT,
        }
    }
}

/// A compiled regex set and the payload of each member.
pub struct RegexDatabase<P> {
    set: RegexSet,
    payloads: Vec<P>,
    payload_count: usize,
}

impl<P: Payload> Searcher<P> for RegexDatabase<P> {
    fn find(&self, text: &[u8]) -> Matches<P> {
        self.set
            .matches(text)
            .into_iter()
            .map(|index| self.payloads[index].clone())
            .collect()
    }

    fn payload_count(&self) -> usize {
        self.payload_count
    }
}

/// Index backed by a regular-expression set.
pub struct RegexIndex<P> {
    /// Stored pairs in insertion order; set member `i` is `pairs[i]`.
    pairs: Vec<(Vec<u8>, P)>,
    /// Position of every stored pair in `pairs`.
    slots: BTreeMap<(Vec<u8>, P), usize>,
    options: RegexOptions,
    published: Published<RegexDatabase<P>>,
}

impl<P: Payload> Default for RegexIndex<P> {
    fn default() -> Self {
        Self::with_options(RegexOptions::default())
    }
}

impl<P: Payload> RegexIndex<P> {
    /// Index treating patterns as literal bytes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index treating patterns according to `syntax`.
    pub fn with_syntax(syntax: PatternSyntax) -> Self {
        Self::with_options(RegexOptions {
            syntax,
            ..RegexOptions::default()
        })
    }

    pub fn with_options(options: RegexOptions) -> Self {
        Self {
            pairs: Vec::new(),
            slots: BTreeMap::new(),
            options,
            published: Published::new(),
        }
    }

    pub fn syntax(&self) -> PatternSyntax {
        self.options.syntax
    }

    /// Name the first pattern the engine rejects on its own.
    fn blame(&self, sources: &[String], err: regex::Error) -> Error {
        for (source, (pattern, _)) in sources.iter().zip(&self.pairs) {
            if let Err(e) = RegexBuilder::new(source)
                .size_limit(self.options.size_limit)
                .build()
            {
                return Error::Pattern {
                    pattern: String::from_utf8_lossy(pattern).into_owned(),
                    message: e.to_string(),
                };
            }
        }
        Error::Pattern {
            pattern: format!("<set of {} patterns>", sources.len()),
            message: err.to_string(),
        }
    }
}

impl<P: Payload> PatternIndex<P> for RegexIndex<P> {
    fn name(&self) -> &'static str {
        NAME
    }

    fn insert(&mut self, pattern: &[u8], payload: P) -> bool {
        let pair = (pattern.to_vec(), payload);
        if self.slots.contains_key(&pair) {
            return false;
        }
        self.slots.insert(pair.clone(), self.pairs.len());
        self.pairs.push(pair);
        true
    }

    fn delete(&mut self, pattern: &[u8], payload: &P) -> bool {
        if pattern.is_empty() {
            return false;
        }
        let Some(index) = self.slots.remove(&(pattern.to_vec(), payload.clone())) else {
            return false;
        };
        self.pairs.swap_remove(index);
        // The former last pair now sits at `index`.
        if let Some(moved) = self.pairs.get(index) {
            if let Some(slot) = self.slots.get_mut(moved) {
                *slot = index;
            }
        }
        true
    }

    fn build(&mut self) -> Result<()> {
        let start = Instant::now();
        let syntax = self.options.syntax;
        let sources = self
            .pairs
            .iter()
            .map(|(pattern, _)| syntax.translate(pattern))
            .collect::<Result<Vec<_>>>()
            .inspect_err(|e| tracing::warn!(backend = NAME, "build rejected: {}", e))?;

        let set = match RegexSetBuilder::new(&sources)
            .size_limit(self.options.size_limit)
            .build()
        {
            Ok(set) => set,
            Err(err) => {
                let err = self.blame(&sources, err);
                tracing::warn!(backend = NAME, "build rejected: {}", err);
                return Err(err);
            }
        };

        let payloads: Vec<P> = self.pairs.iter().map(|(_, p)| p.clone()).collect();
        let payload_count = payloads.iter().collect::<BTreeSet<_>>().len();
        let generation = self.published.publish(RegexDatabase {
            set,
            payloads,
            payload_count,
        });

        tracing::debug!(
            backend = NAME,
            pairs = self.pairs.len(),
            syntax = ?syntax,
            generation,
            elapsed_us = start.elapsed().as_micros() as u64,
            "published regex database"
        );
        Ok(())
    }

    fn find(&self, text: &[u8]) -> Matches<P> {
        self.published.reader().find(text)
    }

    fn size(&self) -> usize {
        self.pairs.len()
    }
}

impl<P: Payload> Publish<P> for RegexIndex<P> {
    type Compiled = RegexDatabase<P>;

    fn reader(&self) -> Reader<RegexDatabase<P>> {
        self.published.reader()
    }
}

#[cfg(test)]
#[path = "regex_set_tests.rs"]
mod tests;
