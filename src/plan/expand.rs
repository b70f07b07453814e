// src/plan/expand.rs

//! Shell-style glob expansion using `globset` + `walkdir`.
//!
//! Rules:
//! - `*`, `?` and `[...]` stay within one path component; `**` crosses them.
//! - A pattern with no glob metacharacters is passed through untouched.
//! - A name starting with `.` only matches a component that starts with `.`.
//!   Below `**`, hidden directories are never entered.
//! - Symlinked directories are walked through, except below `**`.
//! - A trailing `/` only matches directories.
//! - Matches keep the pattern's own separators and come back sorted.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::errors::{CheckseqError, Result};
use crate::types::UnmatchedGlobBehaviour;

const GLOB_META: &[char] = &['*', '?', '[', '{'];

/// Returns true if `s` contains any glob metacharacter.
pub fn has_glob_meta(s: &str) -> bool {
    s.contains(GLOB_META)
}

/// Compile a pattern with shell semantics for `/`.
pub(crate) fn compile_pattern(pattern: &str) -> Result<GlobMatcher> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|source| CheckseqError::InvalidGlob {
            pattern: pattern.to_string(),
            source,
        })
}

/// A pattern cut at its first glob component.
///
/// `prefix` is the literal text before that component, separators included
/// (`"scripts//"` for `"scripts//*.py"`). `seps[i]` is the separator run
/// between `rest[i]` and `rest[i + 1]`; `trailing` is whatever follows the
/// last component.
#[derive(Debug, PartialEq, Eq)]
struct PatternSplit<'a> {
    prefix: &'a str,
    rest: Vec<&'a str>,
    seps: Vec<&'a str>,
    trailing: &'a str,
}

impl PatternSplit<'_> {
    fn globstar_at(&self) -> Option<usize> {
        self.rest.iter().position(|c| c.contains("**"))
    }

    fn recursive(&self) -> bool {
        self.globstar_at().is_some()
    }

    fn dirs_only(&self) -> bool {
        !self.trailing.is_empty()
    }

    /// Rest of the pattern with single `/` separators, for matching.
    fn match_pattern(&self) -> String {
        self.rest.join("/")
    }

    /// Whether a hidden entry at walk depth `depth` (1-based) may match.
    fn allows_hidden_at(&self, depth: usize, is_dir: bool) -> bool {
        match self.globstar_at() {
            Some(star) if depth > star => {
                !is_dir && self.rest.last().is_some_and(|c| c.starts_with('.'))
            }
            _ => self
                .rest
                .get(depth.wrapping_sub(1))
                .is_some_and(|c| c.starts_with('.')),
        }
    }

    /// Spell a match the way the pattern spells its separators.
    fn render(&self, components: &[&str]) -> String {
        let mut out = String::from(self.prefix);
        let aligned = components.len() == self.rest.len();
        for (i, component) in components.iter().enumerate() {
            if i > 0 {
                out.push_str(if aligned { self.seps[i - 1] } else { "/" });
            }
            out.push_str(component);
        }
        out.push_str(self.trailing);
        out
    }
}

/// Byte ranges of the non-empty components of `pattern`.
fn component_spans(pattern: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;
    for (i, b) in pattern.bytes().enumerate() {
        match (b == b'/', start) {
            (true, Some(s)) => {
                spans.push((s, i));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, pattern.len()));
    }
    spans
}

fn split_pattern(pattern: &str) -> PatternSplit<'_> {
    let spans = component_spans(pattern);
    let first_meta = spans
        .iter()
        .position(|&(s, e)| has_glob_meta(&pattern[s..e]))
        .unwrap_or(spans.len());

    let tail = &spans[first_meta..];
    let prefix = tail.first().map_or(pattern, |&(s, _)| &pattern[..s]);
    let rest = tail.iter().map(|&(s, e)| &pattern[s..e]).collect();
    let seps = tail
        .windows(2)
        .map(|w| &pattern[w[0].1..w[1].0])
        .collect();
    let trailing = tail.last().map_or("", |&(_, e)| &pattern[e..]);

    PatternSplit {
        prefix,
        rest,
        seps,
        trailing,
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

/// Expand a single pattern relative to `root`.
///
/// Returned paths are relative to `root` (or absolute, for absolute
/// patterns), spelled the same way the pattern is.
pub fn expand_pattern(
    root: &Path,
    pattern: &str,
    unmatched: UnmatchedGlobBehaviour,
) -> Result<Vec<String>> {
    if !has_glob_meta(pattern) {
        return Ok(vec![pattern.to_string()]);
    }

    compile_pattern(pattern)?;
    let split = split_pattern(pattern);
    let matcher = compile_pattern(&split.match_pattern())?;

    let walk_dir: PathBuf = if split.prefix.is_empty() {
        root.to_path_buf()
    } else {
        root.join(split.prefix)
    };

    let mut matches = Vec::new();

    if walk_dir.is_dir() {
        let recursive = split.recursive();
        let mut walker = WalkDir::new(&walk_dir)
            .min_depth(1)
            .follow_links(!recursive);
        if !recursive {
            walker = walker.max_depth(split.rest.len());
        }

        let entries = walker.sort_by_file_name().into_iter().filter_entry(|e| {
            e.depth() == 0
                || !is_hidden(e)
                || split.allows_hidden_at(e.depth(), e.file_type().is_dir())
        });

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(pattern = %pattern, error = %err, "skipping unreadable path during glob expansion");
                    continue;
                }
            };

            if split.dirs_only() && !entry.file_type().is_dir() {
                continue;
            }

            let Ok(rel) = entry.path().strip_prefix(&walk_dir) else {
                continue;
            };
            let components: Option<Vec<&str>> =
                rel.components().map(|c| c.as_os_str().to_str()).collect();
            let Some(components) = components else {
                debug!(path = ?entry.path(), "skipping non UTF-8 path");
                continue;
            };

            if matcher.is_match(components.join("/")) {
                matches.push(split.render(&components));
            }
        }
    } else {
        debug!(pattern = %pattern, dir = ?walk_dir, "glob base directory does not exist");
    }

    if matches.is_empty() {
        return Ok(match unmatched {
            UnmatchedGlobBehaviour::Literal => {
                debug!(pattern = %pattern, "no matches, passing pattern through");
                vec![pattern.to_string()]
            }
            UnmatchedGlobBehaviour::Drop => {
                debug!(pattern = %pattern, "no matches, dropping pattern");
                Vec::new()
            }
        });
    }

    matches.sort();
    Ok(matches)
}

/// Expand every pattern of a target in order, dropping repeated paths.
pub fn expand_target(
    root: &Path,
    patterns: &[String],
    unmatched: UnmatchedGlobBehaviour,
) -> Result<Vec<String>> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut paths: Vec<String> = Vec::new();
    for pattern in patterns {
        for path in expand_pattern(root, pattern, unmatched)? {
            if seen.insert(path.clone()) {
                paths.push(path);
            }
        }
    }
    Ok(paths)
}
