//! Keyword filtering of generated results

use memchr::memmem;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::fmt;

use crate::core::constants::matching;

/// How keywords combine when testing a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MatchMode {
    /// At least one keyword is a substring (`--find`)
    Any,
    /// Every keyword is a substring (`--findX`)
    All,
}

impl MatchMode {
    /// Label used in generated file names and console output
    pub fn label(&self) -> &'static str {
        match self {
            MatchMode::Any => "Find",
            MatchMode::All => "FindX",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Split a comma-separated keyword specification into trimmed, non-empty keywords.
pub fn parse_keywords(spec: &str) -> Vec<String> {
    spec.split(matching::KEYWORD_SEPARATOR)
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// Case-sensitive substring matcher over a parsed keyword list.
///
/// An empty keyword list matches nothing in either mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordMatcher {
    keywords: Vec<String>,
}

impl KeywordMatcher {
    pub fn parse(spec: &str) -> Self {
        Self {
            keywords: parse_keywords(spec),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn matches(&self, candidate: &str, mode: MatchMode) -> bool {
        if self.keywords.is_empty() {
            return false;
        }

        let haystack = candidate.as_bytes();
        let contains = |keyword: &String| memmem::find(haystack, keyword.as_bytes()).is_some();
        match mode {
            MatchMode::Any => self.keywords.iter().any(contains),
            MatchMode::All => self.keywords.iter().all(contains),
        }
    }

    /// Matching candidates without repeats, in first-seen order
    pub fn filter<S: AsRef<str>>(&self, candidates: &[S], mode: MatchMode) -> Vec<String> {
        if self.keywords.is_empty() {
            return Vec::new();
        }

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        candidates
            .iter()
            .map(AsRef::<str>::as_ref)
            .filter(|candidate| self.matches(candidate, mode) && seen.insert(*candidate))
            .map(str::to_string)
            .collect()
    }

    /// File name for exported matches: `<Mode>-<kw1-kw2-...>.txt`
    pub fn output_file_name(&self, mode: MatchMode) -> String {
        let joined = self
            .keywords
            .join(matching::FILE_KEYWORD_JOINER)
            .replace(matching::UNSAFE_FILE_CHARS, &matching::FILE_CHAR_REPLACEMENT.to_string());

        format!("{}-{}.{}", mode.label(), joined, matching::FILE_EXTENSION)
    }
}

/// Candidates containing any keyword of `spec`
pub fn find_any<S: AsRef<str>>(spec: &str, candidates: &[S]) -> Vec<String> {
    KeywordMatcher::parse(spec).filter(candidates, MatchMode::Any)
}

/// Candidates containing every keyword of `spec`
pub fn find_all<S: AsRef<str>>(spec: &str, candidates: &[S]) -> Vec<String> {
    KeywordMatcher::parse(spec).filter(candidates, MatchMode::All)
}

/// Name of the export file for a mode and keyword specification
pub fn output_file_name(mode: MatchMode, spec: &str) -> String {
    KeywordMatcher::parse(spec).output_file_name(mode)
}
