//! Find/FindX passes and their match files

use std::path::{Path, PathBuf};

use crate::core::error::Result;
use crate::files::write_lines;
use crate::matching::keywords::{KeywordMatcher, MatchMode};

/// Matches of one keyword pass and the file they belong in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    pub mode: MatchMode,
    pub keywords: Vec<String>,
    pub file: PathBuf,
    pub matches: Vec<String>,
}

impl MatchReport {
    /// Run `mode` with keyword `spec` over `candidates`; the file lives in `dir`
    pub fn build<S: AsRef<str>>(mode: MatchMode, spec: &str, candidates: &[S], dir: &Path) -> Self {
        let matcher = KeywordMatcher::parse(spec);
        Self {
            mode,
            file: dir.join(matcher.output_file_name(mode)),
            matches: matcher.filter(candidates, mode),
            keywords: matcher.keywords().to_vec(),
        }
    }

    pub fn count(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Write the matches, one per line. Nothing is created when there are none.
    pub fn export(&self) -> Result<Option<usize>> {
        if self.matches.is_empty() {
            return Ok(None);
        }
        write_lines(&self.file, &self.matches).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const RESULTS: [&str; 3] = [
        "http://x/admin?token=1",
        "http://x/admin",
        "http://x/user",
    ];

    #[test]
    fn test_build__names_file_in_directory() {
        let report = MatchReport::build(MatchMode::Any, "admin, token", &RESULTS, Path::new("out"));

        assert_eq!(report.file, Path::new("out").join("Find-admin-token.txt"));
        assert_eq!(report.keywords, vec!["admin", "token"]);
        assert_eq!(report.count(), 2);
    }

    #[test]
    fn test_export__writes_matches() -> Result<()> {
        let dir = TempDir::new()?;
        let report = MatchReport::build(MatchMode::All, "admin,token", &RESULTS, dir.path());

        assert_eq!(report.export()?, Some(1));
        assert_eq!(
            fs::read_to_string(dir.path().join("FindX-admin-token.txt"))?,
            "http://x/admin?token=1\n"
        );
        Ok(())
    }

    #[test]
    fn test_export__no_matches_creates_no_file() -> Result<()> {
        let dir = TempDir::new()?;
        let report = MatchReport::build(MatchMode::Any, "nothing-here", &RESULTS, dir.path());

        assert!(report.is_empty());
        assert_eq!(report.export()?, None);
        assert!(!report.file.exists());
        Ok(())
    }

    #[test]
    fn test_export__empty_spec_matches_nothing() -> Result<()> {
        let dir = TempDir::new()?;
        let report = MatchReport::build(MatchMode::All, " ", &RESULTS, dir.path());

        assert!(report.is_empty());
        assert_eq!(report.export()?, None);
        Ok(())
    }
}
