//! Variation → append → dedup pipeline over a list of input URLs

use log::{debug, info};
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::core::constants::delimiters;
use crate::generation::append::Appends;
use crate::generation::variations::VariationGenerator;

/// Parse a comma-separated delimiter specification.
///
/// Entries are trimmed and empty entries dropped. With `split_path` the path
/// separator is appended unless the specification already names it.
pub fn parse_delimiters(spec: &str, split_path: bool) -> Vec<String> {
    let mut parsed: Vec<String> = spec
        .split(delimiters::LIST_SEPARATOR)
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect();

    if split_path && !parsed.iter().any(|d| d == delimiters::PATH) {
        parsed.push(delimiters::PATH.to_string());
    }

    parsed
}

/// Settings for one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    pub delimiters: Vec<String>,
    pub no_duplicates: bool,
    pub appends: Appends,
}

impl PipelineOptions {
    pub fn from_spec(
        delimiter_spec: &str,
        split_path: bool,
        no_duplicates: bool,
        appends: Appends,
    ) -> Self {
        Self {
            delimiters: parse_delimiters(delimiter_spec, split_path),
            no_duplicates,
            appends,
        }
    }
}

/// Outcome of a pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineReport {
    /// Number of input URLs processed
    pub inputs: usize,
    /// Final strings in emission order
    pub results: Vec<String>,
    /// Strings dropped because they were already emitted
    pub duplicates_skipped: usize,
}

impl PipelineReport {
    pub fn total(&self) -> usize {
        self.results.len()
    }
}

#[derive(Debug, Clone)]
pub struct Pipeline {
    generator: VariationGenerator,
    appends: Appends,
    no_duplicates: bool,
}

impl Pipeline {
    pub fn new(options: PipelineOptions) -> Self {
        let generator = VariationGenerator::new(options.delimiters);
        Self {
            generator,
            appends: options.appends,
            no_duplicates: options.no_duplicates,
        }
    }

    pub fn has_delimiters(&self) -> bool {
        self.generator.has_delimiters()
    }

    pub fn delimiters(&self) -> &[String] {
        self.generator.delimiters()
    }

    /// Run every URL through variation generation and append expansion.
    ///
    /// Results keep input order, then variation discovery order, then
    /// payload order. With deduplication only the first occurrence of a
    /// string is kept.
    pub fn run<S: AsRef<str>>(&self, urls: &[S]) -> PipelineReport {
        info!(
            "Processing {} URL(s) with delimiters {:?}",
            urls.len(),
            self.generator.delimiters()
        );

        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut report = PipelineReport {
            inputs: urls.len(),
            ..Default::default()
        };

        for url in urls {
            let url = url.as_ref();
            let variations = self.generator.generate(url);
            report
                .results
                .reserve(variations.len() * self.appends.fan_out());

            for variation in &variations {
                for candidate in self.appends.expand(variation) {
                    if self.no_duplicates && !seen.insert(candidate.clone()) {
                        report.duplicates_skipped += 1;
                        continue;
                    }
                    report.results.push(candidate);
                }
            }
        }

        debug!(
            "Pipeline produced {} result(s), {} duplicate(s) skipped",
            report.results.len(),
            report.duplicates_skipped
        );
        report
    }
}

/// One-shot helper running a pipeline built from a delimiter specification.
pub fn process_urls<S: AsRef<str>>(
    urls: &[S],
    delimiter_spec: &str,
    no_duplicates: bool,
    split_path: bool,
    appends: Appends,
) -> Vec<String> {
    let options = PipelineOptions::from_spec(delimiter_spec, split_path, no_duplicates, appends);
    Pipeline::new(options).run(urls).results
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_parse_delimiters__trims_and_drops_empty() {
        assert_eq!(parse_delimiters(" = , & ,,", false), vec!["=", "&"]);
        assert!(parse_delimiters("", false).is_empty());
        assert!(parse_delimiters(" , ", false).is_empty());
    }

    #[test]
    fn test_parse_delimiters__split_path_adds_slash_once() {
        assert_eq!(parse_delimiters("=", true), vec!["=", "/"]);
        assert_eq!(parse_delimiters("/,=", true), vec!["/", "="]);
        assert_eq!(parse_delimiters("", true), vec!["/"]);
    }

    #[test]
    fn test_run__end_to_end_scenario() {
        let results = process_urls(
            &["http://a.com/x=1/y=2"],
            "=,/",
            false,
            false,
            Appends::none(),
        );
        let set: BTreeSet<&str> = results.iter().map(String::as_str).collect();

        let expected: BTreeSet<&str> = [
            "http://a.com/x=1/y=2",
            "http://a.com/x=",
            "http://a.com/x=1/y=",
            "http:/",
            "http://",
            "http://a.com/",
            "http://a.com/x=1/",
        ]
        .into_iter()
        .collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn test_run__appends_follow_each_variation() {
        let appends = Appends::payloads(vec!["&p1=1".to_string(), "&p2=2".to_string()]);
        let results = process_urls(&["a=b"], "=", false, false, appends);

        assert_eq!(results, vec!["a=b&p1=1", "a=b&p2=2", "a=&p1=1", "a=&p2=2"]);
    }

    #[test]
    fn test_run__duplicates_kept_without_dedup() {
        let results = process_urls(&["a=1", "a=2"], "=", false, false, Appends::none());
        assert_eq!(results, vec!["a=1", "a=", "a=2", "a="]);
    }

    #[test]
    fn test_run__dedup_keeps_first_occurrence() {
        let options = PipelineOptions::from_spec("=", false, true, Appends::none());
        let report = Pipeline::new(options).run(&["a=1", "a=2", "a=1"]);

        assert_eq!(report.results, vec!["a=1", "a=", "a=2"]);
        assert_eq!(report.duplicates_skipped, 3);
        assert_eq!(report.inputs, 3);
    }

    #[test]
    fn test_run__dedup_preserves_distinct_set() {
        let urls = ["http://x/a=1&b=2", "http://x/a=1&c=3", "http://x/a=1&b=2"];
        let with = process_urls(&urls, "=,&", true, true, Appends::single("'"));
        let without = process_urls(&urls, "=,&", false, true, Appends::single("'"));

        let with_set: BTreeSet<&String> = with.iter().collect();
        let without_set: BTreeSet<&String> = without.iter().collect();
        assert_eq!(with_set, without_set);
        assert_eq!(with.len(), with_set.len());
    }

    #[test]
    fn test_run__no_delimiters_only_appends() {
        let options = PipelineOptions::from_spec(" , ", false, false, Appends::single("X"));
        let pipeline = Pipeline::new(options);

        assert!(!pipeline.has_delimiters());
        assert_eq!(pipeline.run(&["a=b"]).results, vec!["a=bX"]);
    }

    #[test]
    fn test_run__empty_input() {
        let report = Pipeline::new(PipelineOptions::default()).run::<String>(&[]);
        assert_eq!(report, PipelineReport::default());
        assert_eq!(report.total(), 0);
    }
}
