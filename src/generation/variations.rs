//! Delimiter truncation of a single URL
//!
//! A variation is the URL itself or a prefix of it that ends exactly at an
//! occurrence of one of the configured delimiters. Variations are discovered
//! breadth-first: every new prefix is queued and split again against all
//! delimiters until nothing new turns up.

use log::{debug, trace};
use rustc_hash::FxHashSet;

/// Expands strings into every distinct delimiter truncation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariationGenerator {
    delimiters: Vec<String>,
}

impl VariationGenerator {
    /// Build a generator from an ordered delimiter list.
    ///
    /// Empty delimiters are discarded and repeated delimiters keep only
    /// their first position.
    pub fn new<I, S>(delimiters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cleaned: Vec<String> = Vec::new();
        for delimiter in delimiters {
            let delimiter = delimiter.into();
            if !delimiter.is_empty() && !cleaned.contains(&delimiter) {
                cleaned.push(delimiter);
            }
        }
        Self {
            delimiters: cleaned,
        }
    }

    pub fn delimiters(&self) -> &[String] {
        &self.delimiters
    }

    pub fn has_delimiters(&self) -> bool {
        !self.delimiters.is_empty()
    }

    /// Generate all variations of `url` in first-discovery order.
    ///
    /// The original string is always the first element. The vector doubles
    /// as the frontier: `head` walks it while newly found prefixes are
    /// appended behind it, so each string is expanded exactly once.
    pub fn generate(&self, url: &str) -> Vec<String> {
        let mut variations = vec![url.to_string()];
        if self.delimiters.is_empty() {
            return variations;
        }

        let mut seen: FxHashSet<String> = FxHashSet::default();
        seen.insert(url.to_string());

        let mut head = 0;
        while head < variations.len() {
            let discovered = self.truncations(&variations[head]);
            head += 1;

            for prefix in discovered {
                if seen.insert(prefix.clone()) {
                    trace!("variation discovered: {prefix}");
                    variations.push(prefix);
                }
            }
        }

        debug!("{} variation(s) for {url}", variations.len());
        variations
    }

    /// Prefixes of `value` ending at each delimiter occurrence, delimiter by
    /// delimiter in configured order. May contain `value` itself when it
    /// ends with a delimiter.
    fn truncations(&self, value: &str) -> Vec<String> {
        self.delimiters
            .iter()
            .flat_map(|delimiter| {
                value
                    .match_indices(delimiter.as_str())
                    .map(move |(index, _)| value[..index + delimiter.len()].to_string())
            })
            .collect()
    }
}

/// Convenience wrapper around [`VariationGenerator::generate`].
pub fn generate_variations<S: AsRef<str>>(url: &str, delimiters: &[S]) -> Vec<String> {
    VariationGenerator::new(delimiters.iter().map(|d| d.as_ref().to_string())).generate(url)
}
