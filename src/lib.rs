//! urlshort - expand URLs into delimiter-truncated variations
//!
//! Every input URL is truncated after each occurrence of the configured
//! delimiters, optionally suffixed with payloads, deduplicated and filtered
//! by keywords. The modules are organized as:
//!
//! - `core`: error handling and constants
//! - `generation`: variation generation, append expansion and the pipeline
//! - `matching`: Find/FindX keyword filtering and match export
//! - `files`: line-oriented file reading and writing
//! - `config`: TOML configuration and CLI merging
//! - `reporting`: structured logging
//! - `ui`: CLI definition, banner, console output and completions

pub mod config;
pub mod core;
pub mod files;
pub mod generation;
pub mod matching;
pub mod reporting;
pub mod ui;

// Re-export commonly used items
pub use config::{CliConfig, Config};
pub use crate::core::{Result, UrlShortError};
pub use generation::{
    Appends, Pipeline, PipelineOptions, PipelineReport, VariationGenerator, generate_variations,
    parse_delimiters, process_urls,
};
pub use matching::{KeywordMatcher, MatchMode, MatchReport, find_all, find_any};
