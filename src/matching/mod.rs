//! Keyword matching
//!
//! This module filters generated results by keyword presence and
//! exports the matches to automatically named files.

pub mod export;
pub mod keywords;

// Re-export commonly used items
pub use export::MatchReport;
pub use keywords::{
    KeywordMatcher, MatchMode, find_all, find_any, output_file_name, parse_keywords,
};
