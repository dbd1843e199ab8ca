//! Variation generation
//!
//! This module expands input URLs into delimiter truncations, applies
//! suffix payloads and assembles the final result list.

pub mod append;
pub mod pipeline;
pub mod variations;

// Re-export commonly used items
pub use append::Appends;
pub use pipeline::{Pipeline, PipelineOptions, PipelineReport, parse_delimiters, process_urls};
pub use variations::{VariationGenerator, generate_variations};
