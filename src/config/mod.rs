//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::{config_files, delimiters, matching, output_formats};
use crate::core::error::{Result, UrlShortError};
use crate::generation::pipeline::PipelineOptions;
use crate::generation::{Appends, parse_delimiters};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Comma-separated delimiters used for truncation
    pub delimiters: Option<String>,

    /// Also split at path segments (/)
    pub split_path: Option<bool>,

    /// Drop duplicate results
    pub no_duplicates: Option<bool>,

    /// String appended to each variation
    pub append: Option<String>,

    /// File of strings appended to each variation (overrides `append`)
    pub append_file: Option<String>,

    /// Suppress banner and per-line echo
    pub quiet: Option<bool>,

    /// Enable verbose logging
    pub verbose: Option<bool>,

    /// Console output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Directory Find/FindX match files are written to
    pub find_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiters: Some(delimiters::DEFAULT_SPEC.to_string()),
            split_path: Some(false),
            no_duplicates: Some(false),
            append: None,
            append_file: None,
            quiet: Some(false),
            verbose: Some(false),
            output_format: Some(output_formats::DEFAULT.to_string()),
            find_dir: Some(matching::DEFAULT_FIND_DIR.to_string()),
        }
    }
}

impl Config {
    /// Load configuration from file, validating the result
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            UrlShortError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let parsed: Config = toml::from_str(&content).map_err(|e| {
            UrlShortError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        // Keys missing from the file keep their defaults
        let mut config = Config::default();
        config.overlay(parsed);
        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        Self::standard_locations()
            .into_iter()
            .find_map(|path| Self::load_from_file(path).ok())
            .unwrap_or_default()
    }

    /// `.urlshort.toml` in the current directory, then up to three parents
    pub fn standard_locations() -> Vec<PathBuf> {
        (0..=config_files::MAX_PARENT_LEVELS)
            .map(|level| PathBuf::from(format!("{}{}", "../".repeat(level), config_files::FILE_NAME)))
            .collect()
    }

    /// Replace every value that `other` sets
    fn overlay(&mut self, other: Config) {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if other.$field.is_some() {
                    self.$field = other.$field;
                })*
            };
        }
        take!(
            delimiters,
            split_path,
            no_duplicates,
            append,
            append_file,
            quiet,
            verbose,
            output_format,
            find_dir
        );
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        // Generation
        if let Some(ref delimiters) = cli_config.delimiters {
            self.delimiters = Some(delimiters.clone());
        }
        if cli_config.split_path {
            self.split_path = Some(true);
        }
        if cli_config.no_duplicates {
            self.no_duplicates = Some(true);
        }
        if let Some(ref append) = cli_config.append {
            self.append = Some(append.clone());
        }
        if let Some(ref append_file) = cli_config.append_file {
            self.append_file = Some(append_file.clone());
        }

        // Output & format
        if cli_config.quiet {
            self.quiet = Some(true);
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if let Some(ref find_dir) = cli_config.find_dir {
            self.find_dir = Some(find_dir.clone());
        }
    }

    pub fn delimiter_spec(&self) -> &str {
        self.delimiters
            .as_deref()
            .unwrap_or(delimiters::DEFAULT_SPEC)
    }

    /// Delimiters after parsing and optional path splitting
    pub fn parsed_delimiters(&self) -> Vec<String> {
        parse_delimiters(self.delimiter_spec(), self.split_path.unwrap_or(false))
    }

    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    pub fn find_dir(&self) -> &Path {
        Path::new(
            self.find_dir
                .as_deref()
                .unwrap_or(matching::DEFAULT_FIND_DIR),
        )
    }

    /// Pipeline options for this configuration and the loaded payloads
    pub fn pipeline_options(&self, payloads: Vec<String>) -> PipelineOptions {
        PipelineOptions {
            delimiters: self.parsed_delimiters(),
            no_duplicates: self.no_duplicates.unwrap_or(false),
            appends: Appends::new(self.append.clone(), payloads),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate output format
        if let Some(ref format) = self.output_format {
            match format.as_str() {
                f if output_formats::ALL.contains(&f) => {}
                _ => {
                    return Err(UrlShortError::Config(format!(
                        "Invalid output format '{format}'. Expected one of: {}.",
                        output_formats::ALL.join(", ")
                    )));
                }
            }
        }

        // Validate find directory
        if let Some(ref find_dir) = self.find_dir
            && find_dir.trim().is_empty()
        {
            return Err(UrlShortError::Config(
                "Find directory cannot be empty. Use '.' for the current directory."
                    .to_string(),
            ));
        }

        // Validate append file path
        if let Some(ref append_file) = self.append_file
            && append_file.trim().is_empty()
        {
            return Err(UrlShortError::Config(
                "Append file path cannot be empty.".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Input & output
    pub input_file: Option<String>,  // --file
    pub output_file: Option<String>, // --output

    // Generation
    pub delimiters: Option<String>,  // --delimiters
    pub split_path: bool,            // --split-path
    pub no_duplicates: bool,         // --no-duplicates
    pub append: Option<String>,      // --append
    pub append_file: Option<String>, // --append-file

    // Matching
    pub find: Option<String>,     // --find
    pub find_all: Option<String>, // --findX
    pub find_dir: Option<String>, // --find-dir

    // Output & format
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
