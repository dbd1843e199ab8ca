use crate::config::Config;
use crate::matching::MatchMode;
use log::{LevelFilter, debug, error, info, warn};
use std::path::Path;

/// Level forced onto the logger, or `None` when a `RUST_LOG` filter decides.
///
/// Quiet always silences logging; otherwise an explicit `RUST_LOG` wins over
/// the verbosity flag.
pub fn level_override(verbose: bool, quiet: bool, env_filter: Option<&str>) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if env_filter.is_some_and(|filter| !filter.trim().is_empty()) {
        None
    } else if verbose {
        Some(LevelFilter::Debug)
    } else {
        Some(LevelFilter::Off) // Only show structured logs in verbose mode
    }
}

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let env_filter = std::env::var(env_logger::DEFAULT_FILTER_ENV).ok();
    let level = level_override(verbose, quiet, env_filter.as_deref());

    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }

    // The logger may already be installed
    let _ = builder
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level override: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    info!(
        "Configuration: delimiters={:?}, split_path={}, no_duplicates={}",
        config.parsed_delimiters(),
        config.split_path.unwrap_or(false),
        config.no_duplicates.unwrap_or(false)
    );
    info!(
        "Append: string={:?}, file={:?}",
        config.append.as_deref().unwrap_or(""),
        config.append_file.as_deref().unwrap_or("")
    );
    info!(
        "Output: format={}, find_dir={}",
        config.output_format(),
        config.find_dir().display()
    );
}

/// Log information about a line file that was read
pub fn log_input_info<P: AsRef<Path>>(kind: &str, line_count: usize, path: P) {
    info!(
        "Read {line_count} {kind} line(s) from {}",
        path.as_ref().display()
    );
}

/// Log pipeline completion
pub fn log_generation_complete(inputs: usize, results: usize, duplicates: usize, duration_ms: u128) {
    info!(
        "Generation complete: {results} result(s) from {inputs} URL(s), {duplicates} duplicate(s) skipped ({duration_ms}ms)"
    );
}

/// Log the outcome of a keyword match pass
pub fn log_match_result(mode: MatchMode, keywords: &[String], matches: usize) {
    if matches == 0 {
        debug!("{mode}: no matches for {keywords:?}");
    } else {
        info!("{mode}: {matches} match(es) for {keywords:?}");
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
