//! Output formatting and display logic for urlshort

use serde::Serialize;
use std::path::Path;

use crate::config::Config;
use crate::core::constants::{display, output_formats};
use crate::core::error::Result;
use crate::generation::PipelineReport;
use crate::matching::MatchReport;
use crate::ui::color::{Colors, colorize, colorize_bold};

/// Settings for output formatting and display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    pub quiet: bool,
    pub verbose: bool,
    pub output_format: String,
}

impl OutputSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            quiet: config.quiet.unwrap_or(false),
            verbose: config.verbose.unwrap_or(false),
            output_format: config.output_format().to_string(),
        }
    }

    pub fn is_text(&self) -> bool {
        self.output_format == output_formats::TEXT
    }

    pub fn is_json(&self) -> bool {
        self.output_format == output_formats::JSON
    }

    pub fn should_show_banner(&self) -> bool {
        !self.quiet && self.is_text()
    }

    /// `[*]` progress lines
    pub fn should_show_status(&self) -> bool {
        !self.quiet && self.is_text()
    }

    /// One line per generated URL
    pub fn should_echo_results(&self) -> bool {
        !self.quiet && !self.is_json()
    }

    /// `[+]` outcome lines are kept in quiet mode
    pub fn should_show_outcome(&self) -> bool {
        !self.is_json()
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            quiet: false,
            verbose: false,
            output_format: output_formats::DEFAULT.to_string(),
        }
    }
}

pub fn format_status(message: &str) -> String {
    colorize(&format!("{} {message}", display::INFO_PREFIX), Colors::CYAN)
}

pub fn format_outcome(settings: &OutputSettings, message: &str) -> String {
    if settings.is_text() {
        colorize_bold(&format!("{} {message}", display::SUCCESS_PREFIX), Colors::GREEN)
    } else {
        message.to_string()
    }
}

/// Informational status line (text format, not quiet)
pub fn display_status(settings: &OutputSettings, message: &str) {
    if settings.should_show_status() {
        println!("{}", format_status(message));
    }
}

/// Outcome line, shown even in quiet mode
pub fn display_outcome(settings: &OutputSettings, message: &str) {
    if settings.should_show_outcome() {
        println!("{}", format_outcome(settings, message));
    }
}

/// Notice about something that did not happen, e.g. an empty input
pub fn display_notice(settings: &OutputSettings, message: &str) {
    if settings.is_json() {
        return;
    }
    if settings.is_text() {
        println!(
            "{}",
            colorize(&format!("{} {message}", display::INFO_PREFIX), Colors::YELLOW)
        );
    } else {
        println!("{message}");
    }
}

pub fn display_error(message: &str) {
    eprintln!("{}", colorize_bold(&format!("Error: {message}"), Colors::RED));
}

pub fn display_warning(message: &str) {
    eprintln!(
        "{}",
        colorize(&format!("{} Warning: {message}", display::WARNING_PREFIX), Colors::YELLOW)
    );
}

/// Echo generated results, one per line
pub fn display_results(settings: &OutputSettings, results: &[String]) {
    if !settings.should_echo_results() {
        return;
    }
    if settings.is_text() {
        println!(
            "{}",
            format_status(&format!("Generated {} variations:", results.len()))
        );
    }
    for url in results {
        println!("{url}");
    }
}

/// Closing line when no output file was requested
pub fn display_completion(settings: &OutputSettings, total: usize) {
    if settings.quiet {
        display_outcome(
            settings,
            &format!("Processing complete. {total} variations generated (output suppressed)."),
        );
    } else if settings.is_text() && total > 0 {
        display_outcome(settings, "Output displayed above.");
    } else if !settings.is_json() && !settings.is_text() {
        println!("{total} variations generated");
    }
}

pub fn display_file_written(settings: &OutputSettings, count: usize, path: &Path) {
    display_outcome(
        settings,
        &format!("Successfully wrote {count} URLs to {}", path.display()),
    );
}

pub fn display_no_matches(settings: &OutputSettings, report: &MatchReport) {
    if !settings.quiet {
        display_notice(
            settings,
            &format!(
                "No URLs matched the criteria for file '{}'. File not created.",
                report.file.display()
            ),
        );
    }
}

/// Structured summary printed by the JSON format
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub inputs: usize,
    pub total: usize,
    pub duplicates_skipped: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
    pub matches: Vec<MatchSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub mode: String,
    pub keywords: Vec<String>,
    pub file: Option<String>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MatchSummary {
    /// `written` is false when the file was not created
    pub fn from_report(report: &MatchReport, written: bool, error: Option<String>) -> Self {
        Self {
            mode: report.mode.label().to_string(),
            keywords: report.keywords.clone(),
            file: written.then(|| report.file.display().to_string()),
            count: report.count(),
            error,
        }
    }
}

impl RunSummary {
    pub fn new(settings: &OutputSettings, report: &PipelineReport, output_file: Option<&str>) -> Self {
        Self {
            inputs: report.inputs,
            total: report.total(),
            duplicates_skipped: report.duplicates_skipped,
            results: (!settings.quiet).then(|| report.results.clone()),
            output_file: output_file.map(str::to_string),
            matches: Vec::new(),
        }
    }
}

pub fn display_json(summary: &RunSummary) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::MatchMode;

    fn settings(format: &str, quiet: bool) -> OutputSettings {
        OutputSettings {
            quiet,
            verbose: false,
            output_format: format.to_string(),
        }
    }

    #[test]
    fn test_output_settings_text() {
        let s = settings(output_formats::TEXT, false);
        assert!(s.should_show_banner());
        assert!(s.should_show_status());
        assert!(s.should_echo_results());
        assert!(s.should_show_outcome());
    }

    #[test]
    fn test_output_settings_quiet_keeps_outcome() {
        let s = settings(output_formats::TEXT, true);
        assert!(!s.should_show_banner());
        assert!(!s.should_echo_results());
        assert!(s.should_show_outcome());
    }

    #[test]
    fn test_output_settings_minimal_and_json() {
        let minimal = settings(output_formats::MINIMAL, false);
        assert!(!minimal.should_show_banner());
        assert!(!minimal.should_show_status());
        assert!(minimal.should_echo_results());

        let json = settings(output_formats::JSON, false);
        assert!(!json.should_echo_results());
        assert!(!json.should_show_outcome());
    }

    #[test]
    fn test_output_settings_from_config() {
        let config = Config {
            quiet: Some(true),
            output_format: Some(output_formats::MINIMAL.to_string()),
            ..Default::default()
        };
        let s = OutputSettings::from_config(&config);
        assert!(s.quiet);
        assert_eq!(s.output_format, output_formats::MINIMAL);
    }

    #[test]
    fn test_format_outcome_minimal_is_plain() {
        let s = settings(output_formats::MINIMAL, false);
        assert_eq!(format_outcome(&s, "done"), "done");
    }

    #[test]
    fn test_run_summary_json_shape() {
        let report = PipelineReport {
            inputs: 1,
            results: vec!["a=b".to_string(), "a=".to_string()],
            duplicates_skipped: 0,
        };
        let match_report = MatchReport {
            mode: MatchMode::Any,
            keywords: vec!["a".to_string()],
            file: std::path::PathBuf::from("Find-a.txt"),
            matches: vec!["a=b".to_string(), "a=".to_string()],
        };

        let mut summary = RunSummary::new(&settings(output_formats::JSON, false), &report, None);
        summary
            .matches
            .push(MatchSummary::from_report(&match_report, true, None));

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["total"], 2);
        assert_eq!(value["results"][1], "a=");
        assert!(value.get("output_file").is_none());
        assert_eq!(value["matches"][0]["mode"], "Find");
        assert_eq!(value["matches"][0]["file"], "Find-a.txt");
        assert_eq!(value["matches"][0]["count"], 2);
    }

    #[test]
    fn test_run_summary_quiet_omits_results() {
        let report = PipelineReport {
            inputs: 1,
            results: vec!["a".to_string()],
            duplicates_skipped: 0,
        };
        let summary = RunSummary::new(&settings(output_formats::JSON, true), &report, Some("out.txt"));

        let value = serde_json::to_value(&summary).unwrap();
        assert!(value.get("results").is_none());
        assert_eq!(value["output_file"], "out.txt");
    }
}
