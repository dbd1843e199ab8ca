use clap::{CommandFactory, Parser};
use urlshort::config::{CliConfig, Config};
use urlshort::files::{LineReader, ReadLines, write_lines};
use urlshort::generation::{Pipeline, PipelineReport};
use urlshort::matching::{MatchMode, MatchReport};
use urlshort::reporting::logging;
use urlshort::ui::banner;
use urlshort::ui::cli::usage;
use urlshort::ui::completion::{install_completion, print_completions};
use urlshort::ui::output::{self, MatchSummary, OutputSettings, RunSummary};
use urlshort::ui::{Cli, Commands, cli_to_config};
use urlshort::UrlShortError;

use std::path::Path;
use std::time::Instant;

fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    match run_urlshort_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            output::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

/// Handle completion commands and return exit code if a completion command was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        Some(Commands::CompletionInstall { shell }) => match install_completion(shell) {
            Ok(message) => {
                println!("{message}");
                Some(0)
            }
            Err(e) => {
                eprintln!("Error: {e}");
                Some(1)
            }
        },
        None => None,
    }
}

/// Main shortening logic extracted from main() for testing
pub fn run_urlshort_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);

    // Load and merge configuration
    let config = load_and_merge_config(&cli_config)?;

    // Setup logging and output settings
    let settings = OutputSettings::from_config(&config);
    logging::init_logger(settings.verbose, settings.quiet);

    if settings.should_show_banner() {
        banner::print_banner();
    }

    // Input file is required for a run
    let Some(input_file) = cli_config.input_file.as_deref() else {
        let err = UrlShortError::InvalidArgument("Input file (-f) is required.".to_string());
        output::display_error(&err.to_string());
        eprintln!("\n{}", usage());
        eprintln!("For more information, try '--help'.");
        return Ok(1);
    };

    logging::log_config_info(&config);

    let reader = LineReader::default();
    let urls = read_line_file(&reader, "URL", input_file)?;
    if urls.is_empty() {
        output::display_notice(
            &settings,
            &format!("Input file '{input_file}' is empty or contains no valid lines."),
        );
        if settings.is_json() {
            let report = PipelineReport::default();
            output::display_json(&RunSummary::new(&settings, &report, None))?;
        }
        return Ok(0);
    }
    output::display_status(
        &settings,
        &format!("Read {} URLs from {input_file}", urls.len()),
    );

    // Payloads from the append file take precedence over the single append string
    let payloads = match config.append_file.as_deref() {
        Some(append_file) => {
            let payloads = read_line_file(&reader, "payload", append_file)?;
            if payloads.is_empty() {
                logging::log_warning(&format!(
                    "Append file '{append_file}' has no payloads, using the single append string"
                ));
            } else {
                output::display_status(
                    &settings,
                    &format!(
                        "Read {} strings to append from {append_file}",
                        payloads.len()
                    ),
                );
            }
            payloads
        }
        None => Vec::new(),
    };

    let report = generate(&config, &settings, payloads, &urls);
    output::display_results(&settings, &report.results);

    // A failed output file aborts the run
    let output_file = cli_config.output_file.as_deref();
    if let Some(path) = output_file {
        let written = write_lines(path, &report.results).inspect_err(|e| {
            logging::log_error("Could not write output file", Some(e));
        })?;
        output::display_file_written(&settings, written, Path::new(path));
    }

    let mut summary = RunSummary::new(&settings, &report, output_file);
    summary.matches = run_match_passes(&cli_config, &config, &settings, &report.results);

    if output_file.is_none() {
        output::display_completion(&settings, report.total());
    }
    if settings.is_json() {
        output::display_json(&summary)?;
    }

    Ok(0)
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Read a line file, logging what was read
fn read_line_file(
    reader: &LineReader,
    kind: &str,
    path: &str,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let lines = reader.read_lines(Path::new(path)).inspect_err(|e| {
        logging::log_error(&format!("Could not read {kind} file"), Some(e));
    })?;
    logging::log_input_info(kind, lines.len(), path);
    Ok(lines)
}

/// Run the variation pipeline over all input URLs
fn generate(
    config: &Config,
    settings: &OutputSettings,
    payloads: Vec<String>,
    urls: &[String],
) -> PipelineReport {
    let pipeline = Pipeline::new(config.pipeline_options(payloads));
    if !pipeline.has_delimiters() {
        output::display_warning("No valid delimiters specified. Only applying appends.");
    }

    output::display_status(settings, "Processing URLs...");
    let start_time = Instant::now();
    let report = pipeline.run(urls);
    logging::log_generation_complete(
        report.inputs,
        report.total(),
        report.duplicates_skipped,
        start_time.elapsed().as_millis(),
    );

    report
}

/// Run the requested Find/FindX passes over the final results.
///
/// A failed match file is reported and the remaining passes still run.
fn run_match_passes(
    cli_config: &CliConfig,
    config: &Config,
    settings: &OutputSettings,
    results: &[String],
) -> Vec<MatchSummary> {
    let passes = [
        (MatchMode::Any, cli_config.find.as_deref()),
        (MatchMode::All, cli_config.find_all.as_deref()),
    ];

    passes
        .into_iter()
        .filter_map(|(mode, spec)| spec.map(|spec| (mode, spec)))
        .map(|(mode, spec)| {
            let report = MatchReport::build(mode, spec, results, config.find_dir());
            logging::log_match_result(mode, &report.keywords, report.count());

            match report.export() {
                Ok(Some(count)) => {
                    output::display_file_written(settings, count, &report.file);
                    MatchSummary::from_report(&report, true, None)
                }
                Ok(None) => {
                    output::display_no_matches(settings, &report);
                    MatchSummary::from_report(&report, false, None)
                }
                Err(e) => {
                    logging::log_error(&format!("{mode} export failed"), Some(&e));
                    output::display_error(&e.to_string());
                    MatchSummary::from_report(&report, false, Some(e.to_string()))
                }
            }
        })
        .collect()
}
