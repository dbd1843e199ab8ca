// Command-line interface definitions and parsing for urlshort

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Expand URLs into delimiter-truncated variations for parameter discovery",
    long_about = None,
    after_help = "Example:\n  urlshort -f urls.txt -o shortened.txt -x \"&,=\" -p -F payloads.txt -D"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // Input & Output
    /// Input file containing URLs, one per line (required)
    #[arg(short = 'f', long, value_name = "FILE", help_heading = "Input & Output")]
    pub file: Option<String>,

    /// Output file to write shortened URLs
    #[arg(short = 'o', long, value_name = "FILE", help_heading = "Input & Output")]
    pub output: Option<String>,

    // Generation
    /// Delimiters to split at, comma separated, e.g. "&,=" (default: "=")
    #[arg(short = 'x', long, value_name = "LIST", help_heading = "Generation")]
    pub delimiters: Option<String>,

    /// Split URLs at path segments (/) as well
    #[arg(short = 'p', long, help_heading = "Generation")]
    pub split_path: bool,

    /// String to append to each generated variation
    #[arg(short = 'a', long, value_name = "STRING", help_heading = "Generation")]
    pub append: Option<String>,

    /// File containing strings to append, one per line (overrides -a)
    #[arg(short = 'F', long, value_name = "FILE", help_heading = "Generation")]
    pub append_file: Option<String>,

    /// Remove duplicate generated URLs
    #[arg(short = 'D', long, help_heading = "Generation")]
    pub no_duplicates: bool,

    // Matching
    /// Export results containing any of these keywords (comma separated)
    #[arg(long, value_name = "KEYWORDS", help_heading = "Matching")]
    pub find: Option<String>,

    /// Export results containing all of these keywords (comma separated)
    #[arg(
        long = "findX",
        visible_alias = "find-all",
        value_name = "KEYWORDS",
        help_heading = "Matching"
    )]
    pub find_all: Option<String>,

    /// Directory to write Find/FindX files to (default: current directory)
    #[arg(long, value_name = "DIR", help_heading = "Matching")]
    pub find_dir: Option<String>,

    // Output & Verbosity
    /// Quiet mode: no banner or per-URL output, only errors and the final summary
    #[arg(short = 'Q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Install shell completions to standard location
    #[command(name = "completion-install", arg_required_else_help = true)]
    CompletionInstall {
        /// The shell to install completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Convert derive-based CLI arguments directly to CliConfig structure
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        // Input & output
        input_file: cli.file.clone(),
        output_file: cli.output.clone(),

        // Generation
        delimiters: cli.delimiters.clone(),
        split_path: cli.split_path,
        no_duplicates: cli.no_duplicates,
        append: cli.append.clone(),
        append_file: cli.append_file.clone(),

        // Matching
        find: cli.find.clone(),
        find_all: cli.find_all.clone(),
        find_dir: cli.find_dir.clone(),

        // Output & format
        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),

        // Configuration
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}

/// Short usage text, shown when a run is missing its input file
pub fn usage() -> String {
    use clap::CommandFactory;

    Cli::command().render_usage().to_string()
}
