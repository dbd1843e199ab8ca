/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the literal values shared between the CLI,
/// the configuration layer and the generation pipeline.
/// Output format constants
pub mod output_formats {
    /// Text output format - colorful banner, status lines and per-line echo
    pub const TEXT: &str = "text";
    /// JSON output format - single structured document for automation
    pub const JSON: &str = "json";
    /// Minimal output format - plain text without colors or banner
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// Delimiter constants
pub mod delimiters {
    /// Separator between delimiters in a delimiter specification
    pub const LIST_SEPARATOR: char = ',';
    /// Delimiter specification used when none is configured
    pub const DEFAULT_SPEC: &str = "=";
    /// Delimiter added by path splitting
    pub const PATH: &str = "/";
}

/// Keyword matching constants
pub mod matching {
    /// Separator between keywords in a keyword specification
    pub const KEYWORD_SEPARATOR: char = ',';
    /// Joins keywords inside a generated file name
    pub const FILE_KEYWORD_JOINER: &str = "-";
    /// Characters replaced in generated file names
    pub const UNSAFE_FILE_CHARS: [char; 3] = ['/', '\\', ':'];
    /// Replacement for unsafe file name characters
    pub const FILE_CHAR_REPLACEMENT: char = '_';
    /// Extension of generated match files
    pub const FILE_EXTENSION: &str = "txt";
    /// Directory match files are written to by default
    pub const DEFAULT_FIND_DIR: &str = ".";
}

/// Configuration file constants
pub mod config_files {
    /// Name of the configuration file looked up in standard locations
    pub const FILE_NAME: &str = ".urlshort.toml";
    /// How many parent directories are searched for a configuration file
    pub const MAX_PARENT_LEVELS: usize = 3;
}

/// Display and formatting constants
pub mod display {
    /// Prefix for informational status lines
    pub const INFO_PREFIX: &str = "[*]";
    /// Prefix for success status lines
    pub const SUCCESS_PREFIX: &str = "[+]";
    /// Prefix for warnings
    pub const WARNING_PREFIX: &str = "[!]";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_formats_constants() {
        assert_eq!(output_formats::TEXT, "text");
        assert_eq!(output_formats::JSON, "json");
        assert_eq!(output_formats::MINIMAL, "minimal");
        assert_eq!(output_formats::DEFAULT, "text");
        assert_eq!(output_formats::ALL.len(), 3);
    }

    #[test]
    fn test_delimiter_constants() {
        assert_eq!(delimiters::DEFAULT_SPEC, "=");
        assert_eq!(delimiters::PATH, "/");
    }

    #[test]
    fn test_matching_constants() {
        assert!(matching::UNSAFE_FILE_CHARS.contains(&':'));
        assert_eq!(matching::FILE_EXTENSION, "txt");
    }
}
