use std::fmt;
use std::path::PathBuf;

/// Comprehensive error types for urlshort operations
#[derive(Debug)]
pub enum UrlShortError {
    /// IO error not tied to a specific file
    Io(std::io::Error),

    /// Reading a line file (input list, payload list, config) failed
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Creating or writing an output file failed
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration error
    Config(String),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// JSON serialization error
    Json(serde_json::Error),

    /// Invalid argument error
    InvalidArgument(String),
}

impl UrlShortError {
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        UrlShortError::FileRead {
            path: path.into(),
            source,
        }
    }

    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        UrlShortError::FileWrite {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for UrlShortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrlShortError::Io(err) => write!(f, "IO error: {err}"),
            UrlShortError::FileRead { path, source } => {
                write!(f, "Could not read '{}': {source}", path.display())
            }
            UrlShortError::FileWrite { path, source } => {
                write!(f, "Could not write '{}': {source}", path.display())
            }
            UrlShortError::Config(msg) => write!(f, "Configuration error: {msg}"),
            UrlShortError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            UrlShortError::Json(err) => write!(f, "JSON error: {err}"),
            UrlShortError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for UrlShortError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UrlShortError::Io(err) => Some(err),
            UrlShortError::FileRead { source, .. } => Some(source),
            UrlShortError::FileWrite { source, .. } => Some(source),
            UrlShortError::TomlParsing(err) => Some(err),
            UrlShortError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for UrlShortError {
    fn from(err: std::io::Error) -> Self {
        UrlShortError::Io(err)
    }
}

impl From<toml::de::Error> for UrlShortError {
    fn from(err: toml::de::Error) -> Self {
        UrlShortError::TomlParsing(err)
    }
}

impl From<serde_json::Error> for UrlShortError {
    fn from(err: serde_json::Error) -> Self {
        UrlShortError::Json(err)
    }
}

/// Type alias for Results using UrlShortError
pub type Result<T> = std::result::Result<T, UrlShortError>;
