use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::core::error::{Result, UrlShortError};

pub trait ReadLines {
    /// Read every non-empty line of `path`, trimmed of surrounding whitespace
    fn read_lines(&self, path: &Path) -> Result<Vec<String>>;
}

#[derive(Default, Debug)]
pub struct LineReader {}

impl ReadLines for LineReader {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        let file = File::open(path).map_err(|e| UrlShortError::file_read(path, e))?;
        Self::collect_lines(BufReader::new(file)).map_err(|e| UrlShortError::file_read(path, e))
    }
}

impl LineReader {
    /// Lines are split on raw bytes so invalid UTF-8 only affects the line
    /// it appears in; such bytes become U+FFFD.
    fn collect_lines<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
        let mut lines = Vec::new();
        for line in reader.split(b'\n') {
            let line = line?;
            let line = line.strip_suffix(b"\r").unwrap_or(&line);
            let decoded = String::from_utf8_lossy(line);
            let trimmed = decoded.trim();
            if !trimmed.is_empty() {
                lines.push(trimmed.to_string());
            }
        }
        Ok(lines)
    }
}
