use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::error::{Result, UrlShortError};

/// Write `lines` to `path`, one per line, replacing any existing file.
///
/// Returns the number of lines written.
pub fn write_lines<P: AsRef<Path>, S: AsRef<str>>(path: P, lines: &[S]) -> Result<usize> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| UrlShortError::file_write(path, e))?;
    let mut writer = BufWriter::new(file);

    for line in lines {
        writeln!(writer, "{}", line.as_ref()).map_err(|e| UrlShortError::file_write(path, e))?;
    }
    writer
        .flush()
        .map_err(|e| UrlShortError::file_write(path, e))?;

    Ok(lines.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_lines__one_per_line() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("out.txt");

        let written = write_lines(&path, &["a=", "a=b"])?;

        assert_eq!(written, 2);
        assert_eq!(fs::read_to_string(&path)?, "a=\na=b\n");
        Ok(())
    }

    #[test]
    fn test_write_lines__overwrites_existing_file() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("out.txt");
        fs::write(&path, "old content\nmore\n")?;

        write_lines(&path, &["new"])?;

        assert_eq!(fs::read_to_string(&path)?, "new\n");
        Ok(())
    }

    #[test]
    fn test_write_lines__missing_directory_fails_with_path() {
        let err = write_lines("/definitely/missing/dir/out.txt", &["x"]).unwrap_err();

        assert!(matches!(err, UrlShortError::FileWrite { .. }));
        assert!(err.to_string().contains("/definitely/missing/dir/out.txt"));
    }
}
