//! Plain-text log of every dominant pixel

use crate::scan::LogRecord;
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Joins the records with `\n`. There is no newline after the last record.
pub fn render_log(records: &[LogRecord]) -> String {
    records
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes the log to `path`, replacing any existing file.
pub fn write_log(path: &Path, records: &[LogRecord]) -> Result<()> {
    fs::write(path, render_log(records))
        .with_context(|| format!("Failed to write log file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(index: usize, color: [u8; 3], x: u32, y: u32) -> LogRecord {
        LogRecord { index, color, x, y }
    }

    #[test]
    fn test_render_empty_log() {
        assert_eq!(render_log(&[]), "");
    }

    #[test]
    fn test_render_has_no_trailing_newline() {
        let records = [record(1, [255, 0, 0], 0, 0), record(2, [90, 10, 20], 0, 4)];
        assert_eq!(render_log(&records), "1 - [255,0,0] - 0,0\n2 - [90,10,20] - 0,4");
    }

    #[test]
    fn test_write_log_overwrites() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("log.txt");
        fs::write(&path, "stale content that is longer than the new log\n").unwrap();

        write_log(&path, &[record(1, [200, 1, 2], 3, 4)]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "1 - [200,1,2] - 3,4");
    }

    #[test]
    fn test_write_log_reports_path_on_failure() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("missing-dir").join("log.txt");

        let err = write_log(&path, &[]).unwrap_err();
        assert!(format!("{:#}", err).contains("log.txt"));
    }
}
