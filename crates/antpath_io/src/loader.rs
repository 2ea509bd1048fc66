//! Scan log loading.
//!
//! A scan log holds one scan per line. A missing or unreadable file is
//! treated the same as an empty one, and both are rejected as
//! [`IoError::InvalidDataFile`]. Malformed lines are skipped with a warning.

use crate::error::{IoError, Result};
use antpath_core::field::build::BuildReport;
use antpath_core::field::Field;
use antpath_core::scan::Scan;
use std::path::Path;

/// Decoded contents of a scan log.
#[derive(Debug, Clone, Default)]
pub struct ScanLog {
    pub scans: Vec<Scan>,
    /// Non-blank lines that failed to decode.
    pub skipped_lines: usize,
}

/// Reads and decodes every line of the scan log at `path`.
pub fn read_scan_log<P: AsRef<Path>>(path: P, delimiters: &str) -> Result<ScanLog> {
    let path = path.as_ref();
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Scan log unreadable");
            String::new()
        }
    };

    if content.lines().all(|line| line.trim().is_empty()) {
        return Err(IoError::InvalidDataFile(path.to_path_buf()));
    }

    let mut log = ScanLog::default();
    for (idx, line) in content.lines().enumerate() {
        match Scan::parse(line, delimiters, idx + 1) {
            Ok(Some(scan)) => log.scans.push(scan),
            Ok(None) => {}
            Err(e) if e.is_recoverable() => {
                tracing::warn!(error = %e, "Skipping scan line");
                log.skipped_lines += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(log)
}

/// Loads a scan log and reconstructs a `width * height` field from it.
pub fn load_field<P: AsRef<Path>>(
    path: P,
    width: usize,
    height: usize,
    delimiters: &str,
) -> Result<Field> {
    load_field_with_report(path, width, height, delimiters).map(|(field, _)| field)
}

pub fn load_field_with_report<P: AsRef<Path>>(
    path: P,
    width: usize,
    height: usize,
    delimiters: &str,
) -> Result<(Field, BuildReport)> {
    let log = read_scan_log(path, delimiters)?;
    Ok(Field::from_scans_with_report(width, height, &log.scans)?)
}
