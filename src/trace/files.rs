use chrono::{DateTime, TimeZone};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::TraceError;

/// File name prefix of recorded traces
pub const TRACE_FILE_PREFIX: &str = "cv_data_";
/// File name suffix of recorded traces
pub const TRACE_FILE_SUFFIX: &str = ".txt";

/// File name for a trace recorded at `timestamp`, e.g. `cv_data_20250301_142501.txt`
pub fn trace_file_name<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}{}{}",
        TRACE_FILE_PREFIX,
        timestamp.format("%Y%m%d_%H%M%S"),
        TRACE_FILE_SUFFIX
    )
}

/// Most recently modified recorded trace in `dir`.
///
/// Returns `Ok(None)` when the directory contains no `cv_data_*.txt` files.
/// Ties on modification time are broken by file name.
pub fn latest_trace<P: AsRef<Path>>(dir: P) -> Result<Option<PathBuf>, TraceError> {
    let mut newest: Option<(SystemTime, PathBuf)> = None;

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        let is_trace = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with(TRACE_FILE_PREFIX) && n.ends_with(TRACE_FILE_SUFFIX))
            .unwrap_or(false);
        if !is_trace || !entry.file_type()?.is_file() {
            continue;
        }

        let modified = entry.metadata()?.modified()?;
        let replace = match &newest {
            None => true,
            Some((t, p)) => (modified, &path) > (*t, p),
        };
        if replace {
            newest = Some((modified, path));
        }
    }

    Ok(newest.map(|(_, p)| p))
}
