use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;

use super::{Sample, Trace, TraceError, CURRENT_COLUMN, TIME_COLUMN, VOLTAGE_COLUMN};

impl Trace {
    /// Parse a trace from a tab-delimited file
    pub fn from_tsv_file<P: AsRef<Path>>(path: P) -> Result<Self, TraceError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let trace = Self::from_reader(BufReader::new(file))?;
        debug!("Read {} samples from {}", trace.len(), path.display());
        Ok(trace)
    }

    /// Parse a trace from any tab-delimited reader with a header row
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TraceError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .flexible(true)
            .has_headers(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|s| s.trim().to_string())
            .collect();

        let find = |name: &str| headers.iter().position(|h| h == name);
        let time_idx =
            find(TIME_COLUMN).ok_or_else(|| TraceError::MissingColumn(TIME_COLUMN.to_string()))?;
        let current_idx = find(CURRENT_COLUMN)
            .ok_or_else(|| TraceError::MissingColumn(CURRENT_COLUMN.to_string()))?;
        let voltage_idx = find(VOLTAGE_COLUMN);

        let mut trace = Trace::new();

        for (i, record) in csv_reader.records().enumerate() {
            let record = record?;
            let row = i + 1;

            // Blank trailing lines come through as a single empty field
            if record.iter().all(|f| f.trim().is_empty()) {
                continue;
            }

            let time_s = required_cell(&record, time_idx, row, TIME_COLUMN)?;
            let current_ua = required_cell(&record, current_idx, row, CURRENT_COLUMN)?;
            let voltage_v = match voltage_idx {
                Some(idx) => optional_cell(&record, idx, row, VOLTAGE_COLUMN)?,
                None => None,
            };

            trace.push(Sample {
                time_s,
                voltage_v,
                current_ua,
            });
        }

        Ok(trace)
    }
}

fn required_cell(
    record: &csv::StringRecord,
    idx: usize,
    row: usize,
    column: &str,
) -> Result<f64, TraceError> {
    optional_cell(record, idx, row, column)?.ok_or_else(|| TraceError::MissingField {
        row,
        column: column.to_string(),
    })
}

fn optional_cell(
    record: &csv::StringRecord,
    idx: usize,
    row: usize,
    column: &str,
) -> Result<Option<f64>, TraceError> {
    let raw = match record.get(idx) {
        Some(raw) => raw.trim(),
        None => return Ok(None),
    };
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<f64>()
        .map(Some)
        .map_err(|_| TraceError::InvalidValue {
            row,
            column: column.to_string(),
            value: raw.to_string(),
        })
}
