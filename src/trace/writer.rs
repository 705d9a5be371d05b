use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use super::{Trace, TraceError, CURRENT_COLUMN, TIME_COLUMN, VOLTAGE_COLUMN};

impl Trace {
    /// Write the trace as tab-separated text with a header row
    pub fn write_tsv<W: Write>(&self, writer: W) -> Result<(), TraceError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_writer(writer);

        csv_writer.write_record([TIME_COLUMN, VOLTAGE_COLUMN, CURRENT_COLUMN])?;
        for sample in &self.samples {
            let voltage = sample
                .voltage_v
                .map(|v| v.to_string())
                .unwrap_or_default();
            csv_writer.write_record([
                sample.time_s.to_string(),
                voltage,
                sample.current_ua.to_string(),
            ])?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Write the trace to `path`, replacing any existing file
    pub fn to_tsv_file<P: AsRef<Path>>(&self, path: P) -> Result<(), TraceError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_tsv(&mut writer)?;
        writer.flush()?;
        info!("Saved {} samples to {}", self.len(), path.display());
        Ok(())
    }
}
