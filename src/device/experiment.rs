use chrono::Local;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use super::{CurrentRange, CyclicSweep, DeviceError, Potentiostat, CYCLIC_TEST_NAME};
use crate::trace::{trace_file_name, Trace};

/// A fully specified cyclic voltammetry run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Experiment {
    /// Current range to select
    pub current_range: CurrentRange,
    /// Samples per second
    pub sample_rate_hz: f64,
    /// Waveform to apply
    pub sweep: CyclicSweep,
}

impl Default for Experiment {
    fn default() -> Self {
        Self {
            current_range: CurrentRange::Range10000uA,
            sample_rate_hz: 100.0,
            sweep: CyclicSweep::default(),
        }
    }
}

impl Experiment {
    /// Configure `device` and run the test
    pub fn run<D: Potentiostat + ?Sized>(&self, device: &mut D) -> Result<Trace, DeviceError> {
        let params = self.sweep.to_params()?;

        info!(
            "Running '{}' test: {} range, {} Hz, {} V to {} V at {} V/s, {} cycle(s)",
            CYCLIC_TEST_NAME,
            self.current_range,
            self.sample_rate_hz,
            self.sweep.volt_min,
            self.sweep.volt_max,
            self.sweep.volt_per_sec,
            self.sweep.num_cycles
        );

        device.set_curr_range(self.current_range)?;
        device.set_sample_rate(self.sample_rate_hz)?;
        device.set_cyclic_params(&params)?;
        let trace = device.run_cyclic_test()?;

        info!("Test complete: {} samples", trace.len());
        Ok(trace)
    }

    /// Run the test and save the trace under `output_dir`, returning its path
    pub fn run_and_record<D: Potentiostat + ?Sized>(
        &self,
        device: &mut D,
        output_dir: &Path,
    ) -> Result<PathBuf, DeviceError> {
        let trace = self.run(device)?;
        record_trace(&trace, output_dir)
    }
}

/// Save `trace` as `cv_data_<timestamp>.txt` in `output_dir`, creating the
/// directory if needed.
pub fn record_trace(trace: &Trace, output_dir: &Path) -> Result<PathBuf, DeviceError> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(trace_file_name(&Local::now()));
    trace.to_tsv_file(&path)?;
    Ok(path)
}
