//! # Trace Files
//!
//! A trace is the raw output of one potentiostat run: an ordered list of
//! `(time, voltage, current)` samples stored as tab-separated text with a
//! header row.
//!
//! ```text
//! Time (s)	Voltage (V)	Current (uA)
//! 0.00	-0.40	12.5
//! 0.01	-0.41	11.9
//! ```
//!
//! Only `Time (s)` and `Current (uA)` are required when reading; the voltage
//! column may be absent or left empty. Files recorded by the lab are named
//! `cv_data_YYYYmmdd_HHMMSS.txt` so that the newest run can be found again
//! with [`latest_trace`].

mod error;
mod files;
mod reader;
mod writer;


pub use error::TraceError;
pub use files::{latest_trace, trace_file_name, TRACE_FILE_PREFIX, TRACE_FILE_SUFFIX};

/// Header of the time column, in seconds
pub const TIME_COLUMN: &str = "Time (s)";
/// Header of the voltage column, in volts
pub const VOLTAGE_COLUMN: &str = "Voltage (V)";
/// Header of the current column, in microamps
pub const CURRENT_COLUMN: &str = "Current (uA)";

/// A single potentiostat sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Time since the start of the test (s)
    pub time_s: f64,
    /// Applied potential (V), if recorded
    pub voltage_v: Option<f64>,
    /// Measured current (uA)
    pub current_ua: f64,
}

impl Sample {
    /// Create a sample with a recorded voltage
    pub fn new(time_s: f64, voltage_v: f64, current_ua: f64) -> Self {
        Self {
            time_s,
            voltage_v: Some(voltage_v),
            current_ua,
        }
    }
}

/// An ordered sequence of samples from one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    /// Samples in acquisition order
    pub samples: Vec<Sample>,
}

impl Trace {
    /// Create an empty trace
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trace from parallel time, voltage and current sequences,
    /// truncated to the shortest of the three.
    pub fn from_columns(time_s: &[f64], voltage_v: &[f64], current_ua: &[f64]) -> Self {
        let samples = time_s
            .iter()
            .zip(voltage_v)
            .zip(current_ua)
            .map(|((&t, &v), &c)| Sample::new(t, v, c))
            .collect();
        Self { samples }
    }

    /// Append a sample
    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the trace holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Time column (s)
    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time_s).collect()
    }

    /// Current column (uA)
    pub fn currents_ua(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.current_ua).collect()
    }

    /// Voltage column (V); `None` where a sample has no voltage
    pub fn voltages(&self) -> Vec<Option<f64>> {
        self.samples.iter().map(|s| s.voltage_v).collect()
    }
}
