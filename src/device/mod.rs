//! # Potentiostat Control
//!
//! The lab drives a USB potentiostat through a small set of calls: choose a
//! current range, choose a sample rate, load the cyclic voltammetry waveform
//! and run it, getting back parallel time/voltage/current samples. This module
//! defines that seam as the [`Potentiostat`] trait, the waveform parameters
//! the device expects, and an [`Experiment`] that runs a configured test and
//! records the trace file consumed by [`crate::analysis`].
//!
//! The serial protocol of real hardware lives outside this crate. A
//! [`SimulatedCell`] implements the trait in-process so the whole pipeline can
//! be exercised without a device attached.

mod error;
mod experiment;
mod simulated;
mod waveform;

#[cfg(test)]
mod tests;

pub use error::DeviceError;
pub use experiment::{record_trace, Experiment};
pub use simulated::SimulatedCell;
pub use waveform::{CyclicParams, CyclicSweep};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::trace::Trace;

/// Name of the cyclic voltammetry test on the device
pub const CYCLIC_TEST_NAME: &str = "cyclic";

/// Full-scale current range of the potentiostat
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrentRange {
    /// ±1 uA
    #[serde(rename = "1uA")]
    Range1uA,
    /// ±10 uA
    #[serde(rename = "10uA")]
    Range10uA,
    /// ±100 uA
    #[serde(rename = "100uA")]
    Range100uA,
    /// ±1000 uA
    #[serde(rename = "1000uA")]
    Range1000uA,
    /// ±10000 uA
    #[default]
    #[serde(rename = "10000uA")]
    Range10000uA,
}

impl CurrentRange {
    /// All supported ranges, smallest first
    pub const ALL: [CurrentRange; 5] = [
        CurrentRange::Range1uA,
        CurrentRange::Range10uA,
        CurrentRange::Range100uA,
        CurrentRange::Range1000uA,
        CurrentRange::Range10000uA,
    ];

    /// Largest measurable current magnitude (uA)
    pub fn max_ua(&self) -> f64 {
        match self {
            CurrentRange::Range1uA => 1.0,
            CurrentRange::Range10uA => 10.0,
            CurrentRange::Range100uA => 100.0,
            CurrentRange::Range1000uA => 1000.0,
            CurrentRange::Range10000uA => 10000.0,
        }
    }

    /// Device name of the range, e.g. `"100uA"`
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrentRange::Range1uA => "1uA",
            CurrentRange::Range10uA => "10uA",
            CurrentRange::Range100uA => "100uA",
            CurrentRange::Range1000uA => "1000uA",
            CurrentRange::Range10000uA => "10000uA",
        }
    }
}

impl fmt::Display for CurrentRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CurrentRange {
    type Err = DeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DeviceError::InvalidParameter(format!("unknown current range '{}'", s)))
    }
}

/// A potentiostat able to run a cyclic voltammetry test
pub trait Potentiostat {
    /// Select the current range
    fn set_curr_range(&mut self, range: CurrentRange) -> Result<(), DeviceError>;

    /// Select the sample rate (samples per second)
    fn set_sample_rate(&mut self, rate_hz: f64) -> Result<(), DeviceError>;

    /// Load the cyclic voltammetry waveform
    fn set_cyclic_params(&mut self, params: &CyclicParams) -> Result<(), DeviceError>;

    /// Run the loaded cyclic test and return the acquired samples
    fn run_cyclic_test(&mut self) -> Result<Trace, DeviceError>;
}
