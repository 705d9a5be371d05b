//! TOML configuration file support.
//!
//! Lab stations keep their device and waveform settings in a config file
//! instead of passing flags on every run:
//!
//! ```toml
//! # radiostat.toml
//! [device]
//! current_range = "1000uA"
//! sample_rate = 100.0
//!
//! [waveform]
//! volt_min = -1.2
//! volt_max = -0.4
//! volt_per_sec = 0.05
//! num_cycles = 2
//!
//! [analysis]
//! threshold_fraction = 0.05
//!
//! [output]
//! dir = "output"
//! responses_file = "student_responses.json"
//! ```
//!
//! Every key is optional; missing keys fall back to the beaker-test defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use radiostat::analysis::DEFAULT_THRESHOLD_FRACTION;
use radiostat::device::{CurrentRange, CyclicSweep, Experiment};
use radiostat::responses::DEFAULT_RESPONSES_FILE;

/// Default directory for recorded traces and responses
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Root configuration structure for radiostat.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Potentiostat settings.
    #[serde(default)]
    pub device: DeviceConfig,

    /// Cyclic waveform settings.
    #[serde(default)]
    pub waveform: WaveformConfig,

    /// Analysis settings.
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Output locations.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Potentiostat settings.
#[derive(Debug, Default, Deserialize)]
pub struct DeviceConfig {
    /// Current range, e.g. "100uA".
    pub current_range: Option<CurrentRange>,

    /// Samples per second.
    pub sample_rate: Option<f64>,
}

/// Cyclic waveform settings.
#[derive(Debug, Default, Deserialize)]
pub struct WaveformConfig {
    /// Lowest potential (V).
    pub volt_min: Option<f64>,
    /// Highest potential (V).
    pub volt_max: Option<f64>,
    /// Scan rate (V/s).
    pub volt_per_sec: Option<f64>,
    /// Number of cycles.
    pub num_cycles: Option<u32>,
    /// Phase shift in [0, 1].
    pub shift: Option<f64>,
    /// Potential held before the sweep (V).
    pub quiet_value: Option<f64>,
    /// Quiet period (ms).
    pub quiet_time_ms: Option<u64>,
}

/// Analysis settings.
#[derive(Debug, Default, Deserialize)]
pub struct AnalysisConfig {
    /// Fraction of the peak current a sample must exceed to be integrated.
    pub threshold_fraction: Option<f64>,
}

/// Output locations.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Directory for recorded traces.
    pub dir: Option<PathBuf>,
    /// Responses file name, relative to `dir` unless absolute.
    pub responses_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Load from `path` when given, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Experiment described by the device and waveform sections.
    pub fn experiment(&self) -> Experiment {
        let defaults = Experiment::default();
        let sweep = CyclicSweep::default();
        let w = &self.waveform;

        Experiment {
            current_range: self.device.current_range.unwrap_or(defaults.current_range),
            sample_rate_hz: self.device.sample_rate.unwrap_or(defaults.sample_rate_hz),
            sweep: CyclicSweep {
                volt_min: w.volt_min.unwrap_or(sweep.volt_min),
                volt_max: w.volt_max.unwrap_or(sweep.volt_max),
                volt_per_sec: w.volt_per_sec.unwrap_or(sweep.volt_per_sec),
                num_cycles: w.num_cycles.unwrap_or(sweep.num_cycles),
                shift: w.shift.unwrap_or(sweep.shift),
                quiet_value: w.quiet_value.unwrap_or(sweep.quiet_value),
                quiet_time_ms: w.quiet_time_ms.unwrap_or(sweep.quiet_time_ms),
            },
        }
    }

    /// Activity threshold fraction, `override_value` taking precedence.
    pub fn threshold_fraction(&self, override_value: Option<f64>) -> f64 {
        override_value
            .or(self.analysis.threshold_fraction)
            .unwrap_or(DEFAULT_THRESHOLD_FRACTION)
    }

    /// Trace output directory, `override_dir` taking precedence.
    pub fn output_dir(&self, override_dir: Option<PathBuf>) -> PathBuf {
        override_dir
            .or_else(|| self.output.dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    /// Responses file path, `override_file` taking precedence.
    pub fn responses_path(&self, override_file: Option<PathBuf>) -> PathBuf {
        if let Some(file) = override_file {
            return file;
        }
        let file = self
            .output
            .responses_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESPONSES_FILE));
        self.output_dir(None).join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [device]
            current_range = "1000uA"
            sample_rate = 50.0

            [waveform]
            volt_min = -1.0
            volt_max = 0.0
            volt_per_sec = 0.5
            num_cycles = 3

            [analysis]
            threshold_fraction = 0.1

            [output]
            dir = "runs"
            responses_file = "answers.json"
        "#;

        let config = Config::from_str(toml).unwrap();
        let experiment = config.experiment();
        assert_eq!(experiment.current_range, CurrentRange::Range1000uA);
        assert_eq!(experiment.sample_rate_hz, 50.0);
        assert_eq!(experiment.sweep.volt_min, -1.0);
        assert_eq!(experiment.sweep.num_cycles, 3);
        // Unset keys keep their defaults
        assert_eq!(experiment.sweep.shift, 0.5);

        assert_eq!(config.threshold_fraction(None), 0.1);
        assert_eq!(config.threshold_fraction(Some(0.2)), 0.2);
        assert_eq!(config.output_dir(None), PathBuf::from("runs"));
        assert_eq!(
            config.responses_path(None),
            PathBuf::from("runs").join("answers.json")
        );
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [device]
            sample_rate = 200.0
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.device.sample_rate, Some(200.0));
        assert_eq!(config.device.current_range, None);
        assert_eq!(config.experiment().current_range, CurrentRange::Range10000uA);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.experiment(), Experiment::default());
        assert_eq!(config.threshold_fraction(None), DEFAULT_THRESHOLD_FRACTION);
        assert_eq!(
            config.responses_path(None),
            PathBuf::from("output").join("student_responses.json")
        );
    }

    #[test]
    fn test_unknown_current_range_rejected() {
        let toml = r#"
            [device]
            current_range = "5uA"
        "#;
        assert!(Config::from_str(toml).is_err());
    }
}
