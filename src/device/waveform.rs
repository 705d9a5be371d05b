use serde::{Deserialize, Serialize};

use super::DeviceError;

/// A cyclic sweep described the way an experimenter thinks about it:
/// voltage limits and scan rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CyclicSweep {
    /// Lowest potential of the sweep (V)
    pub volt_min: f64,
    /// Highest potential of the sweep (V)
    pub volt_max: f64,
    /// Scan rate (V/s)
    pub volt_per_sec: f64,
    /// Number of full cycles
    pub num_cycles: u32,
    /// Phase shift as a fraction of a period; 0.5 starts the sweep at `volt_max`
    pub shift: f64,
    /// Potential held before the sweep starts (V)
    pub quiet_value: f64,
    /// Duration of the quiet period (ms)
    pub quiet_time_ms: u64,
}

impl Default for CyclicSweep {
    fn default() -> Self {
        Self {
            volt_min: -1.2,
            volt_max: -0.4,
            volt_per_sec: 1.0,
            num_cycles: 1,
            shift: 0.5,
            quiet_value: 0.0,
            quiet_time_ms: 0,
        }
    }
}

impl CyclicSweep {
    /// Check the sweep and convert it to the triangle waveform parameters
    /// the device expects.
    pub fn to_params(&self) -> Result<CyclicParams, DeviceError> {
        if !(self.volt_min.is_finite() && self.volt_max.is_finite()) {
            return Err(DeviceError::InvalidParameter(
                "voltage limits must be finite".to_string(),
            ));
        }
        if self.volt_max <= self.volt_min {
            return Err(DeviceError::InvalidParameter(format!(
                "volt_max ({}) must be greater than volt_min ({})",
                self.volt_max, self.volt_min
            )));
        }
        if !self.volt_per_sec.is_finite() || self.volt_per_sec <= 0.0 {
            return Err(DeviceError::InvalidParameter(format!(
                "volt_per_sec must be positive, got {}",
                self.volt_per_sec
            )));
        }
        if self.num_cycles == 0 {
            return Err(DeviceError::InvalidParameter(
                "num_cycles must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.shift) {
            return Err(DeviceError::InvalidParameter(format!(
                "shift must be within [0, 1], got {}",
                self.shift
            )));
        }

        let amplitude = (self.volt_max - self.volt_min) / 2.0;
        let offset = (self.volt_max + self.volt_min) / 2.0;
        let period = (1000.0 * 4.0 * amplitude / self.volt_per_sec) as u64;
        if period == 0 {
            return Err(DeviceError::InvalidParameter(
                "scan rate too fast: waveform period rounds to 0 ms".to_string(),
            ));
        }

        Ok(CyclicParams {
            quiet_value: self.quiet_value,
            quiet_time: self.quiet_time_ms,
            amplitude,
            offset,
            period,
            num_cycles: self.num_cycles,
            shift: self.shift,
        })
    }
}

/// Triangle waveform parameters in the device's own terms.
///
/// Serializes to the camelCase keys used by the potentiostat firmware.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CyclicParams {
    /// Potential held during the quiet period (V)
    pub quiet_value: f64,
    /// Quiet period (ms)
    pub quiet_time: u64,
    /// Peak amplitude (V)
    pub amplitude: f64,
    /// Center potential (V)
    pub offset: f64,
    /// Period of one cycle (ms)
    pub period: u64,
    /// Number of cycles
    pub num_cycles: u32,
    /// Phase shift in [0, 1]
    pub shift: f64,
}

impl CyclicParams {
    /// Total test duration including the quiet period (s)
    pub fn duration_s(&self) -> f64 {
        (self.quiet_time + self.period * u64::from(self.num_cycles)) as f64 / 1000.0
    }

    /// Applied potential at `t_s` seconds after the test starts
    pub fn voltage_at(&self, t_s: f64) -> f64 {
        let quiet_s = self.quiet_time as f64 / 1000.0;
        if t_s < quiet_s {
            return self.quiet_value;
        }
        let period_s = self.period as f64 / 1000.0;
        let phase = ((t_s - quiet_s) / period_s + self.shift).rem_euclid(1.0);
        // -1 at phase 0, +1 at phase 0.5
        let tri = 1.0 - 4.0 * (phase - 0.5).abs();
        self.offset + self.amplitude * tri
    }
}
