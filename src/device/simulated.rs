use log::debug;

use super::{CurrentRange, CyclicParams, DeviceError, Potentiostat};
use crate::trace::{Sample, Trace};

/// In-process stand-in for a potentiostat attached to a plating cell.
///
/// The cell responds linearly around the waveform's center potential:
/// `i = conductance * (v - offset)`. Anodic (stripping) current is scaled by
/// the stripping efficiency, so a symmetric sweep yields a coulombic
/// efficiency close to `stripping_efficiency * 100`. Currents are clamped to
/// the selected range.
#[derive(Debug, Clone)]
pub struct SimulatedCell {
    conductance_ua_per_v: f64,
    stripping_efficiency: f64,
    range: Option<CurrentRange>,
    sample_rate_hz: Option<f64>,
    params: Option<CyclicParams>,
}

impl Default for SimulatedCell {
    fn default() -> Self {
        Self {
            conductance_ua_per_v: 500.0,
            stripping_efficiency: 0.85,
            range: None,
            sample_rate_hz: None,
            params: None,
        }
    }
}

impl SimulatedCell {
    /// Create a cell with 500 uA/V conductance and 85% stripping efficiency
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fraction of plated charge recovered on stripping
    pub fn with_stripping_efficiency(mut self, efficiency: f64) -> Self {
        self.stripping_efficiency = efficiency;
        self
    }

    /// Set the cell conductance (uA/V)
    pub fn with_conductance(mut self, conductance_ua_per_v: f64) -> Self {
        self.conductance_ua_per_v = conductance_ua_per_v;
        self
    }

    fn current_at(&self, voltage: f64, params: &CyclicParams, range: CurrentRange) -> f64 {
        let mut current = self.conductance_ua_per_v * (voltage - params.offset);
        if current > 0.0 {
            current *= self.stripping_efficiency;
        }
        current.clamp(-range.max_ua(), range.max_ua())
    }
}

impl Potentiostat for SimulatedCell {
    fn set_curr_range(&mut self, range: CurrentRange) -> Result<(), DeviceError> {
        self.range = Some(range);
        Ok(())
    }

    fn set_sample_rate(&mut self, rate_hz: f64) -> Result<(), DeviceError> {
        if !rate_hz.is_finite() || rate_hz <= 0.0 {
            return Err(DeviceError::InvalidParameter(format!(
                "sample rate must be positive, got {}",
                rate_hz
            )));
        }
        self.sample_rate_hz = Some(rate_hz);
        Ok(())
    }

    fn set_cyclic_params(&mut self, params: &CyclicParams) -> Result<(), DeviceError> {
        if params.period == 0 || params.num_cycles == 0 {
            return Err(DeviceError::InvalidParameter(
                "period and num_cycles must be non-zero".to_string(),
            ));
        }
        self.params = Some(*params);
        Ok(())
    }

    fn run_cyclic_test(&mut self) -> Result<Trace, DeviceError> {
        let range = self.range.ok_or(DeviceError::NotConfigured("current range"))?;
        let rate = self
            .sample_rate_hz
            .ok_or(DeviceError::NotConfigured("sample rate"))?;
        let params = self
            .params
            .ok_or(DeviceError::NotConfigured("test parameters"))?;

        let num_samples = (params.duration_s() * rate).floor() as usize;
        debug!(
            "Simulating {} samples at {} Hz over {:.3} s ({} range)",
            num_samples,
            rate,
            params.duration_s(),
            range
        );

        let mut trace = Trace::new();
        for i in 0..num_samples {
            let t = i as f64 / rate;
            let v = params.voltage_at(t);
            trace.push(Sample::new(t, v, self.current_at(v, &params, range)));
        }

        Ok(trace)
    }
}
