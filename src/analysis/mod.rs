//! # Cyclic Voltammetry Analysis
//!
//! Charge integration and coulombic efficiency for a recorded CV trace.
//!
//! The analysis treats any current well above the baseline as "active":
//! samples whose magnitude exceeds a fraction (5% by default) of the trace's
//! peak magnitude. Active current is then split by sign:
//!
//! - positive (anodic) current is the **oxidation / stripping** part
//! - negative (cathodic) current is the **reduction / plating** part
//!
//! Each part is integrated over time with the trapezoidal rule, giving the
//! charges in millicoulombs, and the coulombic efficiency is the ratio of the
//! smaller to the larger charge as a percentage.
//!
//! The split is by sign only; no attempt is made to find the individual sweep
//! segments of the waveform.
//!
//! ```rust,no_run
//! use radiostat::analysis::{analyze, ChargeReport};
//!
//! let result = analyze("output/cv_data_20250301_142501.txt")?;
//! println!("{}", ChargeReport::new(&result));
//! # Ok::<(), radiostat::analysis::AnalysisError>(())
//! ```

mod error;
mod integrate;
mod report;


pub use error::AnalysisError;
pub use integrate::{coulombic_efficiency, trapezoid};
pub use report::{ChargeReport, CE_FORMULA};

use log::{debug, warn};
use serde::Serialize;
use std::path::Path;

use crate::trace::Trace;

/// Fraction of the peak current magnitude a sample must exceed to be active
pub const DEFAULT_THRESHOLD_FRACTION: f64 = 0.05;

/// Microamps per milliamp
pub const UA_PER_MA: f64 = 1000.0;

/// Result of analyzing one CV trace.
///
/// All series are restricted to the active samples and share the same time
/// axis. Currents are in mA, times in s and charges in mC.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CvAnalysis {
    /// Oxidation (stripping) charge, non-negative for ascending time
    pub charge_ox: f64,
    /// Reduction (plating) charge, non-positive for ascending time
    pub charge_red: f64,
    /// Coulombic efficiency (%)
    pub efficiency_pct: f64,
    /// Time of each active sample (s)
    pub time: Vec<f64>,
    /// Current of each active sample (mA)
    pub current: Vec<f64>,
    /// Active current with negative values zeroed (mA)
    pub current_ox: Vec<f64>,
    /// Active current with positive values zeroed (mA)
    pub current_red: Vec<f64>,
}

/// Configurable CV analyzer
#[derive(Debug, Clone, Copy)]
pub struct Analyzer {
    threshold_fraction: f64,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            threshold_fraction: DEFAULT_THRESHOLD_FRACTION,
        }
    }
}

impl Analyzer {
    /// Create an analyzer with the default 5% activity threshold
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fraction of the peak current magnitude used as activity threshold
    pub fn with_threshold_fraction(mut self, fraction: f64) -> Self {
        self.threshold_fraction = fraction;
        self
    }

    /// Activity threshold fraction in use
    pub fn threshold_fraction(&self) -> f64 {
        self.threshold_fraction
    }

    /// Read a trace file and analyze it
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<CvAnalysis, AnalysisError> {
        let trace = Trace::from_tsv_file(path)?;
        self.analyze_trace(&trace)
    }

    /// Analyze an in-memory trace
    pub fn analyze_trace(&self, trace: &Trace) -> Result<CvAnalysis, AnalysisError> {
        if !self.threshold_fraction.is_finite() || self.threshold_fraction < 0.0 {
            return Err(AnalysisError::InvalidThreshold(self.threshold_fraction));
        }

        let peak = trace
            .samples
            .iter()
            .map(|s| (s.current_ua / UA_PER_MA).abs())
            .fold(0.0_f64, f64::max);
        let threshold = self.threshold_fraction * peak;

        let (time, current): (Vec<f64>, Vec<f64>) = trace
            .samples
            .iter()
            .map(|s| (s.time_s, s.current_ua / UA_PER_MA))
            .filter(|(_, c)| c.abs() > threshold)
            .unzip();

        debug!(
            "Peak |current| {:.6} mA, threshold {:.6} mA, {} of {} samples active",
            peak,
            threshold,
            current.len(),
            trace.len()
        );

        if current.len() < 2 {
            return Err(AnalysisError::DegenerateTrace {
                active: current.len(),
                total: trace.len(),
            });
        }

        let current_ox: Vec<f64> = current.iter().map(|&c| c.max(0.0)).collect();
        let current_red: Vec<f64> = current.iter().map(|&c| c.min(0.0)).collect();

        let charge_ox = trapezoid(&current_ox, &time);
        let charge_red = trapezoid(&current_red, &time);
        let efficiency_pct = coulombic_efficiency(charge_ox, charge_red)?;

        if !(0.0..=100.0).contains(&efficiency_pct) {
            warn!(
                "Coulombic efficiency {:.2}% is outside 0-100% (oxidation {:.4} mC, reduction {:.4} mC)",
                efficiency_pct, charge_ox, charge_red
            );
        }

        Ok(CvAnalysis {
            charge_ox,
            charge_red,
            efficiency_pct,
            time,
            current,
            current_ox,
            current_red,
        })
    }
}

/// Analyze a trace file with the default threshold
pub fn analyze<P: AsRef<Path>>(path: P) -> Result<CvAnalysis, AnalysisError> {
    Analyzer::new().analyze_file(path)
}
