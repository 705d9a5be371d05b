//! # radiostat - Cyclic Voltammetry Lab Toolkit
//!
//! `radiostat` supports a classroom electrochemistry activity built around a
//! USB potentiostat: students run cyclic voltammetry (CV) on a beaker cell,
//! keep the recorded traces, and compare electrolytes by how much of the
//! plated charge comes back on stripping.
//!
//! ## Key Features
//!
//! - **Trace files**: tab-separated `Time (s)` / `Voltage (V)` / `Current (uA)`
//!   text, one file per run, named by acquisition time.
//!
//! - **Charge integration**: oxidation (stripping) and reduction (plating)
//!   charge by trapezoidal integration of the active part of the current.
//!
//! - **Coulombic efficiency**: smaller charge over larger charge, in percent.
//!
//! - **Device seam**: a [`device::Potentiostat`] trait with the cyclic
//!   waveform parameters the hardware expects, plus a simulated cell.
//!
//! - **Student responses**: free-text answers persisted as a flat JSON object.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use radiostat::analysis::{Analyzer, ChargeReport};
//!
//! let result = Analyzer::new().analyze_file("output/cv_data_20250301_142501.txt")?;
//!
//! println!("{}", ChargeReport::new(&result).with_efficiency(true));
//! println!("Active samples: {}", result.time.len());
//! # Ok::<(), radiostat::analysis::AnalysisError>(())
//! ```
//!
//! ## Recording a Simulated Run
//!
//! ```rust,no_run
//! use radiostat::device::{Experiment, SimulatedCell};
//! use std::path::Path;
//!
//! let mut cell = SimulatedCell::new().with_stripping_efficiency(0.9);
//! let path = Experiment::default().run_and_record(&mut cell, Path::new("output"))?;
//! println!("Saved {}", path.display());
//! # Ok::<(), radiostat::device::DeviceError>(())
//! ```
//!
//! ## Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`trace`]: trace file reading, writing and discovery
//! - [`analysis`]: charge integration, coulombic efficiency and reports
//! - [`device`]: potentiostat trait, waveform parameters, simulated cell
//! - [`responses`]: persisted student responses
//!
//! ## Trace File Format
//!
//! | Column | Unit | Required | Description |
//! |--------|------|----------|-------------|
//! | Time (s) | s | Yes | Time since test start, ascending |
//! | Voltage (V) | V | No | Applied potential |
//! | Current (uA) | uA | Yes | Measured current |

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod analysis;
pub mod device;
pub mod responses;
pub mod trace;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::analysis::{
        analyze, coulombic_efficiency, trapezoid, AnalysisError, Analyzer, ChargeReport,
        CvAnalysis, DEFAULT_THRESHOLD_FRACTION,
    };
    pub use crate::device::{
        CurrentRange, CyclicParams, CyclicSweep, DeviceError, Experiment, Potentiostat,
        SimulatedCell,
    };
    pub use crate::responses::{ResponseError, ResponseKey, ResponseStore};
    pub use crate::trace::{latest_trace, Sample, Trace, TraceError};
}
