use crate::trace::TraceError;

/// Errors that can occur while analyzing a CV trace.
///
/// Every variant keeps the underlying cause so callers can show it verbatim.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The trace file is missing, unreadable, or lacks a required column
    #[error("Error processing file: {0}")]
    Parse(#[from] TraceError),

    /// Too few samples exceed the activity threshold to integrate
    #[error(
        "Error processing file: {active} of {total} samples exceed the activity threshold, \
         at least 2 are needed to integrate"
    )]
    DegenerateTrace {
        /// Samples above the threshold
        active: usize,
        /// Samples in the trace
        total: usize,
    },

    /// The larger of the two charges is zero, so the efficiency ratio is undefined
    #[error(
        "Error processing file: division by zero computing efficiency \
         (oxidation {charge_ox} mC, reduction {charge_red} mC)"
    )]
    ZeroCharge {
        /// Oxidation charge (mC)
        charge_ox: f64,
        /// Reduction charge (mC)
        charge_red: f64,
    },

    /// The activity threshold fraction is not a finite number
    #[error("Invalid threshold fraction: {0}")]
    InvalidThreshold(f64),
}
