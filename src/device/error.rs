use crate::trace::TraceError;

/// Errors that can occur while configuring or running a potentiostat
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    /// A test parameter is out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A test was started before the device was fully configured
    #[error("Device not configured: {0} has not been set")]
    NotConfigured(&'static str),

    /// I/O error preparing the output directory
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error writing the recorded trace
    #[error("Trace error: {0}")]
    TraceError(#[from] TraceError),
}
