/// Errors that can occur while reading or writing trace files
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    /// I/O error opening or writing a trace file
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV/TSV parsing error
    #[error("TSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    /// Missing required column in the header row
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A data row is shorter than the header
    #[error("Row {row} has no value for column '{column}'")]
    MissingField {
        /// 1-based data row (header excluded)
        row: usize,
        /// Column name from the header
        column: String,
    },

    /// A cell could not be parsed as a floating point number
    #[error("Row {row}, column '{column}': invalid number '{value}'")]
    InvalidValue {
        /// 1-based data row (header excluded)
        row: usize,
        /// Column name from the header
        column: String,
        /// Raw cell text
        value: String,
    },
}
