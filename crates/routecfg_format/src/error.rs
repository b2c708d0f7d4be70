//! Error types for decoding routing configuration buffers and hex text.

use crate::{HEADER_SIZE, RECORD_SIZE};

/// The result type returned by fallible codec operations.
pub type FormatResult<T> = Result<T, FormatError>;

/// Errors that can occur while decoding or writing routing configuration data.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The buffer is shorter than the fixed header.
    #[error("buffer too short for header: {actual} bytes, need {}", HEADER_SIZE)]
    TruncatedHeader {
        /// The buffer length in bytes.
        actual: usize,
    },

    /// The buffer cannot hold the number of records the header declares.
    #[error(
        "buffer too short for {declared} connection records of {} bytes: \
         {actual} bytes, need {required}",
        RECORD_SIZE
    )]
    TruncatedRecords {
        /// The record count declared by the header.
        declared: u32,
        /// The minimum buffer length for that many records.
        required: u64,
        /// The buffer length in bytes.
        actual: usize,
    },

    /// A hex text line is not a valid 32-bit hex word.
    #[error("line {line}: invalid hex word '{text}'")]
    InvalidHexLine {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },

    /// An I/O error occurred while writing encoded output.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
