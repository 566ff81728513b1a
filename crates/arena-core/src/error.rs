//! Error types for board decoding

use thiserror::Error;

/// Result type for arena-core operations
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Failures raised while decoding a raw board buffer
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Buffer length is not exactly 256 bytes
    #[error("invalid board length: expected 256 bytes, got {actual}")]
    InvalidLength { actual: usize },

    /// A byte is outside the valid cell range [0, 9]
    #[error("invalid cell value {value} at byte offset {offset}")]
    InvalidCellValue { value: u8, offset: usize },
}
