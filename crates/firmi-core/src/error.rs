//! Error Types

use thiserror::Error;

/// Result type alias for picker operations
pub type Result<T> = std::result::Result<T, PickerError>;

/// Picker error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    /// Text is not an `HH:mm` clock time
    #[error("Invalid time: {0:?} (expected HH:mm)")]
    InvalidTime(String),

    /// Text is not an epoch-millisecond integer
    #[error("Invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    /// Unknown picker mode name
    #[error("Unknown mode: {0:?} (expected date, time or date_time)")]
    UnknownMode(String),

    /// The combined date and time has no representable instant
    #[error("Date and time out of range: {0}")]
    OutOfRange(String),
}
