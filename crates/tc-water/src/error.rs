//! Water/steam property errors.

use tc_core::TcError;
use thiserror::Error;

/// Result type for water/steam operations.
pub type WaterResult<T> = Result<T, WaterError>;

/// Errors raised by water/steam property models.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WaterError {
    /// Input outside the validity range of the saturation line.
    #[error("No saturation {what} for {value} (valid range {min}..={max})")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Non-finite input or result.
    #[error("Non-finite value for {what}")]
    NonFinite { what: &'static str },
}

impl From<WaterError> for TcError {
    fn from(err: WaterError) -> Self {
        match err {
            WaterError::OutOfRange { .. } => TcError::OutOfRange {
                what: err.to_string(),
            },
            WaterError::NonFinite { .. } => TcError::InvalidArg {
                what: err.to_string(),
            },
        }
    }
}
