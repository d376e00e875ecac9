//! Thermochemical property errors.

use crate::mixture::Basis;
use tc_core::TcError;
use tc_water::WaterError;
use thiserror::Error;

/// Result type for thermochemical operations.
pub type ThermoResult<T> = Result<T, ThermoError>;

/// Errors that can occur while evaluating species, mixture or moist-air properties.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThermoError {
    /// Temperature outside the validity range of the polynomial fits.
    #[error("Temperature {t_k} K out of range ({min_k} K, {max_k} K)")]
    TemperatureOutOfRange { t_k: f64, min_k: f64, max_k: f64 },

    /// Formula absent from a database or mixture.
    #[error("Not a component: {formula}")]
    NotFound { formula: String },

    /// Input outside the domain of the model (e.g. moist air without water).
    #[error("Domain error: {what}")]
    Domain { what: &'static str },

    /// Operation intentionally left unimplemented.
    #[error("Not implemented: {what}")]
    NotImplemented { what: &'static str },

    /// Mixture basis without an implementation.
    #[error("Mixture basis not supported: {basis}")]
    UnsupportedBasis { basis: Basis },

    /// Aggregate requested on a mixture with no quantity.
    #[error("Mixture is empty")]
    EmptyMixture,

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Source record that cannot be turned into a species.
    #[error("Invalid record for {formula}: {what}")]
    InvalidRecord { formula: String, what: &'static str },

    /// Failure in the water/steam collaborator.
    #[error("Water property error: {0}")]
    Water(#[from] WaterError),
}

impl From<ThermoError> for TcError {
    fn from(err: ThermoError) -> Self {
        match err {
            ThermoError::TemperatureOutOfRange { .. } => TcError::OutOfRange {
                what: err.to_string(),
            },
            ThermoError::NotFound { formula } => TcError::NotFound { what: formula },
            ThermoError::InvalidArg { .. } | ThermoError::EmptyMixture => TcError::InvalidArg {
                what: err.to_string(),
            },
            ThermoError::Water(water) => water.into(),
            ThermoError::Domain { .. }
            | ThermoError::NotImplemented { .. }
            | ThermoError::UnsupportedBasis { .. }
            | ThermoError::InvalidRecord { .. } => TcError::Invariant {
                what: err.to_string(),
            },
        }
    }
}
