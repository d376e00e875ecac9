use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TcError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Value out of range: {what}")]
    OutOfRange { what: String },

    #[error("Not found: {what}")]
    NotFound { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
