use crate::dimension::Dimension;
use crate::system::System;
use thiserror::Error;

/// Error type for invalid unit operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    #[error("Cannot convert from '{from}' to '{to}': incompatible quantities ({from_dimension} vs {to_dimension})")]
    IncompatibleQuantity {
        from: String,
        to: String,
        from_dimension: Dimension,
        to_dimension: Dimension,
    },
    #[error("Cannot combine '{left}' ({left_system}) with '{right}' ({right_system}): the systems have no common narrowing")]
    IncompatibleSystem {
        left: String,
        right: String,
        left_system: System,
        right_system: System,
    },
    #[error("Unsupported system narrowing of '{unit}' from {from} to {to}")]
    UnsupportedSystemNarrowing {
        unit: String,
        from: System,
        to: System,
    },
    #[error("Numeric domain error in '{unit}': cannot take the reciprocal of {value}")]
    NumericDomainError { unit: String, value: f64 },
    #[error("Invalid conversion options: {0}")]
    InvalidConfig(String),
}

/// Convenience type for `Result<T, UnitError>`.
pub type UnitResult<T> = Result<T, UnitError>;
