//! Structured errors for quantity parsing, conversion and arithmetic
//!
//! Every failure here is a caller input problem. Errors carry a stable code
//! for programmatic handling alongside the human readable message.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::NumberError;

/// Standard error codes
pub mod codes {
    pub const EMPTY_INPUT: &str = "EMPTY_INPUT";
    pub const UNRECOGNIZED_QUANTITY: &str = "UNRECOGNIZED_QUANTITY";
    pub const UNRECOGNIZED_UNIT: &str = "UNRECOGNIZED_UNIT";
    pub const INVALID_EXPONENT: &str = "INVALID_EXPONENT";
    pub const INCOMPATIBLE_UNITS: &str = "INCOMPATIBLE_UNITS";
    pub const TEMPERATURE_OPERATION: &str = "TEMPERATURE_OPERATION";
    pub const DIV_ZERO: &str = "DIV_ZERO";
    pub const FRACTIONAL_POWER: &str = "FRACTIONAL_POWER";
    pub const INVALID_NUMBER: &str = "INVALID_NUMBER";
}

/// Quantity errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    #[error("Unit not recognized: empty input")]
    EmptyInput,

    #[error("Quantity not recognized: {0}")]
    UnrecognizedQuantity(String),

    #[error("Unit not recognized: {0}")]
    UnrecognizedUnit(String),

    #[error("Unit exponent is not a number: {0}")]
    InvalidExponent(String),

    #[error("Incompatible units: cannot convert {from} to {to}")]
    IncompatibleUnits { from: String, to: String },

    #[error("Temperature operation not supported: {0}")]
    TemperatureOperation(String),

    #[error("Divide by zero")]
    DivisionByZero,

    #[error("Raising quantities to a fractional power is not supported: {0}")]
    FractionalPowerUnsupported(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}

impl QuantityError {
    /// Stable machine readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => codes::EMPTY_INPUT,
            Self::UnrecognizedQuantity(_) => codes::UNRECOGNIZED_QUANTITY,
            Self::UnrecognizedUnit(_) => codes::UNRECOGNIZED_UNIT,
            Self::InvalidExponent(_) => codes::INVALID_EXPONENT,
            Self::IncompatibleUnits { .. } => codes::INCOMPATIBLE_UNITS,
            Self::TemperatureOperation(_) => codes::TEMPERATURE_OPERATION,
            Self::DivisionByZero => codes::DIV_ZERO,
            Self::FractionalPowerUnsupported(_) => codes::FRACTIONAL_POWER,
            Self::InvalidNumber(_) => codes::INVALID_NUMBER,
        }
    }

    /// Conversion between units of different dimensions.
    /// Empty unit strings are reported as "unitless".
    pub fn incompatible(from: &str, to: &str) -> Self {
        let label = |units: &str| {
            if units.is_empty() { "unitless".to_string() } else { units.to_string() }
        };
        Self::IncompatibleUnits { from: label(from), to: label(to) }
    }

    pub fn temperature(reason: impl Into<String>) -> Self {
        Self::TemperatureOperation(reason.into())
    }
}

impl Serialize for QuantityError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("QuantityError", 2)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

impl From<NumberError> for QuantityError {
    fn from(e: NumberError) -> Self {
        match e {
            NumberError::DivisionByZero => Self::DivisionByZero,
            NumberError::ParseError(s) | NumberError::Overflow(s) => Self::InvalidNumber(s),
        }
    }
}
