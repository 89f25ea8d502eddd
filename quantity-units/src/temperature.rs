//! Absolute temperatures and degree intervals
//!
//! Kelvin is the pivot for absolute readings:
//! C = K - 273.15, F = K·9/5 - 459.67, R = K·9/5.
//! Intervals carry no offset: degK = degC, degF = degR = degK·9/5.

use std::sync::LazyLock;

use quantity_core::Number;

use crate::units::Token;

static FIVE_NINTHS: LazyLock<Number> =
    LazyLock::new(|| Number::from_str("5/9").expect("constant"));
static NINE_FIFTHS: LazyLock<Number> =
    LazyLock::new(|| Number::from_str("9/5").expect("constant"));
static CELSIUS_OFFSET: LazyLock<Number> =
    LazyLock::new(|| Number::from_str("273.15").expect("constant"));
static FAHRENHEIT_OFFSET: LazyLock<Number> =
    LazyLock::new(|| Number::from_str("459.67").expect("constant"));

/// One of the four temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

impl Scale {
    /// Scale of an absolute temperature token (`<temp-C>`)
    pub fn of_temperature(token: &str) -> Option<Scale> {
        match token {
            "<temp-K>" => Some(Scale::Kelvin),
            "<temp-C>" => Some(Scale::Celsius),
            "<temp-F>" => Some(Scale::Fahrenheit),
            "<temp-R>" => Some(Scale::Rankine),
            _ => None,
        }
    }

    /// Scale of a degree interval token (`<celsius>`)
    pub fn of_degree(token: &str) -> Option<Scale> {
        match token {
            "<kelvin>" => Some(Scale::Kelvin),
            "<celsius>" => Some(Scale::Celsius),
            "<fahrenheit>" => Some(Scale::Fahrenheit),
            "<rankine>" => Some(Scale::Rankine),
            _ => None,
        }
    }

    pub fn temperature_token(self) -> Token {
        match self {
            Scale::Kelvin => "<temp-K>",
            Scale::Celsius => "<temp-C>",
            Scale::Fahrenheit => "<temp-F>",
            Scale::Rankine => "<temp-R>",
        }
    }

    /// Interval unit sharing this scale's step
    pub fn degree_token(self) -> Token {
        match self {
            Scale::Kelvin => "<kelvin>",
            Scale::Celsius => "<celsius>",
            Scale::Fahrenheit => "<fahrenheit>",
            Scale::Rankine => "<rankine>",
        }
    }

    /// Absolute reading on this scale to kelvin
    pub fn to_kelvin(self, value: &Number) -> Number {
        match self {
            Scale::Kelvin => value.clone(),
            Scale::Celsius => value.add(&CELSIUS_OFFSET),
            Scale::Fahrenheit => value.add(&FAHRENHEIT_OFFSET).mul(&FIVE_NINTHS),
            Scale::Rankine => value.mul(&FIVE_NINTHS),
        }
    }

    /// Kelvin reading to an absolute reading on this scale
    pub fn from_kelvin(self, kelvin: &Number) -> Number {
        match self {
            Scale::Kelvin => kelvin.clone(),
            Scale::Celsius => kelvin.sub(&CELSIUS_OFFSET),
            Scale::Fahrenheit => kelvin.mul(&NINE_FIFTHS).sub(&FAHRENHEIT_OFFSET),
            Scale::Rankine => kelvin.mul(&NINE_FIFTHS),
        }
    }

    /// Interval on this scale to a kelvin interval
    pub fn interval_to_kelvin(self, value: &Number) -> Number {
        match self {
            Scale::Kelvin | Scale::Celsius => value.clone(),
            Scale::Fahrenheit | Scale::Rankine => value.mul(&FIVE_NINTHS),
        }
    }

    /// Kelvin interval to an interval on this scale
    pub fn interval_from_kelvin(self, kelvin: &Number) -> Number {
        match self {
            Scale::Kelvin | Scale::Celsius => kelvin.clone(),
            Scale::Fahrenheit | Scale::Rankine => kelvin.mul(&NINE_FIFTHS),
        }
    }
}

/// Absolute temperature tokens may not be compounded with other units
pub fn is_temperature_token(token: &str) -> bool {
    Scale::of_temperature(token).is_some()
}
