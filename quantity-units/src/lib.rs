//! Quantity Units - Physical Quantities with Exact Unit Conversion
//!
//! Parses strings like "5.6 kg*m/s^2" into a scalar plus numerator and
//! denominator lists of canonical unit tokens, then converts, combines and
//! compares them with dimensional checking.
//!
//! Scalars are exact rationals, so "32 tempF" converts to exactly
//! "0 tempC" and round trips lose nothing.
//!
//! Absolute temperatures (`tempK`, `tempC`, `tempF`, `tempR`) are kept
//! apart from degree intervals (`degK`, `degC`, `degF`, `degR`):
//! a temperature may only be shifted by a degree, scaled, converted,
//! or subtracted from another temperature.
//!
//! ```ignore
//! use quantity_units::Quantity;
//!
//! let mass = Quantity::parse("25 kg")?;
//! assert_eq!(mass.to("lb")?.format(2), "55.12 lbs");
//! ```

mod convert;
mod dimension;
mod parse;
mod quantity;
mod registry;
mod temperature;
mod unit;
mod units;

pub use convert::{base_form, to_base_units, BaseForm};
pub use dimension::{Dimension, SIGNATURE_VECTOR};
pub use parse::{parse_quantity, parse_units, ParsedQuantity};
pub use quantity::{Operand, Quantity, QuantityDefinition, QuantityInput};
pub use registry::{initialize, registry, Registry, UnitValue};
pub use temperature::Scale;
pub use unit::{clean_terms, stringify_units, units_string, Term};
pub use units::{Token, BASE_UNITS, UNITY};

pub use quantity_core::{codes, Number, QuantityError, Result};

/// Largest power accepted in unit strings and by `Quantity::pow`
pub const MAX_EXPONENT: u32 = 1000;
