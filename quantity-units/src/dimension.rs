//! Dimensional signature
//!
//! Each quantity reduced to base tokens projects onto an 11-element vector:
//! [length, time, temperature, mass, current, substance, luminosity,
//!  currency, data, angle, capacitance]
//! Numerator tokens count +1 and denominator tokens -1 along the category
//! of the token. The vector folds into one integer with weight 20^i.

use std::fmt;

use quantity_core::{QuantityError, Result};
use serde::{Deserialize, Serialize};

use crate::registry::registry;
use crate::units::Token;

/// Dimension families, in signature order
pub const SIGNATURE_VECTOR: [&str; 11] = [
    "length",
    "time",
    "temperature",
    "mass",
    "current",
    "substance",
    "luminosity",
    "currency",
    "data",
    "angle",
    "capacitance",
];

/// Positional weight of the signature encoding
const SIGNATURE_BASE: i64 = 20;

/// Exponents of a base-unit composition along `SIGNATURE_VECTOR`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    pub exponents: [i32; 11],
}

impl Dimension {
    pub const DIMENSIONLESS: Dimension = Dimension { exponents: [0; 11] };

    /// Project base tokens onto the signature vector. Tokens whose category
    /// is not a signature family (unity, sound) contribute nothing.
    pub fn from_tokens(numerator: &[Token], denominator: &[Token]) -> Self {
        let reg = registry();
        let index_of = |token: &Token| {
            let category = reg.category_of(token)?;
            SIGNATURE_VECTOR.iter().position(|name| *name == category)
        };

        let mut exponents = [0i32; 11];
        for i in numerator.iter().filter_map(index_of) {
            exponents[i] += 1;
        }
        for i in denominator.iter().filter_map(index_of) {
            exponents[i] -= 1;
        }
        Dimension { exponents }
    }

    /// Fold into the integer signature. Fails when the exponents are too
    /// large for the encoding.
    pub fn signature(&self) -> Result<i64> {
        self.exponents
            .iter()
            .zip(0u32..)
            .try_fold(0i64, |acc, (&e, i)| {
                i64::from(e)
                    .checked_mul(SIGNATURE_BASE.pow(i))
                    .and_then(|term| acc.checked_add(term))
            })
            .ok_or_else(|| QuantityError::InvalidExponent(self.to_string()))
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    pub fn invert(&self) -> Dimension {
        let mut exponents = self.exponents;
        for e in exponents.iter_mut() {
            *e = -*e;
        }
        Dimension { exponents }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "dimensionless");
        }
        let parts: Vec<String> = SIGNATURE_VECTOR
            .iter()
            .zip(self.exponents.iter())
            .filter(|(_, &e)| e != 0)
            .map(|(name, &e)| if e == 1 { name.to_string() } else { format!("{}^{}", name, e) })
            .collect();
        write!(f, "{}", parts.join("·"))
    }
}
