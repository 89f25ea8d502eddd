//! Quantity type - an exact scalar with a numerator and denominator of unit tokens

use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock};

use quantity_core::{Number, QuantityError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use crate::convert::base_form;
use crate::dimension::Dimension;
use crate::parse::parse_quantity;
use crate::registry::registry;
use crate::temperature::{is_temperature_token, Scale};
use crate::unit::{clean_terms, is_unity, units_string};
use crate::units::{Token, BASE_UNITS, UNITY};
use crate::MAX_EXPONENT;

/// Signature shared by every temperature and degree unit
const DEGREE_SIGNATURE: i64 = 400;

/// Construction record using canonical tokens, e.g. `["<kilo>", "<meter>"]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityDefinition {
    pub scalar: Number,
    #[serde(default)]
    pub numerator: Vec<String>,
    #[serde(default)]
    pub denominator: Vec<String>,
}

/// The accepted constructor inputs
#[derive(Debug, Clone)]
pub enum QuantityInput {
    /// "5.6 kg*m/s^2"
    Text(String),
    /// A scalar and a unit string, `(3, "m")`
    Scalar(Number, String),
    Definition(QuantityDefinition),
    Quantity(Quantity),
}

impl From<&str> for QuantityInput {
    fn from(s: &str) -> Self {
        QuantityInput::Text(s.to_string())
    }
}

impl From<String> for QuantityInput {
    fn from(s: String) -> Self {
        QuantityInput::Text(s)
    }
}

impl From<QuantityDefinition> for QuantityInput {
    fn from(def: QuantityDefinition) -> Self {
        QuantityInput::Definition(def)
    }
}

impl From<Quantity> for QuantityInput {
    fn from(q: Quantity) -> Self {
        QuantityInput::Quantity(q)
    }
}

/// Right-hand side of a binary operation
#[derive(Debug, Clone)]
pub enum Operand<'a> {
    Quantity(&'a Quantity),
    /// Parsed as a quantity string
    Text(&'a str),
    /// A plain number: unitless, or a pure scale factor for `mul`/`div`
    Scalar(Number),
}

impl<'a> From<&'a Quantity> for Operand<'a> {
    fn from(q: &'a Quantity) -> Self {
        Operand::Quantity(q)
    }
}

impl<'a> From<&'a str> for Operand<'a> {
    fn from(s: &'a str) -> Self {
        Operand::Text(s)
    }
}

impl<'a> From<&'a String> for Operand<'a> {
    fn from(s: &'a String) -> Self {
        Operand::Text(s.as_str())
    }
}

impl From<Number> for Operand<'_> {
    fn from(n: Number) -> Self {
        Operand::Scalar(n)
    }
}

impl From<i32> for Operand<'_> {
    fn from(n: i32) -> Self {
        Operand::Scalar(Number::from(n))
    }
}

impl From<i64> for Operand<'_> {
    fn from(n: i64) -> Self {
        Operand::Scalar(Number::from(n))
    }
}

impl From<f64> for Operand<'_> {
    fn from(f: f64) -> Self {
        Operand::Scalar(Number::from(f))
    }
}

impl<'a> Operand<'a> {
    fn resolve(self) -> Result<Cow<'a, Quantity>> {
        match self {
            Operand::Quantity(q) => Ok(Cow::Borrowed(q)),
            Operand::Text(s) => Quantity::parse(s).map(Cow::Owned),
            Operand::Scalar(n) => Quantity::unitless(n).map(Cow::Owned),
        }
    }
}

/// A physical quantity.
///
/// Immutable once built; the canonical unit string and the per-target
/// conversion cache fill lazily.
#[derive(Debug)]
pub struct Quantity {
    scalar: Number,
    numerator: Vec<Token>,
    denominator: Vec<Token>,
    base_scalar: Number,
    signature: i64,
    is_base: bool,
    units: OnceLock<String>,
    conversions: RwLock<HashMap<String, Quantity>>,
}

impl Clone for Quantity {
    fn clone(&self) -> Self {
        Quantity {
            scalar: self.scalar.clone(),
            numerator: self.numerator.clone(),
            denominator: self.denominator.clone(),
            base_scalar: self.base_scalar.clone(),
            signature: self.signature,
            is_base: self.is_base,
            units: self.units.clone(),
            conversions: RwLock::new(HashMap::new()),
        }
    }
}

fn is_base_tokens(numerator: &[Token], denominator: &[Token]) -> bool {
    numerator
        .iter()
        .chain(denominator)
        .all(|t| *t == UNITY || BASE_UNITS.contains(t))
}

/// Temperatures stand alone: never in a denominator, never compounded.
/// Runs on raw parsed terms too, before cancellation can hide them.
fn check_temperature_terms(numerator: &[Token], denominator: &[Token]) -> Result<()> {
    if denominator.iter().any(|t| is_temperature_token(t)) {
        return Err(QuantityError::temperature("cannot divide with temperatures"));
    }
    if numerator.iter().any(|t| is_temperature_token(t)) {
        if numerator.len() > 1 {
            return Err(QuantityError::temperature("cannot multiply by temperatures"));
        }
        if !(denominator.is_empty() || is_unity(denominator)) {
            return Err(QuantityError::temperature("cannot divide with temperatures"));
        }
    }
    Ok(())
}

/// Scale of a lone absolute temperature token over unity
fn temperature_scale(numerator: &[Token], denominator: &[Token]) -> Option<Scale> {
    match numerator {
        [token] if is_unity(denominator) => Scale::of_temperature(token),
        _ => None,
    }
}

impl Quantity {
    // ========== Construction ==========

    /// Build from any accepted input shape
    pub fn new(input: impl Into<QuantityInput>) -> Result<Self> {
        match input.into() {
            QuantityInput::Text(text) => Self::parse(&text),
            QuantityInput::Scalar(scalar, units) => Self::with_units(scalar, &units),
            QuantityInput::Definition(def) => Self::from_definition(def),
            QuantityInput::Quantity(q) => Ok(q),
        }
    }

    /// Parse "5.6 kg*m/s^2". Matching terms cancel ("m*m/m" is "m").
    pub fn parse(text: &str) -> Result<Self> {
        let parsed = parse_quantity(text)?;
        check_temperature_terms(&parsed.numerator, &parsed.denominator)?;
        let (numerator, denominator) = clean_terms(&parsed.numerator, &parsed.denominator);
        Self::build(parsed.scalar, numerator, denominator)
    }

    /// A scalar in the given units; any scalar inside `units` is ignored.
    /// Empty units give a unitless quantity.
    pub fn with_units(scalar: impl Into<Number>, units: &str) -> Result<Self> {
        if units.trim().is_empty() {
            return Self::unitless(scalar.into());
        }
        let parsed = parse_quantity(units)?;
        check_temperature_terms(&parsed.numerator, &parsed.denominator)?;
        let (numerator, denominator) = clean_terms(&parsed.numerator, &parsed.denominator);
        Self::build(scalar.into(), numerator, denominator)
    }

    /// Build from canonical tokens. Every token must be a registered
    /// prefix or unit token and every prefix must precede a unit.
    pub fn from_definition(def: QuantityDefinition) -> Result<Self> {
        let numerator = canonical_tokens(&def.numerator)?;
        let denominator = canonical_tokens(&def.denominator)?;
        Self::build(def.scalar, numerator, denominator)
    }

    pub fn unitless(scalar: Number) -> Result<Self> {
        Self::build(scalar, vec![UNITY], vec![UNITY])
    }

    /// Core constructor: enforce the temperature rules, then fix the base
    /// scalar and signature.
    pub(crate) fn build(
        scalar: Number,
        numerator: Vec<Token>,
        denominator: Vec<Token>,
    ) -> Result<Self> {
        let numerator = if numerator.is_empty() { vec![UNITY] } else { numerator };
        let denominator = if denominator.is_empty() { vec![UNITY] } else { denominator };

        check_temperature_terms(&numerator, &denominator)?;

        let units = OnceLock::new();
        let is_base = is_base_tokens(&numerator, &denominator);
        let (base_scalar, signature) = if is_base {
            let signature = Dimension::from_tokens(&numerator, &denominator).signature()?;
            (scalar.clone(), signature)
        } else if let Some(scale) = temperature_scale(&numerator, &denominator) {
            (scale.to_kelvin(&scalar), DEGREE_SIGNATURE)
        } else {
            let key = units_string(&numerator, &denominator);
            let form = base_form(&key, &numerator, &denominator)?;
            let _ = units.set(key);
            (form.factor.mul(&scalar), form.signature)
        };

        if temperature_scale(&numerator, &denominator).is_some() && base_scalar.is_negative() {
            debug!(scalar = %scalar, "temperature below absolute zero");
            return Err(QuantityError::temperature(
                "temperatures must not be less than absolute zero",
            ));
        }

        Ok(Quantity {
            scalar,
            numerator,
            denominator,
            base_scalar,
            signature,
            is_base,
            units,
            conversions: RwLock::new(HashMap::new()),
        })
    }

    // ========== Accessors ==========

    pub fn scalar(&self) -> &Number {
        &self.scalar
    }

    pub fn numerator(&self) -> &[Token] {
        &self.numerator
    }

    pub fn denominator(&self) -> &[Token] {
        &self.denominator
    }

    /// Scalar expressed in base units (kelvin for temperatures)
    pub fn base_scalar(&self) -> &Number {
        &self.base_scalar
    }

    /// Integer dimension fingerprint
    pub fn signature(&self) -> i64 {
        self.signature
    }

    /// Dimension exponents behind the signature
    pub fn signature_vector(&self) -> Result<Dimension> {
        let base = self.to_base()?;
        Ok(Dimension::from_tokens(&base.numerator, &base.denominator))
    }

    /// Canonical unit string, e.g. "kg*m/s2"; "" when unitless
    pub fn units(&self) -> &str {
        self.units
            .get_or_init(|| units_string(&self.numerator, &self.denominator))
    }

    // ========== Classification ==========

    pub fn is_base(&self) -> bool {
        self.is_base
    }

    pub fn is_unitless(&self) -> bool {
        is_unity(&self.numerator) && is_unity(&self.denominator)
    }

    /// A single temperature or degree token over unity
    pub fn is_degrees(&self) -> bool {
        self.signature == DEGREE_SIGNATURE
            && is_unity(&self.denominator)
            && matches!(self.numerator.as_slice(),
                [t] if Scale::of_temperature(t).is_some() || Scale::of_degree(t).is_some())
    }

    /// An absolute temperature reading (tempK, tempC, tempF, tempR)
    pub fn is_temperature(&self) -> bool {
        self.is_degrees() && self.temperature_scale().is_some()
    }

    fn temperature_scale(&self) -> Option<Scale> {
        temperature_scale(&self.numerator, &self.denominator)
    }

    fn degree_scale(&self) -> Option<Scale> {
        match self.numerator.as_slice() {
            [t] if is_unity(&self.denominator) => Scale::of_degree(t),
            _ => None,
        }
    }

    /// Same physical dimension. Inverse dimensions are not compatible.
    pub fn is_compatible<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool> {
        let other = other.into().resolve()?;
        Ok(self.signature == other.signature)
    }

    /// The inverse of `self` has the dimension of `other`.
    /// Temperatures have no inverse.
    pub fn is_inverse<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool> {
        let other = other.into().resolve()?;
        Ok(!self.is_temperature() && other.signature == -self.signature)
    }

    // ========== Conversion ==========

    /// Equivalent quantity in base units
    pub fn to_base(&self) -> Result<Quantity> {
        if self.is_base {
            return Ok(self.clone());
        }
        if self.is_temperature() {
            return Quantity::build(
                self.base_scalar.clone(),
                vec![Scale::Kelvin.temperature_token()],
                vec![UNITY],
            );
        }
        let form = base_form(self.units(), &self.numerator, &self.denominator)?;
        Quantity::build(self.base_scalar.clone(), form.numerator, form.denominator)
    }

    /// Swap numerator and denominator and take the reciprocal scalar
    pub fn inverse(&self) -> Result<Quantity> {
        if self.is_temperature() {
            return Err(QuantityError::temperature("cannot divide with temperatures"));
        }
        if self.scalar.is_zero() {
            return Err(QuantityError::DivisionByZero);
        }
        Quantity::build(
            self.scalar.recip()?,
            self.denominator.clone(),
            self.numerator.clone(),
        )
    }

    /// Convert to the target's units. A quantity target contributes only
    /// its units. Inverse dimensions are inverted first.
    pub fn to<'a>(&self, target: impl Into<Operand<'a>>) -> Result<Quantity> {
        let key = match target.into() {
            Operand::Quantity(q) => q.units().to_string(),
            Operand::Text(s) => s.to_string(),
            Operand::Scalar(_) => String::new(),
        };
        if key.is_empty() {
            return Ok(self.clone());
        }

        if let Ok(cache) = self.conversions.read() {
            if let Some(hit) = cache.get(&key) {
                return Ok(hit.clone());
            }
        }

        // Normalize the target units; its scalar plays no part
        let parsed = parse_quantity(&key)?;
        let (numerator, denominator) = clean_terms(&parsed.numerator, &parsed.denominator);
        let target = Quantity::build(Number::one(), numerator, denominator)?;

        if target.units() == self.units() {
            return Ok(self.clone());
        }

        trace!(from = self.units(), to = target.units(), "conversion cache miss");
        let converted = if self.signature != target.signature {
            if self.is_inverse(&target)? {
                self.inverse()?.to(key.as_str())?
            } else {
                return Err(QuantityError::incompatible(self.units(), target.units()));
            }
        } else if let Some(scale) = target.temperature_scale() {
            target.with_scalar(scale.from_kelvin(&self.base_scalar))?
        } else if let Some(scale) = target.degree_scale() {
            target.with_scalar(scale.interval_from_kelvin(&self.degrees_in_kelvin()))?
        } else {
            target.with_scalar(self.base_scalar.checked_div(&target.base_scalar)?)?
        };

        if let Ok(mut cache) = self.conversions.write() {
            cache.insert(key, converted.clone());
        }
        Ok(converted)
    }

    /// Same units, new scalar
    fn with_scalar(&self, scalar: Number) -> Result<Quantity> {
        Quantity::build(scalar, self.numerator.clone(), self.denominator.clone())
    }

    /// Size of this degree interval in kelvin. A temperature reading
    /// counts as an interval on its own scale.
    fn degrees_in_kelvin(&self) -> Number {
        match self.temperature_scale() {
            Some(scale) => scale.interval_to_kelvin(&self.scalar),
            None => self.base_scalar.clone(),
        }
    }

    /// Interval unit matching a temperature's scale ("tempC" -> "degC")
    fn degree_units(scale: Scale) -> &'static str {
        registry()
            .output_name(scale.degree_token())
            .unwrap_or("degK")
    }

    // ========== Arithmetic ==========

    pub fn add<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Quantity> {
        let other = other.into().resolve()?;
        self.ensure_compatible(&other)?;

        match (self.temperature_scale(), other.temperature_scale()) {
            (Some(_), Some(_)) => Err(QuantityError::temperature("cannot add two temperatures")),
            (Some(scale), None) => self.shift_temperature(scale, &other, Number::add),
            (None, Some(scale)) => other.shift_temperature(scale, self, Number::add),
            (None, None) => {
                let converted = other.to(self)?;
                self.with_scalar(self.scalar.add(&converted.scalar))
            }
        }
    }

    pub fn sub<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Quantity> {
        let other = other.into().resolve()?;
        self.ensure_compatible(&other)?;

        match (self.temperature_scale(), other.temperature_scale()) {
            (Some(scale), Some(_)) => {
                // Difference of two readings is an interval
                let converted = other.to(self)?;
                Quantity::build(
                    self.scalar.sub(&converted.scalar),
                    vec![scale.degree_token()],
                    vec![UNITY],
                )
            }
            (Some(scale), None) => self.shift_temperature(scale, &other, Number::sub),
            (None, Some(_)) => Err(QuantityError::temperature(
                "cannot subtract a temperature from a differential degree unit",
            )),
            (None, None) => {
                let converted = other.to(self)?;
                self.with_scalar(self.scalar.sub(&converted.scalar))
            }
        }
    }

    /// Move a temperature reading by a degree interval
    fn shift_temperature(
        &self,
        scale: Scale,
        degrees: &Quantity,
        op: fn(&Number, &Number) -> Number,
    ) -> Result<Quantity> {
        let step = degrees.to(Self::degree_units(scale))?;
        self.with_scalar(op(&self.scalar, &step.scalar))
    }

    pub fn mul<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Quantity> {
        let other = match other.into() {
            Operand::Scalar(factor) => return self.with_scalar(self.scalar.mul(&factor)),
            operand => operand.resolve()?,
        };

        if (self.is_temperature() || other.is_temperature())
            && !(self.is_unitless() || other.is_unitless())
        {
            return Err(QuantityError::temperature("cannot multiply by temperatures"));
        }

        let other = self.aligned(other)?;
        let (numerator, denominator) = clean_terms(
            &[self.numerator.as_slice(), other.numerator.as_slice()].concat(),
            &[self.denominator.as_slice(), other.denominator.as_slice()].concat(),
        );
        Quantity::build(self.scalar.mul(&other.scalar), numerator, denominator)
    }

    pub fn div<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Quantity> {
        let other = match other.into() {
            Operand::Scalar(divisor) => {
                return self.with_scalar(self.scalar.checked_div(&divisor)?)
            }
            operand => operand.resolve()?,
        };

        if other.is_temperature() || (self.is_temperature() && !other.is_unitless()) {
            return Err(QuantityError::temperature("cannot divide with temperatures"));
        }

        let other = self.aligned(other)?;
        let (numerator, denominator) = clean_terms(
            &[self.numerator.as_slice(), other.denominator.as_slice()].concat(),
            &[self.denominator.as_slice(), other.numerator.as_slice()].concat(),
        );
        Quantity::build(self.scalar.checked_div(&other.scalar)?, numerator, denominator)
    }

    /// Express a compatible operand in our units before combining terms.
    /// Degree units keep their own scales ("degK*degC/degC2" is "degK/degC").
    fn aligned<'a>(&self, other: Cow<'a, Quantity>) -> Result<Cow<'a, Quantity>> {
        if self.signature == other.signature && self.signature != DEGREE_SIGNATURE {
            Ok(Cow::Owned(other.to(self)?))
        } else {
            Ok(other)
        }
    }

    /// Integer powers only. A power of zero is the unitless 1.
    pub fn pow(&self, exponent: impl Into<Number>) -> Result<Quantity> {
        let exponent = exponent.into();
        if !exponent.is_integer() {
            return Err(QuantityError::FractionalPowerUnsupported(exponent.to_string()));
        }
        let n = exponent
            .to_i64()
            .filter(|n| n.unsigned_abs() <= u64::from(MAX_EXPONENT))
            .ok_or_else(|| QuantityError::InvalidExponent(exponent.to_string()))?;

        if n == 0 {
            return Quantity::unitless(Number::one());
        }

        let repeat = n.unsigned_abs() as usize;
        let mut numerator = self.numerator.repeat(repeat);
        let mut denominator = self.denominator.repeat(repeat);
        if n < 0 {
            std::mem::swap(&mut numerator, &mut denominator);
        }

        let (numerator, denominator) = clean_terms(&numerator, &denominator);
        Quantity::build(self.scalar.pow(n)?, numerator, denominator)
    }

    // ========== Comparison ==========

    /// Order by base scalar. Only quantities of the same dimension compare.
    pub fn compare_to<'a>(&self, other: impl Into<Operand<'a>>) -> Result<Ordering> {
        let other = other.into().resolve()?;
        self.ensure_compatible(&other)?;
        Ok(self.base_scalar.cmp(&other.base_scalar))
    }

    pub fn eq<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool> {
        Ok(self.compare_to(other)? == Ordering::Equal)
    }

    pub fn lt<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool> {
        Ok(self.compare_to(other)? == Ordering::Less)
    }

    pub fn lte<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool> {
        Ok(self.compare_to(other)? != Ordering::Greater)
    }

    pub fn gt<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool> {
        Ok(self.compare_to(other)? == Ordering::Greater)
    }

    pub fn gte<'a>(&self, other: impl Into<Operand<'a>>) -> Result<bool> {
        Ok(self.compare_to(other)? != Ordering::Less)
    }

    /// Same scalar and same unit string ("100 cm" is not the same as "1 m")
    pub fn same(&self, other: &Quantity) -> bool {
        self.scalar == other.scalar && self.units() == other.units()
    }

    fn ensure_compatible(&self, other: &Quantity) -> Result<()> {
        if self.signature == other.signature {
            Ok(())
        } else {
            Err(QuantityError::incompatible(self.units(), other.units()))
        }
    }

    // ========== Display ==========

    /// Render with a fixed number of decimal places
    pub fn format(&self, places: u32) -> String {
        let scalar = self.scalar.as_decimal(places);
        match self.units() {
            "" => scalar,
            units => format!("{} {}", scalar, units),
        }
    }
}

/// Validate user supplied tokens against the registry
fn canonical_tokens(tokens: &[String]) -> Result<Vec<Token>> {
    let reg = registry();
    let resolved = tokens
        .iter()
        .map(|t| {
            reg.canonical_token(t)
                .ok_or_else(|| QuantityError::UnrecognizedUnit(t.clone()))
        })
        .collect::<Result<Vec<Token>>>()?;

    // A prefix needs a unit right after it
    for (i, token) in resolved.iter().enumerate() {
        if reg.is_prefix(token) {
            match resolved.get(i + 1) {
                Some(next) if !reg.is_prefix(next) => {}
                _ => return Err(QuantityError::UnrecognizedUnit(token.to_string())),
            }
        }
    }
    Ok(resolved)
}

impl FromStr for Quantity {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self> {
        Quantity::parse(s)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.units() {
            "" => write!(f, "{}", self.scalar),
            units => write!(f, "{} {}", self.scalar, units),
        }
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Quantity::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(s: &str) -> Quantity {
        Quantity::parse(s).unwrap()
    }

    fn n(s: &str) -> Number {
        Number::from_str(s).unwrap()
    }

    // ========== Construction ==========

    #[test]
    fn test_parse_basic() {
        let force = q("5.6 kg*m/s^2");
        assert_eq!(force.scalar(), &n("5.6"));
        assert_eq!(force.units(), "kg*m/s2");
        assert_eq!(force.to_string(), "5.6 kg*m/s2");
    }

    #[test]
    fn test_constructor_inputs() {
        assert_eq!(Quantity::new("3 m").unwrap().units(), "m");

        let scaled = Quantity::new(QuantityInput::Scalar(Number::from_i64(2), "5 m".into())).unwrap();
        assert_eq!(scaled.scalar(), &Number::from_i64(2));
        assert_eq!(scaled.units(), "m");

        let copy = Quantity::new(q("1 s")).unwrap();
        assert!(copy.same(&q("1 s")));
    }

    #[test]
    fn test_with_units() {
        let length = Quantity::with_units(3, "ft").unwrap();
        assert_eq!(length.to_string(), "3 ft");
        let plain = Quantity::with_units(4, "").unwrap();
        assert!(plain.is_unitless());
    }

    #[test]
    fn test_from_definition() {
        let def = QuantityDefinition {
            scalar: Number::from_i64(2),
            numerator: vec!["<kilo>".into(), "<meter>".into()],
            denominator: vec![],
        };
        let distance = Quantity::from_definition(def).unwrap();
        assert_eq!(distance.units(), "km");
        assert_eq!(distance.base_scalar(), &Number::from_i64(2000));
    }

    #[test]
    fn test_from_definition_rejects_bad_tokens() {
        let unknown = QuantityDefinition {
            scalar: Number::one(),
            numerator: vec!["meter".into()],
            denominator: vec![],
        };
        assert!(matches!(
            Quantity::from_definition(unknown),
            Err(QuantityError::UnrecognizedUnit(_))
        ));

        let dangling = QuantityDefinition {
            scalar: Number::one(),
            numerator: vec!["<meter>".into(), "<kilo>".into()],
            denominator: vec![],
        };
        assert!(Quantity::from_definition(dangling).is_err());
    }

    #[test]
    fn test_definition_from_json() {
        let def: QuantityDefinition =
            serde_json::from_str(r#"{"scalar": "1.5", "numerator": ["<second>"]}"#).unwrap();
        assert_eq!(Quantity::from_definition(def).unwrap().to_string(), "1.5 s");
    }

    #[test]
    fn test_unitless() {
        let one = q("1");
        assert!(one.is_unitless());
        assert_eq!(one.units(), "");
        assert_eq!(one.to_string(), "1");
    }

    #[test]
    fn test_parse_cancels_terms() {
        assert_eq!(q("m*m/m").units(), "m");
        assert_eq!(q("degK*degC/degC^2").units(), "degK/degC");
    }

    #[test]
    fn test_clone_keeps_value() {
        let original = q("25 kg");
        let _ = original.to("g").unwrap();
        let copy = original.clone();
        assert!(copy.same(&original));
        assert_eq!(copy.base_scalar(), original.base_scalar());
    }

    // ========== Temperature rules ==========

    #[test]
    fn test_temperature_in_denominator_fails() {
        assert!(matches!(
            Quantity::parse("5 tempK/s"),
            Err(QuantityError::TemperatureOperation(_))
        ));
        assert!(matches!(
            Quantity::parse("5 m/tempC"),
            Err(QuantityError::TemperatureOperation(_))
        ));
    }

    #[test]
    fn test_compound_temperature_fails() {
        assert!(matches!(
            Quantity::parse("5 tempC*m"),
            Err(QuantityError::TemperatureOperation(_))
        ));
    }

    #[test]
    fn test_cancelled_temperature_terms_fail() {
        for text in ["5 tempK/tempK", "5 tempC*tempC/tempC", "5 m*tempF/tempF"] {
            assert!(
                matches!(Quantity::parse(text), Err(QuantityError::TemperatureOperation(_))),
                "{text}"
            );
        }
        assert!(matches!(
            Quantity::with_units(3, "m*tempF/tempF"),
            Err(QuantityError::TemperatureOperation(_))
        ));
        assert!(matches!(
            Quantity::with_units(3, "tempR/tempR"),
            Err(QuantityError::TemperatureOperation(_))
        ));
    }

    #[test]
    fn test_below_absolute_zero_fails() {
        assert!(Quantity::parse("-1 tempK").is_err());
        assert!(Quantity::parse("-300 tempC").is_err());
        assert!(Quantity::parse("-460 tempF").is_err());
        assert!(Quantity::parse("-273.15 tempC").is_ok());
    }

    #[test]
    fn test_temperature_scenarios() {
        assert_eq!(q("32 tempF").to("tempC").unwrap().scalar(), &Number::zero());
        assert_eq!(q("500 tempF").to("tempC").unwrap().scalar(), &n("260"));
        assert_eq!(q("500 tempK").to("tempC").unwrap().scalar(), &n("226.85"));
        assert_eq!(q("500 tempK").to("tempR").unwrap().scalar(), &n("900"));
        assert_eq!(q("0 tempC").to("tempF").unwrap().scalar(), &n("32"));
    }

    #[test]
    fn test_degree_conversion() {
        assert_eq!(q("10 degC").to("degF").unwrap().scalar(), &n("18"));
        assert_eq!(q("9 degF").to("degK").unwrap().scalar(), &n("5"));
        assert_eq!(q("100 tempC").to("degC").unwrap().scalar(), &n("100"));
    }

    #[test]
    fn test_temperature_classification() {
        let reading = q("20 tempC");
        assert!(reading.is_degrees());
        assert!(reading.is_temperature());
        assert_eq!(reading.signature(), 400);

        let interval = q("20 degC");
        assert!(interval.is_degrees());
        assert!(!interval.is_temperature());
        assert!(reading.is_compatible(&interval).unwrap());
    }

    #[test]
    fn test_temperature_add_and_sub() {
        let warmer = q("100 tempC").add("18 degF").unwrap();
        assert_eq!(warmer.to_string(), "110 tempC");

        let also_warmer = q("10 degC").add("100 tempC").unwrap();
        assert_eq!(also_warmer.to_string(), "110 tempC");

        let cooler = q("100 tempC").sub("10 degC").unwrap();
        assert_eq!(cooler.to_string(), "90 tempC");

        let difference = q("100 tempC").sub("50 tempC").unwrap();
        assert_eq!(difference.to_string(), "50 degC");

        let mixed = q("212 tempF").sub("0 tempC").unwrap();
        assert_eq!(mixed.to_string(), "180 degF");
    }

    #[test]
    fn test_forbidden_temperature_arithmetic() {
        let reading = q("100 tempC");
        assert!(matches!(reading.add("5 tempC"), Err(QuantityError::TemperatureOperation(_))));
        assert!(matches!(q("5 degC").sub(&reading), Err(QuantityError::TemperatureOperation(_))));
        assert!(matches!(reading.mul("2 m"), Err(QuantityError::TemperatureOperation(_))));
        assert!(matches!(q("2 m").div(&reading), Err(QuantityError::TemperatureOperation(_))));
        assert!(matches!(reading.div("2 s"), Err(QuantityError::TemperatureOperation(_))));
        assert!(matches!(reading.inverse(), Err(QuantityError::TemperatureOperation(_))));
        assert!(reading.pow(2).is_err());
    }

    #[test]
    fn test_temperature_scaling_is_allowed() {
        assert_eq!(q("100 tempC").mul(2).unwrap().to_string(), "200 tempC");
        assert_eq!(q("100 tempC").mul("2").unwrap().to_string(), "200 tempC");
        assert_eq!(q("100 tempC").div(4).unwrap().to_string(), "25 tempC");
        assert!(!q("100 tempC").is_inverse("1 tempC").unwrap());
    }

    // ========== Conversion ==========

    #[test]
    fn test_to_simple() {
        assert_eq!(q("1 km").to("m").unwrap().scalar(), &Number::from_i64(1000));
        assert_eq!(q("1 h").to("min").unwrap().scalar(), &Number::from_i64(60));
        assert_eq!(q("25 kg").to("lb").unwrap().format(2), "55.12 lbs");
    }

    #[test]
    fn test_to_ignores_target_scalar() {
        let target = q("3 cm");
        let converted = q("2 m").to(&target).unwrap();
        assert_eq!(converted.to_string(), "200 cm");
        assert_eq!(q("2 m").to("5 cm").unwrap().to_string(), "200 cm");
    }

    #[test]
    fn test_to_round_trip() {
        for text in ["5.6 kg*m/s^2", "3 mph", "20 tempF", "7 GiB", "1"] {
            let value = q(text);
            let back = value.to(value.units()).unwrap();
            assert!(back.same(&value), "{text}");
        }
    }

    #[test]
    fn test_to_incompatible() {
        let err = q("1 m").to("s").unwrap_err();
        assert_eq!(
            err,
            QuantityError::IncompatibleUnits { from: "m".into(), to: "s".into() }
        );
    }

    #[test]
    fn test_to_inverts_when_needed() {
        let conductance = q("10 S");
        assert!(!conductance.is_compatible("1 ohm").unwrap());
        assert!(conductance.is_inverse("1 ohm").unwrap());
        assert_eq!(conductance.to("ohm").unwrap().to_string(), "0.1 Ohm");
    }

    #[test]
    fn test_to_is_cached() {
        let mass = q("3 lb");
        let first = mass.to("kg").unwrap();
        let second = mass.to("kg").unwrap();
        assert!(first.same(&second));
    }

    #[test]
    fn test_to_base() {
        let speed = q("36 km/h");
        let base = speed.to_base().unwrap();
        assert_eq!(base.units(), "m/s");
        assert_eq!(base.scalar(), &Number::from_i64(10));
        assert!(base.is_base());
        assert!(base.to_base().unwrap().same(&base));
    }

    #[test]
    fn test_to_base_temperature() {
        let base = q("0 tempC").to_base().unwrap();
        assert_eq!(base.to_string(), "273.15 tempK");
    }

    #[test]
    fn test_is_base() {
        assert!(q("1 m").is_base());
        assert!(q("1 kg*m/s^2").is_base());
        assert!(!q("1 km").is_base());
        assert!(q("1 tempK").is_base());
        assert!(q("1 degK").is_base());
        assert!(!q("1 degC").is_base());
    }

    #[test]
    fn test_signature_vector() {
        let vector = q("1 N").signature_vector().unwrap();
        assert_eq!(vector.to_string(), "length·time^-2·mass");
        assert_eq!(vector.signature().unwrap(), q("1 N").signature());
    }

    // ========== Arithmetic ==========

    #[test]
    fn test_add_and_sub() {
        assert_eq!(q("1 m").add("10 cm").unwrap().to_string(), "1.1 m");
        assert_eq!(q("1 m").sub("10 cm").unwrap().to_string(), "0.9 m");
        assert!(matches!(
            q("1 m").add("1 s"),
            Err(QuantityError::IncompatibleUnits { .. })
        ));
    }

    #[test]
    fn test_mul() {
        assert_eq!(q("2 m").mul("50 cm").unwrap().to_string(), "1 m2");
        assert_eq!(q("2 m").mul("3 s").unwrap().to_string(), "6 m*s");
        assert_eq!(q("2 m").mul(3).unwrap().to_string(), "6 m");
        assert_eq!(q("2 degK").mul("3 degC").unwrap().units(), "degK*degC");
    }

    #[test]
    fn test_div() {
        assert_eq!(q("6 m").div("2 s").unwrap().to_string(), "3 m/s");
        assert_eq!(q("6 m").div("200 cm").unwrap().to_string(), "3");
        assert_eq!(q("6 m").div(4).unwrap().to_string(), "1.5 m");
    }

    #[test]
    fn test_division_by_zero() {
        assert!(matches!(q("1 m").div(0), Err(QuantityError::DivisionByZero)));
        assert!(matches!(q("1 m").div("0 s"), Err(QuantityError::DivisionByZero)));
        assert!(matches!(q("0 m").inverse(), Err(QuantityError::DivisionByZero)));
    }

    #[test]
    fn test_cancellation_through_arithmetic() {
        let area = q("1 m").mul("1 m").unwrap();
        assert_eq!(area.div("1 m").unwrap().units(), "m");
    }

    #[test]
    fn test_pow_scenarios() {
        let ten = q("10m");
        assert!(ten.pow(2).unwrap().same(&q("100m^2")));
        assert!(ten.pow(-1).unwrap().same(&q("0.1m^-1")));
        assert!(matches!(
            ten.pow(0.5),
            Err(QuantityError::FractionalPowerUnsupported(_))
        ));
    }

    #[test]
    fn test_pow_identities() {
        let side = q("3 m");
        assert!(side.pow(1).unwrap().same(&side));
        assert!(side.mul(&side).unwrap().same(&side.pow(2).unwrap()));
        assert!(side.pow(0).unwrap().same(&q("1")));
        assert!(matches!(side.pow(5000), Err(QuantityError::InvalidExponent(_))));
    }

    #[test]
    fn test_pow_signature_overflow_fails() {
        let capacitance = q("farad^1000");
        assert!(matches!(
            capacitance.pow(1000),
            Err(QuantityError::InvalidExponent(_))
        ));
    }

    #[test]
    fn test_inverse() {
        let period = q("4 s").inverse().unwrap();
        assert_eq!(period.to_string(), "0.25 1/s");
        assert!(period.is_compatible("1 Hz").unwrap());
    }

    // ========== Comparison ==========

    #[test]
    fn test_compare() {
        let metre = q("1 m");
        assert_eq!(metre.compare_to("100 cm").unwrap(), Ordering::Equal);
        assert!(metre.eq("100 cm").unwrap());
        assert!(metre.lt("2 m").unwrap());
        assert!(metre.lte("1 m").unwrap());
        assert!(metre.gt("1 mm").unwrap());
        assert!(metre.gte("99 cm").unwrap());
        assert!(metre.gt("1 s").is_err());
    }

    #[test]
    fn test_same_is_strict() {
        assert!(!q("100 cm").same(&q("1 m")));
        assert!(q("100 cm").same(&q("100 cm")));
        assert!(q("100 cm").eq("1 m").unwrap());
    }

    #[test]
    fn test_compatibility_is_symmetric() {
        let a = q("1 N");
        let b = q("1 kg*m/s^2");
        assert!(a.is_compatible(&a).unwrap());
        assert!(a.is_compatible(&b).unwrap());
        assert!(b.is_compatible(&a).unwrap());
    }

    // ========== Display ==========

    #[test]
    fn test_format() {
        assert_eq!(q("2 m").div(3).unwrap().format(3), "0.667 m");
        assert_eq!(q("5").format(2), "5.00");
    }

    #[test]
    fn test_serde() {
        let force = q("5.6 kg*m/s^2");
        let json = serde_json::to_string(&force).unwrap();
        assert_eq!(json, "\"5.6 kg*m/s2\"");
        let back: Quantity = serde_json::from_str(&json).unwrap();
        assert!(back.same(&force));
    }
}
