//! Exact numbers using dashu
//!
//! Uses dashu-ratio (RBig) so that every finite decimal string is held
//! exactly. Conversion factors like 5/9 stay exact through any chain of
//! multiplications and divisions, which keeps temperature and unit
//! round-trips free of binary floating point error.

use dashu_int::{IBig, UBig};
use dashu_ratio::RBig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error type for number operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("Invalid number format: {0}")]
    ParseError(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Overflow: {0}")]
    Overflow(String),
}

/// Largest decimal exponent accepted by the parser ("1e4096")
const MAX_DECIMAL_EXPONENT: i64 = 4096;

/// Significant digits shown by `Display` for non-terminating values
const DISPLAY_SIGNIFICANT_DIGITS: usize = 20;

/// Upper bound on fractional digits rendered by `Display`
const DISPLAY_MAX_PLACES: usize = 1024;

/// Exact rational number
///
/// All operations return new Numbers or Results - never panic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Number {
    inner: RBig,
}

fn ten_pow(exp: usize) -> UBig {
    UBig::from(10u8).pow(exp)
}

/// Parse "[+-]digits[.digits][(e|E)[+-]digits]" exactly
fn parse_decimal(text: &str) -> Result<RBig, NumberError> {
    let invalid = || NumberError::ParseError(text.to_string());

    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(pos) => {
            let exp: i64 = unsigned[pos + 1..].parse().map_err(|_| invalid())?;
            (&unsigned[..pos], exp)
        }
        None => (unsigned, 0),
    };

    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (int_part.is_empty() && frac_part.is_empty()) || !all_digits(int_part) || !all_digits(frac_part) {
        return Err(invalid());
    }
    if exponent.abs() > MAX_DECIMAL_EXPONENT {
        return Err(NumberError::Overflow(text.to_string()));
    }

    let mut significand: IBig = format!("{}{}", int_part, frac_part)
        .parse()
        .map_err(|_| invalid())?;
    if negative {
        significand = -significand;
    }

    // significand * 10^(exponent - fraction digits)
    let scale = exponent - frac_part.len() as i64;
    let value = if scale >= 0 {
        RBig::from_parts(significand * IBig::from(ten_pow(scale as usize)), UBig::ONE)
    } else {
        RBig::from_parts(significand, ten_pow(scale.unsigned_abs() as usize))
    };
    Ok(value)
}

impl Number {
    // ========== Construction ==========

    /// Create from string representation
    /// Supports: "123", "3.14", ".5", "-42", "1.5e10", "1/3", "6.2831/60"
    pub fn from_str(s: &str) -> Result<Self, NumberError> {
        let s = s.trim();

        if let Some((num_str, den_str)) = s.split_once('/') {
            let num = parse_decimal(num_str.trim())?;
            let den = parse_decimal(den_str.trim())?;
            return Self { inner: num }.checked_div(&Self { inner: den });
        }

        Ok(Self { inner: parse_decimal(s)? })
    }

    pub fn from_i64(n: i64) -> Self {
        Self { inner: RBig::from_parts(IBig::from(n), UBig::ONE) }
    }

    /// Create from ratio (exact division)
    pub fn from_ratio(num: i64, den: i64) -> Result<Self, NumberError> {
        if den == 0 {
            return Err(NumberError::DivisionByZero);
        }
        let num = if den < 0 { -IBig::from(num) } else { IBig::from(num) };
        Ok(Self { inner: RBig::from_parts(num, UBig::from(den.unsigned_abs())) })
    }

    /// Create from f64 using its shortest decimal representation
    pub fn from_f64(f: f64) -> Self {
        if !f.is_finite() {
            return Self::zero();
        }
        Self::from_str(&format!("{}", f)).unwrap_or_else(|_| Self::zero())
    }

    pub fn zero() -> Self {
        Self::from_i64(0)
    }

    pub fn one() -> Self {
        Self::from_i64(1)
    }

    // ========== Predicates ==========

    pub fn is_zero(&self) -> bool {
        *self.inner.numerator() == IBig::ZERO
    }

    pub fn is_negative(&self) -> bool {
        *self.inner.numerator() < IBig::ZERO
    }

    pub fn is_integer(&self) -> bool {
        *self.inner.denominator() == UBig::ONE
    }

    // ========== Arithmetic ==========

    pub fn add(&self, other: &Self) -> Self {
        Self { inner: &self.inner + &other.inner }
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self { inner: &self.inner - &other.inner }
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self { inner: &self.inner * &other.inner }
    }

    /// Safe division (returns Result, never panics)
    pub fn checked_div(&self, other: &Self) -> Result<Self, NumberError> {
        if other.is_zero() {
            Err(NumberError::DivisionByZero)
        } else {
            Ok(Self { inner: &self.inner / &other.inner })
        }
    }

    /// 1/x
    pub fn recip(&self) -> Result<Self, NumberError> {
        Self::one().checked_div(self)
    }

    pub fn neg(&self) -> Self {
        Self { inner: -self.inner.clone() }
    }

    pub fn abs(&self) -> Self {
        if self.is_negative() { self.neg() } else { self.clone() }
    }

    /// Integer power (exact). Negative exponents take the reciprocal.
    pub fn pow(&self, exp: i64) -> Result<Self, NumberError> {
        let mut base = self.inner.clone();
        let mut acc = Self::one().inner;
        let mut remaining = exp.unsigned_abs();

        // Square and multiply
        while remaining > 0 {
            if remaining & 1 == 1 {
                acc = &acc * &base;
            }
            remaining >>= 1;
            if remaining > 0 {
                base = &base * &base;
            }
        }

        let result = Self { inner: acc };
        if exp < 0 { result.recip() } else { Ok(result) }
    }

    // ========== Conversion ==========

    /// Try to convert to i64 (integers only)
    pub fn to_i64(&self) -> Option<i64> {
        if !self.is_integer() {
            return None;
        }
        i64::try_from(self.inner.numerator().clone()).ok()
    }

    /// Convert to f64 (may lose precision)
    pub fn to_f64(&self) -> Option<f64> {
        self.to_string().parse::<f64>().ok().filter(|f| f.is_finite())
    }

    // ========== Display ==========

    /// Render with exactly `places` decimal places, rounding half away from zero
    pub fn as_decimal(&self, places: u32) -> String {
        let places = places as usize;
        let scaled = self.rounded_scaled(places);
        let is_zero = scaled == UBig::ZERO;

        let mut digits = scaled.to_string();
        if places > 0 {
            if digits.len() <= places {
                digits = format!("{}{}", "0".repeat(places + 1 - digits.len()), digits);
            }
            digits.insert(digits.len() - places, '.');
        }
        if self.is_negative() && !is_zero {
            digits.insert(0, '-');
        }
        digits
    }

    /// |self| * 10^places, rounded to an integer
    fn rounded_scaled(&self, places: usize) -> UBig {
        let (numer, denom) = self.magnitude();
        let scaled = numer * ten_pow(places);
        let quotient = &scaled / &denom;
        let remainder = &scaled % &denom;
        if remainder * UBig::from(2u8) >= denom {
            quotient + UBig::ONE
        } else {
            quotient
        }
    }

    fn magnitude(&self) -> (UBig, UBig) {
        let numer = self.inner.numerator().clone();
        let numer = if numer < IBig::ZERO { -numer } else { numer };
        (UBig::try_from(numer).unwrap_or(UBig::ZERO), self.inner.denominator().clone())
    }

    /// Fractional digits needed by `Display`
    fn display_places(&self) -> usize {
        if self.is_integer() {
            return 0;
        }

        // Terminating decimals (denominator 2^a * 5^b) print exactly
        let two = UBig::from(2u8);
        let five = UBig::from(5u8);
        let mut rest = self.inner.denominator().clone();
        let (mut twos, mut fives) = (0usize, 0usize);
        while &rest % &two == UBig::ZERO {
            rest = &rest / &two;
            twos += 1;
        }
        while &rest % &five == UBig::ZERO {
            rest = &rest / &five;
            fives += 1;
        }
        if rest == UBig::ONE {
            return twos.max(fives).min(DISPLAY_MAX_PLACES);
        }

        let (numer, denom) = self.magnitude();
        if numer >= denom {
            return DISPLAY_SIGNIFICANT_DIGITS;
        }
        let mut scaled = numer;
        let mut leading = 0usize;
        let ten = UBig::from(10u8);
        while scaled < denom && leading < DISPLAY_MAX_PLACES {
            scaled = scaled * &ten;
            leading += 1;
        }
        (leading + DISPLAY_SIGNIFICANT_DIGITS - 1).min(DISPLAY_MAX_PLACES)
    }
}

// ========== Trait Implementations ==========

// RBig is always reduced, so equal values share a numerator/denominator pair
impl std::hash::Hash for Number {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.inner.numerator().to_string().hash(state);
        self.inner.denominator().to_string().hash(state);
    }
}

impl std::str::FromStr for Number {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Number::from_str(s)
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = self.as_decimal(self.display_places() as u32);
        if text.contains('.') {
            write!(f, "{}", text.trim_end_matches('0').trim_end_matches('.'))
        } else {
            write!(f, "{}", text)
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::from_i64(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::from_i64(n as i64)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Self::from_f64(f)
    }
}
