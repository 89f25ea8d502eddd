//! Quantity Core - exact numbers and structured errors
//!
//! Shared by the unit registry, the parser and the quantity arithmetic.

mod error;
mod number;

pub use error::{codes, QuantityError};
pub use number::{Number, NumberError};

/// Common result alias
pub type Result<T> = std::result::Result<T, QuantityError>;

#[cfg(test)]
mod number_tests {
    use super::*;

    #[test]
    fn test_hash_matches_equality() {
        use std::collections::HashSet;
        let mut seen = HashSet::new();
        seen.insert(Number::from_str("0.5").unwrap());
        assert!(seen.contains(&Number::from_str("1/2").unwrap()));
        assert!(!seen.contains(&Number::from_str("0.25").unwrap()));
    }

    #[test]
    fn test_from_str_integer() {
        let n = Number::from_str("42").unwrap();
        assert_eq!(n.to_string(), "42");
        assert_eq!(n.to_i64(), Some(42));
    }

    #[test]
    fn test_from_str_decimal_is_exact() {
        let a = Number::from_str("0.1").unwrap();
        let b = Number::from_str("0.2").unwrap();
        assert_eq!(a.add(&b), Number::from_str("0.3").unwrap());
    }

    #[test]
    fn test_from_str_forms() {
        assert_eq!(Number::from_str(".5").unwrap().to_string(), "0.5");
        assert_eq!(Number::from_str("+7").unwrap().to_string(), "7");
        assert_eq!(Number::from_str("-2.50").unwrap().to_string(), "-2.5");
        assert_eq!(Number::from_str("1.5e3").unwrap().to_string(), "1500");
        assert_eq!(Number::from_str("25E-3").unwrap().to_string(), "0.025");
    }

    #[test]
    fn test_from_str_fraction() {
        let n = Number::from_str("5/9").unwrap();
        assert_eq!(n.mul(&Number::from_i64(9)), Number::from_i64(5));

        let n = Number::from_str("6.25/2.5").unwrap();
        assert_eq!(n.to_string(), "2.5");
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(Number::from_str("").is_err());
        assert!(Number::from_str("abc").is_err());
        assert!(Number::from_str("1.2.3").is_err());
        assert!(Number::from_str("1e").is_err());
        assert_eq!(Number::from_str("1/0"), Err(NumberError::DivisionByZero));
        assert!(matches!(Number::from_str("1e99999"), Err(NumberError::Overflow(_))));
    }

    #[test]
    fn test_from_ratio() {
        let n = Number::from_ratio(1, -4).unwrap();
        assert_eq!(n.to_string(), "-0.25");
        assert!(Number::from_ratio(1, 0).is_err());
    }

    #[test]
    fn test_division_by_zero() {
        let a = Number::from_i64(10);
        assert_eq!(a.checked_div(&Number::zero()), Err(NumberError::DivisionByZero));
        assert!(Number::zero().recip().is_err());
    }

    #[test]
    fn test_pow() {
        let two = Number::from_i64(2);
        assert_eq!(two.pow(10).unwrap().to_i64(), Some(1024));
        assert_eq!(two.pow(0).unwrap(), Number::one());
        assert_eq!(two.pow(-2).unwrap().to_string(), "0.25");
        assert!(Number::zero().pow(-1).is_err());
    }

    #[test]
    fn test_display_non_terminating() {
        let third = Number::from_ratio(1, 3).unwrap();
        assert_eq!(third.to_string(), "0.33333333333333333333");

        let two_thirds = Number::from_ratio(2, 3).unwrap();
        assert_eq!(two_thirds.to_string(), "0.66666666666666666667");
    }

    #[test]
    fn test_display_small_values_keep_significant_digits() {
        let n = Number::from_str("1/3000000").unwrap();
        assert!(n.to_string().starts_with("0.000000333333333333"));
    }

    #[test]
    fn test_as_decimal_rounding() {
        let n = Number::from_str("2.345").unwrap();
        assert_eq!(n.as_decimal(2), "2.35");
        assert_eq!(n.neg().as_decimal(2), "-2.35");
        assert_eq!(n.as_decimal(0), "2");
        assert_eq!(Number::from_str("-0.001").unwrap().as_decimal(2), "0.00");
    }

    #[test]
    fn test_ordering() {
        let a = Number::from_str("1.5").unwrap();
        let b = Number::from_str("3/2").unwrap();
        let c = Number::from_i64(2);
        assert_eq!(a, b);
        assert!(a < c);
        assert!(c.neg() < a);
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(Number::from_f64(0.1).to_string(), "0.1");
        assert_eq!(Number::from(2.5).to_string(), "2.5");
        assert_eq!(Number::from_f64(f64::NAN), Number::zero());
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(Number::from_str("0.125").unwrap().to_f64(), Some(0.125));
    }

    #[test]
    fn test_serde_as_string() {
        let n = Number::from_str("273.15").unwrap();
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(json, "\"273.15\"");
        let back: Number = serde_json::from_str(&json).unwrap();
        assert_eq!(back, n);
    }
}
