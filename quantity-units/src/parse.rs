//! Quantity string parsing - "5.6 kg*m/s^2", "37 degC", "GPa"
//!
//! Supported formats:
//! - Scalar only: "1", "-2.5e3"
//! - Bare units: "GPa" (scalar 1)
//! - Products: "kg*m", "kg.m", "kg m"
//! - Powers: "m^2", "m**2", "m2", "s^-1" (negative powers move to the bottom)
//! - Quotients: "m/s", "kg/m^2"

use std::sync::LazyLock;

use quantity_core::{Number, QuantityError, Result};
use regex::Regex;
use tracing::debug;

use crate::convert::cached_units;
use crate::registry::registry;
use crate::units::{Token, UNITY};
use crate::MAX_EXPONENT;

static QTY_STRING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?\s*(?:\d+(?:\.\d+)?|\.\d+)(?:[Ee][+-]?\d+)?)?\s*([^/]*)(?:/(.+))?$")
        .expect("quantity pattern")
});

/// Scalar and normalized tokens of a quantity string
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuantity {
    pub scalar: Number,
    pub numerator: Vec<Token>,
    pub denominator: Vec<Token>,
}

/// Parse a quantity string
pub fn parse_quantity(input: &str) -> Result<ParsedQuantity> {
    let text = input.trim();
    if text.is_empty() {
        debug!("empty quantity string");
        return Err(QuantityError::EmptyInput);
    }

    let caps = QTY_STRING.captures(text).ok_or_else(|| {
        debug!(input = text, "quantity not recognized");
        QuantityError::UnrecognizedQuantity(text.to_string())
    })?;

    // Loose parsing: "- 5" is -5
    let scalar = match caps.get(1) {
        Some(m) => {
            let digits: String = m.as_str().chars().filter(|c| !c.is_whitespace()).collect();
            Number::from_str(&digits)?
        }
        None => Number::one(),
    };

    let top = expand_exponents(caps.get(2).map_or("", |m| m.as_str()), Clause::Top)?;
    let bottom = expand_exponents(caps.get(3).map_or("", |m| m.as_str()), Clause::Bottom)?;

    let mut bottom_text = bottom.text;
    for (word, count) in &top.moved {
        for _ in 0..*count {
            bottom_text.push(' ');
            bottom_text.push_str(word);
        }
    }

    Ok(ParsedQuantity {
        scalar,
        numerator: parse_clause(&top.text)?,
        denominator: parse_clause(&bottom_text)?,
    })
}

fn parse_clause(text: &str) -> Result<Vec<Token>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(vec![UNITY]);
    }
    parse_units(text)
}

/// Normalize a unit expression without exponents into canonical tokens.
///
/// `.` and `*` separate words like whitespace does. Each word is split
/// into an optional prefix and a unit, bare units first.
pub fn parse_units(units: &str) -> Result<Vec<Token>> {
    cached_units(units, || {
        let reg = registry();
        let normalized = units.replace(['.', '*'], " ");
        if !reg.is_unit_expression(&normalized) {
            debug!(units, "unit not recognized");
            return Err(QuantityError::UnrecognizedUnit(units.to_string()));
        }

        let mut tokens = Vec::new();
        for (prefix, unit) in reg.unit_words(&normalized) {
            if let Some(prefix) = prefix.and_then(|p| reg.resolve_prefix(p)) {
                tokens.push(prefix);
            }
            if let Some(unit) = reg.resolve_unit(unit) {
                tokens.push(unit);
            }
        }
        Ok(tokens)
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Clause {
    Top,
    Bottom,
}

/// A clause with its exponents written out
struct Expanded {
    text: String,
    /// Words raised to negative powers, with their repeat counts
    moved: Vec<(String, u32)>,
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '.' || c == '*'
}

fn is_power_op(chars: &[char], i: usize) -> bool {
    match chars.get(i) {
        Some('^') => true,
        Some('*') => chars.get(i + 1) == Some(&'*'),
        _ => false,
    }
}

/// Rewrite `word^n`, `word**n` and `wordN` as n space separated copies of
/// the word. Separators between words are kept verbatim.
fn expand_exponents(clause: &str, side: Clause) -> Result<Expanded> {
    let chars: Vec<char> = clause.chars().collect();
    let mut text = String::with_capacity(clause.len());
    let mut moved = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if is_separator(chars[i]) && !is_power_op(&chars, i) {
            text.push(chars[i]);
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && !is_separator(chars[i]) && !is_power_op(&chars, i) {
            i += 1;
        }
        let word: String = chars[start..i].iter().collect();

        let (base, exponent) = if is_power_op(&chars, i) {
            i += if chars[i] == '^' { 1 } else { 2 };
            let exp_start = i;
            if matches!(chars.get(i), Some('-') | Some('+')) {
                i += 1;
            }
            while let Some(&c) = chars.get(i) {
                let decimal_point =
                    c == '.' && chars.get(i + 1).is_some_and(|d| d.is_ascii_digit());
                if !(c.is_alphanumeric() || decimal_point) {
                    break;
                }
                i += 1;
            }
            (word, Some(chars[exp_start..i].iter().collect::<String>()))
        } else {
            split_trailing_exponent(word, side)?
        };

        let Some(exponent) = exponent else {
            text.push_str(&base);
            continue;
        };
        if base.is_empty() {
            return Err(QuantityError::UnrecognizedUnit(clause.to_string()));
        }

        let n: i32 = exponent
            .parse()
            .map_err(|_| QuantityError::InvalidExponent(exponent.clone()))?;
        if n.unsigned_abs() > MAX_EXPONENT || (n < 0 && side == Clause::Bottom) {
            return Err(QuantityError::InvalidExponent(exponent));
        }

        match n {
            // A typo must not vanish at power zero
            0 if !registry().is_unit_expression(&base) => {
                return Err(QuantityError::UnrecognizedUnit(base));
            }
            0 => {}
            n if n > 0 => text.push_str(&vec![base.as_str(); n as usize].join(" ")),
            n => moved.push((base, n.unsigned_abs())),
        }
    }

    Ok(Expanded { text, moved })
}

/// "m2" -> ("m", "2"); in the top clause "s-1" -> ("s", "-1")
fn split_trailing_exponent(word: String, side: Clause) -> Result<(String, Option<String>)> {
    let digits_start = word.trim_end_matches(|c: char| c.is_ascii_digit()).len();
    if digits_start == word.len() || digits_start == 0 {
        return Ok((word, None));
    }

    let mut start = digits_start;
    if word[..start].ends_with('-') {
        if side == Clause::Bottom {
            return Err(QuantityError::InvalidExponent(word[start - 1..].to_string()));
        }
        start -= 1;
    }
    if start == 0 {
        return Ok((word, None));
    }

    let exponent = word[start..].to_string();
    let mut base = word;
    base.truncate(start);
    Ok((base, Some(exponent)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> (Vec<Token>, Vec<Token>) {
        let parsed = parse_quantity(input).unwrap();
        (parsed.numerator, parsed.denominator)
    }

    #[test]
    fn test_scalar_only() {
        let parsed = parse_quantity("1").unwrap();
        assert_eq!(parsed.scalar, Number::one());
        assert_eq!(parsed.numerator, vec![UNITY]);
        assert_eq!(parsed.denominator, vec![UNITY]);
    }

    #[test]
    fn test_bare_unit() {
        let parsed = parse_quantity("GPa").unwrap();
        assert_eq!(parsed.scalar, Number::one());
        assert_eq!(parsed.numerator, vec!["<giga>", "<pascal>"]);
    }

    #[test]
    fn test_loose_scalar() {
        let parsed = parse_quantity("- 5.5 m").unwrap();
        assert_eq!(parsed.scalar, Number::from_str("-5.5").unwrap());
        let parsed = parse_quantity("1.5e3 g").unwrap();
        assert_eq!(parsed.scalar, Number::from_i64(1500));
    }

    #[test]
    fn test_compound() {
        let (num, den) = tokens("5.6 kg*m/s^2");
        assert_eq!(num, vec!["<kilogram>", "<meter>"]);
        assert_eq!(den, vec!["<second>", "<second>"]);
    }

    #[test]
    fn test_separators() {
        assert_eq!(tokens("kg.m").0, vec!["<kilogram>", "<meter>"]);
        assert_eq!(tokens("kg m").0, vec!["<kilogram>", "<meter>"]);
        assert_eq!(tokens("kg*m").0, vec!["<kilogram>", "<meter>"]);
    }

    #[test]
    fn test_power_forms() {
        let expected = vec!["<meter>", "<meter>"];
        assert_eq!(tokens("m^2").0, expected);
        assert_eq!(tokens("m**2").0, expected);
        assert_eq!(tokens("m2").0, expected);
    }

    #[test]
    fn test_negative_exponent_moves_to_bottom() {
        let (num, den) = tokens("kg*m*s^-2");
        assert_eq!(num, vec!["<kilogram>", "<meter>"]);
        assert_eq!(den, vec!["<second>", "<second>"]);

        let (num, den) = tokens("0.1m^-1");
        assert_eq!(num, vec![UNITY]);
        assert_eq!(den, vec!["<meter>"]);

        let (num, den) = tokens("s-1");
        assert_eq!(num, vec![UNITY]);
        assert_eq!(den, vec!["<second>"]);
    }

    #[test]
    fn test_moved_terms_follow_bottom() {
        let (_, den) = tokens("m*h^-1/s");
        assert_eq!(den, vec!["<second>", "<hour>"]);
    }

    #[test]
    fn test_zero_exponent() {
        let (num, _) = tokens("kg*m^0");
        assert_eq!(num, vec!["<kilogram>"]);
        assert!(matches!(
            parse_quantity("kg*mx^0"),
            Err(QuantityError::UnrecognizedUnit(_))
        ));
    }

    #[test]
    fn test_invalid_exponents() {
        assert!(matches!(parse_quantity("m^x"), Err(QuantityError::InvalidExponent(_))));
        assert!(matches!(parse_quantity("m^0.5"), Err(QuantityError::InvalidExponent(_))));
        assert!(matches!(parse_quantity("m^"), Err(QuantityError::InvalidExponent(_))));
        assert!(matches!(parse_quantity("1/s^-2"), Err(QuantityError::InvalidExponent(_))));
        assert!(matches!(parse_quantity("m^5000"), Err(QuantityError::InvalidExponent(_))));
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_quantity("   "), Err(QuantityError::EmptyInput));
        assert!(matches!(parse_quantity("5 furlongz"), Err(QuantityError::UnrecognizedUnit(_))));
        assert!(matches!(parse_quantity("m/"), Err(QuantityError::UnrecognizedQuantity(_))));
    }

    #[test]
    fn test_aliases_with_spaces_and_parens() {
        assert_eq!(tokens("2 gal(us dry)").0, vec!["<gallon-us-dry>"]);
        assert_eq!(tokens("3 gal(us)").0, vec!["<gallon-us-liquid>"]);
    }

    #[test]
    fn test_prefix_resolution() {
        assert_eq!(tokens("mm").0, vec!["<milli>", "<meter>"]);
        assert_eq!(tokens("min").0, vec!["<minute>"]);
        assert_eq!(tokens("kPa").0, vec!["<kilo>", "<pascal>"]);
        assert_eq!(tokens("MiB").0, vec!["<mebi>", "<byte>"]);
    }

    #[test]
    fn test_temperatures_parse() {
        assert_eq!(tokens("37 degC").0, vec!["<celsius>"]);
        assert_eq!(tokens("500 tempF").0, vec!["<temp-F>"]);
    }

    #[test]
    fn test_parse_units_memoized() {
        let first = parse_units("kg*m").unwrap();
        let second = parse_units("kg*m").unwrap();
        assert_eq!(first, second);
    }
}
