//! Base unit conversion and the process-wide memoization caches
//!
//! The caches are pure memoization over the immutable registry: an entry is
//! a function of its key alone, so concurrent misses may compute the same
//! value twice but never store different ones.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::convert::Infallible;
use std::hash::Hash;
use std::sync::{OnceLock, RwLock};

use quantity_core::{Number, Result};
use tracing::trace;

use crate::dimension::Dimension;
use crate::registry::registry;
use crate::units::{Token, UNITY};

type Cache<K, V> = OnceLock<RwLock<HashMap<K, V>>>;

/// Unit expression text -> normalized tokens
static PARSED_UNITS: Cache<String, Vec<Token>> = OnceLock::new();
/// Canonical unit string -> unity-scalar base form
static BASE_UNITS: Cache<String, BaseForm> = OnceLock::new();
/// Token list -> output spelling
static STRINGIFIED_UNITS: Cache<Vec<Token>, String> = OnceLock::new();

fn try_cached<K, Q, V, E>(
    cache: &'static Cache<K, V>,
    kind: &'static str,
    key: &Q,
    compute: impl FnOnce() -> std::result::Result<V, E>,
) -> std::result::Result<V, E>
where
    K: Borrow<Q> + Hash + Eq,
    Q: ToOwned<Owned = K> + Hash + Eq + ?Sized,
    V: Clone,
{
    let cache = cache.get_or_init(|| RwLock::new(HashMap::new()));

    // Try read lock first
    if let Ok(map) = cache.read() {
        if let Some(value) = map.get(key) {
            return Ok(value.clone());
        }
    }

    trace!(cache = kind, "cache miss");
    let value = compute()?;

    // A poisoned lock only costs the memoization
    if let Ok(mut map) = cache.write() {
        map.entry(key.to_owned()).or_insert_with(|| value.clone());
    }
    Ok(value)
}

pub(crate) fn cached_units(
    text: &str,
    compute: impl FnOnce() -> Result<Vec<Token>>,
) -> Result<Vec<Token>> {
    try_cached(&PARSED_UNITS, "parsed_units", text, compute)
}

pub(crate) fn cached_stringified(units: &[Token], compute: impl FnOnce() -> String) -> String {
    match try_cached(&STRINGIFIED_UNITS, "stringified_units", units, || {
        Ok::<_, Infallible>(compute())
    }) {
        Ok(text) => text,
        Err(never) => match never {},
    }
}

/// A unit combination reduced to base tokens, with scalar one
#[derive(Debug, Clone)]
pub struct BaseForm {
    pub factor: Number,
    pub numerator: Vec<Token>,
    pub denominator: Vec<Token>,
    pub signature: i64,
}

/// Base form for the unit combination spelled `units`
pub fn base_form(units: &str, numerator: &[Token], denominator: &[Token]) -> Result<BaseForm> {
    try_cached(&BASE_UNITS, "base_units", units, || {
        let (factor, numerator, denominator) = to_base_units(numerator, denominator)?;
        let signature = Dimension::from_tokens(&numerator, &denominator).signature()?;
        Ok(BaseForm { factor, numerator, denominator, signature })
    })
}

/// Reduce tokens to base tokens and the factor that relates them.
///
/// Prefixes scale the factor; each unit scales it by its registered scalar
/// and contributes its category's base numerator and denominator (swapped
/// for denominator units).
pub fn to_base_units(
    numerator: &[Token],
    denominator: &[Token],
) -> Result<(Number, Vec<Token>, Vec<Token>)> {
    let reg = registry();
    let mut factor = Number::one();
    let mut num = Vec::new();
    let mut den = Vec::new();

    for token in numerator {
        if let Some(prefix) = reg.prefix_value(token) {
            factor = factor.mul(prefix);
        } else if let Some(unit) = reg.unit_value(token) {
            factor = factor.mul(&unit.scalar);
            num.extend_from_slice(unit.numerator);
            den.extend_from_slice(unit.denominator);
        }
    }

    for token in denominator {
        if let Some(prefix) = reg.prefix_value(token) {
            factor = factor.checked_div(prefix)?;
        } else if let Some(unit) = reg.unit_value(token) {
            factor = factor.checked_div(&unit.scalar)?;
            den.extend_from_slice(unit.numerator);
            num.extend_from_slice(unit.denominator);
        }
    }

    num.retain(|t| *t != UNITY);
    den.retain(|t| *t != UNITY);
    Ok((factor, num, den))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_base_units_prefixed() {
        let (factor, num, den) = to_base_units(&["<kilo>", "<meter>"], &["<hour>"]).unwrap();
        assert_eq!(factor, Number::from_str("1000/3600").unwrap());
        assert_eq!(num, vec!["<meter>"]);
        assert_eq!(den, vec!["<second>"]);
    }

    #[test]
    fn test_to_base_units_compound_category() {
        let (factor, num, den) = to_base_units(&["<newton>"], &["<meter>", "<meter>"]).unwrap();
        assert_eq!(factor, Number::one());
        assert_eq!(num, vec!["<kilogram>", "<meter>"]);
        assert_eq!(den, vec!["<second>", "<second>", "<meter>", "<meter>"]);
    }

    #[test]
    fn test_to_base_units_strips_unity() {
        let (_, num, den) = to_base_units(&["<becquerel>"], &[UNITY]).unwrap();
        assert!(num.is_empty());
        assert_eq!(den, vec!["<second>"]);
    }

    #[test]
    fn test_base_form_signature() {
        let form = base_form("N", &["<newton>"], &[UNITY]).unwrap();
        // mass + length - 2 time
        assert_eq!(form.signature, 8000 + 1 - 40);
    }

    #[test]
    fn test_base_form_is_memoized() {
        let first = base_form("psi", &["<psi>"], &[UNITY]).unwrap();
        let second = base_form("psi", &["<psi>"], &[UNITY]).unwrap();
        assert_eq!(first.factor, second.factor);
        assert_eq!(first.signature, second.signature);
    }
}
