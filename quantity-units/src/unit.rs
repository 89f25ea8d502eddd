//! Token list helpers: term grouping, cancellation and unit spelling

use std::collections::HashMap;

use crate::convert::cached_stringified;
use crate::registry::registry;
use crate::units::{Token, UNITY};

/// A single unit factor, a unit token with its optional prefix token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Term {
    pub prefix: Option<Token>,
    pub unit: Token,
}

impl Term {
    fn push_into(&self, tokens: &mut Vec<Token>) {
        if let Some(prefix) = self.prefix {
            tokens.push(prefix);
        }
        tokens.push(self.unit);
    }
}

/// Pair each prefix token with the unit token that follows it
pub fn terms(tokens: &[Token]) -> Vec<Term> {
    let reg = registry();
    let mut terms = Vec::with_capacity(tokens.len());
    let mut iter = tokens.iter().copied();
    while let Some(token) = iter.next() {
        if reg.is_prefix(token) {
            match iter.next() {
                Some(unit) => terms.push(Term { prefix: Some(token), unit }),
                None => terms.push(Term { prefix: None, unit: token }),
            }
        } else {
            terms.push(Term { prefix: None, unit: token });
        }
    }
    terms
}

pub fn is_unity(tokens: &[Token]) -> bool {
    tokens == [UNITY]
}

/// Cancel matching terms between numerator and denominator.
///
/// Unity tokens are dropped and net counts are kept in first-appearance
/// order. An empty side becomes unity.
pub fn clean_terms(numerator: &[Token], denominator: &[Token]) -> (Vec<Token>, Vec<Token>) {
    let mut order: Vec<Term> = Vec::new();
    let mut counts: HashMap<Term, i64> = HashMap::new();

    let sides = [(numerator, 1i64), (denominator, -1i64)];
    for (tokens, sign) in sides {
        for term in terms(tokens) {
            if term.prefix.is_none() && term.unit == UNITY {
                continue;
            }
            let count = counts.entry(term).or_insert_with(|| {
                order.push(term);
                0
            });
            *count += sign;
        }
    }

    let mut num = Vec::new();
    let mut den = Vec::new();
    for term in order {
        let count = counts.get(&term).copied().unwrap_or(0);
        let side = if count > 0 { &mut num } else { &mut den };
        for _ in 0..count.unsigned_abs() {
            term.push_into(side);
        }
    }

    if num.is_empty() {
        num.push(UNITY);
    }
    if den.is_empty() {
        den.push(UNITY);
    }
    (num, den)
}

/// Output spelling of a token list, e.g. `[<meter>, <second>, <second>]`
/// becomes `m*s2`. Unity spells as `1`.
pub fn stringify_units(tokens: &[Token]) -> String {
    cached_stringified(tokens, || {
        if is_unity(tokens) {
            return "1".to_string();
        }

        let reg = registry();
        let name = |token: Token| reg.output_name(token).unwrap_or(token);
        let names = terms(tokens).into_iter().map(|term| match term.prefix {
            Some(prefix) => format!("{}{}", name(prefix), name(term.unit)),
            None => name(term.unit).to_string(),
        });

        // Group repeats, keeping first appearance order
        let mut grouped: Vec<(String, usize)> = Vec::new();
        for name in names {
            match grouped.iter_mut().find(|(n, _)| *n == name) {
                Some((_, count)) => *count += 1,
                None => grouped.push((name, 1)),
            }
        }

        grouped
            .into_iter()
            .map(|(name, count)| if count > 1 { format!("{}{}", name, count) } else { name })
            .collect::<Vec<_>>()
            .join("*")
    })
}

/// Canonical unit string of a numerator/denominator pair
pub fn units_string(numerator: &[Token], denominator: &[Token]) -> String {
    match (is_unity(numerator), is_unity(denominator)) {
        (true, true) => String::new(),
        (_, true) => stringify_units(numerator),
        _ => format!("{}/{}", stringify_units(numerator), stringify_units(denominator)),
    }
}
