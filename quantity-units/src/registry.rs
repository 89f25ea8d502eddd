//! Unit registry built once from the static tables
//!
//! Holds the alias lookups, the canonical token values and the two compiled
//! matchers used by the parser. Never mutated after construction.

use std::collections::HashMap;
use std::sync::LazyLock;

use quantity_core::Number;
use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::units::{Token, CATEGORIES, PREFIXES};

/// Global registry
pub static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::build);

/// Access the process-wide registry, building it on first use
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Build the registry now. Calling it again is a no-op.
pub fn initialize() {
    LazyLock::force(&REGISTRY);
}

/// Registered value of a canonical unit token
#[derive(Debug, Clone)]
pub struct UnitValue {
    pub scalar: Number,
    pub numerator: &'static [Token],
    pub denominator: &'static [Token],
    pub category: &'static str,
}

pub struct Registry {
    prefix_map: HashMap<&'static str, Token>,
    prefix_values: HashMap<Token, Number>,
    unit_map: HashMap<&'static str, Token>,
    unit_values: HashMap<Token, UnitValue>,
    output_map: HashMap<Token, &'static str>,
    unit_match: Regex,
    unit_test: Regex,
}

/// Alternation of escaped aliases, longest first
fn alternation<'a>(aliases: impl Iterator<Item = &'a &'static str>) -> String {
    let mut sorted: Vec<&str> = aliases.copied().collect();
    sorted.sort_by(|a, b| {
        b.chars().count().cmp(&a.chars().count()).then_with(|| a.cmp(b))
    });
    sorted
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|")
}

fn compile(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .size_limit(1 << 25)
        .build()
        .expect("unit matcher is built from the static tables")
}

impl Registry {
    fn build() -> Self {
        let mut registry = Registry {
            prefix_map: HashMap::new(),
            prefix_values: HashMap::new(),
            unit_map: HashMap::new(),
            unit_values: HashMap::new(),
            output_map: HashMap::new(),
            unit_match: Regex::new("$^").expect("empty matcher"),
            unit_test: Regex::new("$^").expect("empty matcher"),
        };
        registry.register_prefixes();
        registry.register_units();
        registry.compile_matchers();

        debug!(
            prefixes = registry.prefix_values.len(),
            units = registry.unit_values.len(),
            aliases = registry.prefix_map.len() + registry.unit_map.len(),
            "unit registry built"
        );
        registry
    }

    fn register_prefixes(&mut self) {
        for prefix in PREFIXES {
            let factor = Number::from_str(prefix.factor).expect("prefix factor in static table");
            self.prefix_values.insert(prefix.token, factor);
            self.output_map.insert(prefix.token, prefix.aliases[0]);
            for alias in prefix.aliases {
                self.prefix_map.insert(alias, prefix.token);
            }
        }
    }

    fn register_units(&mut self) {
        for category in CATEGORIES {
            for unit in category.units {
                let scalar = Number::from_str(unit.scalar).expect("unit scalar in static table");
                self.unit_values.insert(
                    unit.token,
                    UnitValue {
                        scalar,
                        numerator: category.numerator,
                        denominator: category.denominator,
                        category: category.name,
                    },
                );
                // Later categories override colliding aliases
                for alias in unit.aliases {
                    self.unit_map.insert(alias, unit.token);
                }
                self.output_map.insert(unit.token, unit.aliases[0]);
            }
        }
    }

    fn compile_matchers(&mut self) {
        let prefixes = alternation(self.prefix_map.keys());
        let units = alternation(self.unit_map.keys());
        let unit_match = format!(r"({})??({})(?:\b|\s|$)", prefixes, units);
        let unit_test = format!(r"^\s*({}\s*(\.?|\*?)\s*)+$", unit_match);

        self.unit_match = compile(&unit_match);
        self.unit_test = compile(&unit_test);
    }

    // ========== Lookup ==========

    /// Canonical prefix token for a prefix alias ("k" -> "<kilo>")
    pub fn resolve_prefix(&self, alias: &str) -> Option<Token> {
        self.prefix_map.get(alias).copied()
    }

    /// Canonical unit token for a unit alias ("m" -> "<meter>")
    pub fn resolve_unit(&self, alias: &str) -> Option<Token> {
        self.unit_map.get(alias).copied()
    }

    pub fn prefix_value(&self, token: &str) -> Option<&Number> {
        self.prefix_values.get(token)
    }

    pub fn unit_value(&self, token: &str) -> Option<&UnitValue> {
        self.unit_values.get(token)
    }

    pub fn is_prefix(&self, token: &str) -> bool {
        self.prefix_values.contains_key(token)
    }

    /// The static form of a canonical prefix or unit token
    pub fn canonical_token(&self, token: &str) -> Option<Token> {
        self.prefix_values
            .get_key_value(token)
            .map(|(k, _)| *k)
            .or_else(|| self.unit_values.get_key_value(token).map(|(k, _)| *k))
    }

    /// Preferred output spelling (first listed alias)
    pub fn output_name(&self, token: &str) -> Option<&'static str> {
        self.output_map.get(token).copied()
    }

    /// Category name of a unit token; "" for unity
    pub fn category_of(&self, token: &str) -> Option<&'static str> {
        self.unit_values.get(token).map(|u| u.category)
    }

    /// Unit tokens registered under a category, in table order
    pub fn units_in_category(&self, name: &str) -> Vec<Token> {
        CATEGORIES
            .iter()
            .filter(|c| c.name == name)
            .flat_map(|c| c.units.iter().map(|u| u.token))
            .collect()
    }

    /// All category names in table order, excluding the unity category
    pub fn categories(&self) -> Vec<&'static str> {
        CATEGORIES
            .iter()
            .map(|c| c.name)
            .filter(|name| !name.is_empty())
            .collect()
    }

    // ========== Matching ==========

    /// Whole-string check that `text` is a sequence of (prefix)unit words
    /// separated by whitespace, `.` or `*`
    pub fn is_unit_expression(&self, text: &str) -> bool {
        self.unit_test.is_match(text)
    }

    /// Split a unit expression into (prefix alias, unit alias) pairs
    pub(crate) fn unit_words<'t>(&self, text: &'t str) -> Vec<(Option<&'t str>, &'t str)> {
        self.unit_match
            .captures_iter(text)
            .filter_map(|caps| {
                let unit = caps.get(2)?.as_str();
                Some((caps.get(1).map(|m| m.as_str()), unit))
            })
            .collect()
    }
}
