//! Binding context for template rendering

use std::collections::BTreeMap;

use crate::{case::CaseStyle, error::InvalidIdentifierError};

/// Name-derived values computed for every request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DerivationKey {
    /// `name_pascal`
    PascalCase,
    /// `name_camel`
    CamelCase,
    /// `name_snake`
    SnakeCase,
    /// `name_kebab`
    KebabCase,
    /// `name_upper`
    ScreamingSnakeCase,
}

impl DerivationKey {
    /// All derivations, computed eagerly for every context
    pub const ALL: [DerivationKey; 5] = [
        DerivationKey::PascalCase,
        DerivationKey::CamelCase,
        DerivationKey::SnakeCase,
        DerivationKey::KebabCase,
        DerivationKey::ScreamingSnakeCase,
    ];

    /// Key under which templates can reference the derived value
    pub fn binding_name(&self) -> &'static str {
        match self {
            DerivationKey::PascalCase => "name_pascal",
            DerivationKey::CamelCase => "name_camel",
            DerivationKey::SnakeCase => "name_snake",
            DerivationKey::KebabCase => "name_kebab",
            DerivationKey::ScreamingSnakeCase => "name_upper",
        }
    }

    fn style(&self) -> CaseStyle {
        match self {
            DerivationKey::PascalCase => CaseStyle::Pascal,
            DerivationKey::CamelCase => CaseStyle::Camel,
            DerivationKey::SnakeCase => CaseStyle::Snake,
            DerivationKey::KebabCase => CaseStyle::Kebab,
            DerivationKey::ScreamingSnakeCase => CaseStyle::ScreamingSnake,
        }
    }
}

/// Values available to templates during one generation request
///
/// Built once from the plugin name and never changed afterwards. The raw
/// name is bound to `name`; derived casings and auxiliary values are bound
/// under their own keys. `name` and the derived keys shadow auxiliary values
/// with the same key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingContext {
    raw_name: String,
    derived: BTreeMap<DerivationKey, String>,
    values: BTreeMap<String, String>,
}

impl BindingContext {
    /// Key bound to the raw plugin name
    pub const NAME_KEY: &'static str = "name";

    /// Build a context from a plugin name, computing every derivation
    pub fn from_name(name: &str) -> Result<Self, InvalidIdentifierError> {
        let mut derived = BTreeMap::new();
        for key in DerivationKey::ALL {
            derived.insert(key, key.style().apply(name)?);
        }

        Ok(Self {
            raw_name: name.to_string(),
            derived,
            values: BTreeMap::new(),
        })
    }

    /// Add an auxiliary value while constructing the context
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// The name exactly as supplied
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    /// A derived casing of the name
    pub fn derived(&self, key: DerivationKey) -> Option<&str> {
        self.derived.get(&key).map(String::as_str)
    }

    /// Resolve a binding key
    pub fn lookup(&self, key: &str) -> Option<&str> {
        if key == Self::NAME_KEY {
            return Some(&self.raw_name);
        }

        DerivationKey::ALL
            .into_iter()
            .find(|d| d.binding_name() == key)
            .and_then(|d| self.derived(d))
            .or_else(|| self.values.get(key).map(String::as_str))
    }

    /// Every bound key, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = std::iter::once(Self::NAME_KEY)
            .chain(DerivationKey::ALL.iter().map(|d| d.binding_name()))
            .chain(self.values.keys().map(String::as_str))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }
}
