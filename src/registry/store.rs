use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::category::BaseCategory;
use crate::core::mpn::MpnFields;
use crate::registry::rules::ExtractionRule;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Failed to read registry: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse registry: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid pattern for {manufacturer}: {source}")]
    Pattern {
        manufacturer: String,
        #[source]
        source: regex::Error,
    },
}

/// Registry version for compatibility checking
pub const REGISTRY_VERSION: &str = "1.0.0";

/// Serializable registry format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryData {
    pub version: String,

    /// Per-manufacturer extraction rules
    pub rules: Vec<ExtractionRule>,

    /// Groups of series tokens that name the same physical part family
    /// across manufacturers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub equivalent_series: Vec<Vec<String>>,

    /// LED color/color-temperature codes mapped to their semantic color group
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub color_groups: HashMap<String, String>,
}

/// The pattern registry: read-only lookup of manufacturer-specific parsing
/// rules, keyed by base category and selected by MPN prefix.
///
/// Constructed once, shared by reference into every calculator call, and
/// never mutated afterwards. Hot reload, if a caller needs it, is an atomic
/// swap of the whole registry reference.
#[derive(Debug)]
pub struct PatternRegistry {
    version: String,

    /// All rules, in registry file order
    rules: Vec<ExtractionRule>,

    /// Index: base category -> indices into rules, preserving file order
    rules_by_base: HashMap<BaseCategory, Vec<usize>>,

    /// Index: series token -> equivalence group id
    series_to_group: HashMap<String, usize>,

    /// LED color code -> semantic color group
    color_groups: HashMap<String, String>,
}

impl PatternRegistry {
    /// Load the embedded default registry
    pub fn load_embedded() -> Result<Self, RegistryError> {
        // Embedded at compile time; validated by build.rs
        const EMBEDDED_REGISTRY: &str = include_str!("../../registries/patterns.json");
        Self::from_json(EMBEDDED_REGISTRY)
    }

    /// Load a registry from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a registry from a JSON string
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let data: RegistryData = serde_json::from_str(json)?;
        Self::from_data(data)
    }

    /// Build a registry from deserialized data, compiling every rule pattern
    pub fn from_data(data: RegistryData) -> Result<Self, RegistryError> {
        // Version check (warn but don't fail)
        if data.version != REGISTRY_VERSION {
            warn!(
                expected = REGISTRY_VERSION,
                found = %data.version,
                "registry version mismatch"
            );
        }

        let mut rules = data.rules;
        let mut rules_by_base: HashMap<BaseCategory, Vec<usize>> = HashMap::new();

        for (index, rule) in rules.iter_mut().enumerate() {
            rule.compile().map_err(|source| RegistryError::Pattern {
                manufacturer: rule.manufacturer.to_string(),
                source,
            })?;
            rules_by_base
                .entry(rule.category.base())
                .or_default()
                .push(index);
        }

        let mut series_to_group = HashMap::new();
        for (group_id, group) in data.equivalent_series.iter().enumerate() {
            for series in group {
                series_to_group.insert(series.clone(), group_id);
            }
        }

        Ok(Self {
            version: data.version,
            rules,
            rules_by_base,
            series_to_group,
            color_groups: data.color_groups,
        })
    }

    /// Extract semantic fields from a normalized MPN using the rules for a
    /// base category.
    ///
    /// Rules are tried in registry order; the first whose prefix gate admits
    /// the MPN and whose pattern matches wins. Returns `None` when no rule
    /// matches, which calculators treat as "fall back to coarse string
    /// similarity", never as an error.
    #[must_use]
    pub fn extract(&self, base: BaseCategory, mpn: &str) -> Option<MpnFields> {
        let indices = self.rules_by_base.get(&base)?;

        for &index in indices {
            let rule = &self.rules[index];
            if !rule.matches_prefix(mpn) {
                continue;
            }
            if let Some(fields) = rule.extract(mpn) {
                return Some(fields);
            }
        }

        debug!(category = %base, mpn, "no extraction rule matched");
        None
    }

    /// Rules registered for a base category, in priority order
    #[must_use]
    pub fn rules_for(&self, base: BaseCategory) -> Vec<&ExtractionRule> {
        self.rules_by_base
            .get(&base)
            .map(|indices| indices.iter().map(|&i| &self.rules[i]).collect())
            .unwrap_or_default()
    }

    /// Whether two series tokens belong to the same cross-manufacturer
    /// equivalence group
    #[must_use]
    pub fn equivalent_series(&self, a: &str, b: &str) -> bool {
        match (self.series_to_group.get(a), self.series_to_group.get(b)) {
            (Some(ga), Some(gb)) => ga == gb,
            _ => false,
        }
    }

    /// Semantic color group for an LED color code, if the registry
    /// distinguishes it
    #[must_use]
    pub fn color_group(&self, code: &str) -> Option<&str> {
        self.color_groups.get(code).map(String::as_str)
    }

    /// Registry data version
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Number of rules in the registry
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry has no rules
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
