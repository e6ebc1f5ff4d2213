use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::category::ComponentCategory;
use crate::core::mpn::MpnFields;
use crate::core::types::Manufacturer;

/// One manufacturer's parsing rule for a component category.
///
/// A rule is selected by its prefix gate (manufacturer-specific leading
/// characters of the normalized MPN) and then applied via a regex whose named
/// capture groups produce the semantic fields: `series` (required), and
/// optionally `variant`, `package`, `bin`, and `color`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionRule {
    /// Manufacturer whose numbering convention this rule encodes
    pub manufacturer: Manufacturer,

    /// Category tag this rule belongs to (base tag or refinement)
    pub category: ComponentCategory,

    /// Normalized-MPN prefixes that select this rule.
    /// Empty means the rule is gated by its pattern alone.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prefixes: Vec<String>,

    /// Extraction regex with named capture groups
    pub pattern: String,

    // Compiled on load, never serialized
    #[serde(skip)]
    compiled: Option<Regex>,
}

impl ExtractionRule {
    /// Compile the rule's pattern. Called once when the registry is built.
    pub(crate) fn compile(&mut self) -> Result<(), regex::Error> {
        self.compiled = Some(Regex::new(&self.pattern)?);
        Ok(())
    }

    /// Whether the prefix gate admits this MPN
    #[must_use]
    pub fn matches_prefix(&self, mpn: &str) -> bool {
        self.prefixes.is_empty() || self.prefixes.iter().any(|p| mpn.starts_with(p.as_str()))
    }

    /// Apply the pattern to a normalized MPN.
    ///
    /// Returns `None` when the pattern does not match or captures an empty
    /// series. Optional groups that match the empty string are treated as
    /// absent.
    #[must_use]
    pub fn extract(&self, mpn: &str) -> Option<MpnFields> {
        let caps = self.compiled.as_ref()?.captures(mpn)?;

        let group = |name: &str| {
            caps.name(name)
                .map(|m| m.as_str().to_string())
                .filter(|s| !s.is_empty())
        };

        let series = group("series")?;
        Some(MpnFields {
            manufacturer: self.manufacturer.clone(),
            series,
            variant: group("variant"),
            package: group("package"),
            bin: group("bin"),
            color: group("color"),
        })
    }
}
