use crate::core::types::Manufacturer;

/// Maximum accepted MPN length. Anything longer is treated as carrying no
/// usable information rather than fed into the pattern rules.
pub const MAX_MPN_LENGTH: usize = 64;

/// Normalize a raw MPN string for matching: trim surrounding whitespace and
/// fold to ASCII uppercase.
///
/// Returns `None` for empty input (after trimming) and for input longer than
/// [`MAX_MPN_LENGTH`], both of which mean "no information" at the calculator
/// boundary.
///
/// # Examples
///
/// ```
/// use mpn_match::core::mpn::normalize;
///
/// assert_eq!(normalize("  tlhr5400 "), Some("TLHR5400".to_string()));
/// assert_eq!(normalize("   "), None);
/// ```
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.len() > MAX_MPN_LENGTH {
        return None;
    }
    Some(trimmed.to_ascii_uppercase())
}

/// Split a normalized MPN into tokens on the delimiters manufacturers use
/// (dash, underscore, slash, dot, space). Empty tokens are dropped.
#[must_use]
pub fn tokenize(mpn: &str) -> Vec<&str> {
    mpn.split(['-', '_', '/', '.', ' '])
        .filter(|t| !t.is_empty())
        .collect()
}

/// Semantic fields extracted from an MPN by a registry rule.
///
/// Recomputed on every call; never persisted. `series` is the manufacturer's
/// naming lineage; the remaining fields are present only when the rule's
/// pattern captures them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MpnFields {
    /// Manufacturer whose rule produced this extraction
    pub manufacturer: Manufacturer,

    /// Product family/series token
    pub series: String,

    /// Variant within the series (memory/pin variant, position count, shell)
    pub variant: Option<String>,

    /// Package or termination suffix
    pub package: Option<String>,

    /// Bin/grade code (manufacturing tolerance group, not a functional
    /// difference)
    pub bin: Option<String>,

    /// Color or color-temperature code
    pub color: Option<String>,
}

impl MpnFields {
    pub fn new(manufacturer: Manufacturer, series: impl Into<String>) -> Self {
        Self {
            manufacturer,
            series: series.into(),
            variant: None,
            package: None,
            bin: None,
            color: None,
        }
    }

    /// Whether two extractions come from the same manufacturer series
    #[must_use]
    pub fn same_series(&self, other: &Self) -> bool {
        self.manufacturer == other.manufacturer && self.series == other.series
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_uppercases() {
        assert_eq!(normalize(" atmega328p "), Some("ATMEGA328P".to_string()));
        assert_eq!(normalize("XPERED-L1-FKA"), Some("XPERED-L1-FKA".to_string()));
    }

    #[test]
    fn test_normalize_empty_is_none() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize("\t\n"), None);
    }

    #[test]
    fn test_normalize_oversized_is_none() {
        let long = "A".repeat(MAX_MPN_LENGTH + 1);
        assert_eq!(normalize(&long), None);

        let at_limit = "A".repeat(MAX_MPN_LENGTH);
        assert!(normalize(&at_limit).is_some());
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("XPERED-L1-FKA"), vec!["XPERED", "L1", "FKA"]);
        assert_eq!(tokenize("22-23-2021"), vec!["22", "23", "2021"]);
        assert_eq!(tokenize("LS E63B-T2"), vec!["LS", "E63B", "T2"]);
        assert_eq!(tokenize("ATMEGA328P"), vec!["ATMEGA328P"]);
    }

    #[test]
    fn test_tokenize_drops_empty_tokens() {
        assert_eq!(tokenize("A--B"), vec!["A", "B"]);
        assert!(tokenize("---").is_empty());
    }

    #[test]
    fn test_same_series_requires_same_manufacturer() {
        let a = MpnFields::new(Manufacturer::Cree, "XPERED");
        let b = MpnFields::new(Manufacturer::Cree, "XPERED");
        let c = MpnFields::new(Manufacturer::Lumileds, "XPERED");

        assert!(a.same_series(&b));
        assert!(!a.same_series(&c));
    }
}
