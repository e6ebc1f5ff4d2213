use crate::core::category::BaseCategory;
use crate::registry::store::PatternRegistry;
use crate::similarity::calculator::{normalized_pair, unparsed_fallback, SimilarityCalculator};

/// Maximum score for "same functional part"
pub const SAME_PART_CEILING: f64 = 0.9;

/// Same family and memory/pin variant, differing only in package
pub const PACKAGE_VARIANT_SCORE: f64 = 0.85;

/// Same device family, different memory/pin variant
pub const SAME_FAMILY_SCORE: f64 = 0.7;

/// Different vendors naming the same device family (pin-compatible clones)
pub const EQUIVALENT_FAMILY_SCORE: f64 = 0.65;

/// Both recognized as microcontrollers with no shared family token.
/// Discrimination is weaker here than for LEDs or connectors because
/// package and pin conventions vary more across vendors.
pub const SHARED_CATEGORY_FLOOR: f64 = 0.5;

/// Similarity calculator for microcontrollers.
///
/// Extracts the core device family, memory/pin variant, and package suffix.
/// Any two MPNs that parse under vendor rules keep at least the shared
/// category floor; unparsed inputs drop to the coarse string fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct MicrocontrollerCalculator;

impl SimilarityCalculator for MicrocontrollerCalculator {
    fn name(&self) -> &'static str {
        "microcontroller"
    }

    fn base_category(&self) -> BaseCategory {
        BaseCategory::Microcontroller
    }

    fn calculate_similarity(
        &self,
        mpn1: Option<&str>,
        mpn2: Option<&str>,
        registry: Option<&PatternRegistry>,
    ) -> f64 {
        let Some(registry) = registry else {
            return 0.0;
        };
        let Some((a, b)) = normalized_pair(mpn1, mpn2) else {
            return 0.0;
        };

        if a == b {
            return SAME_PART_CEILING;
        }

        let fields_a = registry.extract(BaseCategory::Microcontroller, &a);
        let fields_b = registry.extract(BaseCategory::Microcontroller, &b);

        let (Some(fields_a), Some(fields_b)) = (fields_a, fields_b) else {
            return unparsed_fallback(&a, &b, SAME_PART_CEILING);
        };

        if fields_a.same_series(&fields_b) {
            if fields_a.variant == fields_b.variant {
                return PACKAGE_VARIANT_SCORE;
            }
            return SAME_FAMILY_SCORE;
        }

        if registry.equivalent_series(&fields_a.series, &fields_b.series) {
            return EQUIVALENT_FAMILY_SCORE;
        }

        SHARED_CATEGORY_FLOOR
    }
}
