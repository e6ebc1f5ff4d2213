use crate::core::category::BaseCategory;
use crate::registry::store::PatternRegistry;
use crate::similarity::calculator::{
    clamp_score, normalized_pair, unparsed_fallback, SimilarityCalculator,
};
use crate::similarity::text::token_overlap;

/// Maximum score for "same functional part"
pub const SAME_PART_CEILING: f64 = 0.9;

/// Same manufacturer series: plating, position-count, and packaging variants
pub const SAME_SERIES_SCORE: f64 = 0.8;

/// Different manufacturers naming the same physical part family
pub const EQUIVALENT_SERIES_SCORE: f64 = 0.6;

/// Both recognized as connectors with no shared series evidence
pub const SHARED_CATEGORY_FLOOR: f64 = 0.2;

/// Weight applied to raw token overlap between unrelated series
const TOKEN_OVERLAP_WEIGHT: f64 = 0.5;

/// Similarity calculator for connectors.
///
/// Connector MPNs range from dash-delimited part families (Molex 22-23-2021)
/// to fully numeric catalog numbers (TE 282836-2), so extraction keys on
/// manufacturer-specific series and position-count segments. Two connectors
/// that parse but share no series evidence keep a low-but-nonzero floor.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConnectorCalculator;

impl SimilarityCalculator for ConnectorCalculator {
    fn name(&self) -> &'static str {
        "connector"
    }

    fn base_category(&self) -> BaseCategory {
        BaseCategory::Connector
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

        let fields_a = registry.extract(BaseCategory::Connector, &a);
        let fields_b = registry.extract(BaseCategory::Connector, &b);

        let (Some(fields_a), Some(fields_b)) = (fields_a, fields_b) else {
            return unparsed_fallback(&a, &b, SAME_PART_CEILING);
        };

        if fields_a.same_series(&fields_b) {
            return SAME_SERIES_SCORE;
        }

        if registry.equivalent_series(&fields_a.series, &fields_b.series) {
            return EQUIVALENT_SERIES_SCORE;
        }

        clamp_score(SHARED_CATEGORY_FLOOR.max(TOKEN_OVERLAP_WEIGHT * token_overlap(&a, &b)))
    }
}
