use crate::core::category::BaseCategory;
use crate::registry::store::PatternRegistry;
use crate::similarity::calculator::{
    clamp_score, normalized_pair, unparsed_fallback, SimilarityCalculator,
};
use crate::similarity::text::token_overlap;

/// Maximum score for "same functional part". Identical strings and
/// bin-level variants both converge here; headroom above the ceiling is
/// reserved.
pub const SAME_PART_CEILING: f64 = 0.9;

/// Same series but semantically different color groups. Color temperature is
/// a hard functional boundary even when the textual difference is one letter.
pub const COLOR_MISMATCH_SCORE: f64 = 0.3;

/// Different manufacturers naming the same physical part family
pub const EQUIVALENT_SERIES_SCORE: f64 = 0.75;

/// Weight applied to raw token overlap when no field-level evidence exists
const TOKEN_OVERLAP_WEIGHT: f64 = 0.5;

/// Similarity calculator for LEDs.
///
/// Extracts the manufacturer series, bin/grade suffix, and color code, then
/// scores by a priority cascade: same series beats equivalence groups beats
/// token overlap, and a color-group mismatch inside a series short-circuits
/// to a low score.
#[derive(Debug, Default, Clone, Copy)]
pub struct LedCalculator;

impl SimilarityCalculator for LedCalculator {
    fn name(&self) -> &'static str {
        "led"
    }

    fn base_category(&self) -> BaseCategory {
        BaseCategory::Led
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

        let fields_a = registry.extract(BaseCategory::Led, &a);
        let fields_b = registry.extract(BaseCategory::Led, &b);

        let (Some(fields_a), Some(fields_b)) = (fields_a, fields_b) else {
            return unparsed_fallback(&a, &b, SAME_PART_CEILING);
        };

        if fields_a.same_series(&fields_b) {
            // Color codes only separate parts when the registry resolves
            // both to groups and the groups differ
            let group_a = fields_a
                .color
                .as_deref()
                .and_then(|code| registry.color_group(code));
            let group_b = fields_b
                .color
                .as_deref()
                .and_then(|code| registry.color_group(code));

            if let (Some(group_a), Some(group_b)) = (group_a, group_b) {
                if group_a != group_b {
                    return COLOR_MISMATCH_SCORE;
                }
            }

            // Bin and package letters are not a functional difference
            return SAME_PART_CEILING;
        }

        if registry.equivalent_series(&fields_a.series, &fields_b.series) {
            return EQUIVALENT_SERIES_SCORE;
        }

        clamp_score(TOKEN_OVERLAP_WEIGHT * token_overlap(&a, &b))
    }
}
