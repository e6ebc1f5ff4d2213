use crate::core::category::{BaseCategory, ComponentCategory};
use crate::core::mpn::normalize;
use crate::registry::store::PatternRegistry;
use crate::similarity::text::coarse_similarity;

/// The calculator contract implemented by every category calculator.
///
/// Calculators are pure functions over their three inputs plus the read-only
/// registry: no internal state, safe to call concurrently, and total — every
/// input, including absent or malformed ones, yields a finite score in
/// [0.0, 1.0].
pub trait SimilarityCalculator: Send + Sync {
    /// Short name for reporting
    fn name(&self) -> &'static str;

    /// The base category this calculator handles
    fn base_category(&self) -> BaseCategory;

    /// Whether this calculator handles the given category.
    ///
    /// True iff the category's base equals this calculator's base, so
    /// manufacturer refinements are accepted alongside the base tag. An
    /// absent category is not applicable, never an error.
    fn is_applicable(&self, category: Option<ComponentCategory>) -> bool {
        category.is_some_and(|c| c.base() == self.base_category())
    }

    /// Similarity of two MPNs in [0.0, 1.0].
    ///
    /// An absent MPN or registry scores 0.0. The result is symmetric in the
    /// two MPNs and never exceeds the calculator's documented ceiling for
    /// "same functional part".
    fn calculate_similarity(
        &self,
        mpn1: Option<&str>,
        mpn2: Option<&str>,
        registry: Option<&PatternRegistry>,
    ) -> f64;
}

/// Null-safety preamble shared by all calculators: both MPNs present and
/// non-empty after normalization, or no score.
pub(crate) fn normalized_pair(mpn1: Option<&str>, mpn2: Option<&str>) -> Option<(String, String)> {
    let a = normalize(mpn1?)?;
    let b = normalize(mpn2?)?;
    Some((a, b))
}

/// Force a score into finite [0.0, 1.0]
pub(crate) fn clamp_score(score: f64) -> f64 {
    if score.is_finite() {
        score.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Fallback for MPNs the registry cannot parse: coarse string similarity,
/// capped at the calculator's ceiling so an unparsed near-identical pair can
/// never outrank a parsed exact match.
pub(crate) fn unparsed_fallback(a: &str, b: &str, ceiling: f64) -> f64 {
    clamp_score(coarse_similarity(a, b).min(ceiling))
}
