use crate::core::category::ComponentCategory;
use crate::core::types::Confidence;
use crate::registry::store::PatternRegistry;
use crate::similarity::calculator::SimilarityCalculator;
use crate::similarity::connector::ConnectorCalculator;
use crate::similarity::led::LedCalculator;
use crate::similarity::microcontroller::MicrocontrollerCalculator;

/// Result of scoring one MPN pair through a selected calculator
#[derive(Debug, Clone)]
pub struct SimilarityAssessment {
    /// Bounded similarity score
    pub score: f64,

    /// Confidence level derived from the score
    pub confidence: Confidence,

    /// Name of the calculator that produced the score
    pub calculator: &'static str,
}

/// Selects the calculator responsible for a component category.
///
/// Calculators are registered once, in fixed priority order, and the list is
/// never mutated afterwards. When no calculator applies the dispatcher says
/// so explicitly with `None`; it never invents a default score, so the
/// fallback policy stays with the caller.
pub struct CalculatorDispatcher {
    calculators: Vec<Box<dyn SimilarityCalculator>>,
}

impl CalculatorDispatcher {
    /// Create a dispatcher with the built-in calculator set
    #[must_use]
    pub fn new() -> Self {
        Self::with_calculators(vec![
            Box::new(LedCalculator),
            Box::new(ConnectorCalculator),
            Box::new(MicrocontrollerCalculator),
        ])
    }

    /// Create a dispatcher with a custom calculator set, in priority order
    #[must_use]
    pub fn with_calculators(calculators: Vec<Box<dyn SimilarityCalculator>>) -> Self {
        Self { calculators }
    }

    /// Select the first calculator applicable to a category
    #[must_use]
    pub fn select(&self, category: Option<ComponentCategory>) -> Option<&dyn SimilarityCalculator> {
        self.calculators
            .iter()
            .find(|calculator| calculator.is_applicable(category))
            .map(|calculator| calculator.as_ref())
    }

    /// Score an MPN pair with the calculator for the category.
    ///
    /// Returns `None` when no calculator applies — the explicit
    /// "no calculator" signal.
    #[must_use]
    pub fn similarity(
        &self,
        category: Option<ComponentCategory>,
        mpn1: Option<&str>,
        mpn2: Option<&str>,
        registry: Option<&PatternRegistry>,
    ) -> Option<f64> {
        self.select(category)
            .map(|calculator| calculator.calculate_similarity(mpn1, mpn2, registry))
    }

    /// Score an MPN pair and bundle the result with its confidence tier and
    /// the calculator that produced it
    #[must_use]
    pub fn assess(
        &self,
        category: Option<ComponentCategory>,
        mpn1: Option<&str>,
        mpn2: Option<&str>,
        registry: Option<&PatternRegistry>,
    ) -> Option<SimilarityAssessment> {
        let calculator = self.select(category)?;
        let score = calculator.calculate_similarity(mpn1, mpn2, registry);

        Some(SimilarityAssessment {
            score,
            confidence: Confidence::from_score(score),
            calculator: calculator.name(),
        })
    }

    /// Number of registered calculators
    #[must_use]
    pub fn len(&self) -> usize {
        self.calculators.len()
    }

    /// Check if the dispatcher has no calculators
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calculators.is_empty()
    }
}

impl Default for CalculatorDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
