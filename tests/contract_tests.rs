//! Cross-calculator contract tests.
//!
//! Every calculator in the set must uphold the same contract regardless of
//! its category-specific scoring: absent inputs score exactly 0.0, all
//! scores are finite and bounded, results are symmetric, and applicability
//! never panics. These properties are checked here uniformly, independent of
//! the per-category logic exercised in each calculator's unit tests.

use mpn_match::{
    CalculatorDispatcher, ComponentCategory, ConnectorCalculator, LedCalculator,
    MicrocontrollerCalculator, PatternRegistry, SimilarityCalculator,
};

fn calculators() -> Vec<Box<dyn SimilarityCalculator>> {
    vec![
        Box::new(LedCalculator),
        Box::new(ConnectorCalculator),
        Box::new(MicrocontrollerCalculator),
    ]
}

/// A mixed corpus: parseable parts from every category, plus strings no
/// registry rule can handle.
const CORPUS: &[&str] = &[
    "TLHR5400",
    "TLHR5401",
    "TLHG5400",
    "XPERED-L1-FKA",
    "XPERED-L1-FCA",
    "LXML-PD01-0040",
    "22-23-2021",
    "22-23-2041",
    "B2B-PH-K-S",
    "PHR-2",
    "DF13-4S-1.25C",
    "M20-9990246",
    "1-284392-0",
    "ATMEGA328P",
    "ATMEGA328P-AU",
    "STM32F103C8T6",
    "GD32F103C8T6",
    "MSP430G2553IPW20",
    "garbage",
    "???",
    "A",
    "12345",
];

#[test]
fn absent_mpn_or_registry_scores_zero_for_every_calculator() {
    let registry = PatternRegistry::load_embedded().unwrap();

    for calculator in calculators() {
        let name = calculator.name();

        let score = calculator.calculate_similarity(None, Some("TLHR5400"), Some(&registry));
        assert!(score.abs() < f64::EPSILON, "{name}: absent first MPN");

        let score = calculator.calculate_similarity(Some("TLHR5400"), None, Some(&registry));
        assert!(score.abs() < f64::EPSILON, "{name}: absent second MPN");

        let score = calculator.calculate_similarity(Some("TLHR5400"), Some("TLHR5401"), None);
        assert!(score.abs() < f64::EPSILON, "{name}: absent registry");

        let score = calculator.calculate_similarity(None, None, None);
        assert!(score.abs() < f64::EPSILON, "{name}: everything absent");
    }
}

#[test]
fn empty_and_whitespace_mpns_score_zero() {
    let registry = PatternRegistry::load_embedded().unwrap();

    for calculator in calculators() {
        let name = calculator.name();

        for empty in ["", "   ", "\t"] {
            let score = calculator.calculate_similarity(Some(empty), Some("TLHR5400"), Some(&registry));
            assert!(score.abs() < f64::EPSILON, "{name}: {empty:?} first");

            let score = calculator.calculate_similarity(Some("TLHR5400"), Some(empty), Some(&registry));
            assert!(score.abs() < f64::EPSILON, "{name}: {empty:?} second");
        }
    }
}

#[test]
fn all_scores_are_finite_and_bounded() {
    let registry = PatternRegistry::load_embedded().unwrap();

    for calculator in calculators() {
        let name = calculator.name();
        for a in CORPUS {
            for b in CORPUS {
                let score = calculator.calculate_similarity(Some(a), Some(b), Some(&registry));
                assert!(score.is_finite(), "{name}: {a} vs {b} not finite");
                assert!(
                    (0.0..=1.0).contains(&score),
                    "{name}: {a} vs {b} gave {score}"
                );
            }
        }
    }
}

#[test]
fn scores_are_symmetric() {
    let registry = PatternRegistry::load_embedded().unwrap();

    for calculator in calculators() {
        let name = calculator.name();
        for a in CORPUS {
            for b in CORPUS {
                let forward = calculator.calculate_similarity(Some(a), Some(b), Some(&registry));
                let reverse = calculator.calculate_similarity(Some(b), Some(a), Some(&registry));
                assert!(
                    (forward - reverse).abs() < 0.001,
                    "{name}: {a} vs {b}: {forward} != {reverse}"
                );
            }
        }
    }
}

#[test]
fn case_and_whitespace_do_not_change_scores() {
    let registry = PatternRegistry::load_embedded().unwrap();
    let calculator = LedCalculator;

    let canonical =
        calculator.calculate_similarity(Some("TLHR5400"), Some("TLHR5401"), Some(&registry));
    let folded =
        calculator.calculate_similarity(Some(" tlhr5400 "), Some("tlhr5401"), Some(&registry));
    assert!((canonical - folded).abs() < 0.001);
}

#[test]
fn led_identity_and_bin_anchors() {
    let registry = PatternRegistry::load_embedded().unwrap();
    let calculator = LedCalculator;

    let score = calculator.calculate_similarity(Some("TLHR5400"), Some("TLHR5400"), Some(&registry));
    assert!((score - 0.9).abs() < 0.01, "identity: {score}");

    let score = calculator.calculate_similarity(Some("TLHR5400"), Some("TLHR5401"), Some(&registry));
    assert!((score - 0.9).abs() < 0.01, "bin variant: {score}");
}

#[test]
fn led_color_temperature_is_a_hard_boundary() {
    let registry = PatternRegistry::load_embedded().unwrap();
    let calculator = LedCalculator;

    let color_mismatch = calculator.calculate_similarity(
        Some("XPERED-L1-FKA"),
        Some("XPERED-L1-FCA"),
        Some(&registry),
    );
    assert!((color_mismatch - 0.3).abs() < 0.01, "color: {color_mismatch}");

    let bin_variant = calculator.calculate_similarity(
        Some("XPERED-L1-FKA"),
        Some("XPERED-L1-FKB"),
        Some(&registry),
    );
    assert!((bin_variant - 0.9).abs() < 0.01, "bin: {bin_variant}");
}

#[test]
fn microcontroller_cross_vendor_floor() {
    let registry = PatternRegistry::load_embedded().unwrap();
    let calculator = MicrocontrollerCalculator;

    let score = calculator.calculate_similarity(
        Some("ATMEGA328P"),
        Some("STM32F103C8T6"),
        Some(&registry),
    );
    assert!(score >= 0.5, "cross-vendor: {score}");
}

#[test]
fn connector_refinements_are_all_applicable() {
    let connector = ConnectorCalculator;
    let refinements = [
        ComponentCategory::ConnectorMolex,
        ComponentCategory::ConnectorTe,
        ComponentCategory::ConnectorJst,
        ComponentCategory::ConnectorHirose,
        ComponentCategory::ConnectorAmphenol,
        ComponentCategory::ConnectorHarwin,
    ];

    for category in refinements {
        assert!(connector.is_applicable(Some(category)), "{category}");
    }
}

#[test]
fn passive_categories_match_no_calculator() {
    let outside = [
        ComponentCategory::Resistor,
        ComponentCategory::Capacitor,
        ComponentCategory::Transistor,
    ];

    for calculator in calculators() {
        for category in outside {
            assert!(
                !calculator.is_applicable(Some(category)),
                "{}: {category}",
                calculator.name()
            );
        }
        assert!(!calculator.is_applicable(None), "{}", calculator.name());
    }
}

#[test]
fn dispatcher_reports_no_calculator_explicitly() {
    let dispatcher = CalculatorDispatcher::new();
    let registry = PatternRegistry::load_embedded().unwrap();

    assert!(dispatcher.select(Some(ComponentCategory::Resistor)).is_none());
    assert!(dispatcher.select(None).is_none());

    let result = dispatcher.similarity(
        Some(ComponentCategory::Capacitor),
        Some("GRM188R71C104KA01D"),
        Some("GRM188R71C104KA01D"),
        Some(&registry),
    );
    assert!(result.is_none());
}

#[test]
fn dispatcher_routes_refinements_to_base_calculators() {
    let dispatcher = CalculatorDispatcher::new();
    let registry = PatternRegistry::load_embedded().unwrap();

    let score = dispatcher
        .similarity(
            Some(ComponentCategory::ConnectorMolex),
            Some("22-23-2021"),
            Some("22-23-2041"),
            Some(&registry),
        )
        .unwrap();
    assert!(score > 0.7);

    let score = dispatcher
        .similarity(
            Some(ComponentCategory::MicrocontrollerMicrochip),
            Some("ATMEGA328P"),
            Some("ATMEGA328P-AU"),
            Some(&registry),
        )
        .unwrap();
    assert!(score > 0.7);
}

#[test]
fn exact_match_scores_ceiling_for_every_calculator() {
    let registry = PatternRegistry::load_embedded().unwrap();

    // One representative parseable part per calculator
    let anchors: [(&dyn SimilarityCalculator, &str); 3] = [
        (&LedCalculator, "XPERED-L1-FKA"),
        (&ConnectorCalculator, "22-23-2021"),
        (&MicrocontrollerCalculator, "STM32F103C8T6"),
    ];

    for (calculator, mpn) in anchors {
        let identical = calculator.calculate_similarity(Some(mpn), Some(mpn), Some(&registry));
        assert!(
            (identical - 0.9).abs() < 0.01,
            "{}: identity gave {identical}",
            calculator.name()
        );

        // No differing pair may outrank the exact match
        for other in CORPUS {
            let differing = calculator.calculate_similarity(Some(mpn), Some(other), Some(&registry));
            assert!(
                identical + 0.001 >= differing,
                "{}: {mpn} vs {other} gave {differing} above identity {identical}",
                calculator.name()
            );
        }
    }
}
