//! # mpn-match
//!
//! A library for estimating how similar two manufacturer part numbers (MPNs)
//! are, for deduplicating bill-of-materials entries and finding substitute
//! components across manufacturers.
//!
//! Part numbers carry structure — manufacturer series, package suffixes,
//! bin/grade codes, color codes — but the formats are ad hoc and vendor
//! specific. A plain edit distance gets them badly wrong: an LED that differs
//! by one brightness-bin letter is the same part, while one that differs by
//! one color-code letter is a different product entirely.
//!
//! `mpn-match` solves this with per-category calculators that parse both MPNs
//! into semantic fields using a registry of manufacturer-specific patterns,
//! then combine field-level agreement into a bounded, symmetric score.
//!
//! ## Features
//!
//! - **Category dispatch**: a fixed-priority calculator set selected by
//!   component category, with manufacturer refinements resolving to their
//!   base category
//! - **Field-level scoring**: series, variant, package, bin, and color codes
//!   compared by category-specific priority cascades
//! - **Equivalence groups**: cross-manufacturer series naming the same
//!   physical part family score above unrelated parts
//! - **Graceful degradation**: unparseable MPNs fall back to coarse string
//!   similarity; absent inputs score 0.0, never an error
//!
//! ## Example
//!
//! ```rust
//! use mpn_match::{CalculatorDispatcher, ComponentCategory, PatternRegistry};
//!
//! // Load the embedded registry of manufacturer parsing rules
//! let registry = PatternRegistry::load_embedded().unwrap();
//! let dispatcher = CalculatorDispatcher::new();
//!
//! // Same LED series, different brightness bin: same functional part
//! let score = dispatcher
//!     .similarity(
//!         Some(ComponentCategory::Led),
//!         Some("TLHR5400"),
//!         Some("TLHR5401"),
//!         Some(&registry),
//!     )
//!     .expect("an LED calculator is registered");
//! assert!(score > 0.8);
//!
//! // No calculator claims resistors: the dispatcher says so explicitly
//! let none = dispatcher.similarity(
//!     Some(ComponentCategory::Resistor),
//!     Some("RC0603FR-0710KL"),
//!     Some("RC0603FR-0710KL"),
//!     Some(&registry),
//! );
//! assert!(none.is_none());
//! ```
//!
//! ## Modules
//!
//! - [`core`]: category taxonomy, manufacturers, MPN normalization
//! - [`registry`]: manufacturer-specific parsing rules and their lookup
//! - [`similarity`]: the calculators, their dispatcher, and text fallbacks

pub mod core;
pub mod registry;
pub mod similarity;

// Re-export commonly used types for convenience
pub use crate::core::category::{BaseCategory, ComponentCategory};
pub use crate::core::mpn::MpnFields;
pub use crate::core::types::{Confidence, Manufacturer};
pub use crate::registry::rules::ExtractionRule;
pub use crate::registry::store::{PatternRegistry, RegistryData, RegistryError};
pub use crate::similarity::calculator::SimilarityCalculator;
pub use crate::similarity::connector::ConnectorCalculator;
pub use crate::similarity::dispatcher::{CalculatorDispatcher, SimilarityAssessment};
pub use crate::similarity::led::LedCalculator;
pub use crate::similarity::microcontroller::MicrocontrollerCalculator;
