//! Similarity calculators and their dispatch.
//!
//! This module provides the scoring side of the library:
//!
//! - [`SimilarityCalculator`]: the per-category calculator contract
//! - [`CalculatorDispatcher`]: selects the calculator for a category
//! - [`ConnectorCalculator`], [`LedCalculator`], [`MicrocontrollerCalculator`]:
//!   the built-in category calculators
//! - [`text`]: coarse string signals used when extraction fails
//!
//! ## Scoring model
//!
//! Every calculator follows the same shape:
//!
//! 1. **Null safety**: absent MPNs or registry score 0.0
//! 2. **Exact match**: identical normalized strings score the calculator's
//!    ceiling (0.9 — headroom above it is reserved)
//! 3. **Field comparison**: registry rules extract series/variant/package/
//!    bin/color fields, compared by a priority cascade specific to the
//!    category
//! 4. **Fallback**: MPNs no rule can parse degrade to a coarse string
//!    signal, capped at the ceiling
//!
//! Scores are symmetric, finite, and bounded to [0.0, 1.0] for every input.
//!
//! ## Example
//!
//! ```rust
//! use mpn_match::{CalculatorDispatcher, ComponentCategory, PatternRegistry};
//!
//! let registry = PatternRegistry::load_embedded().unwrap();
//! let dispatcher = CalculatorDispatcher::new();
//!
//! let score = dispatcher
//!     .similarity(
//!         Some(ComponentCategory::Microcontroller),
//!         Some("ATMEGA328P"),
//!         Some("ATMEGA328P-AU"),
//!         Some(&registry),
//!     )
//!     .expect("a microcontroller calculator is registered");
//! assert!(score > 0.8);
//! ```
//!
//! [`SimilarityCalculator`]: calculator::SimilarityCalculator
//! [`CalculatorDispatcher`]: dispatcher::CalculatorDispatcher
//! [`ConnectorCalculator`]: connector::ConnectorCalculator
//! [`LedCalculator`]: led::LedCalculator
//! [`MicrocontrollerCalculator`]: microcontroller::MicrocontrollerCalculator

pub mod calculator;
pub mod connector;
pub mod dispatcher;
pub mod led;
pub mod microcontroller;
pub mod text;
