//! Core data types for part-number similarity.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`ComponentCategory`], [`BaseCategory`]: the component-type taxonomy
//! - [`Manufacturer`]: vendors whose naming conventions the registry knows
//! - [`MpnFields`]: semantic fields extracted from one MPN
//! - [`Confidence`]: score bucketing for callers
//!
//! ## Category taxonomy
//!
//! Categories form a two-level hierarchy: a base tag (e.g. `connector`) and
//! zero or more manufacturer refinements (e.g. `connector_molex`). Every
//! refinement resolves to exactly one base category, and applicability checks
//! operate on the base, so a calculator registered for connectors accepts all
//! connector refinements.
//!
//! [`ComponentCategory`]: category::ComponentCategory
//! [`BaseCategory`]: category::BaseCategory
//! [`Manufacturer`]: types::Manufacturer
//! [`MpnFields`]: mpn::MpnFields
//! [`Confidence`]: types::Confidence

pub mod category;
pub mod mpn;
pub mod types;
