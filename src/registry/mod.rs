//! Pattern registry: manufacturer-specific MPN parsing rules.
//!
//! The registry maps (base category, manufacturer prefix) to extraction
//! rules. An embedded registry is compiled into the library, but custom
//! registries can also be loaded from JSON files.
//!
//! ## Embedded registry
//!
//! The default registry covers a representative manufacturer set:
//!
//! - **Connectors**: Molex, TE Connectivity, JST, Hirose, Amphenol, Harwin
//! - **LEDs**: Cree, Vishay, ams OSRAM, Lumileds
//! - **Microcontrollers**: Microchip, STMicroelectronics, NXP, TI
//!
//! plus cross-manufacturer series-equivalence groups and LED color-code
//! groups.
//!
//! ## Custom registries
//!
//! ```rust,no_run
//! use mpn_match::PatternRegistry;
//! use std::path::Path;
//!
//! let registry = PatternRegistry::load_from_file(Path::new("my_patterns.json")).unwrap();
//! ```
//!
//! The registry is immutable after construction and is passed by reference
//! into every calculator call; it is never a global mutable singleton.

pub mod rules;
pub mod store;
