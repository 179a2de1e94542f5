//! Gazetteer - ISO 3166 country reference data with fuzzy name resolution
//!
//! Gazetteer maps between country identifiers (ISO 3166-1 numeric, Alpha-2,
//! Alpha-3, FIPS) and their associated attributes: English name, currency,
//! capital, calling codes, region, IOC/FIFA codes, and emoji flag. Free-form
//! text ("russia", "Russian Federation", "Côte d'Ivoire") resolves to a
//! canonical code through a normalizing alias table.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to commands)
//! - [`core`] - Domain types: country, region, currency, subdivision codes
//! - [`resolve`] - Text normalization and alias-table resolution
//! - [`data`] - Generated static reference tables
//! - [`ui`] - Output utilities for the `gaz` binary
//!
//! # Correctness Invariants
//!
//! Gazetteer maintains the following invariants:
//!
//! 1. Exactly one canonical code per real-world entity; many aliases per code
//! 2. The alias table is built once and never mutated; lookups are pure reads
//! 3. Resolution is total: unknown input degrades to a sentinel, never panics
//! 4. Normalization is idempotent
//!
//! # Example
//!
//! ```
//! use gazetteer::core::country::CountryCode;
//!
//! let russia = CountryCode::by_name("Russian Federation");
//! assert_eq!(russia, CountryCode::by_name("ru"));
//! assert_eq!(russia.numeric(), 643);
//! assert_eq!(russia.alpha3(), Some("RUS"));
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod resolve;
pub mod ui;

pub use crate::core::country::{CallCode, Country, CountryCode, CountryRecord, ParseCodeError};
pub use crate::core::currency::{CurrencyCode, CurrencyRecord};
pub use crate::core::region::{Region, RegionCode};
pub use crate::core::subdivision::Subdivision;
pub use crate::resolve::normalize;
