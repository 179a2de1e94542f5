//! core
//!
//! Core domain types for Gazetteer.
//!
//! # Modules
//!
//! - [`country`] - Country codes, records, and attribute projections
//! - [`region`] - UN M.49 continental regions
//! - [`currency`] - ISO 4217 currency codes
//! - [`subdivision`] - ISO 3166-2 subdivisions
//!
//! # Design Principles
//!
//! - One canonical code per entity; aliases converge on it
//! - All lookups are total: misses yield sentinels, never panics
//! - Reference data is immutable, process-wide static state

pub mod country;
pub mod currency;
pub mod region;
pub mod subdivision;
