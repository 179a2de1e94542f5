//! resolve
//!
//! Text normalization and alias-table resolution.
//!
//! # Modules
//!
//! - [`normalize`](self::normalize()) - Canonical matching-key construction
//! - `alias` - The precomputed alias table (crate-internal)
//!
//! # Guarantees
//!
//! - Resolution is deterministic and total: every input yields a value,
//!   possibly a sentinel, and nothing panics
//! - The alias table is built once and shared read-only thereafter
//! - Lookup cost is a single hashed-map access, independent of table size

mod alias;
mod normalize;

pub use normalize::normalize;

pub(crate) use alias::country_by_name;
