//! data
//!
//! Generated static reference tables and their lookup indexes.
//!
//! The tables themselves (`countries`, `aliases`, `currencies`) are
//! generated from the upstream dataset; `subdivisions` is maintained by
//! hand. Indexes are built lazily on first access and shared read-only.

mod aliases;
mod countries;
mod currencies;
mod subdivisions;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::core::country::{CountryCode, CountryRecord};
use crate::core::currency::{CurrencyCode, CurrencyRecord};
use crate::core::subdivision::Subdivision;

pub use aliases::ALIAS_VARIANTS;
pub use countries::{COUNTRIES, NON_COUNTRIES};
pub use currencies::CURRENCIES;
pub use subdivisions::SUBDIVISIONS;

static CODE_INDEX: LazyLock<HashMap<u32, &'static CountryRecord>> = LazyLock::new(|| {
    COUNTRIES
        .iter()
        .chain(NON_COUNTRIES)
        .map(|record| (record.code.numeric(), record))
        .collect()
});

static CURRENCY_INDEX: LazyLock<HashMap<u16, &'static CurrencyRecord>> =
    LazyLock::new(|| {
        CURRENCIES
            .iter()
            .map(|record| (record.code.numeric(), record))
            .collect()
    });

static CURRENCY_ALPHA_INDEX: LazyLock<HashMap<&'static str, &'static CurrencyRecord>> =
    LazyLock::new(|| CURRENCIES.iter().map(|record| (record.alpha, record)).collect());

/// The reference record for a country code, if registered.
pub(crate) fn record(code: CountryCode) -> Option<&'static CountryRecord> {
    CODE_INDEX.get(&code.numeric()).copied()
}

/// The reference record for a currency code, if registered.
pub(crate) fn currency_record(code: CurrencyCode) -> Option<&'static CurrencyRecord> {
    CURRENCY_INDEX.get(&code.numeric()).copied()
}

/// The currency record for an ISO 4217 alphabetic code (uppercase).
pub(crate) fn currency_by_alpha(alpha: &str) -> Option<&'static CurrencyRecord> {
    CURRENCY_ALPHA_INDEX.get(alpha).copied()
}

/// Registered subdivisions for a country; empty when the dataset has none.
pub(crate) fn subdivisions(code: CountryCode) -> &'static [Subdivision] {
    SUBDIVISIONS
        .iter()
        .find(|(country, _)| *country == code)
        .map_or(&[], |(_, subdivisions)| *subdivisions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_indexes_to_its_own_record() {
        for rec in COUNTRIES.iter().chain(NON_COUNTRIES) {
            assert_eq!(record(rec.code), Some(rec));
        }
    }

    #[test]
    fn country_codes_are_unique() {
        assert_eq!(CODE_INDEX.len(), COUNTRIES.len() + NON_COUNTRIES.len());
    }

    #[test]
    fn countries_have_well_formed_primary_codes() {
        for rec in COUNTRIES {
            assert_eq!(rec.alpha2.len(), 2, "{}", rec.name);
            assert_eq!(rec.alpha3.len(), 3, "{}", rec.name);
            assert!(rec.alpha2.bytes().all(|b| b.is_ascii_uppercase()));
            assert!(rec.alpha3.bytes().all(|b| b.is_ascii_uppercase()));
        }
    }

    #[test]
    fn subdivision_tables_match_their_country() {
        for (code, subdivisions) in SUBDIVISIONS {
            let alpha2 = code.alpha2().expect("subdivision table for unknown code");
            for s in *subdivisions {
                assert_eq!(s.country_alpha2(), alpha2, "{}", s.code);
            }
        }
    }
}
