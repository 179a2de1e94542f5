//! resolve::alias
//!
//! The precomputed alias table mapping normalized text to country codes.
//!
//! # Construction
//!
//! The table is built once, on first lookup, and never mutated afterward.
//! It can therefore be shared read-only across any number of threads
//! without locking.
//!
//! Registration order, which fixes the tie-break on key collisions
//! (first registration wins):
//!
//! 1. For every record in [`crate::data::COUNTRIES`] then
//!    [`crate::data::NON_COUNTRIES`]: its Alpha-2 code, Alpha-3 code, and
//!    normalized English name
//! 2. The variant aliases from [`crate::data::ALIAS_VARIANTS`]
//!
//! Key uniqueness is a data-quality invariant of the generated tables, not
//! a runtime concern; a debug assertion enforces it at construction time.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::core::country::CountryCode;
use crate::data;
use crate::resolve::normalize;

static ALIAS_TABLE: LazyLock<HashMap<String, CountryCode>> = LazyLock::new(build);

/// Look up an already-normalized key. `None` when nothing is registered.
pub(crate) fn lookup(normalized: &str) -> Option<CountryCode> {
    ALIAS_TABLE.get(normalized).copied()
}

fn build() -> HashMap<String, CountryCode> {
    let records = data::COUNTRIES.iter().chain(data::NON_COUNTRIES);
    // Three derived keys per record plus the variant table.
    let capacity = (data::COUNTRIES.len() + data::NON_COUNTRIES.len()) * 3
        + data::ALIAS_VARIANTS.len();
    let mut table = HashMap::with_capacity(capacity);

    for record in records {
        register(&mut table, normalize(record.alpha2), record.code);
        register(&mut table, normalize(record.alpha3), record.code);
        register(&mut table, normalize(record.name), record.code);
    }
    for (alias, code) in data::ALIAS_VARIANTS {
        // Variant keys are pre-normalized by the generator.
        register(&mut table, (*alias).to_string(), *code);
    }
    table
}

fn register(table: &mut HashMap<String, CountryCode>, key: String, code: CountryCode) {
    if key.is_empty() {
        return;
    }
    match table.entry(key) {
        Entry::Vacant(entry) => {
            entry.insert(code);
        }
        Entry::Occupied(entry) => {
            // First registration wins; a collision across distinct codes
            // is a defect in the generated data.
            debug_assert_eq!(
                *entry.get(),
                code,
                "alias key {:?} registered for two codes",
                entry.key()
            );
        }
    }
}

/// Resolve free-form text to a country code, [`CountryCode::UNKNOWN`] on
/// miss. This is the engine behind [`CountryCode::by_name`].
pub(crate) fn country_by_name(name: &str) -> CountryCode {
    lookup(&normalize(name)).unwrap_or(CountryCode::UNKNOWN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_resolves_primary_and_variant_keys() {
        assert_eq!(country_by_name("DE").numeric(), 276);
        assert_eq!(country_by_name("DEU").numeric(), 276);
        assert_eq!(country_by_name("Germany").numeric(), 276);
        // Dataset transliteration variant.
        assert_eq!(country_by_name("Deutschland").numeric(), 276);
    }

    #[test]
    fn historical_entities_resolve() {
        assert_eq!(country_by_name("Netherlands Antilles").numeric(), 530);
        assert_eq!(country_by_name("Kosovo").numeric(), 900);
    }

    #[test]
    fn lookup_expects_normalized_keys() {
        assert_eq!(lookup("GERMANY").map(CountryCode::numeric), Some(276));
        assert_eq!(lookup("germany"), None);
    }

    #[test]
    fn miss_is_the_sentinel() {
        assert_eq!(country_by_name("Atlantis"), CountryCode::UNKNOWN);
        assert_eq!(country_by_name(""), CountryCode::UNKNOWN);
    }
}
