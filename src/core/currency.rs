//! core::currency
//!
//! ISO 4217 currency codes referenced by the country table.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data;

/// ISO 4217 numeric currency code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CurrencyCode(pub(crate) u16);

/// Static reference record for one currency.
#[derive(Debug, PartialEq, Eq)]
pub struct CurrencyRecord {
    pub code: CurrencyCode,
    pub alpha: &'static str,
    pub name: &'static str,
}

impl CurrencyCode {
    /// Sentinel for entities without a currency (e.g. Antarctica) and for
    /// failed lookups.
    pub const NONE: CurrencyCode = CurrencyCode(0);

    /// Resolve an ISO 4217 alphabetic code ("USD", "eur").
    pub fn by_alpha(alpha: &str) -> Option<CurrencyCode> {
        let alpha = alpha.trim().to_ascii_uppercase();
        data::currency_by_alpha(&alpha).map(|r| r.code)
    }

    /// True if the code has a registered record.
    pub fn is_valid(self) -> bool {
        self.record().is_some()
    }

    /// The raw ISO 4217 numeric value.
    pub fn numeric(self) -> u16 {
        self.0
    }

    /// The backing reference record, if registered.
    pub fn record(self) -> Option<&'static CurrencyRecord> {
        data::currency_record(self)
    }

    /// ISO 4217 alphabetic code.
    pub fn alpha(self) -> Option<&'static str> {
        self.record().map(|r| r.alpha)
    }

    /// English currency name.
    pub fn name(self) -> Option<&'static str> {
        self.record().map(|r| r.name)
    }

    /// Every currency in the reference table, ordered by alphabetic code.
    pub fn all() -> impl Iterator<Item = CurrencyCode> {
        data::CURRENCIES.iter().map(|r| r.code)
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alpha().unwrap_or("None"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_alpha_round_trips() {
        let usd = CurrencyCode::by_alpha("USD").unwrap();
        assert_eq!(usd.numeric(), 840);
        assert_eq!(usd.alpha(), Some("USD"));
        assert_eq!(usd.name(), Some("US Dollar"));
        assert_eq!(CurrencyCode::by_alpha("usd"), Some(usd));
    }

    #[test]
    fn none_is_the_sentinel() {
        assert!(!CurrencyCode::NONE.is_valid());
        assert_eq!(CurrencyCode::NONE.alpha(), None);
        assert_eq!(CurrencyCode::NONE.to_string(), "None");
        assert_eq!(CurrencyCode::by_alpha("XYZ?"), None);
    }

    #[test]
    fn all_records_are_consistent() {
        for code in CurrencyCode::all() {
            assert!(code.is_valid());
            assert_eq!(CurrencyCode::by_alpha(code.alpha().unwrap()), Some(code));
        }
    }
}
