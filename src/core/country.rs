//! core::country
//!
//! Country codes and their attribute projections.
//!
//! # Types
//!
//! - [`CountryCode`] - ISO 3166-1 numeric country code (plus ITU pseudo-codes)
//! - [`CountryRecord`] - Static reference record backing a code
//! - [`Country`] - Owned, serializable projection of a full record
//! - [`CallCode`] - ITU-T E.164 calling code
//!
//! # Sentinel
//!
//! [`CountryCode::UNKNOWN`] (value 0) is returned by every resolution path
//! that fails to match. It is distinct from all registered codes and
//! `is_valid()` is false for it. No resolution path returns an error or
//! panics: unrecognized input always degrades to the sentinel.
//!
//! # Example
//!
//! ```
//! use gazetteer::core::country::CountryCode;
//!
//! let ci = CountryCode::by_name("Côte d'Ivoire");
//! assert_eq!(ci.alpha3(), Some("CIV"));
//! assert_eq!(CountryCode::by_name("not-a-real-country"), CountryCode::UNKNOWN);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::currency::CurrencyCode;
use crate::core::region::RegionCode;
use crate::core::subdivision::Subdivision;
use crate::data;
use crate::resolve;

/// Errors from parsing textual identifiers into codes.
///
/// The resolution entry points ([`CountryCode::by_name`] and friends) never
/// fail; this error exists for callers that prefer `Result` over checking
/// the sentinel, via the [`FromStr`] impls.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCodeError {
    #[error("unknown country: {0:?}")]
    UnknownCountry(String),

    #[error("unknown region: {0:?}")]
    UnknownRegion(String),
}

/// ISO 3166-1 numeric country code.
///
/// The value space also carries the dataset's pseudo-codes: `998` (None),
/// `999` (International), and the ITU non-geographic service codes in the
/// `999800..=999991` range. Pseudo-codes resolve and validate like countries
/// but are excluded from [`CountryCode::all`]; they are enumerated by
/// [`CountryCode::non_countries`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CountryCode(pub(crate) u32);

/// An ITU-T E.164 international calling code (e.g. `7` for Russia, `1242`
/// for the Bahamas).
///
/// Some territories dial through a parent country's number block, so a
/// value can be a full routing prefix well past four digits (e.g.
/// `6189162` for the Cocos Islands via Australia).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CallCode(pub(crate) u32);

impl CallCode {
    /// The numeric dialing prefix, without the leading `+`.
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CallCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}", self.0)
    }
}

/// Static reference record for one country or pseudo-code.
///
/// Records live in [`crate::data::COUNTRIES`] and
/// [`crate::data::NON_COUNTRIES`]; all [`CountryCode`] accessors are
/// projections of these records.
#[derive(Debug, PartialEq, Eq)]
pub struct CountryRecord {
    pub code: CountryCode,
    pub name: &'static str,
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub fips: &'static str,
    pub ioc: &'static str,
    pub fifa: &'static str,
    pub capital: &'static str,
    pub currency: CurrencyCode,
    pub call_codes: &'static [CallCode],
    pub region: RegionCode,
}

/// Owned projection of a full country record, suitable for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub alpha2: String,
    pub alpha3: String,
    pub fips: String,
    pub ioc: String,
    pub fifa: String,
    pub emoji: Option<String>,
    pub code: CountryCode,
    pub currency: CurrencyCode,
    pub capital: String,
    pub call_codes: Vec<CallCode>,
    pub domain: Option<String>,
    pub region: RegionCode,
    pub subdivisions: Vec<String>,
}

impl CountryCode {
    /// The sentinel returned when resolution fails. Never a valid code.
    pub const UNKNOWN: CountryCode = CountryCode(0);

    /// Resolve free-form text to a country code.
    ///
    /// Accepts Alpha-2 and Alpha-3 codes, English names, and the variant
    /// spellings registered in the alias table, in any case and with any
    /// punctuation. Returns [`CountryCode::UNKNOWN`] when nothing matches.
    ///
    /// # Example
    ///
    /// ```
    /// use gazetteer::core::country::CountryCode;
    ///
    /// let rus = CountryCode::by_name("russia");
    /// assert_eq!(rus, CountryCode::by_name("RUS"));
    /// assert_eq!(rus, CountryCode::by_name("Russian Federation"));
    /// assert_eq!(CountryCode::by_name(""), CountryCode::UNKNOWN);
    /// ```
    pub fn by_name(name: &str) -> CountryCode {
        resolve::country_by_name(name)
    }

    /// Resolve an ISO 3166-1 numeric code.
    ///
    /// Returns [`CountryCode::UNKNOWN`] for negative, out-of-range, or
    /// unregistered values.
    pub fn by_numeric(numeric: i64) -> CountryCode {
        let Ok(value) = u32::try_from(numeric) else {
            return CountryCode::UNKNOWN;
        };
        let code = CountryCode(value);
        if code.is_valid() {
            code
        } else {
            CountryCode::UNKNOWN
        }
    }

    /// True if the code has a registered record (country or pseudo-code).
    pub fn is_valid(self) -> bool {
        self.record().is_some()
    }

    /// The raw numeric value.
    pub fn numeric(self) -> u32 {
        self.0
    }

    /// The backing reference record, if this code is registered.
    pub fn record(self) -> Option<&'static CountryRecord> {
        data::record(self)
    }

    /// English short name.
    pub fn name(self) -> Option<&'static str> {
        self.record().map(|r| r.name)
    }

    /// ISO 3166-1 Alpha-2 code.
    pub fn alpha2(self) -> Option<&'static str> {
        self.record().map(|r| r.alpha2)
    }

    /// ISO 3166-1 Alpha-3 code.
    pub fn alpha3(self) -> Option<&'static str> {
        self.record().map(|r| r.alpha3)
    }

    /// FIPS 10-4 code.
    pub fn fips(self) -> Option<&'static str> {
        self.record().map(|r| r.fips)
    }

    /// International Olympic Committee code.
    pub fn ioc(self) -> Option<&'static str> {
        self.record().map(|r| r.ioc)
    }

    /// FIFA code.
    pub fn fifa(self) -> Option<&'static str> {
        self.record().map(|r| r.fifa)
    }

    /// Capital city name. Empty for entities without one (e.g. Antarctica).
    pub fn capital(self) -> Option<&'static str> {
        self.record().map(|r| r.capital)
    }

    /// Currency used by the country.
    pub fn currency(self) -> Option<CurrencyCode> {
        self.record().map(|r| r.currency)
    }

    /// ITU calling codes. Empty for unregistered codes.
    pub fn call_codes(self) -> &'static [CallCode] {
        self.record().map_or(&[], |r| r.call_codes)
    }

    /// UN M.49 continental region. [`RegionCode::Unknown`] if unregistered.
    pub fn region(self) -> RegionCode {
        self.record().map_or(RegionCode::Unknown, |r| r.region)
    }

    /// Country-code top-level domain derived from Alpha-2 (e.g. `.ru`).
    ///
    /// `None` for pseudo-codes, whose Alpha-2 field is not a two-letter code.
    pub fn domain(self) -> Option<String> {
        let alpha2 = self.alpha2()?;
        if alpha2.len() == 2 && alpha2.bytes().all(|b| b.is_ascii_uppercase()) {
            Some(format!(".{}", alpha2.to_ascii_lowercase()))
        } else {
            None
        }
    }

    /// Emoji flag built from the Alpha-2 code via Unicode regional
    /// indicator symbols (e.g. "RU" becomes "🇷🇺").
    pub fn emoji(self) -> Option<String> {
        regional_indicators(self.alpha2()?, 2)
    }

    /// Three-symbol variant of [`CountryCode::emoji`], built from Alpha-3.
    pub fn emoji3(self) -> Option<String> {
        regional_indicators(self.alpha3()?, 3)
    }

    /// Registered ISO 3166-2 subdivisions. Empty when the dataset carries
    /// none for this country.
    pub fn subdivisions(self) -> &'static [Subdivision] {
        data::subdivisions(self)
    }

    /// Full owned projection of the record, or `None` if unregistered.
    pub fn info(self) -> Option<Country> {
        let record = self.record()?;
        Some(Country {
            name: record.name.to_string(),
            alpha2: record.alpha2.to_string(),
            alpha3: record.alpha3.to_string(),
            fips: record.fips.to_string(),
            ioc: record.ioc.to_string(),
            fifa: record.fifa.to_string(),
            emoji: self.emoji(),
            code: self,
            currency: record.currency,
            capital: record.capital.to_string(),
            call_codes: record.call_codes.to_vec(),
            domain: self.domain(),
            region: record.region,
            subdivisions: self
                .subdivisions()
                .iter()
                .map(|s| s.code.to_string())
                .collect(),
        })
    }

    /// All ISO 3166-1 countries, in dataset registration order.
    ///
    /// Pseudo-codes are deliberately excluded; see
    /// [`CountryCode::non_countries`].
    pub fn all() -> impl Iterator<Item = CountryCode> {
        data::COUNTRIES.iter().map(|r| r.code)
    }

    /// Full projections of every country, in [`CountryCode::all`] order.
    pub fn all_info() -> Vec<Country> {
        Self::all().filter_map(CountryCode::info).collect()
    }

    /// The pseudo-codes: the `None` / `International` placeholders and the
    /// ITU non-geographic service codes.
    pub fn non_countries() -> impl Iterator<Item = CountryCode> {
        data::NON_COUNTRIES.iter().map(|r| r.code)
    }

    /// Number of countries returned by [`CountryCode::all`].
    pub fn total() -> usize {
        data::COUNTRIES.len()
    }
}

/// Map an ASCII-uppercase code of the expected length onto Unicode
/// regional indicator symbols.
fn regional_indicators(code: &str, len: usize) -> Option<String> {
    let bytes = code.as_bytes();
    if bytes.len() != len || !bytes.iter().all(|b| b.is_ascii_uppercase()) {
        return None;
    }
    bytes
        .iter()
        .map(|b| char::from_u32(0x1F1E6 + u32::from(b - b'A')))
        .collect()
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("Unknown"))
    }
}

impl FromStr for CountryCode {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = CountryCode::by_name(s);
        if code.is_valid() {
            Ok(code)
        } else {
            Err(ParseCodeError::UnknownCountry(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_name_matches_all_primary_identifiers() {
        let rus = CountryCode::by_name("RU");
        assert_eq!(rus.numeric(), 643);
        assert_eq!(CountryCode::by_name("RUS"), rus);
        assert_eq!(CountryCode::by_name("Russian Federation"), rus);
        assert_eq!(CountryCode::by_name("russia"), rus);
    }

    #[test]
    fn by_name_misses_return_the_sentinel() {
        assert_eq!(CountryCode::by_name(""), CountryCode::UNKNOWN);
        assert_eq!(
            CountryCode::by_name("not-a-real-country"),
            CountryCode::UNKNOWN
        );
        assert!(!CountryCode::UNKNOWN.is_valid());
    }

    #[test]
    fn by_numeric_checks_the_registered_range() {
        assert_eq!(CountryCode::by_numeric(643).alpha2(), Some("RU"));
        assert_eq!(CountryCode::by_numeric(-1), CountryCode::UNKNOWN);
        assert_eq!(CountryCode::by_numeric(0), CountryCode::UNKNOWN);
        assert_eq!(CountryCode::by_numeric(1_000_000_000), CountryCode::UNKNOWN);
    }

    #[test]
    fn diacritics_fold_to_the_canonical_entry() {
        let ci = CountryCode::by_name("Côte d'Ivoire");
        assert_eq!(ci.numeric(), 384);
        assert_eq!(ci.alpha3(), Some("CIV"));
        assert_eq!(CountryCode::by_name("Ivory Coast"), ci);
    }

    #[test]
    fn emoji_flags_use_regional_indicators() {
        let rus = CountryCode::by_name("RU");
        assert_eq!(rus.emoji().as_deref(), Some("\u{1F1F7}\u{1F1FA}"));
        assert_eq!(
            rus.emoji3().as_deref(),
            Some("\u{1F1F7}\u{1F1FA}\u{1F1F8}")
        );
        // Pseudo-codes have no two-letter Alpha-2, hence no flag.
        assert_eq!(CountryCode::by_name("International").emoji(), None);
    }

    #[test]
    fn domain_is_lowercased_alpha2() {
        assert_eq!(CountryCode::by_name("DE").domain().as_deref(), Some(".de"));
        assert_eq!(CountryCode::by_name("None").domain(), None);
        assert_eq!(CountryCode::UNKNOWN.domain(), None);
    }

    #[test]
    fn pseudo_codes_are_valid_but_not_enumerated() {
        let intl = CountryCode::by_name("International");
        assert_eq!(intl.numeric(), 999);
        assert!(intl.is_valid());
        assert!(CountryCode::all().all(|c| c != intl));
        assert!(CountryCode::non_countries().any(|c| c == intl));
    }

    #[test]
    fn info_projects_the_whole_record() {
        let info = CountryCode::by_name("Bahamas").info().unwrap();
        assert_eq!(info.alpha2, "BS");
        assert_eq!(info.alpha3, "BHS");
        assert_eq!(info.capital, "Nassau");
        assert!(info.call_codes.contains(&CallCode(1242)));
        assert_eq!(info.domain.as_deref(), Some(".bs"));
    }

    #[test]
    fn shared_block_call_codes_keep_their_full_prefix() {
        let cocos = CountryCode::by_name("CC");
        let values: Vec<u32> = cocos.call_codes().iter().map(|c| c.value()).collect();
        assert_eq!(values, [672, 6_189_162]);

        let vatican = CountryCode::by_name("VA");
        assert_eq!(vatican.call_codes(), &[CallCode(3_906_698)]);
        assert_eq!(vatican.call_codes()[0].to_string(), "+3906698");

        for (code, prefix) in [("CX", 6_189_164), ("GG", 441_481), ("JE", 441_534)] {
            let country = CountryCode::by_name(code);
            assert!(country.call_codes().iter().any(|c| c.value() == prefix));
        }
    }

    #[test]
    fn total_matches_enumeration() {
        assert_eq!(CountryCode::total(), CountryCode::all().count());
        assert_eq!(CountryCode::total(), 252);
    }

    #[test]
    fn from_str_wraps_the_sentinel_in_an_error() {
        assert_eq!("sweden".parse::<CountryCode>().unwrap().alpha2(), Some("SE"));
        assert_eq!(
            "atlantis".parse::<CountryCode>(),
            Err(ParseCodeError::UnknownCountry("atlantis".to_string()))
        );
    }

    #[test]
    fn display_renders_the_english_name() {
        assert_eq!(CountryCode::by_name("JP").to_string(), "Japan");
        assert_eq!(CountryCode::UNKNOWN.to_string(), "Unknown");
    }
}
