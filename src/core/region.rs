//! core::region
//!
//! UN M.49 continental regions.
//!
//! Regions form a small closed enumeration, so unlike countries they are a
//! first-class enum rather than an opaque numeric newtype. Discriminants are
//! the M.49 area codes; `None` carries the dataset's placeholder value used
//! by pseudo-codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::country::ParseCodeError;
use crate::resolve::normalize;

/// UN M.49 continental region code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[repr(u16)]
pub enum RegionCode {
    /// Sentinel for failed resolution. Never a registered region.
    Unknown = 0,
    /// Placeholder region of the non-geographic pseudo-codes.
    None = 998,
    Africa = 2,
    NorthAmerica = 3,
    SouthAmerica = 5,
    Oceania = 9,
    Antarctica = 10,
    Asia = 142,
    Europe = 150,
}

/// Owned projection of a region, suitable for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub code: RegionCode,
}

impl RegionCode {
    /// Resolve a free-text region name or abbreviation.
    ///
    /// Accepts the two-letter continent abbreviations and English names in
    /// any case, plus the spelling variants registered in the dataset.
    /// Returns [`RegionCode::Unknown`] on miss.
    ///
    /// # Example
    ///
    /// ```
    /// use gazetteer::core::region::RegionCode;
    ///
    /// assert_eq!(RegionCode::by_name("eu"), RegionCode::Europe);
    /// assert_eq!(RegionCode::by_name("Europe"), RegionCode::Europe);
    /// assert_eq!(RegionCode::by_name("middle earth"), RegionCode::Unknown);
    /// ```
    pub fn by_name(name: &str) -> RegionCode {
        match normalize(name).as_str() {
            "AF" | "AFRICA" | "AFRIKA" => RegionCode::Africa,
            "NA" | "NORTHAMERICA" | "NORTHAMERIC" => RegionCode::NorthAmerica,
            "SA" | "SOUTHAMERICA" | "SOUTHAMERIC" => RegionCode::SouthAmerica,
            "OC" | "OCEANIA" | "OKEANIA" | "OCEANIYA" | "OKEANIYA" => RegionCode::Oceania,
            "AN" | "ANTARCTICA" | "ANTARCTIC" | "ANTARKTICA" | "ANTARKTIC" => {
                RegionCode::Antarctica
            }
            "AS" | "ASIA" => RegionCode::Asia,
            "EU" | "EUROPE" | "EUROPA" | "EVROPA" => RegionCode::Europe,
            "NONE" | "XX" | "NON" => RegionCode::None,
            _ => RegionCode::Unknown,
        }
    }

    /// True for every registered region, including the `None` placeholder.
    pub fn is_valid(self) -> bool {
        self != RegionCode::Unknown
    }

    /// The M.49 numeric area code.
    pub fn numeric(self) -> u16 {
        self as u16
    }

    /// English region name.
    pub fn name(self) -> &'static str {
        match self {
            RegionCode::Unknown => "Unknown",
            RegionCode::None => "None",
            RegionCode::Africa => "Africa",
            RegionCode::NorthAmerica => "North America",
            RegionCode::SouthAmerica => "South America",
            RegionCode::Oceania => "Oceania",
            RegionCode::Antarctica => "Antarctica",
            RegionCode::Asia => "Asia",
            RegionCode::Europe => "Europe",
        }
    }

    /// Owned projection of the region.
    pub fn info(self) -> Region {
        Region {
            name: self.name().to_string(),
            code: self,
        }
    }

    /// The seven continental regions, excluding the placeholders.
    pub fn all() -> &'static [RegionCode] {
        &[
            RegionCode::Africa,
            RegionCode::NorthAmerica,
            RegionCode::SouthAmerica,
            RegionCode::Oceania,
            RegionCode::Antarctica,
            RegionCode::Asia,
            RegionCode::Europe,
        ]
    }

    /// Projections of every continental region.
    pub fn all_info() -> Vec<Region> {
        Self::all().iter().map(|r| r.info()).collect()
    }

    /// Number of regions returned by [`RegionCode::all`].
    pub fn total() -> usize {
        Self::all().len()
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RegionCode {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let region = RegionCode::by_name(s);
        if region.is_valid() {
            Ok(region)
        } else {
            Err(ParseCodeError::UnknownRegion(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_name_is_case_insensitive() {
        assert_eq!(RegionCode::by_name("africa"), RegionCode::Africa);
        assert_eq!(RegionCode::by_name("AFRICA"), RegionCode::Africa);
        assert_eq!(RegionCode::by_name("af"), RegionCode::Africa);
        assert_eq!(RegionCode::by_name("North America"), RegionCode::NorthAmerica);
    }

    #[test]
    fn unknown_is_the_sentinel() {
        assert_eq!(RegionCode::by_name(""), RegionCode::Unknown);
        assert!(!RegionCode::Unknown.is_valid());
        assert!(RegionCode::None.is_valid());
    }

    #[test]
    fn all_covers_the_seven_continents() {
        assert_eq!(RegionCode::total(), 7);
        assert!(RegionCode::all().iter().all(|r| r.is_valid()));
        assert!(!RegionCode::all().contains(&RegionCode::None));
    }

    #[test]
    fn numeric_values_are_m49_area_codes() {
        assert_eq!(RegionCode::Africa.numeric(), 2);
        assert_eq!(RegionCode::Europe.numeric(), 150);
        assert_eq!(RegionCode::Asia.numeric(), 142);
    }
}
