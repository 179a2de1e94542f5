//! core::subdivision
//!
//! ISO 3166-2 country subdivisions.

use serde::{Deserialize, Serialize};

/// An ISO 3166-2 subdivision of a country.
///
/// `code` is the full ISO 3166-2 identifier, country prefix included
/// (e.g. `"US-CA"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subdivision {
    pub code: &'static str,
    pub name: &'static str,
}

impl Subdivision {
    /// The Alpha-2 code of the country this subdivision belongs to.
    pub fn country_alpha2(&self) -> &'static str {
        self.code.split_once('-').map_or(self.code, |(prefix, _)| prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_prefix_is_extracted() {
        let s = Subdivision {
            code: "US-CA",
            name: "California",
        };
        assert_eq!(s.country_alpha2(), "US");
    }
}
