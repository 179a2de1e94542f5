//! Exhaustive round-trip and dataset-consistency tests.
//!
//! Every code registered in the reference tables must resolve back to
//! itself through each of its primary identifiers.

use gazetteer::core::country::CountryCode;
use gazetteer::core::region::RegionCode;
use gazetteer::resolve::normalize;

#[test]
fn every_country_round_trips_through_alpha2() {
    for code in CountryCode::all() {
        let alpha2 = code.alpha2().unwrap();
        assert_eq!(CountryCode::by_name(alpha2), code, "alpha2 {alpha2}");
    }
}

#[test]
fn every_country_round_trips_through_alpha3() {
    for code in CountryCode::all() {
        let alpha3 = code.alpha3().unwrap();
        assert_eq!(CountryCode::by_name(alpha3), code, "alpha3 {alpha3}");
    }
}

#[test]
fn every_country_round_trips_through_its_name() {
    for code in CountryCode::all() {
        let name = code.name().unwrap();
        assert_eq!(CountryCode::by_name(name), code, "name {name}");
    }
}

#[test]
fn every_country_round_trips_through_its_numeric_code() {
    for code in CountryCode::all() {
        assert_eq!(CountryCode::by_numeric(i64::from(code.numeric())), code);
    }
}

#[test]
fn every_pseudo_code_round_trips() {
    for code in CountryCode::non_countries() {
        assert_eq!(CountryCode::by_name(code.name().unwrap()), code);
        assert_eq!(CountryCode::by_numeric(i64::from(code.numeric())), code);
    }
}

#[test]
fn every_country_has_a_region_and_flag() {
    for code in CountryCode::all() {
        assert_ne!(code.region(), RegionCode::Unknown, "{code}");
        assert!(code.emoji().is_some(), "{code}");
        assert!(code.domain().is_some(), "{code}");
    }
}

#[test]
fn known_aliases_resolve_regardless_of_spelling() {
    let russia = CountryCode::by_numeric(643);
    for query in ["russia", "RUSSIA", "Russian Federation", "ru", "RUS"] {
        assert_eq!(CountryCode::by_name(query), russia, "{query}");
    }

    let usa = CountryCode::by_name("US");
    for query in ["USA", "United States", "United States of America"] {
        assert_eq!(CountryCode::by_name(query), usa, "{query}");
    }

    let uk = CountryCode::by_name("GB");
    for query in ["UK", "United Kingdom", "Great Britain", "England"] {
        assert_eq!(CountryCode::by_name(query), uk, "{query}");
    }
}

#[test]
fn ivory_coast_scenario() {
    assert_eq!(normalize("Côte d'Ivoire"), "COTEDIVOIRE");
    let code = CountryCode::by_name("Côte d'Ivoire");
    assert_eq!(code.alpha3(), Some("CIV"));
    assert_eq!(CountryCode::by_name("COTEDIVOIRE"), code);
}

#[test]
fn variant_alias_keys_are_stored_normalized() {
    for (alias, code) in gazetteer::data::ALIAS_VARIANTS {
        assert_eq!(&normalize(alias), alias, "alias key {alias:?}");
        assert_eq!(CountryCode::by_name(alias), *code, "alias {alias:?}");
    }
}

#[test]
fn validity_follows_registration() {
    assert!(CountryCode::by_name("RU").is_valid());
    assert!(!CountryCode::UNKNOWN.is_valid());
    assert!(!CountryCode::by_name("not-a-real-country").is_valid());
}

#[test]
fn regions_cover_every_country() {
    for region in RegionCode::all() {
        assert_eq!(RegionCode::by_name(region.name()), *region);
    }
    // Spot-check assignments.
    assert_eq!(CountryCode::by_name("FR").region(), RegionCode::Europe);
    assert_eq!(CountryCode::by_name("JP").region(), RegionCode::Asia);
    assert_eq!(CountryCode::by_name("EG").region(), RegionCode::Africa);
    assert_eq!(CountryCode::by_name("AQ").region(), RegionCode::Antarctica);
}

#[test]
fn serde_round_trips_the_projection() {
    let info = CountryCode::by_name("NZ").info().unwrap();
    let json = serde_json::to_string(&info).unwrap();
    let back: gazetteer::core::country::Country = serde_json::from_str(&json).unwrap();
    assert_eq!(back, info);
}
