//! Property-based tests for the resolver core.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use proptest::prelude::*;

use gazetteer::core::country::CountryCode;
use gazetteer::core::region::RegionCode;
use gazetteer::resolve::normalize;

proptest! {
    /// Normalization is idempotent for arbitrary input.
    #[test]
    fn normalize_is_idempotent(input in ".*") {
        let once = normalize(&input);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Normalized output contains only uppercase alphanumerics.
    #[test]
    fn normalize_output_is_canonical(input in ".*") {
        let out = normalize(&input);
        prop_assert!(out.chars().all(|c| c.is_alphanumeric() && !c.is_lowercase()));
    }

    /// Resolution is total: any input yields a value without panicking,
    /// and a miss is exactly the sentinel.
    #[test]
    fn by_name_is_total(input in ".*") {
        let code = CountryCode::by_name(&input);
        prop_assert!(code.is_valid() || code == CountryCode::UNKNOWN);
    }

    /// Numeric resolution never yields an unregistered code.
    #[test]
    fn by_numeric_is_total(n in any::<i64>()) {
        let code = CountryCode::by_numeric(n);
        prop_assert!(code.is_valid() || code == CountryCode::UNKNOWN);
    }

    /// Region resolution is total as well.
    #[test]
    fn region_by_name_is_total(input in ".*") {
        let region = RegionCode::by_name(&input);
        prop_assert!(region.is_valid() || region == RegionCode::Unknown);
    }

    /// Resolution is insensitive to case and interleaved punctuation:
    /// decorating a registered name never changes the result.
    #[test]
    fn by_name_ignores_case_and_punctuation(
        index in 0..CountryCode::total(),
        decorate in prop::bool::ANY,
    ) {
        let code = CountryCode::all().nth(index).unwrap();
        let name = code.name().unwrap();
        let query = if decorate {
            format!("  {} !", name.to_lowercase())
        } else {
            name.to_uppercase()
        };
        prop_assert_eq!(CountryCode::by_name(&query), code);
    }
}
