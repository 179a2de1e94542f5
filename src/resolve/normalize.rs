//! resolve::normalize
//!
//! Canonical matching-key construction.
//!
//! All free-text resolution funnels through [`normalize`]: the alias table
//! is keyed by normalized strings and every query is normalized before
//! lookup, so two spellings match exactly when their normal forms are
//! byte-equal.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Convert arbitrary text into a canonical matching key.
///
/// The transformation, in order:
/// 1. Unicode NFKD decomposition
/// 2. Drop combining marks (stripping diacritics: "Côte" → "Cote")
/// 3. Drop every non-alphanumeric character (whitespace, punctuation)
/// 4. Uppercase
///
/// Pure and total: empty input produces an empty string, and the function
/// is idempotent (`normalize(normalize(x)) == normalize(x)`).
///
/// # Example
///
/// ```
/// use gazetteer::resolve::normalize;
///
/// assert_eq!(normalize("Côte d'Ivoire"), "COTEDIVOIRE");
/// assert_eq!(normalize("  russia  "), "RUSSIA");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(input: &str) -> String {
    input
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_whitespace() {
        assert_eq!(normalize("United States of America"), "UNITEDSTATESOFAMERICA");
        assert_eq!(normalize("Guinea-Bissau"), "GUINEABISSAU");
        assert_eq!(normalize("St. Kitts & Nevis!"), "STKITTSNEVIS");
    }

    #[test]
    fn strips_diacritics() {
        assert_eq!(normalize("Côte d'Ivoire"), "COTEDIVOIRE");
        assert_eq!(normalize("Curaçao"), "CURACAO");
        assert_eq!(normalize("São Tomé"), "SAOTOME");
        assert_eq!(normalize("Türkiye"), "TURKIYE");
    }

    #[test]
    fn uppercases_after_decomposition() {
        assert_eq!(normalize("österreich"), "OSTERREICH");
        assert_eq!(normalize("reykjavík"), "REYKJAVIK");
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(normalize("area 51"), "AREA51");
    }

    #[test]
    fn empty_and_symbol_only_input_yield_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  ...  "), "");
    }

    #[test]
    fn idempotent_on_tricky_inputs() {
        for s in ["Côte d'Ivoire", "ß-test", "ǅungla", "ﬁnland", "½"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }
}
