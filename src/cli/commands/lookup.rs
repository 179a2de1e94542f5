//! lookup command - Resolve a country from free text or a numeric code

use anyhow::{bail, Result};

use crate::core::country::CountryCode;
use crate::ui::output::{self, Verbosity};

/// Resolve `query` and print the country's record.
///
/// Numeric queries take the numeric-lookup path; everything else goes
/// through the alias resolver.
pub fn lookup(query: &str, json: bool, verbosity: Verbosity) -> Result<()> {
    let code = resolve(query);
    let Some(info) = code.info() else {
        bail!("unknown country or territory: {query:?}");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    output::print(format!("Name:     {}", info.name), verbosity);
    output::print(format!("Numeric:  {:03}", info.code.numeric()), verbosity);
    output::print(format!("Alpha-2:  {}", info.alpha2), verbosity);
    output::print(format!("Alpha-3:  {}", info.alpha3), verbosity);
    if let Some(emoji) = &info.emoji {
        output::print(format!("Flag:     {emoji}"), verbosity);
    }
    output::print(format!("Region:   {}", info.region), verbosity);
    if !info.capital.is_empty() {
        output::print(format!("Capital:  {}", info.capital), verbosity);
    }
    if info.currency.is_valid() {
        let name = info.currency.name().unwrap_or_default();
        output::print(format!("Currency: {} ({name})", info.currency), verbosity);
    }
    if !info.call_codes.is_empty() {
        let codes: Vec<String> = info.call_codes.iter().map(|c| c.to_string()).collect();
        output::print(format!("Calling:  {}", codes.join(", ")), verbosity);
    }
    if let Some(domain) = &info.domain {
        output::print(format!("Domain:   {domain}"), verbosity);
    }
    if !info.subdivisions.is_empty() {
        output::print(
            format!("Subdivisions: {}", info.subdivisions.len()),
            verbosity,
        );
    }
    Ok(())
}

fn resolve(query: &str) -> CountryCode {
    if let Ok(numeric) = query.trim().parse::<i64>() {
        return CountryCode::by_numeric(numeric);
    }
    CountryCode::by_name(query)
}
