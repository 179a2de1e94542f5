//! list command - Enumerate countries, optionally filtered by region

use anyhow::{bail, Result};

use crate::core::country::CountryCode;
use crate::core::region::RegionCode;
use crate::ui::output::{self, Verbosity};

/// Print one line per country: numeric, Alpha-2, Alpha-3, name.
pub fn list(region: Option<&str>, json: bool, verbosity: Verbosity) -> Result<()> {
    let filter = match region {
        Some(text) => {
            let region = RegionCode::by_name(text);
            if !region.is_valid() {
                bail!("unknown region: {text:?}");
            }
            Some(region)
        }
        None => None,
    };

    let codes: Vec<CountryCode> = CountryCode::all()
        .filter(|code| filter.map_or(true, |region| code.region() == region))
        .collect();

    if json {
        let infos: Vec<_> = codes.iter().filter_map(|c| c.info()).collect();
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    for code in codes {
        if let Some(record) = code.record() {
            output::print(
                format!(
                    "{:03}  {}  {}  {}",
                    record.code.numeric(),
                    record.alpha2,
                    record.alpha3,
                    record.name
                ),
                verbosity,
            );
        }
    }
    Ok(())
}
