//! regions command - List the continental regions

use anyhow::Result;

use crate::core::region::RegionCode;
use crate::ui::output::{self, Verbosity};

/// Print one line per region: M.49 numeric code and name.
pub fn regions(json: bool, verbosity: Verbosity) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&RegionCode::all_info())?);
        return Ok(());
    }

    for region in RegionCode::all() {
        output::print(
            format!("{:03}  {}", region.numeric(), region.name()),
            verbosity,
        );
    }
    Ok(())
}
