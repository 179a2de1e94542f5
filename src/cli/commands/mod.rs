//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! Each handler validates its arguments, performs the lookup through the
//! library API, and formats output. Handlers return `anyhow::Result`; an
//! unresolved lookup is reported as an error so the binary exits non-zero.

mod completion;
mod list;
mod lookup;
mod regions;

pub use completion::completion;
pub use list::list;
pub use lookup::lookup;
pub use regions::regions;

use anyhow::Result;

use crate::cli::args::Command;
use crate::ui::output::Verbosity;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, verbosity: Verbosity) -> Result<()> {
    match command {
        Command::Lookup { query, json } => lookup(&query, json, verbosity),
        Command::List { region, json } => list(region.as_deref(), json, verbosity),
        Command::Regions { json } => regions(json, verbosity),
        Command::Completion { shell } => completion(shell),
    }
}
