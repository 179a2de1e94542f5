//! Entry point for the `gaz` binary.

use gazetteer::ui::output;

fn main() {
    if let Err(err) = gazetteer::cli::run() {
        output::error(format!("{err:#}"));
        std::process::exit(1);
    }
}
