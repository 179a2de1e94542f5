//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand, ValueEnum};

/// Gazetteer - country reference data lookups from the command line
#[derive(Parser, Debug)]
#[command(name = "gaz")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a country from free text or a numeric code
    #[command(
        name = "lookup",
        long_about = "Resolve a country from free text or a numeric code.\n\n\
            The query may be an Alpha-2 or Alpha-3 code, an ISO 3166-1 numeric \
            code, an English name, or a known variant spelling. Matching is \
            case-insensitive and ignores punctuation and diacritics.",
        after_help = "\
EXAMPLES:
    gaz lookup ru
    gaz lookup 'Russian Federation'
    gaz lookup 643
    gaz lookup --json \"Côte d'Ivoire\""
    )]
    Lookup {
        /// Country name, code, or numeric identifier
        query: String,

        /// Emit the full record as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all countries
    List {
        /// Only countries in this region (name or abbreviation, e.g. "EU")
        #[arg(long, value_name = "REGION")]
        region: Option<String>,

        /// Emit full records as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the continental regions
    Regions {
        /// Emit regions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
