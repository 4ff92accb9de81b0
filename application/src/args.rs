//! [`Args`] definitions.

use clap::Parser;
use service::domain::{skip, CategoryFilter};

/// Skip size selector of the waste collection booking flow.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Category to narrow the rendered catalog to.
    #[arg(long, default_value_t)]
    pub category: CategoryFilter,

    /// ID of the skip to select.
    #[arg(long)]
    pub select: Option<skip::Id>,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}
