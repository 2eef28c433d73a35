use std::path::PathBuf;

use bakery_sales::data::cache::DEFAULT_SOURCE;
use clap::Parser;

/// Bakery sales dashboard.
#[derive(Debug, Parser)]
#[command(name = "bakery-sales", version, about)]
pub struct Cli {
    /// Point-of-sale CSV export to load
    #[arg(value_name = "CSV", env = "BAKERY_SALES_CSV", default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,
}
