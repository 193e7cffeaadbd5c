//! # Regions Subcommand
//!
//! Catalog inspection: report the catalog size, or test a single key for
//! membership without involving any distributor.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;

use territory_core::{RegionCatalog, RegionKey};

/// Arguments for the regions subcommand.
#[derive(Args, Debug)]
pub struct RegionsArgs {
    /// Path to the region catalog CSV (headerless `country,state,city` rows).
    #[arg(long)]
    pub catalog: PathBuf,

    /// Test this normalized key for catalog membership. Without it, the
    /// subcommand reports the catalog size.
    #[arg(long)]
    pub contains: Option<String>,
}

/// Run the regions subcommand. Exit status follows the membership test:
/// 0 present, 1 absent.
pub fn run(args: &RegionsArgs) -> anyhow::Result<ExitCode> {
    let catalog = RegionCatalog::load_from_path(&args.catalog)?;

    match &args.contains {
        Some(raw) => {
            let key = RegionKey::from_normalized(raw.clone());
            if let Some(region) = catalog.get(&key) {
                println!("{}: {}, {}, {}", key, region.city, region.state, region.country);
                Ok(ExitCode::SUCCESS)
            } else {
                println!("{key}: not in catalog");
                Ok(ExitCode::FAILURE)
            }
        }
        None => {
            println!("{} regions", catalog.len());
            Ok(ExitCode::SUCCESS)
        }
    }
}
