//! # Check Subcommand
//!
//! Loads the catalog and hierarchy, resolves one permission query, and
//! reports the decision. Exit status: 0 granted, 1 denied.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use serde::Serialize;

use territory_core::{resolve, RegionCatalog, RegionKey};

use crate::config;

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the region catalog CSV (headerless `country,state,city` rows).
    #[arg(long)]
    pub catalog: PathBuf,

    /// Path to the distributor hierarchy YAML.
    #[arg(long)]
    pub distributors: PathBuf,

    /// Name of the distributor to query.
    #[arg(long)]
    pub name: String,

    /// Region key to query, already normalized (uppercase CITY-STATE-COUNTRY).
    #[arg(long)]
    pub region: String,

    /// Emit the decision as JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

/// Machine-readable form of a check result.
#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    distributor: &'a str,
    region: &'a str,
    decision: String,
    granted: bool,
}

/// Run the check subcommand.
pub fn run(args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let catalog = RegionCatalog::load_from_path(&args.catalog)?;
    let registry = config::load_registry(&args.distributors)?;

    let id = registry
        .find(&args.name)
        .ok_or_else(|| anyhow::anyhow!("unknown distributor: {:?}", args.name))?;
    let key = RegionKey::from_normalized(args.region.clone());

    let decision = resolve(&registry, id, &key, &catalog);

    if args.json {
        let report = CheckReport {
            distributor: &args.name,
            region: key.as_str(),
            decision: decision.to_string(),
            granted: decision.is_granted(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{} @ {}: {}", args.name, key, decision);
    }

    Ok(if decision.is_granted() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
