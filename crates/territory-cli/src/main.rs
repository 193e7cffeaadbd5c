//! # territory CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::process::ExitCode;

use clap::Parser;

/// Distributor region permission toolchain.
///
/// Resolves whether a distributor is authorized to operate in a geographic
/// region, given a region catalog and a distributor hierarchy with
/// inherited inclusion/exclusion rules.
#[derive(Parser, Debug)]
#[command(name = "territory", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Resolve one permission query.
    Check(territory_cli::check::CheckArgs),
    /// Inspect the region catalog.
    Regions(territory_cli::regions::RegionsArgs),
}

fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => territory_cli::check::run(&args),
        Commands::Regions(args) => territory_cli::regions::run(&args),
    }
}
