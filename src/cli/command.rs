//! Command-line interface definitions.
//!
//! Defines the CLI structure for the haulplan application using `clap`.
//! The CLI supports subcommands for initializing the data directory,
//! managing site records, and solving the transportation problem.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Minimum-cost shipment planning from warehouses to a client
#[derive(Parser, Debug)]
#[command(name = "haulplan")]
#[command(version)]
pub struct Cli {
    /// Path to the config file (default: ~/.haulplan/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the haulplan CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the data directory, a default config, and the site database
    Init,

    /// Manage warehouse records
    #[command(subcommand)]
    Warehouse(WarehouseCommand),

    /// Manage the client record
    #[command(subcommand)]
    Client(ClientCommand),

    /// Solve the transportation problem and print the shipment plan
    Solve(SolveArgs),
}

/// Warehouse management subcommands.
#[derive(Subcommand, Debug)]
pub enum WarehouseCommand {
    /// Add a warehouse, or update one with the same name
    Add(WarehouseAddArgs),

    /// List stored warehouses
    List,

    /// Remove a warehouse
    Remove {
        /// Warehouse name
        name: String,
    },
}

/// Arguments for `warehouse add`.
#[derive(clap::Args, Debug)]
pub struct WarehouseAddArgs {
    /// Warehouse name
    pub name: String,

    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// Available stock in kilograms
    #[arg(long)]
    pub supply: Decimal,
}

/// Client management subcommands.
#[derive(Subcommand, Debug)]
pub enum ClientCommand {
    /// Set the client record (replaces any existing one)
    Set(ClientSetArgs),

    /// Show the client record
    Show,
}

/// Arguments for `client set`.
#[derive(clap::Args, Debug)]
pub struct ClientSetArgs {
    /// Client name
    pub name: String,

    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// Required volume in kilograms
    #[arg(long)]
    pub demand: Decimal,
}

/// Arguments for `solve`.
#[derive(clap::Args, Debug)]
pub struct SolveArgs {
    /// Read sites from a TOML plan file instead of the database
    #[arg(long, value_name = "PATH")]
    pub plan: Option<PathBuf>,

    /// Override fleet capacities (comma-separated kilograms)
    #[arg(long, value_delimiter = ',', value_name = "KG,KG,...")]
    pub fleet: Option<Vec<Decimal>>,

    /// Write the plan with route geometry to a GeoJSON file
    #[arg(long, value_name = "PATH")]
    pub geojson: Option<PathBuf>,
}
