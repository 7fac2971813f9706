//! Command-line interface: argument definitions, handlers, and output.

pub mod command;
pub mod output;
pub mod paths;

mod client;
mod geojson;
mod init;
mod plan;
mod solve;
mod warehouse;

use std::process::ExitCode;

use command::{Cli, Commands};

use crate::config::Config;
use crate::error::Result;
use crate::store::sqlite::{create_pool, run_migrations, SqliteSiteStore};

/// Dispatch a parsed command line.
pub async fn run(cli: Cli) -> Result<ExitCode> {
    output::configure(output::OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    let config_path = cli.config.clone().unwrap_or_else(paths::default_config);
    let mut config = Config::load_or_default(&config_path)?;
    match cli.verbose {
        0 => {}
        1 => config.logging.level = "debug".into(),
        _ => config.logging.level = "trace".into(),
    }
    config.init_logging();

    match &cli.command {
        Commands::Init => {
            init::run(&config, &config_path)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Warehouse(command) => {
            warehouse::run(command, &config)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Client(command) => {
            client::run(command, &config)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Solve(args) => solve::run(args, &config).await,
    }
}

/// Open the configured site database, creating it if necessary.
pub(crate) fn open_store(config: &Config) -> Result<SqliteSiteStore> {
    let path = config
        .database
        .path
        .clone()
        .unwrap_or_else(paths::default_database);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = create_pool(&path.display().to_string())?;
    run_migrations(&pool)?;
    Ok(SqliteSiteStore::new(pool))
}
