//! The `init` command: set up the data directory.

use std::path::Path;

use super::{open_store, output, paths};
use crate::config::Config;
use crate::error::Result;

const CONFIG_TEMPLATE: &str = r#"# haulplan configuration

[logging]
level = "info"
format = "pretty"

[cost]
# Monetary cost per kilometer per kilogram.
rate_per_km = 100

[fleet]
# Vehicle class capacities in kilograms. Each class caps every warehouse
# independently.
capacities = [1500, 10000, 20000, 45000, 20000, 20000, 20000, 20000, 20000, 20000, 20000, 20000]

[solver]
# Wall-clock budget per solve in seconds.
time_limit_secs = 30

[routing]
# "straight-line" needs no network; "osrm" talks to base_url.
# API keys come from the HAULPLAN_ROUTING_API_KEY environment variable.
provider = "straight-line"
base_url = "https://router.project-osrm.org"
"#;

pub(crate) fn run(config: &Config, config_path: &Path) -> Result<()> {
    paths::ensure_home_dir()?;

    if config_path.exists() {
        output::info(format!("config already at {}", config_path.display()));
    } else {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, CONFIG_TEMPLATE)?;
        output::success(format!("wrote config to {}", config_path.display()));
    }

    // Opening the store creates the database and applies migrations.
    open_store(config)?;
    output::success("site database ready");
    Ok(())
}
