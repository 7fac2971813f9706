//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with environment variable
//! overrides for sensitive values like `HAULPLAN_ROUTING_API_KEY`. Every
//! section has working defaults so the CLI runs without a config file.

mod logging;

pub use logging::LoggingConfig;

use std::path::{Path, PathBuf};
use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;
use url::Url;

use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub cost: CostConfig,
    #[serde(default)]
    pub fleet: FleetConfig,
    #[serde(default)]
    pub solver: SolverConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Cost model settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CostConfig {
    /// Monetary cost per kilometer per kilogram.
    #[serde(default = "default_rate_per_km")]
    pub rate_per_km: Decimal,
}

fn default_rate_per_km() -> Decimal {
    Decimal::ONE_HUNDRED
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            rate_per_km: default_rate_per_km(),
        }
    }
}

/// Vehicle fleet settings.
///
/// Each capacity describes a vehicle class in kilograms. A class caps each
/// warehouse's use of it independently; the list is not a count of
/// physical trucks shared across warehouses.
#[derive(Debug, Clone, Deserialize)]
pub struct FleetConfig {
    #[serde(default = "default_capacities")]
    pub capacities: Vec<Decimal>,
}

fn default_capacities() -> Vec<Decimal> {
    [
        1_500, 10_000, 20_000, 45_000, 20_000, 20_000, 20_000, 20_000, 20_000, 20_000, 20_000,
        20_000,
    ]
    .into_iter()
    .map(Decimal::from)
    .collect()
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            capacities: default_capacities(),
        }
    }
}

/// Solver settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SolverConfig {
    /// Wall-clock budget per solve in seconds; absent means unlimited.
    #[serde(default = "default_time_limit_secs")]
    pub time_limit_secs: Option<u64>,

    /// Values at or below this threshold are treated as exactly zero.
    #[serde(default = "default_zero_tolerance")]
    pub zero_tolerance: Decimal,
}

fn default_time_limit_secs() -> Option<u64> {
    Some(30)
}

fn default_zero_tolerance() -> Decimal {
    // 1e-9
    Decimal::new(1, 9)
}

impl SolverConfig {
    /// The configured budget as a `Duration`, if any.
    #[must_use]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_secs.map(Duration::from_secs)
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: default_time_limit_secs(),
            zero_tolerance: default_zero_tolerance(),
        }
    }
}

/// Database settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseConfig {
    /// Path of the SQLite database; defaults to `~/.haulplan/haulplan.db`.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Route geometry settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutingConfig {
    /// Which provider draws route polylines for exports.
    #[serde(default)]
    pub provider: RoutingProvider,

    /// Base URL of the OSRM-compatible service.
    #[serde(default = "default_routing_base_url")]
    pub base_url: String,

    /// API key for the routing service. Loaded from the
    /// `HAULPLAN_ROUTING_API_KEY` environment variable, never from the
    /// config file.
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_routing_base_url() -> String {
    "https://router.project-osrm.org".into()
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            provider: RoutingProvider::default(),
            base_url: default_routing_base_url(),
            api_key: None,
        }
    }
}

/// Supported route geometry providers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoutingProvider {
    /// Straight segments between endpoints; needs no network access.
    #[default]
    StraightLine,
    /// OSRM-compatible HTTP routing service.
    Osrm,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let mut config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;

        // API key comes from the environment only.
        config.routing.api_key = std::env::var("HAULPLAN_ROUTING_API_KEY").ok();

        config.validate()?;

        Ok(config)
    }

    /// Load the file if it exists, otherwise fall back to defaults.
    ///
    /// The default configuration still honors the routing API key from the
    /// environment.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            let mut config = Self::default();
            config.routing.api_key = std::env::var("HAULPLAN_ROUTING_API_KEY").ok();
            Ok(config)
        }
    }

    fn validate(&self) -> Result<()> {
        if self.cost.rate_per_km.is_sign_negative() {
            return Err(ConfigError::InvalidValue {
                field: "cost.rate_per_km",
                reason: format!("must be non-negative, got {}", self.cost.rate_per_km),
            }
            .into());
        }
        if let Some(capacity) = self
            .fleet
            .capacities
            .iter()
            .find(|c| c.is_sign_negative())
        {
            return Err(ConfigError::InvalidValue {
                field: "fleet.capacities",
                reason: format!("must be non-negative, got {capacity}"),
            }
            .into());
        }
        if self.solver.zero_tolerance.is_sign_negative() {
            return Err(ConfigError::InvalidValue {
                field: "solver.zero_tolerance",
                reason: format!("must be non-negative, got {}", self.solver.zero_tolerance),
            }
            .into());
        }
        if Url::parse(&self.routing.base_url).is_err() {
            return Err(ConfigError::InvalidValue {
                field: "routing.base_url",
                reason: format!("not a valid URL: {}", self.routing.base_url),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
