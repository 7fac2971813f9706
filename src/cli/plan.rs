//! TOML plan-file input.
//!
//! A plan file carries a full solve in one document: the client, the
//! warehouses, and optionally a fleet override. It is the database-free
//! path through `haulplan solve --plan`.

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{Client, GeoPoint, Warehouse, WarehouseId};
use crate::error::{ConfigError, Result};

/// A parsed plan file.
#[derive(Debug, Deserialize)]
pub struct PlanFile {
    pub client: PlanClient,
    pub warehouses: Vec<PlanWarehouse>,
    /// Optional fleet override; falls back to the configured fleet.
    #[serde(default)]
    pub fleet: Option<Vec<Decimal>>,
}

/// Client section of a plan file.
#[derive(Debug, Deserialize)]
pub struct PlanClient {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Required volume in kilograms.
    pub demand: Decimal,
}

/// One warehouse entry of a plan file.
#[derive(Debug, Deserialize)]
pub struct PlanWarehouse {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Available stock in kilograms.
    pub supply: Decimal,
}

impl PlanFile {
    /// Read and parse a plan file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let plan: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;
        Ok(plan)
    }

    /// Validate and convert into domain site records.
    pub fn sites(&self) -> Result<(Vec<Warehouse>, Client)> {
        let warehouses = self
            .warehouses
            .iter()
            .map(|w| {
                let location = GeoPoint::try_new(w.latitude, w.longitude)?;
                Warehouse::try_new(WarehouseId::new(&*w.name), location, w.supply)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let location = GeoPoint::try_new(self.client.latitude, self.client.longitude)?;
        let client = Client::try_new(&*self.client.name, location, self.client.demand)?;

        Ok((warehouses, client))
    }
}
