//! Warehouse management commands.

use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::command::{WarehouseAddArgs, WarehouseCommand};
use super::{open_store, output};
use crate::config::Config;
use crate::domain::{GeoPoint, Warehouse, WarehouseId};
use crate::error::Result;
use crate::store::SiteStore;

pub(crate) fn run(command: &WarehouseCommand, config: &Config) -> Result<()> {
    match command {
        WarehouseCommand::Add(args) => add(args, config),
        WarehouseCommand::List => list(config),
        WarehouseCommand::Remove { name } => remove(name, config),
    }
}

fn add(args: &WarehouseAddArgs, config: &Config) -> Result<()> {
    let location = GeoPoint::try_new(args.lat, args.lon)?;
    let warehouse = Warehouse::try_new(WarehouseId::new(&*args.name), location, args.supply)?;

    open_store(config)?.upsert_warehouse(&warehouse)?;
    output::success(format!(
        "stored warehouse {} ({} kg at {:.4}, {:.4})",
        args.name, args.supply, args.lat, args.lon
    ));
    Ok(())
}

#[derive(Tabled)]
struct WarehouseListRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Latitude")]
    latitude: String,
    #[tabled(rename = "Longitude")]
    longitude: String,
    #[tabled(rename = "Supply (kg)")]
    supply: String,
}

fn list(config: &Config) -> Result<()> {
    let warehouses = open_store(config)?.warehouses()?;

    if output::is_json() {
        let entries: Vec<_> = warehouses
            .iter()
            .map(|w| {
                json!({
                    "name": w.id().as_str(),
                    "latitude": w.location().latitude(),
                    "longitude": w.location().longitude(),
                    "supply_kg": w.supply(),
                })
            })
            .collect();
        output::emit_json("warehouses", json!(entries));
        return Ok(());
    }

    if warehouses.is_empty() {
        output::info("no warehouses stored; add one with `haulplan warehouse add`");
        return Ok(());
    }

    let rows: Vec<WarehouseListRow> = warehouses
        .iter()
        .map(|w| WarehouseListRow {
            name: w.id().to_string(),
            latitude: format!("{:.4}", w.location().latitude()),
            longitude: format!("{:.4}", w.location().longitude()),
            supply: format!("{:.0}", w.supply()),
        })
        .collect();
    output::raw(Table::new(rows).with(Style::sharp()).to_string());
    Ok(())
}

fn remove(name: &str, config: &Config) -> Result<()> {
    let removed = open_store(config)?.remove_warehouse(&WarehouseId::new(name))?;
    if removed {
        output::success(format!("removed warehouse {name}"));
    } else {
        output::warn(format!("no warehouse named {name}"));
    }
    Ok(())
}
