//! Client management commands.

use serde_json::json;

use super::command::{ClientCommand, ClientSetArgs};
use super::{open_store, output};
use crate::config::Config;
use crate::domain::{Client, GeoPoint};
use crate::error::Result;
use crate::store::SiteStore;

pub(crate) fn run(command: &ClientCommand, config: &Config) -> Result<()> {
    match command {
        ClientCommand::Set(args) => set(args, config),
        ClientCommand::Show => show(config),
    }
}

fn set(args: &ClientSetArgs, config: &Config) -> Result<()> {
    let location = GeoPoint::try_new(args.lat, args.lon)?;
    let client = Client::try_new(&*args.name, location, args.demand)?;

    open_store(config)?.set_client(&client)?;
    output::success(format!(
        "set client {} ({} kg at {:.4}, {:.4})",
        args.name, args.demand, args.lat, args.lon
    ));
    Ok(())
}

fn show(config: &Config) -> Result<()> {
    match open_store(config)?.client()? {
        Some(client) => {
            if output::is_json() {
                output::emit_json(
                    "client",
                    json!({
                        "name": client.name(),
                        "latitude": client.location().latitude(),
                        "longitude": client.location().longitude(),
                        "demand_kg": client.demand(),
                    }),
                );
            } else {
                output::raw(format!(
                    "{}: {} kg at {:.4}, {:.4}",
                    client.name(),
                    client.demand(),
                    client.location().latitude(),
                    client.location().longitude()
                ));
            }
        }
        None => output::info("no client configured; set one with `haulplan client set`"),
    }
    Ok(())
}
