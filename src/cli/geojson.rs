//! GeoJSON export of a solved plan.
//!
//! Produces a FeatureCollection with one point per site and one LineString
//! per shipment, carrying the vehicle and volume as properties. Route
//! geometry comes from the configured [`RouteProvider`]; the straight-line
//! provider keeps exports working offline.

use std::collections::BTreeMap;

use futures_util::future::try_join_all;
use rust_decimal::prelude::ToPrimitive;
use serde_json::{json, Value};

use crate::domain::{AllocationPlan, Client, GeoPoint, Warehouse, WarehouseId};
use crate::error::{Error, Result};
use crate::routing::RouteProvider;

/// Build the GeoJSON FeatureCollection for a solved plan.
pub(crate) async fn plan_features(
    plan: &AllocationPlan,
    warehouses: &[Warehouse],
    client: &Client,
    router: &dyn RouteProvider,
) -> Result<Value> {
    let by_id: BTreeMap<&WarehouseId, &Warehouse> =
        warehouses.iter().map(|w| (w.id(), w)).collect();

    let mut features = Vec::new();

    for warehouse in warehouses {
        features.push(point_feature(
            warehouse.location(),
            json!({
                "kind": "warehouse",
                "name": warehouse.id().as_str(),
                "supply_kg": warehouse.supply().to_f64().unwrap_or(0.0),
            }),
        ));
    }

    features.push(point_feature(
        client.location(),
        json!({
            "kind": "client",
            "name": client.name(),
            "demand_kg": client.demand().to_f64().unwrap_or(0.0),
        }),
    ));

    let by_id = &by_id;
    let routes = try_join_all(plan.shipments.iter().map(|shipment| {
        let destination = client.location();
        async move {
            let warehouse = by_id.get(&shipment.warehouse).ok_or_else(|| {
                Error::Routing(format!(
                    "no location for warehouse {} in plan",
                    shipment.warehouse
                ))
            })?;
            let polyline = router.route(warehouse.location(), destination).await?;
            Ok::<Value, Error>(json!({
                "type": "Feature",
                "geometry": {
                    "type": "LineString",
                    "coordinates": polyline
                        .iter()
                        .map(|p| vec![p.longitude(), p.latitude()])
                        .collect::<Vec<_>>(),
                },
                "properties": {
                    "kind": "route",
                    "warehouse": shipment.warehouse.as_str(),
                    "vehicle": shipment.vehicle + 1,
                    "volume_kg": shipment.volume.to_f64().unwrap_or(0.0),
                },
            }))
        }
    }))
    .await?;
    features.extend(routes);

    Ok(json!({
        "type": "FeatureCollection",
        "features": features,
    }))
}

fn point_feature(location: GeoPoint, properties: Value) -> Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": [location.longitude(), location.latitude()],
        },
        "properties": properties,
    })
}
