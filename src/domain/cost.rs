//! Per-unit transportation cost derived from great-circle distance.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::error::DomainError;
use super::geo::{haversine_km, GeoPoint};
use super::ids::WarehouseId;
use super::site::Warehouse;

/// Build the unit-cost table for a set of warehouses and one destination.
///
/// The cost of moving one kilogram from a warehouse is the great-circle
/// distance to the destination in kilometers multiplied by `rate_per_km`.
/// The cost depends only on the warehouse, never on the vehicle class.
/// A warehouse co-located with the destination gets a zero cost; that is a
/// valid input, not an error.
pub fn unit_costs(
    warehouses: &[Warehouse],
    destination: GeoPoint,
    rate_per_km: Decimal,
) -> Result<BTreeMap<WarehouseId, Decimal>, DomainError> {
    let mut costs = BTreeMap::new();
    for warehouse in warehouses {
        let km = haversine_km(warehouse.location(), destination);
        let km = Decimal::try_from(km)
            .map_err(|_| DomainError::UnrepresentableQuantity { value: km })?;
        costs.insert(warehouse.id().clone(), km * rate_per_km);
    }
    Ok(costs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::WarehouseId;
    use rust_decimal_macros::dec;

    fn warehouse(name: &str, lat: f64, lon: f64) -> Warehouse {
        Warehouse::try_new(
            WarehouseId::new(name),
            GeoPoint::try_new(lat, lon).unwrap(),
            dec!(1000),
        )
        .unwrap()
    }

    #[test]
    fn co_located_warehouse_costs_zero() {
        let destination = GeoPoint::try_new(52.52, 13.405).unwrap();
        let costs = unit_costs(&[warehouse("berlin", 52.52, 13.405)], destination, dec!(100))
            .unwrap();
        assert_eq!(costs[&WarehouseId::new("berlin")], Decimal::ZERO);
    }

    #[test]
    fn cost_scales_with_rate() {
        let destination = GeoPoint::try_new(0.0, 0.0).unwrap();
        let warehouses = [warehouse("w", 1.0, 0.0)];

        let at_one = unit_costs(&warehouses, destination, dec!(1)).unwrap();
        let at_hundred = unit_costs(&warehouses, destination, dec!(100)).unwrap();

        let id = WarehouseId::new("w");
        assert_eq!(at_one[&id] * dec!(100), at_hundred[&id]);
    }

    #[test]
    fn farther_warehouse_costs_more() {
        let destination = GeoPoint::try_new(0.0, 0.0).unwrap();
        let costs = unit_costs(
            &[warehouse("near", 1.0, 0.0), warehouse("far", 5.0, 0.0)],
            destination,
            dec!(100),
        )
        .unwrap();
        assert!(costs[&WarehouseId::new("far")] > costs[&WarehouseId::new("near")]);
    }
}
