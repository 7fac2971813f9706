//! Supply and demand site records.
//!
//! A [`Warehouse`] is a supply source with finite stock; a [`Client`] is the
//! single demand sink of a solve. Both are immutable snapshots assembled
//! fresh for each solve request, whatever storage they came from.

use rust_decimal::Decimal;

use super::error::DomainError;
use super::geo::GeoPoint;
use super::ids::WarehouseId;

/// A supply source with a location and available stock in kilograms.
#[derive(Debug, Clone, PartialEq)]
pub struct Warehouse {
    id: WarehouseId,
    location: GeoPoint,
    supply: Decimal,
}

impl Warehouse {
    /// Create a warehouse, rejecting negative stock.
    pub fn try_new(
        id: WarehouseId,
        location: GeoPoint,
        supply: Decimal,
    ) -> Result<Self, DomainError> {
        if supply.is_sign_negative() {
            return Err(DomainError::NegativeSupply {
                warehouse: id,
                supply,
            });
        }
        Ok(Self {
            id,
            location,
            supply,
        })
    }

    pub fn id(&self) -> &WarehouseId {
        &self.id
    }

    pub fn location(&self) -> GeoPoint {
        self.location
    }

    /// Available stock in kilograms.
    pub fn supply(&self) -> Decimal {
        self.supply
    }
}

/// The demand sink of a solve: one client with a fixed requirement.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    name: String,
    location: GeoPoint,
    demand: Decimal,
}

impl Client {
    /// Create a client, rejecting negative demand.
    pub fn try_new(
        name: impl Into<String>,
        location: GeoPoint,
        demand: Decimal,
    ) -> Result<Self, DomainError> {
        if demand.is_sign_negative() {
            return Err(DomainError::NegativeDemand { demand });
        }
        Ok(Self {
            name: name.into(),
            location,
            demand,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> GeoPoint {
        self.location
    }

    /// Required volume in kilograms.
    pub fn demand(&self) -> Decimal {
        self.demand
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn point() -> GeoPoint {
        GeoPoint::try_new(50.0, 30.0).unwrap()
    }

    #[test]
    fn warehouse_accepts_zero_supply() {
        let w = Warehouse::try_new(WarehouseId::new("w"), point(), Decimal::ZERO).unwrap();
        assert_eq!(w.supply(), Decimal::ZERO);
    }

    #[test]
    fn warehouse_rejects_negative_supply() {
        let result = Warehouse::try_new(WarehouseId::new("w"), point(), dec!(-1));
        assert!(matches!(
            result,
            Err(DomainError::NegativeSupply { .. })
        ));
    }

    #[test]
    fn client_rejects_negative_demand() {
        let result = Client::try_new("acme", point(), dec!(-0.5));
        assert!(matches!(result, Err(DomainError::NegativeDemand { .. })));
    }

    #[test]
    fn client_keeps_name_and_demand() {
        let c = Client::try_new("acme", point(), dec!(120.5)).unwrap();
        assert_eq!(c.name(), "acme");
        assert_eq!(c.demand(), dec!(120.5));
    }
}
