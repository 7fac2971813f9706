//! Shipment result records.

use rust_decimal::Decimal;
use serde::Serialize;

use super::ids::WarehouseId;

/// One allocated shipment: a volume carried from a warehouse by one
/// vehicle class.
///
/// `vehicle` is the zero-based index into the fleet's capacity list the
/// solve was run with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shipment {
    pub warehouse: WarehouseId,
    pub vehicle: usize,
    pub volume: Decimal,
}

impl Shipment {
    pub fn new(warehouse: WarehouseId, vehicle: usize, volume: Decimal) -> Self {
        Self {
            warehouse,
            vehicle,
            volume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn serializes_with_flat_fields() {
        let s = Shipment::new(WarehouseId::new("north"), 2, dec!(450));
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["warehouse"], "north");
        assert_eq!(json["vehicle"], 2);
        assert_eq!(json["volume"], "450");
    }
}
