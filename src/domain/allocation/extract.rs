//! Shipment extraction from solved variable values.

use rust_decimal::Decimal;

use super::builder::VariableLayout;
use crate::domain::shipment::Shipment;

/// Turn solved variable values into shipments.
///
/// Values at or below `zero_tolerance` are solver noise and are dropped
/// rather than reported as near-zero shipments. The output follows the
/// layout order (warehouse ascending, vehicle class ascending), so
/// identical inputs produce identically ordered plans.
pub(crate) fn extract(
    layout: &VariableLayout,
    values: &[Decimal],
    zero_tolerance: Decimal,
) -> Vec<Shipment> {
    layout
        .pairs()
        .iter()
        .zip(values.iter())
        .filter(|(_, value)| **value > zero_tolerance)
        .map(|((warehouse, class), value)| Shipment::new(warehouse.clone(), *class, *value))
        .collect()
}
