//! Domain validation errors for solve inputs.
//!
//! These errors are raised by `try_new` constructors and by
//! [`crate::domain::TransportRequest::validate`] before any linear program
//! is built. Inputs that fail here never reach the solver.

use rust_decimal::Decimal;
use thiserror::Error;

use super::ids::WarehouseId;

/// Errors that occur when solve-input invariants are violated.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// A solve needs at least one supply source.
    #[error("supply set cannot be empty")]
    EmptySupply,

    /// Warehouse stock must be non-negative.
    #[error("supply for {warehouse} must be non-negative, got {supply}")]
    NegativeSupply {
        warehouse: WarehouseId,
        supply: Decimal,
    },

    /// Client demand must be non-negative.
    #[error("demand must be non-negative, got {demand}")]
    NegativeDemand { demand: Decimal },

    /// Vehicle-class capacities must be non-negative.
    #[error("capacity of vehicle class {index} must be non-negative, got {capacity}")]
    NegativeCapacity { index: usize, capacity: Decimal },

    /// Every warehouse in the supply set needs a unit cost.
    #[error("no unit cost for warehouse {warehouse}")]
    MissingCost { warehouse: WarehouseId },

    /// Unit costs must be non-negative.
    #[error("unit cost for {warehouse} must be non-negative, got {cost}")]
    NegativeCost {
        warehouse: WarehouseId,
        cost: Decimal,
    },

    /// Latitude outside [-90, 90] or not finite.
    #[error("latitude must be a finite value within [-90, 90], got {latitude}")]
    InvalidLatitude { latitude: f64 },

    /// Longitude outside [-180, 180] or not finite.
    #[error("longitude must be a finite value within [-180, 180], got {longitude}")]
    InvalidLongitude { longitude: f64 },

    /// A floating-point quantity could not be represented as a decimal.
    #[error("quantity {value} is not representable as a decimal")]
    UnrepresentableQuantity { value: f64 },
}
