//! Storage- and transport-agnostic allocation logic.
//!
//! Everything in this module operates on plain in-memory values: sites,
//! costs, and the linear program derived from them. Persistence, HTTP, and
//! rendering live behind the seams in [`crate::store`] and
//! [`crate::routing`].

mod allocation;
mod cost;
mod geo;
mod ids;
mod shipment;
mod site;

pub mod constraint;
pub mod error;
pub mod solver;

// Core domain types
pub use geo::{haversine_km, GeoPoint, EARTH_RADIUS_KM};
pub use ids::WarehouseId;
pub use shipment::Shipment;
pub use site::{Client, Warehouse};

// Cost model
pub use cost::unit_costs;

// Allocation engine
pub use allocation::{
    AllocationPlan, Allocator, AllocatorConfig, SolveOutcome, TransportRequest,
};
