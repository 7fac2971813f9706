//! Route geometry providers.
//!
//! A provider answers one question: given two coordinates, what polyline
//! connects them on a map? Geometry is display data only; transportation
//! costs always come from great-circle distance, so the allocation core
//! never touches these types.

mod osrm;
mod straight_line;

pub use osrm::OsrmRouter;
pub use straight_line::StraightLineRouter;

use async_trait::async_trait;

use crate::domain::GeoPoint;
use crate::error::Result;

/// Supplies a drivable polyline between two coordinates.
#[async_trait]
pub trait RouteProvider: Send + Sync {
    /// Return the provider name for logging and configuration.
    fn name(&self) -> &'static str;

    /// Fetch the polyline from `from` to `to`, endpoints included.
    async fn route(&self, from: GeoPoint, to: GeoPoint) -> Result<Vec<GeoPoint>>;
}
