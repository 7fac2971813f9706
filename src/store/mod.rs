//! Persistence for site records.
//!
//! The allocation core consumes plain `Warehouse`/`Client` values; this
//! module owns where they live between solves. [`SiteStore`] is the seam,
//! [`sqlite::SqliteSiteStore`] the shipped implementation.

pub mod sqlite;

use crate::domain::{Client, Warehouse, WarehouseId};
use crate::error::Result;

/// Storage operations for warehouses and the client record.
///
/// There is at most one client: a solve has a single demand point, and the
/// store mirrors that.
pub trait SiteStore: Send + Sync {
    /// Insert a warehouse, replacing an existing one with the same id.
    fn upsert_warehouse(&self, warehouse: &Warehouse) -> Result<()>;

    /// Delete a warehouse. Returns whether one existed.
    fn remove_warehouse(&self, id: &WarehouseId) -> Result<bool>;

    /// List all warehouses ordered by id.
    fn warehouses(&self) -> Result<Vec<Warehouse>>;

    /// Replace the client record.
    fn set_client(&self, client: &Client) -> Result<()>;

    /// Get the client record, if one has been configured.
    fn client(&self) -> Result<Option<Client>>;
}
