//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::Serialize;

/// Warehouse identifier - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors. Ordering is derived so that maps keyed by
/// warehouse iterate deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct WarehouseId(String);

impl WarehouseId {
    /// Create a new WarehouseId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the warehouse ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WarehouseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for WarehouseId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for WarehouseId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warehouse_id_new_and_as_str() {
        let id = WarehouseId::new("central");
        assert_eq!(id.as_str(), "central");
    }

    #[test]
    fn warehouse_id_from_string() {
        let id = WarehouseId::from("north".to_string());
        assert_eq!(id.as_str(), "north");
    }

    #[test]
    fn warehouse_id_display() {
        let id = WarehouseId::new("south");
        assert_eq!(format!("{}", id), "south");
    }

    #[test]
    fn warehouse_id_orders_lexicographically() {
        let a = WarehouseId::new("alpha");
        let b = WarehouseId::new("beta");
        assert!(a < b);
    }
}
