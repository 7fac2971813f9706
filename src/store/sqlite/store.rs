//! SQLite site store implementation.

use chrono::Utc;
use diesel::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::connection::DbPool;
use super::model::{ClientRow, NewClientRow, NewWarehouseRow, WarehouseRow};
use super::schema::{clients, warehouses};
use crate::domain::error::DomainError;
use crate::domain::{Client, GeoPoint, Warehouse, WarehouseId};
use crate::error::{Error, Result};
use crate::store::SiteStore;

/// SQLite-backed store for warehouses and the client record.
pub struct SqliteSiteStore {
    pool: DbPool,
}

impl SqliteSiteStore {
    /// Create a store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<diesel::r2d2::PooledConnection<diesel::r2d2::ConnectionManager<SqliteConnection>>> {
        self.pool.get().map_err(|e| Error::Connection(e.to_string()))
    }

    fn warehouse_to_row(warehouse: &Warehouse) -> NewWarehouseRow {
        NewWarehouseRow {
            name: warehouse.id().as_str().to_string(),
            latitude: warehouse.location().latitude(),
            longitude: warehouse.location().longitude(),
            supply_kg: warehouse.supply().to_f64().unwrap_or(0.0),
            updated_at: Utc::now().to_rfc3339(),
        }
    }

    fn warehouse_from_row(row: WarehouseRow) -> Result<Warehouse> {
        let location = GeoPoint::try_new(row.latitude, row.longitude)?;
        let supply = decimal_from_db(row.supply_kg)?;
        Ok(Warehouse::try_new(
            WarehouseId::new(row.name),
            location,
            supply,
        )?)
    }

    fn client_to_row(client: &Client) -> NewClientRow {
        NewClientRow {
            name: client.name().to_string(),
            latitude: client.location().latitude(),
            longitude: client.location().longitude(),
            demand_kg: client.demand().to_f64().unwrap_or(0.0),
            updated_at: Utc::now().to_rfc3339(),
        }
    }

    fn client_from_row(row: ClientRow) -> Result<Client> {
        let location = GeoPoint::try_new(row.latitude, row.longitude)?;
        let demand = decimal_from_db(row.demand_kg)?;
        Ok(Client::try_new(row.name, location, demand)?)
    }
}

fn decimal_from_db(value: f64) -> Result<Decimal> {
    Decimal::try_from(value)
        .map_err(|_| Error::Domain(DomainError::UnrepresentableQuantity { value }))
}

impl SiteStore for SqliteSiteStore {
    fn upsert_warehouse(&self, warehouse: &Warehouse) -> Result<()> {
        let mut conn = self.conn()?;
        let row = Self::warehouse_to_row(warehouse);

        diesel::insert_into(warehouses::table)
            .values(&row)
            .on_conflict(warehouses::name)
            .do_update()
            .set((
                warehouses::latitude.eq(row.latitude),
                warehouses::longitude.eq(row.longitude),
                warehouses::supply_kg.eq(row.supply_kg),
                warehouses::updated_at.eq(row.updated_at.clone()),
            ))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(())
    }

    fn remove_warehouse(&self, id: &WarehouseId) -> Result<bool> {
        let mut conn = self.conn()?;
        let deleted = diesel::delete(warehouses::table.filter(warehouses::name.eq(id.as_str())))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(deleted > 0)
    }

    fn warehouses(&self) -> Result<Vec<Warehouse>> {
        let mut conn = self.conn()?;
        let rows: Vec<WarehouseRow> = warehouses::table
            .order(warehouses::name.asc())
            .select(WarehouseRow::as_select())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        rows.into_iter().map(Self::warehouse_from_row).collect()
    }

    fn set_client(&self, client: &Client) -> Result<()> {
        let mut conn = self.conn()?;
        let row = Self::client_to_row(client);

        // Single demand point per solve: the client table holds one row.
        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::delete(clients::table).execute(conn)?;
            diesel::insert_into(clients::table).values(&row).execute(conn)?;
            Ok(())
        })
        .map_err(|e| Error::Database(e.to_string()))?;
        Ok(())
    }

    fn client(&self) -> Result<Option<Client>> {
        let mut conn = self.conn()?;
        let row: Option<ClientRow> = clients::table
            .order(clients::id.asc())
            .select(ClientRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;

        row.map(Self::client_from_row).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::super::connection::{create_pool, run_migrations};
    use super::*;
    use rust_decimal_macros::dec;

    fn memory_store() -> SqliteSiteStore {
        let pool = create_pool(":memory:").unwrap();
        run_migrations(&pool).unwrap();
        SqliteSiteStore::new(pool)
    }

    fn warehouse(name: &str, supply: Decimal) -> Warehouse {
        Warehouse::try_new(
            WarehouseId::new(name),
            GeoPoint::try_new(55.75, 37.61).unwrap(),
            supply,
        )
        .unwrap()
    }

    #[test]
    fn upsert_and_list_roundtrip() {
        let store = memory_store();
        store.upsert_warehouse(&warehouse("north", dec!(800))).unwrap();
        store.upsert_warehouse(&warehouse("south", dec!(200))).unwrap();

        let listed = store.warehouses().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id().as_str(), "north");
        assert_eq!(listed[0].supply(), dec!(800));
    }

    #[test]
    fn upsert_replaces_existing_row() {
        let store = memory_store();
        store.upsert_warehouse(&warehouse("north", dec!(800))).unwrap();
        store.upsert_warehouse(&warehouse("north", dec!(450))).unwrap();

        let listed = store.warehouses().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].supply(), dec!(450));
    }

    #[test]
    fn remove_reports_existence() {
        let store = memory_store();
        store.upsert_warehouse(&warehouse("north", dec!(1))).unwrap();

        assert!(store.remove_warehouse(&WarehouseId::new("north")).unwrap());
        assert!(!store.remove_warehouse(&WarehouseId::new("north")).unwrap());
    }

    #[test]
    fn client_starts_absent_and_is_replaced_on_set() {
        let store = memory_store();
        assert!(store.client().unwrap().is_none());

        let first = Client::try_new(
            "acme",
            GeoPoint::try_new(59.93, 30.33).unwrap(),
            dec!(1200),
        )
        .unwrap();
        let second = Client::try_new(
            "globex",
            GeoPoint::try_new(48.85, 2.35).unwrap(),
            dec!(300),
        )
        .unwrap();

        store.set_client(&first).unwrap();
        store.set_client(&second).unwrap();

        let loaded = store.client().unwrap().unwrap();
        assert_eq!(loaded.name(), "globex");
        assert_eq!(loaded.demand(), dec!(300));
    }
}
