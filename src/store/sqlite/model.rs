//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::{clients, warehouses};

/// Database row for a warehouse (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = warehouses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WarehouseRow {
    pub id: Option<i32>,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub supply_kg: f64,
    pub updated_at: String,
}

/// Database row for a warehouse (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = warehouses)]
pub struct NewWarehouseRow {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub supply_kg: f64,
    pub updated_at: String,
}

/// Database row for the client (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = clients)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ClientRow {
    pub id: Option<i32>,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub demand_kg: f64,
    pub updated_at: String,
}

/// Database row for the client (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = clients)]
pub struct NewClientRow {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub demand_kg: f64,
    pub updated_at: String,
}
