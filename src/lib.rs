//! Haulplan - minimum-cost shipment planning.
//!
//! This crate allocates shipments from a set of warehouses to a single
//! client using a fleet of vehicles with heterogeneous capacities,
//! minimizing total transportation cost. The allocation is a linear
//! program solved with HiGHS via `good_lp`.
//!
//! # Architecture
//!
//! - **[`domain`]** - The optimization core: cost model, LP assembly,
//!   solver abstraction, and shipment extraction. Pure computation, no
//!   I/O.
//! - **[`store`]** - Site persistence behind the `SiteStore` trait
//!   (SQLite via Diesel).
//! - **[`routing`]** - Route geometry behind the `RouteProvider` trait,
//!   used only for exports, never for costs.
//! - **[`config`]** - TOML configuration with environment overrides.
//! - **[`cli`]** - The `haulplan` command-line frontend.
//!
//! # Example
//!
//! ```no_run
//! use haulplan::domain::solver::HiGHSSolver;
//! use haulplan::domain::{Allocator, TransportRequest};
//! use rust_decimal::Decimal;
//! use std::collections::BTreeMap;
//!
//! let mut supply = BTreeMap::new();
//! supply.insert("north".into(), Decimal::from(800));
//! let mut costs = BTreeMap::new();
//! costs.insert("north".into(), Decimal::from(2));
//!
//! let request = TransportRequest {
//!     supply,
//!     demand: Decimal::from(500),
//!     vehicle_capacities: vec![Decimal::from(300), Decimal::from(300)],
//!     costs,
//! };
//!
//! let allocator = Allocator::new(HiGHSSolver::new());
//! let outcome = allocator.plan(&request)?;
//! # Ok::<(), haulplan::error::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod routing;
pub mod store;
