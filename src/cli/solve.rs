//! The `solve` command: run one allocation and present the plan.

use std::process::ExitCode;

use rust_decimal::Decimal;
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::info;

use super::command::SolveArgs;
use super::{geojson, open_store, output, plan::PlanFile};
use crate::config::{Config, RoutingProvider};
use crate::domain::solver::HiGHSSolver;
use crate::domain::{
    AllocationPlan, Allocator, AllocatorConfig, Client, SolveOutcome, TransportRequest, Warehouse,
};
use crate::error::{Error, Result};
use crate::routing::{OsrmRouter, RouteProvider, StraightLineRouter};
use crate::store::SiteStore;

pub(crate) async fn run(args: &SolveArgs, config: &Config) -> Result<ExitCode> {
    let (warehouses, client, plan_fleet) = load_sites(args, config)?;

    let fleet = args
        .fleet
        .clone()
        .or(plan_fleet)
        .unwrap_or_else(|| config.fleet.capacities.clone());

    let request =
        TransportRequest::from_sites(&warehouses, &client, fleet.clone(), config.cost.rate_per_km)?;

    let solver = match config.solver.time_limit() {
        Some(limit) => HiGHSSolver::with_time_limit(limit),
        None => HiGHSSolver::new(),
    };
    let allocator = Allocator::with_config(
        solver,
        AllocatorConfig {
            zero_tolerance: config.solver.zero_tolerance,
        },
    );

    info!(
        warehouses = warehouses.len(),
        vehicle_classes = fleet.len(),
        demand = %client.demand(),
        "solving transportation problem"
    );

    match allocator.plan(&request)? {
        SolveOutcome::Optimal(plan) => {
            render_plan(&plan, &request);

            if let Some(path) = &args.geojson {
                let router = build_router(config)?;
                let collection =
                    geojson::plan_features(&plan, &warehouses, &client, router.as_ref()).await?;
                std::fs::write(path, serde_json::to_string_pretty(&collection)?)?;
                output::info(format!("wrote route geometry to {}", path.display()));
            }

            Ok(ExitCode::SUCCESS)
        }
        SolveOutcome::Infeasible => {
            if output::is_json() {
                output::emit_json("plan", json!({ "status": "infeasible" }));
            } else {
                output::error("demand cannot be met with the current supply and fleet");
            }
            Ok(ExitCode::from(1))
        }
    }
}

fn load_sites(
    args: &SolveArgs,
    config: &Config,
) -> Result<(Vec<Warehouse>, Client, Option<Vec<Decimal>>)> {
    match &args.plan {
        Some(path) => {
            let plan_file = PlanFile::load(path)?;
            let (warehouses, client) = plan_file.sites()?;
            Ok((warehouses, client, plan_file.fleet))
        }
        None => {
            let store = open_store(config)?;
            let warehouses = store.warehouses()?;
            let client = store.client()?.ok_or(Error::MissingClient)?;
            Ok((warehouses, client, None))
        }
    }
}

fn build_router(config: &Config) -> Result<Box<dyn RouteProvider>> {
    Ok(match config.routing.provider {
        RoutingProvider::StraightLine => Box::new(StraightLineRouter::new()),
        RoutingProvider::Osrm => Box::new(OsrmRouter::new(
            &config.routing.base_url,
            config.routing.api_key.clone(),
        )?),
    })
}

#[derive(Tabled)]
struct ShipmentRow {
    #[tabled(rename = "Warehouse")]
    warehouse: String,
    #[tabled(rename = "Vehicle")]
    vehicle: String,
    #[tabled(rename = "Volume (kg)")]
    volume: String,
    #[tabled(rename = "Unit cost")]
    unit_cost: String,
    #[tabled(rename = "Cost")]
    cost: String,
}

fn render_plan(plan: &AllocationPlan, request: &TransportRequest) {
    if output::is_json() {
        output::emit_json(
            "plan",
            json!({
                "status": "optimal",
                "objective": plan.objective,
                "total_volume": plan.total_volume(),
                "shipments": plan.shipments,
            }),
        );
        return;
    }

    if plan.shipments.is_empty() {
        output::success("nothing to ship: demand is already satisfied");
        return;
    }

    let rows: Vec<ShipmentRow> = plan
        .shipments
        .iter()
        .map(|shipment| {
            let unit_cost = request
                .costs
                .get(&shipment.warehouse)
                .copied()
                .unwrap_or(Decimal::ZERO);
            ShipmentRow {
                warehouse: shipment.warehouse.to_string(),
                vehicle: format!("#{}", shipment.vehicle + 1),
                volume: format!("{:.0}", shipment.volume),
                unit_cost: format!("{:.2}", unit_cost),
                cost: format!("{:.2}", shipment.volume * unit_cost),
            }
        })
        .collect();

    let table = Table::new(rows).with(Style::sharp()).to_string();
    output::raw(table);
    output::success(format!(
        "{} shipments, {:.0} kg, total cost {:.2}",
        plan.shipments.len(),
        plan.total_volume(),
        plan.objective
    ));
}
