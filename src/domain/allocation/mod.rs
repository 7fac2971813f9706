//! Transportation allocation: request validation, LP assembly, solving,
//! and shipment extraction.
//!
//! One call to [`Allocator::plan`] is one complete solve: the request is
//! validated, turned into a linear program, handed to the configured
//! [`Solver`], and the optimal variable values are filtered into an ordered
//! shipment list. Nothing is cached between calls, so concurrent solves
//! from independent callers never share solver state.

mod builder;
mod extract;

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::cost::unit_costs;
use crate::domain::error::DomainError;
use crate::domain::ids::WarehouseId;
use crate::domain::shipment::Shipment;
use crate::domain::site::{Client, Warehouse};
use crate::domain::solver::{SolutionStatus, Solver};
use crate::error::{Result, SolverError};

/// Inputs of one solve: supply per warehouse, one demand figure, the
/// fleet's capacity list, and the per-warehouse unit costs.
///
/// Keyed by `BTreeMap` so that variable layout and shipment order are
/// deterministic for identical inputs.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub supply: BTreeMap<WarehouseId, Decimal>,
    pub demand: Decimal,
    pub vehicle_capacities: Vec<Decimal>,
    pub costs: BTreeMap<WarehouseId, Decimal>,
}

impl TransportRequest {
    /// Assemble a request from site records, deriving the cost table from
    /// great-circle distances to the client.
    pub fn from_sites(
        warehouses: &[Warehouse],
        client: &Client,
        vehicle_capacities: Vec<Decimal>,
        rate_per_km: Decimal,
    ) -> Result<Self, DomainError> {
        let costs = unit_costs(warehouses, client.location(), rate_per_km)?;
        let supply = warehouses
            .iter()
            .map(|w| (w.id().clone(), w.supply()))
            .collect();
        Ok(Self {
            supply,
            demand: client.demand(),
            vehicle_capacities,
            costs,
        })
    }

    /// Check every precondition of the model.
    ///
    /// Runs before the LP is built; a request that fails here is never
    /// handed to the solver.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.supply.is_empty() {
            return Err(DomainError::EmptySupply);
        }
        for (warehouse, supply) in &self.supply {
            if supply.is_sign_negative() {
                return Err(DomainError::NegativeSupply {
                    warehouse: warehouse.clone(),
                    supply: *supply,
                });
            }
        }
        if self.demand.is_sign_negative() {
            return Err(DomainError::NegativeDemand {
                demand: self.demand,
            });
        }
        for (index, capacity) in self.vehicle_capacities.iter().enumerate() {
            if capacity.is_sign_negative() {
                return Err(DomainError::NegativeCapacity {
                    index,
                    capacity: *capacity,
                });
            }
        }
        for warehouse in self.supply.keys() {
            match self.costs.get(warehouse) {
                None => {
                    return Err(DomainError::MissingCost {
                        warehouse: warehouse.clone(),
                    })
                }
                Some(cost) if cost.is_sign_negative() => {
                    return Err(DomainError::NegativeCost {
                        warehouse: warehouse.clone(),
                        cost: *cost,
                    })
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// Tuning knobs for allocation.
#[derive(Debug, Clone)]
pub struct AllocatorConfig {
    /// Solved values at or below this threshold are treated as exactly
    /// zero during extraction.
    pub zero_tolerance: Decimal,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            // 1e-9
            zero_tolerance: Decimal::new(1, 9),
        }
    }
}

/// The complete allocation for an optimal solve.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationPlan {
    /// Shipments ordered by warehouse then vehicle class.
    pub shipments: Vec<Shipment>,
    /// Total transportation cost of the shipments.
    pub objective: Decimal,
}

impl AllocationPlan {
    fn empty() -> Self {
        Self {
            shipments: Vec::new(),
            objective: Decimal::ZERO,
        }
    }

    /// Total allocated volume across all shipments.
    pub fn total_volume(&self) -> Decimal {
        self.shipments.iter().map(|s| s.volume).sum()
    }
}

/// Result of a solve that reached the solver.
///
/// Infeasibility is an expected outcome, not an error: callers must branch
/// on it instead of treating an empty plan as success.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    /// A minimum-cost feasible allocation.
    Optimal(AllocationPlan),
    /// No allocation satisfies supply, demand, and capacity together.
    Infeasible,
}

impl SolveOutcome {
    pub fn is_optimal(&self) -> bool {
        matches!(self, SolveOutcome::Optimal(_))
    }

    pub fn plan(&self) -> Option<&AllocationPlan> {
        match self {
            SolveOutcome::Optimal(plan) => Some(plan),
            SolveOutcome::Infeasible => None,
        }
    }
}

/// Solves transportation requests with a pluggable LP backend.
pub struct Allocator<S> {
    solver: S,
    config: AllocatorConfig,
}

impl<S: Solver> Allocator<S> {
    /// Create an allocator with default tuning.
    pub fn new(solver: S) -> Self {
        Self::with_config(solver, AllocatorConfig::default())
    }

    pub fn with_config(solver: S, config: AllocatorConfig) -> Self {
        Self { solver, config }
    }

    /// Run one solve.
    ///
    /// # Errors
    ///
    /// `DomainError` for invalid input (before any solve attempt),
    /// `SolverError` for timeouts and backend faults. An unbounded status
    /// is a fault here: every variable is capacity-constrained.
    pub fn plan(&self, request: &TransportRequest) -> Result<SolveOutcome> {
        request.validate()?;

        let (problem, layout) = builder::build(request);
        debug!(
            solver = self.solver.name(),
            variables = problem.num_vars(),
            constraints = problem.constraints.len(),
            "assembled transportation model"
        );

        // No vehicle classes means no variables; only zero demand is
        // satisfiable without them.
        if problem.num_vars() == 0 {
            return Ok(if request.demand.is_zero() {
                SolveOutcome::Optimal(AllocationPlan::empty())
            } else {
                SolveOutcome::Infeasible
            });
        }

        let solution = self.solver.solve_lp(&problem)?;
        match solution.status {
            SolutionStatus::Optimal => {
                let shipments =
                    extract::extract(&layout, &solution.values, self.config.zero_tolerance);
                // Recomputed from the extracted shipments so the reported
                // cost matches the reported plan exactly.
                let objective = shipments
                    .iter()
                    .map(|s| s.volume * unit_cost_for(request, &s.warehouse))
                    .sum();
                Ok(SolveOutcome::Optimal(AllocationPlan {
                    shipments,
                    objective,
                }))
            }
            SolutionStatus::Infeasible => Ok(SolveOutcome::Infeasible),
            SolutionStatus::Unbounded => Err(SolverError::Unbounded.into()),
        }
    }
}

// Presence checked by validate at the top of plan.
fn unit_cost_for(request: &TransportRequest, warehouse: &WarehouseId) -> Decimal {
    request
        .costs
        .get(warehouse)
        .copied()
        .unwrap_or(Decimal::ZERO)
}
