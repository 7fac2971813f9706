//! LP assembly for the transportation model.

use rust_decimal::Decimal;

use super::TransportRequest;
use crate::domain::constraint::{Constraint, VariableBounds};
use crate::domain::ids::WarehouseId;
use crate::domain::solver::LpProblem;

/// Maps decision-variable indices back to (warehouse, vehicle-class) pairs.
///
/// Variables are laid out warehouse-major: all vehicle classes of the first
/// warehouse (in id order), then the next warehouse, and so on. The layout
/// is what makes extraction order deterministic.
#[derive(Debug, Clone)]
pub(crate) struct VariableLayout {
    pairs: Vec<(WarehouseId, usize)>,
}

impl VariableLayout {
    pub(crate) fn pairs(&self) -> &[(WarehouseId, usize)] {
        &self.pairs
    }
}

/// Assemble the LP for a validated request.
///
/// One continuous variable per (warehouse, vehicle-class) pair with a zero
/// lower bound and no upper bound: each pair's capacity is a constraint
/// rather than a variable bound, so the solver can report it binding or
/// slack. Three constraint families:
///
/// - per warehouse: its variables sum to at most its supply,
/// - one global demand row: all variables sum to at least the demand,
/// - per pair: the variable is at most its vehicle class's capacity.
pub(crate) fn build(request: &TransportRequest) -> (LpProblem, VariableLayout) {
    let class_count = request.vehicle_capacities.len();
    let warehouse_count = request.supply.len();
    let n = warehouse_count * class_count;

    let mut pairs = Vec::with_capacity(n);
    let mut objective = Vec::with_capacity(n);
    for (warehouse, _) in &request.supply {
        // Presence checked by TransportRequest::validate.
        let unit_cost = request
            .costs
            .get(warehouse)
            .copied()
            .unwrap_or(Decimal::ZERO);
        for class in 0..class_count {
            pairs.push((warehouse.clone(), class));
            objective.push(unit_cost);
        }
    }

    let mut constraints =
        Vec::with_capacity(warehouse_count + 1 + n);

    // Supply: each warehouse ships at most its stock.
    for (wi, (_, supply)) in request.supply.iter().enumerate() {
        let mut coefficients = vec![Decimal::ZERO; n];
        for class in 0..class_count {
            coefficients[wi * class_count + class] = Decimal::ONE;
        }
        constraints.push(Constraint::leq(coefficients, *supply));
    }

    // Demand: one global row over every pair.
    constraints.push(Constraint::geq(vec![Decimal::ONE; n], request.demand));

    // Capacity: each pair is capped by its class, independently per
    // warehouse. A class does not bound its total use across warehouses.
    for (index, (_, class)) in pairs.iter().enumerate() {
        let mut coefficients = vec![Decimal::ZERO; n];
        coefficients[index] = Decimal::ONE;
        constraints.push(Constraint::leq(
            coefficients,
            request.vehicle_capacities[*class],
        ));
    }

    let problem = LpProblem {
        objective,
        constraints,
        bounds: vec![VariableBounds::non_negative(); n],
    };

    (problem, VariableLayout { pairs })
}
