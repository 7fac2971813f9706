//! Linear programming solver abstraction.
//!
//! The transportation model is a plain LP: continuous variables, a linear
//! objective, and linear inequality constraints. The [`Solver`] trait keeps
//! the rest of the domain independent of the backend; [`HiGHSSolver`] is
//! the production implementation.

mod highs;

pub use highs::HiGHSSolver;

use rust_decimal::Decimal;

use crate::domain::constraint::{Constraint, VariableBounds};
use crate::error::Result;

/// Linear programming solver.
///
/// Implementations must be `Send + Sync` and must build a fresh backend
/// model on every call so that concurrent solves never share mutable
/// solver state.
pub trait Solver: Send + Sync {
    /// Return the solver name for logging and configuration.
    fn name(&self) -> &'static str;

    /// Minimize the objective subject to the constraints.
    ///
    /// Infeasibility and unboundedness are reported through
    /// [`LpSolution::status`]; an `Err` means the backend itself failed or
    /// a configured time budget was exceeded.
    fn solve_lp(&self, problem: &LpProblem) -> Result<LpSolution>;
}

/// Linear programming problem definition.
///
/// Represents a minimization problem of the form:
///
/// ```text
/// minimize    c^T * x
/// subject to  constraints
///             bounds on x
/// ```
#[derive(Debug, Clone)]
pub struct LpProblem {
    /// Objective function coefficients.
    pub objective: Vec<Decimal>,

    /// Linear constraints on the variables.
    pub constraints: Vec<Constraint>,

    /// Lower and upper bounds for each variable.
    pub bounds: Vec<VariableBounds>,
}

impl LpProblem {
    /// Create an LP with `num_vars` variables, a zero objective, and
    /// default (non-negative) bounds.
    #[must_use]
    pub fn new(num_vars: usize) -> Self {
        Self {
            objective: vec![Decimal::ZERO; num_vars],
            constraints: Vec::new(),
            bounds: vec![VariableBounds::default(); num_vars],
        }
    }

    /// Return the number of decision variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }
}

/// Solution to a linear programming problem.
#[derive(Debug, Clone)]
pub struct LpSolution {
    /// Values for each decision variable (all zero unless `Optimal`).
    pub values: Vec<Decimal>,

    /// Objective function value (zero unless `Optimal`).
    pub objective: Decimal,

    /// Termination status of the solver.
    pub status: SolutionStatus,
}

impl LpSolution {
    /// Return `true` if the solver found an optimal solution.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }
}

/// Termination status of an optimization solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionStatus {
    /// Solver found a globally optimal solution.
    Optimal,

    /// No feasible solution exists.
    Infeasible,

    /// Objective function is unbounded.
    Unbounded,
}
