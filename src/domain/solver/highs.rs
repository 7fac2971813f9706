//! HiGHS solver implementation via good_lp.
//!
//! HiGHS is a high-performance open-source linear programming solver.
//! This implementation wraps it using the good_lp crate for ergonomic
//! Rust usage and adds an optional wall-clock time budget.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use good_lp::solvers::highs::highs;
use good_lp::{constraint, variable, variables, Expression, ResolutionError, Solution, SolverModel};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::{LpProblem, LpSolution, SolutionStatus, Solver};
use crate::domain::constraint::ConstraintSense;
use crate::error::{Result, SolverError};

/// HiGHS-based LP solver.
#[derive(Debug, Default, Clone)]
pub struct HiGHSSolver {
    time_limit: Option<Duration>,
}

impl HiGHSSolver {
    /// Create a new HiGHS solver instance with no time budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver that fails with [`SolverError::Timeout`] when a
    /// solve runs past `limit`.
    pub fn with_time_limit(limit: Duration) -> Self {
        Self {
            time_limit: Some(limit),
        }
    }
}

impl Solver for HiGHSSolver {
    fn name(&self) -> &'static str {
        "highs"
    }

    fn solve_lp(&self, problem: &LpProblem) -> Result<LpSolution> {
        let Some(limit) = self.time_limit else {
            return solve_with_good_lp(problem);
        };

        // HiGHS has no cancellation hook, so the budget is enforced by
        // waiting on a worker thread. The worker stays detached after a
        // timeout and exits once its solve returns.
        let owned = problem.clone();
        let (tx, rx) = mpsc::channel();
        thread::Builder::new()
            .name("haulplan-solve".into())
            .spawn(move || {
                let _ = tx.send(solve_with_good_lp(&owned));
            })?;

        match rx.recv_timeout(limit) {
            Ok(result) => result,
            Err(mpsc::RecvTimeoutError::Timeout) => Err(SolverError::Timeout { limit }.into()),
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                Err(SolverError::Backend("solver thread terminated".into()).into())
            }
        }
    }
}

/// Internal solver implementation using good_lp.
fn solve_with_good_lp(problem: &LpProblem) -> Result<LpSolution> {
    let n = problem.num_vars();

    // Handle empty problem
    if n == 0 {
        return Ok(LpSolution {
            values: vec![],
            objective: Decimal::ZERO,
            status: SolutionStatus::Optimal,
        });
    }

    // Create variables
    let mut vars = variables!();
    let mut var_list = Vec::with_capacity(n);

    for bounds in &problem.bounds {
        let mut v = variable();

        if let Some(lb) = bounds.lower {
            v = v.min(lb.to_f64().unwrap_or(0.0));
        }
        if let Some(ub) = bounds.upper {
            v = v.max(ub.to_f64().unwrap_or(f64::INFINITY));
        }

        var_list.push(vars.add(v));
    }

    // Build objective function
    let objective: Expression = var_list
        .iter()
        .zip(problem.objective.iter())
        .map(|(v, c)| c.to_f64().unwrap_or(0.0) * *v)
        .sum();

    let mut model = vars.minimise(&objective).using(highs);

    // Add constraints
    for constr in &problem.constraints {
        let lhs: Expression = var_list
            .iter()
            .zip(constr.coefficients.iter())
            .map(|(v, c)| c.to_f64().unwrap_or(0.0) * *v)
            .sum();

        let rhs = constr.rhs.to_f64().unwrap_or(0.0);

        match constr.sense {
            ConstraintSense::GreaterEqual => {
                model = model.with(constraint!(lhs >= rhs));
            }
            ConstraintSense::LessEqual => {
                model = model.with(constraint!(lhs <= rhs));
            }
        }
    }

    match model.solve() {
        Ok(solution) => {
            let values: Vec<Decimal> = var_list
                .iter()
                .map(|v| Decimal::try_from(solution.value(*v)).unwrap_or(Decimal::ZERO))
                .collect();

            // Re-evaluate objective with the solved values
            let obj_value: f64 = values
                .iter()
                .zip(problem.objective.iter())
                .map(|(v, c)| v.to_f64().unwrap_or(0.0) * c.to_f64().unwrap_or(0.0))
                .sum();

            Ok(LpSolution {
                values,
                objective: Decimal::try_from(obj_value).unwrap_or(Decimal::ZERO),
                status: SolutionStatus::Optimal,
            })
        }
        Err(ResolutionError::Infeasible) => Ok(LpSolution {
            values: vec![Decimal::ZERO; n],
            objective: Decimal::ZERO,
            status: SolutionStatus::Infeasible,
        }),
        Err(ResolutionError::Unbounded) => Ok(LpSolution {
            values: vec![Decimal::ZERO; n],
            objective: Decimal::ZERO,
            status: SolutionStatus::Unbounded,
        }),
        Err(other) => Err(SolverError::Backend(other.to_string()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constraint::{Constraint, VariableBounds};
    use rust_decimal_macros::dec;

    #[test]
    fn test_solver_name() {
        let solver = HiGHSSolver::new();
        assert_eq!(solver.name(), "highs");
    }

    #[test]
    fn test_simple_lp() {
        // Minimize: x + y
        // Subject to: x + y >= 1
        //            x, y >= 0
        let solver = HiGHSSolver::new();

        let problem = LpProblem {
            objective: vec![Decimal::ONE, Decimal::ONE],
            constraints: vec![Constraint::geq(
                vec![Decimal::ONE, Decimal::ONE],
                Decimal::ONE,
            )],
            bounds: vec![VariableBounds::non_negative(); 2],
        };

        let solution = solver.solve_lp(&problem).unwrap();

        assert!(solution.is_optimal());
        let sum: Decimal = solution.values.iter().sum();
        assert!(
            (sum - Decimal::ONE).abs() < dec!(0.01),
            "Sum should be ~1, got {}",
            sum
        );
    }

    #[test]
    fn test_infeasible_reported_as_status() {
        // x <= 1 and x >= 2 cannot both hold.
        let solver = HiGHSSolver::new();

        let problem = LpProblem {
            objective: vec![Decimal::ONE],
            constraints: vec![
                Constraint::leq(vec![Decimal::ONE], Decimal::ONE),
                Constraint::geq(vec![Decimal::ONE], dec!(2)),
            ],
            bounds: vec![VariableBounds::non_negative()],
        };

        let solution = solver.solve_lp(&problem).unwrap();
        assert_eq!(solution.status, SolutionStatus::Infeasible);
    }

    #[test]
    fn test_unbounded_reported_as_status() {
        // Maximize x (minimize -x) with no upper bound.
        let solver = HiGHSSolver::new();

        let problem = LpProblem {
            objective: vec![-Decimal::ONE],
            constraints: vec![],
            bounds: vec![VariableBounds::non_negative()],
        };

        let solution = solver.solve_lp(&problem).unwrap();
        assert_eq!(solution.status, SolutionStatus::Unbounded);
    }

    #[test]
    fn test_empty_problem() {
        let solver = HiGHSSolver::new();
        let problem = LpProblem::new(0);
        let solution = solver.solve_lp(&problem).unwrap();

        assert!(solution.is_optimal());
        assert!(solution.values.is_empty());
    }

    #[test]
    fn test_bounded_variable_respects_upper_bound() {
        // Minimize -x with x in [0, 3]: optimum sits at the upper bound.
        let solver = HiGHSSolver::new();

        let problem = LpProblem {
            objective: vec![-Decimal::ONE],
            constraints: vec![],
            bounds: vec![VariableBounds::bounded(Decimal::ZERO, dec!(3))],
        };

        let solution = solver.solve_lp(&problem).unwrap();
        assert!(solution.is_optimal());
        assert!(
            (solution.values[0] - dec!(3)).abs() < dec!(0.01),
            "x should be ~3, got {}",
            solution.values[0]
        );
    }

    #[test]
    fn test_zero_budget_times_out() {
        let solver = HiGHSSolver::with_time_limit(Duration::ZERO);

        let problem = LpProblem {
            objective: vec![Decimal::ONE],
            constraints: vec![Constraint::geq(vec![Decimal::ONE], Decimal::ONE)],
            bounds: vec![VariableBounds::non_negative()],
        };

        let result = solver.solve_lp(&problem);
        assert!(matches!(
            result,
            Err(crate::error::Error::Solver(SolverError::Timeout { .. }))
        ));
    }

    #[test]
    fn test_generous_budget_still_solves() {
        let solver = HiGHSSolver::with_time_limit(Duration::from_secs(30));

        let problem = LpProblem {
            objective: vec![Decimal::ONE, Decimal::ONE],
            constraints: vec![Constraint::geq(
                vec![Decimal::ONE, Decimal::ONE],
                Decimal::ONE,
            )],
            bounds: vec![VariableBounds::non_negative(); 2],
        };

        let solution = solver.solve_lp(&problem).unwrap();
        assert!(solution.is_optimal());
    }
}
