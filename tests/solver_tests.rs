//! Solver adapter integration tests.

use std::time::Duration;

use haulplan::domain::constraint::{Constraint, VariableBounds};
use haulplan::domain::solver::{HiGHSSolver, LpProblem, SolutionStatus, Solver};
use haulplan::error::{Error, SolverError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn minimizes_a_transportation_shaped_lp() {
    // Two variables priced 2 and 3, together must reach 10, each capped
    // at 8: the cheap variable carries 8, the expensive one 2.
    let solver = HiGHSSolver::new();

    let problem = LpProblem {
        objective: vec![dec!(2), dec!(3)],
        constraints: vec![
            Constraint::geq(vec![Decimal::ONE, Decimal::ONE], dec!(10)),
            Constraint::leq(vec![Decimal::ONE, Decimal::ZERO], dec!(8)),
            Constraint::leq(vec![Decimal::ZERO, Decimal::ONE], dec!(8)),
        ],
        bounds: vec![VariableBounds::non_negative(); 2],
    };

    let solution = solver.solve_lp(&problem).unwrap();

    assert_eq!(solution.status, SolutionStatus::Optimal);
    assert!((solution.values[0] - dec!(8)).abs() < dec!(0.001));
    assert!((solution.values[1] - dec!(2)).abs() < dec!(0.001));
    assert!((solution.objective - dec!(22)).abs() < dec!(0.001));
}

#[test]
fn conflicting_constraints_are_infeasible_not_an_error() {
    let solver = HiGHSSolver::new();

    let problem = LpProblem {
        objective: vec![Decimal::ONE],
        constraints: vec![
            Constraint::leq(vec![Decimal::ONE], dec!(1)),
            Constraint::geq(vec![Decimal::ONE], dec!(2)),
        ],
        bounds: vec![VariableBounds::non_negative()],
    };

    let solution = solver.solve_lp(&problem).unwrap();
    assert_eq!(solution.status, SolutionStatus::Infeasible);
}

#[test]
fn missing_upper_bounds_surface_as_unbounded() {
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
fn zero_time_budget_reports_timeout() {
    let solver = HiGHSSolver::with_time_limit(Duration::ZERO);

    let problem = LpProblem {
        objective: vec![Decimal::ONE],
        constraints: vec![Constraint::geq(vec![Decimal::ONE], Decimal::ONE)],
        bounds: vec![VariableBounds::non_negative()],
    };

    match solver.solve_lp(&problem) {
        Err(Error::Solver(SolverError::Timeout { limit })) => {
            assert_eq!(limit, Duration::ZERO);
        }
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[test]
fn concurrent_solves_do_not_interfere() {
    // One solver instance shared across threads; every call builds a
    // fresh model, so results must match the sequential ones.
    let solver = std::sync::Arc::new(HiGHSSolver::new());
    let mut handles = Vec::new();

    for i in 1..=4u32 {
        let solver = std::sync::Arc::clone(&solver);
        handles.push(std::thread::spawn(move || {
            let demand = Decimal::from(i * 10);
            let problem = LpProblem {
                objective: vec![Decimal::ONE],
                constraints: vec![
                    Constraint::geq(vec![Decimal::ONE], demand),
                    Constraint::leq(vec![Decimal::ONE], dec!(100)),
                ],
                bounds: vec![VariableBounds::non_negative()],
            };
            let solution = solver.solve_lp(&problem).unwrap();
            assert_eq!(solution.status, SolutionStatus::Optimal);
            assert!((solution.values[0] - demand).abs() < dec!(0.001));
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
}
