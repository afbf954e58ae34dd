//! # Properties of every solution
//!
//! A finite optimum is nonnegative, satisfies the constraints, and reports `z = c . x`.
use approx::assert_relative_eq;

use simplex_tableau::{solve, Objective, Problem, Solution, Solve, SolveError, Tolerance};
use simplex_tableau::algorithm::simplex::strategy::pivot_rule::FirstProfitable;

const EPSILON: f64 = 1e-9;

fn problems() -> Vec<(Vec<f64>, Vec<Vec<f64>>, Vec<f64>)> {
    vec![
        (
            vec![40f64, 30f64],
            vec![vec![1f64, 1f64], vec![2f64, 1f64]],
            vec![12f64, 16f64],
        ),
        (
            vec![4f64, 3f64, 5f64, 2f64],
            vec![
                vec![1f64, 1f64, 1f64, 1f64],
                vec![2f64, 3f64, 1f64, 4f64],
                vec![1f64, 2f64, 2f64, 1f64],
                vec![3f64, 1f64, 2f64, 2f64],
            ],
            vec![10f64, 25f64, 20f64, 30f64],
        ),
        (
            vec![3f64, 5f64],
            vec![vec![1f64, 0f64], vec![0f64, 2f64], vec![3f64, 2f64]],
            vec![4f64, 12f64, 18f64],
        ),
        (
            vec![0.3f64, 1.7f64, 0.9f64],
            vec![
                vec![0.5f64, 1.1f64, 0.2f64],
                vec![1.3f64, 0.4f64, 0.8f64],
                vec![0.2f64, 0.6f64, 1.5f64],
            ],
            vec![3.1f64, 2.7f64, 4.4f64],
        ),
        (
            vec![-2f64, 1.5f64, 0f64],
            vec![vec![1f64, 1f64, 1f64], vec![-1f64, 2f64, 0.5f64]],
            vec![7f64, 3f64],
        ),
    ]
}

fn assert_valid(problem: &Problem<f64>, solution: &Solution<f64>) {
    assert_eq!(solution.values().len(), problem.nr_variables());
    for &value in solution.values() {
        assert!(value >= -EPSILON, "negative value {}", value);
    }
    for (row, &b) in problem.constraints().rows().zip(problem.rhs()) {
        let lhs = row.iter().zip(solution.values()).map(|(a, x)| a * x).sum::<f64>();
        assert!(lhs <= b + EPSILON, "{} exceeds {}", lhs, b);
    }
    assert_relative_eq!(
        solution.objective_value(),
        problem.evaluate(solution.values()).unwrap(),
        epsilon = EPSILON,
        max_relative = EPSILON,
    );
}

#[test]
fn maximize() {
    for (cost, rows, rhs) in problems() {
        let problem = Problem::from_rows(&cost, &rows, &rhs, Objective::Maximize).unwrap();
        let solution = problem.solve().unwrap();
        assert_valid(&problem, &solution);
    }
}

#[test]
fn minimize() {
    for (cost, rows, rhs) in problems() {
        let problem = Problem::from_rows(&cost, &rows, &rhs, Objective::Minimize).unwrap();
        let solution = problem.solve().unwrap();
        assert_valid(&problem, &solution);
    }
}

#[test]
fn minimize_negated_cost() {
    for (cost, rows, rhs) in problems() {
        let maximum = solve(&cost, &rows, &rhs, Objective::Maximize).unwrap();

        let negated = cost.iter().map(|c| -c).collect::<Vec<_>>();
        let problem = Problem::from_rows(&negated, &rows, &rhs, Objective::Minimize).unwrap();
        let minimum = problem.solve().unwrap();

        assert_valid(&problem, &minimum);
        assert_relative_eq!(
            minimum.objective_value(),
            -maximum.objective_value(),
            epsilon = EPSILON,
            max_relative = EPSILON,
        );
    }
}

#[test]
fn pivot_rules_agree() {
    for (cost, rows, rhs) in problems() {
        let problem = Problem::from_rows(&cost, &rows, &rhs, Objective::Maximize).unwrap();
        let dantzig = problem.solve().unwrap();
        let first = problem.solve_with::<FirstProfitable>(Tolerance::exact()).unwrap();

        assert_valid(&problem, &first);
        assert_relative_eq!(
            first.objective_value(),
            dantzig.objective_value(),
            epsilon = EPSILON,
            max_relative = EPSILON,
        );
    }
}

#[test]
fn with_tolerance() {
    let tolerance = Tolerance::new(1e-12f64).unwrap();
    for (cost, rows, rhs) in problems() {
        let problem = Problem::from_rows(&cost, &rows, &rhs, Objective::Maximize).unwrap();
        let solution = problem.solve_with::<FirstProfitable>(tolerance).unwrap();
        assert_valid(&problem, &solution);
    }
}

#[test]
fn repeated() {
    for (cost, rows, rhs) in problems() {
        let first = solve(&cost, &rows, &rhs, Objective::Maximize);
        let second = solve(&cost, &rows, &rhs, Objective::Maximize);
        assert_eq!(first, second);
    }
}

#[test]
fn textbook() {
    let solution = solve(
        &[3f64, 5f64],
        &[[1f64, 0f64], [0f64, 2f64], [3f64, 2f64]],
        &[4f64, 12f64, 18f64],
        Objective::Maximize,
    ).unwrap();

    assert_relative_eq!(solution.values()[0], 2f64);
    assert_relative_eq!(solution.values()[1], 6f64);
    assert_relative_eq!(solution.objective_value(), 36f64);
}

#[test]
fn textbook_first_profitable() {
    let problem = Problem::from_rows(
        &[3f64, 5f64],
        &[[1f64, 0f64], [0f64, 2f64], [3f64, 2f64]],
        &[4f64, 12f64, 18f64],
        Objective::Maximize,
    ).unwrap();
    let solution = problem.solve_with::<FirstProfitable>(Tolerance::exact()).unwrap();

    assert_relative_eq!(solution.values()[0], 2f64);
    assert_relative_eq!(solution.values()[1], 6f64);
    assert_relative_eq!(solution.objective_value(), 36f64);
}

#[test]
fn dimension_mismatch() {
    let result = solve(
        &[1f64, 2f64, 3f64],
        &[[1f64, 1f64], [2f64, 1f64]],
        &[12f64, 16f64],
        Objective::Maximize,
    );

    let error = result.unwrap_err();
    assert!(matches!(error, SolveError::Dimension(_)));
    let message = error.to_string();
    assert!(message.contains('3'));
    assert!(message.contains('2'));
}

#[test]
fn unbounded() {
    let result = solve(&[1f64, 0f64], &[[1f64, -1f64]], &[1f64], Objective::Maximize);
    assert_eq!(result, Err(SolveError::Unbounded { column: 1 }));
    assert!(result.unwrap_err().to_string().starts_with("Unbounded"));

    let result = solve(&[-1f64, 0f64], &[[-1f64, 1f64]], &[1f64], Objective::Minimize);
    assert_eq!(result, Err(SolveError::Unbounded { column: 0 }));
}
