use simplex_tableau::{DimensionError, Objective, Solve, SolveError, Tolerance};
use simplex_tableau::io::error::Import;
use simplex_tableau::io::import;

use super::{get_test_file_path, read};

#[test]
fn production() {
    let problem = read("production");
    assert_eq!(problem.objective(), Objective::Maximize);

    let solution = problem.solve().unwrap();
    assert_eq!(solution.values(), &[4f64, 8f64]);
    assert_eq!(solution.objective_value(), 400f64);
}

#[test]
fn production_minimized() {
    let problem = read("production").with_objective(Objective::Minimize);

    let solution = problem.solve().unwrap();
    assert_eq!(solution.values(), &[0f64, 0f64]);
    assert_eq!(solution.objective_value(), 0f64);
}

#[test]
fn products() {
    let problem = read("products");
    assert_eq!(problem.objective(), Objective::Maximize);

    let solution = problem.solve().unwrap();
    assert_eq!(solution.values(), &[0f64, 0f64, 10f64, 0f64]);
    assert_eq!(solution.objective_value(), 50f64);
    assert!(problem.is_feasible(solution.values(), &Tolerance::exact()));
}

#[test]
fn unbounded() {
    let problem = read("unbounded");
    assert_eq!(problem.solve(), Err(SolveError::Unbounded { column: 1 }));
}

#[test]
fn inconsistent() {
    match import(&get_test_file_path("inconsistent")) {
        Err(Import::LinearProgram(error)) => {
            assert_eq!(error, DimensionError::Cost { expected: 2, actual: 3 });
        },
        _ => panic!("the cost vector is too long"),
    }
}

#[test]
fn missing() {
    let result = import(&get_test_file_path("does_not_exist"));
    assert!(matches!(result, Err(Import::IO(_))));
}
