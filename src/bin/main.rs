use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{info, warn};

use simplex_tableau::algorithm::Solve;
use simplex_tableau::algorithm::simplex::strategy::pivot_rule::{FirstProfitable, MostNegative};
use simplex_tableau::{Objective, Problem, SolveError, Tolerance};
use simplex_tableau::io::error::Import;
use simplex_tableau::io::import;

/// A dense tableau simplex solver for linear programs `A x <= b`, `x >= 0`.
///
/// Without a problem file or literals, a small production planning example is solved.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// JSON file containing the problem description
    #[arg(conflicts_with_all = ["objective", "rows", "rhs"])]
    problem_file: Option<PathBuf>,
    /// Objective coefficients, comma separated
    #[arg(short = 'c', long, value_delimiter = ',', allow_hyphen_values = true)]
    objective: Vec<f64>,
    /// Row of the constraint matrix, comma separated; repeat once per constraint
    #[arg(short = 'a', long = "row", allow_hyphen_values = true)]
    rows: Vec<String>,
    /// Right-hand side, comma separated
    #[arg(short = 'b', long, value_delimiter = ',', allow_hyphen_values = true)]
    rhs: Vec<f64>,
    /// Direction of optimization, overrides the direction in the problem file
    #[arg(long, value_enum)]
    direction: Option<Direction>,
    /// Margin for all comparisons made while pivoting
    #[arg(long, default_value_t = 0f64)]
    tolerance: f64,
    /// Strategy for choosing the entering column
    #[arg(long, value_enum, default_value_t = Rule::MostNegative)]
    pivot_rule: Rule,
}

#[derive(Copy, Clone, ValueEnum)]
enum Direction {
    Maximize,
    Minimize,
}

impl From<Direction> for Objective {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Maximize => Objective::Maximize,
            Direction::Minimize => Objective::Minimize,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum Rule {
    MostNegative,
    FirstProfitable,
}

/// Anything that can go wrong between reading the arguments and printing the solution.
enum Failure {
    Import(Import),
    Arguments(String),
    Solve(SolveError),
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Import(error) => write!(f, "Couldn't read the problem: {}", error),
            Failure::Arguments(message) => f.write_str(message),
            Failure::Solve(error) => write!(f, "{}", error),
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = Opts::parse();
    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            eprintln!("{}", failure);
            ExitCode::FAILURE
        },
    }
}

fn run(opts: &Opts) -> Result<(), Failure> {
    let mut problem = read_problem(opts)?;
    if let Some(direction) = opts.direction {
        problem = problem.with_objective(direction.into());
    }

    let tolerance = Tolerance::new(opts.tolerance)
        .ok_or_else(|| Failure::Arguments(format!("Invalid tolerance: {}", opts.tolerance)))?;

    info!(
        "Solving: {} over {} variables with {} constraints, tolerance {}...",
        problem.objective(), problem.nr_variables(), problem.nr_constraints(), tolerance.epsilon(),
    );
    let solution = match opts.pivot_rule {
        Rule::MostNegative => problem.solve_with::<MostNegative>(tolerance),
        Rule::FirstProfitable => problem.solve_with::<FirstProfitable>(tolerance),
    }.map_err(Failure::Solve)?;

    // Reported, not enforced: starting from a negative right-hand side gives no guarantees
    let check = Tolerance::new(1e-9f64).unwrap_or_default();
    if !problem.is_feasible(solution.values(), &check) {
        warn!("Solution violates the constraints; is the right-hand side nonnegative?");
    }

    info!("Solution computed.");
    println!("{}", solution);
    Ok(())
}

fn read_problem(opts: &Opts) -> Result<Problem<f64>, Failure> {
    if let Some(path) = &opts.problem_file {
        info!("Reading problem file: \"{}\"...", path.to_string_lossy());
        return import(path).map_err(Failure::Import);
    }

    // Literals are maximized unless `--direction` says otherwise, which is applied by the caller
    let objective = Objective::default();
    if opts.objective.is_empty() && opts.rows.is_empty() && opts.rhs.is_empty() {
        info!("No problem given, solving the production planning example.");
        return Problem::from_rows(
            &[40f64, 30f64],
            &[[1f64, 1f64], [2f64, 1f64]],
            &[12f64, 16f64],
            objective,
        ).map_err(|error| Failure::Solve(error.into()));
    }

    let rows = opts.rows.iter()
        .map(|row| parse_row(row))
        .collect::<Result<Vec<_>, _>>()?;
    if rows.is_empty() {
        return Err(Failure::Arguments("At least one constraint row (--row) is needed".to_string()));
    }

    Problem::from_rows(&opts.objective, &rows, &opts.rhs, objective)
        .map_err(|error| Failure::Solve(error.into()))
}

fn parse_row(row: &str) -> Result<Vec<f64>, Failure> {
    row.split(',')
        .map(str::trim)
        .map(|value| value.parse::<f64>().map_err(|error| {
            Failure::Arguments(format!("Could not parse \"{}\" in row \"{}\": {}", value, row, error))
        }))
        .collect()
}
