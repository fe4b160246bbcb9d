//! N-Queens SAT Solver
//!
//! This library solves the N-Queens placement problem by reduction to boolean
//! satisfiability: board cells become SAT variables, the placement rules
//! become CNF clauses, CaDiCaL decides the formula, and satisfying
//! assignments are decoded back into boards.

pub mod board;
pub mod config;
pub mod queens;
pub mod sat;
pub mod utils;

pub use board::Board;
pub use config::Settings;
pub use queens::{QueensProblem, Solution, SolveReport};

use anyhow::Result;

/// Solve every board size in the configured range
pub fn solve_range(settings: Settings) -> Result<Vec<SolveReport>> {
    let problem = QueensProblem::new(settings)?;
    problem.solve_all()
}
