//! N-Queens problem orchestration, solutions, and validation

pub mod problem;
pub mod solution;
pub mod validator;

pub use problem::{QueensProblem, SolveReport};
pub use solution::Solution;
pub use validator::{SolutionValidator, ValidationResult};
