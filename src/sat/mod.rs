//! SAT encoding and solving components for N-Queens

pub mod constraints;
pub mod encoder;
pub mod solver;
pub mod variables;

pub use constraints::{Clause, ConstraintGenerator, ConstraintStatistics};
pub use encoder::{EncodingStatistics, QueensEncoder};
pub use solver::{SatSolver, SolverSolution};
pub use variables::{CellIndexer, DiagonalDirection};
