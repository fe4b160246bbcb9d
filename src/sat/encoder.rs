//! SAT encoder for one N-Queens board size

use super::{ConstraintGenerator, SatSolver, SolverSolution};
use crate::board::Board;
use anyhow::{Context, Result};

/// Encodes and solves a single board size
///
/// Owns a fresh generator and engine; nothing is shared or reused across
/// sizes. Encode once, solve once, decode, discard.
pub struct QueensEncoder {
    generator: ConstraintGenerator,
    solver: SatSolver,
    size: usize,
}

impl QueensEncoder {
    /// Create an encoder for a board of the given size
    pub fn new(size: usize) -> Self {
        Self {
            generator: ConstraintGenerator::new(size),
            solver: SatSolver::new(),
            size,
        }
    }

    /// Encode the board constraints and run the engine
    ///
    /// Returns the decoded placement when satisfiable, `None` otherwise
    /// (there is no valid placement for sizes 2 and 3).
    pub fn solve(&mut self) -> Result<Option<Board>> {
        let clauses = self
            .generator
            .generate_all_constraints()
            .context("Failed to generate N-Queens constraints")?;

        self.solver
            .add_clauses(&clauses)
            .context("Failed to add clauses to SAT solver")?;

        match self.solver.solve().context("SAT solving failed")? {
            Some(solution) => Ok(Some(self.decode(&solution)?)),
            None => Ok(None),
        }
    }

    /// Reconstruct the queen placement from a satisfying assignment
    ///
    /// A cell holds a queen iff its variable is true; variables missing from
    /// the assignment count as false. Read-only with respect to the engine.
    fn decode(&self, solution: &SolverSolution) -> Result<Board> {
        let indexer = self.generator.indexer();
        let mut board = Board::new(self.size);

        for row in 0..self.size {
            for column in 0..self.size {
                let variable = indexer.cell_variable(row, column)?;
                let occupied = solution.assignment.get(&variable).copied().unwrap_or(false);
                board.set(row, column, occupied)?;
            }
        }

        Ok(board)
    }

    /// Get encoding statistics
    pub fn statistics(&self) -> Result<EncodingStatistics> {
        let constraint_stats = self.generator.statistics()?;
        Ok(EncodingStatistics {
            board_size: self.size,
            total_variables: self.generator.indexer().variable_count(),
            row_clauses: constraint_stats.row_clauses,
            column_clauses: constraint_stats.column_clauses,
            diagonal_clauses: constraint_stats.diagonal_clauses,
        })
    }
}

/// Statistics about the SAT encoding of one board size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingStatistics {
    pub board_size: usize,
    pub total_variables: usize,
    pub row_clauses: usize,
    pub column_clauses: usize,
    pub diagonal_clauses: usize,
}

impl EncodingStatistics {
    pub fn total_clauses(&self) -> usize {
        self.row_clauses + self.column_clauses + self.diagonal_clauses
    }
}

impl std::fmt::Display for EncodingStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SAT Encoding Statistics:")?;
        writeln!(f, "  Board: {}x{}", self.board_size, self.board_size)?;
        writeln!(f, "  Total variables: {}", self.total_variables)?;
        writeln!(f, "  Row clauses: {}", self.row_clauses)?;
        writeln!(f, "  Column clauses: {}", self.column_clauses)?;
        writeln!(f, "  Diagonal clauses: {}", self.diagonal_clauses)?;
        writeln!(f, "  Total clauses: {}", self.total_clauses())?;
        Ok(())
    }
}
