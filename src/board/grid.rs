//! Queen placement grid decoded from a satisfying assignment

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from bounds-checked board access
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell ({row}, {column}) out of bounds for a {size}x{size} board")]
    OutOfBounds {
        row: usize,
        column: usize,
        size: usize,
    },
}

/// An N x N board where each cell either holds a queen or is empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Side length of the square board
    pub size: usize,
    /// Cell occupancy in row-major order
    cells: Vec<bool>,
}

impl Board {
    /// Create an empty board of the given size
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Check whether a cell holds a queen
    ///
    /// Panics if the cell is outside the board; callers iterate over
    /// `0..size` so in-range access is their precondition.
    pub fn get(&self, row: usize, column: usize) -> bool {
        self.cells[row * self.size + column]
    }

    /// Place or remove a queen at the given cell
    pub fn set(&mut self, row: usize, column: usize, occupied: bool) -> Result<(), BoardError> {
        if row >= self.size || column >= self.size {
            return Err(BoardError::OutOfBounds {
                row,
                column,
                size: self.size,
            });
        }
        self.cells[row * self.size + column] = occupied;
        Ok(())
    }

    /// Total number of queens on the board
    pub fn queen_count(&self) -> usize {
        self.cells.iter().filter(|&&occupied| occupied).count()
    }

    /// All occupied cells as (row, column) pairs, in row-major order
    pub fn queen_positions(&self) -> Vec<(usize, usize)> {
        let mut positions = Vec::new();
        for row in 0..self.size {
            for column in 0..self.size {
                if self.get(row, column) {
                    positions.push((row, column));
                }
            }
        }
        positions
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for column in 0..self.size {
                write!(f, "{}", if self.get(row, column) { 'x' } else { '-' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
