//! Variable indexing for the N-Queens SAT encoding

use anyhow::Result;
use std::ops::Range;

/// The two diagonal families of a square board
///
/// A diagonal is the set of cells `(row, column)` with
/// `row = offset + step * column`; the step distinguishes the family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagonalDirection {
    /// Row index grows as the column advances (step +1)
    Descending,
    /// Row index shrinks as the column advances (step -1)
    Ascending,
}

impl DiagonalDirection {
    pub const BOTH: [DiagonalDirection; 2] = [Self::Descending, Self::Ascending];

    /// Per-column row increment along the diagonal
    pub fn step(self) -> isize {
        match self {
            Self::Descending => 1,
            Self::Ascending => -1,
        }
    }
}

/// Closed-form bijection between board cells and SAT variable ids
///
/// Cell `(row, column)` maps to variable `row + column * size + 1`; ids are
/// 1-based because CaDiCaL reserves 0. The mapping covers `[1, size^2]`
/// exactly, one variable per cell.
#[derive(Debug, Clone)]
pub struct CellIndexer {
    size: usize,
}

impl CellIndexer {
    /// Create an indexer for a board of the given size
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of variables, one per cell
    pub fn variable_count(&self) -> usize {
        self.size * self.size
    }

    /// Variable id for the cell at (row, column)
    pub fn cell_variable(&self, row: usize, column: usize) -> Result<i32> {
        if row >= self.size {
            anyhow::bail!("row {} out of bounds (size: {})", row, self.size);
        }
        if column >= self.size {
            anyhow::bail!("column {} out of bounds (size: {})", column, self.size);
        }
        Ok((row + column * self.size) as i32 + 1)
    }

    /// Recover the cell a variable id stands for
    pub fn cell_at(&self, variable: i32) -> Result<(usize, usize)> {
        let index = variable - 1;
        if index < 0 || index as usize >= self.variable_count() {
            anyhow::bail!(
                "variable {} out of bounds (count: {})",
                variable,
                self.variable_count()
            );
        }
        let index = index as usize;
        Ok((index % self.size, index / self.size))
    }

    /// Variables for every cell in one row, ordered by column
    pub fn row_variables(&self, row: usize) -> Result<Vec<i32>> {
        (0..self.size)
            .map(|column| self.cell_variable(row, column))
            .collect()
    }

    /// Variables for every cell in one column, ordered by row
    pub fn column_variables(&self, column: usize) -> Result<Vec<i32>> {
        (0..self.size)
            .map(|row| self.cell_variable(row, column))
            .collect()
    }

    /// Offsets that cover every diagonal of the board in either direction
    pub fn diagonal_offsets(&self) -> Range<isize> {
        let size = self.size as isize;
        -size..2 * size
    }

    /// Variables along one diagonal, ordered by column
    ///
    /// The diagonal holds every cell `(offset + step * column, column)` whose
    /// row lands on the board; short diagonals near the corners yield fewer
    /// than `size` variables, possibly none.
    pub fn diagonal_variables(
        &self,
        offset: isize,
        direction: DiagonalDirection,
    ) -> Result<Vec<i32>> {
        let mut variables = Vec::new();
        for column in 0..self.size {
            let row = offset + direction.step() * column as isize;
            if row >= 0 && (row as usize) < self.size {
                variables.push(self.cell_variable(row as usize, column)?);
            }
        }
        Ok(variables)
    }
}
