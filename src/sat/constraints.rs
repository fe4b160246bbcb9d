//! Clause generation for the N-Queens SAT encoding

use super::variables::{CellIndexer, DiagonalDirection};
use anyhow::Result;
use itertools::Itertools;

/// Represents a SAT clause (disjunction of literals)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub literals: Vec<i32>, // Positive for variable, negative for negation
}

impl Clause {
    /// Create a new clause from literals
    pub fn new(literals: Vec<i32>) -> Self {
        Self { literals }
    }

    /// Create a unit clause (single literal)
    pub fn unit(literal: i32) -> Self {
        Self {
            literals: vec![literal],
        }
    }

    /// Create a binary clause (two literals)
    pub fn binary(lit1: i32, lit2: i32) -> Self {
        Self {
            literals: vec![lit1, lit2],
        }
    }

    /// Check if clause is empty (unsatisfiable)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Number of literals in the clause
    pub fn len(&self) -> usize {
        self.literals.len()
    }
}

/// Generates the CNF constraints of an N-Queens board
///
/// Rows and columns each host exactly one queen; a diagonal may host at most
/// one. At-most-one over a literal group is the pairwise encoding: one binary
/// clause per unordered pair.
pub struct ConstraintGenerator {
    indexer: CellIndexer,
}

impl ConstraintGenerator {
    /// Create a generator for a board of the given size
    pub fn new(size: usize) -> Self {
        Self {
            indexer: CellIndexer::new(size),
        }
    }

    /// The cell-to-variable mapping the clauses are built over
    pub fn indexer(&self) -> &CellIndexer {
        &self.indexer
    }

    /// No two literals of the group are simultaneously true
    ///
    /// Emits `(!a | !b)` for every unordered pair, `k * (k - 1) / 2` clauses
    /// for a group of size k.
    pub fn at_most_one(literals: &[i32]) -> Vec<Clause> {
        literals
            .iter()
            .tuple_combinations()
            .map(|(&first, &second)| Clause::binary(-first, -second))
            .collect()
    }

    /// At least one literal of the group is true: a single wide clause
    pub fn at_least_one(literals: &[i32]) -> Clause {
        Clause::new(literals.to_vec())
    }

    /// Exactly one literal of the group is true
    pub fn exactly_one(literals: &[i32]) -> Vec<Clause> {
        let mut clauses = vec![Self::at_least_one(literals)];
        clauses.extend(Self::at_most_one(literals));
        clauses
    }

    /// Exactly one queen in every row
    pub fn row_constraints(&self) -> Result<Vec<Clause>> {
        let mut clauses = Vec::new();
        for row in 0..self.indexer.size() {
            let literals = self.indexer.row_variables(row)?;
            clauses.extend(Self::exactly_one(&literals));
        }
        Ok(clauses)
    }

    /// Exactly one queen in every column
    pub fn column_constraints(&self) -> Result<Vec<Clause>> {
        let mut clauses = Vec::new();
        for column in 0..self.indexer.size() {
            let literals = self.indexer.column_variables(column)?;
            clauses.extend(Self::exactly_one(&literals));
        }
        Ok(clauses)
    }

    /// At most one queen on every diagonal, in both directions
    ///
    /// Diagonals are not required to hold a queen, so only the mutual
    /// exclusion half of the constraint is emitted. Groups with fewer than
    /// two cells are trivially satisfied and produce no clause.
    pub fn diagonal_constraints(&self) -> Result<Vec<Clause>> {
        let mut clauses = Vec::new();
        for offset in self.indexer.diagonal_offsets() {
            for direction in DiagonalDirection::BOTH {
                let literals = self.indexer.diagonal_variables(offset, direction)?;
                if literals.len() > 1 {
                    clauses.extend(Self::at_most_one(&literals));
                }
            }
        }
        Ok(clauses)
    }

    /// Generate all constraints for the N-Queens problem
    pub fn generate_all_constraints(&self) -> Result<Vec<Clause>> {
        let mut clauses = Vec::new();
        clauses.extend(self.row_constraints()?);
        clauses.extend(self.column_constraints()?);
        clauses.extend(self.diagonal_constraints()?);
        Ok(clauses)
    }

    /// Per-family clause counts
    pub fn statistics(&self) -> Result<ConstraintStatistics> {
        Ok(ConstraintStatistics {
            row_clauses: self.row_constraints()?.len(),
            column_clauses: self.column_constraints()?.len(),
            diagonal_clauses: self.diagonal_constraints()?.len(),
        })
    }
}

/// Clause counts per constraint family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintStatistics {
    pub row_clauses: usize,
    pub column_clauses: usize,
    pub diagonal_clauses: usize,
}

impl ConstraintStatistics {
    pub fn total(&self) -> usize {
        self.row_clauses + self.column_clauses + self.diagonal_clauses
    }
}

impl std::fmt::Display for ConstraintStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Constraint Statistics:")?;
        writeln!(f, "  Row clauses: {}", self.row_clauses)?;
        writeln!(f, "  Column clauses: {}", self.column_clauses)?;
        writeln!(f, "  Diagonal clauses: {}", self.diagonal_clauses)?;
        writeln!(f, "  Total clauses: {}", self.total())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_most_one_pair_count() {
        for k in 2..=6usize {
            let literals: Vec<i32> = (1..=k as i32).collect();
            let clauses = ConstraintGenerator::at_most_one(&literals);

            assert_eq!(clauses.len(), k * (k - 1) / 2);
            for clause in &clauses {
                assert_eq!(clause.len(), 2);
                assert!(clause.literals.iter().all(|&lit| lit < 0));
            }
        }
    }

    #[test]
    fn test_at_most_one_trivial_groups() {
        assert!(ConstraintGenerator::at_most_one(&[]).is_empty());
        assert!(ConstraintGenerator::at_most_one(&[7]).is_empty());
    }

    #[test]
    fn test_at_least_one() {
        let clause = ConstraintGenerator::at_least_one(&[1, 2, 3]);
        assert_eq!(clause, Clause::new(vec![1, 2, 3]));
    }

    #[test]
    fn test_exactly_one_clause_count() {
        for k in 1..=5usize {
            let literals: Vec<i32> = (1..=k as i32).collect();
            let clauses = ConstraintGenerator::exactly_one(&literals);
            assert_eq!(clauses.len(), 1 + k * (k - 1) / 2);

            // The wide clause comes first, all pairs after it.
            assert_eq!(clauses[0].len(), k);
        }
    }

    #[test]
    fn test_row_and_column_constraint_counts() {
        let size = 4;
        let generator = ConstraintGenerator::new(size);
        let per_line = 1 + size * (size - 1) / 2;

        assert_eq!(generator.row_constraints().unwrap().len(), size * per_line);
        assert_eq!(
            generator.column_constraints().unwrap().len(),
            size * per_line
        );
    }

    #[test]
    fn test_diagonal_constraints_skip_short_groups() {
        // A 1x1 board has no diagonal with two cells.
        let generator = ConstraintGenerator::new(1);
        assert!(generator.diagonal_constraints().unwrap().is_empty());

        // A 2x2 board has one two-cell diagonal per direction.
        let generator = ConstraintGenerator::new(2);
        assert_eq!(generator.diagonal_constraints().unwrap().len(), 2);
    }

    #[test]
    fn test_diagonal_constraints_are_binary_and_negative() {
        let generator = ConstraintGenerator::new(5);
        for clause in generator.diagonal_constraints().unwrap() {
            assert_eq!(clause.len(), 2);
            assert!(clause.literals.iter().all(|&lit| lit < 0));
        }
    }

    #[test]
    fn test_no_duplicate_clauses() {
        let generator = ConstraintGenerator::new(6);
        let clauses = generator.generate_all_constraints().unwrap();

        let mut normalized: Vec<Vec<i32>> = clauses
            .iter()
            .map(|clause| {
                let mut literals = clause.literals.clone();
                literals.sort_unstable();
                literals
            })
            .collect();
        let before = normalized.len();
        normalized.sort();
        normalized.dedup();

        assert_eq!(before, normalized.len());
    }

    #[test]
    fn test_encoding_is_deterministic() {
        // Two fresh generators over the same size produce the same formula.
        let first = ConstraintGenerator::new(5).generate_all_constraints().unwrap();
        let second = ConstraintGenerator::new(5).generate_all_constraints().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_statistics_match_generated_clauses() {
        let generator = ConstraintGenerator::new(4);
        let stats = generator.statistics().unwrap();

        assert_eq!(
            stats.total(),
            generator.generate_all_constraints().unwrap().len()
        );
    }
}
