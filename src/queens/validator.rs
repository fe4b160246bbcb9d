//! Independent validation of decoded queen placements

use crate::board::Board;
use crate::sat::DiagonalDirection;

/// Checks decoded boards against the N-Queens rules, independently of the
/// SAT encoding that produced them
pub struct SolutionValidator;

/// Result of validating a placement
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error_message: Option<String>,
}

impl ValidationResult {
    fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: None,
        }
    }

    fn invalid(message: String) -> Self {
        Self {
            is_valid: false,
            error_message: Some(message),
        }
    }
}

impl SolutionValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a placement: exactly one queen per row and per column, at
    /// most one queen on any diagonal
    pub fn validate(&self, board: &Board) -> ValidationResult {
        let size = board.size;

        for row in 0..size {
            let count = (0..size).filter(|&column| board.get(row, column)).count();
            if count != 1 {
                return ValidationResult::invalid(format!(
                    "row {} holds {} queens, expected 1",
                    row, count
                ));
            }
        }

        for column in 0..size {
            let count = (0..size).filter(|&row| board.get(row, column)).count();
            if count != 1 {
                return ValidationResult::invalid(format!(
                    "column {} holds {} queens, expected 1",
                    column, count
                ));
            }
        }

        // Same enumeration the encoder constrains: row = offset + step * column.
        let size_i = size as isize;
        for offset in -size_i..2 * size_i {
            for direction in DiagonalDirection::BOTH {
                let count = (0..size)
                    .filter_map(|column| {
                        let row = offset + direction.step() * column as isize;
                        (row >= 0 && row < size_i).then(|| (row as usize, column))
                    })
                    .filter(|&(row, column)| board.get(row, column))
                    .count();
                if count > 1 {
                    return ValidationResult::invalid(format!(
                        "diagonal at offset {} ({:?}) holds {} queens",
                        offset, direction, count
                    ));
                }
            }
        }

        ValidationResult::valid()
    }
}

impl Default for SolutionValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid {
            write!(f, "Placement is valid")
        } else {
            write!(
                f,
                "Placement is invalid: {}",
                self.error_message.as_deref().unwrap_or("unknown reason")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from_columns(columns: &[usize]) -> Board {
        let mut board = Board::new(columns.len());
        for (row, &column) in columns.iter().enumerate() {
            board.set(row, column, true).unwrap();
        }
        board
    }

    #[test]
    fn test_accepts_canonical_four_queens() {
        let validator = SolutionValidator::new();
        assert!(validator.validate(&board_from_columns(&[1, 3, 0, 2])).is_valid);
        assert!(validator.validate(&board_from_columns(&[2, 0, 3, 1])).is_valid);
    }

    #[test]
    fn test_accepts_single_cell() {
        let validator = SolutionValidator::new();
        assert!(validator.validate(&board_from_columns(&[0])).is_valid);
    }

    #[test]
    fn test_rejects_empty_row() {
        let validator = SolutionValidator::new();
        let board = Board::new(3);

        let result = validator.validate(&board);
        assert!(!result.is_valid);
        assert!(result.error_message.unwrap().contains("row 0"));
    }

    #[test]
    fn test_rejects_shared_column() {
        let validator = SolutionValidator::new();
        let mut board = Board::new(2);
        board.set(0, 0, true).unwrap();
        board.set(1, 0, true).unwrap();

        assert!(!validator.validate(&board).is_valid);
    }

    #[test]
    fn test_rejects_shared_diagonal() {
        let validator = SolutionValidator::new();

        // One queen per row and per column, but (0,0) and (1,1) collide.
        let result = validator.validate(&board_from_columns(&[0, 1, 3, 2]));
        assert!(!result.is_valid);
        assert!(result.error_message.unwrap().contains("diagonal"));
    }
}
