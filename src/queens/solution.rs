//! Solution representation for solved N-Queens boards

use crate::board::Board;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A solved placement for one board size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// Side length of the solved board
    pub size: usize,
    /// The decoded queen placement
    pub board: Board,
    /// Occupied cells as (row, column) pairs
    pub queens: Vec<(usize, usize)>,
    /// Time taken to encode and solve this board
    #[serde(skip)]
    pub solve_time: Duration,
}

impl Solution {
    /// Create a solution from a decoded board
    pub fn new(board: Board, solve_time: Duration) -> Self {
        Self {
            size: board.size,
            queens: board.queen_positions(),
            board,
            solve_time,
        }
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Create from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Save to file
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from file
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> Board {
        let mut board = Board::new(4);
        for (row, column) in [(0, 1), (1, 3), (2, 0), (3, 2)] {
            board.set(row, column, true).unwrap();
        }
        board
    }

    #[test]
    fn test_solution_metadata() {
        let solution = Solution::new(sample_board(), Duration::from_millis(3));

        assert_eq!(solution.size, 4);
        assert_eq!(solution.queens, vec![(0, 1), (1, 3), (2, 0), (3, 2)]);
    }

    #[test]
    fn test_json_round_trip() {
        let solution = Solution::new(sample_board(), Duration::from_millis(3));
        let json = solution.to_json().unwrap();
        let restored = Solution::from_json(&json).unwrap();

        assert_eq!(restored.size, solution.size);
        assert_eq!(restored.board, solution.board);
        assert_eq!(restored.queens, solution.queens);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solution.json");

        let solution = Solution::new(sample_board(), Duration::from_millis(3));
        solution.save_to_file(&path).unwrap();

        let restored = Solution::load_from_file(&path).unwrap();
        assert_eq!(restored.board, solution.board);
    }
}
