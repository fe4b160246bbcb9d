//! Display and output formatting for solved boards

use crate::board::Board;
use crate::config::{OutputFormat, Settings};
use crate::queens::Solution;
use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;

/// Format boards and run reports for console output
pub struct BoardFormatter;

impl BoardFormatter {
    /// Leading summary line naming the run mode and size range
    pub fn run_header(settings: &Settings) -> String {
        let mode = if settings.run.print_boards {
            "Print boards"
        } else {
            "Calculate times"
        };
        format!(
            "{} starting at {} and ending at {}",
            mode, settings.run.start_size, settings.run.end_size
        )
    }

    /// Render a board, one row per line, 'x' for queen and '-' for empty
    pub fn format_board(board: &Board) -> String {
        board.to_string()
    }

    /// Per-size timing report
    pub fn timing_line(size: usize, elapsed: Duration) -> String {
        format!(
            "Solved a {0}x{0} board in {1} milliseconds",
            size,
            elapsed.as_millis()
        )
    }

    /// Save solutions to the output directory, one file per board size
    pub fn save_solutions(
        solutions: &[Solution],
        output_directory: &Path,
        format: &OutputFormat,
    ) -> Result<()> {
        std::fs::create_dir_all(output_directory).with_context(|| {
            format!(
                "Failed to create output directory {}",
                output_directory.display()
            )
        })?;

        for solution in solutions {
            match format {
                OutputFormat::Json => {
                    let path = output_directory.join(format!("queens_{}.json", solution.size));
                    solution
                        .save_to_file(&path)
                        .with_context(|| format!("Failed to save {}", path.display()))?;
                }
                OutputFormat::Text => {
                    let path = output_directory.join(format!("queens_{}.txt", solution.size));
                    std::fs::write(&path, Self::format_board(&solution.board))
                        .with_context(|| format!("Failed to save {}", path.display()))?;
                }
            }
        }

        Ok(())
    }
}
