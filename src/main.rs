//! Command-line entry point for the N-Queens SAT solver

use anyhow::Result;
use clap::Parser;
use queens_sat::config::{CliOverrides, Settings};
use queens_sat::queens::QueensProblem;
use queens_sat::utils::BoardFormatter;

#[derive(Parser)]
#[command(name = "queens_sat")]
#[command(about = "N-Queens solver via SAT encoding")]
#[command(version)]
struct Cli {
    /// First board size to solve
    start_size: Option<usize>,

    /// One past the last board size to solve (defaults to start + 1)
    end_size: Option<usize>,

    /// Print solved boards when nonzero, timing lines when zero
    print_boards: Option<i32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::default();
    settings.merge_with_cli(&CliOverrides {
        start_size: cli.start_size,
        end_size: cli.end_size,
        print_boards: cli.print_boards.map(|flag| flag != 0),
    });

    println!("{}", BoardFormatter::run_header(&settings));

    let problem = QueensProblem::new(settings.clone())?;
    let mut solutions = Vec::new();

    for size in problem.sizes() {
        let report = problem.solve_size(size)?;

        if settings.run.print_boards {
            // Unsatisfiable sizes (2 and 3) print nothing.
            if let Some(solution) = &report.solution {
                print!("{}", BoardFormatter::format_board(&solution.board));
            }
        } else {
            println!(
                "{}",
                BoardFormatter::timing_line(report.size, report.solve_time)
            );
        }

        if let Some(solution) = report.solution {
            solutions.push(solution);
        }
    }

    if settings.output.save_solutions {
        BoardFormatter::save_solutions(
            &solutions,
            &settings.output.output_directory,
            &settings.output.format,
        )?;
    }

    Ok(())
}
