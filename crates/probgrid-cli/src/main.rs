//! Probgrid CLI - region-algebra expressions on an ASCII grid

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use probgrid::prelude::*;

#[derive(Parser)]
#[command(name = "probgrid")]
#[command(
    author,
    version,
    about = "Evaluate set/probability expressions over labeled grid regions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression and render the highlighted cells
    Eval {
        /// Expression to evaluate, e.g. "P(A)", "P(AUB)", "P(A|B^c)"
        expression: String,

        /// Grid size as ROWSxCOLS (1..=15 each)
        #[arg(short, long, default_value = "4x4")]
        grid: String,

        /// Region as WIDTHxHEIGHT[@ROW,COL], labeled A, B, C in order
        /// (repeatable, up to three)
        #[arg(short, long = "region")]
        regions: Vec<String>,
    },

    /// Show the board layout without evaluating anything
    Show {
        /// Grid size as ROWSxCOLS (1..=15 each)
        #[arg(short, long, default_value = "4x4")]
        grid: String,

        /// Region as WIDTHxHEIGHT[@ROW,COL] (repeatable, up to three)
        #[arg(short, long = "region")]
        regions: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Eval {
            expression,
            grid,
            regions,
        } => eval(&expression, &grid, &regions),
        Commands::Show { grid, regions } => show(&grid, &regions),
    }
}

/// Build a board from a grid spec and region specs
///
/// Regions are created at the origin and then moved through the same
/// snap-commit path a drag release uses.
fn build_board(grid: &str, regions: &[String]) -> Result<Board> {
    let grid = Grid::parse(grid).with_context(|| format!("Invalid grid size '{grid}'"))?;
    let mut board = Board::new(grid);

    for spec in regions {
        let (size, anchor) = match spec.split_once('@') {
            Some((size, anchor)) => (size, Some(anchor)),
            None => (spec.as_str(), None),
        };

        let size = BoxSize::parse(size).with_context(|| format!("Invalid region '{spec}'"))?;
        let label = board
            .add_region(size)
            .with_context(|| format!("Cannot add region '{spec}'"))?;

        if let Some(anchor) = anchor {
            let (row, col) = parse_anchor(anchor)
                .ok_or_else(|| anyhow!("Invalid anchor in '{spec}' (expected ROW,COL)"))?;
            board.move_region(label, row, col)?;
        }
    }

    Ok(board)
}

fn parse_anchor(s: &str) -> Option<(u16, u16)> {
    let (row, col) = s.split_once(',')?;
    Some((row.trim().parse().ok()?, col.trim().parse().ok()?))
}

fn eval(expression: &str, grid: &str, regions: &[String]) -> Result<()> {
    let board = build_board(grid, regions)?;
    let result = board
        .highlight(expression)
        .with_context(|| format!("Cannot evaluate '{expression}'"))?;

    for row in 0..board.grid().rows() {
        let line: Vec<&str> = (0..board.grid().cols())
            .map(|col| {
                if result.contains(Cell::new(row, col)) {
                    "●"
                } else {
                    "·"
                }
            })
            .collect();
        println!("{}", line.join(" "));
    }

    println!();
    print_region_lines(&board, Some(&result));
    println!("Result: {}", result.summary(board.grid()));
    Ok(())
}

fn show(grid: &str, regions: &[String]) -> Result<()> {
    let board = build_board(grid, regions)?;

    for row in 0..board.grid().rows() {
        let line: Vec<String> = (0..board.grid().cols())
            .map(|col| cell_marker(&board, Cell::new(row, col)))
            .collect();
        println!("{}", line.join(" "));
    }

    println!();
    println!(
        "Total Grid Squares: {} squares ({})",
        board.grid().cell_count(),
        board.grid()
    );
    print_region_lines(&board, None);
    Ok(())
}

/// The letter of the first region covering the cell, or a blank marker
fn cell_marker(board: &Board, cell: Cell) -> String {
    board
        .regions()
        .iter()
        .find(|region| region.contains(cell))
        .map(|region| region.label().to_string())
        .unwrap_or_else(|| "·".to_string())
}

fn print_region_lines(board: &Board, result: Option<&Highlight>) {
    for region in board.regions().iter() {
        let emphasized = result.is_some_and(|h| h.emphasized.contains(&region.label()));
        println!(
            "{} at ({}, {}){}",
            region,
            region.start_row(),
            region.start_col(),
            if emphasized { " [condition]" } else { "" }
        );
    }
}
