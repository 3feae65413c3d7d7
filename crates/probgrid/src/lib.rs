//! # probgrid
//!
//! A library for defining labeled rectangular regions over a grid and
//! evaluating `P(...)` set expressions against them, cell by cell.
//!
//! The grid and region geometry live in `probgrid-core`; the formula
//! language and highlight engine live in `probgrid-formula`. This crate
//! re-exports both and ties them together with [`BoardHighlightExt`].
//!
//! ## Example
//!
//! ```rust
//! use probgrid::prelude::*;
//!
//! let mut board = Board::new(Grid::parse("4x4").unwrap());
//!
//! board.add_region(BoxSize::parse("2x2").unwrap()).unwrap();
//! let b = board.add_region(BoxSize::parse("2x2").unwrap()).unwrap();
//! board.move_region(b, 1, 1).unwrap();
//!
//! let result = board.highlight("P(A∩B)").unwrap();
//! assert_eq!(result.matched_count(), 1);
//! assert!(result.contains(Cell::new(1, 1)));
//! ```

pub mod prelude;

// Re-export core types
pub use probgrid_core::{
    Board, BoxSize, Cell, DragState, Error, Grid, Label, PixelPoint, Region, RegionSet, Result,
    CELL_SIZE_PX, MAX_DIM, MAX_REGIONS,
};

// Re-export formula types
pub use probgrid_formula::{
    evaluate, highlight_expression, parse_formula, resolve_labels, satisfies, Chain, EventExpr,
    EventToken, Formula, FormulaError, FormulaResult, Highlight, RegionLookup, SetOp,
};

pub use probgrid_formula::highlight;

/// Extension trait evaluating expressions directly against a board
pub trait BoardHighlightExt {
    /// Parse `expression` and highlight it over the board's grid and
    /// committed regions
    fn highlight(&self, expression: &str) -> FormulaResult<Highlight>;
}

impl BoardHighlightExt for Board {
    fn highlight(&self, expression: &str) -> FormulaResult<Highlight> {
        highlight_expression(self.grid(), expression, self.regions())
    }
}
