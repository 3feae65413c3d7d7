//! # probgrid-core
//!
//! Core data structures for the probgrid region-algebra library.
//!
//! This crate provides the fundamental types used throughout probgrid:
//! - [`Grid`] and [`Cell`] - The finite cell universe formulas are evaluated over
//! - [`Label`] and [`Region`] - Labeled rectangular regions in grid coordinates
//! - [`RegionSet`] - The creation-ordered region registry (at most three entries)
//! - [`Board`] - The geometry adapter that places, drags, rotates and snaps regions
//!
//! ## Example
//!
//! ```rust
//! use probgrid_core::{Board, BoxSize, Grid, Label};
//!
//! let mut board = Board::new(Grid::parse("4x4").unwrap());
//!
//! // Regions are labeled A, B, C in creation order
//! let a = board.add_region(BoxSize::new(2, 2).unwrap()).unwrap();
//! assert_eq!(a, Label::A);
//!
//! board.move_region(a, 1, 1).unwrap();
//! assert_eq!(board.regions().get(a).unwrap().start_row(), 1);
//! ```

pub mod board;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod label;
pub mod region;

// Re-exports for convenience
pub use board::{Board, DragState};
pub use error::{Error, Result};
pub use geometry::PixelPoint;
pub use grid::{Cell, Grid};
pub use label::Label;
pub use region::{BoxSize, Region, RegionSet};

/// Maximum rows or columns in a grid, and maximum region width or height
pub const MAX_DIM: u16 = 15;

/// Maximum number of simultaneously defined regions
pub const MAX_REGIONS: usize = 3;

/// Rendered size of one grid cell, in pixels
pub const CELL_SIZE_PX: i32 = 50;
