//! Convenient re-exports for common usage
//!
//! ```rust
//! use probgrid::prelude::*;
//! ```

pub use crate::BoardHighlightExt;
pub use probgrid_core::{Board, BoxSize, Cell, Grid, Label, PixelPoint, Region, RegionSet};
pub use probgrid_formula::{parse_formula, Formula, FormulaError, Highlight};
