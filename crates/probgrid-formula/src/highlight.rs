//! Highlight engine
//!
//! Drives the evaluator over every cell of a grid and collects the
//! matched set, plus the cosmetic emphasis set for conditional
//! formulas. Pure: the caller owns clearing any previously rendered
//! highlights before asking for a new run.

use crate::ast::Formula;
use crate::error::FormulaResult;
use crate::evaluator::{evaluate, resolve_labels, RegionLookup};
use crate::parser::parse_formula;
use ahash::AHashSet;
use log::debug;
use probgrid_core::{Cell, Grid, Label};
use std::collections::BTreeSet;

/// The outcome of evaluating a formula over a whole grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlight {
    /// Every grid cell the formula holds for
    pub matched: AHashSet<Cell>,
    /// Labels appearing in a conditional's condition side, for the
    /// rendering layer to bold; carries no algebraic meaning
    pub emphasized: BTreeSet<Label>,
}

impl Highlight {
    /// Number of matched cells
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    /// Check whether a cell is highlighted
    pub fn contains(&self, cell: Cell) -> bool {
        self.matched.contains(&cell)
    }

    /// The result line shown next to the grid, e.g.
    /// "7 / 16 grid cells highlighted"
    pub fn summary(&self, grid: &Grid) -> String {
        format!(
            "{} / {} grid cells highlighted",
            self.matched.len(),
            grid.cell_count()
        )
    }
}

/// Evaluate a parsed formula against every cell of the grid
///
/// All labels are resolved before the scan, so an unknown label fails
/// once with an empty match set rather than highlighting partially. The
/// result is computed fully before being returned; no intermediate
/// state is ever observable.
pub fn run<L: RegionLookup>(grid: &Grid, formula: &Formula, lookup: &L) -> FormulaResult<Highlight> {
    resolve_labels(formula, lookup)?;

    let mut matched = AHashSet::new();
    for cell in grid.cells() {
        if evaluate(cell, formula, lookup)? {
            matched.insert(cell);
        }
    }

    let emphasized = match formula {
        Formula::Conditional { condition, .. } => condition
            .tokens()
            .iter()
            .filter_map(|token| Label::from_char(token.letter))
            .collect(),
        _ => BTreeSet::new(),
    };

    debug!(
        "highlighted {} of {} cells ({} emphasized labels)",
        matched.len(),
        grid.cell_count(),
        emphasized.len()
    );

    Ok(Highlight { matched, emphasized })
}

/// Parse a raw expression and evaluate it in one step
pub fn highlight_expression<L: RegionLookup>(
    grid: &Grid,
    raw: &str,
    lookup: &L,
) -> FormulaResult<Highlight> {
    let formula = parse_formula(raw)?;
    run(grid, &formula, lookup)
}
