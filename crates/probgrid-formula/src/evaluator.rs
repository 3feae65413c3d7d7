//! Region-algebra evaluator
//!
//! Decides, cell by cell, whether a formula holds. Region geometry is
//! read through the [`RegionLookup`] seam so the evaluator never touches
//! mutable registry state; it is a pure function of its inputs.

use crate::ast::{Chain, EventExpr, EventToken, Formula, SetOp};
use crate::error::{FormulaError, FormulaResult};
use probgrid_core::{Cell, Label, Region, RegionSet};

/// Maps a formula letter to the region carrying it
///
/// The direct replacement for scanning rendered elements by label text:
/// the registry owner exposes itself as a lookup and the evaluator stays
/// ignorant of where regions live.
pub trait RegionLookup {
    /// The region labeled with `letter`, if one exists
    fn region(&self, letter: char) -> Option<&Region>;
}

impl RegionLookup for RegionSet {
    fn region(&self, letter: char) -> Option<&Region> {
        Label::from_char(letter).and_then(|label| self.get(label))
    }
}

/// Check that every letter the formula references has a region
///
/// Called once per evaluation run, before any cell is scanned, so a
/// missing label fails fast with zero highlighted cells instead of a
/// partial highlight.
pub fn resolve_labels<L: RegionLookup>(formula: &Formula, lookup: &L) -> FormulaResult<()> {
    for letter in formula.letters() {
        if lookup.region(letter).is_none() {
            return Err(FormulaError::UnknownLabel(letter));
        }
    }
    Ok(())
}

/// Decide whether a cell satisfies a single token
///
/// Membership is the half-open rectangle test, flipped for complemented
/// tokens. Fails with [`FormulaError::UnknownLabel`] when no region
/// carries the token's letter.
pub fn satisfies<L: RegionLookup>(cell: Cell, token: EventToken, lookup: &L) -> FormulaResult<bool> {
    let region = lookup
        .region(token.letter)
        .ok_or(FormulaError::UnknownLabel(token.letter))?;

    let inside = region.contains(cell);
    Ok(if token.complemented { !inside } else { inside })
}

/// Decide whether a cell satisfies a formula
pub fn evaluate<L: RegionLookup>(
    cell: Cell,
    formula: &Formula,
    lookup: &L,
) -> FormulaResult<bool> {
    match formula {
        Formula::Event(expr) => evaluate_event(cell, expr, lookup),
        // Joint occurrence of both sides, not a probability ratio
        Formula::Conditional { left, condition } => {
            Ok(evaluate_event(cell, left, lookup)? && evaluate_event(cell, condition, lookup)?)
        }
        Formula::Complement(chain) => Ok(!evaluate_chain(cell, chain, lookup)?),
    }
}

fn evaluate_event<L: RegionLookup>(
    cell: Cell,
    expr: &EventExpr,
    lookup: &L,
) -> FormulaResult<bool> {
    match expr {
        EventExpr::Token(token) => satisfies(cell, *token, lookup),
        EventExpr::Chain(chain) => evaluate_chain(cell, chain, lookup),
    }
}

fn evaluate_chain<L: RegionLookup>(cell: Cell, chain: &Chain, lookup: &L) -> FormulaResult<bool> {
    match chain.op {
        SetOp::Union => {
            for token in &chain.tokens {
                if satisfies(cell, *token, lookup)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        SetOp::Intersection => {
            for token in &chain.tokens {
                if !satisfies(cell, *token, lookup)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
    }
}
