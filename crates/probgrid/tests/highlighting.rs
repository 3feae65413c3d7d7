//! End-to-end tests for formula parsing and highlighting
//!
//! The reference layout used throughout: a 4x4 grid with
//! A = rows [0,2) x cols [0,2) and B = rows [1,3) x cols [1,3).

use pretty_assertions::assert_eq;
use probgrid::prelude::*;

fn two_region_board() -> Board {
    let mut board = Board::new(Grid::parse("4x4").unwrap());
    let a = board.add_region(BoxSize::parse("2x2").unwrap()).unwrap();
    let b = board.add_region(BoxSize::parse("2x2").unwrap()).unwrap();
    board.move_region(a, 0, 0).unwrap();
    board.move_region(b, 1, 1).unwrap();
    board
}

fn cells(result: &Highlight) -> Vec<Cell> {
    let mut cells: Vec<_> = result.matched.iter().copied().collect();
    cells.sort_by_key(|c| (c.row, c.col));
    cells
}

/// A single-token formula matches exactly the cells of its rectangle
#[test]
fn test_single_token_matches_rectangle() {
    let board = two_region_board();

    let result = board.highlight("P(A)").unwrap();
    assert_eq!(
        cells(&result),
        vec![
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(1, 0),
            Cell::new(1, 1),
        ]
    );
}

/// A complemented token matches exactly the rest of the universe
#[test]
fn test_complemented_token_matches_rest_of_universe() {
    let board = two_region_board();

    let plain = board.highlight("P(A)").unwrap();
    let complemented = board.highlight("P(A^c)").unwrap();

    assert_eq!(
        plain.matched_count() + complemented.matched_count(),
        board.grid().cell_count()
    );
    for cell in board.grid().cells() {
        assert_ne!(plain.contains(cell), complemented.contains(cell));
    }
}

/// Evaluating the same formula twice yields an identical matched set
#[test]
fn test_idempotence() {
    let board = two_region_board();

    let first = board.highlight("P(AUB^c)").unwrap();
    let second = board.highlight("P(AUB^c)").unwrap();
    assert_eq!(first, second);
}

/// P(A∪B) on the reference layout matches the 7 union cells
#[test]
fn test_union() {
    let board = two_region_board();

    let result = board.highlight("P(A∪B)").unwrap();
    assert_eq!(result.matched_count(), 7);
    assert_eq!(
        cells(&result),
        vec![
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(1, 0),
            Cell::new(1, 1),
            Cell::new(1, 2),
            Cell::new(2, 1),
            Cell::new(2, 2),
        ]
    );

    // The ASCII operator variant is the same formula
    let ascii = board.highlight("P(AUB)").unwrap();
    assert_eq!(result, ascii);
}

/// P(A∩B) on the reference layout matches the single overlap cell
#[test]
fn test_intersection() {
    let board = two_region_board();

    for expression in ["P(A∩B)", "P(AnB)"] {
        let result = board.highlight(expression).unwrap();
        assert_eq!(cells(&result), vec![Cell::new(1, 1)]);
    }
}

/// P((A∪B)^c) matches exactly the universe minus the union
#[test]
fn test_complement_group_law() {
    let board = two_region_board();

    let union = board.highlight("P(A∪B)").unwrap();
    let complement = board.highlight("P((A∪B)^c)").unwrap();

    assert_eq!(
        complement.matched_count(),
        board.grid().cell_count() - union.matched_count()
    );
    for cell in board.grid().cells() {
        assert_ne!(union.contains(cell), complement.contains(cell));
    }
}

/// P(A|B) matches the joint-occurrence cells, i.e. exactly A ∩ B
#[test]
fn test_conditional_join() {
    let board = two_region_board();

    let conditional = board.highlight("P(A|B)").unwrap();
    let intersection = board.highlight("P(A∩B)").unwrap();
    assert_eq!(conditional.matched, intersection.matched);

    // The condition side's label is emphasized for the rendering layer
    assert_eq!(
        conditional.emphasized.into_iter().collect::<Vec<_>>(),
        vec![Label::B]
    );
    assert!(intersection.emphasized.is_empty());
}

/// A conditional with a chain condition emphasizes every condition label
#[test]
fn test_conditional_chain_emphasis() {
    let mut board = two_region_board();
    let c = board.add_region(BoxSize::parse("1x1").unwrap()).unwrap();
    board.move_region(c, 3, 3).unwrap();

    let result = board.highlight("P(A|BUC)").unwrap();
    assert_eq!(
        result.emphasized.into_iter().collect::<Vec<_>>(),
        vec![Label::B, Label::C]
    );
}

/// A formula referencing an undefined label fails with an empty match set
#[test]
fn test_unknown_label() {
    let board = two_region_board();

    let err = board.highlight("P(D)").unwrap_err();
    assert_eq!(err, FormulaError::UnknownLabel('D'));

    // C is in the alphabet but no third region was created
    let err = board.highlight("P(AUC)").unwrap_err();
    assert_eq!(err, FormulaError::UnknownLabel('C'));
}

/// Malformed input fails with a syntax error carrying the input
#[test]
fn test_malformed_input() {
    let board = two_region_board();

    let err = board.highlight("P(A+B)").unwrap_err();
    assert_eq!(err, FormulaError::Syntax("P(A+B)".into()));

    // Over-long garbage fails cleanly too; the 15-char cap is enforced
    // upstream, not here
    let long = format!("P({})", "A".repeat(500));
    assert!(matches!(
        board.highlight(&long).unwrap_err(),
        FormulaError::Syntax(_)
    ));
}

/// 1x1 grid with a 1x1 region covering its only cell
#[test]
fn test_single_cell_boundary() {
    let mut board = Board::new(Grid::parse("1x1").unwrap());
    board.add_region(BoxSize::parse("1x1").unwrap()).unwrap();

    let result = board.highlight("P(A)").unwrap();
    assert_eq!(cells(&result), vec![Cell::new(0, 0)]);

    let result = board.highlight("P(A^c)").unwrap();
    assert_eq!(result.matched_count(), 0);
}

/// A region overhanging the grid only matches the cells inside the grid
#[test]
fn test_region_overhanging_grid() {
    let mut board = Board::new(Grid::parse("3x3").unwrap());
    // 5x5 box on a 3x3 grid: clamps to the origin and overhangs
    board.add_region(BoxSize::parse("5x5").unwrap()).unwrap();

    let result = board.highlight("P(A)").unwrap();
    assert_eq!(result.matched_count(), 9);
}

/// Three-token chains evaluate across all three regions
#[test]
fn test_three_token_chains() {
    let mut board = two_region_board();
    let c = board.add_region(BoxSize::parse("2x2").unwrap()).unwrap();
    board.move_region(c, 2, 2).unwrap();

    let union = board.highlight("P(AUBUC)").unwrap();
    assert_eq!(union.matched_count(), 10);

    // Only (1,1)..(2,2) are shared pairwise; all three share nothing
    let intersection = board.highlight("P(A∩B∩C)").unwrap();
    assert_eq!(intersection.matched_count(), 0);
}
