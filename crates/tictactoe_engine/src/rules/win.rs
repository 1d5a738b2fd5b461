//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::position::{Column, Position, Row};
use crate::types::Turn;
use tracing::instrument;

const fn at(row: Row, column: Column) -> Position {
    Position::new(row, column)
}

/// The 8 lines that win a game, in evaluation order: rows top to bottom,
/// columns left to right, then the two diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [
        at(Row::Top, Column::Left),
        at(Row::Top, Column::Middle),
        at(Row::Top, Column::Right),
    ],
    [
        at(Row::Middle, Column::Left),
        at(Row::Middle, Column::Middle),
        at(Row::Middle, Column::Right),
    ],
    [
        at(Row::Bottom, Column::Left),
        at(Row::Bottom, Column::Middle),
        at(Row::Bottom, Column::Right),
    ],
    // Columns
    [
        at(Row::Top, Column::Left),
        at(Row::Middle, Column::Left),
        at(Row::Bottom, Column::Left),
    ],
    [
        at(Row::Top, Column::Middle),
        at(Row::Middle, Column::Middle),
        at(Row::Bottom, Column::Middle),
    ],
    [
        at(Row::Top, Column::Right),
        at(Row::Middle, Column::Right),
        at(Row::Bottom, Column::Right),
    ],
    // Diagonals
    [
        at(Row::Top, Column::Left),
        at(Row::Middle, Column::Middle),
        at(Row::Bottom, Column::Right),
    ],
    [
        at(Row::Top, Column::Right),
        at(Row::Middle, Column::Middle),
        at(Row::Bottom, Column::Left),
    ],
];

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first line (in [`WINNING_LINES`] order) whose
/// three cells hold the same non-empty value. Boards with several complete
/// lines of different owners can only be built by hand; the first one wins.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Turn> {
    WINNING_LINES.iter().find_map(|[a, b, c]| {
        let value = board.get(*a);
        if value == board.get(*b) && value == board.get(*c) {
            value.owner()
        } else {
            None
        }
    })
}
