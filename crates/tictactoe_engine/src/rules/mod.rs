//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Rules are kept apart from the engine so
//! they can be evaluated against any board without touching game state.

pub mod tie;
pub mod win;

pub use tie::is_full;
pub use win::{WINNING_LINES, check_winner};

use crate::board::Board;
use crate::types::{CellValue, FinishCondition};
use tracing::instrument;

/// Evaluates the board's finish condition.
///
/// A completed line takes precedence over a full board. `None` means the
/// game is still in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<FinishCondition> {
    if let Some(winner) = check_winner(board) {
        return Some(FinishCondition::won_by(winner));
    }
    if is_full(board) {
        return Some(FinishCondition::Tie);
    }
    None
}

/// Cross opens, so cross has either as many marks as circle or one more.
#[instrument(skip(board))]
pub fn marks_balanced(board: &Board) -> bool {
    let crosses = board.count(CellValue::Cross);
    let circles = board.count(CellValue::Circle);
    crosses == circles || crosses == circles + 1
}
