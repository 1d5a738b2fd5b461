//! Tie detection logic for tic-tac-toe.

use crate::board::Board;
use tracing::instrument;

/// Checks if the board is full (no empty cell left).
///
/// A full board with no winner is a tie.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.empty_positions().is_empty()
}
