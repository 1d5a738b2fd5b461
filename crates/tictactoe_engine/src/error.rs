//! Engine error types.

use crate::position::Position;
use crate::types::FinishCondition;
use derive_more::{Display, Error};
use tracing::instrument;

/// Reason a checked move was refused.
///
/// Only [`Game::try_play`](crate::Game::try_play) surfaces this; plain
/// [`Game::play`](crate::Game::play) treats both cases as a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game has already reached a finish condition.
    #[display("Game is already over ({})", _0)]
    GameOver(#[error(not(source))] FinishCondition),
}

/// Position parse error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Position error: {} at {}:{}", message, file, line)]
pub struct PositionError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PositionError {
    /// Creates a new position error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
