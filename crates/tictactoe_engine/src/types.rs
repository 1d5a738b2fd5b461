//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Value held by a single cell of the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum CellValue {
    /// Nobody has played here yet.
    #[default]
    #[display("empty")]
    Empty,
    /// Marked by the cross side.
    #[display("cross")]
    Cross,
    /// Marked by the circle side.
    #[display("circle")]
    Circle,
}

impl CellValue {
    /// Returns true if the cell holds no mark.
    pub fn is_empty(self) -> bool {
        self == CellValue::Empty
    }

    /// Returns the side owning this mark, if any.
    pub fn owner(self) -> Option<Turn> {
        match self {
            CellValue::Empty => None,
            CellValue::Cross => Some(Turn::Cross),
            CellValue::Circle => Some(Turn::Circle),
        }
    }
}

/// Side allowed to play next. Cross always opens a game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum Turn {
    /// Cross plays next.
    #[default]
    #[display("cross")]
    Cross,
    /// Circle plays next.
    #[display("circle")]
    Circle,
}

impl Turn {
    /// Mark written on the board when this side plays.
    pub fn cell_value(self) -> CellValue {
        match self {
            Turn::Cross => CellValue::Cross,
            Turn::Circle => CellValue::Circle,
        }
    }

    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Turn::Cross => Turn::Circle,
            Turn::Circle => Turn::Cross,
        }
    }
}

/// Terminal outcome of a game.
///
/// A game still in progress has no finish condition; it is represented as
/// `Option::<FinishCondition>::None` rather than a dedicated variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum FinishCondition {
    /// Cross completed a line.
    #[display("cross won")]
    CrossWon,
    /// Circle completed a line.
    #[display("circle won")]
    CircleWon,
    /// Board full with no completed line.
    #[display("tie")]
    Tie,
}

impl FinishCondition {
    /// Win condition for the given side.
    pub fn won_by(turn: Turn) -> Self {
        match turn {
            Turn::Cross => FinishCondition::CrossWon,
            Turn::Circle => FinishCondition::CircleWon,
        }
    }

    /// Returns the winner, or `None` for a tie.
    pub fn winner(self) -> Option<Turn> {
        match self {
            FinishCondition::CrossWon => Some(Turn::Cross),
            FinishCondition::CircleWon => Some(Turn::Circle),
            FinishCondition::Tie => None,
        }
    }
}
