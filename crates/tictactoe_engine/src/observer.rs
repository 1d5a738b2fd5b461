//! State-change notifications.
//!
//! A [`Game`](crate::Game) carries exactly one observer slot. Notifications
//! are delivered synchronously, inline with the call that caused them.

use crate::position::Position;
use crate::types::{CellValue, FinishCondition, Turn};

/// Receives engine notifications. Every method defaults to doing nothing.
pub trait GameObserver {
    /// A cell was written, including the 9 writes done by a reset.
    fn cell_updated(&mut self, value: CellValue, position: Position) {
        let _ = (value, position);
    }

    /// A move ended the game. Sent once per game.
    fn game_finished(&mut self, condition: FinishCondition) {
        let _ = condition;
    }

    /// The active side was set, by a reset or by a non-final move.
    fn turn_changed(&mut self, turn: Turn) {
        let _ = turn;
    }
}

/// No observer attached.
impl GameObserver for () {}

/// An absent observer is tolerated; notifications are dropped.
impl<T: GameObserver> GameObserver for Option<T> {
    fn cell_updated(&mut self, value: CellValue, position: Position) {
        if let Some(observer) = self {
            observer.cell_updated(value, position);
        }
    }

    fn game_finished(&mut self, condition: FinishCondition) {
        if let Some(observer) = self {
            observer.game_finished(condition);
        }
    }

    fn turn_changed(&mut self, turn: Turn) {
        if let Some(observer) = self {
            observer.turn_changed(turn);
        }
    }
}

/// Borrowed observer: the engine does not own it.
impl<T: GameObserver + ?Sized> GameObserver for &mut T {
    fn cell_updated(&mut self, value: CellValue, position: Position) {
        (**self).cell_updated(value, position);
    }

    fn game_finished(&mut self, condition: FinishCondition) {
        (**self).game_finished(condition);
    }

    fn turn_changed(&mut self, turn: Turn) {
        (**self).turn_changed(turn);
    }
}

impl<T: GameObserver + ?Sized> GameObserver for Box<T> {
    fn cell_updated(&mut self, value: CellValue, position: Position) {
        (**self).cell_updated(value, position);
    }

    fn game_finished(&mut self, condition: FinishCondition) {
        (**self).game_finished(condition);
    }

    fn turn_changed(&mut self, turn: Turn) {
        (**self).turn_changed(turn);
    }
}
