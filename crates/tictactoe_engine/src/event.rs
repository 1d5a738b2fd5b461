//! Notifications as values.

use crate::observer::GameObserver;
use crate::position::Position;
use crate::types::{CellValue, FinishCondition, Turn};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One engine notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A cell was written.
    #[display("{position} = {value}")]
    CellUpdated {
        /// The value written.
        value: CellValue,
        /// Where it was written.
        position: Position,
    },
    /// The game ended.
    #[display("finished: {condition}")]
    GameFinished {
        /// How it ended.
        condition: FinishCondition,
    },
    /// The active side changed.
    #[display("turn: {turn}")]
    TurnChanged {
        /// Side to play next.
        turn: Turn,
    },
}

/// Observer that records every notification in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events, oldest first.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Takes the recorded events, leaving the log empty.
    #[instrument(skip(self), fields(count = self.events.len()))]
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl GameObserver for EventLog {
    fn cell_updated(&mut self, value: CellValue, position: Position) {
        self.events.push(GameEvent::CellUpdated { value, position });
    }

    fn game_finished(&mut self, condition: FinishCondition) {
        self.events.push(GameEvent::GameFinished { condition });
    }

    fn turn_changed(&mut self, turn: Turn) {
        self.events.push(GameEvent::TurnChanged { turn });
    }
}
