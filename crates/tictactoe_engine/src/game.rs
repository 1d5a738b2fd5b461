//! Tic-tac-toe game engine.

use crate::board::Board;
use crate::error::MoveError;
use crate::observer::GameObserver;
use crate::position::Position;
use crate::rules;
use crate::types::{CellValue, FinishCondition, Turn};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the board and the current turn, and reports every state change to
/// its observer `O`. `Game<()>` has no observer.
///
/// A game is in progress until a move completes a line or fills the board.
/// From then on every move is refused until [`reset`](Game::reset).
#[derive(Debug, Clone)]
pub struct Game<O = ()> {
    board: Board,
    turn: Turn,
    observer: O,
}

impl Game<()> {
    /// Creates a new game with no observer.
    #[instrument]
    pub fn new() -> Self {
        Self::with_observer(())
    }
}

impl Default for Game<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: GameObserver> Game<O> {
    /// Creates a new game reporting to `observer`.
    ///
    /// The observer sees the initial reset: 9 empty cells, then cross's turn.
    #[instrument(skip(observer))]
    pub fn with_observer(observer: O) -> Self {
        let mut game = Self {
            board: Board::new(),
            turn: Turn::Cross,
            observer,
        };
        game.reset();
        game
    }

    /// Replays `moves` on a fresh game reporting to `observer`.
    ///
    /// Refused moves are skipped exactly as [`play`](Game::play) skips them.
    #[instrument(skip(observer, moves), fields(moves = moves.len()))]
    pub fn replay(observer: O, moves: &[Position]) -> Self {
        let mut game = Self::with_observer(observer);
        for position in moves {
            game.play(*position);
        }
        game
    }

    /// Swaps in a different observer, keeping board and turn.
    ///
    /// Nothing is emitted; the new observer only hears about later changes.
    pub fn attach<P: GameObserver>(self, observer: P) -> Game<P> {
        Game {
            board: self.board,
            turn: self.turn,
            observer,
        }
    }

    /// Clears the board and gives the first move to cross.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        for position in Position::ALL {
            self.write(CellValue::Empty, position);
        }
        self.set_turn(Turn::Cross);
    }

    /// Positions that can still be played.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.board.empty_positions()
    }

    /// Plays the current side at `position`.
    ///
    /// Does nothing if the cell is taken or the game is over.
    #[instrument(skip(self), fields(position = %position, turn = %self.turn))]
    pub fn play(&mut self, position: Position) {
        if let Err(error) = self.try_play(position) {
            debug!(%error, "Move ignored");
        }
    }

    /// Plays the current side at `position`, reporting why a move is refused.
    ///
    /// Returns the finish condition the move produced, if any. A refused
    /// move changes nothing and emits nothing.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game already has a finish condition.
    /// - [`MoveError::SquareOccupied`] if the cell holds a mark.
    #[instrument(skip(self), fields(position = %position, turn = %self.turn))]
    pub fn try_play(&mut self, position: Position) -> Result<Option<FinishCondition>, MoveError> {
        if let Some(condition) = self.is_game_finished() {
            return Err(MoveError::GameOver(condition));
        }
        if !self.board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        self.write(self.turn.cell_value(), position);
        debug_assert!(
            rules::marks_balanced(&self.board),
            "Cross and circle counts out of step"
        );

        match self.is_game_finished() {
            Some(condition) => {
                info!(%condition, "Game finished");
                self.observer.game_finished(condition);
                Ok(Some(condition))
            }
            None => {
                self.set_turn(self.turn.opponent());
                Ok(None)
            }
        }
    }

    /// Value held at `position`.
    pub fn value(&self, position: Position) -> CellValue {
        self.board.get(position)
    }

    /// Side to play next. Frozen once the game is over.
    pub fn current_turn(&self) -> Turn {
        self.turn
    }

    /// Evaluates the board. `None` while the game is in progress.
    pub fn is_game_finished(&self) -> Option<FinishCondition> {
        rules::evaluate(&self.board)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consumes the game, returning the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    fn write(&mut self, value: CellValue, position: Position) {
        self.board.set(position, value);
        debug!(%value, %position, "Cell updated");
        self.observer.cell_updated(value, position);
    }

    fn set_turn(&mut self, turn: Turn) {
        self.turn = turn;
        debug!(%turn, "Turn changed");
        self.observer.turn_changed(turn);
    }
}
