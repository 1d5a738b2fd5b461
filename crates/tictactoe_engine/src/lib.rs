//! Pure tic-tac-toe rules engine.
//!
//! The engine owns a 3x3 board and the current turn, validates moves,
//! detects wins and ties, and reports each state change synchronously to a
//! single [`GameObserver`].
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{EventLog, FinishCondition, Game, Position};
//!
//! let moves: Vec<Position> = ["top-left", "top-middle", "middle-left", "middle-middle", "bottom-left"]
//!     .iter()
//!     .map(|label| label.parse().unwrap())
//!     .collect();
//!
//! let game = Game::replay(EventLog::new(), &moves);
//! assert_eq!(game.is_game_finished(), Some(FinishCondition::CrossWon));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod event;
mod game;
mod observer;
mod position;
pub mod rules;
mod types;

pub use board::Board;
pub use error::{MoveError, PositionError};
pub use event::{EventLog, GameEvent};
pub use game::Game;
pub use observer::GameObserver;
pub use position::{Column, Position, Row};
pub use types::{CellValue, FinishCondition, Turn};
