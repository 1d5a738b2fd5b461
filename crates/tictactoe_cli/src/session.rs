//! Terminal sessions driving the engine.
//!
//! The engine reports into an [`EventLog`]; after every command the session
//! drains the log and writes what happened.

use crate::config::DisplayConfig;
use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_engine::{CellValue, EventLog, FinishCondition, Game, GameEvent, Position};
use tracing::{debug, instrument, warn};

/// Replays `moves` and writes each notification, the board and the result.
#[instrument(skip(moves, config, out), fields(moves = moves.len()))]
pub fn run_replay<W: Write>(
    moves: &[Position],
    json: bool,
    config: &DisplayConfig,
    out: &mut W,
) -> Result<()> {
    let mut game = Game::replay(EventLog::new(), moves);

    for event in game.observer_mut().drain() {
        if json {
            writeln!(out, "{}", serde_json::to_string(&event)?)?;
        } else {
            writeln!(out, "{}", event)?;
        }
    }

    if !json {
        writeln!(out, "{}", config.render(game.board()))?;
        writeln!(out, "{}", describe(game.is_game_finished()))?;
    }
    Ok(())
}

/// Interactive loop: one position per input line.
///
/// After a game ends the player is asked whether to play again; `y` resets
/// the board. `quit` or end of input stops the session.
#[instrument(skip_all)]
pub fn run_interactive<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    config: &DisplayConfig,
) -> Result<()> {
    let mut game = Game::with_observer(EventLog::new());
    game.observer_mut().drain();
    prompt(&game, config, out)?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        if command.eq_ignore_ascii_case("quit") {
            break;
        }

        if game.is_game_finished().is_some() {
            if command.eq_ignore_ascii_case("y") {
                game.reset();
                game.observer_mut().drain();
                prompt(&game, config, out)?;
                continue;
            }
            break;
        }

        let position = match command.parse::<Position>() {
            Ok(position) => position,
            Err(error) => {
                warn!(%error, "Unparseable position");
                writeln!(out, "Unknown position {:?}; use a label like top-left or 0-8", command)?;
                continue;
            }
        };

        game.play(position);
        let events = game.observer_mut().drain();
        if events.is_empty() {
            writeln!(out, "{} is taken", position)?;
            continue;
        }
        debug!(count = events.len(), "Move accepted");
        report(&events, config, out)?;

        match game.is_game_finished() {
            Some(_) => {
                writeln!(out, "{}", config.render(game.board()))?;
                writeln!(out, "Play again? [y/N]")?;
            }
            None => prompt(&game, config, out)?,
        }
    }
    Ok(())
}

fn prompt<O, W: Write>(game: &Game<O>, config: &DisplayConfig, out: &mut W) -> Result<()>
where
    O: tictactoe_engine::GameObserver,
{
    writeln!(out, "{}", config.render(game.board()))?;
    writeln!(out, "{} to play:", game.current_turn())?;
    Ok(())
}

fn report<W: Write>(events: &[GameEvent], config: &DisplayConfig, out: &mut W) -> Result<()> {
    for event in events {
        match event {
            GameEvent::CellUpdated { value, position } => {
                let symbol = match value {
                    CellValue::Cross => config.cross(),
                    CellValue::Circle => config.circle(),
                    CellValue::Empty => continue,
                };
                writeln!(out, "{} plays {}", symbol, position)?;
            }
            GameEvent::GameFinished { condition } => {
                writeln!(out, "{}", describe(Some(*condition)))?;
            }
            GameEvent::TurnChanged { .. } => {}
        }
    }
    Ok(())
}

fn describe(condition: Option<FinishCondition>) -> String {
    match condition {
        Some(FinishCondition::CrossWon) => "Game over: cross wins".to_string(),
        Some(FinishCondition::CircleWon) => "Game over: circle wins".to_string(),
        Some(FinishCondition::Tie) => "Game over: tie".to_string(),
        None => "Game in progress".to_string(),
    }
}
