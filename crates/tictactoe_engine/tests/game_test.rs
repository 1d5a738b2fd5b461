//! Tests for game rules: turn order, move validation, finish detection.

use std::collections::HashSet;
use tictactoe_engine::{CellValue, Column, FinishCondition, Game, Position, Row, Turn};

fn pos(row: Row, column: Column) -> Position {
    Position::new(row, column)
}

fn play_all(game: &mut Game, moves: &[Position]) {
    for position in moves {
        game.play(*position);
    }
}

fn tie_sequence() -> Vec<Position> {
    vec![
        pos(Row::Top, Column::Left),
        pos(Row::Top, Column::Middle),
        pos(Row::Top, Column::Right),
        pos(Row::Middle, Column::Middle),
        pos(Row::Middle, Column::Left),
        pos(Row::Middle, Column::Right),
        pos(Row::Bottom, Column::Middle),
        pos(Row::Bottom, Column::Left),
        pos(Row::Bottom, Column::Right),
    ]
}

fn cross_wins_left_column() -> Vec<Position> {
    vec![
        pos(Row::Top, Column::Left),
        pos(Row::Top, Column::Middle),
        pos(Row::Middle, Column::Left),
        pos(Row::Middle, Column::Middle),
        pos(Row::Bottom, Column::Left),
    ]
}

#[test]
fn test_game_init() {
    let game = Game::new();
    for position in Position::ALL {
        assert_eq!(game.value(position), CellValue::Empty);
    }
    assert_eq!(game.current_turn(), Turn::Cross);
    assert_eq!(game.is_game_finished(), None);
}

#[test]
fn test_empty_positions_track_moves() {
    let mut game = Game::new();
    let mut expected: HashSet<Position> = Position::ALL.into_iter().collect();

    for played in [
        pos(Row::Top, Column::Left),
        pos(Row::Top, Column::Middle),
        pos(Row::Middle, Column::Middle),
        pos(Row::Middle, Column::Right),
    ] {
        let actual: HashSet<Position> = game.empty_positions().into_iter().collect();
        assert_eq!(actual, expected);

        game.play(played);
        expected.remove(&played);
    }

    let actual: HashSet<Position> = game.empty_positions().into_iter().collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_each_move_removes_one_empty_position() {
    let mut game = Game::new();
    for (played, position) in tie_sequence().into_iter().enumerate() {
        assert_eq!(game.empty_positions().len(), 9 - played);
        game.play(position);
        assert_eq!(game.empty_positions().len(), 9 - played - 1);
    }
}

#[test]
fn test_turn_taking() {
    let mut game = Game::new();
    assert_eq!(game.empty_positions().len(), 9);
    assert_eq!(game.current_turn(), Turn::Cross);

    game.play(pos(Row::Top, Column::Left));
    assert_eq!(game.empty_positions().len(), 8);
    assert_eq!(game.current_turn(), Turn::Circle);
    assert_eq!(game.value(pos(Row::Top, Column::Left)), CellValue::Cross);

    game.play(pos(Row::Top, Column::Right));
    assert_eq!(game.empty_positions().len(), 7);
    assert_eq!(game.current_turn(), Turn::Cross);
    assert_eq!(game.value(pos(Row::Top, Column::Right)), CellValue::Circle);
}

#[test]
fn test_turn_alternates_until_finish() {
    let mut game = Game::new();
    let mut expected = Turn::Cross;
    for position in tie_sequence() {
        assert_eq!(game.current_turn(), expected);
        game.play(position);
        if game.is_game_finished().is_none() {
            expected = expected.opponent();
        }
    }
    // The last move was cross's and ended the game, so cross keeps the turn.
    assert_eq!(game.current_turn(), Turn::Cross);
}

#[test]
fn test_occupied_position_is_ignored() {
    let mut game = Game::new();
    game.play(pos(Row::Top, Column::Left));
    let board = game.board().clone();

    game.play(pos(Row::Top, Column::Left));
    assert_eq!(game.empty_positions().len(), 8);
    assert_eq!(game.current_turn(), Turn::Circle);
    assert_eq!(game.board(), &board);
    assert_eq!(game.value(pos(Row::Top, Column::Left)), CellValue::Cross);
}

#[test]
fn test_reset() {
    let mut game = Game::new();
    game.play(pos(Row::Top, Column::Left));
    game.play(pos(Row::Top, Column::Right));
    game.reset();
    assert_eq!(game.empty_positions().len(), 9);
    assert_eq!(game.current_turn(), Turn::Cross);

    game.reset();
    assert_eq!(game.empty_positions().len(), 9);
    assert_eq!(game.current_turn(), Turn::Cross);
}

#[test]
fn test_not_finished_before_five_moves() {
    let mut game = Game::new();
    for position in cross_wins_left_column().into_iter().take(4) {
        assert_eq!(game.is_game_finished(), None);
        game.play(position);
    }
    assert_eq!(game.is_game_finished(), None);
}

#[test]
fn test_cross_wins_left_column() {
    let mut game = Game::new();
    play_all(&mut game, &cross_wins_left_column());
    assert_eq!(game.is_game_finished(), Some(FinishCondition::CrossWon));
    assert_eq!(game.current_turn(), Turn::Cross);

    // Further moves are no-ops.
    let board = game.board().clone();
    game.play(pos(Row::Bottom, Column::Right));
    game.play(pos(Row::Middle, Column::Right));
    assert_eq!(game.board(), &board);
    assert_eq!(game.current_turn(), Turn::Cross);
    assert_eq!(game.empty_positions().len(), 4);
    assert_eq!(game.is_game_finished(), Some(FinishCondition::CrossWon));
}

#[test]
fn test_cross_wins_top_row() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &[
            pos(Row::Top, Column::Left),
            pos(Row::Bottom, Column::Left),
            pos(Row::Top, Column::Middle),
            pos(Row::Bottom, Column::Middle),
        ],
    );
    assert_eq!(game.is_game_finished(), None);

    game.play(pos(Row::Top, Column::Right));
    assert_eq!(game.is_game_finished(), Some(FinishCondition::CrossWon));

    game.play(pos(Row::Bottom, Column::Right));
    assert_eq!(game.is_game_finished(), Some(FinishCondition::CrossWon));
    assert_eq!(game.value(pos(Row::Bottom, Column::Right)), CellValue::Empty);
}

#[test]
fn test_circle_wins_bottom_row() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &[
            pos(Row::Top, Column::Left),
            pos(Row::Bottom, Column::Left),
            pos(Row::Top, Column::Middle),
            pos(Row::Bottom, Column::Middle),
            pos(Row::Middle, Column::Middle),
        ],
    );
    assert_eq!(game.is_game_finished(), None);

    game.play(pos(Row::Bottom, Column::Right));
    assert_eq!(game.is_game_finished(), Some(FinishCondition::CircleWon));
    assert_eq!(game.current_turn(), Turn::Circle);
}

#[test]
fn test_circle_wins_diagonal() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &[
            pos(Row::Top, Column::Middle),
            pos(Row::Top, Column::Right),
            pos(Row::Middle, Column::Left),
            pos(Row::Middle, Column::Middle),
            pos(Row::Bottom, Column::Right),
            pos(Row::Bottom, Column::Left),
        ],
    );
    assert_eq!(game.is_game_finished(), Some(FinishCondition::CircleWon));
}

#[test]
fn test_tie() {
    let mut game = Game::new();
    let moves = tie_sequence();
    for position in &moves[..8] {
        game.play(*position);
        assert_eq!(game.is_game_finished(), None);
    }
    game.play(moves[8]);
    assert_eq!(game.is_game_finished(), Some(FinishCondition::Tie));
    assert!(game.empty_positions().is_empty());
}

#[test]
fn test_reset_after_finish() {
    let mut game = Game::new();
    play_all(&mut game, &cross_wins_left_column());
    assert_eq!(game.is_game_finished(), Some(FinishCondition::CrossWon));

    game.reset();
    assert_eq!(game.is_game_finished(), None);
    assert!(Position::ALL.iter().all(|p| game.value(*p) == CellValue::Empty));
    assert_eq!(game.current_turn(), Turn::Cross);

    // Playable again.
    game.play(pos(Row::Middle, Column::Middle));
    assert_eq!(game.value(pos(Row::Middle, Column::Middle)), CellValue::Cross);
}

#[test]
fn test_is_game_finished_is_pure() {
    let mut game = Game::new();
    play_all(&mut game, &cross_wins_left_column());
    let board = game.board().clone();
    for _ in 0..3 {
        assert_eq!(game.is_game_finished(), Some(FinishCondition::CrossWon));
    }
    assert_eq!(game.board(), &board);
}
