//! Board coordinates.

use crate::error::PositionError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Horizontal band of the board, top to bottom.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, derive_more::Display,
)]
pub enum Row {
    /// First row.
    #[display("top")]
    Top = 0,
    /// Second row.
    #[display("middle")]
    Middle = 1,
    /// Third row.
    #[display("bottom")]
    Bottom = 2,
}

/// Vertical band of the board, left to right.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, derive_more::Display,
)]
pub enum Column {
    /// First column.
    #[display("left")]
    Left = 0,
    /// Second column.
    #[display("middle")]
    Middle = 1,
    /// Third column.
    #[display("right")]
    Right = 2,
}

impl Row {
    fn from_index(index: usize) -> Option<Self> {
        Row::iter().nth(index)
    }
}

impl Column {
    fn from_index(index: usize) -> Option<Self> {
        Column::iter().nth(index)
    }
}

/// One of the 9 cells of the board, addressed by row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    row: Row,
    column: Column,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::new(Row::Top, Column::Left),
        Position::new(Row::Top, Column::Middle),
        Position::new(Row::Top, Column::Right),
        Position::new(Row::Middle, Column::Left),
        Position::new(Row::Middle, Column::Middle),
        Position::new(Row::Middle, Column::Right),
        Position::new(Row::Bottom, Column::Left),
        Position::new(Row::Bottom, Column::Middle),
        Position::new(Row::Bottom, Column::Right),
    ];

    /// Creates a position.
    pub const fn new(row: Row, column: Column) -> Self {
        Self { row, column }
    }

    /// Row of this position.
    pub fn row(self) -> Row {
        self.row
    }

    /// Column of this position.
    pub fn column(self) -> Column {
        self.column
    }

    /// Linear board index (0-8), row-major.
    pub const fn to_index(self) -> usize {
        self.row as usize * 3 + self.column as usize
    }

    /// Creates a position from a linear board index. `None` past 8.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= 9 {
            return None;
        }
        Some(Self::new(
            Row::from_index(index / 3)?,
            Column::from_index(index % 3)?,
        ))
    }

    /// Human-readable label, e.g. `top-left`.
    pub fn label(self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.row, self.column)
    }
}

impl FromStr for Position {
    type Err = PositionError;

    /// Parses a label (`top-left`, `Middle Right`, `bottom_middle`) or an index (0-8).
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if let Ok(index) = input.parse::<usize>() {
            return Self::from_index(index)
                .ok_or_else(|| PositionError::new(format!("Index {} out of range 0-8", index)));
        }

        let normalized = input.to_lowercase().replace([' ', '_'], "-");
        Self::ALL
            .into_iter()
            .find(|pos| pos.label() == normalized)
            .ok_or_else(|| PositionError::new(format!("Unknown position: {:?}", input)))
    }
}
