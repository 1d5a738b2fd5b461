//! 3x3 board storage.

use crate::position::Position;
use crate::types::CellValue;
use serde::{Deserialize, Serialize};

/// 3x3 tic-tac-toe board.
///
/// Every position always holds a value; a fresh board is all
/// [`CellValue::Empty`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [CellValue; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [CellValue::Empty; 9],
        }
    }

    /// Creates a board from cells in row-major order.
    pub fn from_cells(cells: [CellValue; 9]) -> Self {
        Self { cells }
    }

    /// Gets the value at the given position.
    pub fn get(&self, pos: Position) -> CellValue {
        self.cells[pos.to_index()]
    }

    /// Gets the value at a raw linear index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in 0-8. Every real cell is populated, so an
    /// out-of-range index is a caller bug and is not papered over.
    pub fn get_index(&self, index: usize) -> CellValue {
        assert!(index < 9, "board index {index} out of range 0-8");
        self.cells[index]
    }

    /// Sets the value at the given position.
    pub fn set(&mut self, pos: Position, value: CellValue) {
        self.cells[pos.to_index()] = value;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Positions currently holding [`CellValue::Empty`], in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Returns true when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of cells holding `value`.
    pub fn count(&self, value: CellValue) -> usize {
        self.cells.iter().filter(|cell| **cell == value).count()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[CellValue; 9] {
        &self.cells
    }

    /// Renders the board as three text rows using the given symbols.
    pub fn render(&self, cross: &str, circle: &str, empty: &str) -> String {
        let mut result = String::new();
        for (index, cell) in self.cells.iter().enumerate() {
            result.push_str(match cell {
                CellValue::Empty => empty,
                CellValue::Cross => cross,
                CellValue::Circle => circle,
            });
            match index % 3 {
                2 if index < 8 => result.push('\n'),
                2 => {}
                _ => result.push(' '),
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render("X", "O", "."))
    }
}
