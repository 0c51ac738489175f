//! Game board representation.
//!
//! The board is a fixed N×N grid holding one `Stack` per cell. Cells are
//! created once when the board is built and never added or removed.

use crate::pawn::Color;
use crate::position::Position;
use crate::stack::Stack;
use serde::{Deserialize, Serialize};

/// Default board dimension
pub const DEFAULT_BOARD_SIZE: usize = 5;

/// The game board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// Row-major cells
    cells: Vec<Stack>,
}

impl Board {
    /// Create an empty board of the given dimension
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Stack::new(); size * size],
        }
    }

    /// Create an empty board of the default dimension
    pub fn standard() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }

    /// Board dimension
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.in_bounds(self.size)
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.row as usize * self.size + pos.col as usize)
        } else {
            None
        }
    }

    /// Get the stack at a position
    pub fn stack(&self, pos: Position) -> Option<&Stack> {
        self.index(pos).map(|i| &self.cells[i])
    }

    /// Get a mutable stack at a position
    pub fn stack_mut(&mut self, pos: Position) -> Option<&mut Stack> {
        self.index(pos).map(move |i| &mut self.cells[i])
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size as i32;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Every cell with its position, row-major
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Stack)> {
        self.positions().zip(self.cells.iter())
    }

    /// Total pawns on the board owned by a color
    pub fn pieces_of(&self, color: Color) -> usize {
        self.cells.iter().map(|s| s.count_owned(color)).sum()
    }

    /// Whether the cell storage matches the dimension (deserialized boards)
    pub fn is_consistent(&self) -> bool {
        self.cells.len() == self.size * self.size
    }

    /// Number of cells with no pawns
    pub fn empty_cells(&self) -> usize {
        self.cells.iter().filter(|s| s.is_empty()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
