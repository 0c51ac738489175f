//! Actions that players can take.
//!
//! This module defines the two possible actions in the game and the events
//! that result from executing them.

use crate::pawn::{Color, Pawn, PieceKind};
use crate::position::{Direction, Position};
use serde::{Deserialize, Serialize};

/// A player's action for one turn
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place a piece from the reserve onto an empty cell
    Place {
        position: Position,
        piece_kind: PieceKind,
    },
    /// Pick up pawns from the top of a stack and drop them in a straight line.
    ///
    /// `drop_list[i]` pawns are deposited on the cell `i + 1` steps away, so
    /// its length is the distance travelled and its sum the number carried.
    Move {
        start: Position,
        direction: Direction,
        drop_list: Vec<u32>,
    },
}

impl Action {
    pub fn place(position: Position, piece_kind: PieceKind) -> Self {
        Action::Place {
            position,
            piece_kind,
        }
    }

    pub fn move_stack(start: Position, direction: Direction, drop_list: Vec<u32>) -> Self {
        Action::Move {
            start,
            direction,
            drop_list,
        }
    }

    /// Number of pawns picked up (zero for placements)
    pub fn carried(&self) -> u64 {
        match self {
            Action::Place { .. } => 0,
            Action::Move { drop_list, .. } => drop_total(drop_list),
        }
    }
}

/// Sum of a drop list, saturating instead of wrapping
pub(crate) fn drop_total(drop_list: &[u32]) -> u64 {
    drop_list
        .iter()
        .fold(0u64, |total, &drop| total.saturating_add(u64::from(drop)))
}

/// Events that occur as a result of actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A piece was placed from the reserve
    PiecePlaced { player: Color, pawn: Pawn, position: Position },

    /// Pawns were carried from one cell and dropped along a line
    StackMoved {
        player: Color,
        from: Position,
        direction: Direction,
        /// `(cell, pawns dropped there)` for each step
        drops: Vec<(Position, u32)>,
    },

    /// Turn ended
    TurnEnded {
        player: Color,
        next_player: Color,
        turn_index: u32,
    },
}
