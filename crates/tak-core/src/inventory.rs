//! Per-player piece reserves.
//!
//! Roads and walls come out of one shared pool of flat pieces, so placing
//! either kind decrements the same counter. Capstones have their own count.

use crate::pawn::PieceKind;
use serde::{Deserialize, Serialize};

/// Default number of capstones per player
pub const DEFAULT_CAPSTONES: u32 = 1;

/// Default number of road/wall pieces per player
pub const DEFAULT_ROAD_OR_WALL_PIECES: u32 = 14;

/// Pieces a player has not yet placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub capstones_remaining: u32,
    /// Shared pool for roads and walls
    pub road_or_wall_remaining: u32,
}

impl Inventory {
    pub fn new(capstones: u32, road_or_wall: u32) -> Self {
        Self {
            capstones_remaining: capstones,
            road_or_wall_remaining: road_or_wall,
        }
    }

    /// Count available for a kind of piece
    pub fn get(&self, kind: PieceKind) -> u32 {
        match kind {
            PieceKind::Capstone => self.capstones_remaining,
            PieceKind::Road | PieceKind::Wall => self.road_or_wall_remaining,
        }
    }

    pub fn has(&self, kind: PieceKind) -> bool {
        self.get(kind) > 0
    }

    /// Take one piece of the given kind out of the reserve.
    ///
    /// # Panics
    ///
    /// Panics if none remain; callers validate first.
    pub fn take(&mut self, kind: PieceKind) {
        let counter = match kind {
            PieceKind::Capstone => &mut self.capstones_remaining,
            PieceKind::Road | PieceKind::Wall => &mut self.road_or_wall_remaining,
        };
        *counter = counter
            .checked_sub(1)
            .unwrap_or_else(|| panic!("no {} pieces left to take", kind));
    }

    /// Total pieces left in reserve
    pub fn total(&self) -> u32 {
        self.capstones_remaining + self.road_or_wall_remaining
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPSTONES, DEFAULT_ROAD_OR_WALL_PIECES)
    }
}
