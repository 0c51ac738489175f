//! Pieces and the players that own them.
//!
//! This module contains:
//! - `Color` for the two players
//! - `PieceKind` for the three kinds of piece
//! - `Pawn`, an immutable piece owned by one player

use serde::{Deserialize, Serialize};
use std::fmt;

/// Player color. Exactly two players take part in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Moves first by default (red on the terminal)
    First,
    /// Moves second by default (blue on the terminal)
    Second,
}

impl Color {
    /// Both colors in seating order
    pub const ALL: [Color; 2] = [Color::First, Color::Second];

    /// The other player
    pub const fn opponent(self) -> Self {
        match self {
            Color::First => Color::Second,
            Color::Second => Color::First,
        }
    }

    /// Index into per-player arrays
    pub const fn index(self) -> usize {
        match self {
            Color::First => 0,
            Color::Second => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::First => write!(f, "first player"),
            Color::Second => write!(f, "second player"),
        }
    }
}

/// The kind of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    /// Flat piece, can be covered by anything
    Road,
    /// Standing piece, can only be covered by a capstone crushing it
    Wall,
    /// Strongest piece, can never be covered
    Capstone,
}

impl PieceKind {
    /// All piece kinds
    pub const ALL: [PieceKind; 3] = [PieceKind::Road, PieceKind::Wall, PieceKind::Capstone];

    /// Whether another pawn may be dropped on top of a pawn of this kind
    pub const fn can_be_capped(self) -> bool {
        matches!(self, PieceKind::Road)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Road => write!(f, "road"),
            PieceKind::Wall => write!(f, "wall"),
            PieceKind::Capstone => write!(f, "capstone"),
        }
    }
}

/// A single piece on the board or in transit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pawn {
    pub kind: PieceKind,
    pub owner: Color,
}

impl Pawn {
    pub const fn new(kind: PieceKind, owner: Color) -> Self {
        Self { kind, owner }
    }

    pub const fn road(owner: Color) -> Self {
        Self::new(PieceKind::Road, owner)
    }

    pub const fn wall(owner: Color) -> Self {
        Self::new(PieceKind::Wall, owner)
    }

    pub const fn capstone(owner: Color) -> Self {
        Self::new(PieceKind::Capstone, owner)
    }

    pub const fn is_capstone(&self) -> bool {
        matches!(self.kind, PieceKind::Capstone)
    }
}

impl fmt::Display for Pawn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.owner, self.kind)
    }
}
