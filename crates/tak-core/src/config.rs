//! Game configuration.
//!
//! Every rule constant the engine depends on lives in `GameConfig` so a
//! game can be set up with a different board or reserve without touching
//! the rules code.

use crate::board::DEFAULT_BOARD_SIZE;
use crate::inventory::{Inventory, DEFAULT_CAPSTONES, DEFAULT_ROAD_OR_WALL_PIECES};
use crate::pawn::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default maximum number of pawns carried in one move
pub const DEFAULT_CARRY_LIMIT: u32 = 5;

/// Smallest supported board
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest supported board
pub const MAX_BOARD_SIZE: usize = 8;

/// Largest reserve of any one piece type
pub const MAX_RESERVE_PIECES: u32 = 1_000;

/// How the next player is chosen after each turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TurnOrder {
    /// Players strictly alternate
    #[default]
    Alternating,
    /// After the opening turn the player who moves second is scheduled
    /// twice in a row, then play alternates.
    RepeatAfterOpening,
}

/// Errors in a game configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size {0} is outside the supported range {min}..={max}", min = MIN_BOARD_SIZE, max = MAX_BOARD_SIZE)]
    BoardSize(usize),

    #[error("players need at least one road/wall piece")]
    NoFlatPieces,

    #[error("{0} pieces of one type is more than the maximum of {max}", max = MAX_RESERVE_PIECES)]
    TooManyPieces(u32),

    #[error("carry limit must be at least 1")]
    ZeroCarryLimit,

    #[error("invalid config JSON: {0}")]
    Json(String),
}

/// Configuration fixed at the start of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    pub capstones: u32,
    pub road_or_wall_pieces: u32,
    pub carry_limit: u32,
    pub turn_order: TurnOrder,
    pub first_player: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            capstones: DEFAULT_CAPSTONES,
            road_or_wall_pieces: DEFAULT_ROAD_OR_WALL_PIECES,
            carry_limit: DEFAULT_CARRY_LIMIT,
            turn_order: TurnOrder::Alternating,
            first_player: Color::First,
        }
    }
}

impl GameConfig {
    /// Default rules on a board of a different dimension
    pub fn with_board_size(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::BoardSize(self.board_size));
        }
        if self.road_or_wall_pieces == 0 {
            return Err(ConfigError::NoFlatPieces);
        }
        if let Some(&count) = [self.capstones, self.road_or_wall_pieces]
            .iter()
            .find(|&&count| count > MAX_RESERVE_PIECES)
        {
            return Err(ConfigError::TooManyPieces(count));
        }
        if self.carry_limit == 0 {
            return Err(ConfigError::ZeroCarryLimit);
        }
        Ok(())
    }

    /// A full reserve as dealt at the start of the game
    pub fn starting_inventory(&self) -> Inventory {
        Inventory::new(self.capstones, self.road_or_wall_pieces)
    }

    /// Pieces each player owns over the whole game
    pub fn pieces_per_player(&self) -> u32 {
        self.capstones + self.road_or_wall_pieces
    }
}
