//! Tak-style stack game engine
//!
//! This crate provides the core game logic, including:
//! - Pawns, stacks and the N×N board
//! - Per-player piece reserves
//! - Action validation that reports every broken rule at once
//! - Action execution and turn order
//!
//! # Architecture
//!
//! The engine does no I/O. Parsing player commands and drawing the board
//! belong to the caller, which hands the engine structured `Action`s and
//! reads state back through accessors.
//!
//! # Modules
//!
//! - [`pawn`]: Colors, piece kinds and pawns
//! - [`position`]: Grid coordinates and directions
//! - [`stack`]: A single cell's pile of pawns
//! - [`board`]: The grid of stacks
//! - [`inventory`]: Pieces a player has yet to place
//! - [`actions`]: Player actions and resulting events
//! - [`config`]: Board size, reserves, carry limit, turn order
//! - [`rules`]: Validation and legal action enumeration
//! - [`executor`]: Applying validated actions
//! - [`turn`]: Turn order state
//! - [`game`]: Game state aggregate and engine loop
//! - [`bot`]: Random legal-move player

pub mod actions;
pub mod board;
pub mod bot;
pub mod config;
pub mod executor;
pub mod game;
pub mod inventory;
pub mod pawn;
pub mod position;
pub mod rules;
pub mod stack;
pub mod turn;

// Re-export commonly used types
pub use actions::{Action, GameEvent};
pub use board::Board;
pub use bot::Bot;
pub use config::{ConfigError, GameConfig, TurnOrder};
pub use game::{ActionSource, GameEngine, GameError, GameState, NoOutcome, Outcome, OutcomeRule};
pub use inventory::Inventory;
pub use pawn::{Color, Pawn, PieceKind};
pub use position::{Direction, Position};
pub use rules::{legal_actions, validate, Violation};
pub use stack::Stack;
pub use turn::TurnState;
