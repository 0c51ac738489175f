//! Whose turn it is.

use crate::config::TurnOrder;
use crate::pawn::Color;
use serde::{Deserialize, Serialize};

/// Current and upcoming player plus the number of completed turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    pub current_player: Color,
    pub next_player: Color,
    /// Turns completed so far (starts at 0)
    pub turn_index: u32,
    pub order: TurnOrder,
}

impl TurnState {
    pub fn new(first_player: Color, order: TurnOrder) -> Self {
        Self {
            current_player: first_player,
            next_player: first_player.opponent(),
            turn_index: 0,
            order,
        }
    }

    /// Hand the turn to the scheduled player and schedule the one after.
    pub fn advance(&mut self) {
        self.current_player = self.next_player;
        self.turn_index += 1;
        self.next_player = match self.order {
            TurnOrder::RepeatAfterOpening if self.turn_index == 1 => self.current_player,
            _ => self.current_player.opponent(),
        };
    }
}
