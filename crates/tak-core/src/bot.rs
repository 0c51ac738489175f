//! AI bot player.
//!
//! The bot plays a uniformly random legal action. It is seedable so games
//! against it, and the property tests that use it, are reproducible.

use crate::actions::Action;
use crate::game::{ActionSource, GameState};
use crate::pawn::Color;
use crate::rules::Violation;
use rand::prelude::*;

/// A bot player that picks random legal actions
#[derive(Debug)]
pub struct Bot {
    pub color: Color,
    rng: StdRng,
}

impl Bot {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(color: Color, seed: u64) -> Self {
        Self {
            color,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Choose an action from the valid actions, `None` if there are none
    pub fn choose_action(&mut self, game: &GameState) -> Option<Action> {
        game.legal_actions().choose(&mut self.rng).cloned()
    }
}

impl ActionSource for Bot {
    /// Plays whoever is to move, so one bot can drive both sides of a game
    fn next_action(&mut self, state: &GameState, _rejected: Option<&[Violation]>) -> Option<Action> {
        self.choose_action(state)
    }
}
