//! Core game state machine.
//!
//! `GameState` is the aggregate of board, reserves and turn order, built in
//! one place so every invariant holds before the first turn. `GameEngine`
//! drives it: take an action from an `ActionSource`, validate, execute,
//! advance the turn, repeat.

use crate::actions::{Action, GameEvent};
use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::executor;
use crate::inventory::Inventory;
use crate::pawn::Color;
use crate::rules::{self, Violation};
use crate::turn::TurnState;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Errors building or restoring a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid game snapshot: {0}")]
    Snapshot(String),
}

/// The complete game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Rules fixed at game start
    pub config: GameConfig,
    /// The game board
    pub board: Board,
    /// Reserves, indexed by `Color::index`
    pub inventories: [Inventory; 2],
    /// Current and next player
    pub turn: TurnState,
}

impl GameState {
    /// Create a new game: empty board, full reserves, first player to move
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let inventory = config.starting_inventory();
        Ok(Self {
            board: Board::new(config.board_size),
            inventories: [inventory; 2],
            turn: TurnState::new(config.first_player, config.turn_order),
            config,
        })
    }

    /// Create a game with the default 5x5 rules
    pub fn standard() -> Self {
        Self {
            config: GameConfig::default(),
            board: Board::standard(),
            inventories: [Inventory::default(); 2],
            turn: TurnState::new(Color::First, Default::default()),
        }
    }

    /// Restore a game from a JSON snapshot
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let state: GameState =
            serde_json::from_str(json).map_err(|e| GameError::Snapshot(e.to_string()))?;
        state.config.validate()?;
        if !state.board.is_consistent() || state.board.size() != state.config.board_size {
            return Err(GameError::Snapshot(format!(
                "board does not match configured size {}",
                state.config.board_size
            )));
        }
        for color in Color::ALL {
            let inv = state.inventory(color);
            if inv.capstones_remaining > state.config.capstones
                || inv.road_or_wall_remaining > state.config.road_or_wall_pieces
            {
                return Err(GameError::Snapshot(format!(
                    "{} holds more pieces in reserve than the configuration allows",
                    color
                )));
            }
            let accounted = state.pieces_accounted(color);
            if accounted != state.config.pieces_per_player() {
                return Err(GameError::Snapshot(format!(
                    "{} has {} pieces on the board and in reserve, expected {}",
                    color,
                    accounted,
                    state.config.pieces_per_player()
                )));
            }
        }
        Ok(state)
    }

    /// Serialize the whole game to JSON
    pub fn to_json(&self) -> Result<String, GameError> {
        serde_json::to_string(self).map_err(|e| GameError::Snapshot(e.to_string()))
    }

    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    pub fn current_player(&self) -> Color {
        self.turn.current_player
    }

    /// Reserve of a player
    pub fn inventory(&self, color: Color) -> &Inventory {
        &self.inventories[color.index()]
    }

    /// Pieces of a color on the board plus those still in reserve.
    ///
    /// Always equals `config.pieces_per_player()`.
    pub fn pieces_accounted(&self, color: Color) -> u32 {
        self.board.pieces_of(color) as u32 + self.inventory(color).total()
    }

    /// Check an action for the current player without applying it
    pub fn validate(&self, action: &Action) -> Result<(), Vec<Violation>> {
        let player = self.current_player();
        rules::validate(
            action,
            &self.board,
            self.inventory(player),
            player,
            self.config.carry_limit,
        )
    }

    /// Get all currently valid actions for the current player
    pub fn legal_actions(&self) -> Vec<Action> {
        let player = self.current_player();
        rules::legal_actions(
            &self.board,
            self.inventory(player),
            player,
            self.config.carry_limit,
        )
    }

    /// Validate, execute and end the turn.
    ///
    /// On rejection nothing changes and every violation is returned.
    pub fn apply_action(&mut self, action: &Action) -> Result<Vec<GameEvent>, Vec<Violation>> {
        self.validate(action)?;

        let player = self.current_player();
        let event = executor::execute(
            action,
            &mut self.board,
            &mut self.inventories[player.index()],
            player,
        );
        debug!(?player, ?action, "executed action");

        self.turn.advance();
        debug!(
            turn = self.turn.turn_index,
            next = ?self.turn.current_player,
            "turn advanced"
        );

        Ok(vec![
            event,
            GameEvent::TurnEnded {
                player,
                next_player: self.turn.current_player,
                turn_index: self.turn.turn_index,
            },
        ])
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::standard()
    }
}

/// Result of a finished or running game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Ongoing,
    Won(Color),
    Draw,
}

/// Decides whether a game is over.
///
/// Plug in road detection, flat counting or full-board checks here.
pub trait OutcomeRule {
    fn outcome(&self, state: &GameState) -> Outcome;
}

/// Never ends the game
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOutcome;

impl OutcomeRule for NoOutcome {
    fn outcome(&self, _state: &GameState) -> Outcome {
        Outcome::Ongoing
    }
}

/// Supplies actions to the engine: a prompt, a bot, a replay.
pub trait ActionSource {
    /// Next action for the current player, or `None` to stop the game.
    ///
    /// `rejected` holds the violations of the previous attempt when it was
    /// refused, so the source can report them and ask again.
    fn next_action(&mut self, state: &GameState, rejected: Option<&[Violation]>) -> Option<Action>;

    /// Called after each accepted action
    fn on_events(&mut self, _state: &GameState, _events: &[GameEvent]) {}
}

/// Drives a game through the validate, execute, advance loop
pub struct GameEngine {
    state: GameState,
    outcome_rule: Box<dyn OutcomeRule>,
}

impl GameEngine {
    pub fn new(state: GameState) -> Self {
        Self::with_outcome_rule(state, Box::new(NoOutcome))
    }

    pub fn with_outcome_rule(state: GameState, outcome_rule: Box<dyn OutcomeRule>) -> Self {
        Self {
            state,
            outcome_rule,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome_rule.outcome(&self.state)
    }

    /// Play one action for the current player
    pub fn submit(&mut self, action: &Action) -> Result<Vec<GameEvent>, Vec<Violation>> {
        let result = self.state.apply_action(action);
        if let Err(violations) = &result {
            debug!(
                player = ?self.state.current_player(),
                violations = violations.len(),
                "rejected action"
            );
        }
        result
    }

    /// Run turns until the source stops or the outcome rule ends the game
    pub fn run<S: ActionSource + ?Sized>(&mut self, source: &mut S) -> Outcome {
        info!(
            board_size = self.state.board_size(),
            first = ?self.state.current_player(),
            "game started"
        );

        let mut rejected: Option<Vec<Violation>> = None;
        loop {
            let outcome = self.outcome();
            if outcome != Outcome::Ongoing {
                info!(?outcome, "game over");
                return outcome;
            }

            let Some(action) = source.next_action(&self.state, rejected.as_deref()) else {
                info!(turns = self.state.turn.turn_index, "game stopped");
                return Outcome::Ongoing;
            };

            match self.submit(&action) {
                Ok(events) => {
                    rejected = None;
                    source.on_events(&self.state, &events);
                }
                Err(violations) => rejected = Some(violations),
            }
        }
    }
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TurnOrder;
    use crate::pawn::PieceKind;
    use crate::position::{Direction, Position};

    /// Replays a fixed list of actions, recording any rejections
    struct Script {
        actions: std::vec::IntoIter<Action>,
        rejections: Vec<Vec<Violation>>,
    }

    impl Script {
        fn new(actions: Vec<Action>) -> Self {
            Self {
                actions: actions.into_iter(),
                rejections: Vec::new(),
            }
        }
    }

    impl ActionSource for Script {
        fn next_action(
            &mut self,
            _state: &GameState,
            rejected: Option<&[Violation]>,
        ) -> Option<Action> {
            if let Some(v) = rejected {
                self.rejections.push(v.to_vec());
            }
            self.actions.next()
        }
    }

    #[test]
    fn test_new_game_is_empty() {
        let game = GameState::standard();
        assert_eq!(game.board_size(), 5);
        assert_eq!(game.board.empty_cells(), 25);
        assert_eq!(game.current_player(), Color::First);
        for color in Color::ALL {
            assert_eq!(*game.inventory(color), Inventory::new(1, 14));
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert_eq!(
            GameState::new(GameConfig::with_board_size(1)),
            Err(ConfigError::BoardSize(1))
        );
    }

    #[test]
    fn test_apply_action_advances_turn() {
        let mut game = GameState::standard();
        let events = game
            .apply_action(&Action::place(Position::new(0, 0), PieceKind::Road))
            .unwrap();

        assert_eq!(game.current_player(), Color::Second);
        assert_eq!(game.turn.turn_index, 1);
        assert_eq!(
            events.last(),
            Some(&GameEvent::TurnEnded {
                player: Color::First,
                next_player: Color::Second,
                turn_index: 1
            })
        );
    }

    #[test]
    fn test_rejected_action_changes_nothing() {
        let mut game = GameState::standard();
        let before = game.clone();
        let result = game.apply_action(&Action::move_stack(
            Position::new(0, 0),
            Direction::Right,
            vec![1],
        ));
        assert!(result.is_err());
        assert_eq!(game, before);
    }

    #[test]
    fn test_inventory_is_per_player() {
        let mut game = GameState::standard();
        game.apply_action(&Action::place(Position::new(0, 0), PieceKind::Capstone))
            .unwrap();
        assert_eq!(game.inventory(Color::First).capstones_remaining, 0);
        assert_eq!(game.inventory(Color::Second).capstones_remaining, 1);
    }

    #[test]
    fn test_json_snapshot_restores() {
        let mut game = GameState::new(GameConfig {
            turn_order: TurnOrder::RepeatAfterOpening,
            ..GameConfig::with_board_size(4)
        })
        .unwrap();
        game.apply_action(&Action::place(Position::new(1, 2), PieceKind::Wall))
            .unwrap();

        let restored = GameState::from_json(&game.to_json().unwrap()).unwrap();
        assert_eq!(restored, game);
    }

    #[test]
    fn test_from_json_rejects_inflated_reserve() {
        let mut game = GameState::standard();
        game.inventories[Color::Second.index()].road_or_wall_remaining = 20;
        assert!(matches!(
            GameState::from_json(&game.to_json().unwrap()),
            Err(GameError::Snapshot(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_missing_pieces() {
        let mut game = GameState::standard();
        game.apply_action(&Action::place(Position::new(0, 0), PieceKind::Road))
            .unwrap();
        // Reserve rolled back without lifting the pawn off the board
        game.inventories[Color::First.index()] = game.config.starting_inventory();
        assert!(matches!(
            GameState::from_json(&game.to_json().unwrap()),
            Err(GameError::Snapshot(_))
        ));

        game.board.stack_mut(Position::new(0, 0)).unwrap().pop();
        assert!(GameState::from_json(&game.to_json().unwrap()).is_ok());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            GameState::from_json("{}"),
            Err(GameError::Snapshot(_))
        ));
    }

    #[test]
    fn test_run_stops_when_source_is_exhausted() {
        let mut engine = GameEngine::new(GameState::standard());
        let mut script = Script::new(vec![
            Action::place(Position::new(0, 0), PieceKind::Road),
            // Occupied: rejected, the same player is asked again
            Action::place(Position::new(0, 0), PieceKind::Road),
            Action::place(Position::new(0, 1), PieceKind::Road),
        ]);

        let outcome = engine.run(&mut script);

        assert_eq!(outcome, Outcome::Ongoing);
        assert_eq!(engine.state().turn.turn_index, 2);
        assert_eq!(engine.state().current_player(), Color::First);
        assert_eq!(
            script.rejections,
            vec![vec![Violation::CellOccupied {
                position: Position::new(0, 0),
                height: 1
            }]]
        );
    }

    #[test]
    fn test_run_ends_on_outcome() {
        struct FirstPlacementWins;
        impl OutcomeRule for FirstPlacementWins {
            fn outcome(&self, state: &GameState) -> Outcome {
                match state.board.pieces_of(Color::First) {
                    0 => Outcome::Ongoing,
                    _ => Outcome::Won(Color::First),
                }
            }
        }

        let mut engine =
            GameEngine::with_outcome_rule(GameState::standard(), Box::new(FirstPlacementWins));
        let mut script = Script::new(vec![
            Action::place(Position::new(0, 0), PieceKind::Road),
            Action::place(Position::new(0, 1), PieceKind::Road),
        ]);

        assert_eq!(engine.run(&mut script), Outcome::Won(Color::First));
        assert_eq!(engine.state().turn.turn_index, 1);
    }
}
