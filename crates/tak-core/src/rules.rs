//! Action legality.
//!
//! `validate` checks a proposed action against the board, the mover's
//! reserve and the configured limits without touching any state. Every
//! broken rule is reported, not just the first one found, so a caller can
//! show the player all of them at once.

use crate::actions::{drop_total, Action};
use crate::board::Board;
use crate::inventory::Inventory;
use crate::pawn::{Color, Pawn, PieceKind};
use crate::position::{Direction, Position};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A broken rule in a proposed action
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Violation {
    #[error("position {position} is out of bounds")]
    OutOfBounds { position: Position },

    #[error("position {position} is not empty, it holds {height} pieces")]
    CellOccupied { position: Position, height: usize },

    #[error("player is out of {kind} pieces")]
    InventoryExhausted { kind: PieceKind },

    #[error("tried to move a piece at {position} but it was empty")]
    EmptySource { position: Position },

    #[error("tried to move the stack at {position} as the {player}, but it is controlled by the other player")]
    NotOwner { position: Position, player: Color },

    #[error("tried to carry {requested} pieces from {position}, but there were only {available} pieces there")]
    InsufficientStack {
        position: Position,
        requested: u64,
        available: usize,
    },

    #[error("tried to carry {requested} pieces, more than the carrying capacity of {limit}")]
    CarryLimitExceeded { requested: u64, limit: u32 },

    #[error("every cell passed over must receive at least one piece; drop list: {drop_list:?}")]
    ZeroDrop { drop_list: Vec<u32> },

    #[error("cannot drop a piece onto the capstone at {position}")]
    LandOnCapstone { position: Position },

    #[error("cannot drop the {pawn} from {from} onto the wall at {position}, only capstones can crush walls")]
    CannotCrushWall {
        pawn: Pawn,
        from: Position,
        position: Position,
    },
}

/// Check an action for `player` against the current board and reserve.
///
/// Returns every rule the action breaks, or `Ok(())` if it may be executed.
pub fn validate(
    action: &Action,
    board: &Board,
    inventory: &Inventory,
    player: Color,
    carry_limit: u32,
) -> Result<(), Vec<Violation>> {
    let violations = match action {
        Action::Place {
            position,
            piece_kind,
        } => check_place(*position, *piece_kind, board, inventory),
        Action::Move {
            start,
            direction,
            drop_list,
        } => check_move(*start, *direction, drop_list, board, player, carry_limit),
    };

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check_place(
    position: Position,
    kind: PieceKind,
    board: &Board,
    inventory: &Inventory,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    match board.stack(position) {
        None => violations.push(Violation::OutOfBounds { position }),
        Some(stack) if !stack.is_empty() => violations.push(Violation::CellOccupied {
            position,
            height: stack.len(),
        }),
        Some(_) => {}
    }

    if !inventory.has(kind) {
        violations.push(Violation::InventoryExhausted { kind });
    }

    violations
}

fn check_move(
    start: Position,
    direction: Direction,
    drop_list: &[u32],
    board: &Board,
    player: Color,
    carry_limit: u32,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let source = board.stack(start);

    match source {
        None => violations.push(Violation::OutOfBounds { position: start }),
        Some(stack) if stack.is_empty() => {
            violations.push(Violation::EmptySource { position: start })
        }
        Some(stack) => {
            if stack.controlling_color() != Some(player) {
                violations.push(Violation::NotOwner {
                    position: start,
                    player,
                });
            }
        }
    }

    // Only report the landing cell when the start itself was on the board
    let distance = i32::try_from(drop_list.len()).unwrap_or(i32::MAX);
    let end = start.strafe(direction, distance);
    if source.is_some() && !board.contains(end) {
        violations.push(Violation::OutOfBounds { position: end });
    }

    let requested = drop_total(drop_list);
    if let Some(stack) = source.filter(|s| !s.is_empty()) {
        if requested > stack.len() as u64 {
            violations.push(Violation::InsufficientStack {
                position: start,
                requested,
                available: stack.len(),
            });
        }
    }

    if requested > u64::from(carry_limit) {
        violations.push(Violation::CarryLimitExceeded {
            requested,
            limit: carry_limit,
        });
    }

    if drop_list.is_empty() || drop_list.contains(&0) {
        violations.push(Violation::ZeroDrop {
            drop_list: drop_list.to_vec(),
        });
    }

    let mut dropped_before = 0usize;
    for (step, &drop) in drop_list.iter().enumerate() {
        let position = start.strafe(direction, i32::try_from(step + 1).unwrap_or(i32::MAX));
        let Some(target) = board.stack(position) else {
            break;
        };

        match target.top().map(|p| p.kind) {
            Some(PieceKind::Capstone) => violations.push(Violation::LandOnCapstone { position }),
            Some(PieceKind::Wall) => {
                // The pawn dropped first at this step, counted from the top of the carry
                if let Some(pawn) = source.and_then(|s| s.peek(dropped_before)) {
                    if !pawn.is_capstone() {
                        violations.push(Violation::CannotCrushWall {
                            pawn: *pawn,
                            from: start,
                            position,
                        });
                    }
                }
            }
            _ => {}
        }

        dropped_before = dropped_before.saturating_add(drop as usize);
    }

    violations
}

/// Every action `player` may legally take.
///
/// Placements come first in row-major order, then moves.
pub fn legal_actions(
    board: &Board,
    inventory: &Inventory,
    player: Color,
    carry_limit: u32,
) -> Vec<Action> {
    let mut actions = Vec::new();

    for (position, stack) in board.iter() {
        if !stack.is_empty() {
            continue;
        }
        for kind in PieceKind::ALL {
            if inventory.has(kind) {
                actions.push(Action::place(position, kind));
            }
        }
    }

    for (start, stack) in board.iter() {
        if stack.controlling_color() != Some(player) {
            continue;
        }
        let max_carry = (stack.len() as u32).min(carry_limit);
        for direction in Direction::ALL {
            for carry in 1..=max_carry {
                for drop_list in drop_lists(carry, board.size() as u32) {
                    let action = Action::move_stack(start, direction, drop_list);
                    if validate(&action, board, inventory, player, carry_limit).is_ok() {
                        actions.push(action);
                    }
                }
            }
        }
    }

    actions
}

/// All ways of splitting `carry` pawns into at most `max_steps` positive drops
fn drop_lists(carry: u32, max_steps: u32) -> Vec<Vec<u32>> {
    fn split(remaining: u32, steps_left: u32, current: &mut Vec<u32>, out: &mut Vec<Vec<u32>>) {
        if remaining == 0 {
            out.push(current.clone());
            return;
        }
        if steps_left == 0 {
            return;
        }
        for first in 1..=remaining {
            current.push(first);
            split(remaining - first, steps_left - 1, current, out);
            current.pop();
        }
    }

    let mut out = Vec::new();
    split(carry, max_steps, &mut Vec::new(), &mut out);
    out
}
