//! Applying validated actions to the board and reserve.
//!
//! Nothing here re-checks legality. Executing an action that `validate`
//! would reject is a caller bug and panics.

use crate::actions::{Action, GameEvent};
use crate::board::Board;
use crate::inventory::Inventory;
use crate::pawn::{Color, Pawn};
use tracing::trace;

/// Apply an already validated action for `player`.
///
/// # Panics
///
/// Panics if the action references a cell off the board, picks up more
/// pawns than the source stack holds, or places a piece the reserve has
/// run out of.
pub fn execute(
    action: &Action,
    board: &mut Board,
    inventory: &mut Inventory,
    player: Color,
) -> GameEvent {
    match action {
        Action::Place {
            position,
            piece_kind,
        } => {
            let pawn = Pawn::new(*piece_kind, player);
            board
                .stack_mut(*position)
                .expect("placement validated on the board")
                .push(pawn);
            inventory.take(*piece_kind);

            GameEvent::PiecePlaced {
                player,
                pawn,
                position: *position,
            }
        }

        Action::Move {
            start,
            direction,
            drop_list,
        } => {
            let total = usize::try_from(action.carried()).expect("carry validated against the stack");
            // Top of the source stack first
            let carried = board
                .stack_mut(*start)
                .expect("move validated on the board")
                .take_top(total);

            let mut remaining = carried.as_slice();
            let mut drops = Vec::with_capacity(drop_list.len());
            for (step, &count) in drop_list.iter().enumerate() {
                let position = start.strafe(*direction, step as i32 + 1);
                let (deposit, rest) = remaining.split_at(count as usize);
                remaining = rest;

                let target = board
                    .stack_mut(position)
                    .expect("move destination validated on the board");
                // Keep the carried order: the pawn nearest the old top stays highest
                for pawn in deposit.iter().rev() {
                    target.push(*pawn);
                }
                trace!(%position, count, "dropped pawns");
                drops.push((position, count));
            }

            GameEvent::StackMoved {
                player,
                from: *start,
                direction: *direction,
                drops,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pawn::PieceKind;
    use crate::position::{Direction, Position};
    use crate::stack::Stack;

    #[test]
    fn test_place_decrements_shared_pool() {
        let mut board = Board::standard();
        let mut inv = Inventory::default();

        execute(
            &Action::place(Position::new(0, 0), PieceKind::Wall),
            &mut board,
            &mut inv,
            Color::First,
        );
        execute(
            &Action::place(Position::new(0, 1), PieceKind::Road),
            &mut board,
            &mut inv,
            Color::First,
        );

        assert_eq!(inv.road_or_wall_remaining, 12);
        assert_eq!(inv.capstones_remaining, 1);
        assert_eq!(
            board.stack(Position::new(0, 0)).unwrap().top(),
            Some(&Pawn::wall(Color::First))
        );
    }

    #[test]
    fn test_place_capstone() {
        let mut board = Board::standard();
        let mut inv = Inventory::default();
        let event = execute(
            &Action::place(Position::new(2, 2), PieceKind::Capstone),
            &mut board,
            &mut inv,
            Color::Second,
        );

        assert_eq!(inv.capstones_remaining, 0);
        assert_eq!(inv.road_or_wall_remaining, 14);
        assert_eq!(
            event,
            GameEvent::PiecePlaced {
                player: Color::Second,
                pawn: Pawn::capstone(Color::Second),
                position: Position::new(2, 2)
            }
        );
    }

    #[test]
    fn test_move_preserves_carried_order() {
        let a = Pawn::road(Color::Second);
        let b = Pawn::road(Color::First);
        let c = Pawn::wall(Color::Second);
        let d = Pawn::capstone(Color::First);

        let mut board = Board::standard();
        *board.stack_mut(Position::new(0, 0)).unwrap() = Stack::from_pawns(vec![a, b, c, d]);
        let mut inv = Inventory::default();
        let before = inv;

        let event = execute(
            &Action::move_stack(Position::new(0, 0), Direction::Right, vec![2, 1]),
            &mut board,
            &mut inv,
            Color::First,
        );

        // Carried top first: d, c, b. The first step takes d and c with d on top
        assert_eq!(board.stack(Position::new(0, 0)).unwrap().pawns(), &[a]);
        assert_eq!(board.stack(Position::new(0, 1)).unwrap().pawns(), &[c, d]);
        assert_eq!(board.stack(Position::new(0, 2)).unwrap().pawns(), &[b]);
        assert_eq!(inv, before);
        assert_eq!(
            event,
            GameEvent::StackMoved {
                player: Color::First,
                from: Position::new(0, 0),
                direction: Direction::Right,
                drops: vec![(Position::new(0, 1), 2), (Position::new(0, 2), 1)],
            }
        );
    }

    #[test]
    fn test_move_onto_existing_stack() {
        let mut board = Board::standard();
        *board.stack_mut(Position::new(3, 1)).unwrap() =
            Stack::from_pawns(vec![Pawn::road(Color::First)]);
        *board.stack_mut(Position::new(2, 1)).unwrap() =
            Stack::from_pawns(vec![Pawn::road(Color::Second)]);

        execute(
            &Action::move_stack(Position::new(3, 1), Direction::Up, vec![1]),
            &mut board,
            &mut Inventory::default(),
            Color::First,
        );

        assert!(board.stack(Position::new(3, 1)).unwrap().is_empty());
        let target = board.stack(Position::new(2, 1)).unwrap();
        assert_eq!(target.len(), 2);
        assert_eq!(target.controlling_color(), Some(Color::First));
    }

    #[test]
    fn test_multi_drop_crush_keeps_capstone_on_top() {
        let road = Pawn::road(Color::First);
        let cap = Pawn::capstone(Color::First);
        let wall = Pawn::wall(Color::Second);

        let mut board = Board::standard();
        *board.stack_mut(Position::new(0, 0)).unwrap() = Stack::from_pawns(vec![road, cap]);
        *board.stack_mut(Position::new(0, 1)).unwrap() = Stack::from_pawns(vec![wall]);
        let mut inv = Inventory::default();

        let action = Action::move_stack(Position::new(0, 0), Direction::Right, vec![2]);
        assert_eq!(
            crate::rules::validate(&action, &board, &inv, Color::First, 5),
            Ok(())
        );
        execute(&action, &mut board, &mut inv, Color::First);

        // The road lands directly on the wall, the capstone stays on top
        assert!(board.stack(Position::new(0, 0)).unwrap().is_empty());
        assert_eq!(
            board.stack(Position::new(0, 1)).unwrap().pawns(),
            &[wall, road, cap]
        );
    }

    #[test]
    #[should_panic]
    fn test_unvalidated_move_panics() {
        let mut board = Board::standard();
        execute(
            &Action::move_stack(Position::new(0, 0), Direction::Right, vec![1]),
            &mut board,
            &mut Inventory::default(),
            Color::First,
        );
    }
}
