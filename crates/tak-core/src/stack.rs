//! A single board cell: an ordered pile of pawns.

use crate::pawn::{Color, Pawn};
use serde::{Deserialize, Serialize};

/// Pawns stacked on one cell, stored bottom to top.
///
/// Pawns are only ever added to or removed from the top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    pawns: Vec<Pawn>,
}

impl Stack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stack from pawns listed bottom to top
    pub fn from_pawns(pawns: Vec<Pawn>) -> Self {
        Self { pawns }
    }

    pub fn len(&self) -> usize {
        self.pawns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pawns.is_empty()
    }

    /// Pawns from bottom to top
    pub fn pawns(&self) -> &[Pawn] {
        &self.pawns
    }

    /// The pawn `depth` places below the top (0 is the top itself)
    pub fn peek(&self, depth: usize) -> Option<&Pawn> {
        self.pawns.len().checked_sub(depth + 1).map(|i| &self.pawns[i])
    }

    pub fn top(&self) -> Option<&Pawn> {
        self.peek(0)
    }

    /// Owner of the top pawn, if any
    pub fn controlling_color(&self) -> Option<Color> {
        self.top().map(|p| p.owner)
    }

    /// Whether a pawn may be dropped here without crushing anything
    pub fn can_be_capped(&self) -> bool {
        self.top().map_or(true, |p| p.kind.can_be_capped())
    }

    pub fn push(&mut self, pawn: Pawn) {
        self.pawns.push(pawn);
    }

    pub fn pop(&mut self) -> Option<Pawn> {
        self.pawns.pop()
    }

    /// Remove the top `count` pawns, returned top first.
    ///
    /// # Panics
    ///
    /// Panics if the stack holds fewer than `count` pawns.
    pub fn take_top(&mut self, count: usize) -> Vec<Pawn> {
        assert!(
            count <= self.pawns.len(),
            "cannot take {} pawns from a stack of {}",
            count,
            self.pawns.len()
        );
        let mut taken = self.pawns.split_off(self.pawns.len() - count);
        taken.reverse();
        taken
    }

    /// Number of pawns in this stack owned by `color`
    pub fn count_owned(&self, color: Color) -> usize {
        self.pawns.iter().filter(|p| p.owner == color).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pawn::PieceKind;

    fn sample() -> Stack {
        Stack::from_pawns(vec![
            Pawn::road(Color::Second),
            Pawn::road(Color::First),
            Pawn::wall(Color::First),
        ])
    }

    #[test]
    fn test_peek_from_top() {
        let stack = sample();
        assert_eq!(stack.peek(0), Some(&Pawn::wall(Color::First)));
        assert_eq!(stack.peek(2), Some(&Pawn::road(Color::Second)));
        assert_eq!(stack.peek(3), None);
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let stack = sample();
        let before = stack.clone();
        for depth in 0..5 {
            let _ = stack.peek(depth);
        }
        assert_eq!(stack, before);
    }

    #[test]
    fn test_controlling_color() {
        assert_eq!(Stack::new().controlling_color(), None);
        assert_eq!(sample().controlling_color(), Some(Color::First));
    }

    #[test]
    fn test_can_be_capped() {
        assert!(Stack::new().can_be_capped());
        assert!(!sample().can_be_capped());

        let mut stack = sample();
        stack.pop();
        assert!(stack.can_be_capped());
        stack.push(Pawn::new(PieceKind::Capstone, Color::Second));
        assert!(!stack.can_be_capped());
    }

    #[test]
    fn test_take_top_returns_top_first() {
        let mut stack = sample();
        let taken = stack.take_top(2);
        assert_eq!(taken, vec![Pawn::wall(Color::First), Pawn::road(Color::First)]);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    #[should_panic]
    fn test_take_top_more_than_held() {
        sample().take_top(4);
    }
}
