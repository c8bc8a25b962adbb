use crate::board::Board;
use crate::types::{Move, Side};

pub const DEFAULT_CORNER_BONUS: i32 = 20;
pub const DEFAULT_DANGER_PENALTY: i32 = 5;

/// Scores a candidate move by playing it on a throwaway copy of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicEvaluator {
    /// Added when the move takes a corner.
    pub corner_bonus: i32,
    /// Subtracted when the move lands on a diagonal neighbour of a corner.
    pub danger_penalty: i32,
}

impl Default for HeuristicEvaluator {
    fn default() -> Self {
        Self {
            corner_bonus: DEFAULT_CORNER_BONUS,
            danger_penalty: DEFAULT_DANGER_PENALTY,
        }
    }
}

impl HeuristicEvaluator {
    pub fn new(corner_bonus: i32, danger_penalty: i32) -> Self {
        Self {
            corner_bonus,
            danger_penalty,
        }
    }

    /// Value of `side` playing `mv`, from `side`'s point of view.
    pub fn evaluate(&self, board: &Board, mv: Move, side: Side) -> i32 {
        self.evaluate_from(board, mv, side, side)
    }

    /// Value of `mover` playing `mv`, from `perspective`'s point of view.
    ///
    /// The corner bonus and danger penalty belong to the mover, so they
    /// count against `perspective` when the opponent is moving. An illegal
    /// move is scored on the unchanged board.
    pub fn evaluate_from(&self, board: &Board, mv: Move, mover: Side, perspective: Side) -> i32 {
        let mut next = *board;
        next.apply_move(mv, mover);

        let adjustment = self.move_adjustment(mv);
        let score = next.positional_score(perspective);
        if mover == perspective {
            score + adjustment
        } else {
            score - adjustment
        }
    }

    fn move_adjustment(&self, mv: Move) -> i32 {
        match mv.position() {
            Some(pos) if pos.is_corner() => self.corner_bonus,
            Some(pos) if pos.is_x_square() => -self.danger_penalty,
            _ => 0,
        }
    }
}
