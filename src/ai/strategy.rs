use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;
use tracing::trace;

use crate::ai::search::Searcher;
use crate::board::Board;
use crate::eval::HeuristicEvaluator;
use crate::types::{Move, Position, Side};

/// Picks a move for `side`. Implementations return [`Move::Pass`] exactly
/// when `side` has no legal placement.
pub trait MoveSelector: Send + Sync {
    fn select_move(&mut self, board: &Board, side: Side) -> Move;
}

/// Fixed-depth minimax.
#[derive(Debug, Clone)]
pub struct MinimaxSelector {
    evaluator: HeuristicEvaluator,
    max_depth: u8,
}

impl MinimaxSelector {
    pub fn new(evaluator: HeuristicEvaluator, max_depth: u8) -> Self {
        Self {
            evaluator,
            max_depth,
        }
    }
}

impl MoveSelector for MinimaxSelector {
    fn select_move(&mut self, board: &Board, side: Side) -> Move {
        Searcher::new(&self.evaluator, self.max_depth).search(board, side)
    }
}

/// Best immediate evaluation; earlier moves in search order win ties.
#[derive(Debug, Clone, Default)]
pub struct GreedySelector {
    evaluator: HeuristicEvaluator,
}

impl GreedySelector {
    pub fn new(evaluator: HeuristicEvaluator) -> Self {
        Self { evaluator }
    }
}

impl MoveSelector for GreedySelector {
    fn select_move(&mut self, board: &Board, side: Side) -> Move {
        let mut best_move = Move::Pass;
        let mut best_score = i32::MIN;

        for pos in board.legal_positions(side) {
            let mv = Move::Place(pos);
            let score = self.evaluator.evaluate(board, mv, side);
            if score > best_score {
                best_score = score;
                best_move = mv;
            }
        }

        best_move
    }
}

/// Uniformly random legal move from a seeded generator.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: ChaCha20Rng,
}

impl RandomSelector {
    pub fn new(rng: ChaCha20Rng) -> Self {
        Self { rng }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl MoveSelector for RandomSelector {
    fn select_move(&mut self, board: &Board, side: Side) -> Move {
        let moves: Vec<Position> = board.legal_positions(side).collect();
        let choice = moves.choose(&mut self.rng).copied();
        trace!(?side, candidates = moves.len(), ?choice, "random move drawn");
        Move::from(choice)
    }
}
