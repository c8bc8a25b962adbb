use tracing::debug;
use web_time::{Duration, Instant};

use crate::board::Board;
use crate::eval::HeuristicEvaluator;
use crate::types::{Move, Side};

pub const DEFAULT_MAX_DEPTH: u8 = 7;

/// Counters from the last call to [`Searcher::search`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaves: u64,
    pub elapsed: Duration,
}

/// Fixed-depth minimax over board copies. No pruning, no move ordering.
pub struct Searcher<'a> {
    evaluator: &'a HeuristicEvaluator,
    max_depth: u8,
    stats: SearchStats,
}

impl<'a> Searcher<'a> {
    pub fn new(evaluator: &'a HeuristicEvaluator, max_depth: u8) -> Self {
        Self {
            evaluator,
            max_depth,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Picks the move for `side` with the greatest minimax value.
    ///
    /// Ties keep the first candidate in search order. Returns
    /// [`Move::Pass`] when `side` has no placement.
    pub fn search(&mut self, board: &Board, side: Side) -> Move {
        let start_time = Instant::now();
        self.stats = SearchStats::default();

        let mut best_move = Move::Pass;
        let mut best_score = i32::MIN;
        let child_depth = self.max_depth.saturating_sub(1);

        for pos in board.legal_positions(side) {
            let mv = Move::Place(pos);
            let score = self.minimax(*board, mv, side, child_depth, side);
            if score > best_score {
                best_score = score;
                best_move = mv;
            }
        }

        self.stats.elapsed = start_time.elapsed();
        debug!(
            ?side,
            %best_move,
            best_score,
            depth = self.max_depth,
            nodes = self.stats.nodes,
            leaves = self.stats.leaves,
            elapsed_ms = self.stats.elapsed.as_millis() as u64,
            "minimax search finished"
        );

        best_move
    }

    /// Value, for `perspective`, of `mover` playing `mv` on `board`.
    ///
    /// The node takes the maximum over its children when the replying side
    /// is `perspective` and the minimum otherwise. A node whose replying side
    /// has no placement is scored like a leaf.
    pub fn minimax(
        &mut self,
        board: Board,
        mv: Move,
        mover: Side,
        depth: u8,
        perspective: Side,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 {
            return self.leaf(&board, mv, mover, perspective);
        }

        let mut next = board;
        next.apply_move(mv, mover);

        let reply = !mover;
        if !next.has_legal_moves(reply) {
            return self.leaf(&board, mv, mover, perspective);
        }

        let maximizing = reply == perspective;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in next.legal_positions(reply) {
            let score = self.minimax(next, Move::Place(pos), reply, depth - 1, perspective);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }

    fn leaf(&mut self, board: &Board, mv: Move, mover: Side, perspective: Side) -> i32 {
        self.stats.leaves += 1;
        self.evaluator.evaluate_from(board, mv, mover, perspective)
    }
}
