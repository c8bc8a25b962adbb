use tracing::{debug, info, warn};

use crate::ai::strategy::MoveSelector;
use crate::board::Board;
use crate::config::PlayerConfig;
use crate::error::Error;
use crate::types::{GameState, GameStatus, Move, Side, TimeBudget};

/// An automated player that tracks the game on its own board.
///
/// The live board is the only record of the game; every call to
/// [`choose_move`](Self::choose_move) first applies the opponent's move to it,
/// then its own.
pub struct PlayerController {
    board: Board,
    side: Side,
    opponent: Side,
    last_move: Option<Move>,
    selector: Box<dyn MoveSelector>,
}

impl PlayerController {
    pub fn new(config: &PlayerConfig) -> Result<Self, Error> {
        let selector = config.build_selector()?;
        info!(side = ?config.side, strategy = ?config.strategy, max_depth = config.max_depth, "player created");
        Ok(Self::with_selector(config.side, selector))
    }

    pub fn with_selector(side: Side, selector: Box<dyn MoveSelector>) -> Self {
        Self {
            board: Board::new(),
            side,
            opponent: side.opponent(),
            last_move: None,
            selector,
        }
    }

    /// Applies `opponents_move`, then picks, plays and returns this side's move.
    ///
    /// An illegal opponent move is ignored. Returns [`Move::Pass`] without
    /// consulting the selector when this side cannot place a disc.
    /// `budget` is recorded but not enforced.
    pub fn choose_move(&mut self, opponents_move: Move, budget: TimeBudget) -> Move {
        if !opponents_move.is_pass() && !self.board.is_legal_move(opponents_move, self.opponent) {
            warn!(side = ?self.opponent, mv = %opponents_move, "ignoring illegal opponent move");
        }
        let flips = self.board.apply_move(opponents_move, self.opponent);
        debug!(mv = %opponents_move, flipped = flips.count_ones(), "applied opponent move");

        if !self.board.has_legal_moves(self.side) {
            info!(side = ?self.side, "no legal placement, passing");
            self.last_move = Some(Move::Pass);
            return Move::Pass;
        }

        let mut mv = self.selector.select_move(&self.board, self.side);
        if mv.is_pass() || !self.board.is_legal_move(mv, self.side) {
            warn!(side = ?self.side, %mv, "selector returned an illegal move, using first legal placement");
            mv = Move::from(self.board.legal_positions(self.side).next());
        }

        self.board.apply_move(mv, self.side);
        self.last_move = Some(mv);
        info!(side = ?self.side, %mv, ?budget, "move chosen");
        mv
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the live board, for seeding fixed positions.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
        self.last_move = None;
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn status(&self) -> GameStatus {
        if self.board.is_terminal() {
            GameStatus::Terminal
        } else {
            GameStatus::InProgress
        }
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            board: self.board.to_array().to_vec(),
            side: self.side,
            first_count: self.board.count(Side::First),
            second_count: self.board.count(Side::Second),
            status: self.status(),
            last_move: self.last_move,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::strategy::{GreedySelector, RandomSelector};
    use crate::config::Strategy;

    struct FixedMoveSelector {
        mv: Move,
    }

    impl MoveSelector for FixedMoveSelector {
        fn select_move(&mut self, _board: &Board, _side: Side) -> Move {
            self.mv
        }
    }

    fn stuck_second_board() -> Board {
        Board::from_layout(&format!("bw{}", ".".repeat(62))).unwrap()
    }

    fn shallow(side: Side) -> PlayerController {
        let config = PlayerConfig {
            max_depth: 3,
            ..PlayerConfig::for_side(side)
        };
        PlayerController::new(&config).unwrap()
    }

    #[test]
    fn first_player_opens_with_legal_move_at_default_depth() {
        let mut player = PlayerController::new(&PlayerConfig::default()).unwrap();

        let mv = player.choose_move(Move::Pass, TimeBudget::Unlimited);

        assert!(Board::new().is_legal_move(mv, Side::First));
        assert_eq!(player.board().count(Side::First), 4);
        assert_eq!(player.board().count(Side::Second), 1);
        assert_eq!(player.to_game_state().last_move, Some(mv));
    }

    #[test]
    fn opponent_move_is_applied_before_searching() {
        let mut player = shallow(Side::Second);

        let mv = player.choose_move(Move::at(2, 3).unwrap(), TimeBudget::from_millis(-1));

        let mut expected = Board::new();
        expected.apply_move(Move::at(2, 3).unwrap(), Side::First);
        assert!(expected.is_legal_move(mv, Side::Second));
        assert_eq!(player.board().count(Side::First) + player.board().count(Side::Second), 6);
    }

    #[test]
    fn passes_without_touching_board_when_stuck() {
        let mut player = shallow(Side::Second);
        player.set_board(stuck_second_board());

        assert!(!player.board().is_terminal());
        let mv = player.choose_move(Move::Pass, TimeBudget::from_millis(1000));

        assert_eq!(mv, Move::Pass);
        assert_eq!(*player.board(), stuck_second_board());
        assert_eq!(player.status(), GameStatus::InProgress);
    }

    #[test]
    fn illegal_opponent_move_is_ignored() {
        let mut player = PlayerController::with_selector(
            Side::Second,
            Box::new(FixedMoveSelector {
                mv: Move::at(4, 2).unwrap(),
            }),
        );

        // (0,0) is not a legal placement for first on the opening board.
        let mv = player.choose_move(Move::at(0, 0).unwrap(), TimeBudget::Unlimited);

        let mut expected = Board::new();
        expected.apply_move(Move::at(4, 2).unwrap(), Side::Second);
        assert_eq!(mv, Move::at(4, 2).unwrap());
        assert_eq!(*player.board(), expected);
    }

    #[test]
    fn illegal_selector_choice_falls_back_to_first_legal_move() {
        let mut player = PlayerController::with_selector(
            Side::First,
            Box::new(FixedMoveSelector { mv: Move::Pass }),
        );

        let mv = player.choose_move(Move::Pass, TimeBudget::Unlimited);

        assert_eq!(mv, Move::at(2, 3).unwrap());
    }

    #[test]
    fn live_board_carries_across_calls() {
        let mut player =
            PlayerController::with_selector(Side::First, Box::new(GreedySelector::default()));
        let mut mirror = Board::new();

        let mut opponent = RandomSelector::from_seed(5);
        let mut reply = Move::Pass;
        for _ in 0..4 {
            let mv = player.choose_move(reply, TimeBudget::Unlimited);
            mirror.apply_move(reply, Side::Second);
            mirror.apply_move(mv, Side::First);
            assert_eq!(*player.board(), mirror);

            reply = opponent.select_move(&mirror, Side::Second);
        }
    }

    #[test]
    fn terminal_status_after_final_capture() {
        let mut player = PlayerController::with_selector(
            Side::First,
            Box::new(GreedySelector::default()),
        );
        player.set_board(stuck_second_board());

        let mv = player.choose_move(Move::Pass, TimeBudget::Unlimited);

        assert_eq!(mv, Move::at(2, 0).unwrap());
        assert_eq!(player.status(), GameStatus::Terminal);
        let state = player.to_game_state();
        assert_eq!(state.first_count, 3);
        assert_eq!(state.second_count, 0);
    }

    #[test]
    fn rejects_invalid_config() {
        let config = PlayerConfig {
            max_depth: 0,
            strategy: Strategy::Greedy,
            ..PlayerConfig::default()
        };

        assert!(PlayerController::new(&config).is_err());
    }
}
