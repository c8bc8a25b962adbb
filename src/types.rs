use serde::{Deserialize, Serialize};
use std::fmt;
use web_time::Duration;

use crate::board::BOARD_SIZE;
use crate::error::Error;

/// One of the two players. First moves first (historically black).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Self {
        !self
    }
}

impl std::ops::Not for Side {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// A board coordinate. Always on the board once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    pub fn new(x: u8, y: u8) -> Option<Self> {
        (usize::from(x) < BOARD_SIZE && usize::from(y) < BOARD_SIZE).then_some(Self { x, y })
    }

    /// Converts signed harness coordinates, rejecting anything off the board.
    pub fn try_from_coords(x: i64, y: i64) -> Result<Self, Error> {
        u8::try_from(x)
            .ok()
            .zip(u8::try_from(y).ok())
            .and_then(|(x, y)| Self::new(x, y))
            .ok_or(Error::OffBoard { x, y })
    }

    pub(crate) const fn from_index(index: usize) -> Self {
        debug_assert!(index < BOARD_SIZE * BOARD_SIZE);
        Self {
            x: (index % BOARD_SIZE) as u8,
            y: (index / BOARD_SIZE) as u8,
        }
    }

    pub fn x(self) -> u8 {
        self.x
    }

    pub fn y(self) -> u8 {
        self.y
    }

    /// Bit index `x + 8 * y`.
    pub fn index(self) -> usize {
        usize::from(self.x) + BOARD_SIZE * usize::from(self.y)
    }

    pub fn is_corner(self) -> bool {
        matches!((self.x, self.y), (0 | 7, 0 | 7))
    }

    /// Diagonal neighbour of a corner.
    pub fn is_x_square(self) -> bool {
        matches!((self.x, self.y), (1 | 6, 1 | 6))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A placement or a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Move {
    Pass,
    Place(Position),
}

impl Move {
    /// Placement at `(x, y)`; `None` when the coordinate is off the board.
    pub fn at(x: u8, y: u8) -> Option<Self> {
        Position::new(x, y).map(Self::Place)
    }

    pub fn position(self) -> Option<Position> {
        match self {
            Move::Pass => None,
            Move::Place(pos) => Some(pos),
        }
    }

    pub fn is_pass(self) -> bool {
        self == Move::Pass
    }
}

impl From<Position> for Move {
    fn from(pos: Position) -> Self {
        Self::Place(pos)
    }
}

impl From<Option<Position>> for Move {
    fn from(pos: Option<Position>) -> Self {
        pos.map_or(Move::Pass, Move::Place)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Pass => f.write_str("pass"),
            Move::Place(pos) => write!(f, "{pos}"),
        }
    }
}

/// Time the harness says is left for the whole game.
///
/// Accepted by the controller and logged; the search does not consult it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeBudget {
    #[default]
    Unlimited,
    Remaining(Duration),
}

impl TimeBudget {
    /// Harness convention: a negative value (usually `-1`) means no limit.
    pub fn from_millis(ms_left: i64) -> Self {
        u64::try_from(ms_left).map_or(TimeBudget::Unlimited, |ms| {
            TimeBudget::Remaining(Duration::from_millis(ms))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Terminal,
}

/// Snapshot of a controller's live board, for the JS harness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Index `x + 8 * y`; 0 = empty, 1 = first, 2 = second.
    pub board: Vec<u8>,
    pub side: Side,
    pub first_count: u8,
    pub second_count: u8,
    pub status: GameStatus,
    pub last_move: Option<Move>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_rejects_off_board_coordinates() {
        assert!(Position::new(7, 7).is_some());
        assert!(Position::new(8, 0).is_none());
        assert!(Position::new(0, 8).is_none());
        assert!(matches!(
            Position::try_from_coords(-1, 3),
            Err(Error::OffBoard { x: -1, y: 3 })
        ));
    }

    #[test]
    fn position_index_is_x_plus_eight_y() {
        let pos = Position::new(2, 3).unwrap();
        assert_eq!(pos.index(), 26);
        assert_eq!(Position::from_index(26), pos);
    }

    #[test]
    fn corner_and_x_square_classification() {
        assert!(Position::new(7, 0).unwrap().is_corner());
        assert!(!Position::new(6, 0).unwrap().is_corner());
        assert!(Position::new(6, 1).unwrap().is_x_square());
        assert!(!Position::new(1, 0).unwrap().is_x_square());
    }

    #[test]
    fn negative_millis_means_unlimited() {
        assert_eq!(TimeBudget::from_millis(-1), TimeBudget::Unlimited);
        assert_eq!(
            TimeBudget::from_millis(1500),
            TimeBudget::Remaining(Duration::from_millis(1500))
        );
    }

    #[test]
    fn moves_serialize_with_kind_tag() {
        let json = serde_json::to_string(&Move::at(2, 3).unwrap()).unwrap();
        assert_eq!(json, r#"{"kind":"place","x":2,"y":3}"#);
        assert_eq!(serde_json::to_string(&Move::Pass).unwrap(), r#"{"kind":"pass"}"#);
    }
}
