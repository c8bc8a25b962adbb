use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::types::{Move, Position, Side};
use crate::weights::cell_value;

pub const BOARD_SIZE: usize = 8;
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Reversi board state represented by two disjoint bitboards.
///
/// Cell `(x, y)` is bit `x + 8 * y`. The board is `Copy`: a copy is an
/// independent snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    first: u64,
    second: u64,
}

impl Board {
    /// Creates the opening position:
    /// (4,3) and (3,4) first, (3,3) and (4,4) second.
    pub fn new() -> Self {
        Self {
            first: bit(28) | bit(35),
            second: bit(27) | bit(36),
        }
    }

    pub fn from_bitboards(first: u64, second: u64) -> Result<Self, Error> {
        let overlap = first & second;
        if overlap != 0 {
            return Err(Error::OverlappingDiscs(overlap));
        }
        Ok(Self { first, second })
    }

    /// Parses 64 cell symbols in index order (`x + 8 * y`), ignoring
    /// whitespace: `b` first, `w` second, `.`/`-`/`_` empty.
    pub fn from_layout(layout: &str) -> Result<Self, Error> {
        let mut board = Self {
            first: 0,
            second: 0,
        };
        let mut index = 0;

        for symbol in layout.chars().filter(|c| !c.is_whitespace()) {
            if index >= NUM_CELLS {
                index += 1;
                continue;
            }
            match symbol {
                'b' | 'B' => board.first |= bit(index),
                'w' | 'W' => board.second |= bit(index),
                '.' | '-' | '_' => {}
                _ => return Err(Error::LayoutSymbol { symbol, index }),
            }
            index += 1;
        }

        if index != NUM_CELLS {
            return Err(Error::LayoutLength(index));
        }
        Ok(board)
    }

    pub fn occupied(&self, pos: Position) -> bool {
        ((self.first | self.second) & bit(pos.index())) != 0
    }

    /// False when the cell is empty.
    pub fn owned_by(&self, side: Side, pos: Position) -> bool {
        (self.discs(side) & bit(pos.index())) != 0
    }

    pub fn is_legal_move(&self, mv: Move, side: Side) -> bool {
        match mv {
            Move::Pass => !self.has_legal_moves(side),
            Move::Place(pos) => {
                let (me, opp) = self.sides(side);
                Self::collect_flips(pos.index(), me, opp) != 0
            }
        }
    }

    /// Plays `mv` for `side` and returns the mask of flipped discs.
    /// A pass or an illegal move leaves the board untouched and returns 0.
    pub fn apply_move(&mut self, mv: Move, side: Side) -> u64 {
        let Move::Place(pos) = mv else {
            return 0;
        };

        let (me, opp) = self.sides(side);
        let flips = Self::collect_flips(pos.index(), me, opp);
        if flips == 0 {
            return 0;
        }

        let next_me = me | bit(pos.index()) | flips;
        let next_opp = opp & !flips;

        match side {
            Side::First => {
                self.first = next_me;
                self.second = next_opp;
            }
            Side::Second => {
                self.second = next_me;
                self.first = next_opp;
            }
        }

        flips
    }

    /// Returns legal move mask for the given side.
    pub fn legal_moves(&self, side: Side) -> u64 {
        let (me, opp) = self.sides(side);
        let occupied = me | opp;
        let mut legal = 0u64;

        for pos in 0..NUM_CELLS {
            let move_bit = bit(pos);
            if (occupied & move_bit) != 0 {
                continue;
            }
            if Self::collect_flips(pos, me, opp) != 0 {
                legal |= move_bit;
            }
        }

        legal
    }

    /// Legal placements in search order: x outer, y inner.
    pub fn legal_positions(&self, side: Side) -> impl Iterator<Item = Position> + use<> {
        let legal = self.legal_moves(side);
        (0..BOARD_SIZE)
            .flat_map(|x| (0..BOARD_SIZE).map(move |y| x + BOARD_SIZE * y))
            .filter(move |&index| (legal & bit(index)) != 0)
            .map(Position::from_index)
    }

    pub fn has_legal_moves(&self, side: Side) -> bool {
        self.legal_moves(side) != 0
    }

    /// Neither side can place a disc.
    pub fn is_terminal(&self) -> bool {
        !(self.has_legal_moves(Side::First) || self.has_legal_moves(Side::Second))
    }

    pub fn count(&self, side: Side) -> u8 {
        self.discs(side).count_ones() as u8
    }

    pub fn occupied_count(&self) -> u8 {
        (self.first | self.second).count_ones() as u8
    }

    pub fn empty_count(&self) -> u8 {
        NUM_CELLS as u8 - self.occupied_count()
    }

    /// Weighted disc total of `side` minus that of its opponent.
    pub fn positional_score(&self, side: Side) -> i32 {
        let (me, opp) = self.sides(side);
        weighted_total(me) - weighted_total(opp)
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=first, 2=second.
    pub fn to_array(&self) -> [u8; NUM_CELLS] {
        let mut board = [0u8; NUM_CELLS];
        for (pos, cell) in board.iter_mut().enumerate() {
            let square = bit(pos);
            *cell = if (self.first & square) != 0 {
                1
            } else if (self.second & square) != 0 {
                2
            } else {
                0
            };
        }
        board
    }

    fn discs(&self, side: Side) -> u64 {
        match side {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }

    fn sides(&self, side: Side) -> (u64, u64) {
        match side {
            Side::First => (self.first, self.second),
            Side::Second => (self.second, self.first),
        }
    }

    fn collect_flips(pos: usize, me: u64, opp: u64) -> u64 {
        if pos >= NUM_CELLS {
            return 0;
        }

        let move_bit = bit(pos);
        if ((me | opp) & move_bit) != 0 {
            return 0;
        }

        let (x, y) = pos_to_xy(pos);
        let mut flips = 0u64;

        for (dx, dy) in DIRECTIONS {
            let mut cx = x + dx;
            let mut cy = y + dy;
            let mut line = 0u64;

            while in_bounds(cx, cy) {
                let square = bit(cx as usize + BOARD_SIZE * cy as usize);
                if (opp & square) != 0 {
                    line |= square;
                } else {
                    if (me & square) != 0 {
                        flips |= line;
                    }
                    break;
                }

                cx += dx;
                cy += dy;
            }
        }

        flips
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_layout(s)
    }
}

/// One row per `y`, using the layout symbols.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_array().chunks(BOARD_SIZE) {
            for cell in row {
                let symbol = match cell {
                    1 => 'b',
                    2 => 'w',
                    _ => '.',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn weighted_total(mut discs: u64) -> i32 {
    let mut total = 0;
    while discs != 0 {
        total += cell_value(discs.trailing_zeros() as usize);
        discs &= discs - 1;
    }
    total
}

fn bit(pos: usize) -> u64 {
    if pos < NUM_CELLS { 1u64 << pos } else { 0 }
}

fn pos_to_xy(pos: usize) -> (i32, i32) {
    ((pos % BOARD_SIZE) as i32, (pos / BOARD_SIZE) as i32)
}

fn in_bounds(x: i32, y: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&x) && (0..BOARD_SIZE as i32).contains(&y)
}
