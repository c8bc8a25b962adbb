//! Per-cell weights for the positional score.
//!
//! Every disc is worth one point to its owner; the table adds a fixed
//! adjustment by cell category on top of that.

use once_cell::sync::Lazy;

use crate::board::{BOARD_SIZE, NUM_CELLS};

/// Material value of any disc, before the category adjustment.
pub const DISC_VALUE: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellCategory {
    Corner,
    /// Edge cell next to a corner.
    CSquare,
    /// Diagonal neighbour of a corner.
    XSquare,
    Edge,
    Interior,
}

impl CellCategory {
    pub const fn weight(self) -> i32 {
        match self {
            CellCategory::Corner => 2,
            CellCategory::CSquare => -3,
            CellCategory::XSquare => -4,
            CellCategory::Edge => 1,
            CellCategory::Interior => 0,
        }
    }

    fn classify(index: usize) -> Self {
        let (x, y) = (index % BOARD_SIZE, index / BOARD_SIZE);
        let last = BOARD_SIZE - 1;
        let on_edge = |v: usize| v == 0 || v == last;
        let near_edge = |v: usize| v == 1 || v == last - 1;

        match (on_edge(x), on_edge(y)) {
            (true, true) => CellCategory::Corner,
            (true, false) if near_edge(y) => CellCategory::CSquare,
            (false, true) if near_edge(x) => CellCategory::CSquare,
            (true, _) | (_, true) => CellCategory::Edge,
            _ if near_edge(x) && near_edge(y) => CellCategory::XSquare,
            _ => CellCategory::Interior,
        }
    }
}

/// Category and weight of every cell, indexed `x + 8 * y`.
pub static CELL_WEIGHTS: Lazy<[(CellCategory, i32); NUM_CELLS]> = Lazy::new(|| {
    std::array::from_fn(|index| {
        let category = CellCategory::classify(index);
        (category, category.weight())
    })
});

/// Points a disc on `index` is worth to its owner.
pub fn cell_value(index: usize) -> i32 {
    DISC_VALUE + CELL_WEIGHTS[index].1
}
