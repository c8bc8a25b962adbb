pub mod search;
pub mod strategy;

pub use search::{SearchStats, Searcher};
pub use strategy::{GreedySelector, MinimaxSelector, MoveSelector, RandomSelector};
