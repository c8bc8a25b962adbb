use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod player;
pub mod types;
pub mod wasm;
pub mod weights;

pub use board::Board;
pub use config::{PlayerConfig, Strategy};
pub use error::Error;
pub use eval::HeuristicEvaluator;
pub use player::PlayerController;
pub use types::{GameState, GameStatus, Move, Position, Side, TimeBudget};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
