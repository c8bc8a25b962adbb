//! JS-facing wrapper around [`PlayerController`].

use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::board::Board;
use crate::config::PlayerConfig;
use crate::error::Error;
use crate::player::PlayerController;
use crate::types::{Move, Position, TimeBudget};

/// Opponent move as sent by the harness: `{x, y}`, or `null` for a pass.
#[derive(Debug, Clone, Copy, Deserialize)]
struct Coords {
    x: i64,
    y: i64,
}

fn parse_move(coords: Option<Coords>) -> Result<Move, Error> {
    coords
        .map(|c| Position::try_from_coords(c.x, c.y))
        .transpose()
        .map(Move::from)
}

fn to_js_error(err: Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct WasmPlayer {
    controller: PlayerController,
}

#[wasm_bindgen]
impl WasmPlayer {
    /// `config` may be `undefined`/`null` for defaults, or a partial
    /// `PlayerConfig` object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmPlayer, JsValue> {
        let config: PlayerConfig = if config.is_undefined() || config.is_null() {
            PlayerConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        let controller = PlayerController::new(&config).map_err(to_js_error)?;
        Ok(Self { controller })
    }

    /// Returns `{kind: "place", x, y}` or `{kind: "pass"}`.
    /// `ms_left` below zero means no time limit.
    pub fn choose_move(&mut self, opponent_move: JsValue, ms_left: f64) -> Result<JsValue, JsValue> {
        let coords: Option<Coords> = serde_wasm_bindgen::from_value(opponent_move)?;
        let opponents_move = parse_move(coords).map_err(to_js_error)?;
        let mv = self
            .controller
            .choose_move(opponents_move, TimeBudget::from_millis(ms_left as i64));
        Ok(serde_wasm_bindgen::to_value(&mv)?)
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.controller.to_game_state())?)
    }

    pub fn set_layout(&mut self, layout: &str) -> Result<(), JsValue> {
        let board = Board::from_layout(layout).map_err(to_js_error)?;
        self.controller.set_board(board);
        Ok(())
    }
}
