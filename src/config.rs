use serde::{Deserialize, Serialize};

use crate::ai::search::DEFAULT_MAX_DEPTH;
use crate::ai::strategy::{GreedySelector, MinimaxSelector, MoveSelector, RandomSelector};
use crate::error::Error;
use crate::eval::{DEFAULT_CORNER_BONUS, DEFAULT_DANGER_PENALTY, HeuristicEvaluator};
use crate::types::Side;

/// Deepest search accepted from configuration. Cost grows exponentially.
pub const MAX_SEARCH_DEPTH: u8 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Minimax,
    Greedy,
    Random,
}

/// Settings for one automated player. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub side: Side,
    pub strategy: Strategy,
    /// Plies searched by the minimax strategy.
    pub max_depth: u8,
    pub corner_bonus: i32,
    pub danger_penalty: i32,
    /// Seed for the random strategy.
    pub seed: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            side: Side::First,
            strategy: Strategy::Minimax,
            max_depth: DEFAULT_MAX_DEPTH,
            corner_bonus: DEFAULT_CORNER_BONUS,
            danger_penalty: DEFAULT_DANGER_PENALTY,
            seed: 0,
        }
    }
}

impl PlayerConfig {
    pub fn for_side(side: Side) -> Self {
        Self {
            side,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !(1..=MAX_SEARCH_DEPTH).contains(&self.max_depth) {
            return Err(Error::InvalidConfig(format!(
                "max_depth must be between 1 and {MAX_SEARCH_DEPTH}, got {}",
                self.max_depth
            )));
        }
        Ok(())
    }

    pub fn evaluator(&self) -> HeuristicEvaluator {
        HeuristicEvaluator::new(self.corner_bonus, self.danger_penalty)
    }

    /// Builds the configured strategy after validating the settings.
    pub fn build_selector(&self) -> Result<Box<dyn MoveSelector>, Error> {
        self.validate()?;
        let selector: Box<dyn MoveSelector> = match self.strategy {
            Strategy::Minimax => Box::new(MinimaxSelector::new(self.evaluator(), self.max_depth)),
            Strategy::Greedy => Box::new(GreedySelector::new(self.evaluator())),
            Strategy::Random => Box::new(RandomSelector::from_seed(self.seed)),
        };
        Ok(selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_search_seven_plies_as_first() {
        let config = PlayerConfig::default();

        assert_eq!(config.side, Side::First);
        assert_eq!(config.strategy, Strategy::Minimax);
        assert_eq!(config.max_depth, 7);
        assert_eq!(config.evaluator(), HeuristicEvaluator::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: PlayerConfig =
            serde_json::from_str(r#"{"side":"second","strategy":"random","seed":42}"#).unwrap();

        assert_eq!(config.side, Side::Second);
        assert_eq!(config.strategy, Strategy::Random);
        assert_eq!(config.seed, 42);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn rejects_out_of_range_depth() {
        for max_depth in [0, MAX_SEARCH_DEPTH + 1] {
            let config = PlayerConfig {
                max_depth,
                ..PlayerConfig::default()
            };
            assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
            assert!(config.build_selector().is_err());
        }
    }

    #[test]
    fn unknown_strategy_fails_to_parse() {
        let parsed = serde_json::from_str::<PlayerConfig>(r#"{"strategy":"mcts"}"#);

        assert!(parsed.is_err());
    }
}
