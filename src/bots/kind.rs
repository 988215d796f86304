//! Named strategy selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::ReversiError;
use crate::games::reversi::Reversi;

use super::strategy::{GreedyStrategy, LookaheadStrategy, RandomStrategy, Strategy};

/// The built-in strategies, selectable by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    Random,
    Greedy,
    Lookahead,
}

impl StrategyKind {
    /// Every kind, in order of increasing strength.
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Random,
        StrategyKind::Greedy,
        StrategyKind::Lookahead,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Random => "random",
            StrategyKind::Greedy => "greedy",
            StrategyKind::Lookahead => "lookahead",
        }
    }

    /// Instantiate the strategy for the real engine.
    #[must_use]
    pub fn build(self) -> Box<dyn Strategy<Reversi>> {
        match self {
            StrategyKind::Random => Box::new(RandomStrategy),
            StrategyKind::Greedy => Box::new(GreedyStrategy),
            StrategyKind::Lookahead => Box::new(LookaheadStrategy),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = ReversiError;

    /// Accepts the canonical names plus `smart` and `very-smart` aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(StrategyKind::Random),
            "greedy" | "smart" => Ok(StrategyKind::Greedy),
            "lookahead" | "very-smart" | "verysmart" => Ok(StrategyKind::Lookahead),
            _ => Err(ReversiError::UnknownStrategy { name: s.to_string() }),
        }
    }
}
