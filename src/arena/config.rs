//! Arena configuration.

use serde::{Deserialize, Serialize};

use crate::core::GameConfig;

/// Configuration for a series of bot-vs-bot games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Number of games to play.
    pub games: u32,

    /// Board shape shared by every game.
    pub game: GameConfig,

    /// Root seed; each game forks its own stream from it.
    pub seed: u64,

    /// Maximum turns per game before it is abandoned as unfinished.
    /// A pass counts as a turn.
    pub max_moves: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: 10,
            game: GameConfig::othello(),
            seed: 0,
            max_moves: 1_000,
        }
    }
}

impl ArenaConfig {
    /// Create a new arena config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    #[must_use]
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Set the board configuration.
    #[must_use]
    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    /// Set the root seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the per-game turn limit.
    #[must_use]
    pub fn with_max_moves(mut self, max_moves: usize) -> Self {
        self.max_moves = max_moves;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ArenaConfig::new()
            .with_games(3)
            .with_seed(42)
            .with_max_moves(50)
            .with_game(GameConfig::new(5, 3, false));

        assert_eq!(config.games, 3);
        assert_eq!(config.seed, 42);
        assert_eq!(config.max_moves, 50);
        assert_eq!(config.game.players, 3);
    }

    #[test]
    fn test_config_default_is_classic() {
        let config = ArenaConfig::default();
        assert_eq!(config.game, GameConfig::othello());
        assert!(config.games > 0);
    }
}
