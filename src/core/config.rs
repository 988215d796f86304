//! Game configuration.
//!
//! A game is fixed by three values chosen at construction:
//! - `side`: number of squares along each edge of the board
//! - `players`: number of players (labels `1..=players`)
//! - `othello`: whether to seed the classic 2×2 Othello start
//!
//! `validate` checks them in a fixed order so callers always see the same
//! failure for the same input.

use serde::{Deserialize, Serialize};

use super::error::{ReversiError, ReversiResult};

/// Largest supported player count (labels are `u8`).
pub const MAX_PLAYERS: usize = 255;

/// Board configuration shared by every engine implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    /// Squares per side.
    pub side: usize,

    /// Number of players.
    pub players: usize,

    /// Start from the Othello seed instead of an empty board.
    pub othello: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::othello()
    }
}

impl GameConfig {
    /// Create a configuration. Call [`GameConfig::validate`] before use.
    #[must_use]
    pub const fn new(side: usize, players: usize, othello: bool) -> Self {
        Self {
            side,
            players,
            othello,
        }
    }

    /// Classic two-player Othello on an 8×8 board.
    #[must_use]
    pub const fn othello() -> Self {
        Self::new(8, 2, true)
    }

    /// Set the board side.
    #[must_use]
    pub fn with_side(mut self, side: usize) -> Self {
        self.side = side;
        self
    }

    /// Set the player count.
    #[must_use]
    pub fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Enable or disable the Othello seed.
    #[must_use]
    pub fn with_othello(mut self, othello: bool) -> Self {
        self.othello = othello;
        self
    }

    /// Check the configuration.
    ///
    /// Order: parity, Othello player count, minimum side, then player-count
    /// bounds (the center block of `players`×`players` squares must fit).
    pub fn validate(&self) -> ReversiResult<()> {
        if self.side % 2 != self.players % 2 {
            return Err(ReversiError::invalid(format!(
                "parity of side ({}) and players ({}) does not match",
                self.side, self.players
            )));
        }
        if self.othello && self.players != 2 {
            return Err(ReversiError::invalid(format!(
                "an Othello game needs exactly 2 players, got {}",
                self.players
            )));
        }
        if self.side < 3 {
            return Err(ReversiError::invalid(format!(
                "board side must be at least 3, got {}",
                self.side
            )));
        }
        if self.othello && self.side < 4 {
            return Err(ReversiError::invalid(format!(
                "an Othello board needs a side of at least 4, got {}",
                self.side
            )));
        }
        if self.players == 0 || self.players > MAX_PLAYERS {
            return Err(ReversiError::invalid(format!(
                "player count must be in 1..={MAX_PLAYERS}, got {}",
                self.players
            )));
        }
        if self.players > self.side {
            return Err(ReversiError::invalid(format!(
                "{} players do not fit a {}x{} board",
                self.players, self.side, self.side
            )));
        }
        Ok(())
    }

    /// Number of squares on the board.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.side * self.side
    }
}
