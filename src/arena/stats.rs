//! Aggregate results of an arena run.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};
use crate::rules::GameResult;

/// Win, tie and abandonment counts over a series of games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaStats {
    /// Games played, finished or not.
    pub games: u32,

    /// Outright wins per seat.
    pub wins: PlayerMap<u32>,

    /// Games shared by two or more players.
    pub ties: u32,

    /// Games stopped at the turn limit.
    pub unfinished: u32,
}

impl ArenaStats {
    /// Create empty statistics for `player_count` seats.
    pub fn new(player_count: usize) -> Self {
        Self {
            games: 0,
            wins: PlayerMap::with_value(player_count, 0),
            ties: 0,
            unfinished: 0,
        }
    }

    /// Record one game. `None` means the game did not finish.
    pub fn record(&mut self, result: Option<&GameResult>) {
        self.games += 1;
        match result {
            Some(GameResult::Winner(winner)) => self.wins[*winner] += 1,
            Some(GameResult::Winners(_)) => self.ties += 1,
            None => self.unfinished += 1,
        }
    }

    /// Fraction of games won outright by `player`.
    #[must_use]
    pub fn win_rate(&self, player: PlayerId) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins[player] as f64 / self.games as f64
        }
    }

    /// Fraction of games that ended in a tie.
    #[must_use]
    pub fn tie_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.ties as f64 / self.games as f64
        }
    }
}

impl std::fmt::Display for ArenaStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (player, _) in self.wins.iter() {
            writeln!(f, "{player} wins: {:.2}%", self.win_rate(player) * 100.0)?;
        }
        write!(f, "Ties: {:.2}%", self.tie_rate() * 100.0)?;
        if self.unfinished > 0 {
            write!(f, "\nUnfinished: {}", self.unfinished)?;
        }
        Ok(())
    }
}
