//! Serializable snapshot of a single game position.

use serde::{Deserialize, Serialize};

use super::game::Reversi;
use crate::board::Grid;
use crate::core::{GameConfig, PlayerId, ReversiResult};
use crate::rules::ReversiRules;

/// Everything needed to rebuild a [`Reversi`] position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub config: GameConfig,
    pub turn: PlayerId,
    pub grid: Grid,
}

impl GameSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> ReversiResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode. The content is not validated until it is
    /// restored with [`Reversi::from_snapshot`].
    pub fn from_bytes(bytes: &[u8]) -> ReversiResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Reversi {
    /// Capture the current position.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config(),
            turn: self.turn(),
            grid: self.grid(),
        }
    }

    /// Rebuild a game, validating the snapshot like `new` + `load_game`.
    pub fn from_snapshot(snapshot: &GameSnapshot) -> ReversiResult<Self> {
        let mut game = Reversi::with_config(snapshot.config)?;
        game.load_game(snapshot.turn, snapshot.grid.clone())?;
        Ok(game)
    }
}
