//! Capability interface shared by every game implementation.
//!
//! The real engine and the simplified test doubles all implement
//! `ReversiRules`, so strategies and the arena are written once against
//! the trait and dispatched statically.

use rustc_hash::FxHashMap;

use crate::board::Grid;
use crate::core::{GameConfig, PlayerId, Position, ReversiResult};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several players tied on the highest piece count.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Build a result from the list returned by [`ReversiRules::outcome`].
    ///
    /// Returns `None` for an empty list (game not over).
    #[must_use]
    pub fn from_outcome(outcome: &[PlayerId]) -> Option<Self> {
        match outcome {
            [] => None,
            [winner] => Some(GameResult::Winner(*winner)),
            winners => Some(GameResult::Winners(winners.to_vec())),
        }
    }

    /// Check if a player won (alone or tied).
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - Position-taking methods check bounds before anything else and fail
///   with `OutOfBounds`.
/// - `grid` returns a copy; callers may mutate it freely.
/// - `apply_move` on an in-bounds but illegal position is unspecified.
/// - `load_game` validates everything before it mutates anything.
/// - `simulate_moves` never changes `self`.
pub trait ReversiRules: Sized {
    /// Construct a game.
    fn new(side: usize, players: usize, othello: bool) -> ReversiResult<Self>;

    /// Construct a game from a configuration.
    fn from_config(config: GameConfig) -> ReversiResult<Self> {
        Self::new(config.side, config.players, config.othello)
    }

    /// Squares per side.
    fn size(&self) -> usize;

    /// Number of players.
    fn num_players(&self) -> usize;

    /// Copy of the board.
    fn grid(&self) -> Grid;

    /// Player to move. Meaningless once the game is done.
    fn turn(&self) -> PlayerId;

    /// Every position the current player may play.
    fn available_moves(&self) -> Vec<Position>;

    /// Whether no player can move.
    fn done(&self) -> bool;

    /// Winners, or empty while the game is running.
    fn outcome(&self) -> Vec<PlayerId>;

    /// Piece at `pos`.
    fn piece_at(&self, pos: Position) -> ReversiResult<Option<PlayerId>>;

    /// Whether the current player may play `pos`.
    fn legal_move(&self, pos: Position) -> ReversiResult<bool>;

    /// Play `pos` for the current player and advance the turn.
    fn apply_move(&mut self, pos: Position) -> ReversiResult<()>;

    /// Replace the board and turn.
    fn load_game(&mut self, turn: PlayerId, grid: Grid) -> ReversiResult<()>;

    /// Play `moves` on an independent copy and return it.
    fn simulate_moves(&self, moves: &[Position]) -> ReversiResult<Self>;

    // === Convenience Methods ===

    /// Outcome as a [`GameResult`], `None` while the game is running.
    fn result(&self) -> Option<GameResult> {
        GameResult::from_outcome(&self.outcome())
    }

    /// For each move, how many pieces `player` would own right after it.
    ///
    /// Each move is simulated on its own from the current position.
    fn sim_num_pieces(
        &self,
        moves: &[Position],
        player: PlayerId,
    ) -> ReversiResult<FxHashMap<Position, usize>> {
        let mut pieces = FxHashMap::default();
        for &pos in moves {
            let sim = self.simulate_moves(&[pos])?;
            let count = sim.grid().iter().flatten().filter(|cell| **cell == Some(player)).count();
            pieces.insert(pos, count);
        }
        Ok(pieces)
    }
}
