//! # reversi-engine
//!
//! A rules engine for multi-player Reversi, plus bots and a match runner.
//!
//! ## Design Principles
//!
//! 1. **N-Player First**: Every game takes its player count at construction.
//!    Classic two-player Othello is just one configuration.
//!
//! 2. **One Capability Interface**: The real engine and the test doubles all
//!    implement [`ReversiRules`]. Bots are written against the trait.
//!
//! 3. **Validate, Then Mutate**: A failed operation leaves the game
//!    untouched.
//!
//! ## Architecture
//!
//! - **Persistent Board**: Cells live in an `im::Vector`, so simulation
//!   forks are cheap to clone and never share mutable storage.
//!
//! - **Injected Randomness**: Strategies draw from a seedable [`GameRng`];
//!   a run is reproducible from its seed.
//!
//! ## Modules
//!
//! - `core`: Players, positions, configuration, errors, RNG
//! - `board`: Grid storage and center-block geometry
//! - `rules`: `ReversiRules` trait and capture scanning
//! - `games`: The Reversi engine and its test doubles
//! - `bots`: Move-selection strategies
//! - `arena`: Bot-vs-bot match runner

pub mod core;
pub mod board;
pub mod rules;
pub mod games;
pub mod bots;
pub mod arena;

// Re-export commonly used types
pub use crate::core::{
    Direction, GameConfig, GameRng, PlayerId, PlayerMap, Position, ReversiError, ReversiResult,
    MAX_PLAYERS,
};

pub use crate::board::{Board, Grid};

pub use crate::rules::{GameResult, ReversiRules};

pub use crate::games::mocks::{ReversiMock, ReversiStub};
pub use crate::games::reversi::{GameSnapshot, Reversi};

pub use crate::bots::{
    GreedyStrategy, LookaheadStrategy, RandomStrategy, Strategy, StrategyKind,
};

pub use crate::arena::{Arena, ArenaConfig, ArenaStats, GameRecord};
