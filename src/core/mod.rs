//! Core engine types: players, positions, configuration, errors, RNG.
//!
//! Nothing in here knows the rules of Reversi. The board and rules modules
//! build on these types.

pub mod config;
pub mod error;
pub mod player;
pub mod position;
pub mod rng;

pub use config::{GameConfig, MAX_PLAYERS};
pub use error::{ReversiError, ReversiResult};
pub use player::{PlayerId, PlayerMap};
pub use position::{Direction, Position};
pub use rng::GameRng;
