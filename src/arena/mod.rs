//! Bot-vs-bot match runner.
//!
//! An [`Arena`] seats one [`Strategy`](crate::bots::Strategy) per player,
//! plays `games` games from fresh boards and tallies the results into
//! [`ArenaStats`]. Every game draws from its own fork of the root RNG, so a
//! run is reproducible from its seed.

mod config;
mod runner;
mod stats;

pub use config::ArenaConfig;
pub use runner::{Arena, GameRecord};
pub use stats::ArenaStats;
