//! Multi-player Reversi.
//!
//! - 1-255 players (2-9 in practice) on a square board whose side shares
//!   the player count's parity
//! - Non-Othello games open by filling a `players`×`players` center block,
//!   one piece per turn with no captures
//! - Afterwards a move must bracket a run of opposing pieces in at least
//!   one of eight directions; the run flips to the mover
//! - Players without a move are skipped; the game ends when nobody can move
//!   and every player tied for the most pieces wins

mod game;
mod snapshot;

pub use game::Reversi;
pub use snapshot::GameSnapshot;
