//! Rules: the capability trait and the capture primitive.
//!
//! Games implement `ReversiRules` to expose:
//! - Queries (board, turn, legal moves, outcome)
//! - Mutation (`apply_move`, `load_game`)
//! - Non-mutating simulation
//!
//! `capture` holds the ray-casting rule the real engine is built on.

pub mod capture;
pub mod engine;

pub use capture::{capture_end, captures_any, capturing_directions, CaptureDirections};
pub use engine::{GameResult, ReversiRules};
