//! Game implementations.
//!
//! - `reversi`: the real engine
//! - `mocks`: stand-ins with scripted or simplified rules

pub mod mocks;
pub mod reversi;
