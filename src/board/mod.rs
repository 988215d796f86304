//! Board grid: fixed-size square storage of optional player labels.
//!
//! The grid has no rules of its own. The engine owns it and is the only
//! thing that writes to it.

mod grid;

pub use grid::{Board, Grid};
