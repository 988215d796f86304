//! Automated players.
//!
//! A [`Strategy`] only reads the game through [`ReversiRules`], so the same
//! bot runs against the real engine or a test double.
//!
//! [`ReversiRules`]: crate::rules::ReversiRules

mod kind;
mod strategy;

pub use kind::StrategyKind;
pub use strategy::{GreedyStrategy, LookaheadStrategy, RandomStrategy, Strategy};
