//! Simplified `ReversiRules` implementations for testing collaborators.
//!
//! Strategies and front ends can be exercised against these without
//! depending on the real capture rules.

mod mock;
mod stub;

pub use mock::ReversiMock;
pub use stub::ReversiStub;
