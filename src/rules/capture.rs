//! Directional capture: the ray-casting primitive behind legality and flips.
//!
//! A ray from an empty square captures when the adjacent square holds
//! another player's piece, the run continues over other players' pieces
//! only, and it ends on a piece of the moving player, all on the board.

use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Direction, PlayerId, Position};

/// Directions along which a move captures. At most eight.
pub type CaptureDirections = SmallVec<[Direction; 8]>;

/// Where the ray from `from` in `direction` ends on `player`'s own piece,
/// if it captures at least one opposing piece on the way.
#[must_use]
pub fn capture_end(
    board: &Board,
    player: PlayerId,
    from: Position,
    direction: Direction,
) -> Option<Position> {
    let side = board.side();
    let mut cursor = from.step(direction, side)?;
    match board.get(cursor) {
        Some(owner) if owner != player => {}
        _ => return None,
    }

    loop {
        cursor = cursor.step(direction, side)?;
        match board.get(cursor) {
            None => return None,
            Some(owner) if owner == player => return Some(cursor),
            Some(_) => {}
        }
    }
}

/// Every direction in which a piece placed at `from` captures.
#[must_use]
pub fn capturing_directions(board: &Board, player: PlayerId, from: Position) -> CaptureDirections {
    Direction::ALL
        .into_iter()
        .filter(|&direction| capture_end(board, player, from, direction).is_some())
        .collect()
}

/// Whether a piece placed at `from` captures in at least one direction.
#[must_use]
pub fn captures_any(board: &Board, player: PlayerId, from: Position) -> bool {
    Direction::ALL
        .into_iter()
        .any(|direction| capture_end(board, player, from, direction).is_some())
}
