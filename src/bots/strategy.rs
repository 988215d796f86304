//! Move-selection strategies.
//!
//! Strategies are trait-based so the arena can seat any mix of them:
//! - `RandomStrategy`: uniform over the legal moves
//! - `GreedyStrategy`: most pieces after one move
//! - `LookaheadStrategy`: best average over the opponent's replies

use tracing::trace;

use crate::core::{GameRng, Position, ReversiResult};
use crate::rules::ReversiRules;

/// Picks a move for the player whose turn it is.
pub trait Strategy<G: ReversiRules>: Send + Sync {
    /// Short name used in logs and summaries.
    fn name(&self) -> &'static str;

    /// Choose a move for `game.turn()`.
    ///
    /// Returns `Ok(None)` when the current player has no legal move.
    fn choose_move(&self, game: &G, rng: &mut GameRng) -> ReversiResult<Option<Position>>;
}

/// Pick uniformly among the candidates whose score equals the best score.
///
/// Candidates are visited in order so the choice only depends on the RNG.
fn choose_best<S: PartialOrd + Copy>(
    scored: &[(Position, S)],
    rng: &mut GameRng,
) -> Option<Position> {
    let best = scored.iter().map(|(_, score)| *score).reduce(|a, b| if b > a { b } else { a })?;
    let best_moves: Vec<Position> = scored
        .iter()
        .filter(|(_, score)| *score == best)
        .map(|(pos, _)| *pos)
        .collect();
    rng.choose(&best_moves).copied()
}

// =============================================================================
// Random
// =============================================================================

/// Chooses uniformly among the available moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomStrategy;

impl<G: ReversiRules> Strategy<G> for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose_move(&self, game: &G, rng: &mut GameRng) -> ReversiResult<Option<Position>> {
        let moves = game.available_moves();
        let choice = rng.choose(&moves).copied();
        trace!(player = %game.turn(), ?choice, "random strategy chose");
        Ok(choice)
    }
}

// =============================================================================
// Greedy
// =============================================================================

/// Looks one move ahead and maximises the mover's piece count.
///
/// Ties are broken at random.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyStrategy;

impl<G: ReversiRules> Strategy<G> for GreedyStrategy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn choose_move(&self, game: &G, rng: &mut GameRng) -> ReversiResult<Option<Position>> {
        let moves = game.available_moves();
        let mover = game.turn();
        let pieces = game.sim_num_pieces(&moves, mover)?;

        let scored: Vec<(Position, usize)> = moves
            .iter()
            .filter_map(|pos| pieces.get(pos).map(|count| (*pos, *count)))
            .collect();

        let choice = choose_best(&scored, rng);
        trace!(player = %mover, ?choice, candidates = moves.len(), "greedy strategy chose");
        Ok(choice)
    }
}

// =============================================================================
// Lookahead
// =============================================================================

/// Looks two plies ahead.
///
/// A move that ends the game with the mover as sole winner is taken
/// immediately. Otherwise each move is scored by the mover's average piece
/// count over every reply available after it; the best average wins, with
/// random tie-break. If no move leaves the next player a reply, a random
/// move is played.
#[derive(Clone, Copy, Debug, Default)]
pub struct LookaheadStrategy;

impl<G: ReversiRules> Strategy<G> for LookaheadStrategy {
    fn name(&self) -> &'static str {
        "lookahead"
    }

    fn choose_move(&self, game: &G, rng: &mut GameRng) -> ReversiResult<Option<Position>> {
        let moves = game.available_moves();
        let mover = game.turn();
        let mut averages: Vec<(Position, f64)> = Vec::with_capacity(moves.len());

        for &pos in &moves {
            let sim = game.simulate_moves(&[pos])?;
            if sim.done() && sim.outcome() == [mover] {
                trace!(player = %mover, choice = %pos, "lookahead found a winning move");
                return Ok(Some(pos));
            }

            let replies = sim.available_moves();
            if replies.is_empty() {
                continue;
            }
            let pieces = sim.sim_num_pieces(&replies, mover)?;
            let total: usize = pieces.values().sum();
            averages.push((pos, total as f64 / pieces.len() as f64));
        }

        let choice = if averages.is_empty() {
            rng.choose(&moves).copied()
        } else {
            choose_best(&averages, rng)
        };
        trace!(player = %mover, ?choice, scored = averages.len(), "lookahead strategy chose");
        Ok(choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::games::mocks::{ReversiMock, ReversiStub};
    use crate::games::reversi::Reversi;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_random_returns_available_move() {
        let game = Reversi::new(8, 2, true).unwrap();
        let mut rng = GameRng::new(7);
        for _ in 0..20 {
            let choice = RandomStrategy.choose_move(&game, &mut rng).unwrap().unwrap();
            assert!(game.available_moves().contains(&choice));
        }
    }

    #[test]
    fn test_random_on_stub() {
        let stub = ReversiStub::new(4, 2, false).unwrap();
        let mut rng = GameRng::new(1);
        let choice = RandomStrategy.choose_move(&stub, &mut rng).unwrap().unwrap();
        assert!(choice.in_bounds(4));
    }

    #[test]
    fn test_random_deterministic_with_seed() {
        let game = Reversi::new(8, 2, true).unwrap();
        let a = RandomStrategy.choose_move(&game, &mut GameRng::new(99)).unwrap();
        let b = RandomStrategy.choose_move(&game, &mut GameRng::new(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_none_without_moves() {
        let mut game = Reversi::new(4, 2, true).unwrap();
        let grid = vec![vec![Some(PlayerId::new(1)); 4]; 4];
        game.load_game(PlayerId::new(1), grid).unwrap();

        let mut rng = GameRng::new(0);
        assert_eq!(RandomStrategy.choose_move(&game, &mut rng).unwrap(), None);
        assert_eq!(GreedyStrategy.choose_move(&game, &mut rng).unwrap(), None);
        assert_eq!(LookaheadStrategy.choose_move(&game, &mut rng).unwrap(), None);
    }

    #[test]
    fn test_greedy_picks_largest_capture() {
        // (4,2) flips one piece, (0,3) flips two.
        let mut game = Reversi::new(6, 2, true).unwrap();
        let one = Some(PlayerId::new(1));
        let two = Some(PlayerId::new(2));
        let mut grid = vec![vec![None; 6]; 6];
        grid[3][3] = one;
        grid[2][3] = two;
        grid[1][3] = two;
        grid[4][0] = one;
        grid[4][1] = two;
        game.load_game(PlayerId::new(1), grid).unwrap();

        let mut rng = GameRng::new(3);
        let choice = GreedyStrategy.choose_move(&game, &mut rng).unwrap();
        assert_eq!(choice, Some(pos(0, 3)));
    }

    #[test]
    fn test_greedy_on_mock() {
        // Mock never flips, so every move yields the same count.
        let mock = ReversiMock::new(4, 2, true).unwrap();
        let mut rng = GameRng::new(5);
        let choice = GreedyStrategy.choose_move(&mock, &mut rng).unwrap().unwrap();
        assert!(mock.available_moves().contains(&choice));
    }

    #[test]
    fn test_greedy_surfaces_unsupported() {
        let stub = ReversiStub::new(4, 2, false).unwrap();
        let mut rng = GameRng::new(5);
        assert!(GreedyStrategy.choose_move(&stub, &mut rng).is_err());
    }

    #[test]
    fn test_lookahead_takes_winning_move() {
        // On the mock, (0,0) wins outright for whoever plays it.
        let mock = ReversiMock::new(6, 2, true).unwrap();
        for seed in 0..10 {
            let mut rng = GameRng::new(seed);
            let choice = LookaheadStrategy.choose_move(&mock, &mut rng).unwrap();
            assert_eq!(choice, Some(pos(0, 0)));
        }
    }

    #[test]
    fn test_lookahead_plays_legal_move() {
        let game = Reversi::new(6, 2, true).unwrap();
        let mut rng = GameRng::new(11);
        let choice = LookaheadStrategy.choose_move(&game, &mut rng).unwrap().unwrap();
        assert!(game.legal_move(choice).unwrap());
    }

    #[test]
    fn test_choose_best_ties() {
        let scored = vec![(pos(0, 0), 2), (pos(0, 1), 5), (pos(1, 1), 5)];
        let mut rng = GameRng::new(42);
        for _ in 0..10 {
            let choice = choose_best(&scored, &mut rng).unwrap();
            assert_ne!(choice, pos(0, 0));
        }
        assert_eq!(choose_best::<usize>(&[], &mut rng), None);
    }
}
