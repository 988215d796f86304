//! N-player capability verification tests.
//!
//! These tests verify that the engine has no hidden 2-player assumptions
//! and plays correctly with any player count whose parity fits the board.

use reversi_engine::{
    GameConfig, GameRng, PlayerId, PlayerMap, Position, RandomStrategy, Reversi, ReversiRules,
    Strategy,
};

/// Board shapes for 1-9 players: smallest side of matching parity that
/// leaves a ring around the center block.
fn shapes() -> impl Iterator<Item = (usize, usize)> {
    (1..=9).map(|players| (players + 2, players))
}

/// Play random moves to the end, checking turn order after every move.
fn play_checked(game: &mut Reversi, rng: &mut GameRng) -> usize {
    let players = game.num_players();
    let mut moves = 0;

    while !game.done() {
        let mover = game.turn();
        let choice = RandomStrategy
            .choose_move(&*game, rng)
            .unwrap()
            .expect("a player whose turn it is has a move while the game runs");
        game.apply_move(choice).unwrap();
        moves += 1;

        if game.done() {
            break;
        }

        // Everyone between the mover and the new turn was skipped for lack
        // of moves; the new turn holder can move.
        let next = game.turn();
        assert!(!game.moves_for(next).is_empty());
        let mut skipped = mover.next(players);
        while skipped != next {
            assert!(game.moves_for(skipped).is_empty(), "{skipped} skipped with moves");
            skipped = skipped.next(players);
        }
    }

    moves
}

#[test]
fn test_player_labels_cycle() {
    for count in 1..=9 {
        let labels: Vec<u8> = PlayerId::all(count).map(PlayerId::label).collect();
        assert_eq!(labels, (1..=count as u8).collect::<Vec<_>>());

        let last = PlayerId::new(count as u8);
        assert_eq!(last.next(count), PlayerId::new(1));
    }
}

#[test]
fn test_open_center_sized_by_players() {
    for (side, players) in shapes() {
        let game = Reversi::new(side, players, false).unwrap();
        assert_eq!(game.available_moves().len(), players * players, "{players} players");
    }
}

#[test]
fn test_opening_fills_center_in_turn_order() {
    let mut game = Reversi::new(7, 3, false).unwrap();
    let center: Vec<Position> = game.available_moves();
    assert_eq!(center.len(), 9);

    for (i, &square) in center.iter().enumerate() {
        let expected = PlayerId::new((i % 3) as u8 + 1);
        assert_eq!(game.turn(), expected);
        game.apply_move(square).unwrap();
        assert_eq!(game.piece_at(square).unwrap(), Some(expected));
    }

    // Center full: each player holds three pieces, none were flipped.
    let counts = game.piece_counts();
    for player in PlayerId::all(3) {
        assert_eq!(counts[player], 3);
    }
}

#[test]
fn test_random_games_finish_for_every_player_count() {
    for (side, players) in shapes() {
        for seed in 0..3 {
            let mut game = Reversi::new(side, players, false).unwrap();
            let mut rng = GameRng::new(seed);
            let moves = play_checked(&mut game, &mut rng);

            assert!(moves >= players * players);
            assert!(moves <= side * side);

            let outcome = game.outcome();
            assert!(!outcome.is_empty());
            assert!(outcome.windows(2).all(|pair| pair[0] < pair[1]));

            let counts: PlayerMap<usize> = game.piece_counts();
            let best = outcome[0];
            for (player, count) in counts.iter() {
                if outcome.contains(&player) {
                    assert_eq!(*count, counts[best]);
                } else {
                    assert!(*count < counts[best]);
                }
            }
        }
    }
}

#[test]
fn test_four_player_game_from_config() {
    let config = GameConfig::new(8, 4, false);
    let mut game = Reversi::from_config(config).unwrap();
    assert_eq!(game.config(), config);

    let mut rng = GameRng::new(2024);
    play_checked(&mut game, &mut rng);
    assert!(game.done());
    assert_eq!(game.piece_counts().player_count(), 4);
}

#[test]
fn test_too_many_players_for_board() {
    assert!(Reversi::new(3, 5, false).is_err());
    assert!(Reversi::new(4, 0, false).is_err());
}
