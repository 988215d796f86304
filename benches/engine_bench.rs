use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reversi_engine::{
    GameRng, GreedyStrategy, LookaheadStrategy, RandomStrategy, Reversi, ReversiRules, Strategy,
};

/// Midgame position reached by twenty random moves.
fn midgame() -> Reversi {
    let mut game = Reversi::new(8, 2, true).unwrap();
    let mut rng = GameRng::new(42);
    for _ in 0..20 {
        if let Some(choice) = RandomStrategy.choose_move(&game, &mut rng).unwrap() {
            game.apply_move(choice).unwrap();
        }
    }
    game
}

fn bench_available_moves(c: &mut Criterion) {
    let game = midgame();
    c.bench_function("available_moves_midgame", |b| {
        b.iter(|| black_box(black_box(&game).available_moves()));
    });
}

fn bench_done(c: &mut Criterion) {
    let game = midgame();
    c.bench_function("done_midgame", |b| {
        b.iter(|| black_box(black_box(&game).done()));
    });
}

fn bench_simulate(c: &mut Criterion) {
    let game = midgame();
    let moves = game.available_moves();
    c.bench_function("sim_num_pieces_midgame", |b| {
        b.iter(|| black_box(game.sim_num_pieces(black_box(&moves), game.turn()).unwrap()));
    });
}

fn bench_full_games(c: &mut Criterion) {
    c.bench_function("greedy_game_8x8", |b| {
        b.iter(|| {
            let mut game = Reversi::new(8, 2, true).unwrap();
            let mut rng = GameRng::new(7);
            while let Some(choice) = GreedyStrategy.choose_move(&game, &mut rng).unwrap() {
                game.apply_move(choice).unwrap();
            }
            black_box(game.outcome())
        });
    });

    c.bench_function("lookahead_move_midgame", |b| {
        let game = midgame();
        let mut rng = GameRng::new(3);
        b.iter(|| black_box(LookaheadStrategy.choose_move(black_box(&game), &mut rng).unwrap()));
    });
}

criterion_group!(benches, bench_available_moves, bench_done, bench_simulate, bench_full_games);
criterion_main!(benches);
