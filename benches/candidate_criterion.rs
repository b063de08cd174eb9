use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chess_board_core::engines::engine_random::RandomEngine;
use chess_board_core::game_state::chess_types::Square;
use chess_board_core::game_state::game_state::GameState;
use chess_board_core::move_generation::legal_move_generator::{
    all_candidate_moves, candidate_destinations,
};
use chess_board_core::utils::engine_match_harness::{play_engine_match, MatchConfig};

/// A position after a seeded random opening, so sliders have open lines.
fn midgame() -> GameState {
    play_engine_match(
        &mut RandomEngine::with_seed(17),
        &mut RandomEngine::with_seed(18),
        MatchConfig { max_plies: 20 },
    )
    .expect("seeded random match should run")
    .final_state
}

fn bench_candidates(c: &mut Criterion) {
    let start = GameState::new_game();
    let middle = midgame();

    c.bench_function("all_candidate_moves_startpos", |b| {
        b.iter(|| all_candidate_moves(black_box(start.board()), start.current_player()).len())
    });

    c.bench_function("all_candidate_moves_midgame", |b| {
        b.iter(|| all_candidate_moves(black_box(middle.board()), middle.current_player()).len())
    });

    c.bench_function("candidate_destinations_every_square", |b| {
        b.iter(|| {
            Square::all()
                .map(|square| candidate_destinations(black_box(middle.board()), square).len())
                .sum::<usize>()
        })
    });
}

criterion_group!(candidate_benches, bench_candidates);
criterion_main!(candidate_benches);
