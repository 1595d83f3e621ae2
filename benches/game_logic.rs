use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

use tui_dodger::core::{
    GameConfig, GameLoopController, GridEngine, GridState, SeededRandom,
};
use tui_dodger::types::{Action, Direction};

fn bench_scroll_tick(c: &mut Criterion) {
    let mut engine = GridEngine::new(SeededRandom::new(12345));
    let mut grid = GridState::new(8, 5).unwrap();

    c.bench_function("engine_scroll_tick", |b| {
        b.iter(|| {
            let (next, effects) = engine.next_grid(black_box(&grid), &[Action::Update]);
            grid = if next.has_crashed() {
                GridState::new(8, 5).unwrap()
            } else {
                next
            };
            effects
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut engine = GridEngine::new(SeededRandom::new(12345));
    let grid = GridState::new(8, 5).unwrap();

    c.bench_function("engine_move", |b| {
        b.iter(|| engine.next_grid(black_box(&grid), &[Action::MoveCar(Direction::Left)]))
    });
}

fn bench_frame(c: &mut Criterion) {
    let mut game =
        GameLoopController::new(GameConfig::default(), SeededRandom::new(12345), ()).unwrap();
    game.start();

    c.bench_function("controller_frame_16ms", |b| {
        b.iter(|| {
            game.on_frame(black_box(Duration::from_millis(16)));
            if game.phase() == tui_dodger::core::RunPhase::GameOver {
                game.restart();
            }
        })
    });
}

criterion_group!(benches, bench_scroll_tick, bench_move, bench_frame);
criterion_main!(benches);
