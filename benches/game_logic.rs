use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cake_tower::core::landing::resolve;
use cake_tower::core::{GameConfig, GameSnapshot, GameState, StackSegment};
use cake_tower::term::{FrameBuffer, GameView, Viewport};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::default();
    state.start();

    c.bench_function("game_tick_1_frame", |b| {
        b.iter(|| {
            state.tick(black_box(1));
        })
    });
}

fn bench_resolve(c: &mut Criterion) {
    let rules = GameConfig::default().landing_rules();
    let top = StackSegment::new(360.0, 400.0);

    c.bench_function("resolve_partial", |b| {
        b.iter(|| resolve(black_box(450.0), black_box(400.0), &top, &rules))
    });
}

fn bench_tap_cycle(c: &mut Criterion) {
    let config = GameConfig {
        drop_frames: 0,
        ..GameConfig::default()
    };

    c.bench_function("perfect_run_50_layers", |b| {
        b.iter(|| {
            let mut state = GameState::new(config);
            state.start();
            for _ in 0..50 {
                state.tap();
                state.drain_events().for_each(drop);
            }
            black_box(state.score())
        })
    });
}

fn bench_snapshot_and_render(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig {
        drop_frames: 0,
        ..GameConfig::default()
    });
    state.start();
    for _ in 0..30 {
        state.tap();
        state.drain_events().for_each(drop);
    }
    let view = GameView::default();
    let viewport = Viewport::new(80, 30);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 30);

    c.bench_function("snapshot_into", |b| {
        b.iter(|| state.snapshot_into(black_box(&mut snap)))
    });

    c.bench_function("render_into", |b| {
        b.iter(|| view.render_into(black_box(&snap), viewport, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_resolve,
    bench_tap_cycle,
    bench_snapshot_and_render
);
criterion_main!(benches);
