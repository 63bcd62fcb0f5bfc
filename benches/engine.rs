use criterion::{black_box, criterion_group, criterion_main, Criterion};
use word_tiles::core::{compute_layout, resolve_drag_frame, Exercise, ExerciseDef, Tile, TileSet};
use word_tiles::types::{LayoutConfig, Vector, MAX_TILES};

fn full_sentence() -> TileSet {
    let tiles = (0..MAX_TILES)
        .map(|i| Tile::new(30.0 + (i % 7) as f32 * 10.0, Some(i)))
        .collect();
    TileSet::new(tiles).unwrap()
}

fn bench_layout(c: &mut Criterion) {
    let config = LayoutConfig::default();
    let mut tiles = full_sentence();

    c.bench_function("compute_layout_64_tiles", |b| {
        b.iter(|| {
            compute_layout(&mut tiles, black_box(400.0), &config);
        })
    });
}

fn bench_drag_frame(c: &mut Criterion) {
    let config = LayoutConfig::default();
    let mut tiles = full_sentence();
    compute_layout(&mut tiles, 400.0, &config);

    // A sample that crosses nothing: the common case while a finger wiggles.
    c.bench_function("resolve_drag_frame_unchanged", |b| {
        b.iter(|| {
            resolve_drag_frame(
                &mut tiles,
                black_box(0),
                black_box(Vector::ZERO),
                400.0,
                &config,
            )
        })
    });

    c.bench_function("resolve_drag_frame_swap_back_and_forth", |b| {
        let mut tiles = TileSet::new(vec![Tile::new(40.0, Some(0)), Tile::new(40.0, Some(1))])
            .unwrap();
        compute_layout(&mut tiles, 400.0, &config);
        b.iter(|| {
            resolve_drag_frame(&mut tiles, 0, Vector::new(40.0, 0.0), 400.0, &config).ok();
            resolve_drag_frame(&mut tiles, 0, Vector::new(-40.0, 0.0), 400.0, &config).ok();
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let words: Vec<String> = (0..32).map(|i| format!("word{i}")).collect();
    let refs: Vec<&str> = words.iter().map(String::as_str).collect();
    let def = ExerciseDef::from_words(&refs).with_placed((0..16).collect());
    let exercise =
        Exercise::new(&def, |w| w.len() as f32 * 10.0, 400.0, LayoutConfig::default()).unwrap();

    c.bench_function("exercise_snapshot_32_words", |b| {
        b.iter(|| black_box(exercise.snapshot()))
    });
}

criterion_group!(benches, bench_layout, bench_drag_frame, bench_snapshot);
criterion_main!(benches);
