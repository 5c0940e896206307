//! Benchmarks for one fixed main-loop step.

use std::hint::black_box;

use boing::{
    anim::Animation,
    geom::{Rect, Vec2},
    tuning::Tuning,
};
use criterion::Criterion;

const DT: f32 = 1.0 / 60.0;

pub fn bench_animation(c: &mut Criterion) {
    let mut group = c.benchmark_group("animation");
    let tuning = Tuning::default();
    let texbox = Rect::centered_square(tuning.sprite_size);
    let anchor = Vec2::new(tuning.start_x, tuning.floor);

    let mut prepare: Animation<2> = tuning.prepare_animation().unwrap().into();
    group.bench_function("segment_step", |b| {
        b.iter(|| {
            if prepare.finished() {
                prepare.reset();
            }
            let rect = prepare.transform_rect(black_box(texbox), black_box(anchor));
            prepare.update(DT);
            rect
        })
    });

    let mut jump: Animation<2> = tuning.jump_animation().unwrap().into();
    group.bench_function("sequence_step", |b| {
        b.iter(|| {
            if jump.finished() {
                jump.reset();
            }
            let rect = jump.transform_rect(black_box(texbox), black_box(anchor));
            jump.update(DT);
            rect
        })
    });

    group.finish();
}
