use criterion::{criterion_group, criterion_main, Criterion};

use drawings_core::{field_by_name, ColorMapping, RenderState};
use drawings_render::{render, render_state};

fn bench_full_frame_render(c: &mut Criterion) {
    let state = RenderState::default();

    c.bench_function("full_frame_800x800", |b| {
        b.iter(|| render_state(&state, 800, 800));
    });
}

fn bench_trig_field(c: &mut Criterion) {
    let field = field_by_name("sin (x) cos(y) tan(x*y)").unwrap();
    let coloring = ColorMapping::default();

    c.bench_function("trig_field_640x480", |b| {
        b.iter(|| render(&field, &coloring, 1.0, 640, 480));
    });
}

criterion_group!(benches, bench_full_frame_render, bench_trig_field);
criterion_main!(benches);
