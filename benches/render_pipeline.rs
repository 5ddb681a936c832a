use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mandelbrot::{render, Frame};

fn bench_full_picture(c: &mut Criterion) {
    let frame = Frame::new(-2.5, 1.5, -2.0, 2.0).unwrap();

    c.bench_function("render_full_picture_400", |b| {
        b.iter(|| render(black_box(&frame), 400, 400).unwrap())
    });
}

fn bench_seahorse_valley(c: &mut Criterion) {
    let frame = Frame::new(-0.8, -0.7, 0.05, 0.15).unwrap();

    c.bench_function("render_seahorse_valley_400", |b| {
        b.iter(|| render(black_box(&frame), 400, 400).unwrap())
    });
}

criterion_group!(benches, bench_full_picture, bench_seahorse_valley);
criterion_main!(benches);
