use criterion::{Criterion, black_box, criterion_group, criterion_main};

use vindecode::*;

const VINS: [&str; 4] = [
    "1HGCM82633A004352",
    "JH4KA7561PC008269",
    "1M8GDM9AXKP042788",
    "5YJ3E1EA2KF317000",
];

fn bench_parse(c: &mut Criterion) {
    c.bench_function("vin_parse", |b| {
        b.iter(|| black_box(Vin::parse(black_box(" 1hgcm82633a004352 "))));
    });
}

fn bench_check_digit(c: &mut Criterion) {
    c.bench_function("check_digit", |b| {
        b.iter(|| black_box(validate_check_digit(black_box(VINS[0]))));
    });
}

fn bench_model_year(c: &mut Criterion) {
    c.bench_function("model_year", |b| {
        b.iter(|| black_box(estimate_model_year(black_box(VINS[3]))));
    });
}

fn bench_region(c: &mut Criterion) {
    c.bench_function("region", |b| {
        b.iter(|| black_box(infer_region(black_box('W'))));
    });
}

fn bench_decode_batch(c: &mut Criterion) {
    let vins: Vec<Vin> = VINS.iter().map(|v| Vin::parse(v).unwrap()).collect();
    c.bench_function("decode_4_vins", |b| {
        b.iter(|| {
            for vin in &vins {
                black_box(decode(black_box(vin)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_check_digit,
    bench_model_year,
    bench_region,
    bench_decode_batch,
);
criterion_main!(benches);
