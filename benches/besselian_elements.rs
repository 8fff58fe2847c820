use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hifitime::{Duration, Epoch};

use umbra::eclipse::{refine, BesselianElements, BesselianPolynomials, SeparationCheck};
use umbra::ephemeris::meeus::MeeusEphemeris;

fn bench_besselian_compute(c: &mut Criterion) {
    let eph = MeeusEphemeris::new();
    let epoch = Epoch::from_gregorian_utc(2024, 4, 8, 18, 17, 21, 0);

    c.bench_function("besselian_elements_single_instant", |b| {
        b.iter(|| BesselianElements::compute(&eph, black_box(epoch)).unwrap())
    });
}

fn bench_polynomial_pipeline(c: &mut Criterion) {
    let eph = MeeusEphemeris::new();
    let epoch = Epoch::from_gregorian_utc(2024, 4, 8, 18, 17, 21, 0);

    c.bench_function("besselian_polynomials_five_samples", |b| {
        b.iter(|| BesselianPolynomials::compute(&eph, black_box(epoch)).unwrap())
    });
}

fn bench_separation_eval(c: &mut Criterion) {
    let eph = MeeusEphemeris::new();
    let epoch = Epoch::from_gregorian_utc(2024, 4, 8, 12, 0, 0, 0);

    c.bench_function("separation_check_single_instant", |b| {
        b.iter(|| SeparationCheck::evaluate(&eph, black_box(epoch)).unwrap())
    });
}

fn bench_refine_short_window(c: &mut Criterion) {
    let eph = MeeusEphemeris::new();
    let start = Epoch::from_gregorian_utc(2024, 4, 8, 18, 0, 0, 0);
    let end = start + Duration::from_seconds(600.0);

    // ten minutes at one-second resolution: 601 evaluations
    c.bench_function("refine_10min_window_1s", |b| {
        b.iter(|| refine(&eph, black_box(start), black_box(end), Duration::from_seconds(1.0)))
    });
}

criterion_group!(
    benches,
    bench_besselian_compute,
    bench_polynomial_pipeline,
    bench_separation_eval,
    bench_refine_short_window
);
criterion_main!(benches);
