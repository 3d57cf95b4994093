use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sunsync_base::{GeographicCoordinate, moon_phase, sun_position_at_day, sunrise_and_sunset_times};

fn solar_bench(c: &mut Criterion) {
    let london =
        GeographicCoordinate::from_decimal_degrees(51.5074, -0.1278).expect("valid location");
    let date = NaiveDate::from_ymd_opt(2024, 6, 21).expect("valid date");

    let mut group = c.benchmark_group("solar");
    group.bench_function("sun_position_at_day", |b| {
        b.iter(|| sun_position_at_day(black_box(21.5), black_box(6), black_box(2024)))
    });
    group.bench_function("sunrise_and_sunset_times", |b| {
        b.iter(|| sunrise_and_sunset_times(black_box(&london), black_box(date)))
    });
    group.finish();
}

fn lunar_bench(c: &mut Criterion) {
    let dt = NaiveDate::from_ymd_opt(2024, 6, 21)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("valid datetime");

    let mut group = c.benchmark_group("lunar");
    group.bench_function("moon_phase", |b| b.iter(|| moon_phase(black_box(dt))));
    group.finish();
}

criterion_group!(benches, solar_bench, lunar_bench);
criterion_main!(benches);
