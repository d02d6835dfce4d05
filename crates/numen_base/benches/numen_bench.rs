use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use numen_base::{
    ForecastInputs, compound_interpretation, compute_diamond_chart, compute_year_forecast,
    forecast_span, reduce, seeded_chain,
};

fn reduce_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");
    group.bench_function("reduce_large", |b| b.iter(|| reduce(black_box(987_654_321))));
    group.bench_function("chain_15", |b| {
        b.iter(|| seeded_chain(black_box(&[1, 2, 1, 5, 1, 1, 8, 6])))
    });
    group.finish();
}

fn chart_bench(c: &mut Criterion) {
    let birth = NaiveDate::from_ymd_opt(1990, 7, 14);

    let mut group = c.benchmark_group("chart");
    group.bench_function("diamond_3_words", |b| {
        b.iter(|| compute_diamond_chart(black_box("John Michael Smith"), birth))
    });
    group.bench_function("compound_lookup", |b| {
        b.iter(|| compound_interpretation(black_box("17/8")))
    });
    group.finish();
}

fn forecast_bench(c: &mut Criterion) {
    let inputs = ForecastInputs::new(2, 1, 1975, 8);

    let mut group = c.benchmark_group("forecast");
    group.bench_function("chart_with_next", |b| {
        b.iter(|| compute_year_forecast(black_box(2026), 2, 1, 1975, 8))
    });
    group.bench_function("span_decade", |b| {
        b.iter(|| forecast_span(black_box(&inputs), 2020..=2029))
    });
    group.finish();
}

criterion_group!(benches, reduce_bench, chart_bench, forecast_bench);
criterion_main!(benches);
