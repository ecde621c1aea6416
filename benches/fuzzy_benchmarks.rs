use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flore::config::{DivisionMethod, FuzzifierConfig};
use flore::data::{Column, Dataset};
use flore::discretize::fuzzy_partitioning;
use flore::fuzzify::fuzzify_dataset;
use flore::inference::weighted_vote;
use flore::membership::get_fuzzy_triangle;
use flore::rule::Rule;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

pub fn fuzzy_benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let n = 2_000;
    let x: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..100.0)).collect();
    let y: Vec<String> = x
        .iter()
        .map(|v| if *v + rng.gen_range(-10.0..10.0) > 50.0 { "yes" } else { "no" }.to_string())
        .collect();

    c.bench_function("get_fuzzy_triangle", |b| {
        b.iter(|| get_fuzzy_triangle(black_box(&x), black_box(&[("low", 0.0), ("mid", 50.0), ("high", 100.0)])))
    });

    let mut partitioning = c.benchmark_group("fuzzy_partitioning");
    partitioning.sample_size(10);
    partitioning.measurement_time(Duration::from_secs(20));
    let small: Vec<f64> = x[..200].to_vec();
    partitioning.bench_function("fuzzy_partitioning_200", |b| {
        b.iter(|| fuzzy_partitioning(black_box(&small), black_box(&y[..200]), black_box(0.0)))
    });
    partitioning.finish();

    let dataset = Dataset::new(
        vec![
            ("x".to_string(), Column::Numeric(x.clone())),
            ("class".to_string(), Column::Categorical(y.clone())),
        ],
        "class",
    )
    .unwrap();
    let config = FuzzifierConfig::default()
        .set_method(DivisionMethod::EqualWidth)
        .set_labels("x", vec!["low".to_string(), "mid".to_string(), "high".to_string()]);
    c.bench_function("fuzzify_dataset", |b| {
        b.iter(|| fuzzify_dataset(black_box(&dataset), black_box(&config)).unwrap())
    });

    let (_, table) = fuzzify_dataset(&dataset, &config).unwrap();
    let instances: Vec<_> = (0..n).filter_map(|row| table.instance(row)).collect();
    let rules = vec![
        Rule::new([("x", "low")], "no", 0.9),
        Rule::new([("x", "mid")], "no", 0.4),
        Rule::new([("x", "mid")], "yes", 0.6),
        Rule::new([("x", "high")], "yes", 0.9),
    ];
    c.bench_function("weighted_vote", |b| {
        b.iter(|| {
            instances
                .iter()
                .map(|m| weighted_vote(black_box(&rules), black_box(m)))
                .count()
        })
    });
}

criterion_group!(benches, fuzzy_benchmarks);
criterion_main!(benches);
