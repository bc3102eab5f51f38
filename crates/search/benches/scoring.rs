//! Benchmarks for index construction and query scoring.

use boikot_search::{best_match, SimilarityIndex};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn create_names(count: usize) -> Vec<String> {
    const WORDS: [&str; 8] = ["Nestle", "Aqua", "Pure", "Life", "Milo", "Indo", "Mie", "Sedaap"];
    (0..count)
        .map(|i| {
            format!(
                "{} {} {}",
                WORDS[i % WORDS.len()],
                WORDS[(i / WORDS.len()) % WORDS.len()],
                i
            )
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");

    for size in [100, 1000, 10000].iter() {
        let names = create_names(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| SimilarityIndex::build(black_box(&names)))
        });
    }

    group.finish();
}

fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_score");

    for size in [100, 1000, 10000].iter() {
        let index = SimilarityIndex::build(create_names(*size));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| index.score(black_box("Nestle Pure Life")))
        });
    }

    group.finish();
}

fn bench_fuzzy(c: &mut Criterion) {
    let names = create_names(1000);
    c.bench_function("fuzzy_best_match_1000", |b| {
        b.iter(|| best_match(black_box("Nestel Pure"), names.iter().map(String::as_str)))
    });
}

criterion_group!(benches, bench_build, bench_score, bench_fuzzy);
criterion_main!(benches);
