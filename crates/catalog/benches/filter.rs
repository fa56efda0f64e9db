//! Benchmark for the filter engine over a synthetic catalog.

use catalog::{FilterCriteria, MovieRecord, apply_filter};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn synthetic_catalog(size: usize) -> Vec<MovieRecord> {
    let genres = ["Drama", "Comedy", "Terror", "Sci-Fi", "Western"];
    (0..size)
        .map(|i| MovieRecord {
            title: format!("Pelicula {}", i),
            genre: genres[i % genres.len()].to_string(),
            release_year: 1980 + (i % 45) as u16,
        })
        .collect()
}

fn bench_apply_filter(c: &mut Criterion) {
    let records = synthetic_catalog(10_000);

    c.bench_function("apply_filter identity 10k", |b| {
        let criteria = FilterCriteria::unconstrained();
        b.iter(|| apply_filter(black_box(&records), black_box(&criteria)))
    });

    c.bench_function("apply_filter genre+year 10k", |b| {
        let criteria = FilterCriteria {
            genre: Some("Drama".to_string()),
            year: Some(2001),
        };
        b.iter(|| apply_filter(black_box(&records), black_box(&criteria)))
    });
}

criterion_group!(benches, bench_apply_filter);
criterion_main!(benches);
