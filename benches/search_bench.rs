//! Benchmarks for the exact and fuzzy search paths.
//!
//! Collection sizes mirror realistic statute books: a few hundred articles
//! with paragraph-sized bodies.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lexfind::{testing::article, FilterSet, SearchEngine};

fn build_engine(count: u32) -> SearchEngine {
    let articles = (1..=count)
        .map(|n| {
            article(
                n,
                &format!("Provision {} on procedural guarantees", n),
                &format!(
                    "Everyone has the right to an effective remedy before a tribunal. \
                     Provision number {} elaborates on fair and public hearings, \
                     reasonable time limits, and the presumption of innocence.",
                    n
                ),
            )
        })
        .collect();
    SearchEngine::new(articles).expect("valid bench collection")
}

fn bench_exact(c: &mut Criterion) {
    let engine = build_engine(500);
    let filters = FilterSet::default();

    c.bench_function("exact/word", |b| {
        b.iter(|| engine.search(black_box("tribunal"), &filters, false))
    });
    c.bench_function("exact/all_words", |b| {
        b.iter(|| engine.search(black_box("fair hearings remedy"), &filters, false))
    });
    c.bench_function("exact/phrase", |b| {
        b.iter(|| engine.search(black_box("\"presumption of innocence\""), &filters, false))
    });
    c.bench_function("exact/article_number", |b| {
        b.iter(|| engine.search(black_box("Article 250"), &filters, false))
    });
}

fn bench_fuzzy(c: &mut Criterion) {
    let engine = build_engine(500);
    let filters = FilterSet::default();

    c.bench_function("fuzzy/typo", |b| {
        b.iter(|| engine.search(black_box("tribnal"), &filters, true))
    });
}

fn bench_cold_cache(c: &mut Criterion) {
    let engine = build_engine(500);
    let filters = FilterSet::default();

    c.bench_function("exact/word_cold_cache", |b| {
        b.iter(|| {
            engine.clear_cache();
            engine.search(black_box("tribunal"), &filters, false)
        })
    });
}

criterion_group!(benches, bench_exact, bench_fuzzy, bench_cold_cache);
criterion_main!(benches);
