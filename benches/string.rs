use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rustf_text::utils::{random, string};
use rustf_text::{CaseMode, RandomTextOptions};

const SAMPLE: &str = "The quick brown fox jumps over the lazy dog. Zażółć gęślą jaźń. \
                      Crème brûlée is served after the apples and more apples.";

fn benchmark_center(c: &mut Criterion) {
    c.bench_function("string::center", |b| {
        b.iter(|| {
            let value = string::center(black_box("Ponder"), black_box(80));
            black_box(value);
        })
    });
}

fn benchmark_count(c: &mut Criterion) {
    c.bench_function("string::count", |b| {
        b.iter(|| {
            let value = string::count(black_box(SAMPLE), black_box("apples"));
            black_box(value);
        })
    });

    c.bench_function("string::count_in_range", |b| {
        b.iter(|| {
            let value = string::count_in_range(black_box(SAMPLE), black_box("the"), 10, Some(90));
            let _ = black_box(value);
        })
    });
}

fn benchmark_convert_case(c: &mut Criterion) {
    for mode in [
        CaseMode::TitleCase,
        CaseMode::SentenceCase,
        CaseMode::InvertCase,
        CaseMode::RandomCase,
    ] {
        c.bench_function(&format!("string::convert_case/{}", mode), |b| {
            b.iter(|| {
                let value = string::convert_case(black_box(SAMPLE), mode);
                black_box(value);
            })
        });
    }
}

fn benchmark_remove_diacritics(c: &mut Criterion) {
    c.bench_function("string::remove_diacritics", |b| {
        b.iter(|| {
            let value = string::remove_diacritics(black_box(SAMPLE));
            black_box(value);
        })
    });
}

fn benchmark_split_by_len(c: &mut Criterion) {
    c.bench_function("string::split_by_len", |b| {
        b.iter(|| {
            if let Ok(chunks) = string::split_by_len(black_box(SAMPLE), 7) {
                black_box(chunks.count());
            }
        })
    });
}

fn benchmark_random_text(c: &mut Criterion) {
    let options = RandomTextOptions::default();

    c.bench_function("random::generate_random_text_with", |b| {
        b.iter(|| {
            let value = random::generate_random_text_with(black_box(64), &options);
            black_box(value);
        })
    });
}

criterion_group!(
    benches,
    benchmark_center,
    benchmark_count,
    benchmark_convert_case,
    benchmark_remove_diacritics,
    benchmark_split_by_len,
    benchmark_random_text
);
criterion_main!(benches);
