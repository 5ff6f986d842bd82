//! Benchmarks for reflow performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks exercise the parse and wrap passes with synthetic
//! multi-paragraph text.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reflow::{parse_text, render, ReflowOptions};

/// Creates synthetic text with the given number of paragraphs, each holding
/// `words_per_paragraph` short words.
fn create_test_text(paragraph_count: usize, words_per_paragraph: usize) -> String {
    let mut paragraphs = Vec::with_capacity(paragraph_count);
    for p in 0..paragraph_count {
        let words: Vec<String> = (0..words_per_paragraph)
            .map(|w| format!("word{}x{}", p, w))
            .collect();
        paragraphs.push(words.join(" "));
    }
    paragraphs.join("\n\n")
}

fn bench_parse(c: &mut Criterion) {
    let text = create_test_text(100, 200);

    c.bench_function("parse_100x200", |b| {
        b.iter(|| parse_text(black_box(&text)));
    });
}

fn bench_reflow_small(c: &mut Criterion) {
    let text = create_test_text(5, 50);

    c.bench_function("reflow_5x50_width15", |b| {
        b.iter(|| reflow::reflow(black_box(&text), 15).unwrap());
    });
}

fn bench_reflow_large(c: &mut Criterion) {
    let text = create_test_text(500, 200);

    c.bench_function("reflow_500x200_width15", |b| {
        b.iter(|| reflow::reflow(black_box(&text), 15).unwrap());
    });
}

fn bench_render_only(c: &mut Criterion) {
    let text = create_test_text(500, 200);
    let doc = parse_text(&text);
    let options = ReflowOptions::new().with_words_per_line(15);

    c.bench_function("render_500x200_width15", |b| {
        b.iter(|| render::to_text(black_box(&doc), &options).unwrap());
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_reflow_small,
    bench_reflow_large,
    bench_render_only
);
criterion_main!(benches);
