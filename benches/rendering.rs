//! Benchmarks for the message-rewriting pipeline.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tably::config::{RenderOptions, TableStyle};
use tably::pipeline::rewrite;

fn bench_rewrite_unicode(c: &mut Criterion) {
    let text = include_str!("../tests/fixtures/chat.md");
    let opts = RenderOptions::default();
    c.bench_function("rewrite_unicode", |b| {
        b.iter(|| rewrite(black_box(text), &opts))
    });
}

fn bench_rewrite_cards(c: &mut Criterion) {
    let text = include_str!("../tests/fixtures/chat.md");
    let opts = RenderOptions {
        style: TableStyle::Cards,
        ..RenderOptions::default()
    };
    c.bench_function("rewrite_cards", |b| {
        b.iter(|| rewrite(black_box(text), &opts))
    });
}

criterion_group!(benches, bench_rewrite_unicode, bench_rewrite_cards);
criterion_main!(benches);
