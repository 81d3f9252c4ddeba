use chatmark_engine::{RenderOptions, parse_document, render, render_with};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pulldown_cmark::{Parser, html};
mod common;

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(10);

    for size in [1, 10, 100] {
        let content = common::generate_chat_answer(size);

        group.bench_with_input(BenchmarkId::new("chatmark", size), &content, |b, md| {
            b.iter(|| std::hint::black_box(render(std::hint::black_box(md))));
        });

        group.bench_with_input(BenchmarkId::new("pulldown_cmark", size), &content, |b, md| {
            b.iter(|| {
                let parser = Parser::new(std::hint::black_box(md));
                let mut out = String::new();
                html::push_html(&mut out, parser);
                std::hint::black_box(out);
            });
        });
    }

    group.finish();
}

fn bench_escaping(c: &mut Criterion) {
    let mut group = c.benchmark_group("escaping");
    group.sample_size(10);

    let content = common::generate_chat_answer(100);
    let escaped = RenderOptions {
        escape_plain_text: true,
    };
    group.bench_function("default", |b| {
        b.iter(|| std::hint::black_box(render(std::hint::black_box(&content))));
    });
    group.bench_function("escape_plain_text", |b| {
        b.iter(|| std::hint::black_box(render_with(std::hint::black_box(&content), &escaped)));
    });

    group.finish();
}

fn bench_fence_extraction(c: &mut Criterion) {
    let content = common::generate_code_heavy(500);
    c.bench_function("parse_document_code_heavy", |b| {
        b.iter(|| std::hint::black_box(parse_document(std::hint::black_box(&content))));
    });
}

criterion_group!(benches, bench_render, bench_escaping, bench_fence_extraction);
criterion_main!(benches);
