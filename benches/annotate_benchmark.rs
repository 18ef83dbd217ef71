//! Benchmarks for rubify annotation performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks test annotation and rendering at various document sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rubify::annotate::{guard, wrap_ruby};
use rubify::{annotate, AnnotateOptions, ConvertOptions, Layout};

/// Creates a synthetic study document with the given number of section groups.
fn create_test_document(block_count: usize) -> String {
    let mut text = String::from("俺物語１話\n내이야기 1 화\n");

    for i in 0..block_count {
        text.push_str("줄거리\n");
        text.push_str(&format!(
            "第{}場面。猛男(たけお)は大和(やまと)に\n（こころ）を奪(うば)われる。\n",
            i
        ));
        text.push_str("🎧 しゃどーいんぐ表現\n");
        text.push_str("美味(おい)しそう！\n👉 이 케이크 달아 보여요.\n");
        text.push_str("💬フリートーク\n");
        text.push_str("好(す)きな食(た)べ物(もの)は？\n좋아하는 음식은?\n");
        text.push_str("📖 単語\n");
        text.push_str("主人公(しゅじんこう) — 주인공\n단어：気になる 궁금하다\n");
    }

    text
}

/// Benchmark the annotation pipeline per preset.
fn bench_annotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("annotate");

    for block_count in [10, 100, 500].iter() {
        let text = create_test_document(*block_count);
        group.throughput(Throughput::Bytes(text.len() as u64));

        for (name, options) in [
            ("plain", AnnotateOptions::plain()),
            ("sectioned", AnnotateOptions::sectioned()),
        ] {
            group.bench_with_input(BenchmarkId::new(name, block_count), &text, |b, text| {
                b.iter(|| annotate(black_box(text), &options));
            });
        }
    }

    group.finish();
}

/// Benchmark full HTML rendering, sequential versus parallel sections.
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_html");

    for block_count in [10, 100, 500].iter() {
        let text = create_test_document(*block_count);
        let parallel = ConvertOptions::default().with_layout(Layout::Sectioned);
        let sequential = parallel.clone().sequential();

        group.bench_with_input(
            BenchmarkId::new("parallel", block_count),
            &text,
            |b, text| {
                b.iter(|| rubify::render::render_html(black_box(text), &parallel));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("sequential", block_count),
            &text,
            |b, text| {
                b.iter(|| rubify::render::render_html(black_box(text), &sequential));
            },
        );
    }

    group.finish();
}

/// Benchmark the individual stages on a prepared block.
fn bench_stages(c: &mut Criterion) {
    let text = create_test_document(100);
    let annotated = annotate(&text, &AnnotateOptions::sectioned());

    c.bench_function("wrap_ruby", |b| {
        b.iter(|| wrap_ruby(black_box(&text)));
    });

    c.bench_function("guard", |b| {
        b.iter(|| guard(black_box(&annotated)));
    });
}

criterion_group!(benches, bench_annotate, bench_render, bench_stages);
criterion_main!(benches);
