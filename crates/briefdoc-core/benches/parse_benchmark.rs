//! Benchmarks comparing briefdoc rendering vs pulldown-cmark
//!
//! Run with: cargo bench -p briefdoc-core

use briefdoc_core::parse;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pulldown_cmark::{Options, Parser as MdParser};

/// A content brief as the dashboard receives it.
const BRIEF_SAMPLE: &str = r#"# Content Brief: cuenta para autónomos sin comisiones

## Business Context
- **Product/Service**: Acme
- **Market**: ES, es
- **Brand Context**: Business accounts for freelancers

## Topic
**Keyword**: cuenta autónomo sin comisiones

## Objective
- **Content Category**: comparison
- **Buyer Stage**: mofu

## Competitive Context
Competitors to research and potentially mention:
- **Globex**
  - Domain: globex.es
  - Service: Online bank
- **Initech**
  - Domain: initech.com

## Search Intent & Funnel Stage
| Stage | Intent | Keyword Type |
|:------|:------:|-------------:|
| MOFU  | commercial | long-tail |

## Recommended Skills
**Primary → `/seo-article`**
Write a long-form comparison article.

- [x] Outline approved
- [ ] Draft written
- [ ] Published

---

> *Every line of the brief should earn its place.*
"#;

fn markdown_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(BRIEF_SAMPLE.len() as u64));

    group.bench_function("briefdoc", |b| {
        b.iter(|| {
            let doc = parse(black_box(BRIEF_SAMPLE));
            black_box(doc.blocks.len())
        })
    });

    group.bench_function("markdown_pulldown", |b| {
        b.iter(|| {
            let parser = MdParser::new_ext(black_box(BRIEF_SAMPLE), markdown_options());
            let events: Vec<_> = parser.collect();
            black_box(events.len())
        })
    });

    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for size in [1, 5, 10, 20].iter() {
        let content: String = BRIEF_SAMPLE.repeat(*size);
        group.throughput(Throughput::Bytes(content.len() as u64));

        group.bench_with_input(BenchmarkId::new("briefdoc", size), &content, |b, content| {
            b.iter(|| {
                let doc = parse(black_box(content));
                black_box(doc.blocks.len())
            })
        });

        group.bench_with_input(BenchmarkId::new("markdown", size), &content, |b, content| {
            b.iter(|| {
                let parser = MdParser::new_ext(black_box(content), markdown_options());
                let events: Vec<_> = parser.collect();
                black_box(events.len())
            })
        });
    }

    group.finish();
}

fn bench_inline_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");

    let line = "Use **#Ad** at the start, mention `deposit guarantee`, and keep **one** claim per `clip`.";
    let unterminated = "**never closed ` and more text with a stray ** marker `";

    group.bench_function("paired", |b| {
        b.iter(|| {
            let inlines = briefdoc_core::inline::parse_inlines(black_box(line));
            black_box(inlines.len())
        })
    });

    group.bench_function("unterminated", |b| {
        b.iter(|| {
            let inlines = briefdoc_core::inline::parse_inlines(black_box(unterminated));
            black_box(inlines.len())
        })
    });

    group.finish();
}

fn bench_plain_text(c: &mut Criterion) {
    let doc = parse(BRIEF_SAMPLE);
    c.bench_function("plain_text", |b| b.iter(|| black_box(doc.plain_text().len())));
}

criterion_group!(
    benches,
    bench_parse,
    bench_scaling,
    bench_inline_parsing,
    bench_plain_text
);
criterion_main!(benches);
