use criterion::{Criterion, criterion_group, criterion_main};
use markdown_pages_engine::{markdown_to_html, parsing::inline::parse_inline};
use std::hint::black_box;

fn sample_document(sections: usize) -> String {
    let mut doc = String::from("# Benchmark\n\n");
    for i in 0..sections {
        doc.push_str(&format!(
            "## Section {i}\n\nSome **bold** and _italic_ text with `code` and a [link](/page/{i}).\n\n- one\n- two\n- three\n\n1. first\n2. second\n\n> quoted line\n\n```\nlet x = {i};\n```\n\n"
        ));
    }
    doc
}

fn bench_document(c: &mut Criterion) {
    let small = sample_document(5);
    let large = sample_document(200);

    c.bench_function("markdown_to_html_small", |b| {
        b.iter(|| markdown_to_html(black_box(&small)).unwrap())
    });
    c.bench_function("markdown_to_html_large", |b| {
        b.iter(|| markdown_to_html(black_box(&large)).unwrap())
    });
}

fn bench_inline(c: &mut Criterion) {
    let line = "Text with ![img](/a.png), a [link](/b), `code`, **bold** and _italic_ words.";
    c.bench_function("parse_inline", |b| {
        b.iter(|| parse_inline(black_box(line)).unwrap())
    });
}

criterion_group!(benches, bench_document, bench_inline);
criterion_main!(benches);
