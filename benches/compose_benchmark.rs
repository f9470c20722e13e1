//! Benchmarks for ieee-docx layout and serialization.
//!
//! Run with: cargo bench
//!
//! These benchmarks run the pipeline on synthetic papers of growing size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ieee_docx::render::{document_xml, DocxOptions};
use ieee_docx::{compose, parse_str};

/// Creates a synthetic paper with the given number of sections.
fn create_test_paper(section_count: usize) -> String {
    let mut md = String::from("# Benchmark Paper\n\n");

    for i in 0..5 {
        md.push_str(&format!("**Author {}**\n*Institute {}*\n\n", i + 1, i + 1));
    }

    md.push_str("## Abstract\n\nWe measure layout throughput for $\\alpha$ papers.\n\n");
    md.push_str("## Keywords\n\nbenchmark, layout\n\n");

    for s in 0..section_count {
        md.push_str(&format!("## Section {}\n\n", s + 1));
        md.push_str("Body text with **bold** and *italic* words and $x_{i}^{2}$ notation.\n\n");
        md.push_str("$$\\frac{a+b}{c} \\leq \\sum_{i=1}^{n} \\alpha_i$$\n\n");
        md.push_str("### Details\n\n");
        md.push_str("- a bullet point\n- another bullet point\n\n");
        md.push_str("1. **Label** with the rest of the item.\n\n");
    }

    md.push_str("## References\n\n");
    for r in 0..section_count {
        md.push_str(&format!("[{}] A. Author, \"Paper {}\", 2024.\n", r + 1, r + 1));
    }

    md
}

/// Benchmark markdown parsing.
fn bench_parsing(c: &mut Criterion) {
    let paper = create_test_paper(20);

    c.bench_function("parse_20_sections", |b| {
        b.iter(|| parse_str(black_box(&paper)).unwrap());
    });
}

/// Benchmark layout composition at various sizes.
fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");

    for section_count in [1, 10, 50].iter() {
        let paper = parse_str(&create_test_paper(*section_count)).unwrap();

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| compose(black_box(&paper)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark document.xml serialization and the full package.
fn bench_serialize(c: &mut Criterion) {
    let layout = compose(&parse_str(&create_test_paper(20)).unwrap()).unwrap();

    c.bench_function("document_xml", |b| {
        b.iter(|| document_xml(black_box(&layout)).unwrap());
    });

    let options = DocxOptions::default();
    c.bench_function("docx_package", |b| {
        b.iter(|| ieee_docx::render::to_docx(black_box(&layout), &options).unwrap());
    });
}

criterion_group!(benches, bench_parsing, bench_compose, bench_serialize);
criterion_main!(benches);
