//! Criterion benchmarks for Sarissa analysis.
//!
//! Covers the main operations on analysis chains:
//! - Text analysis through the default chain
//! - Parallel batch analysis
//! - Dumping and loading serialized forms
//! - Structural comparison

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use sarissa_analysis::analysis::analyzer::{Analyzer, PolyAnalyzer};
use sarissa_analysis::analysis::batch::analyze_batch;
use sarissa_analysis::analysis::registry;
use sarissa_analysis::analysis::serialized::SerializedForm;
use std::hint::black_box;

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = [
        "Searching",
        "engines",
        "indexed",
        "documents",
        "quickly",
        "running",
        "analyzers",
        "tokenization",
        "stemming",
        "normalization",
        "languages",
        "relevance",
        "queries",
        "matching",
        "phrases",
        "storage",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 50 + (i % 100); // Variable length documents
        let doc: Vec<&str> = (0..doc_length)
            .map(|j| words[(i * 7 + j * 13) % words.len()])
            .collect();
        documents.push(doc.join(" "));
    }
    documents
}

/// Benchmark text analysis.
fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");

    let analyzer = PolyAnalyzer::new("en", None).unwrap();
    let texts = generate_test_documents(1000);

    // Single document analysis
    group.bench_function("analyze_single_document", |b| {
        b.iter(|| {
            let tokens: Vec<_> = analyzer.analyze(black_box(&texts[0])).unwrap().collect();
            black_box(tokens)
        })
    });

    // Sequential document analysis
    group.throughput(Throughput::Elements(1000));
    group.bench_function("analyze_documents_sequential", |b| {
        b.iter(|| {
            for text in texts.iter() {
                let tokens: Vec<_> = analyzer.analyze(black_box(text)).unwrap().collect();
                black_box(tokens);
            }
        })
    });

    // Parallel batch analysis
    group.bench_function("analyze_documents_batch", |b| {
        b.iter(|| black_box(analyze_batch(&analyzer, black_box(texts.as_slice())).unwrap()))
    });

    group.finish();
}

/// Benchmark dump, load and equality.
fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialization");

    let analyzer = PolyAnalyzer::new("en", None).unwrap();
    let nested = PolyAnalyzer::new(
        "es",
        Some(vec![
            std::sync::Arc::new(PolyAnalyzer::new("es", None).unwrap()),
            std::sync::Arc::new(PolyAnalyzer::new("en", None).unwrap()),
        ]),
    )
    .unwrap();
    let dump = analyzer.dump();
    let json = dump.to_json().unwrap();

    group.bench_function("dump", |b| b.iter(|| black_box(analyzer.dump())));

    group.bench_function("load", |b| {
        b.iter(|| black_box(registry::load(black_box(&dump)).unwrap()))
    });

    group.bench_function("load_from_json", |b| {
        b.iter(|| {
            let form = SerializedForm::from_json(black_box(&json)).unwrap();
            black_box(registry::load(&form).unwrap())
        })
    });

    group.bench_function("round_trip_nested", |b| {
        b.iter(|| {
            let loaded = registry::load(&nested.dump()).unwrap();
            black_box(nested.equals(loaded.as_ref()))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_text_analysis, bench_serialization);

criterion_main!(benches);
