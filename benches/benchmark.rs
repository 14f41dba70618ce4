use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tfidf_neighbors::{Config, Corpus, DocumentRecord, SimilarityModel};

const WORDS: &[&str] = &[
    "graph", "random", "walk", "spectral", "neural", "network", "gradient", "descent",
    "quantum", "error", "code", "markov", "chain", "kernel", "sparse", "matrix", "tensor",
    "convex", "bound", "learning", "model", "inference", "bayesian", "entropy", "signal",
];

// deterministic synthetic abstracts
fn synthetic_corpus(docs: usize, words_per_doc: usize) -> Corpus {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let records = (0..docs).map(|i| {
        let text = (0..words_per_doc)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                WORDS[(state % WORDS.len() as u64) as usize]
            })
            .collect::<Vec<_>>()
            .join(" ");
        DocumentRecord::new(format!("paper {i}"), text)
    });
    Corpus::from_records(records.collect::<Vec<_>>()).unwrap()
}

fn build(corpus: &Corpus, config: &Config) -> SimilarityModel {
    SimilarityModel::build_with(corpus, config).unwrap()
}

fn build_and_query_benchmark(c: &mut Criterion) {
    let corpus = synthetic_corpus(500, 120);

    let mut sequential = Config::default();
    sequential.matrix.parallel = false;
    let parallel = Config::default();

    c.bench_function("build_sequential", |b| {
        b.iter(|| build(black_box(&corpus), &sequential))
    });

    c.bench_function("build_parallel", |b| {
        b.iter(|| build(black_box(&corpus), &parallel))
    });

    let model = build(&corpus, &parallel);
    c.bench_function("neighbors", |b| {
        b.iter(|| model.neighbors(black_box(42), 5).unwrap())
    });

    c.bench_function("query_text", |b| {
        b.iter(|| model.query_text(black_box("sparse matrix learning"), 10).unwrap())
    });
}

criterion_group!(benches, build_and_query_benchmark);
criterion_main!(benches);
