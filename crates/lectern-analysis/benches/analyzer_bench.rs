//! Analyzer throughput benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lectern_analysis::{AnalysisInput, Analyzer};

fn article(words: usize) -> String {
    let mut body = String::from(
        "# Overview\nAccording to the documentation, a step by step walkthrough.\n```\nfn main() {}\n```\n",
    );
    for _ in 0..(words / 12) {
        body.push_str(
            "We implement the algorithm and measure the api latency under a realistic cache workload today. ",
        );
    }
    body
}

fn bench_analyze(c: &mut Criterion) {
    let analyzer = Analyzer::new();

    let long_input = AnalysisInput::new(
        "https://arxiv.org/abs/1234",
        "A tutorial on transformer architecture",
        article(5000),
    );
    c.bench_function("analyze_long_article", |b| {
        b.iter(|| analyzer.analyze(black_box(&long_input)))
    });

    let short_input = AnalysisInput::new(
        "https://example.com/gossip",
        "Shocking celebrity scandal",
        "fifty words or so",
    );
    c.bench_function("analyze_gate_rejection", |b| {
        b.iter(|| analyzer.analyze(black_box(&short_input)))
    });

    let thread_input = AnalysisInput::new(
        "https://x.com/u/status/1",
        "",
        "1/9 Why tail latency spikes under load: https://example.com/post plus commentary",
    );
    c.bench_function("analyze_microblog_thread", |b| {
        b.iter(|| analyzer.analyze(black_box(&thread_input)))
    });
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
