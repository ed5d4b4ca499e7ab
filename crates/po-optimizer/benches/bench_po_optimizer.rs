use criterion::{black_box, criterion_group, criterion_main, Criterion};
use po_optimizer::{tokenize, Optimizer, TokenMethod};
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn generate_prose(size_kb: usize) -> String {
    let sentences = [
        "I just wanted to ask if you could please help me create a comprehensive analysis of the data. ",
        "Due to the fact that the metrics changed, we basically need to review each and every report. ",
        "It is important to note that the team should make use of the existing tooling on a regular basis. ",
        "Please take into consideration the performance numbers before you reach a decision. ",
    ];
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let mut text = String::with_capacity(size_kb * 1024);
    while text.len() < size_kb * 1024 {
        text.push_str(sentences.choose(&mut rng).copied().unwrap_or(sentences[0]));
        text.push('\n');
    }
    text.truncate(size_kb * 1024);
    text
}

fn generate_mixed(size_kb: usize) -> String {
    let prose = generate_prose(size_kb / 2);
    let mut lines: Vec<String> = prose.lines().map(str::to_string).collect();
    for i in 0..lines.len() / 3 {
        lines.insert(
            i * 3,
            format!("const API_KEY_{i} = \"sk_test_{:0>24}\";", i),
        );
    }
    lines.join("\n")
}

fn bench_optimize(c: &mut Criterion) {
    let prose_1k = generate_prose(1);
    let prose_10k = generate_prose(10);
    let prose_100k = generate_prose(100);
    let mixed_10k = generate_mixed(10);
    let optimizer = Optimizer::new();

    c.bench_function("optimize_prose_1kb", |b| {
        b.iter(|| black_box(optimizer.optimize(black_box(&prose_1k))))
    });
    c.bench_function("optimize_prose_10kb", |b| {
        b.iter(|| black_box(optimizer.optimize(black_box(&prose_10k))))
    });
    c.bench_function("optimize_prose_100kb", |b| {
        b.iter(|| black_box(optimizer.optimize(black_box(&prose_100k))))
    });
    c.bench_function("optimize_mixed_10kb", |b| {
        b.iter(|| black_box(optimizer.optimize(black_box(&mixed_10k))))
    });
}

fn bench_tokenize(c: &mut Criterion) {
    let text = generate_prose(10);
    for method in TokenMethod::ALL {
        c.bench_function(&format!("tokenize_{}_10kb", method.name()), |b| {
            b.iter(|| black_box(tokenize::tokenize(black_box(&text), method)))
        });
    }
}

criterion_group!(benches, bench_optimize, bench_tokenize);
criterion_main!(benches);
