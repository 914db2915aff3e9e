use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trust_modal::{
    eval::{FuzzyEvaluator, FuzzyFrame, StructuredEvaluator},
    model::KripkeModel,
    parse,
};

const FORMULA: &str = "[] a -> <> (b & ~c) | a -< <> b";

fn frame() -> FuzzyFrame {
    let agents = ["x", "y", "z", "w"];
    let mut frame = FuzzyFrame::new();
    for (i, from) in agents.iter().enumerate() {
        for (j, to) in agents.iter().enumerate() {
            frame.set_trust(from, to, ((i + j) % 5) as f64 / 4.0);
        }
        frame.set_degree("a", from, i as f64 / 4.0);
        frame.set_degree("b", from, 1.0 - i as f64 / 4.0);
        frame.set_degree("c", from, 0.5);
    }
    frame
}

fn model() -> KripkeModel {
    let size = 16;
    let relation = (0..size)
        .map(|i| (0..size).map(|j| i64::from((i * j) % 3 == 0)).collect())
        .collect();
    let mut builder = KripkeModel::builder(size).relation(relation);
    for (k, name) in ["a", "b", "c"].iter().enumerate() {
        builder = builder
            .valuation1(name, (0..size).map(|w| ((w + k) % 2) as i64).collect())
            .valuation2(name, (0..size).map(|w| ((w + k) % 3 == 0) as i64).collect());
    }
    builder.build().expect("valid model")
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse formula", |b| b.iter(|| parse(black_box(FORMULA))));
}

fn bench_evaluate(c: &mut Criterion) {
    let expression = parse(FORMULA).expect("valid formula");

    let frame = frame();
    let fuzzy = FuzzyEvaluator::new(&frame);
    c.bench_function("fuzzy evaluate", |b| {
        b.iter(|| fuzzy.evaluate(black_box(&expression), "x"))
    });

    let model = model();
    let structured = StructuredEvaluator::new(&model);
    c.bench_function("structured evaluate", |b| {
        b.iter(|| structured.evaluate(black_box(&expression), 0))
    });
}

// ベンチマークグループの定義
criterion_group!(benches, bench_parse, bench_evaluate);
criterion_main!(benches);
