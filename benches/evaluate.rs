//! Benchmarks for the exhaustive evaluator.
//!
//! Evaluation is exponential in the pile size (branching factor 3, no
//! memoization), so these runs track how quickly the cost grows across the
//! pile sizes the game actually deals.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use takeaway::core::{Pile, Role};
use takeaway::engine::{best_move, evaluate};

fn bench_evaluate(c: &mut Criterion) {
    for coins in [10u32, 15, 20] {
        c.bench_function(&format!("evaluate_{}", coins), |b| {
            b.iter(|| evaluate(black_box(Pile::new(coins)), black_box(Role::Ai)));
        });
    }
}

fn bench_best_move(c: &mut Criterion) {
    c.bench_function("best_move_10", |b| {
        b.iter(|| best_move(black_box(Pile::new(10))));
    });
}

criterion_group!(benches, bench_evaluate, bench_best_move);
criterion_main!(benches);
