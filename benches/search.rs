//! 搜索性能基准：开局局面下不同深度的最佳走法计算

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cnchess_ai::{best_move, evaluate, generate_moves, Board, Side};

fn bench_generate_moves(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("generate_moves/start", |b| {
        b.iter(|| generate_moves(black_box(&board), Side::Down))
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("evaluate/start", |b| b.iter(|| evaluate(black_box(&board))));
}

fn bench_best_move(c: &mut Criterion) {
    for depth in [1u8, 2] {
        c.bench_function(&format!("best_move/start/depth_{}", depth), |b| {
            let mut board = Board::new();
            b.iter(|| best_move(black_box(&mut board), Side::Down, depth))
        });
    }
}

criterion_group!(benches, bench_generate_moves, bench_evaluate, bench_best_move);
criterion_main!(benches);
