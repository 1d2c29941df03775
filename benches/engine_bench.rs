use criterion::{black_box, criterion_group, criterion_main, Criterion};

use verso::board::Board;
use verso::protocol::snapshot::{encode_snapshot, parse_snapshot};

fn bench_legal_scan(c: &mut Criterion) {
    let board = Board::new(30).unwrap();
    c.bench_function("has_any_valid_move_30x30", |b| {
        b.iter(|| black_box(&board).has_any_valid_move())
    });
}

fn bench_make_move(c: &mut Criterion) {
    let board = Board::new(30).unwrap();
    c.bench_function("make_move_30x30", |b| {
        b.iter(|| {
            let mut scratch = board.clone();
            scratch.make_move(black_box(13), black_box(14)).unwrap()
        })
    });
}

fn bench_snapshot_encode(c: &mut Criterion) {
    let board = Board::new(30).unwrap();
    c.bench_function("encode_snapshot_30x30", |b| {
        b.iter(|| encode_snapshot(black_box(&board)))
    });
}

fn bench_snapshot_parse(c: &mut Criterion) {
    let text = encode_snapshot(&Board::new(30).unwrap());
    c.bench_function("parse_snapshot_30x30", |b| {
        b.iter(|| parse_snapshot(black_box(&text)).unwrap())
    });
}

fn bench_board_clone(c: &mut Criterion) {
    let board = Board::new(30).unwrap();
    c.bench_function("board_clone_30x30", |b| b.iter(|| black_box(&board).clone()));
}

criterion_group!(
    benches,
    bench_legal_scan,
    bench_make_move,
    bench_snapshot_encode,
    bench_snapshot_parse,
    bench_board_clone,
);
criterion_main!(benches);
